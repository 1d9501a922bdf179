use indexmap::IndexMap;

use crate::metadata::ValueRule;

/// Token separating the definition, argument and output groups.
pub const DEFAULT_SEPARATOR: &str = "--";

/// Tag assumed when a flag definition is not followed by one.
pub const DEFAULT_TAG: &str = "flag";

/// Parser settings that would otherwise be global constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    pub separator: String,
    /// Recognized rule tags, keyed by lower-case name.
    pub tags: IndexMap<String, ValueRule>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            tags: default_tags(),
        }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different group separator.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Accept an additional tag name for `rule`.
    ///
    /// Tags are matched case-insensitively, so the name is stored lower-cased.
    pub fn tag(mut self, name: impl AsRef<str>, rule: ValueRule) -> Self {
        self.tags.insert(name.as_ref().to_lowercase(), rule);
        self
    }
}

/// The `flag` and `value` tags.
pub fn default_tags() -> IndexMap<String, ValueRule> {
    let mut tags = IndexMap::new();
    tags.insert(DEFAULT_TAG.to_string(), ValueRule::Presence);
    tags.insert("value".to_string(), ValueRule::Value);
    tags
}
