use indexmap::IndexMap;

use crate::config::DEFAULT_TAG;
use crate::error::{ParseError, ParseResult};
use crate::token::{is_flag, is_valid_flag_definition};

/// How a flag's value is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueRule {
    /// The value is whether the flag occurred.
    Presence,
    /// The flag consumes the next argument as its value.
    Value,
}

/// Defined flags and their rules, in first-definition order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagMetadata {
    rules: IndexMap<String, ValueRule>,
}

impl FlagMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define `flag`. A redefinition replaces the rule but keeps the original
    /// position.
    pub fn insert(&mut self, flag: impl Into<String>, rule: ValueRule) {
        self.rules.insert(flag.into(), rule);
    }

    pub fn rule(&self, flag: &str) -> Option<ValueRule> {
        self.rules.get(flag).copied()
    }

    pub fn contains(&self, flag: &str) -> bool {
        self.rules.contains_key(flag)
    }

    /// Whether `flag` is defined with [`ValueRule::Value`].
    pub fn takes_value(&self, flag: &str) -> bool {
        self.rule(flag) == Some(ValueRule::Value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ValueRule)> {
        self.rules.iter().map(|(flag, rule)| (flag.as_str(), *rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Read flag definitions (`FLAG [TAG]...`) into [`FlagMetadata`].
///
/// A flag followed by a non-flag token takes that token (case-folded) as its
/// tag; a flag followed by another flag, or at the end of the group, defaults
/// to the `flag` tag. Tokens that are not flags are skipped, so a consumed
/// tag is never read as a definition of its own.
pub fn read_metadata(
    definitions: &[String],
    tags: &IndexMap<String, ValueRule>,
) -> ParseResult<FlagMetadata> {
    let mut metadata = FlagMetadata::new();

    for (idx, flag) in definitions.iter().enumerate() {
        if !is_flag(flag) {
            continue;
        }
        if !is_valid_flag_definition(flag) {
            return Err(ParseError::InvalidFlag(flag.clone()));
        }

        let tag = match definitions.get(idx + 1) {
            Some(next) if !is_flag(next) => next.to_lowercase(),
            _ => DEFAULT_TAG.to_string(),
        };
        let Some(&rule) = tags.get(&tag) else {
            return Err(ParseError::InvalidTag(tag));
        };

        metadata.insert(flag.clone(), rule);
    }

    Ok(metadata)
}
