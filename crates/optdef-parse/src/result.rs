use indexmap::IndexMap;

/// Name of the reserved entry holding the first positional argument's
/// one-based index.
pub const ARG_INDEX_KEY: &str = "ARG_INDEX";

/// The resolved value of one flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// A presence flag; `true` if it occurred.
    Bool(bool),
    /// The value consumed by a value flag.
    Str(String),
    /// A value flag that did not occur.
    Absent,
}

impl OptionValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// Every defined flag's value plus the position of the first positional
/// argument.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionResult {
    values: IndexMap<String, OptionValue>,
    first_argument: Option<usize>,
}

impl OptionResult {
    pub fn new(values: IndexMap<String, OptionValue>, first_argument: Option<usize>) -> Self {
        Self {
            values,
            first_argument,
        }
    }

    pub fn get(&self, flag: &str) -> Option<&OptionValue> {
        self.values.get(flag)
    }

    /// Flag values in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.values.iter().map(|(flag, value)| (flag.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Zero-based index of the first positional argument.
    pub fn first_argument(&self) -> Option<usize> {
        self.first_argument
    }

    /// The reserved [`ARG_INDEX_KEY`] entry: the one-based index of the first
    /// positional argument, `None` if there is none.
    pub fn arg_index(&self) -> Option<usize> {
        self.first_argument.map(|idx| idx + 1)
    }
}
