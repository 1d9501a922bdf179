use std::fmt;

/// The category of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The token list did not split into the expected groups.
    Structure,
    /// A flag in the definition group is malformed.
    InvalidFlag,
    /// A rule tag in the definition group is not recognized.
    InvalidTag,
    /// A value-taking flag has no value after it.
    MissingValue,
}

/// A fatal parsing error.
///
/// All variants abort the whole run. The payload is the offending token, or
/// for [`ParseError::Structure`] a short description of what was wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Structure(String),
    InvalidFlag(String),
    InvalidTag(String),
    MissingValue(String),
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Structure(_) => ErrorKind::Structure,
            Self::InvalidFlag(_) => ErrorKind::InvalidFlag,
            Self::InvalidTag(_) => ErrorKind::InvalidTag,
            Self::MissingValue(_) => ErrorKind::MissingValue,
        }
    }

    /// The offending token or structural detail.
    pub fn message(&self) -> &str {
        match self {
            Self::Structure(msg)
            | Self::InvalidFlag(msg)
            | Self::InvalidTag(msg)
            | Self::MissingValue(msg) => msg.as_str(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structure(detail) => write!(f, "invalid option parsing separation: {detail}"),
            Self::InvalidFlag(flag) => write!(f, "invalid option parsing flag ({flag})"),
            Self::InvalidTag(tag) => write!(f, "invalid option parsing tag ({tag})"),
            Self::MissingValue(flag) => write!(f, "no option value ({flag})"),
        }
    }
}

impl std::error::Error for ParseError {}

pub type ParseResult<T> = Result<T, ParseError>;
