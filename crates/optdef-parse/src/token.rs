//! Token classification predicates.
//!
//! Every "is this an option?" decision in the parser goes through one of these
//! helpers so the policy lives in one place.

/// Whether `token` names an option at all (first character is `-`).
pub fn is_flag(token: &str) -> bool {
    token.starts_with('-')
}

/// Whether `token` is a long flag (`--name`).
pub fn is_long_flag(token: &str) -> bool {
    token.starts_with("--")
}

/// Whether `token` is a single short flag (`-x`).
pub fn is_short_flag(token: &str) -> bool {
    let mut chars = token.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some('-'), Some(c), None) if c != '-'
    )
}

/// Whether `token` is a dash followed by a digit (`-5`, `-0.25`).
///
/// Such tokens are values, never flags.
pub fn looks_like_negative_number(token: &str) -> bool {
    second_char(token).is_some_and(|c| c.is_ascii_digit())
}

/// Whether `token` is shaped like an option: a dash followed by a second
/// character that is not a digit.
///
/// A lone `-` is not option-like (it conventionally names stdin).
pub fn is_option_like(token: &str) -> bool {
    second_char(token).is_some() && !looks_like_negative_number(token)
}

/// Whether `token` may appear as a flag in the definition group: a long flag
/// or a short flag (`-1` included).
pub fn is_valid_flag_definition(token: &str) -> bool {
    is_long_flag(token) || is_short_flag(token)
}

/// Second character of a dash-prefixed token.
fn second_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match chars.next() {
        Some('-') => chars.next(),
        _ => None,
    }
}
