use indexmap::IndexMap;

use crate::error::{ParseError, ParseResult};
use crate::metadata::{FlagMetadata, ValueRule};
use crate::result::OptionValue;
use crate::token::is_option_like;

/// Assign a value to every flag in `metadata` by scanning `arguments`.
///
/// `arguments` should already be expanded with
/// [`expand_short_flags`](crate::expand_short_flags). Tokens that are not
/// defined flags are ignored. A value flag takes the next token verbatim
/// unless that token is option-like (negative numbers are accepted). When a
/// flag occurs more than once the last occurrence wins.
///
/// After the scan, presence flags that never occurred are `false` and value
/// flags that never occurred are [`OptionValue::Absent`].
pub fn scan_options(
    arguments: &[String],
    metadata: &FlagMetadata,
) -> ParseResult<IndexMap<String, OptionValue>> {
    let mut assigned: IndexMap<&str, Option<OptionValue>> =
        metadata.iter().map(|(flag, _)| (flag, None)).collect();

    for (idx, arg) in arguments.iter().enumerate() {
        let Some(rule) = metadata.rule(arg) else {
            continue;
        };
        let value = match rule {
            ValueRule::Presence => OptionValue::Bool(true),
            ValueRule::Value => match arguments.get(idx + 1) {
                Some(next) if !is_option_like(next) => OptionValue::Str(next.clone()),
                _ => return Err(ParseError::MissingValue(arg.clone())),
            },
        };
        if let Some(slot) = assigned.get_mut(arg.as_str()) {
            *slot = Some(value);
        }
    }

    Ok(metadata
        .iter()
        .map(|(flag, rule)| {
            let value = assigned.swap_remove(flag).flatten().unwrap_or(match rule {
                ValueRule::Presence => OptionValue::Bool(false),
                ValueRule::Value => OptionValue::Absent,
            });
            (flag.to_string(), value)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::expand::expand_short_flags;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn metadata(defs: &[(&str, ValueRule)]) -> FlagMetadata {
        let mut m = FlagMetadata::new();
        for (flag, rule) in defs {
            m.insert(*flag, *rule);
        }
        m
    }

    #[test]
    fn assigns_presence_and_values() {
        let m = metadata(&[("-v", ValueRule::Presence), ("-o", ValueRule::Value)]);
        let values = scan_options(&tokens(&["-v", "-o", "out.txt", "file.txt"]), &m).unwrap();
        assert_eq!(values["-v"], OptionValue::Bool(true));
        assert_eq!(values["-o"], OptionValue::Str("out.txt".to_string()));
    }

    #[test]
    fn missing_flags_resolve_to_false_or_absent() {
        let m = metadata(&[("-v", ValueRule::Presence), ("--out", ValueRule::Value)]);
        let values = scan_options(&tokens(&["file.txt"]), &m).unwrap();
        assert_eq!(values["-v"], OptionValue::Bool(false));
        assert_eq!(values["--out"], OptionValue::Absent);
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn result_follows_definition_order() {
        let m = metadata(&[
            ("-b", ValueRule::Presence),
            ("-a", ValueRule::Presence),
            ("-c", ValueRule::Value),
        ]);
        let values = scan_options(&tokens(&["-a", "-c", "x", "-b"]), &m).unwrap();
        let keys: Vec<_> = values.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["-b", "-a", "-c"]);
    }

    #[test]
    fn negative_number_is_a_value() {
        let m = metadata(&[("-n", ValueRule::Value)]);
        let values = scan_options(&tokens(&["-n", "-5"]), &m).unwrap();
        assert_eq!(values["-n"].as_str(), Some("-5"));
    }

    #[test]
    fn lone_dash_is_a_value() {
        let m = metadata(&[("-i", ValueRule::Value)]);
        let values = scan_options(&tokens(&["-i", "-"]), &m).unwrap();
        assert_eq!(values["-i"].as_str(), Some("-"));
    }

    #[test]
    fn empty_string_value_is_not_absent() {
        let m = metadata(&[("-o", ValueRule::Value)]);
        let values = scan_options(&tokens(&["-o", ""]), &m).unwrap();
        assert_eq!(values["-o"], OptionValue::Str(String::new()));
    }

    #[test]
    fn value_flag_at_end_is_missing_value() {
        let m = metadata(&[("-o", ValueRule::Value)]);
        let err = scan_options(&tokens(&["-o"]), &m).unwrap_err();
        assert_eq!(err, ParseError::MissingValue("-o".to_string()));
    }

    #[test]
    fn value_flag_followed_by_flag_is_missing_value() {
        let m = metadata(&[("-o", ValueRule::Value), ("-v", ValueRule::Presence)]);
        let err = scan_options(&tokens(&["-o", "-v"]), &m).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingValue);

        let err = scan_options(&tokens(&["-o", "--undefined"]), &m).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingValue);
    }

    #[test]
    fn last_occurrence_wins() {
        let m = metadata(&[("-o", ValueRule::Value)]);
        let values = scan_options(&tokens(&["-o", "a", "-o", "b"]), &m).unwrap();
        assert_eq!(values["-o"].as_str(), Some("b"));
    }

    #[test]
    fn unknown_flags_are_ignored() {
        let m = metadata(&[("-v", ValueRule::Presence)]);
        let values = scan_options(&tokens(&["-x", "--other", "-v"]), &m).unwrap();
        assert_eq!(values["-v"].as_bool(), Some(true));
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn clustering_does_not_change_values() {
        let m = metadata(&[("-a", ValueRule::Presence), ("-b", ValueRule::Value)]);
        let clustered = scan_options(&expand_short_flags(&tokens(&["-ab", "value"])), &m).unwrap();
        let separate = scan_options(&tokens(&["-a", "-b", "value"]), &m).unwrap();
        assert_eq!(clustered, separate);
        assert_eq!(clustered["-b"].as_str(), Some("value"));
    }
}
