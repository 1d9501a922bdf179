use crate::config::ParserConfig;
use crate::error::{ParseError, ParseResult};

/// Definitions, arguments, output location.
pub const INVOCATION_GROUPS: usize = 3;

/// Split `tokens` into exactly `count` groups at each `separator`.
///
/// Once `count - 1` separators have been seen, the rest of the list (further
/// separators included) becomes the final group. Groups may be empty.
pub fn group<'a>(
    tokens: &'a [String],
    separator: &str,
    count: usize,
) -> ParseResult<Vec<&'a [String]>> {
    if count == 0 {
        return Err(ParseError::Structure("no argument groups expected".to_string()));
    }

    let mut groups: Vec<&'a [String]> = Vec::with_capacity(count);
    let mut start = 0usize;
    for (idx, token) in tokens.iter().enumerate() {
        if groups.len() + 1 == count {
            break;
        }
        if token == separator {
            groups.push(&tokens[start..idx]);
            start = idx + 1;
        }
    }
    groups.push(&tokens[start..]);

    if groups.len() != count {
        return Err(ParseError::Structure(format!(
            "expected {count} groups separated by '{separator}', found {}",
            groups.len()
        )));
    }
    Ok(groups)
}

/// A process token list split into its three groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation<'a> {
    /// Flag definitions (`FLAG [RULE]...`).
    pub definitions: &'a [String],
    /// Arguments to parse.
    pub arguments: &'a [String],
    /// Where the result is written.
    pub output: &'a str,
}

impl<'a> Invocation<'a> {
    /// Group `tokens` as `DEFINITIONS -- ARGUMENTS -- OUTPUT`.
    ///
    /// The output group must hold exactly one token.
    pub fn from_tokens(tokens: &'a [String], config: &ParserConfig) -> ParseResult<Self> {
        let groups = group(tokens, &config.separator, INVOCATION_GROUPS)?;
        let &[definitions, arguments, output] = groups.as_slice() else {
            return Err(ParseError::Structure(format!(
                "expected {INVOCATION_GROUPS} groups, found {}",
                groups.len()
            )));
        };

        let output = match output {
            [single] => single.as_str(),
            [] => {
                return Err(ParseError::Structure(
                    "missing output location".to_string(),
                ));
            }
            many => {
                return Err(ParseError::Structure(format!(
                    "expected a single output location, found {} tokens",
                    many.len()
                )));
            }
        };

        Ok(Self {
            definitions,
            arguments,
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn splits_into_requested_groups() {
        let argv = tokens(&["-v", "--", "-v", "file", "--", "out.env"]);
        let groups = group(&argv, "--", 3).unwrap();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0], &argv[0..1]);
        assert_eq!(groups[1], &argv[2..4]);
        assert_eq!(groups[2], &argv[5..]);
    }

    #[test]
    fn empty_groups_are_allowed() {
        let argv = tokens(&["--", "--"]);
        let groups = group(&argv, "--", 3).unwrap();
        assert!(groups.iter().all(|g| g.is_empty()));
    }

    #[test]
    fn extra_separators_land_in_final_group() {
        let argv = tokens(&["a", "--", "b", "--", "c", "--", "d"]);
        let groups = group(&argv, "--", 3).unwrap();
        assert_eq!(groups[2], &tokens(&["c", "--", "d"])[..]);
    }

    #[test]
    fn too_few_separators_is_structure_error() {
        let argv = tokens(&["-v", "-o", "value"]);
        let err = group(&argv, "--", 3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structure);

        let argv = tokens(&["-v", "--", "file"]);
        let err = group(&argv, "--", 3).unwrap_err();
        assert!(err.to_string().contains("found 2"));
    }

    #[test]
    fn zero_groups_always_fails() {
        let err = group(&[], "--", 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structure);
    }

    #[test]
    fn invocation_extracts_output() {
        let argv = tokens(&["-o", "value", "--", "-o", "x", "--", "out.env"]);
        let inv = Invocation::from_tokens(&argv, &ParserConfig::default()).unwrap();
        assert_eq!(inv.definitions, &tokens(&["-o", "value"])[..]);
        assert_eq!(inv.arguments, &tokens(&["-o", "x"])[..]);
        assert_eq!(inv.output, "out.env");
    }

    #[test]
    fn invocation_requires_single_output() {
        let config = ParserConfig::default();

        let argv = tokens(&["-v", "--", "-v", "--"]);
        let err = Invocation::from_tokens(&argv, &config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structure);
        assert!(err.to_string().contains("missing output location"));

        let argv = tokens(&["-v", "--", "-v", "--", "a", "b"]);
        let err = Invocation::from_tokens(&argv, &config).unwrap_err();
        assert!(err.to_string().contains("found 2 tokens"));
    }

    #[test]
    fn invocation_honors_custom_separator() {
        let config = ParserConfig::new().separator("::");
        let argv = tokens(&["-v", "::", "--", "-v", "::", "out.env"]);
        let inv = Invocation::from_tokens(&argv, &config).unwrap();
        assert_eq!(inv.arguments, &tokens(&["--", "-v"])[..]);
    }
}
