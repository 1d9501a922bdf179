//! Flag-definition driven option parsing.
//!
//! A caller describes its flags as a flat token list and hands over the
//! arguments to parse; the parser answers with a value for every defined flag
//! and the position of the first positional argument:
//!
//! ```
//! use optdef_parse::{OptionValue, ParserConfig, parse};
//!
//! let definitions = ["-v", "-o", "value"].map(String::from);
//! let arguments = ["-v", "-o", "out.txt", "file.txt"].map(String::from);
//!
//! let result = parse(&definitions, &arguments, &ParserConfig::default()).unwrap();
//! assert_eq!(result.get("-v"), Some(&OptionValue::Bool(true)));
//! assert_eq!(result.get("-o"), Some(&OptionValue::Str("out.txt".into())));
//! assert_eq!(result.arg_index(), Some(4));
//! ```
//!
//! The stages are exposed separately:
//! - [`group`] / [`Invocation`]: split a token list at `--`
//! - [`read_metadata`]: `FLAG [TAG]...` definitions into [`FlagMetadata`]
//! - [`expand_short_flags`]: `-abc` into `-a -b -c`
//! - [`scan_options`]: assign flag values
//! - [`locate_first_argument`]: find the first positional argument
//!
//! The crate does no I/O.

mod config;
mod error;
mod expand;
mod group;
mod locate;
mod metadata;
mod result;
mod scan;

pub mod token;

pub use config::{DEFAULT_SEPARATOR, DEFAULT_TAG, ParserConfig, default_tags};
pub use error::{ErrorKind, ParseError, ParseResult};
pub use expand::expand_short_flags;
pub use group::{INVOCATION_GROUPS, Invocation, group};
pub use locate::locate_first_argument;
pub use metadata::{FlagMetadata, ValueRule, read_metadata};
pub use result::{ARG_INDEX_KEY, OptionResult, OptionValue};
pub use scan::scan_options;

/// Parse `arguments` against the flag `definitions`.
///
/// Definitions are fully validated before any argument is looked at.
pub fn parse(
    definitions: &[String],
    arguments: &[String],
    config: &ParserConfig,
) -> ParseResult<OptionResult> {
    let metadata = read_metadata(definitions, &config.tags)?;
    let expanded = expand_short_flags(arguments);
    let values = scan_options(&expanded, &metadata)?;
    let first_argument = locate_first_argument(arguments, &metadata);
    Ok(OptionResult::new(values, first_argument))
}
