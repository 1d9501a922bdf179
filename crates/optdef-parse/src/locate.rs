use crate::metadata::FlagMetadata;
use crate::token::is_flag;

/// Zero-based index of the first positional argument in `arguments`.
///
/// A positional argument does not start with `-` and is not the value of a
/// preceding value flag. The first token has no predecessor and qualifies
/// whenever it does not start with `-`.
///
/// This works on the unexpanded arguments: a cluster like `-ab` is an option
/// token as a whole, and is not a defined value flag, so the token after it
/// counts as positional.
pub fn locate_first_argument(arguments: &[String], metadata: &FlagMetadata) -> Option<usize> {
    arguments.iter().enumerate().position(|(idx, arg)| {
        if is_flag(arg) {
            return false;
        }
        match idx.checked_sub(1).map(|prev| arguments[prev].as_str()) {
            Some(prev) => !metadata.takes_value(prev),
            None => true,
        }
    })
}
