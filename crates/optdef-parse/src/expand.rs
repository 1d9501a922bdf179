use crate::token::{is_long_flag, is_option_like};

/// Expand combined short flags (`-abc` => `-a -b -c`).
///
/// Long flags, negative numbers (`-5`) and a lone `-` pass through unchanged.
/// Returns a new sequence; the input is not modified.
pub fn expand_short_flags(arguments: &[String]) -> Vec<String> {
    let mut expanded = Vec::with_capacity(arguments.len());
    for arg in arguments {
        if is_option_like(arg) && !is_long_flag(arg) {
            expanded.extend(arg.chars().skip(1).map(|c| format!("-{c}")));
        } else {
            expanded.push(arg.clone());
        }
    }
    expanded
}
