use anyhow::{Context, Result, bail};
use optdef_parse::{ARG_INDEX_KEY, OptionResult, OptionValue};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::config::OutputFormat;

/// Rendering of absent values and a missing `ARG_INDEX`.
pub const NULL_MARKER: &str = "null";

/// Convert a flag to a variable name: leading dashes removed, inner dashes
/// replaced with underscores (`--dry-run` => `dry_run`).
pub fn variable_name(flag: &str) -> String {
    flag.trim_start_matches('-').replace('-', "_")
}

/// One output entry, borrowed from an [`OptionResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry<'a> {
    Bool(bool),
    Str(&'a str),
    Index(usize),
    Null,
}

/// Entries in output order: flags in definition order, then `ARG_INDEX`.
///
/// Fails if two flags, or a flag and `ARG_INDEX`, share a variable name.
fn entries(result: &OptionResult) -> Result<Vec<(String, Entry<'_>)>> {
    let mut owners: HashMap<String, &str> = HashMap::new();
    owners.insert(ARG_INDEX_KEY.to_string(), ARG_INDEX_KEY);

    let mut out: Vec<(String, Entry<'_>)> = Vec::with_capacity(result.len() + 1);
    for (flag, value) in result.iter() {
        let name = variable_name(flag);
        if let Some(owner) = owners.insert(name.clone(), flag) {
            if owner == ARG_INDEX_KEY {
                bail!("flag {flag} maps to the reserved variable {ARG_INDEX_KEY}");
            }
            bail!("flags {owner} and {flag} both map to variable {name}");
        }
        let entry = match value {
            OptionValue::Bool(b) => Entry::Bool(*b),
            OptionValue::Str(s) => Entry::Str(s.as_str()),
            OptionValue::Absent => Entry::Null,
        };
        out.push((name, entry));
    }

    let index = result.arg_index().map_or(Entry::Null, Entry::Index);
    out.push((ARG_INDEX_KEY.to_string(), index));
    Ok(out)
}

/// Render `NAME=VALUE` lines.
pub fn render_shell(result: &OptionResult) -> Result<String> {
    let mut out = String::new();
    for (name, entry) in entries(result)? {
        let value: Cow<'_, str> = match entry {
            Entry::Bool(b) => Cow::Borrowed(if b { "true" } else { "false" }),
            Entry::Str(s) => shell_quote(s),
            Entry::Index(idx) => Cow::Owned(idx.to_string()),
            Entry::Null => Cow::Borrowed(NULL_MARKER),
        };
        out.push_str(&format!("{name}={value}\n"));
    }
    Ok(out)
}

/// Leave shell-safe words alone, single-quote everything else.
fn shell_quote(raw: &str) -> Cow<'_, str> {
    let safe = !raw.is_empty()
        && raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_-./:,+@%=".contains(c));
    if safe {
        Cow::Borrowed(raw)
    } else {
        Cow::Owned(format!("'{}'", raw.replace('\'', r"'\''")))
    }
}

struct JsonEntries<'a>(&'a [(String, Entry<'a>)]);

impl Serialize for JsonEntries<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, entry) in self.0 {
            match entry {
                Entry::Bool(b) => map.serialize_entry(name, b)?,
                Entry::Str(s) => map.serialize_entry(name, s)?,
                Entry::Index(idx) => map.serialize_entry(name, idx)?,
                Entry::Null => map.serialize_entry(name, &())?,
            }
        }
        map.end()
    }
}

/// Render a pretty-printed JSON object with a trailing newline.
pub fn render_json(result: &OptionResult) -> Result<String> {
    let entries = entries(result)?;
    let mut out = serde_json::to_string_pretty(&JsonEntries(&entries))
        .context("failed to serialize options")?;
    out.push('\n');
    Ok(out)
}

pub fn render(result: &OptionResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Shell => render_shell(result),
        OutputFormat::Json => render_json(result),
    }
}

/// Write `result` to `path`.
///
/// The output is fully rendered before `path` is opened. The path is opened
/// for writing in place, so symlinks are followed and special files such as
/// `/dev/stdout` or a FIFO receive the output.
pub fn write_config(result: &OptionResult, path: &Path, format: OutputFormat) -> Result<()> {
    let contents = render(result, format)?;
    fs::write(path, contents.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))
}
