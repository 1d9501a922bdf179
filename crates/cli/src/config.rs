use anyhow::{Result, bail};
use std::path::Path;
use std::str::FromStr;

/// Environment variable selecting the output format.
pub const FORMAT_ENV: &str = "OPTDEF_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `NAME=VALUE` lines that a POSIX shell can `source`.
    Shell,
    /// A single JSON object.
    Json,
}

impl OutputFormat {
    /// Pick a format from the output file name: `.json` gets JSON, anything
    /// else gets shell.
    pub fn for_path(path: &Path) -> Self {
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json { Self::Json } else { Self::Shell }
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "shell" | "sh" => Ok(Self::Shell),
            "json" => Ok(Self::Json),
            other => bail!("{FORMAT_ENV} expects shell|json, got '{other}'"),
        }
    }
}

/// Settings read from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Explicit output format; `None` means infer from the output path.
    pub format: Option<OutputFormat>,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let format = match lookup(FORMAT_ENV) {
            Some(raw) if !raw.trim().is_empty() => Some(raw.parse()?),
            _ => None,
        };
        Ok(Self { format })
    }

    /// The format to write `output` with.
    pub fn format_for(&self, output: &Path) -> OutputFormat {
        self.format.unwrap_or_else(|| OutputFormat::for_path(output))
    }
}
