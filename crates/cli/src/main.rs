mod config;
mod output;

use anyhow::{Result, anyhow};
use clap::Parser;
use optdef_parse::{Invocation, ParserConfig};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::Settings;

/// Only used to render `--help` and `--version`; the tool has no options of
/// its own and every other token list goes to the option parser untouched.
#[derive(Parser)]
#[command(name = "optdef")]
#[command(
    version,
    about = "Parse script options against flag definitions and save them as a config file",
    long_about = None
)]
#[command(override_usage = "optdef (FLAG [RULE])... -- PARSE_ARGS... -- OUTPUT")]
#[command(after_help = "\
Arguments:
  FLAG        An option flag to look for in PARSE_ARGS (-x or --name)
  RULE        How FLAG gets its value (optional):
                flag  (default) true if FLAG occurs, false otherwise
                value           the argument after FLAG, null if FLAG is missing
  PARSE_ARGS  The arguments to parse
  OUTPUT      File to write; `.json` gets JSON, anything else NAME=VALUE lines

Environment:
  OPTDEF_FORMAT  Force the output format (shell|json)
  RUST_LOG       Log filter for diagnostics on stderr (default: warn)")]
struct Cli {}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let argv = collect_args()?;
    if is_meta_request(&argv) {
        // Prints help/version and exits.
        Cli::parse_from(std::iter::once("optdef").chain(argv.iter().map(String::as_str)));
        return Ok(());
    }

    let settings = Settings::from_env()?;
    let parser_config = ParserConfig::default();

    let invocation = Invocation::from_tokens(&argv, &parser_config)?;
    tracing::debug!(
        definitions = invocation.definitions.len(),
        arguments = invocation.arguments.len(),
        output = invocation.output,
        "grouped tokens"
    );

    let result = optdef_parse::parse(invocation.definitions, invocation.arguments, &parser_config)?;
    tracing::debug!(
        flags = result.len(),
        first_argument = ?result.first_argument(),
        "parsed options"
    );

    let output_path = Path::new(invocation.output);
    let format = settings.format_for(output_path);
    tracing::debug!(?format, "selected output format");

    output::write_config(&result, output_path, format)?;
    tracing::info!(path = %output_path.display(), "wrote option config");
    Ok(())
}

fn collect_args() -> Result<Vec<String>> {
    std::env::args_os()
        .skip(1)
        .map(|arg| {
            arg.into_string()
                .map_err(|raw| anyhow!("argument is not valid UTF-8: {}", raw.to_string_lossy()))
        })
        .collect()
}

/// A lone help/version flag can never be a valid invocation, which needs two
/// separators.
fn is_meta_request(argv: &[String]) -> bool {
    matches!(
        argv,
        [only] if matches!(only.as_str(), "-h" | "--help" | "-V" | "--version")
    )
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
