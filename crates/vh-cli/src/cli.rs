//! Command-line argument definitions.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// Long flags that older invocations spell with a single dash (`-input`).
const LEGACY_LONG_FLAGS: &[&str] = &["input", "output"];

/// Viewing-history statistics.
///
/// Reads a viewing-activity export and writes a visualization JSON document
/// and an HTML report with watched time per profile, title and season.
#[derive(Debug, Parser)]
#[command(name = "vh", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Viewing activity CSV file.
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Directory for the output files.
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Parses process arguments, accepting the single-dash legacy flags.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_legacy_flags(std::env::args_os()))
    }
}

/// Rewrites `-input`/`-output` (and `-input=...`) to their double-dash form.
///
/// Everything after a bare `--` is left alone.
pub fn normalize_legacy_flags<I, S>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                passthrough = true;
                return arg;
            }
            let is_legacy = text
                .strip_prefix('-')
                .filter(|rest| !rest.starts_with('-'))
                .map(|rest| rest.split_once('=').map_or(rest, |(name, _)| name))
                .is_some_and(|name| LEGACY_LONG_FLAGS.contains(&name));
            if is_legacy {
                OsString::from(format!("-{text}"))
            } else {
                arg
            }
        })
        .collect()
}
