use anyhow::{Context, Result};
use chrono::Utc;
use tracing_subscriber::EnvFilter;

use vh_cli::{Cli, Config, pipeline};

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let summary = pipeline::run(
        cli.input.as_deref(),
        cli.output.as_deref(),
        &config,
        Utc::now(),
    )?;

    println!("Wrote {}", summary.json_path.display());
    println!("Wrote {}", summary.html_path.display());

    Ok(())
}
