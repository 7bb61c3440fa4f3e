//! One-pass run: read export -> aggregate -> build outputs -> write files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use vh_core::{Error, aggregate, build_report_rows, build_visualization_tree, ingest_path};

use crate::Config;
use crate::render::{self, Template};

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub json_path: PathBuf,
    pub html_path: PathBuf,
    pub records: usize,
    pub profiles: usize,
}

/// Runs the whole pipeline.
///
/// Missing paths only fail once they are needed, so a missing `output` is
/// reported after the input has been read.
pub fn run(
    input: Option<&Path>,
    output: Option<&Path>,
    config: &Config,
    generated_at: DateTime<Utc>,
) -> Result<RunSummary> {
    let input = input.ok_or(Error::MissingPath { what: "input" })?;
    let records = ingest_path(input)
        .with_context(|| format!("failed to read viewing activity from {}", input.display()))?;
    let record_count = records.len();

    let totals = aggregate(records);
    for (profile, profile_totals) in &totals.profiles {
        tracing::debug!(%profile, series = ?profile_totals.series, "series totals");
    }

    let output = output.ok_or(Error::MissingPath { what: "output" })?;

    let tree = build_visualization_tree(&totals);
    let json_path = render::write_visualization_json(output, &config.json_file_name, &tree)
        .context("failed to write visualization data")?;

    let template = match &config.template_path {
        Some(path) => Template::load(path).context("failed to load report template")?,
        None => Template::builtin(),
    };
    let rows = build_report_rows(&totals);
    let html_path =
        render::write_html_report(output, &config.html_file_name, &template, &rows, generated_at)
            .context("failed to write HTML report")?;

    tracing::info!(
        records = record_count,
        profiles = totals.profiles.len(),
        rows = rows.len(),
        "viewing history processed"
    );

    Ok(RunSummary {
        json_path,
        html_path,
        records: record_count,
        profiles: totals.profiles.len(),
    })
}
