//! Writers for the two output artifacts: the visualization JSON document and
//! the HTML report.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use vh_core::{Error, ReportRow, Result, VisualizationNode};

/// Replaced by the `<tr>` rows of the report table.
pub const TABLE_PLACEHOLDER: &str = "{{ watched_table }}";
/// Replaced by the report rows as a JSON array.
pub const TABLE_JSON_PLACEHOLDER: &str = "{{ watched_table_json }}";
/// Replaced by the RFC 3339 generation timestamp.
pub const GENERATED_AT_PLACEHOLDER: &str = "{{ generated_at }}";

const BUILTIN_TEMPLATE: &str = include_str!("../templates/report.html");

/// Resolves `file_name` inside `output_dir`, creating the directory if needed.
///
/// Only the last path component is created; a missing parent is an error.
pub fn output_file_path(output_dir: &Path, file_name: &str) -> Result<PathBuf> {
    if !output_dir.is_dir() {
        fs::create_dir(output_dir).map_err(|err| Error::file_access(output_dir, err))?;
        tracing::debug!(dir = %output_dir.display(), "created output directory");
    }
    Ok(output_dir.join(file_name))
}

/// Writes the visualization tree as pretty-printed JSON.
pub fn write_visualization_json(
    output_dir: &Path,
    file_name: &str,
    tree: &VisualizationNode,
) -> Result<PathBuf> {
    let json = tree.to_pretty_json()?;
    let path = output_file_path(output_dir, file_name)?;
    fs::write(&path, json).map_err(|err| Error::file_access(&path, err))?;
    Ok(path)
}

/// An HTML report template with placeholder slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    /// The template compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            source: BUILTIN_TEMPLATE.to_string(),
        }
    }

    /// Reads a template from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|err| Error::file_access(path, err))?;
        Ok(Self { source })
    }

    pub fn from_source(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Substitutes the report rows into the template.
    ///
    /// Placeholders are resolved in one pass over the template text, so a
    /// placeholder appearing inside a title is left as written.
    pub fn render(&self, rows: &[ReportRow], generated_at: DateTime<Utc>) -> Result<String> {
        // `</` inside an inline script would end it early
        let rows_json = serde_json::to_string(rows)?.replace("</", "<\\/");
        let table = table_rows(rows);
        let timestamp = generated_at.to_rfc3339_opts(SecondsFormat::Secs, true);
        let slots = [
            (TABLE_PLACEHOLDER, table.as_str()),
            (TABLE_JSON_PLACEHOLDER, rows_json.as_str()),
            (GENERATED_AT_PLACEHOLDER, timestamp.as_str()),
        ];

        let mut out = String::with_capacity(self.source.len() + table.len() + rows_json.len());
        let mut rest = self.source.as_str();
        loop {
            let next = slots
                .iter()
                .filter_map(|&(placeholder, value)| {
                    rest.find(placeholder).map(|start| (start, placeholder, value))
                })
                .min_by_key(|&(start, ..)| start);
            let Some((start, placeholder, value)) = next else {
                break;
            };
            out.push_str(&rest[..start]);
            out.push_str(value);
            rest = &rest[start + placeholder.len()..];
        }
        out.push_str(rest);
        Ok(out)
    }
}

/// Renders and writes the HTML report.
pub fn write_html_report(
    output_dir: &Path,
    file_name: &str,
    template: &Template,
    rows: &[ReportRow],
    generated_at: DateTime<Utc>,
) -> Result<PathBuf> {
    let html = template.render(rows, generated_at)?;
    let path = output_file_path(output_dir, file_name)?;
    fs::write(&path, html).map_err(|err| Error::file_access(&path, err))?;
    Ok(path)
}

fn table_rows(rows: &[ReportRow]) -> String {
    let mut out = String::new();
    for (idx, row) in rows.iter().enumerate() {
        writeln!(
            out,
            "            <tr data-index=\"{idx}\"><td>{}</td><td>{}</td><td>{}</td><td class=\"time\" title=\"{} s\">{}</td></tr>",
            escape_html(&row.profile),
            escape_html(&row.title),
            row.kind,
            row.total_seconds,
            row.total_time,
        )
        .unwrap();
    }
    out
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
