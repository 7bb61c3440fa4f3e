//! Reading viewing-activity exports into normalized records.
//!
//! The export is CSV read by position. Its header names the columns:
//!
//! ```text
//! Profile Name,Start Time,Duration,Attributes,Title,Supplemental Video Type,
//! Device Type,Bookmark,Latest Bookmark,Country
//! ```
//!
//! Only the first six are required.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::classify::{Classification, classify};
use crate::duration::parse_duration_or_zero;
use crate::error::{Error, Result};

/// Minimum number of positional fields a row must carry.
pub const REQUIRED_FIELDS: usize = 6;

/// One row of the export, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub profile_name: String,
    pub start_time: String,
    pub duration: String,
    pub attributes: String,
    pub title: String,
    pub supplemental_video_type: String,
    pub device_type: Option<String>,
    pub bookmark: Option<String>,
    pub latest_bookmark: Option<String>,
    pub country: Option<String>,
}

impl RawRow {
    /// Builds a row from a CSV record, failing if it is too short to index.
    pub fn from_record(record: &StringRecord, line: u64) -> Result<Self> {
        if record.len() < REQUIRED_FIELDS {
            return Err(Error::StructuralRow {
                line,
                fields: record.len(),
                expected: REQUIRED_FIELDS,
            });
        }

        let field = |idx: usize| record.get(idx).unwrap_or_default().to_string();
        let optional = |idx: usize| record.get(idx).map(str::to_string);

        Ok(Self {
            profile_name: field(0),
            start_time: field(1),
            duration: field(2),
            attributes: field(3),
            title: field(4),
            supplemental_video_type: field(5),
            device_type: optional(6),
            bookmark: optional(7),
            latest_bookmark: optional(8),
            country: optional(9),
        })
    }

    /// Trailers, teasers and other promotional rows carry a supplemental type.
    pub fn is_supplemental(&self) -> bool {
        !self.supplemental_video_type.is_empty()
    }

    /// Interprets the row. Malformed durations count as zero seconds.
    pub fn into_viewing_record(self) -> ViewingRecord {
        ViewingRecord {
            duration_seconds: parse_duration_or_zero(&self.duration),
            classification: classify(&self.title),
            profile: self.profile_name,
            date: self.start_time,
        }
    }
}

/// A single primary viewing, normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewingRecord {
    pub profile: String,
    /// Start time, passed through untouched.
    pub date: String,
    pub duration_seconds: u64,
    pub classification: Classification,
}

/// Reads an export from any reader.
///
/// Rows are filtered first, then the first retained row is dropped as the
/// header. A header whose supplemental column is non-empty is therefore
/// filtered out and the first real viewing is dropped in its place.
///
/// An export with no retained rows yields an empty list rather than an error,
/// even though there is then no header row to drop.
pub fn ingest<R: Read>(reader: R) -> Result<Vec<ViewingRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut rows_read = 0_usize;
    let mut supplemental = 0_usize;
    let mut header_dropped = false;

    for result in csv_reader.records() {
        let record = result?;
        rows_read += 1;
        let line = record.position().map_or(0, csv::Position::line);
        let row = RawRow::from_record(&record, line)?;

        if row.is_supplemental() {
            supplemental += 1;
            continue;
        }
        if !header_dropped {
            header_dropped = true;
            continue;
        }
        records.push(row.into_viewing_record());
    }

    tracing::debug!(
        rows_read,
        supplemental,
        retained = records.len(),
        "ingested viewing activity"
    );
    Ok(records)
}

/// Opens and reads an export file.
pub fn ingest_path(path: &Path) -> Result<Vec<ViewingRecord>> {
    let file = File::open(path).map_err(|err| Error::file_access(path, err))?;
    ingest(file)
}
