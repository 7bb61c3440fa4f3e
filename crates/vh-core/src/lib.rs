//! Core logic for viewing-history statistics.
//!
//! This crate contains the pipeline that turns a viewing-activity export into
//! per-profile watch totals:
//! - Duration: `HH:MM:SS` parsing and formatting
//! - Classification: splitting episode titles into series, season and episode
//! - Ingestion: reading and filtering export rows
//! - Aggregation: summing watched time per profile, title, season and episode
//! - Tree: the report table and the visualization tree built from the totals

pub mod aggregate;
pub mod classify;
pub mod duration;
mod error;
pub mod ingest;
pub mod tree;

pub use aggregate::{ProfileAggregate, SeasonTotals, SeriesTotals, ViewingTotals, aggregate};
pub use classify::{Classification, classify};
pub use duration::{DurationParseError, format_duration, parse_duration, parse_duration_or_zero};
pub use error::{Error, Result};
pub use ingest::{RawRow, ViewingRecord, ingest, ingest_path};
pub use tree::{
    ReportRow, RowKind, VisualizationNode, build_report_rows, build_visualization_tree,
};
