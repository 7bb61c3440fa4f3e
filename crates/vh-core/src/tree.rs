//! Output models built from aggregated totals: the flat report table and the
//! nested visualization tree.

use std::fmt;

use serde::Serialize;

use crate::aggregate::ViewingTotals;
use crate::duration::format_duration;

/// Name of the visualization root node.
pub const ROOT_NAME: &str = "Profiles";
/// Name of the per-profile node holding standalone titles.
pub const MOVIES_NAME: &str = "Movies";
/// Name of the per-profile node holding series.
pub const SERIES_NAME: &str = "Series";

/// Whether a report row describes a standalone title or a whole series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RowKind {
    Movie,
    Series,
}

impl RowKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "Movie",
            Self::Series => "Series",
        }
    }
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of the report table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub profile: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: RowKind,
    pub total_seconds: u64,
    /// `total_seconds` as `HH:MM:SS`.
    pub total_time: String,
}

impl ReportRow {
    fn new(profile: &str, title: &str, kind: RowKind, total_seconds: u64) -> Self {
        Self {
            profile: profile.to_string(),
            title: title.to_string(),
            kind,
            total_seconds,
            total_time: format_duration(total_seconds),
        }
    }
}

/// Builds the report table.
///
/// All movie rows come first (by profile, then title), followed by one row per
/// series carrying its grand total across seasons and episodes.
pub fn build_report_rows(totals: &ViewingTotals) -> Vec<ReportRow> {
    let movies = totals.profiles.iter().flat_map(|(profile, aggregate)| {
        aggregate
            .movies
            .iter()
            .map(move |(title, seconds)| ReportRow::new(profile, title, RowKind::Movie, *seconds))
    });
    let series = totals.profiles.iter().flat_map(|(profile, aggregate)| {
        aggregate.series.iter().map(move |(name, series)| {
            ReportRow::new(profile, name, RowKind::Series, series.total_seconds())
        })
    });
    movies.chain(series).collect()
}

/// A node of the visualization tree.
///
/// Leaves carry a `value`, internal nodes carry `children`; never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisualizationNode {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<VisualizationNode>>,
}

impl VisualizationNode {
    pub fn leaf(name: impl Into<String>, value: u64) -> Self {
        Self {
            name: name.into(),
            value: Some(value),
            children: None,
        }
    }

    pub fn branch(name: impl Into<String>, children: Vec<Self>) -> Self {
        Self {
            name: name.into(),
            value: None,
            children: Some(children),
        }
    }

    /// Child nodes, empty for leaves.
    pub fn children(&self) -> &[Self] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Looks up a direct child by name.
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children().iter().find(|c| c.name == name)
    }

    /// Serializes with two-space indentation.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Builds the visualization tree.
///
/// `Profiles -> <profile> -> {Movies, Series}`. Movies holds one leaf per
/// title; Series holds one node per series with a leaf per season whose value
/// is the sum of that season's episodes. Episodes themselves are not included.
pub fn build_visualization_tree(totals: &ViewingTotals) -> VisualizationNode {
    let profiles = totals
        .profiles
        .iter()
        .map(|(profile, aggregate)| {
            let movies = aggregate
                .movies
                .iter()
                .map(|(title, seconds)| VisualizationNode::leaf(title, *seconds))
                .collect();

            let series = aggregate
                .series
                .iter()
                .map(|(name, series)| {
                    let seasons = series
                        .seasons
                        .iter()
                        .map(|(season, episodes)| {
                            VisualizationNode::leaf(season, episodes.total_seconds())
                        })
                        .collect();
                    VisualizationNode::branch(name, seasons)
                })
                .collect();

            VisualizationNode::branch(
                profile,
                vec![
                    VisualizationNode::branch(MOVIES_NAME, movies),
                    VisualizationNode::branch(SERIES_NAME, series),
                ],
            )
        })
        .collect();

    VisualizationNode::branch(ROOT_NAME, profiles)
}
