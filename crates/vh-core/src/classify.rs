//! Title classification: standalone titles vs. episodes of a series.
//!
//! Export titles for serialized content look like
//! `<series>: <keyword> <season id>: <episode>`, e.g.
//! `Stranger Things: Season 1: Chapter One`. Anything else is a standalone title.
//!
//! The season keyword varies by show and locale ("Part", "Vol.", "Temporada", ...),
//! but every season label is reported as `Season <id>`.

use std::sync::LazyLock;

use regex::Regex;

/// Words that introduce a season identifier.
pub const SERIES_KEYWORDS: &[&str] = &[
    "Season",
    "Part",
    "Vol.",
    "Series",
    "Chapter",
    "Temporada",
    "Parte",
    "Universo",
    "Capítulo",
];

/// Characters allowed in a season identifier, as a regex class body.
pub const SEASON_ID_CHARS: &str = r" a-zA-Záéíê\d";

/// Prefix every season label is normalized to.
pub const SEASON_LABEL_PREFIX: &str = "Season";

/// Compiled title grammar.
///
/// Groups: 1 = series, 2 = keyword, 3 = season id, 4 = episode.
/// The leading `(.*)` is greedy, so with several colon-separated segments the
/// series takes the longest prefix that still leaves a valid decomposition.
static EPISODE_TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let keywords = SERIES_KEYWORDS
        .iter()
        .map(|keyword| regex::escape(keyword))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(
        r"(.*): ({keywords}) ([{SEASON_ID_CHARS}]*(?: Remix)*): (.*)"
    ))
    .unwrap()
});

/// What a raw title turned out to be.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Classification {
    /// A movie or one-off special.
    Standalone { title: String },
    /// One episode of a serialized title.
    Episode {
        series: String,
        season: String,
        episode: String,
    },
}

impl Classification {
    /// Returns `true` for [`Classification::Episode`].
    pub const fn is_episode(&self) -> bool {
        matches!(self, Self::Episode { .. })
    }
}

/// Classifies a raw title string.
///
/// Never fails: titles that do not fit the episode grammar are standalone,
/// kept verbatim.
pub fn classify(raw_title: &str) -> Classification {
    let Some(caps) = EPISODE_TITLE_RE.captures(raw_title) else {
        return Classification::Standalone {
            title: raw_title.to_string(),
        };
    };

    Classification::Episode {
        series: caps[1].to_string(),
        season: format!("{SEASON_LABEL_PREFIX} {}", &caps[3]),
        episode: caps[4].to_string(),
    }
}
