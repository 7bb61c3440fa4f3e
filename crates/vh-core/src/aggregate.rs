//! Per-profile accumulation of watched time.
//!
//! Every level keeps first-seen insertion order, so outputs built from these
//! totals follow the order of the export file. Sums saturate at `u64::MAX`.

use indexmap::IndexMap;

use crate::classify::Classification;
use crate::ingest::ViewingRecord;

/// Watched seconds per episode label within one season.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeasonTotals {
    pub episodes: IndexMap<String, u64>,
}

impl SeasonTotals {
    pub fn total_seconds(&self) -> u64 {
        self.episodes.values().copied().fold(0, u64::saturating_add)
    }
}

/// Watched seconds per season label within one series.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesTotals {
    pub seasons: IndexMap<String, SeasonTotals>,
}

impl SeriesTotals {
    pub fn total_seconds(&self) -> u64 {
        self.seasons
            .values()
            .map(SeasonTotals::total_seconds)
            .fold(0, u64::saturating_add)
    }
}

/// Everything one profile watched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileAggregate {
    /// Standalone title -> seconds.
    pub movies: IndexMap<String, u64>,
    /// Series name -> season -> episode -> seconds.
    pub series: IndexMap<String, SeriesTotals>,
}

impl ProfileAggregate {
    /// Adds one viewing's duration at the right level, creating keys as needed.
    pub fn add(&mut self, classification: Classification, seconds: u64) {
        match classification {
            Classification::Standalone { title } => {
                let total = self.movies.entry(title).or_default();
                *total = total.saturating_add(seconds);
            }
            Classification::Episode {
                series,
                season,
                episode,
            } => {
                let total = self
                    .series
                    .entry(series)
                    .or_default()
                    .seasons
                    .entry(season)
                    .or_default()
                    .episodes
                    .entry(episode)
                    .or_default();
                *total = total.saturating_add(seconds);
            }
        }
    }

    pub fn movie_seconds(&self) -> u64 {
        self.movies.values().copied().fold(0, u64::saturating_add)
    }

    pub fn series_seconds(&self) -> u64 {
        self.series
            .values()
            .map(SeriesTotals::total_seconds)
            .fold(0, u64::saturating_add)
    }

    /// Everything this profile watched.
    pub fn total_seconds(&self) -> u64 {
        self.movie_seconds().saturating_add(self.series_seconds())
    }
}

/// Totals for every profile in an export.
///
/// The key set doubles as the set of profiles seen. A profile is present even
/// when all of its viewings landed on one side (movies or series).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewingTotals {
    pub profiles: IndexMap<String, ProfileAggregate>,
}

impl ViewingTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one record into the totals.
    pub fn record(&mut self, record: ViewingRecord) {
        self.profiles
            .entry(record.profile)
            .or_default()
            .add(record.classification, record.duration_seconds);
    }

    /// Profile names in first-seen order.
    pub fn profile_names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn profile(&self, name: &str) -> Option<&ProfileAggregate> {
        self.profiles.get(name)
    }

    /// Seconds for a standalone title; zero when never seen.
    pub fn movie_seconds(&self, profile: &str, title: &str) -> u64 {
        self.profile(profile)
            .and_then(|p| p.movies.get(title))
            .copied()
            .unwrap_or(0)
    }

    /// Seconds for one episode; zero when never seen.
    pub fn episode_seconds(&self, profile: &str, series: &str, season: &str, episode: &str) -> u64 {
        self.profile(profile)
            .and_then(|p| p.series.get(series))
            .and_then(|s| s.seasons.get(season))
            .and_then(|s| s.episodes.get(episode))
            .copied()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl FromIterator<ViewingRecord> for ViewingTotals {
    fn from_iter<I: IntoIterator<Item = ViewingRecord>>(iter: I) -> Self {
        let mut totals = Self::new();
        for record in iter {
            totals.record(record);
        }
        totals
    }
}

/// Aggregates a sequence of viewing records.
///
/// Pure summation: the resulting totals do not depend on record order, only
/// the iteration order of keys does.
pub fn aggregate<I>(records: I) -> ViewingTotals
where
    I: IntoIterator<Item = ViewingRecord>,
{
    let totals: ViewingTotals = records.into_iter().collect();
    tracing::debug!(profiles = totals.profiles.len(), "aggregated viewing totals");
    totals
}
