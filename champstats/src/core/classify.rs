//! Result classification into the two per-season views

use serde::{Deserialize, Serialize};
use shared::{EventResults, PerformanceRecord, SeasonResults};

/// Marks meaning the athlete never started
const NON_START_CODES: &[&str] = &["DNS", "-"];

/// Marks listed against an event that are not competitive performances
const NON_COMPETITIVE_CODES: &[&str] = &["VST", "EXH"];

/// The event whose times feed season and personal bests
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetEvent {
    pub discipline: String,
    pub indoor: bool,
}

impl TargetEvent {
    pub const TEN_THOUSAND_METRES: &'static str = "10,000 Metres";

    pub fn outdoor(discipline: impl Into<String>) -> Self {
        Self {
            discipline: discipline.into(),
            indoor: false,
        }
    }

    pub fn indoor(discipline: impl Into<String>) -> Self {
        Self {
            discipline: discipline.into(),
            indoor: true,
        }
    }

    pub fn matches(&self, event: &EventResults) -> bool {
        event.discipline == self.discipline && event.indoor == self.indoor
    }
}

impl Default for TargetEvent {
    fn default() -> Self {
        Self::outdoor(Self::TEN_THOUSAND_METRES)
    }
}

/// Two views over one athlete-season, both in archive order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedView<'a> {
    /// Every real start in any discipline
    pub unfiltered: Vec<&'a PerformanceRecord>,
    /// Competitive starts in the target event only
    pub discipline: Vec<&'a PerformanceRecord>,
}

fn trimmed_mark(record: &PerformanceRecord) -> Option<&str> {
    record.mark.as_deref().map(str::trim)
}

fn is_start(record: &PerformanceRecord) -> bool {
    match trimmed_mark(record) {
        Some(mark) => !mark.is_empty() && !NON_START_CODES.contains(&mark),
        None => false,
    }
}

fn is_competitive_start(record: &PerformanceRecord) -> bool {
    is_start(record)
        && trimmed_mark(record).is_some_and(|mark| !NON_COMPETITIVE_CODES.contains(&mark))
}

/// Split a season's records into the race-counting and best-time views
pub fn classify<'a>(season: &'a SeasonResults, target: &TargetEvent) -> ClassifiedView<'a> {
    let unfiltered = season
        .results_by_event
        .iter()
        .flat_map(|event| event.results.iter())
        .filter(|record| is_start(record))
        .collect();

    let discipline = season
        .results_by_event
        .iter()
        .filter(|event| target.matches(event))
        .flat_map(|event| event.results.iter())
        .filter(|record| is_competitive_start(record))
        .collect();

    ClassifiedView { unfiltered, discipline }
}
