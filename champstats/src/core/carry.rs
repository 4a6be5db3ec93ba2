//! Carry-forward of personal bests across an athlete's seasons
//!
//! Seasons are folded strictly in ascending year order. Each season's
//! personal best looks back one year for the running extended best and,
//! when that year is missing, one year further; a longer gap starts over.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use shared::{stage_debug, Stage};

use super::aggregate::SeasonSummary;
use super::mark::Mark;
use crate::error::{EnrichError, EnrichResult};

/// Final statistics for one athlete in one year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AthleteYearStats {
    pub season_best: Mark,
    pub personal_best: Mark,
    /// Best over all prior seasons plus the whole of this one
    pub extended_personal_best: Mark,
    pub race_count: u32,
    pub season_start: Option<NaiveDate>,
}

impl AthleteYearStats {
    /// Values reported for a year with no data
    pub fn sentinel() -> Self {
        Self {
            season_best: Mark::NoMark,
            personal_best: Mark::NoMark,
            extended_personal_best: Mark::NoMark,
            race_count: 0,
            season_start: None,
        }
    }
}

/// Per-athlete statistics, built one season at a time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AthleteHistory {
    years: BTreeMap<i32, AthleteYearStats>,
}

impl AthleteHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold an ordered sequence of season summaries into a history
    pub fn from_summaries<I>(summaries: I) -> EnrichResult<Self>
    where
        I: IntoIterator<Item = (i32, SeasonSummary)>,
    {
        summaries
            .into_iter()
            .try_fold(Self::new(), |mut history, (year, summary)| {
                history.fold_year(year, &summary)?;
                Ok(history)
            })
    }

    /// Extended best carried into `year` from Y-1, else Y-2, else none
    pub fn carried_best(&self, year: i32) -> Mark {
        self.years
            .get(&(year - 1))
            .or_else(|| self.years.get(&(year - 2)))
            .map_or(Mark::NoMark, |stats| stats.extended_personal_best)
    }

    /// Record `year`, which must be later than every year already folded
    pub fn fold_year(&mut self, year: i32, summary: &SeasonSummary) -> EnrichResult<&AthleteYearStats> {
        if let Some(latest) = self.latest_year() {
            if year <= latest {
                return Err(EnrichError::YearOutOfOrder { year, latest });
            }
        }

        let carried = self.carried_best(year);
        let stats = AthleteYearStats {
            season_best: summary.season_best,
            personal_best: summary.season_best.min(carried),
            extended_personal_best: summary.full_year_best.min(carried),
            race_count: summary.race_count,
            season_start: summary.season_start,
        };

        stage_debug!(
            Stage::CarryForward,
            "year {}: SB {} PB {} PB+ {} races {}",
            year,
            stats.season_best,
            stats.personal_best,
            stats.extended_personal_best,
            stats.race_count
        );

        Ok(self.years.entry(year).or_insert(stats))
    }

    pub fn get(&self, year: i32) -> Option<&AthleteYearStats> {
        self.years.get(&year)
    }

    /// Stats for `year`, or the no-data sentinel
    pub fn stats_or_sentinel(&self, year: i32) -> AthleteYearStats {
        self.get(year).copied().unwrap_or_else(AthleteYearStats::sentinel)
    }

    pub fn latest_year(&self) -> Option<i32> {
        self.years.keys().next_back().copied()
    }

    pub fn years(&self) -> impl Iterator<Item = (i32, &AthleteYearStats)> {
        self.years.iter().map(|(year, stats)| (*year, stats))
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}
