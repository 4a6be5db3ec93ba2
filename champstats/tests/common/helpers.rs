//! Test helpers and mock builders
//!
//! Archives are assembled from per-athlete fixtures so tests describe data,
//! not mock plumbing.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use shared::{AthleteId, SeasonResults};

use champstats::*;

use super::fixtures::TestFixtures;

type SeasonFn = Arc<dyn Fn(i32) -> Option<SeasonResults> + Send + Sync>;

#[derive(Clone)]
struct AthleteFixture {
    years: Result<Vec<i32>, String>,
    seasons: SeasonFn,
}

/// Builds a `MockResultsArchive` serving fixed per-athlete data
#[derive(Default)]
pub struct ArchiveBuilder {
    athletes: HashMap<AthleteId, AthleteFixture>,
    active_years_calls: Option<usize>,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// An athlete with active years and a season lookup
    pub fn with_athlete<F>(mut self, athlete: AthleteId, years: Vec<i32>, seasons: F) -> Self
    where
        F: Fn(i32) -> Option<SeasonResults> + Send + Sync + 'static,
    {
        self.athletes.insert(
            athlete,
            AthleteFixture {
                years: Ok(years),
                seasons: Arc::new(seasons),
            },
        );
        self
    }

    /// An athlete whose activity lookup always fails
    pub fn with_failing_athlete(mut self, athlete: AthleteId, message: &str) -> Self {
        self.athletes.insert(
            athlete,
            AthleteFixture {
                years: Err(message.to_string()),
                seasons: Arc::new(|_| None),
            },
        );
        self
    }

    /// The standard runner and the athlete whose lookups fail
    pub fn standard() -> Self {
        Self::new()
            .with_athlete(
                TestFixtures::runner_id(),
                TestFixtures::runner_active_years(),
                TestFixtures::runner_season,
            )
            .with_failing_athlete(TestFixtures::broken_id(), "activity lookup refused")
    }

    /// Require exactly this many activity lookups across the run
    pub fn expect_active_years_calls(mut self, calls: usize) -> Self {
        self.active_years_calls = Some(calls);
        self
    }

    pub fn build(self) -> MockResultsArchive {
        let mut archive = MockResultsArchive::new();
        let athletes = Arc::new(self.athletes);

        let years_lookup = Arc::clone(&athletes);
        let expectation = archive.expect_active_years().returning(move |athlete| {
            match years_lookup.get(athlete).map(|fixture| fixture.years.clone()) {
                Some(Ok(years)) => Ok(years),
                Some(Err(message)) => Err(EnrichError::ArchiveError {
                    athlete: athlete.to_string(),
                    operation: "active_years".to_string(),
                    message,
                }),
                None => Ok(Vec::new()),
            }
        });
        match self.active_years_calls {
            Some(calls) => {
                expectation.times(calls);
            }
            None => {
                expectation.times(0..);
            }
        }

        let season_lookup = Arc::clone(&athletes);
        archive
            .expect_season_results()
            .returning(move |athlete, year| {
                Ok(season_lookup
                    .get(athlete)
                    .and_then(|fixture| (fixture.seasons)(year)))
            })
            .times(0..);

        archive
    }
}

/// Convenience constructors and assertions
pub struct TestHelpers;

impl TestHelpers {
    /// A sleeper that never actually pauses
    pub fn instant_sleeper() -> MockSleeper {
        let mut sleeper = MockSleeper::new();
        sleeper.expect_sleep().returning(|_| ()).times(0..);
        sleeper
    }

    pub fn enricher(archive: MockResultsArchive) -> Enricher<MockResultsArchive, MockSleeper> {
        let fetcher = SeasonFetcher::new(
            archive,
            Self::instant_sleeper(),
            RetryPolicy::new(3, Duration::from_millis(1)),
        );
        Enricher::new(
            fetcher,
            ChampionshipCalendar::world_championships_10000m(),
            TargetEvent::default(),
        )
    }

    pub fn standard_enricher() -> Enricher<MockResultsArchive, MockSleeper> {
        Self::enricher(ArchiveBuilder::standard().build())
    }

    pub fn time(text: &str) -> Mark {
        text.parse().unwrap()
    }

    /// The four appended columns of an output row
    pub fn stats_columns(row: &OutputRow) -> Vec<String> {
        let record = row.to_record();
        record[record.len() - 4..].to_vec()
    }
}
