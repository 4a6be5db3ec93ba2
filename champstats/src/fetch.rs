//! Season fetching with bounded retry

use std::time::Duration;

use shared::{stage_debug, stage_info, stage_warn, AthleteId, SeasonResults, Stage};

use crate::error::EnrichResult;
use crate::traits::{ResultsArchive, Sleeper};

/// Fixed-delay retry bound for per-season lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    pub max_attempts: u32,
    /// Pause between consecutive attempts
    pub delay: Duration,
}

impl RetryPolicy {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

    /// A policy always makes at least one attempt
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ATTEMPTS, Self::DEFAULT_DELAY)
    }
}

/// Retrieves athlete data from the archive on behalf of the correlator
pub struct SeasonFetcher<A, S>
where
    A: ResultsArchive,
    S: Sleeper,
{
    archive: A,
    sleeper: S,
    policy: RetryPolicy,
}

impl<A, S> SeasonFetcher<A, S>
where
    A: ResultsArchive,
    S: Sleeper,
{
    pub fn new(archive: A, sleeper: S, policy: RetryPolicy) -> Self {
        Self {
            archive,
            sleeper,
            policy,
        }
    }

    /// Active years in ascending order, without duplicates.
    ///
    /// A single attempt; failure is returned to the caller.
    pub async fn active_years(&self, athlete: &AthleteId) -> EnrichResult<Vec<i32>> {
        let mut years = self.archive.active_years(athlete).await?;
        years.sort_unstable();
        years.dedup();
        stage_debug!(Stage::Fetch, "athlete {} active in {:?}", athlete, years);
        Ok(years)
    }

    /// One season's results, or `None` when there is no data for the year.
    ///
    /// Failed lookups are retried per the policy; exhausting it is logged
    /// and reported as no data rather than as an error.
    pub async fn season(&self, athlete: &AthleteId, year: i32) -> Option<SeasonResults> {
        for attempt in 1..=self.policy.max_attempts {
            match self.archive.season_results(athlete, year).await {
                Ok(Some(season)) => {
                    stage_debug!(
                        Stage::Fetch,
                        "athlete {} {}: {} records on attempt {}",
                        athlete,
                        year,
                        season.record_count(),
                        attempt
                    );
                    return Some(season);
                }
                Ok(None) => {
                    stage_info!(Stage::Fetch, "no results for {} in {}", athlete, year);
                    return None;
                }
                Err(err) => {
                    stage_warn!(
                        Stage::Fetch,
                        "error on try {} for {} in {}: {}",
                        attempt,
                        athlete,
                        year,
                        err
                    );
                    if attempt < self.policy.max_attempts {
                        self.sleeper.sleep(self.policy.delay).await;
                    }
                }
            }
        }

        stage_warn!(
            Stage::Fetch,
            "⚠️ giving up on {} in {} after {} attempts, treating as no data",
            athlete,
            year,
            self.policy.max_attempts
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EnrichError;
    use crate::traits::{MockResultsArchive, MockSleeper};
    use mockall::predicate::eq;
    use shared::{EventResults, PerformanceRecord};

    fn athlete() -> AthleteId {
        AthleteId::new("14305628").unwrap()
    }

    fn transient() -> EnrichError {
        EnrichError::ArchiveError {
            athlete: "14305628".to_string(),
            operation: "season_results".to_string(),
            message: "connection reset".to_string(),
        }
    }

    fn one_race() -> SeasonResults {
        SeasonResults::new(vec![EventResults::outdoor(
            "10,000 Metres",
            vec![PerformanceRecord::new("2023-05-01", "27:30.00")],
        )])
    }

    #[tokio::test]
    async fn test_active_years_sorted_ascending() {
        let mut archive = MockResultsArchive::new();
        archive
            .expect_active_years()
            .times(1)
            .returning(|_| Ok(vec![2023, 2021, 2022, 2021]));
        let fetcher = SeasonFetcher::new(archive, MockSleeper::new(), RetryPolicy::default());

        assert_eq!(fetcher.active_years(&athlete()).await.unwrap(), vec![2021, 2022, 2023]);
    }

    #[tokio::test]
    async fn test_active_years_failure_not_retried() {
        let mut archive = MockResultsArchive::new();
        archive
            .expect_active_years()
            .times(1)
            .returning(|_| Err(transient()));
        let mut sleeper = MockSleeper::new();
        sleeper.expect_sleep().never();
        let fetcher = SeasonFetcher::new(archive, sleeper, RetryPolicy::default());

        assert!(fetcher.active_years(&athlete()).await.is_err());
    }

    #[tokio::test]
    async fn test_season_recovers_after_transient_failures() {
        let mut archive = MockResultsArchive::new();
        let mut calls = 0;
        archive
            .expect_season_results()
            .with(eq(athlete()), eq(2023))
            .times(3)
            .returning(move |_, _| {
                calls += 1;
                if calls < 3 { Err(transient()) } else { Ok(Some(one_race())) }
            });
        let mut sleeper = MockSleeper::new();
        sleeper
            .expect_sleep()
            .with(eq(Duration::from_secs(1)))
            .times(2)
            .returning(|_| ());
        let fetcher = SeasonFetcher::new(archive, sleeper, RetryPolicy::default());

        assert_eq!(fetcher.season(&athlete(), 2023).await, Some(one_race()));
    }

    #[tokio::test]
    async fn test_season_gives_up_after_max_attempts() {
        let mut archive = MockResultsArchive::new();
        archive
            .expect_season_results()
            .times(5)
            .returning(|_, _| Err(transient()));
        let mut sleeper = MockSleeper::new();
        // pauses only between attempts
        sleeper.expect_sleep().times(4).returning(|_| ());
        let fetcher = SeasonFetcher::new(archive, sleeper, RetryPolicy::default());

        assert_eq!(fetcher.season(&athlete(), 2023).await, None);
    }

    #[tokio::test]
    async fn test_empty_archive_answer_not_retried() {
        let mut archive = MockResultsArchive::new();
        archive
            .expect_season_results()
            .times(1)
            .returning(|_, _| Ok(None));
        let mut sleeper = MockSleeper::new();
        sleeper.expect_sleep().never();
        let fetcher = SeasonFetcher::new(archive, sleeper, RetryPolicy::default());

        assert_eq!(fetcher.season(&athlete(), 2020).await, None);
    }

    #[test]
    fn test_policy_makes_at_least_one_attempt() {
        assert_eq!(RetryPolicy::new(0, Duration::ZERO).max_attempts, 1);
        assert_eq!(RetryPolicy::default().max_attempts, 5);
        assert_eq!(RetryPolicy::default().delay, Duration::from_secs(1));
    }
}
