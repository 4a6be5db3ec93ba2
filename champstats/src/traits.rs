//! Trait definitions with mockall annotations for testing
//!
//! The enrichment pipeline reaches the outside world only through these
//! seams: the remote results archive, the pause between retries, tabular
//! storage and the source of archive credentials.

use std::time::Duration;

use shared::{AthleteId, SeasonResults};

use crate::error::EnrichResult;
use crate::types::{InputTable, OutputRow};

/// Endpoint and key for the results archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveCredentials {
    pub endpoint: Option<String>,
    pub api_key: String,
}

/// Read access to the remote results archive
#[mockall::automock]
#[async_trait::async_trait]
pub trait ResultsArchive: Send + Sync {
    /// Years in which the athlete has any recorded results, in archive order
    async fn active_years(&self, athlete: &AthleteId) -> EnrichResult<Vec<i32>>;

    /// All results for one athlete-year, grouped by event.
    ///
    /// `Ok(None)` means the archive answered but holds nothing for that year.
    async fn season_results(&self, athlete: &AthleteId, year: i32) -> EnrichResult<Option<SeasonResults>>;
}

/// Pause between retry attempts
#[mockall::automock]
#[async_trait::async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Tabular input and output
#[mockall::automock]
#[async_trait::async_trait]
pub trait TableStore: Send + Sync {
    /// Read every input row, in order
    async fn read_table(&self) -> EnrichResult<InputTable>;

    /// Write enriched rows, in order, under an optional header
    async fn write_table(&self, header: Option<Vec<String>>, rows: &[OutputRow]) -> EnrichResult<()>;
}

/// Source of archive credentials
#[mockall::automock]
#[async_trait::async_trait]
pub trait CredentialSource: Send + Sync {
    async fn archive_credentials(&self) -> EnrichResult<ArchiveCredentials>;
}
