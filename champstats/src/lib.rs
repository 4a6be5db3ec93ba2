//! Championship statistics enrichment
//!
//! Appends each athlete's season best, personal best, pre-championship race
//! count and season start to a table of championship appearances, using
//! results fetched from a remote archive.

pub mod config;
pub mod core;
pub mod enricher;
pub mod error;
pub mod fetch;
pub mod services;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use crate::core::{AthleteHistory, AthleteYearStats, ChampionshipCalendar, Mark, TargetEvent};
pub use enricher::Enricher;
pub use error::{EnrichError, EnrichResult};
pub use fetch::{RetryPolicy, SeasonFetcher};
pub use traits::*;
pub use types::*;
