//! Enrichment error types

use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnrichError {
    #[error("Archive request failed: {operation} for athlete {athlete}: {message}")]
    ArchiveError {
        athlete: String,
        operation: String,
        message: String,
    },

    #[error("Archive reported errors: {message}")]
    GraphqlError { message: String },

    #[error("Athlete {athlete} unavailable: {message}")]
    AthleteUnavailable { athlete: String, message: String },

    #[error("Year {year} folded after {latest}")]
    YearOutOfOrder { year: i32, latest: i32 },

    #[error("Configuration error: {field} = {value}")]
    ConfigError { field: String, value: String },

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),
}

pub type EnrichResult<T> = Result<T, EnrichError>;
