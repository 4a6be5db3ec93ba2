//! Shared error types for the enrichment workspace

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SharedError {
    #[error("Invalid athlete reference: {input:?}")]
    InvalidAthleteId { input: String },

    #[error("Athlete id is not numeric: {id}")]
    NonNumericAthleteId { id: String },

    #[error("Invalid date: {input:?}")]
    InvalidDate { input: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
