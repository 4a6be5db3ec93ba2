//! Shared types for the championship statistics enrichment workspace
//!
//! Contains the results archive's wire shape, athlete identity resolution,
//! the shared error type and tracing setup used by every binary.

pub mod archive;
pub mod errors;
pub mod logging;
pub mod types;

pub use archive::*;
pub use errors::*;
pub use types::*;
