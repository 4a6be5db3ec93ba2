//! Common test utilities and infrastructure
//!
//! Shared fixtures and mock builders for the champstats test suites.

pub mod fixtures;
pub mod helpers;

pub use fixtures::TestFixtures;
pub use helpers::{ArchiveBuilder, TestHelpers};
