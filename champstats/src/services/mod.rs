//! Service implementations
//!
//! Real implementations of the service traits. These handle the actual
//! network and file I/O.

pub mod csv_table;
pub mod env_credentials;
pub mod graphql_archive;
pub mod sleeper;

#[cfg(test)]
pub mod tests;

pub use csv_table::CsvTableStore;
pub use env_credentials::EnvCredentialSource;
pub use graphql_archive::GraphqlArchive;
pub use sleeper::TokioSleeper;
