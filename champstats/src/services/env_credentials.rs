//! Environment-based archive credentials
//!
//! ## Configuration Sources
//! Values are loaded from:
//! 1. `.env` file in the current directory or parent directories (if present)
//! 2. System environment variables
//!
//! Environment variables take precedence over .env file values.
//!
//! ## Keys
//! - `ARCHIVE_API_KEY`: value of the archive's `X-Api-Key` header (required)
//! - `ARCHIVE_ENDPOINT`: GraphQL endpoint URL (optional, the CLI may supply it)

use crate::error::{EnrichError, EnrichResult};
use crate::traits::{ArchiveCredentials, CredentialSource};

/// Credential source backed by environment variables
pub struct EnvCredentialSource;

impl EnvCredentialSource {
    pub const API_KEY_VAR: &'static str = "ARCHIVE_API_KEY";
    pub const ENDPOINT_VAR: &'static str = "ARCHIVE_ENDPOINT";

    /// Load a `.env` file if one exists; already-set variables are kept
    fn init_env() {
        let _ = dotenv::dotenv();
    }

    fn non_empty_var(name: &str) -> Option<String> {
        std::env::var(name)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }
}

#[async_trait::async_trait]
impl CredentialSource for EnvCredentialSource {
    async fn archive_credentials(&self) -> EnrichResult<ArchiveCredentials> {
        Self::init_env();

        let api_key = Self::non_empty_var(Self::API_KEY_VAR).ok_or_else(|| EnrichError::ConfigError {
            field: Self::API_KEY_VAR.to_string(),
            value: "<missing>".to_string(),
        })?;

        Ok(ArchiveCredentials {
            endpoint: Self::non_empty_var(Self::ENDPOINT_VAR),
            api_key,
        })
    }
}
