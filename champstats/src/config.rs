//! Run configuration from the command line and environment

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use url::Url;

use crate::core::{ChampionshipCalendar, TargetEvent};
use crate::error::{EnrichError, EnrichResult};
use crate::fetch::RetryPolicy;
use crate::traits::ArchiveCredentials;

/// Enrich championship results with season and personal bests
#[derive(Parser, Debug, Clone)]
#[command(name = "champstats")]
#[command(about = "Appends season best, personal best, race count and season start to championship results")]
pub struct CliArgs {
    /// Input CSV: place, mark, year, name, profile link, ...
    #[arg(long)]
    pub input: PathBuf,

    /// Output CSV path
    #[arg(long)]
    pub output: PathBuf,

    /// Championship calendar JSON ({"<year>": "YYYY-MM-DD"}); defaults to
    /// the built-in World Championships 10,000 m dates
    #[arg(long)]
    pub calendar: Option<PathBuf>,

    /// Discipline name as listed by the archive
    #[arg(long, default_value = TargetEvent::TEN_THOUSAND_METRES)]
    pub discipline: String,

    /// Use indoor results for the discipline
    #[arg(long)]
    pub indoor: bool,

    /// Treat the first input line as a header
    #[arg(long)]
    pub has_header: bool,

    /// Attempts per season lookup
    #[arg(long, default_value_t = RetryPolicy::DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,

    /// Pause between attempts, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub retry_delay_ms: u64,

    /// Archive GraphQL endpoint (overrides ARCHIVE_ENDPOINT)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Fully resolved configuration for one run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub has_header: bool,
    pub calendar: ChampionshipCalendar,
    pub target: TargetEvent,
    pub retry: RetryPolicy,
    pub endpoint: Url,
    pub api_key: String,
}

impl RunConfig {
    pub fn from_args(args: &CliArgs, credentials: ArchiveCredentials) -> EnrichResult<Self> {
        let endpoint_text = args
            .endpoint
            .clone()
            .or(credentials.endpoint)
            .ok_or_else(|| EnrichError::ConfigError {
                field: "endpoint".to_string(),
                value: "<missing>".to_string(),
            })?;
        let endpoint = Url::parse(&endpoint_text).map_err(|e| EnrichError::ConfigError {
            field: "endpoint".to_string(),
            value: format!("{endpoint_text}: {e}"),
        })?;

        let calendar = match &args.calendar {
            Some(path) => ChampionshipCalendar::from_json_file(path)?,
            None => ChampionshipCalendar::world_championships_10000m(),
        };

        let target = TargetEvent {
            discipline: args.discipline.clone(),
            indoor: args.indoor,
        };

        Ok(Self {
            input: args.input.clone(),
            output: args.output.clone(),
            has_header: args.has_header,
            calendar,
            target,
            retry: RetryPolicy::new(args.max_attempts, Duration::from_millis(args.retry_delay_ms)),
            endpoint,
            api_key: credentials.api_key,
        })
    }
}
