//! Entry point for the champstats binary

use clap::Parser;

use champstats::config::{CliArgs, RunConfig};
use champstats::services::{CsvTableStore, EnvCredentialSource, GraphqlArchive, TokioSleeper};
use champstats::{CredentialSource, EnrichResult, Enricher, SeasonFetcher};
use shared::{logging, stage_info, Stage};

#[tokio::main(flavor = "current_thread")]
async fn main() -> EnrichResult<()> {
    let args = CliArgs::parse();
    logging::init_tracing_with_level(Some(&args.log_level));

    let credentials = EnvCredentialSource.archive_credentials().await?;
    let config = RunConfig::from_args(&args, credentials)?;

    logging::log_startup(&format!(
        "enrichment of {} ({}{})",
        config.input.display(),
        config.target.discipline,
        if config.target.indoor { ", indoor" } else { "" }
    ));
    stage_info!(
        Stage::Io,
        "Archive: {}, calendar years: {}, attempts: {}",
        config.endpoint,
        config.calendar.len(),
        config.retry.max_attempts
    );

    let archive = GraphqlArchive::new(config.endpoint.clone(), config.api_key.clone())?;
    let fetcher = SeasonFetcher::new(archive, TokioSleeper, config.retry);
    let mut enricher = Enricher::new(fetcher, config.calendar.clone(), config.target.clone());
    let store = CsvTableStore::new(&config.input, &config.output, config.has_header);

    match enricher.run(&store).await {
        Ok(summary) => {
            stage_info!(
                Stage::Io,
                "💾 Wrote {} rows to {}",
                summary.total_rows(),
                config.output.display()
            );
            Ok(())
        }
        Err(err) => {
            logging::log_error(Stage::Io, "Enrichment run", &err);
            Err(err)
        }
    }
}
