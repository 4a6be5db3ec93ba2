//! Record correlation: joins per-athlete statistics onto table rows
//!
//! Rows are processed strictly in input order. The first row for an athlete
//! triggers a full, year-ordered build of that athlete's history; later rows
//! for the same athlete reuse it. Histories live only for one run.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use shared::{logging, stage_debug, stage_info, stage_warn, AthleteId, Stage};

use crate::core::{classify, summarize, AthleteHistory, AthleteYearStats, ChampionshipCalendar, TargetEvent};
use crate::error::{EnrichError, EnrichResult};
use crate::fetch::SeasonFetcher;
use crate::traits::{ResultsArchive, Sleeper, TableStore};
use crate::types::{EnrichmentReport, InputRow, OutputRow, RowEnrichment, RunSummary, STATS_HEADER};

/// Outcome of building one athlete's history
#[derive(Debug, Clone)]
enum AthleteRecord {
    Ready(AthleteHistory),
    Failed(String),
}

/// Drives fetch, classification, aggregation and carry-forward per athlete
pub struct Enricher<A, S>
where
    A: ResultsArchive,
    S: Sleeper,
{
    fetcher: SeasonFetcher<A, S>,
    calendar: ChampionshipCalendar,
    target: TargetEvent,
    athletes: HashMap<AthleteId, AthleteRecord>,
}

impl<A, S> Enricher<A, S>
where
    A: ResultsArchive,
    S: Sleeper,
{
    pub fn new(fetcher: SeasonFetcher<A, S>, calendar: ChampionshipCalendar, target: TargetEvent) -> Self {
        Self {
            fetcher,
            calendar,
            target,
            athletes: HashMap::new(),
        }
    }

    /// Number of athletes resolved so far, including failures
    pub fn resolved_athletes(&self) -> usize {
        self.athletes.len()
    }

    /// The memoized history for an athlete, if it was built successfully
    pub fn history(&self, athlete: &AthleteId) -> Option<&AthleteHistory> {
        match self.athletes.get(athlete) {
            Some(AthleteRecord::Ready(history)) => Some(history),
            _ => None,
        }
    }

    /// Resolve an athlete's history, building it on first sight
    pub async fn athlete_history(&mut self, athlete: &AthleteId) -> EnrichResult<&AthleteHistory> {
        let Self {
            fetcher,
            calendar,
            target,
            athletes,
        } = self;

        let record = match athletes.entry(athlete.clone()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let record = match build_history(fetcher, calendar, target, athlete).await {
                    Ok(history) => AthleteRecord::Ready(history),
                    Err(err) => {
                        logging::log_error(Stage::Correlate, &format!("history for athlete {athlete}"), &err);
                        AthleteRecord::Failed(err.to_string())
                    }
                };
                entry.insert(record)
            }
        };

        match record {
            AthleteRecord::Ready(history) => Ok(history),
            AthleteRecord::Failed(message) => Err(EnrichError::AthleteUnavailable {
                athlete: athlete.to_string(),
                message: message.clone(),
            }),
        }
    }

    /// Enrich one row.
    ///
    /// Rows without an athlete reference come back unreferenced; an
    /// unavailable athlete is an error for the caller to decide on.
    pub async fn enrich_row(&mut self, row: InputRow) -> EnrichResult<OutputRow> {
        let Some(athlete) = row.athlete_id() else {
            return Ok(OutputRow {
                input: row,
                enrichment: RowEnrichment::Unreferenced,
            });
        };

        let year = row.year();
        let history = self.athlete_history(&athlete).await?;
        let stats = match year {
            Some(year) => history.stats_or_sentinel(year),
            None => AthleteYearStats::sentinel(),
        };

        Ok(OutputRow {
            input: row,
            enrichment: RowEnrichment::Stats(stats),
        })
    }

    /// Enrich every row, in order; always yields one output row per input row
    pub async fn enrich_rows(&mut self, rows: Vec<InputRow>) -> EnrichmentReport {
        let mut report = EnrichmentReport {
            rows: Vec::with_capacity(rows.len()),
            summary: RunSummary::default(),
        };

        for row in rows {
            let athlete = row.athlete_id();
            let output = match self.enrich_row(row.clone()).await {
                Ok(output) => output,
                Err(err) => {
                    if let Some(athlete) = athlete {
                        report
                            .summary
                            .failed_athletes
                            .entry(athlete)
                            .or_insert_with(|| err.to_string());
                    }
                    OutputRow {
                        input: row,
                        enrichment: RowEnrichment::Stats(AthleteYearStats::sentinel()),
                    }
                }
            };

            match &output.enrichment {
                RowEnrichment::Unreferenced => report.summary.unreferenced += 1,
                RowEnrichment::Stats(stats) if *stats == AthleteYearStats::sentinel() => {
                    report.summary.sentineled += 1
                }
                RowEnrichment::Stats(_) => report.summary.enriched += 1,
            }
            report.rows.push(output);
        }

        report
    }

    /// Read the table, enrich it and write it back out
    pub async fn run<T: TableStore>(&mut self, store: &T) -> EnrichResult<RunSummary> {
        let table = store.read_table().await?;
        logging::log_progress(Stage::Io, "Read table", &format!("{} rows", table.rows.len()));

        let report = self.enrich_rows(table.rows).await;

        let header = table.header.map(|mut header| {
            header.extend(STATS_HEADER.iter().map(|name| name.to_string()));
            header
        });
        store.write_table(header, &report.rows).await?;

        let summary = report.summary;
        stage_info!(
            Stage::Correlate,
            "✅ {} rows written: {} enriched, {} without data, {} without athlete reference, {} athletes failed",
            summary.total_rows(),
            summary.enriched,
            summary.sentineled,
            summary.unreferenced,
            summary.failed_athletes.len()
        );
        Ok(summary)
    }
}

/// Fold an athlete's active years, oldest first, into a history
async fn build_history<A, S>(
    fetcher: &SeasonFetcher<A, S>,
    calendar: &ChampionshipCalendar,
    target: &TargetEvent,
    athlete: &AthleteId,
) -> EnrichResult<AthleteHistory>
where
    A: ResultsArchive,
    S: Sleeper,
{
    let years = fetcher.active_years(athlete).await?;

    let mut history = AthleteHistory::new();
    for year in years {
        let Some(season) = fetcher.season(athlete, year).await else {
            continue;
        };

        let cutoff = calendar.cutoff(year);
        if cutoff.is_none() {
            stage_warn!(
                Stage::Aggregate,
                "no championship date for {}, season best and race count unavailable",
                year
            );
        }

        let view = classify(&season, target);
        stage_debug!(
            Stage::Classify,
            "athlete {} {}: {} starts, {} in {}",
            athlete,
            year,
            view.unfiltered.len(),
            view.discipline.len(),
            target.discipline
        );
        let summary = summarize(&view, cutoff);
        history.fold_year(year, &summary)?;
    }

    stage_info!(
        Stage::Correlate,
        "📋 athlete {}: {} seasons folded",
        athlete,
        history.len()
    );
    Ok(history)
}
