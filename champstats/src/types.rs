//! Table row types and run reporting

use std::collections::BTreeMap;

use shared::AthleteId;

use crate::core::AthleteYearStats;

/// Column positions in the championship results table
pub const PLACE_COLUMN: usize = 0;
pub const MARK_COLUMN: usize = 1;
pub const YEAR_COLUMN: usize = 2;
pub const NAME_COLUMN: usize = 3;
pub const LINK_COLUMN: usize = 4;

/// Header names for the appended statistics columns
pub const STATS_HEADER: [&str; 4] = ["SeasonBest", "PersonalBest", "RaceCount", "SeasonStart"];

/// One championship appearance, fields kept verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRow {
    fields: Vec<String>,
}

impl InputRow {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    pub fn from_parts(place: &str, mark: &str, year: &str, name: &str, link: &str) -> Self {
        Self::new(
            [place, mark, year, name, link]
                .iter()
                .map(|field| field.to_string())
                .collect(),
        )
    }

    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn year(&self) -> Option<i32> {
        self.field(YEAR_COLUMN).and_then(|year| year.trim().parse().ok())
    }

    pub fn athlete_name(&self) -> Option<&str> {
        self.field(NAME_COLUMN)
    }

    pub fn athlete_id(&self) -> Option<AthleteId> {
        self.field(LINK_COLUMN).and_then(AthleteId::from_profile_link)
    }
}

/// A table read from storage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputTable {
    pub header: Option<Vec<String>>,
    pub rows: Vec<InputRow>,
}

/// What was appended to a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowEnrichment {
    /// Stats for the row's athlete-year (possibly the no-data sentinel)
    Stats(AthleteYearStats),
    /// No athlete reference; columns left empty
    Unreferenced,
}

/// An input row with its statistics columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub input: InputRow,
    pub enrichment: RowEnrichment,
}

impl OutputRow {
    pub fn stats(&self) -> Option<&AthleteYearStats> {
        match &self.enrichment {
            RowEnrichment::Stats(stats) => Some(stats),
            RowEnrichment::Unreferenced => None,
        }
    }

    /// Input fields followed by SeasonBest, PersonalBest, RaceCount, SeasonStart
    pub fn to_record(&self) -> Vec<String> {
        let appended: [String; 4] = match &self.enrichment {
            RowEnrichment::Stats(stats) => [
                stats.season_best.to_string(),
                stats.personal_best.to_string(),
                stats.race_count.to_string(),
                stats
                    .season_start
                    .map(|date| date.format("%Y-%m-%d").to_string())
                    .unwrap_or_default(),
            ],
            RowEnrichment::Unreferenced => Default::default(),
        };

        self.input.fields().iter().cloned().chain(appended).collect()
    }
}

/// Counters for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Rows whose athlete-year had data
    pub enriched: usize,
    /// Rows emitted with sentinel values
    pub sentineled: usize,
    /// Rows with no athlete reference
    pub unreferenced: usize,
    /// Athletes whose history could not be built, with the reason
    pub failed_athletes: BTreeMap<AthleteId, String>,
}

impl RunSummary {
    pub fn total_rows(&self) -> usize {
        self.enriched + self.sentineled + self.unreferenced
    }
}

/// Result of enriching a table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrichmentReport {
    pub rows: Vec<OutputRow>,
    pub summary: RunSummary,
}
