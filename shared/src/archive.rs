//! Wire shape of the results archive, limited to the fields the
//! statistics engine consumes

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{SharedError, SharedResult};

/// Date formats the archive has been observed to emit
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d %b %Y", "%d %B %Y"];

/// Missing or `null` fields take the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One result as listed by the archive
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRecord {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub competition: Option<String>,
    #[serde(default)]
    pub mark: Option<String>,
    #[serde(default)]
    pub wind: Option<String>,
    #[serde(default)]
    pub not_legal: Option<bool>,
}

impl PerformanceRecord {
    pub fn new(date: &str, mark: &str) -> Self {
        Self {
            date: Some(date.to_string()),
            mark: Some(mark.to_string()),
            ..Self::default()
        }
    }

    /// Calendar date of the result, if the archive supplied a readable one
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(|raw| parse_archive_date(raw).ok())
    }
}

/// Results for one event group (discipline + venue) within a season
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResults {
    #[serde(default, deserialize_with = "null_as_default")]
    pub indoor: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub discipline: String,
    #[serde(default)]
    pub results: Vec<PerformanceRecord>,
}

impl EventResults {
    pub fn outdoor(discipline: &str, results: Vec<PerformanceRecord>) -> Self {
        Self {
            indoor: false,
            discipline: discipline.to_string(),
            results,
        }
    }

    pub fn indoor(discipline: &str, results: Vec<PerformanceRecord>) -> Self {
        Self {
            indoor: true,
            discipline: discipline.to_string(),
            results,
        }
    }
}

/// All results for one athlete in one calendar year, grouped by event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonResults {
    #[serde(default)]
    pub results_by_event: Vec<EventResults>,
}

impl SeasonResults {
    pub fn new(results_by_event: Vec<EventResults>) -> Self {
        Self { results_by_event }
    }

    pub fn record_count(&self) -> usize {
        self.results_by_event.iter().map(|event| event.results.len()).sum()
    }
}

/// Parse a date string in any of the archive's formats
pub fn parse_archive_date(raw: &str) -> SharedResult<NaiveDate> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| SharedError::InvalidDate { input: raw.to_string() })
}
