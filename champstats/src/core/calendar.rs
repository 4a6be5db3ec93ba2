//! Championship cutoff dates keyed by year

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EnrichError, EnrichResult};

/// World Championships / Olympic men's 10,000 m final dates
const WORLD_CHAMPIONSHIPS_10000M: &[(i32, u32, u32)] = &[
    (1980, 7, 26),  // Moscow
    (1983, 8, 7),   // Helsinki
    (1984, 8, 11),  // Los Angeles
    (1987, 8, 30),  // Rome
    (1988, 9, 24),  // Seoul
    (1991, 8, 26),  // Tokyo
    (1992, 8, 8),   // Barcelona
    (1993, 8, 16),  // Stuttgart
    (1995, 8, 6),   // Gothenburg
    (1996, 8, 3),   // Atlanta
    (1997, 8, 3),   // Athens
    (1999, 8, 22),  // Seville
    (2000, 9, 24),  // Sydney
    (2001, 8, 6),   // Edmonton
    (2003, 8, 23),  // Saint-Denis
    (2004, 8, 27),  // Athens
    (2005, 8, 6),   // Helsinki
    (2007, 8, 25),  // Osaka
    (2008, 8, 15),  // Beijing
    (2009, 8, 17),  // Berlin
    (2011, 8, 28),  // Daegu
    (2012, 8, 4),   // London
    (2013, 8, 10),  // Moscow
    (2015, 8, 22),  // Beijing
    (2016, 8, 12),  // Rio
    (2017, 8, 4),   // London
    (2019, 10, 6),  // Doha
    (2021, 7, 30),  // Tokyo
    (2022, 7, 17),  // Eugene
    (2023, 8, 20),  // Budapest
];

/// Read-only mapping from year to championship date
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChampionshipCalendar {
    dates: BTreeMap<i32, NaiveDate>,
}

impl ChampionshipCalendar {
    pub fn new(dates: BTreeMap<i32, NaiveDate>) -> Self {
        Self { dates }
    }

    pub fn world_championships_10000m() -> Self {
        let dates = WORLD_CHAMPIONSHIPS_10000M
            .iter()
            .filter_map(|&(year, month, day)| {
                NaiveDate::from_ymd_opt(year, month, day).map(|date| (year, date))
            })
            .collect();
        Self { dates }
    }

    /// Parse a `{ "<year>": "YYYY-MM-DD" }` JSON object
    pub fn from_json_str(json: &str) -> EnrichResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> EnrichResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| EnrichError::ConfigError {
            field: "calendar".to_string(),
            value: format!("{}: {}", path.display(), e),
        })?;
        Self::from_json_str(&json)
    }

    pub fn cutoff(&self, year: i32) -> Option<NaiveDate> {
        self.dates.get(&year).copied()
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
