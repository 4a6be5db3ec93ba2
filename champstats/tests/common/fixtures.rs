//! Test fixtures: athletes, seasons and table rows

use shared::{AthleteId, EventResults, PerformanceRecord, SeasonResults};

use champstats::InputRow;

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const RUNNER_LINK: &'static str = "https://worldathletics.org/athletes/uganda/joshua-cheptegei-14654223";
    pub const RUNNER_NAME: &'static str = "Joshua Cheptegei";
    pub const RUNNER_ID: &'static str = "14654223";

    pub const BROKEN_LINK: &'static str = "https://worldathletics.org/athletes/kenya/rhonex-kipruto-14674591";
    pub const BROKEN_NAME: &'static str = "Rhonex Kipruto";
    pub const BROKEN_ID: &'static str = "14674591";

    pub const DISCIPLINE: &'static str = "10,000 Metres";

    pub fn runner_id() -> AthleteId {
        AthleteId::new(Self::RUNNER_ID).unwrap()
    }

    pub fn broken_id() -> AthleteId {
        AthleteId::new(Self::BROKEN_ID).unwrap()
    }

    /// Active years in archive order: unsorted, with a duplicate and an empty year
    pub fn runner_active_years() -> Vec<i32> {
        vec![2019, 2014, 2016, 2022, 2017, 2018, 2016]
    }

    /// Season results for the runner; `None` where the archive has nothing
    pub fn runner_season(year: i32) -> Option<SeasonResults> {
        let ten_k = |results: Vec<PerformanceRecord>| EventResults::outdoor(Self::DISCIPLINE, results);
        match year {
            // No championship that year
            2014 => Some(SeasonResults::new(vec![ten_k(vec![PerformanceRecord::new(
                "2014-07-01",
                "28:00.00",
            )])])),
            2016 => Some(SeasonResults::new(vec![
                ten_k(vec![
                    PerformanceRecord::new("2016-05-01", "27:30.00"),
                    // Championship day itself, excluded from the season best
                    PerformanceRecord::new("2016-08-12", "27:10.00"),
                ]),
                EventResults::outdoor("5000 Metres", vec![PerformanceRecord::new("2016-06-01", "13:10.00")]),
                EventResults::indoor(Self::DISCIPLINE, vec![PerformanceRecord::new("2016-02-01", "26:00.00")]),
            ])),
            2017 => Some(SeasonResults::new(vec![ten_k(vec![
                PerformanceRecord::new("2017-07-01", "27:40.00"),
                PerformanceRecord::new("2017-07-15", "DNF"),
            ])])),
            2019 => Some(SeasonResults::new(vec![ten_k(vec![
                PerformanceRecord::new("2019-09-01", "27:20.00"),
                PerformanceRecord::new("2019-10-20", "26:48.00"),
            ])])),
            2022 => Some(SeasonResults::new(vec![ten_k(vec![PerformanceRecord::new(
                "2022-06-01",
                "27:45.00",
            )])])),
            _ => None,
        }
    }

    pub fn runner_row(year: &str) -> InputRow {
        InputRow::from_parts("1", "27:00.00", year, Self::RUNNER_NAME, Self::RUNNER_LINK)
    }

    pub fn broken_row(year: &str) -> InputRow {
        InputRow::from_parts("2", "27:05.00", year, Self::BROKEN_NAME, Self::BROKEN_LINK)
    }

    pub fn unreferenced_row(year: &str) -> InputRow {
        InputRow::from_parts("3", "27:10.00", year, "Unknown Runner", "")
    }

    pub fn header() -> Vec<String> {
        ["Place", "Mark", "Year", "Name", "Link"]
            .iter()
            .map(|name| name.to_string())
            .collect()
    }
}
