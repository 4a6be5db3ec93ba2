//! Cutoff-bounded season aggregation

use chrono::NaiveDate;

use super::classify::ClassifiedView;
use super::mark::Mark;

/// Per-season figures derived from a classified view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonSummary {
    /// Best target-event mark strictly before the cutoff
    pub season_best: Mark,
    /// Best target-event mark over the whole year
    pub full_year_best: Mark,
    /// Starts in any discipline strictly before the cutoff
    pub race_count: u32,
    /// Earliest start of the year, ignoring the cutoff
    pub season_start: Option<NaiveDate>,
}

impl SeasonSummary {
    pub fn empty() -> Self {
        Self {
            season_best: Mark::NoMark,
            full_year_best: Mark::NoMark,
            race_count: 0,
            season_start: None,
        }
    }
}

/// Strictly before; an unknown date or unknown cutoff never qualifies
fn before_cutoff(date: Option<NaiveDate>, cutoff: Option<NaiveDate>) -> bool {
    matches!((date, cutoff), (Some(date), Some(cutoff)) if date < cutoff)
}

/// Summarize one season against its championship cutoff.
///
/// Without a cutoff the season best and race count degrade to `NoMark`
/// and zero, while the season start and full-year best are still reported.
pub fn summarize(view: &ClassifiedView<'_>, cutoff: Option<NaiveDate>) -> SeasonSummary {
    let race_count = view
        .unfiltered
        .iter()
        .filter(|record| before_cutoff(record.calendar_date(), cutoff))
        .count() as u32;

    let season_start = view
        .unfiltered
        .iter()
        .filter_map(|record| record.calendar_date())
        .min();

    let marks: Vec<(Option<NaiveDate>, Mark)> = view
        .discipline
        .iter()
        .map(|record| {
            let mark = record.mark.as_deref().map_or(Mark::NoMark, Mark::parse_lenient);
            (record.calendar_date(), mark)
        })
        .collect();

    let season_best = Mark::best(
        marks
            .iter()
            .filter(|(date, _)| before_cutoff(*date, cutoff))
            .map(|(_, mark)| *mark),
    );
    let full_year_best = Mark::best(marks.iter().map(|(_, mark)| *mark));

    SeasonSummary {
        season_best,
        full_year_best,
        race_count,
        season_start,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classify::{classify, TargetEvent};
    use shared::{EventResults, PerformanceRecord, SeasonResults};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn season() -> SeasonResults {
        SeasonResults::new(vec![
            EventResults::outdoor(
                "10,000 Metres",
                vec![
                    PerformanceRecord::new("2023-06-10", "27:20.00"),
                    PerformanceRecord::new("2023-08-20", "26:59.00"),
                    PerformanceRecord::new("2023-05-01", "27:40.00"),
                ],
            ),
            EventResults::outdoor(
                "5000 Metres",
                vec![
                    PerformanceRecord::new("2023-04-01", "13:10.00"),
                    PerformanceRecord::new("2023-09-01", "13:00.00"),
                ],
            ),
        ])
    }

    #[test]
    fn test_cutoff_bounds_best_and_count() {
        let season = season();
        let view = classify(&season, &TargetEvent::default());
        let summary = summarize(&view, Some(date(2023, 8, 20)));

        assert_eq!(summary.season_best, "27:20.00".parse::<Mark>().unwrap());
        assert_eq!(summary.full_year_best, "26:59.00".parse::<Mark>().unwrap());
        // 04-01, 05-01, 06-10; the 08-20 race is on the cutoff and excluded
        assert_eq!(summary.race_count, 3);
        assert_eq!(summary.season_start, Some(date(2023, 4, 1)));
    }

    #[test]
    fn test_result_on_cutoff_date_excluded() {
        let season = SeasonResults::new(vec![EventResults::outdoor(
            "10,000 Metres",
            vec![PerformanceRecord::new("2023-08-20", "27:00.00")],
        )]);
        let view = classify(&season, &TargetEvent::default());
        let summary = summarize(&view, Some(date(2023, 8, 20)));

        assert_eq!(summary.race_count, 0);
        assert_eq!(summary.season_best, Mark::NoMark);
        assert_eq!(summary.full_year_best, "27:00.00".parse::<Mark>().unwrap());
    }

    #[test]
    fn test_missing_cutoff_degrades() {
        let season = season();
        let view = classify(&season, &TargetEvent::default());
        let summary = summarize(&view, None);

        assert_eq!(summary.season_best, Mark::NoMark);
        assert_eq!(summary.race_count, 0);
        assert_eq!(summary.season_start, Some(date(2023, 4, 1)));
        assert_eq!(summary.full_year_best, "26:59.00".parse::<Mark>().unwrap());
    }

    #[test]
    fn test_empty_season() {
        let season = SeasonResults::default();
        let view = classify(&season, &TargetEvent::default());
        assert_eq!(summarize(&view, Some(date(2023, 8, 20))), SeasonSummary::empty());
    }

    #[test]
    fn test_undated_records_only_count_for_full_year() {
        let mut undated = PerformanceRecord::new("", "27:10.00");
        undated.date = None;
        let season = SeasonResults::new(vec![EventResults::outdoor(
            "10,000 Metres",
            vec![undated, PerformanceRecord::new("2023-05-01", "27:30.00")],
        )]);
        let view = classify(&season, &TargetEvent::default());
        let summary = summarize(&view, Some(date(2023, 8, 20)));

        assert_eq!(summary.race_count, 1);
        assert_eq!(summary.season_best, "27:30.00".parse::<Mark>().unwrap());
        assert_eq!(summary.full_year_best, "27:10.00".parse::<Mark>().unwrap());
        assert_eq!(summary.season_start, Some(date(2023, 5, 1)));
    }
}
