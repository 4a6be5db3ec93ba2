//! Mark parsing: raw performance strings to comparable durations
//!
//! Times are held as whole hundredths of a second so that rounding to two
//! decimals is exact and minimums are deterministic. "No valid data" is an
//! explicit variant ordered after every real time.

use std::fmt;
use std::str::FromStr;

use shared::{stage_warn, Stage};
use thiserror::Error;

/// Codes for a start that produced no time
const NON_FINISH_CODES: &[&str] = &["DNF", "DQ"];

/// Largest number of `:`-separated components (h:m:s)
const MAX_COMPONENTS: usize = 3;

/// Largest time, in hundredths, a `Mark` can hold
const MAX_HUNDREDTHS: f64 = u64::MAX as f64;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkParseError {
    #[error("Empty mark")]
    Empty,

    #[error("Malformed mark: {input:?}")]
    Malformed { input: String },
}

/// A performance, or the absence of one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Mark {
    /// Elapsed time in hundredths of a second
    Time(u64),
    /// Slower than any real time
    #[default]
    NoMark,
}

impl Mark {
    pub fn from_hundredths(hundredths: u64) -> Self {
        Mark::Time(hundredths)
    }

    /// Round a duration in seconds to the nearest hundredth
    pub fn from_seconds(seconds: f64) -> Self {
        if seconds.is_finite() && seconds >= 0.0 {
            Mark::Time((seconds * 100.0).round() as u64)
        } else {
            Mark::NoMark
        }
    }

    pub fn hundredths(&self) -> Option<u64> {
        match self {
            Mark::Time(h) => Some(*h),
            Mark::NoMark => None,
        }
    }

    pub fn seconds(&self) -> Option<f64> {
        self.hundredths().map(|h| h as f64 / 100.0)
    }

    /// Fastest of a set of marks; `NoMark` when the set is empty
    pub fn best<I: IntoIterator<Item = Mark>>(marks: I) -> Mark {
        marks.into_iter().min().unwrap_or(Mark::NoMark)
    }

    /// Parse a raw mark, failing closed.
    ///
    /// Anything [`FromStr`] rejects becomes `NoMark`, the same as a
    /// non-finish; malformed input is logged so it can be corrected upstream.
    pub fn parse_lenient(raw: &str) -> Mark {
        match raw.parse::<Mark>() {
            Ok(mark) => mark,
            Err(MarkParseError::Empty) => Mark::NoMark,
            Err(err) => {
                stage_warn!(Stage::Aggregate, "⚠️ {}, treating as no mark", err);
                Mark::NoMark
            }
        }
    }
}

impl FromStr for Mark {
    type Err = MarkParseError;

    /// Accepts `[[h:]m:]s[.ff]` with any trailing annotation after the
    /// seconds (`Q`, `h`, `PB`, ...), plus the non-finish codes.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(MarkParseError::Empty);
        }
        if NON_FINISH_CODES.contains(&trimmed) {
            return Ok(Mark::NoMark);
        }

        let malformed = || MarkParseError::Malformed { input: raw.to_string() };

        let components: Vec<&str> = trimmed.split(':').collect();
        if components.len() > MAX_COMPONENTS {
            return Err(malformed());
        }
        let (seconds_part, leading) = components.split_last().ok_or_else(malformed)?;

        let seconds_text = seconds_part.trim_end_matches(|c: char| !c.is_ascii_digit());
        if seconds_text.is_empty() || !seconds_text.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return Err(malformed());
        }
        let seconds: f64 = seconds_text.parse().map_err(|_| malformed())?;

        let mut minutes: u64 = 0;
        for part in leading {
            if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
                return Err(malformed());
            }
            let value: u64 = part.parse().map_err(|_| malformed())?;
            minutes = minutes
                .checked_mul(60)
                .and_then(|total| total.checked_add(value))
                .ok_or_else(malformed)?;
        }

        let total = minutes as f64 * 60.0 + seconds;
        if total * 100.0 >= MAX_HUNDREDTHS {
            return Err(malformed());
        }
        Ok(Mark::from_seconds(total))
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::Time(h) => write!(f, "{}.{:02}", h / 100, h % 100),
            Mark::NoMark => write!(f, "Infinity"),
        }
    }
}
