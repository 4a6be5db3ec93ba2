//! Core statistics logic
//!
//! Pure, I/O-free functions over already-fetched season results.
//! Everything here is deterministic and tested in isolation.

pub mod aggregate;
pub mod calendar;
pub mod carry;
pub mod classify;
pub mod mark;

pub use aggregate::{summarize, SeasonSummary};
pub use calendar::ChampionshipCalendar;
pub use carry::{AthleteHistory, AthleteYearStats};
pub use classify::{classify, ClassifiedView, TargetEvent};
pub use mark::{Mark, MarkParseError};
