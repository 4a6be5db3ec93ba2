//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{SharedError, SharedResult};

/// Pipeline stage attached to log events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Fetch,
    Classify,
    Aggregate,
    CarryForward,
    Correlate,
    Io,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Fetch => write!(f, "fetch"),
            Stage::Classify => write!(f, "classify"),
            Stage::Aggregate => write!(f, "aggregate"),
            Stage::CarryForward => write!(f, "carry_forward"),
            Stage::Correlate => write!(f, "correlate"),
            Stage::Io => write!(f, "io"),
        }
    }
}

/// Opaque athlete identifier understood by the results archive
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AthleteId(String);

impl AthleteId {
    /// Length of the id segment at the end of a profile link
    pub const LINK_SUFFIX_LEN: usize = 8;

    pub fn new(id: impl Into<String>) -> SharedResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(SharedError::InvalidAthleteId { input: id });
        }
        Ok(Self(id))
    }

    /// Resolve an athlete id from a profile link.
    ///
    /// The last [`Self::LINK_SUFFIX_LEN`] characters are used verbatim; a link
    /// shorter than that is used whole. Blank links resolve to `None`.
    pub fn from_profile_link(link: &str) -> Option<Self> {
        let link = link.trim();
        if link.is_empty() {
            return None;
        }
        let start = link
            .char_indices()
            .rev()
            .nth(Self::LINK_SUFFIX_LEN - 1)
            .map(|(idx, _)| idx)
            .unwrap_or(0);
        Some(Self(link[start..].to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric form, as required by the archive's query variables
    pub fn as_numeric(&self) -> SharedResult<i64> {
        self.0
            .parse::<i64>()
            .map_err(|_| SharedError::NonNumericAthleteId { id: self.0.clone() })
    }
}

impl fmt::Display for AthleteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
