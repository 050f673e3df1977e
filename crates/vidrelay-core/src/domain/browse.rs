//! Sort keys and result limits for the listing routes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hard cap on `/search` results. Not configurable, unlike [`BrowseLimit`].
pub const SEARCH_RESULT_CAP: usize = 30;

/// Default number of results for browse routes.
pub const DEFAULT_BROWSE_LIMIT: u32 = 10;

/// Largest accepted browse limit.
pub const MAX_BROWSE_LIMIT: u32 = 50;

/// Ranking window for the top-videos listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TopSort {
    #[default]
    #[serde(rename = "all-time")]
    AllTime,
    #[serde(rename = "week")]
    Week,
}

impl TopSort {
    /// Wire value used in query strings and responses.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AllTime => "all-time",
            Self::Week => "week",
        }
    }
}

impl fmt::Display for TopSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognised sort key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("sort must be 'all-time' or 'week', got '{0}'")]
pub struct InvalidSort(pub String);

impl FromStr for TopSort {
    type Err = InvalidSort;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all-time" => Ok(Self::AllTime),
            "week" => Ok(Self::Week),
            other => Err(InvalidSort(other.to_string())),
        }
    }
}

/// Number of results a browse route may return, within `1..=50`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BrowseLimit(u32);

/// Error for a limit outside `1..=MAX_BROWSE_LIMIT`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("limit must be between 1 and {MAX_BROWSE_LIMIT}, got {0}")]
pub struct InvalidLimit(pub i64);

impl BrowseLimit {
    /// Validate a raw limit.
    pub fn new(raw: i64) -> Result<Self, InvalidLimit> {
        match u32::try_from(raw) {
            Ok(value) if (1..=MAX_BROWSE_LIMIT).contains(&value) => Ok(Self(value)),
            _ => Err(InvalidLimit(raw)),
        }
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// The limit as a `take()` count.
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl Default for BrowseLimit {
    fn default() -> Self {
        Self(DEFAULT_BROWSE_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_round_trips_wire_values() {
        assert_eq!("all-time".parse::<TopSort>(), Ok(TopSort::AllTime));
        assert_eq!("week".parse::<TopSort>(), Ok(TopSort::Week));
        assert_eq!(TopSort::default(), TopSort::AllTime);
        assert_eq!(TopSort::Week.to_string(), "week");
    }

    #[test]
    fn test_sort_rejects_unknown_value() {
        let err = "month".parse::<TopSort>().unwrap_err();
        assert!(err.to_string().contains("month"));
    }

    #[test]
    fn test_sort_serializes_as_wire_value() {
        assert_eq!(
            serde_json::to_string(&TopSort::AllTime).unwrap(),
            "\"all-time\""
        );
    }

    #[test]
    fn test_limit_bounds() {
        assert!(BrowseLimit::new(0).is_err());
        assert!(BrowseLimit::new(-3).is_err());
        assert!(BrowseLimit::new(51).is_err());
        assert_eq!(BrowseLimit::new(1).unwrap().get(), 1);
        assert_eq!(BrowseLimit::new(50).unwrap().as_usize(), 50);
        assert_eq!(BrowseLimit::default().get(), DEFAULT_BROWSE_LIMIT);
    }
}
