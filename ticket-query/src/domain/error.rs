//! Query validation error types.
//!
//! These errors represent failures while resolving raw user input into a
//! validated query. They are distinct from upstream API errors.

use std::fmt;

use chrono::NaiveDate;

use super::date::PRESALE_WINDOW_DAYS;

/// Which side of the journey a station name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationSide {
    Origin,
    Destination,
}

impl fmt::Display for StationSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StationSide::Origin => f.write_str("origin"),
            StationSide::Destination => f.write_str("destination"),
        }
    }
}

/// Errors produced while resolving raw query input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// The date string is not YYYY-MM-DD
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDateFormat(String),

    /// The date is earlier than today
    #[error("date {0} is in the past")]
    DateInPast(NaiveDate),

    /// The date is beyond the pre-sale horizon
    #[error("date {0} is outside the pre-sale window (today through today plus {n} days)", n = PRESALE_WINDOW_DAYS)]
    DateOutOfSalesWindow(NaiveDate),

    /// A station name is not in the bundled directory
    #[error("unknown {side} station: {name}")]
    UnknownStation { side: StationSide, name: String },
}
