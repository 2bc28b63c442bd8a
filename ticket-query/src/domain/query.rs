//! Validated schedule queries.

use chrono::NaiveDate;

use crate::stations::StationDirectory;

use super::date::TravelDate;
use super::error::{QueryError, StationSide};
use super::station::Telecode;

/// A station as resolved through the directory: the display name the
/// user typed plus its upstream telecode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStation {
    pub name: String,
    pub code: Telecode,
}

/// A fully validated schedule query. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct ScheduleQuery {
    pub date: TravelDate,
    pub origin: ResolvedStation,
    pub destination: ResolvedStation,
}

impl ScheduleQuery {
    /// Resolve raw user input into a validated query.
    ///
    /// `today` anchors the pre-sale window. Both station names must be
    /// present in the directory; the error names which side failed.
    pub fn resolve(
        date: &str,
        from: &str,
        to: &str,
        directory: &StationDirectory,
        today: NaiveDate,
    ) -> Result<Self, QueryError> {
        let date = TravelDate::parse(date, today)?;
        let origin = resolve_station(from, directory, StationSide::Origin)?;
        let destination = resolve_station(to, directory, StationSide::Destination)?;

        Ok(Self {
            date,
            origin,
            destination,
        })
    }
}

fn resolve_station(
    name: &str,
    directory: &StationDirectory,
    side: StationSide,
) -> Result<ResolvedStation, QueryError> {
    directory
        .get(name)
        .map(|code| ResolvedStation {
            name: name.to_string(),
            code,
        })
        .ok_or_else(|| QueryError::UnknownStation {
            side,
            name: name.to_string(),
        })
}
