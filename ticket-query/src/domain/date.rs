//! Travel date validation.
//!
//! The upstream sells tickets on a rolling window: queries are accepted
//! for today through today plus 29 days. Anything outside that window is
//! rejected before a request is made.

use std::fmt;

use chrono::{Duration, NaiveDate};

use super::error::QueryError;

/// Length of the upstream pre-sale window, in days after today.
pub const PRESALE_WINDOW_DAYS: i64 = 29;

/// A travel date validated against the pre-sale window.
///
/// Construction takes `today` as a parameter, so the window boundary is
/// under the caller's control. Display renders as `YYYY-MM-DD`, the form
/// the upstream query parameters expect.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use ticket_query::domain::TravelDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
///
/// let date = TravelDate::parse("2026-08-20", today).unwrap();
/// assert_eq!(date.to_string(), "2026-08-20");
///
/// // Yesterday and anything past the window are rejected
/// assert!(TravelDate::parse("2026-08-06", today).is_err());
/// assert!(TravelDate::parse("2026-09-07", today).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TravelDate(NaiveDate);

impl TravelDate {
    /// Parse and validate a `YYYY-MM-DD` date string.
    ///
    /// Returns a distinct error kind for each failure mode: malformed
    /// input, a date before `today`, and a date beyond the pre-sale
    /// horizon. `today` itself is the earliest accepted date.
    pub fn parse(s: &str, today: NaiveDate) -> Result<Self, QueryError> {
        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| QueryError::InvalidDateFormat(s.to_string()))?;

        if date < today {
            return Err(QueryError::DateInPast(date));
        }
        if date > today + Duration::days(PRESALE_WINDOW_DAYS) {
            return Err(QueryError::DateOutOfSalesWindow(date));
        }

        Ok(Self(date))
    }

    /// Returns the underlying calendar date.
    pub fn as_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Debug for TravelDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TravelDate({})", self.0)
    }
}

impl fmt::Display for TravelDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    #[test]
    fn accepts_today() {
        assert!(TravelDate::parse("2026-08-07", today()).is_ok());
    }

    #[test]
    fn accepts_last_day_of_window() {
        // today + 29
        assert!(TravelDate::parse("2026-09-05", today()).is_ok());
    }

    #[test]
    fn rejects_yesterday_as_past() {
        let err = TravelDate::parse("2026-08-06", today()).unwrap_err();
        assert!(matches!(err, QueryError::DateInPast(_)));
    }

    #[test]
    fn rejects_day_after_window() {
        // today + 30
        let err = TravelDate::parse("2026-09-06", today()).unwrap_err();
        assert!(matches!(err, QueryError::DateOutOfSalesWindow(_)));
    }

    #[test]
    fn rejects_malformed_input() {
        for s in ["", "2026", "2026-08", "08-07-2026", "2026/08/07", "not a date"] {
            let err = TravelDate::parse(s, today()).unwrap_err();
            assert!(matches!(err, QueryError::InvalidDateFormat(_)), "input: {s}");
        }
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(TravelDate::parse("2026-02-30", today()).is_err());
        assert!(TravelDate::parse("2026-13-01", today()).is_err());
    }

    #[test]
    fn display_is_upstream_format() {
        let date = TravelDate::parse("2026-08-09", today()).unwrap();
        assert_eq!(date.to_string(), "2026-08-09");
    }

    #[test]
    fn window_spans_across_month_boundary() {
        let today = NaiveDate::from_ymd_opt(2026, 12, 20).unwrap();
        assert!(TravelDate::parse("2027-01-18", today).is_ok());
        assert!(TravelDate::parse("2027-01-19", today).is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_today() -> impl Strategy<Value = NaiveDate> {
        (2020i32..2090, 1u32..=12, 1u32..=28)
            .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    proptest! {
        /// Every offset within the window is accepted
        #[test]
        fn window_accepted(today in any_today(), offset in 0i64..=PRESALE_WINDOW_DAYS) {
            let date = today + Duration::days(offset);
            let s = date.format("%Y-%m-%d").to_string();
            prop_assert!(TravelDate::parse(&s, today).is_ok());
        }

        /// Every offset beyond the window is rejected as out of window
        #[test]
        fn beyond_window_rejected(today in any_today(), extra in 1i64..365) {
            let date = today + Duration::days(PRESALE_WINDOW_DAYS + extra);
            let s = date.format("%Y-%m-%d").to_string();
            let err = TravelDate::parse(&s, today).unwrap_err();
            prop_assert!(matches!(err, QueryError::DateOutOfSalesWindow(_)));
        }

        /// Every date before today is rejected as past
        #[test]
        fn past_rejected(today in any_today(), back in 1i64..365) {
            let date = today - Duration::days(back);
            let s = date.format("%Y-%m-%d").to_string();
            let err = TravelDate::parse(&s, today).unwrap_err();
            prop_assert!(matches!(err, QueryError::DateInPast(_)));
        }
    }
}
