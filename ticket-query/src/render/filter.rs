//! Row filtering.
//!
//! A train is shown only if it is currently bookable, and, when any
//! train-type flag was given, only if its code letter matches one of
//! the requested types.

use crate::domain::{TrainListing, TrainType};

/// The set of train types the user asked for.
///
/// An empty filter passes every bookable train.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainTypeFilter {
    types: Vec<TrainType>,
}

impl TrainTypeFilter {
    /// Build a filter from the requested types.
    pub fn new(types: impl IntoIterator<Item = TrainType>) -> Self {
        Self {
            types: types.into_iter().collect(),
        }
    }

    /// True when no type flag was given.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Whether a listing passes this filter.
    ///
    /// Non-bookable trains never pass, regardless of type flags.
    pub fn matches(&self, listing: &TrainListing) -> bool {
        listing.bookable && (self.types.is_empty() || self.types.contains(&listing.train_type()))
    }
}

/// Keep exactly the rows the user asked to see.
pub fn filter_listings(listings: Vec<TrainListing>, filter: &TrainTypeFilter) -> Vec<TrainListing> {
    listings
        .into_iter()
        .filter(|listing| filter.matches(listing))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SeatMap;

    fn listing(code: &str, bookable: bool) -> TrainListing {
        TrainListing {
            train_no: format!("no-{code}"),
            code: code.into(),
            from_station: "北京".into(),
            to_station: "上海".into(),
            departure: "09:00".into(),
            arrival: "14:28".into(),
            duration: "05:28".into(),
            bookable,
            from_station_no: "01".into(),
            to_station_no: "10".into(),
            seat_types: "9OM".into(),
            availability: SeatMap::default(),
            prices: SeatMap::default(),
        }
    }

    fn all_types() -> Vec<TrainListing> {
        ["G1", "D2", "K3", "T4", "Z5", "C6", "1461"]
            .into_iter()
            .map(|code| listing(code, true))
            .collect()
    }

    #[test]
    fn no_flags_passes_all_bookable() {
        let filter = TrainTypeFilter::default();
        assert!(filter.is_empty());

        let kept = filter_listings(all_types(), &filter);
        assert_eq!(kept.len(), 7);
    }

    #[test]
    fn single_flag_selects_one_type() {
        let filter = TrainTypeFilter::new([TrainType::HighSpeed]);
        let kept = filter_listings(all_types(), &filter);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].code, "G1");
    }

    #[test]
    fn multiple_flags_select_their_union() {
        let filter = TrainTypeFilter::new([TrainType::Bullet, TrainType::Express]);
        let kept = filter_listings(all_types(), &filter);

        let codes: Vec<&str> = kept.iter().map(|l| l.code.as_str()).collect();
        assert_eq!(codes, ["D2", "T4"]);
    }

    #[test]
    fn each_recognised_letter_matches_exactly_its_train() {
        let pairs = [
            (TrainType::HighSpeed, "G1"),
            (TrainType::Bullet, "D2"),
            (TrainType::Fast, "K3"),
            (TrainType::Express, "T4"),
            (TrainType::Direct, "Z5"),
            (TrainType::Intercity, "C6"),
        ];

        for (ty, expected) in pairs {
            let kept = filter_listings(all_types(), &TrainTypeFilter::new([ty]));
            assert_eq!(kept.len(), 1, "type: {ty:?}");
            assert_eq!(kept[0].code, expected);
        }
    }

    #[test]
    fn non_bookable_excluded_with_and_without_flags() {
        let rows = vec![listing("G1", false), listing("G2", true)];

        let kept = filter_listings(rows.clone(), &TrainTypeFilter::default());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].code, "G2");

        let kept = filter_listings(rows, &TrainTypeFilter::new([TrainType::HighSpeed]));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].code, "G2");
    }

    #[test]
    fn other_typed_trains_only_pass_without_flags() {
        let rows = vec![listing("1461", true)];

        assert_eq!(filter_listings(rows.clone(), &TrainTypeFilter::default()).len(), 1);
        assert!(filter_listings(rows, &TrainTypeFilter::new([TrainType::Fast])).is_empty());
    }
}
