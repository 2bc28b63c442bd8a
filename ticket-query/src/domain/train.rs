//! Train rows and train-type classification.

use super::seat::{SeatClass, SeatMap};

/// Upstream availability marker meaning "sold out".
pub const SOLD_OUT: &str = "无";

/// Train category, derived from the first letter of the public code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrainType {
    /// G (high-speed rail)
    HighSpeed,
    /// D (bullet, EMU)
    Bullet,
    /// K (fast)
    Fast,
    /// T (express)
    Express,
    /// Z (direct express)
    Direct,
    /// C (intercity)
    Intercity,
    /// Anything else, including purely numeric codes
    Other,
}

impl TrainType {
    /// Classify a public train code by its first letter.
    ///
    /// Matching is case-insensitive. Codes with no recognised prefix
    /// classify as [`TrainType::Other`].
    pub fn of_code(code: &str) -> TrainType {
        match code.chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('G') => TrainType::HighSpeed,
            Some('D') => TrainType::Bullet,
            Some('K') => TrainType::Fast,
            Some('T') => TrainType::Express,
            Some('Z') => TrainType::Direct,
            Some('C') => TrainType::Intercity,
            _ => TrainType::Other,
        }
    }
}

/// One train's schedule entry, as a named-field row.
///
/// Built exactly once from an upstream record at the deserialization
/// boundary; the enrichment step later attaches fares. Nothing here
/// depends on upstream field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainListing {
    /// Internal train id, used by the price endpoint
    pub train_no: String,
    /// Public train code shown to the user (e.g. "G6", "T109")
    pub code: String,
    /// Origin display name
    pub from_station: String,
    /// Destination display name
    pub to_station: String,
    /// Departure time, "HH:MM"
    pub departure: String,
    /// Arrival time, "HH:MM"
    pub arrival: String,
    /// Journey duration, "HH:MM"
    pub duration: String,
    /// Whether the train can currently be booked
    pub bookable: bool,
    /// Stop sequence number of the origin within this train
    pub from_station_no: String,
    /// Stop sequence number of the destination within this train
    pub to_station_no: String,
    /// Seat-type code string forwarded to the price endpoint
    pub seat_types: String,
    /// Availability per seat class
    pub availability: SeatMap<String>,
    /// Fare per seat class, attached by the enrichment step
    pub prices: SeatMap<Option<String>>,
}

impl TrainListing {
    /// The train's category, from its code letter.
    pub fn train_type(&self) -> TrainType {
        TrainType::of_code(&self.code)
    }

    /// Whether a seat class still has seats on offer.
    ///
    /// Empty cells mean the class is not offered on this train; the
    /// sold-out marker means it is offered but gone.
    pub fn has_seats(&self, class: SeatClass) -> bool {
        let cell = self.availability.get(class);
        !cell.is_empty() && cell != SOLD_OUT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(code: &str) -> TrainListing {
        TrainListing {
            train_no: "5l0000G10L".into(),
            code: code.into(),
            from_station: "北京".into(),
            to_station: "上海".into(),
            departure: "09:00".into(),
            arrival: "14:28".into(),
            duration: "05:28".into(),
            bookable: true,
            from_station_no: "01".into(),
            to_station_no: "10".into(),
            seat_types: "9OM".into(),
            availability: SeatMap::default(),
            prices: SeatMap::default(),
        }
    }

    #[test]
    fn classify_known_prefixes() {
        assert_eq!(TrainType::of_code("G6"), TrainType::HighSpeed);
        assert_eq!(TrainType::of_code("D301"), TrainType::Bullet);
        assert_eq!(TrainType::of_code("K101"), TrainType::Fast);
        assert_eq!(TrainType::of_code("T109"), TrainType::Express);
        assert_eq!(TrainType::of_code("Z281"), TrainType::Direct);
        assert_eq!(TrainType::of_code("C2001"), TrainType::Intercity);
    }

    #[test]
    fn classify_is_case_insensitive() {
        assert_eq!(TrainType::of_code("g6"), TrainType::HighSpeed);
        assert_eq!(TrainType::of_code("t109"), TrainType::Express);
    }

    #[test]
    fn unrecognised_codes_are_other() {
        assert_eq!(TrainType::of_code("1461"), TrainType::Other);
        assert_eq!(TrainType::of_code("Y501"), TrainType::Other);
        assert_eq!(TrainType::of_code(""), TrainType::Other);
    }

    #[test]
    fn listing_train_type_follows_code() {
        assert_eq!(listing("G6").train_type(), TrainType::HighSpeed);
        assert_eq!(listing("1461").train_type(), TrainType::Other);
    }

    #[test]
    fn has_seats_semantics() {
        let mut l = listing("G6");
        l.availability.set(SeatClass::SecondClass, "有".into());
        l.availability.set(SeatClass::FirstClass, "3".into());
        l.availability.set(SeatClass::Business, SOLD_OUT.into());
        // HardSeat left empty: not offered

        assert!(l.has_seats(SeatClass::SecondClass));
        assert!(l.has_seats(SeatClass::FirstClass));
        assert!(!l.has_seats(SeatClass::Business));
        assert!(!l.has_seats(SeatClass::HardSeat));
    }
}
