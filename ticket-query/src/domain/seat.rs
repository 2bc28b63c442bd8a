//! Seat classes and the fixed column schema.
//!
//! Every train row carries one cell per seat class, in a fixed order
//! that never depends on which upstream fields produced it. The price
//! endpoint keys fares by a two-letter code per class; that mapping
//! lives here too.

/// The fare classes offered by the upstream, in canonical column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeatClass {
    /// 商务/特等 (business / premier)
    Business,
    /// 一等 (first class)
    FirstClass,
    /// 二等 (second class)
    SecondClass,
    /// 软卧 (soft sleeper)
    SoftSleeper,
    /// 硬卧 (hard sleeper)
    HardSleeper,
    /// 软座 (soft seat)
    SoftSeat,
    /// 硬座 (hard seat)
    HardSeat,
    /// 无座 (standing room)
    NoSeat,
}

impl SeatClass {
    /// All seat classes, in canonical column order.
    pub const ALL: [SeatClass; 8] = [
        SeatClass::Business,
        SeatClass::FirstClass,
        SeatClass::SecondClass,
        SeatClass::SoftSleeper,
        SeatClass::HardSleeper,
        SeatClass::SoftSeat,
        SeatClass::HardSeat,
        SeatClass::NoSeat,
    ];

    /// Column label shown in the table header.
    pub fn label(&self) -> &'static str {
        match self {
            SeatClass::Business => "商务/特等",
            SeatClass::FirstClass => "一等",
            SeatClass::SecondClass => "二等",
            SeatClass::SoftSleeper => "软卧",
            SeatClass::HardSleeper => "硬卧",
            SeatClass::SoftSeat => "软座",
            SeatClass::HardSeat => "硬座",
            SeatClass::NoSeat => "无座",
        }
    }

    /// The two-letter code keying this class in the price response.
    pub fn fare_code(&self) -> &'static str {
        match self {
            SeatClass::Business => "A9",
            SeatClass::FirstClass => "M",
            SeatClass::SecondClass => "O",
            SeatClass::SoftSleeper => "A4",
            SeatClass::HardSleeper => "A3",
            SeatClass::SoftSeat => "A2",
            SeatClass::HardSeat => "A1",
            SeatClass::NoSeat => "WZ",
        }
    }

    /// Reverse lookup from a price-response key.
    pub fn from_fare_code(code: &str) -> Option<SeatClass> {
        SeatClass::ALL.into_iter().find(|c| c.fare_code() == code)
    }

    /// Position of this class within [`SeatClass::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Per-seat-class storage, one slot per class in canonical order.
///
/// Keeps the 1:1 correspondence between seat classes and row cells a
/// type-level guarantee rather than a parallel-array convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatMap<T>([T; 8]);

impl<T> SeatMap<T> {
    /// Returns the value for one seat class.
    pub fn get(&self, class: SeatClass) -> &T {
        &self.0[class.index()]
    }

    /// Replaces the value for one seat class.
    pub fn set(&mut self, class: SeatClass, value: T) {
        self.0[class.index()] = value;
    }
}

impl<T: Default> Default for SeatMap<T> {
    fn default() -> Self {
        Self(std::array::from_fn(|_| T::default()))
    }
}

impl<T> From<[T; 8]> for SeatMap<T> {
    /// Values must be in [`SeatClass::ALL`] order.
    fn from(values: [T; 8]) -> Self {
        Self(values)
    }
}
