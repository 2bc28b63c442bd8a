//! Domain types for the ticket query tool.
//!
//! This module contains the core domain model types that represent
//! validated query input and train data. All types enforce their
//! invariants at construction time, so code that receives these types
//! can trust their validity.

mod date;
mod error;
mod query;
mod seat;
mod station;
mod train;

pub use date::{PRESALE_WINDOW_DAYS, TravelDate};
pub use error::{QueryError, StationSide};
pub use query::{ResolvedStation, ScheduleQuery};
pub use seat::{SeatClass, SeatMap};
pub use station::{InvalidTelecode, Telecode};
pub use train::{SOLD_OUT, TrainListing, TrainType};
