//! Presentation: row filtering and table rendering.

mod filter;
mod table;

pub use filter::{TrainTypeFilter, filter_listings};
pub use table::build_table;
