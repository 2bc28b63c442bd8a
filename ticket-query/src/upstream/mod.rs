//! Upstream ticketing API client.
//!
//! HTTP client for the ticketing site's undocumented JSON API.
//! Key characteristics of the upstream:
//! - Two chained GET endpoints: a schedule query, then a per-train price
//!   query keyed by the train's internal id.
//! - A non-empty `messages` array in the schedule envelope signals a
//!   rejected query (e.g. a date outside the pre-sale window) and is
//!   distinct from an empty result set.
//! - The host's TLS chain does not validate, so certificate verification
//!   is a configuration knob rather than an assumption.

mod client;
mod convert;
mod error;
mod source;
mod types;

pub mod mock;

pub use client::{ClientConfig, TicketClient};
pub use convert::{ConversionError, convert_entries, convert_entry};
pub use error::UpstreamError;
pub use source::TicketSource;
pub use types::{LeftTicketDto, PriceResponse, ScheduleResponse, TrainEntry};
