//! Train ticket query tool.
//!
//! Queries a railway ticketing site's undocumented JSON API for train
//! schedules between two stations on a given date, looks up per-seat-class
//! fares for each train, and renders the result as a terminal table.

pub mod app;
pub mod cli;
pub mod domain;
pub mod enrich;
pub mod render;
pub mod stations;
pub mod upstream;
