//! Per-train price enrichment.
//!
//! Each train's fare lookup is an independent unit of work keyed by the
//! train's identity. Lookups run concurrently with a bounded fan-out and
//! merge back into their own row. A failed lookup leaves that row's
//! availability-only cells intact and affects no other row.

use std::collections::HashMap;

use futures::stream::{self, StreamExt};
use tracing::warn;

use crate::domain::{SeatClass, TrainListing, TravelDate};
use crate::upstream::{TicketSource, UpstreamError};

/// How many fare lookups may be in flight at once.
const FARE_LOOKUP_CONCURRENCY: usize = 4;

/// Fetch fares for every row and merge them in place.
///
/// Rows come back in their original order; `buffered` keeps results
/// aligned with the rows that produced them.
pub async fn enrich_rows<S: TicketSource>(source: &S, date: TravelDate, rows: &mut [TrainListing]) {
    let results: Vec<Result<HashMap<SeatClass, String>, UpstreamError>> =
        stream::iter(rows.iter())
            .map(|row| source.query_prices(row, date))
            .buffered(FARE_LOOKUP_CONCURRENCY)
            .collect()
            .await;

    for (row, result) in rows.iter_mut().zip(results) {
        match result {
            Ok(fares) => merge_prices(row, &fares),
            Err(e) => {
                warn!(code = %row.code, error = %e, "fare lookup failed; keeping availability only");
            }
        }
    }
}

/// Merge one train's fare lookup result into its row.
///
/// Only classes present in `fares` gain a price line; everything else
/// keeps its availability-only cell.
pub fn merge_prices(row: &mut TrainListing, fares: &HashMap<SeatClass, String>) {
    for (class, fare) in fares {
        row.prices.set(*class, Some(fare.clone()));
    }
}
