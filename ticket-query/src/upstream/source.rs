//! The data-source seam between the pipeline and its clients.

use std::collections::HashMap;
use std::future::Future;

use crate::domain::{ScheduleQuery, SeatClass, TrainListing, TravelDate};

use super::error::UpstreamError;
use super::types::LeftTicketDto;

/// A source of schedule records and per-train fares.
///
/// Implemented by the HTTP [`TicketClient`](super::TicketClient) and by
/// the in-memory [`MockTicketClient`](super::mock::MockTicketClient), so
/// the pipeline can be exercised without network access.
pub trait TicketSource {
    /// Fetch the raw schedule records for a validated query.
    ///
    /// A non-empty `messages` field in the envelope must surface as
    /// [`UpstreamError::Rejected`]; an empty result set is `Ok(vec![])`,
    /// never an error.
    fn query_schedule(
        &self,
        query: &ScheduleQuery,
    ) -> impl Future<Output = Result<Vec<LeftTicketDto>, UpstreamError>>;

    /// Fetch per-seat-class fares for one train.
    ///
    /// Classes the response does not price are simply absent from the
    /// returned map.
    fn query_prices(
        &self,
        train: &TrainListing,
        date: TravelDate,
    ) -> impl Future<Output = Result<HashMap<SeatClass, String>, UpstreamError>>;
}
