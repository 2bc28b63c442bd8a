//! Mock upstream client for testing without network access.
//!
//! Serves canned schedule and price envelopes through the same
//! [`TicketSource`] seam as the real client.

use std::collections::HashMap;

use crate::domain::{ScheduleQuery, SeatClass, TrainListing, TravelDate};

use super::error::UpstreamError;
use super::source::TicketSource;
use super::types::{LeftTicketDto, PriceResponse, ScheduleResponse};

/// Mock client serving pre-loaded envelopes.
///
/// The schedule envelope is served for any query. Price envelopes are
/// keyed by internal train id; trains without one get an empty fare map,
/// which is exactly what the live endpoint does for unpriced trains.
#[derive(Debug, Clone, Default)]
pub struct MockTicketClient {
    schedule: ScheduleResponse,
    prices: HashMap<String, PriceResponse>,
}

impl MockTicketClient {
    /// Create a mock serving the given schedule envelope.
    pub fn new(schedule: ScheduleResponse) -> Self {
        Self {
            schedule,
            prices: HashMap::new(),
        }
    }

    /// Parse the schedule envelope from a JSON literal.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Attach a price envelope for one train id, from a JSON literal.
    pub fn with_prices_json(
        mut self,
        train_no: impl Into<String>,
        json: &str,
    ) -> Result<Self, serde_json::Error> {
        self.prices.insert(train_no.into(), serde_json::from_str(json)?);
        Ok(self)
    }
}

impl TicketSource for MockTicketClient {
    async fn query_schedule(
        &self,
        _query: &ScheduleQuery,
    ) -> Result<Vec<LeftTicketDto>, UpstreamError> {
        if let Some(message) = self.schedule.messages.first() {
            return Err(UpstreamError::Rejected(message.clone()));
        }

        Ok(self
            .schedule
            .data
            .iter()
            .map(|entry| entry.query_left_new_dto.clone())
            .collect())
    }

    async fn query_prices(
        &self,
        train: &TrainListing,
        _date: TravelDate,
    ) -> Result<HashMap<SeatClass, String>, UpstreamError> {
        let Some(envelope) = self.prices.get(&train.train_no) else {
            return Ok(HashMap::new());
        };

        Ok(envelope
            .fares()
            .into_iter()
            .filter_map(|(code, fare)| {
                SeatClass::from_fare_code(code).map(|class| (class, fare.to_string()))
            })
            .collect())
    }
}
