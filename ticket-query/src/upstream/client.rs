//! Upstream HTTP client.
//!
//! Async methods for the two query endpoints. Requests run with a
//! bounded timeout and a concurrency cap shared across all calls from
//! one client.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;

use crate::domain::{ScheduleQuery, SeatClass, TrainListing, TravelDate};

use super::error::UpstreamError;
use super::source::TicketSource;
use super::types::{LeftTicketDto, PriceResponse, ScheduleResponse};

/// Default base URL of the ticketing site.
const DEFAULT_BASE_URL: &str = "https://kyfw.12306.cn";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 4;

/// Configuration for the upstream client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL (defaults to the production site)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Skip TLS certificate verification.
    ///
    /// The production host serves a chain that does not validate, so
    /// this defaults to true. Turn it off wherever the upstream is
    /// proxied or stubbed.
    pub accept_invalid_certs: bool,
}

impl ClientConfig {
    /// Create a config with production defaults.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            accept_invalid_certs: true,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the maximum number of concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Enforce TLS certificate verification.
    pub fn with_verified_tls(mut self) -> Self {
        self.accept_invalid_certs = false;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Upstream API client.
///
/// Uses a semaphore to limit concurrent requests so the per-train fare
/// fan-out cannot hammer the site.
#[derive(Debug, Clone)]
pub struct TicketClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl TicketClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    async fn acquire(&self) -> Result<tokio::sync::SemaphorePermit<'_>, UpstreamError> {
        self.semaphore
            .acquire()
            .await
            .map_err(|_| UpstreamError::Api {
                status: 0,
                message: "semaphore closed".to_string(),
            })
    }
}

impl TicketSource for TicketClient {
    async fn query_schedule(
        &self,
        query: &ScheduleQuery,
    ) -> Result<Vec<LeftTicketDto>, UpstreamError> {
        let _permit = self.acquire().await?;

        let url = format!("{}/otn/leftTicket/query", self.base_url);
        let date = query.date.to_string();

        let response = self
            .http
            .get(&url)
            .query(&[
                ("leftTicketDTO.train_date", date.as_str()),
                ("leftTicketDTO.from_station", query.origin.code.as_str()),
                ("leftTicketDTO.to_station", query.destination.code.as_str()),
                ("purpose_codes", "ADULT"),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let envelope: ScheduleResponse =
            serde_json::from_str(&body).map_err(|e| UpstreamError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        // A populated `messages` field is the upstream saying no, which
        // must not be mistaken for "zero trains".
        if let Some(message) = envelope.messages.into_iter().next() {
            return Err(UpstreamError::Rejected(message));
        }

        Ok(envelope
            .data
            .into_iter()
            .map(|entry| entry.query_left_new_dto)
            .collect())
    }

    async fn query_prices(
        &self,
        train: &TrainListing,
        date: TravelDate,
    ) -> Result<HashMap<SeatClass, String>, UpstreamError> {
        let _permit = self.acquire().await?;

        let url = format!("{}/otn/leftTicket/queryTicketPrice", self.base_url);
        let date = date.to_string();

        let response = self
            .http
            .get(&url)
            .query(&[
                ("train_no", train.train_no.as_str()),
                ("from_station_no", train.from_station_no.as_str()),
                ("to_station_no", train.to_station_no.as_str()),
                ("seat_types", train.seat_types.as_str()),
                ("train_date", date.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let envelope: PriceResponse =
            serde_json::from_str(&body).map_err(|e| UpstreamError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        Ok(envelope
            .fares()
            .into_iter()
            .filter_map(|(code, fare)| {
                SeatClass::from_fare_code(code).map(|class| (class, fare.to_string()))
            })
            .collect())
    }
}
