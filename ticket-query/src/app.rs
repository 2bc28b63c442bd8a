//! One query cycle.
//!
//! Orchestrates resolve, fetch, filter, enrich and render, and owns the
//! top-level failure policy: invalid input aborts with a message, an
//! upstream rejection is surfaced verbatim, and transport failures
//! degrade to an empty result instead of crashing.

use chrono::NaiveDate;
use tracing::warn;

use crate::domain::{QueryError, ScheduleQuery};
use crate::enrich::enrich_rows;
use crate::render::{TrainTypeFilter, build_table, filter_listings};
use crate::stations::StationDirectory;
use crate::upstream::{TicketSource, convert_entries};

/// Options for one run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Train-type filter from the CLI flags
    pub filter: TrainTypeFilter,
    /// Whether to fetch per-train fares
    pub fetch_prices: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            filter: TrainTypeFilter::default(),
            fetch_prices: true,
        }
    }
}

/// Outcome of one query cycle.
#[derive(Debug)]
pub enum RunOutcome {
    /// A table was produced; `rows` is the number of trains shown.
    Table { rendered: String, rows: usize },
    /// The upstream rejected the query; show its message instead.
    Rejected(String),
}

/// Execute one query cycle.
///
/// Returns an error only for invalid input. Upstream failures are
/// handled internally: a rejection becomes [`RunOutcome::Rejected`], and
/// transport failures are logged and rendered as an empty table.
pub async fn run<S: TicketSource>(
    source: &S,
    directory: &StationDirectory,
    date: &str,
    from: &str,
    to: &str,
    options: &RunOptions,
    today: NaiveDate,
) -> Result<RunOutcome, QueryError> {
    let query = ScheduleQuery::resolve(date, from, to, directory, today)?;

    let records = match source.query_schedule(&query).await {
        Ok(records) => records,
        Err(e) => {
            if let Some(message) = e.rejection_message() {
                return Ok(RunOutcome::Rejected(message.to_string()));
            }
            warn!(error = %e, "schedule query failed; treating as no data");
            Vec::new()
        }
    };

    let rows = convert_entries(&records, &query.origin.name, &query.destination.name);
    let mut rows = filter_listings(rows, &options.filter);

    if options.fetch_prices && !rows.is_empty() {
        enrich_rows(source, query.date, &mut rows).await;
    }

    Ok(RunOutcome::Table {
        rendered: build_table(&rows).to_string(),
        rows: rows.len(),
    })
}
