//! Upstream client error types.

use std::fmt;

/// Errors from the upstream HTTP client.
#[derive(Debug)]
pub enum UpstreamError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// Upstream returned an error status code
    Api { status: u16, message: String },

    /// Upstream rejected the query via the `messages` field
    Rejected(String),
}

impl UpstreamError {
    /// True for failures of the transport rather than of the query
    /// itself. These are reported and rendered as "no data" instead of
    /// aborting the run.
    pub fn is_degradable(&self) -> bool {
        !matches!(self, UpstreamError::Rejected(_))
    }

    /// The upstream's own rejection message, if this is one.
    pub fn rejection_message(&self) -> Option<&str> {
        match self {
            UpstreamError::Rejected(message) => Some(message),
            _ => None,
        }
    }
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamError::Http(e) => write!(f, "HTTP error: {e}"),
            UpstreamError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            UpstreamError::Api { status, message } => {
                write!(f, "upstream error {status}: {message}")
            }
            UpstreamError::Rejected(message) => {
                write!(f, "query rejected by upstream: {message}")
            }
        }
    }
}

impl std::error::Error for UpstreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UpstreamError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        UpstreamError::Http(err)
    }
}
