//! Error types for climate acquisition.
//!
//! Every variant except [`ClimateError::Client`] means the upstream data is
//! unavailable for this request. Those never leave the crate's public
//! `fetch_*` methods: the client logs them and substitutes the fallback.
//! The `try_fetch_*` methods surface them for tests and diagnostics.

/// Errors that can occur while acquiring a climate indicator.
#[derive(Debug, thiserror::Error)]
pub enum ClimateError {
    /// The HTTP client could not be constructed.
    #[error("HTTP client setup failed: {0}")]
    Client(String),

    /// Connecting, sending, or reading the body failed.
    #[error("request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The upstream answered with a non-success status.
    #[error("upstream returned HTTP {0}")]
    Status(u16),

    /// The payload did not have the expected shape or a value was not a
    /// finite number.
    #[error("malformed payload: {0}")]
    Malformed(String),
}

impl ClimateError {
    /// Whether this error means upstream data could not be obtained.
    pub const fn is_upstream(&self) -> bool {
        !matches!(self, Self::Client(_))
    }
}

impl From<reqwest::Error> for ClimateError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Request(err.to_string())
        }
    }
}

impl From<csv::Error> for ClimateError {
    fn from(err: csv::Error) -> Self {
        Self::Malformed(format!("temperature table: {err}"))
    }
}
