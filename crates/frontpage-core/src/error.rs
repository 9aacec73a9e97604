use thiserror::Error;

/// The only error that crosses the core boundary.
///
/// Anything short of a failed fetch (missing fields, unpaired auxiliary
/// rows) degrades into empty field values or discarded events instead of
/// aborting the run.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Non-success HTTP status from the source.
    #[error("HTTP {status} for {locator}")]
    Status { locator: String, status: u16 },

    /// Request exceeded the fixed per-request timeout.
    #[error("request to {locator} timed out after {timeout_secs} seconds")]
    Timeout { locator: String, timeout_secs: u64 },

    /// Transport-level failure (DNS, connect, body read).
    #[error("network error for {locator}: {cause}")]
    Network { locator: String, cause: String },

    /// HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(String),
}

impl FetchError {
    /// The locator that was being fetched, when a request was attempted.
    pub fn locator(&self) -> Option<&str> {
        match self {
            FetchError::Status { locator, .. }
            | FetchError::Timeout { locator, .. }
            | FetchError::Network { locator, .. } => Some(locator),
            FetchError::Client(_) => None,
        }
    }
}
