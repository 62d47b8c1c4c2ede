use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("upstream rejected the request with status {status}")]
    UpstreamError {
        status: u16,
        body: serde_json::Value,
    },

    #[error("network error while contacting upstream: {0}")]
    TransportError(reqwest::Error),

    #[error("upstream call timed out after {0:?}")]
    TimeoutError(Duration),

    #[error("failed to decode upstream response body: {0}")]
    DecodeError(reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

impl GatewayError {
    /// Classifies a reqwest failure from the outbound call. Timeouts get
    /// their own variant so callers and logs can tell them apart from
    /// connection-level failures.
    pub fn from_send_error(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            GatewayError::TimeoutError(timeout)
        } else {
            GatewayError::TransportError(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
