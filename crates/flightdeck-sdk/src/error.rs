//! SDK error types.
//!
//! [`FetchError`] is the single error type returned by every fallible
//! operation on the fetch path. "Flight not found" is deliberately *not* an
//! error: an empty provider result set resolves to `Ok(None)` so that
//! callers can fall back to the mock catalogue or a placeholder record.

use flightdeck_models::ProviderError;

/// Error type for the provider fetch path.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Invalid or missing configuration (e.g. no API key).
    #[error("configuration error: {0}")]
    Config(String),

    /// Transport or HTTP-status failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider responded with a structured error body.
    #[error("provider error {code}: {message}")]
    Api {
        /// Provider error code, or `"unknown"` when absent.
        code: String,
        /// Provider error message, or a generic fallback when absent.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<ProviderError> for FetchError {
    fn from(err: ProviderError) -> Self {
        FetchError::Api {
            code: err
                .code
                .map_or_else(|| "unknown".to_string(), |c| c.to_string()),
            message: err
                .message
                .unwrap_or_else(|| "API error occurred".to_string()),
        }
    }
}
