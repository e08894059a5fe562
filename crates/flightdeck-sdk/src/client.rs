//! HTTP client for the AviationStack flight-status provider.
//!
//! [`AviationStackClient`] owns the API key and issues single-shot
//! request/response lookups; there is no retry, cancellation or timeout
//! policy on this path — callers catch any [`FetchError`] and decide
//! whether to fall back to mock data.
//!
//! # Typical usage
//!
//! ```rust,no_run
//! use flightdeck_sdk::AviationStackClient;
//!
//! # async fn run() -> Result<(), flightdeck_sdk::FetchError> {
//! let client = AviationStackClient::new("my-access-key")?;
//! match client.fetch_flight("KL692", "2026-08-29").await? {
//!     Some(flight) => println!("{} is {}", flight.flight_number, flight.status),
//!     None => println!("flight not found"),
//! }
//! # Ok(())
//! # }
//! ```

use flightdeck_models::{map_provider_flight, Flight, ProviderFlight, ProviderResponse};
use tracing::debug;

use crate::error::FetchError;

/// Default REST endpoint for flight queries.
pub const DEFAULT_BASE_URL: &str = "https://api.aviationstack.com/v1/flights";

// ---------------------------------------------------------------------------
// AviationStackClient
// ---------------------------------------------------------------------------

/// A configured connection to the flight-status provider.
#[derive(Clone, Debug)]
pub struct AviationStackClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl AviationStackClient {
    /// Create a client for the default endpoint.
    ///
    /// Fails with [`FetchError::Config`] when the key is empty.
    pub fn new(api_key: &str) -> Result<Self, FetchError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom endpoint (e.g. a test server).
    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self, FetchError> {
        if api_key.is_empty() {
            return Err(FetchError::Config("API key is required".to_string()));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Look up live status for one flight.
    ///
    /// * `flight_iata` — IATA flight number, e.g. `"KL692"`.
    /// * `date` — calendar date, `YYYY-MM-DD`.
    ///
    /// Returns `Ok(None)` when the provider has no record of the flight.
    pub async fn fetch_flight(
        &self,
        flight_iata: &str,
        date: &str,
    ) -> Result<Option<Flight>, FetchError> {
        debug!(flight_iata, date, "querying flight status provider");

        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("access_key", self.api_key.as_str()),
                ("flight_iata", flight_iata),
                ("flight_date", date),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body = res.text().await?;
        let raw = decode_response(&body)?;
        Ok(raw.as_ref().map(map_provider_flight))
    }
}

// ---------------------------------------------------------------------------
// decode_response
// ---------------------------------------------------------------------------

/// Decode a provider response body into the first matching raw record.
///
/// Split out of the HTTP path so the decoding rules are testable without a
/// socket: a structured `error` body maps to [`FetchError::Api`], an empty
/// `data` array to `Ok(None)`, and anything undecodable to
/// [`FetchError::Decode`].
pub fn decode_response(body: &str) -> Result<Option<ProviderFlight>, FetchError> {
    let response: ProviderResponse = serde_json::from_str(body)?;

    if let Some(error) = response.error {
        return Err(error.into());
    }

    Ok(response.data.into_iter().next())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use flightdeck_models::{CurrentStatus, FlightStatus};

    #[test]
    fn empty_api_key_is_a_config_error() {
        let err = AviationStackClient::new("").unwrap_err();
        assert!(matches!(err, FetchError::Config(_)));
    }

    #[test]
    fn decode_maps_structured_errors() {
        let body = r#"{"error": {"code": 101, "message": "invalid_access_key"}}"#;
        let err = decode_response(body).unwrap_err();
        assert!(matches!(err, FetchError::Api { .. }));
        assert_eq!(err.to_string(), "provider error 101: invalid_access_key");
    }

    #[test]
    fn decode_treats_empty_data_as_not_found() {
        assert!(decode_response(r#"{"data": []}"#).unwrap().is_none());
        // A body with neither `error` nor `data` behaves the same.
        assert!(decode_response("{}").unwrap().is_none());
    }

    #[test]
    fn decode_rejects_malformed_bodies() {
        let err = decode_response("not json").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn decode_returns_the_first_record() {
        let body = r#"{
            "data": [
                {"flight_status": "active", "flight": {"iata": "KL692"}},
                {"flight_status": "landed", "flight": {"iata": "KL693"}}
            ]
        }"#;
        let raw = decode_response(body).unwrap().unwrap();
        assert_eq!(raw.flight_status.as_deref(), Some("active"));

        let flight = map_provider_flight(&raw);
        assert_eq!(flight.flight_number, "KL692");
        assert_eq!(flight.current_status, CurrentStatus::InAir);
        assert_eq!(flight.status, FlightStatus::OnTime);
    }
}
