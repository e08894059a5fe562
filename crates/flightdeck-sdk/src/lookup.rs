//! The add-flight resolution flow.
//!
//! Mirrors what the UI does when the user submits a flight number: try the
//! live provider when a client is configured, fall back to the mock
//! catalogue, and finally synthesise a placeholder so the flow never fails.

use flightdeck_models::Flight;
use tracing::{info, warn};

use crate::client::AviationStackClient;
use crate::mock::find_mock;

/// Resolve a flight number + date into a [`Flight`], infallibly.
///
/// Resolution order:
///
/// 1. Live fetch, when `client` is configured. Errors are logged and fall
///    through; an empty provider result falls through as well.
/// 2. Mock catalogue lookup, pinned to the requested date.
/// 3. A [`Flight::placeholder`] record.
pub async fn resolve_flight(
    client: Option<&AviationStackClient>,
    flight_number: &str,
    date: &str,
) -> Flight {
    let flight_number = flight_number.to_uppercase();

    if let Some(client) = client {
        match client.fetch_flight(&flight_number, date).await {
            Ok(Some(flight)) => return flight,
            Ok(None) => info!(%flight_number, "provider has no record, trying mock data"),
            Err(e) => warn!(%flight_number, "live fetch failed, using mock data: {e}"),
        }
    }

    if let Some(flight) = find_mock(&flight_number, date) {
        return flight;
    }

    Flight::placeholder(&flight_number, date)
}
