//! Typed schema of the raw flight-status provider payload.
//!
//! The provider (AviationStack) returns a JSON body with an optional
//! `error` object and a `data` array of per-flight records. Every nested
//! sub-object may be absent, so each one maps to an explicit `Option` here
//! and every read path in [`crate::mapper`] null-coalesces to a documented
//! default. Unknown fields are ignored.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ProviderResponse
// ---------------------------------------------------------------------------

/// The provider's top-level response body for a flight query.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ProviderResponse {
    /// Structured error reported by the provider, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ProviderError>,
    /// Matching flight records; empty means "flight not found".
    #[serde(default)]
    pub data: Vec<ProviderFlight>,
}

// ---------------------------------------------------------------------------
// ProviderError
// ---------------------------------------------------------------------------

/// A structured error body returned by the provider.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ProviderError {
    /// Provider error code; numeric or symbolic depending on the endpoint.
    #[serde(default)]
    pub code: Option<ProviderErrorCode>,
    /// Human-readable error message.
    #[serde(default)]
    pub message: Option<String>,
}

/// Provider error codes appear as numbers (`104`) on some endpoints and as
/// strings (`"invalid_access_key"`) on others.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ProviderErrorCode {
    /// Numeric error code.
    Number(i64),
    /// Symbolic error code.
    Text(String),
}

impl fmt::Display for ProviderErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(code) => write!(f, "{code}"),
            Self::Text(code) => f.write_str(code),
        }
    }
}

// ---------------------------------------------------------------------------
// ProviderFlight
// ---------------------------------------------------------------------------

/// One raw flight record from the provider.
///
/// This is the input type of [`crate::mapper::map_provider_flight`]. Every
/// sub-object is optional; a missing one behaves exactly like an empty one.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ProviderFlight {
    /// Raw status flag: `scheduled`, `active`, `landed`, `cancelled`, ….
    #[serde(default)]
    pub flight_status: Option<String>,
    /// Departure leg details.
    #[serde(default)]
    pub departure: Option<ProviderDeparture>,
    /// Arrival leg details.
    #[serde(default)]
    pub arrival: Option<ProviderArrival>,
    /// Flight identity (IATA designator, bare number).
    #[serde(default)]
    pub flight: Option<ProviderFlightIdent>,
    /// Operating airline.
    #[serde(default)]
    pub airline: Option<ProviderAirline>,
    /// Aircraft operating the flight.
    #[serde(default)]
    pub aircraft: Option<ProviderAircraft>,
}

/// Raw departure-leg details.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ProviderDeparture {
    /// Departure airport IATA code.
    #[serde(default)]
    pub iata: Option<String>,
    /// IANA timezone of the departure airport (e.g. `"Europe/Amsterdam"`).
    #[serde(default)]
    pub timezone: Option<String>,
    /// Terminal designator.
    #[serde(default)]
    pub terminal: Option<String>,
    /// Departure gate.
    #[serde(default)]
    pub gate: Option<String>,
    /// Departure delay in minutes.
    #[serde(default)]
    pub delay: Option<i64>,
    /// Scheduled departure, full ISO timestamp in airport-local clock.
    #[serde(default)]
    pub scheduled: Option<String>,
    /// Actual departure, full ISO timestamp, absent until known.
    #[serde(default)]
    pub actual: Option<String>,
}

/// Raw arrival-leg details.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ProviderArrival {
    /// Arrival airport IATA code.
    #[serde(default)]
    pub iata: Option<String>,
    /// IANA timezone of the arrival airport.
    #[serde(default)]
    pub timezone: Option<String>,
    /// Terminal designator.
    #[serde(default)]
    pub terminal: Option<String>,
    /// Arrival gate.
    #[serde(default)]
    pub gate: Option<String>,
    /// Arrival delay in minutes. Present in the payload but not used by the
    /// mapper; only departure delays drive the status derivation.
    #[serde(default)]
    pub delay: Option<i64>,
    /// Scheduled arrival, full ISO timestamp in airport-local clock.
    #[serde(default)]
    pub scheduled: Option<String>,
    /// Actual arrival, full ISO timestamp, absent until known.
    #[serde(default)]
    pub actual: Option<String>,
    /// Baggage claim belt.
    #[serde(default)]
    pub baggage: Option<String>,
}

/// Raw flight identity.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ProviderFlightIdent {
    /// Full IATA designator (e.g. `"KL692"`).
    #[serde(default)]
    pub iata: Option<String>,
    /// Bare flight number (e.g. `"692"`).
    #[serde(default)]
    pub number: Option<String>,
}

/// Raw airline identity.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ProviderAirline {
    /// Airline display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Airline IATA code.
    #[serde(default)]
    pub iata: Option<String>,
}

/// Raw aircraft identity.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ProviderAircraft {
    /// Tail registration (e.g. `"PH-BHA"`).
    #[serde(default)]
    pub registration: Option<String>,
    /// IATA aircraft type code (e.g. `"B789"`).
    #[serde(default)]
    pub iata: Option<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
