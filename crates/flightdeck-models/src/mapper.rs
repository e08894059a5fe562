//! Normalisation of raw provider payloads into canonical [`Flight`] records.
//!
//! [`map_provider_flight`] is total over its input: every field read
//! tolerates an absent sub-object or value and degrades to a documented
//! default (empty string, `None`, `"Unknown"`). Malformed upstream data must
//! never crash the mapping step; errors on the fetch path are handled by the
//! caller before the mapper is ever invoked.

use crate::flight::{Arrival, CurrentStatus, Departure, Flight, FlightId, FlightStatus};
use crate::provider::{ProviderArrival, ProviderDeparture, ProviderFlight};

// ---------------------------------------------------------------------------
// Field derivation helpers
// ---------------------------------------------------------------------------

/// Extract the `HH:MM` clock substring from a full ISO timestamp.
///
/// Provider timestamps carry the airport-local clock (`"2026-08-29T18:30:00+00:00"`),
/// so the wall-clock digits are taken verbatim rather than converted through
/// any timezone. Absent or malformed input yields an empty string.
fn clock_time(timestamp: Option<&str>) -> String {
    timestamp
        .and_then(|ts| ts.split_once('T'))
        .and_then(|(_, rest)| rest.get(..5))
        .filter(|clock| is_clock_shaped(clock))
        .unwrap_or_default()
        .to_string()
}

/// Whether a five-character slice reads `HH:MM`. Guards against timestamps
/// with an unpadded hour, where the slice would land mid-field.
fn is_clock_shaped(clock: &str) -> bool {
    let bytes = clock.as_bytes();
    bytes.len() == 5
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[2] == b':'
        && bytes[3].is_ascii_digit()
        && bytes[4].is_ascii_digit()
}

/// Extract the `YYYY-MM-DD` calendar date from a full ISO timestamp.
fn calendar_date(timestamp: Option<&str>) -> String {
    timestamp
        .and_then(|ts| ts.split('T').next())
        .unwrap_or_default()
        .to_string()
}

/// Derive a city name from an IANA timezone identifier.
///
/// Takes the segment after the zone-region separator and replaces
/// underscores with spaces: `"America/Toronto"` → `"Toronto"`,
/// `"America/New_York"` → `"New York"`. An absent or separator-less
/// identifier yields an empty string.
fn city_from_timezone(timezone: Option<&str>) -> String {
    timezone
        .and_then(|tz| tz.split('/').nth(1))
        .map(|city| city.replace('_', " "))
        .unwrap_or_default()
}

/// Format a departure delay as a human string.
///
/// Only strictly positive delays count; zero, negative, or absent values
/// yield `None`.
fn format_delay(delay: Option<i64>) -> Option<String> {
    match delay {
        Some(minutes) if minutes > 0 => Some(format!("{minutes} min")),
        _ => None,
    }
}

/// Map the raw provider status flag to the fine-grained lifecycle status.
///
/// This table is independent of the coarse [`FlightStatus`] derivation; both
/// are computed from the same flag but may disagree (e.g. `active` with a
/// positive delay yields `Delayed` + `InAir`).
fn current_status(flag: Option<&str>) -> CurrentStatus {
    match flag {
        Some("scheduled") => CurrentStatus::Scheduled,
        Some("active") => CurrentStatus::InAir,
        Some("landed") => CurrentStatus::Landed,
        Some("cancelled") => CurrentStatus::Cancelled,
        _ => CurrentStatus::Unknown,
    }
}

/// Map the raw status flag and computed delay to the coarse display status.
///
/// Precedence: cancelled > delayed > on-time.
fn coarse_status(flag: Option<&str>, delay: Option<&str>) -> FlightStatus {
    if flag == Some("cancelled") {
        FlightStatus::Cancelled
    } else if delay.is_some() {
        FlightStatus::Delayed
    } else {
        FlightStatus::OnTime
    }
}

// ---------------------------------------------------------------------------
// map_provider_flight
// ---------------------------------------------------------------------------

/// Normalise one raw provider record into a canonical [`Flight`].
///
/// # Examples
///
/// ```
/// use flightdeck_models::{map_provider_flight, ProviderFlight};
///
/// // A completely empty payload still maps to a well-formed record.
/// let flight = map_provider_flight(&ProviderFlight::default());
/// assert_eq!(flight.airline, "Unknown Airline");
/// assert_eq!(flight.departure.time, "");
/// assert_eq!(flight.delay, None);
/// ```
pub fn map_provider_flight(raw: &ProviderFlight) -> Flight {
    let departure = raw.departure.clone().unwrap_or_default();
    let arrival = raw.arrival.clone().unwrap_or_default();
    let ident = raw.flight.clone().unwrap_or_default();
    let airline = raw.airline.clone().unwrap_or_default();
    let aircraft = raw.aircraft.clone().unwrap_or_default();

    let delay = format_delay(departure.delay);
    let flag = raw.flight_status.as_deref();
    let status = coarse_status(flag, delay.as_deref());
    let reason = delay.as_ref().map(|_| "Check with airline".to_string());

    Flight {
        id: FlightId::new(),
        date: calendar_date(departure.scheduled.as_deref()),
        airline: airline
            .name
            .unwrap_or_else(|| "Unknown Airline".to_string()),
        flight_number: ident.iata.or(ident.number).unwrap_or_default(),
        departure: map_departure(&departure),
        arrival: map_arrival(&arrival),
        status,
        current_status: current_status(flag),
        delay,
        reason,
        aircraft: aircraft
            .registration
            .or(aircraft.iata)
            .unwrap_or_else(|| "Unknown".to_string()),
        // Providers used here do not supply gate-change history.
        gate_changes: Vec::new(),
    }
}

fn map_departure(raw: &ProviderDeparture) -> Departure {
    Departure {
        city: city_from_timezone(raw.timezone.as_deref()),
        airport: raw.iata.clone().unwrap_or_default(),
        terminal: raw.terminal.clone().unwrap_or_default(),
        time: clock_time(raw.scheduled.as_deref()),
        actual_time: clock_time(raw.actual.as_deref().or(raw.scheduled.as_deref())),
        gate: raw.gate.clone().unwrap_or_default(),
        check_in_counter: String::new(),
    }
}

fn map_arrival(raw: &ProviderArrival) -> Arrival {
    Arrival {
        city: city_from_timezone(raw.timezone.as_deref()),
        airport: raw.iata.clone().unwrap_or_default(),
        terminal: raw.terminal.clone().unwrap_or_default(),
        time: clock_time(raw.scheduled.as_deref()),
        actual_time: clock_time(raw.actual.as_deref().or(raw.scheduled.as_deref())),
        gate: raw.gate.clone().unwrap_or_default(),
        baggage_claim: raw.baggage.clone().unwrap_or_default(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
