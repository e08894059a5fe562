//! The canonical flight record and its supporting types.
//!
//! A [`Flight`] is the normalised, display-ready representation used by
//! every UI skin. It is produced either by [`crate::mapper`] (from a raw
//! provider payload) or synthesised directly (mock lookup, or a
//! [`Flight::placeholder`] for unresolvable flight numbers).
//!
//! Flights are immutable once constructed; callers replace them wholesale
//! (e.g. on refresh) or delete them, never mutate fields in place.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// FlightId
// ---------------------------------------------------------------------------

/// Opaque unique identifier for a tracked flight.
///
/// Backed by a random UUID so that two flights created in the same
/// millisecond never collide.
///
/// # Examples
///
/// ```
/// use flightdeck_models::FlightId;
///
/// let a = FlightId::new();
/// let b = FlightId::new();
/// assert_ne!(a, b);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlightId(Uuid);

impl FlightId {
    /// Generate a fresh random identifier.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Return the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for FlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Uuid> for FlightId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

// ---------------------------------------------------------------------------
// FlightStatus
// ---------------------------------------------------------------------------

/// Coarse display status of a flight.
///
/// This is an *open* set: providers and mock data may carry labels outside
/// the well-known ones, which land in [`Other`](Self::Other). The label is
/// what the UI prints inside the status badge; [`tone`](Self::tone) maps it
/// to a badge colour.
///
/// Serialises as its display label (`"On Time"`, `"Not found"`, …).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum FlightStatus {
    /// Departing as scheduled.
    OnTime,
    /// A departure delay has been computed.
    Delayed,
    /// The flight was cancelled by the operator.
    Cancelled,
    /// No data could be found for this flight number.
    NotFound,
    /// Boarding in progress (mock data only; providers never emit this).
    Boarding,
    /// Any label outside the well-known set, preserved verbatim.
    Other(String),
}

impl FlightStatus {
    /// The display label for this status.
    pub fn as_label(&self) -> &str {
        match self {
            Self::OnTime => "On Time",
            Self::Delayed => "Delayed",
            Self::Cancelled => "Cancelled",
            Self::NotFound => "Not found",
            Self::Boarding => "Boarding",
            Self::Other(label) => label,
        }
    }

    /// The badge colour bucket for this status.
    pub fn tone(&self) -> StatusTone {
        StatusTone::for_label(self.as_label())
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

impl From<FlightStatus> for String {
    fn from(status: FlightStatus) -> Self {
        status.as_label().to_string()
    }
}

impl From<String> for FlightStatus {
    fn from(label: String) -> Self {
        match label.as_str() {
            "On Time" => Self::OnTime,
            "Delayed" => Self::Delayed,
            "Cancelled" => Self::Cancelled,
            "Not found" => Self::NotFound,
            "Boarding" => Self::Boarding,
            _ => Self::Other(label),
        }
    }
}

impl From<&str> for FlightStatus {
    fn from(label: &str) -> Self {
        Self::from(label.to_string())
    }
}

// ---------------------------------------------------------------------------
// CurrentStatus
// ---------------------------------------------------------------------------

/// Fine-grained lifecycle status of a flight.
///
/// Unlike [`FlightStatus`] this is a closed set. Both are derived from the
/// same raw provider flag but through separate rule tables, so they may
/// disagree (an `active` flight with a positive delay is simultaneously
/// `Delayed` and `InAir`).
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum CurrentStatus {
    /// Not yet departed.
    Scheduled,
    /// Boarding at the gate.
    Boarding,
    /// Airborne.
    #[serde(rename = "In Air")]
    #[strum(serialize = "In Air")]
    InAir,
    /// Arrived at the destination.
    Landed,
    /// Cancelled by the operator.
    Cancelled,
    /// The provider flag was absent or unrecognised.
    Unknown,
}

impl CurrentStatus {
    /// The badge colour bucket for this lifecycle status.
    pub fn tone(&self) -> StatusTone {
        StatusTone::for_label(&self.to_string())
    }
}

// ---------------------------------------------------------------------------
// StatusTone
// ---------------------------------------------------------------------------

/// Colour bucket used by the UI skins when rendering a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum StatusTone {
    /// Green: on time, boarding.
    Positive,
    /// Orange: delayed.
    Caution,
    /// Red: cancelled.
    Negative,
    /// Grey: everything else.
    Neutral,
}

impl StatusTone {
    /// Map a status label to its colour bucket, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use flightdeck_models::StatusTone;
    ///
    /// assert_eq!(StatusTone::for_label("On Time"), StatusTone::Positive);
    /// assert_eq!(StatusTone::for_label("delayed"), StatusTone::Caution);
    /// assert_eq!(StatusTone::for_label("Not found"), StatusTone::Neutral);
    /// ```
    pub fn for_label(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "on time" | "boarding" => Self::Positive,
            "delayed" => Self::Caution,
            "cancelled" => Self::Negative,
            _ => Self::Neutral,
        }
    }
}

// ---------------------------------------------------------------------------
// Flight legs
// ---------------------------------------------------------------------------

/// The departure leg of a flight.
///
/// All fields are display strings; an empty string means "no data".
/// `actual_time` in particular must never be interpreted as midnight when
/// empty.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Departure {
    /// Departure city, derived from the airport timezone.
    pub city: String,
    /// IATA airport code, or empty.
    pub airport: String,
    /// Terminal designator, or empty.
    pub terminal: String,
    /// Scheduled departure, `HH:MM` local clock.
    pub time: String,
    /// Actual departure, `HH:MM`; defaults to `time` when unknown.
    pub actual_time: String,
    /// Departure gate, or empty.
    pub gate: String,
    /// Check-in counter designation, or empty.
    pub check_in_counter: String,
}

/// The arrival leg of a flight.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Arrival {
    /// Arrival city, derived from the airport timezone.
    pub city: String,
    /// IATA airport code, or empty.
    pub airport: String,
    /// Terminal designator, or empty.
    pub terminal: String,
    /// Scheduled arrival, `HH:MM` local clock.
    pub time: String,
    /// Actual arrival, `HH:MM`; defaults to `time` when unknown.
    pub actual_time: String,
    /// Arrival gate, or empty.
    pub gate: String,
    /// Baggage claim belt, or empty.
    pub baggage_claim: String,
}

// ---------------------------------------------------------------------------
// GateChange
// ---------------------------------------------------------------------------

/// One entry in a flight's gate-change history.
///
/// The history is append-only and kept in order of occurrence; it is never
/// re-sorted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GateChange {
    /// The previous gate.
    pub from: String,
    /// The new gate.
    pub to: String,
    /// When the change happened, `HH:MM`.
    pub time: String,
}

// ---------------------------------------------------------------------------
// Flight
// ---------------------------------------------------------------------------

/// The canonical, display-ready flight record.
///
/// Constructed by [`crate::mapper::map_provider_flight`] from a raw provider
/// payload, copied out of the mock catalogue, or synthesised via
/// [`Flight::placeholder`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    /// Unique identifier, generated at creation time.
    pub id: FlightId,
    /// Calendar date of the flight, `YYYY-MM-DD`.
    pub date: String,
    /// Airline display name; `"Unknown"` when no data is available.
    pub airline: String,
    /// IATA flight number (airline code + digits), uppercase.
    ///
    /// No format validation is enforced; voice fallbacks may store a raw
    /// transcript here.
    pub flight_number: String,
    /// Departure leg.
    pub departure: Departure,
    /// Arrival leg.
    pub arrival: Arrival,
    /// Coarse display status.
    pub status: FlightStatus,
    /// Fine-grained lifecycle status.
    pub current_status: CurrentStatus,
    /// Human-readable delay (`"45 min"`), or `None`.
    pub delay: Option<String>,
    /// Free-text explanation, `None` when there is nothing to explain.
    pub reason: Option<String>,
    /// Aircraft type or registration; `"Unknown"` when no data is available.
    pub aircraft: String,
    /// Gate-change history, chronological by occurrence.
    pub gate_changes: Vec<GateChange>,
}

impl Flight {
    /// Synthesise a "Not found" record for a flight number that could not
    /// be resolved against the provider or the mock catalogue.
    ///
    /// # Examples
    ///
    /// ```
    /// use flightdeck_models::{Flight, FlightStatus};
    ///
    /// let flight = Flight::placeholder("xy123", "2026-08-29");
    /// assert_eq!(flight.flight_number, "XY123");
    /// assert_eq!(flight.status, FlightStatus::NotFound);
    /// assert_eq!(flight.delay, None);
    /// ```
    pub fn placeholder(flight_number: &str, date: &str) -> Self {
        Self {
            id: FlightId::new(),
            date: date.to_string(),
            airline: "Unknown".to_string(),
            flight_number: flight_number.to_uppercase(),
            departure: Departure {
                city: "Unknown".to_string(),
                time: "00:00".to_string(),
                actual_time: "00:00".to_string(),
                ..Departure::default()
            },
            arrival: Arrival {
                city: "Unknown".to_string(),
                time: "00:00".to_string(),
                actual_time: "00:00".to_string(),
                ..Arrival::default()
            },
            status: FlightStatus::NotFound,
            current_status: CurrentStatus::Unknown,
            delay: None,
            reason: Some("Flight information not available".to_string()),
            aircraft: "Unknown".to_string(),
            gate_changes: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flight_id_is_collision_resistant() {
        use std::collections::HashSet;
        let ids: HashSet<FlightId> = (0..64).map(|_| FlightId::new()).collect();
        assert_eq!(ids.len(), 64);
    }

    #[test]
    fn status_labels_roundtrip() {
        for status in [
            FlightStatus::OnTime,
            FlightStatus::Delayed,
            FlightStatus::Cancelled,
            FlightStatus::NotFound,
            FlightStatus::Boarding,
        ] {
            let back = FlightStatus::from(status.as_label());
            assert_eq!(back, status);
        }
    }

    #[test]
    fn unknown_status_label_is_preserved() {
        let status = FlightStatus::from("Diverted");
        assert_eq!(status, FlightStatus::Other("Diverted".to_string()));
        assert_eq!(status.as_label(), "Diverted");
        assert_eq!(status.tone(), StatusTone::Neutral);
    }

    #[test]
    fn status_serialises_as_display_label() {
        let json = serde_json::to_string(&FlightStatus::NotFound).unwrap();
        assert_eq!(json, "\"Not found\"");
        let back: FlightStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, FlightStatus::NotFound);
    }

    #[test]
    fn current_status_display_strings() {
        assert_eq!(CurrentStatus::InAir.to_string(), "In Air");
        assert_eq!(CurrentStatus::Scheduled.to_string(), "Scheduled");
        assert_eq!(CurrentStatus::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn current_status_enum_iter_covers_lifecycle() {
        use strum::IntoEnumIterator;
        let variants: Vec<_> = CurrentStatus::iter().collect();
        assert_eq!(variants.len(), 6);
        assert!(variants.contains(&CurrentStatus::InAir));
    }

    #[test]
    fn tones_match_badge_colours() {
        assert_eq!(FlightStatus::OnTime.tone(), StatusTone::Positive);
        assert_eq!(FlightStatus::Delayed.tone(), StatusTone::Caution);
        assert_eq!(FlightStatus::Cancelled.tone(), StatusTone::Negative);
        assert_eq!(FlightStatus::NotFound.tone(), StatusTone::Neutral);
        assert_eq!(CurrentStatus::Boarding.tone(), StatusTone::Positive);
        assert_eq!(CurrentStatus::InAir.tone(), StatusTone::Neutral);
    }

    #[test]
    fn placeholder_shape() {
        let flight = Flight::placeholder("kl692", "2026-08-29");
        assert_eq!(flight.flight_number, "KL692");
        assert_eq!(flight.date, "2026-08-29");
        assert_eq!(flight.airline, "Unknown");
        assert_eq!(flight.departure.city, "Unknown");
        assert_eq!(flight.departure.time, "00:00");
        assert_eq!(flight.arrival.actual_time, "00:00");
        assert_eq!(flight.current_status, CurrentStatus::Unknown);
        assert_eq!(
            flight.reason.as_deref(),
            Some("Flight information not available")
        );
        assert!(flight.gate_changes.is_empty());
    }

    #[test]
    fn flight_serde_uses_camel_case_keys() {
        let flight = Flight::placeholder("KL692", "2026-08-29");
        let json = serde_json::to_value(&flight).unwrap();
        assert!(json.get("flightNumber").is_some());
        assert!(json.get("currentStatus").is_some());
        assert!(json.get("gateChanges").is_some());
        assert!(json["departure"].get("actualTime").is_some());
        assert!(json["departure"].get("checkInCounter").is_some());
        assert!(json["arrival"].get("baggageClaim").is_some());
    }

    #[test]
    fn flight_serde_roundtrip() {
        let flight = Flight::placeholder("KL692", "2026-08-29");
        let json = serde_json::to_string(&flight).unwrap();
        let back: Flight = serde_json::from_str(&json).unwrap();
        assert_eq!(flight, back);
    }
}
