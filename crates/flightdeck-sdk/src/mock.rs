//! Bundled mock flights for offline mode.
//!
//! When no API key is configured, or the live fetch fails, lookups fall
//! back to this small catalogue. Dates are generated relative to the given
//! "today" so the set always contains a mix of upcoming, recent and
//! archive-eligible departures.

use chrono::{Duration, NaiveDate, Utc};
use flightdeck_models::{
    Arrival, CurrentStatus, Departure, Flight, FlightId, FlightStatus, GateChange,
};

fn fmt(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Build the mock catalogue relative to `today`.
pub fn mock_flights(today: NaiveDate) -> Vec<Flight> {
    let tomorrow = today + Duration::days(1);
    let yesterday = today - Duration::days(1);
    let five_days_ago = today - Duration::days(5);

    vec![
        Flight {
            id: FlightId::new(),
            date: fmt(today),
            airline: "KLM Royal Dutch Airlines".to_string(),
            flight_number: "KL692".to_string(),
            departure: Departure {
                city: "Amsterdam".to_string(),
                airport: "AMS".to_string(),
                terminal: "2".to_string(),
                time: "18:30".to_string(),
                actual_time: "18:30".to_string(),
                gate: "D5".to_string(),
                check_in_counter: "Row 10-15".to_string(),
            },
            arrival: Arrival {
                city: "Calgary".to_string(),
                airport: "YYC".to_string(),
                terminal: "International".to_string(),
                time: "21:15".to_string(),
                actual_time: "21:15".to_string(),
                gate: "C12".to_string(),
                baggage_claim: "Belt 3".to_string(),
            },
            status: FlightStatus::OnTime,
            current_status: CurrentStatus::Scheduled,
            delay: None,
            reason: None,
            aircraft: "Boeing 787-9".to_string(),
            gate_changes: Vec::new(),
        },
        Flight {
            id: FlightId::new(),
            date: fmt(tomorrow),
            airline: "KLM Royal Dutch Airlines".to_string(),
            flight_number: "KL693".to_string(),
            departure: Departure {
                city: "Calgary".to_string(),
                airport: "YYC".to_string(),
                terminal: "International".to_string(),
                time: "15:30".to_string(),
                actual_time: "15:30".to_string(),
                gate: "C15".to_string(),
                check_in_counter: "Row 5-8".to_string(),
            },
            arrival: Arrival {
                city: "Amsterdam".to_string(),
                airport: "AMS".to_string(),
                terminal: "2".to_string(),
                time: "09:45".to_string(),
                actual_time: "09:45".to_string(),
                gate: "D8".to_string(),
                baggage_claim: "Belt 7".to_string(),
            },
            status: FlightStatus::OnTime,
            current_status: CurrentStatus::Scheduled,
            delay: None,
            reason: None,
            aircraft: "Boeing 787-9".to_string(),
            gate_changes: Vec::new(),
        },
        Flight {
            id: FlightId::new(),
            date: fmt(yesterday),
            airline: "Scandinavian Airlines".to_string(),
            flight_number: "SK1234".to_string(),
            departure: Departure {
                city: "Copenhagen".to_string(),
                airport: "CPH".to_string(),
                terminal: "3".to_string(),
                time: "10:20".to_string(),
                actual_time: "11:05".to_string(),
                gate: "A17".to_string(),
                check_in_counter: "Row 20-24".to_string(),
            },
            arrival: Arrival {
                city: "Stockholm".to_string(),
                airport: "ARN".to_string(),
                terminal: "5".to_string(),
                time: "11:35".to_string(),
                actual_time: "12:20".to_string(),
                gate: "F31".to_string(),
                baggage_claim: "Belt 2".to_string(),
            },
            status: FlightStatus::Delayed,
            current_status: CurrentStatus::Landed,
            delay: Some("45 min".to_string()),
            reason: Some("Check with airline".to_string()),
            aircraft: "Airbus A320neo".to_string(),
            gate_changes: vec![GateChange {
                from: "A12".to_string(),
                to: "A17".to_string(),
                time: "09:40".to_string(),
            }],
        },
        Flight {
            id: FlightId::new(),
            date: fmt(five_days_ago),
            airline: "British Airways".to_string(),
            flight_number: "BA117".to_string(),
            departure: Departure {
                city: "London".to_string(),
                airport: "LHR".to_string(),
                terminal: "5".to_string(),
                time: "08:25".to_string(),
                actual_time: "08:25".to_string(),
                gate: "B36".to_string(),
                check_in_counter: "Zone C".to_string(),
            },
            arrival: Arrival {
                city: "New York".to_string(),
                airport: "JFK".to_string(),
                terminal: "8".to_string(),
                time: "11:10".to_string(),
                actual_time: "11:10".to_string(),
                gate: "14".to_string(),
                baggage_claim: "Belt 5".to_string(),
            },
            status: FlightStatus::OnTime,
            current_status: CurrentStatus::Landed,
            delay: None,
            reason: None,
            aircraft: "Boeing 777-300ER".to_string(),
            gate_changes: Vec::new(),
        },
    ]
}

/// Look up a mock flight by number, pinned to the requested date.
///
/// Matching is case-insensitive. The returned copy carries a fresh
/// [`FlightId`] and the caller's date, so repeated lookups of the same
/// mock entry stay distinct on the board.
pub fn find_mock_at(flight_number: &str, date: &str, today: NaiveDate) -> Option<Flight> {
    let wanted = flight_number.to_uppercase();
    let mut flight = mock_flights(today)
        .into_iter()
        .find(|f| f.flight_number.to_uppercase() == wanted)?;
    flight.id = FlightId::new();
    flight.date = date.to_string();
    Some(flight)
}

/// Look up a mock flight using the current date as "today".
pub fn find_mock(flight_number: &str, date: &str) -> Option<Flight> {
    find_mock_at(flight_number, date, Utc::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 29).unwrap()
    }

    #[test]
    fn catalogue_spans_past_and_future() {
        let flights = mock_flights(today());
        assert_eq!(flights.len(), 4);
        assert_eq!(flights[0].date, "2026-08-29");
        assert_eq!(flights[1].date, "2026-08-30");
        assert_eq!(flights[2].date, "2026-08-28");
        assert_eq!(flights[3].date, "2026-08-24");
    }

    #[test]
    fn lookup_is_case_insensitive_and_pins_the_date() {
        let flight = find_mock_at("kl692", "2026-09-01", today()).unwrap();
        assert_eq!(flight.flight_number, "KL692");
        assert_eq!(flight.date, "2026-09-01");
        assert_eq!(flight.airline, "KLM Royal Dutch Airlines");
    }

    #[test]
    fn lookup_returns_fresh_ids() {
        let a = find_mock_at("KL692", "2026-09-01", today()).unwrap();
        let b = find_mock_at("KL692", "2026-09-01", today()).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn unknown_number_is_none() {
        assert!(find_mock_at("ZZ999", "2026-09-01", today()).is_none());
    }

    #[test]
    fn delayed_mock_carries_reason_and_history() {
        let flight = find_mock_at("SK1234", "2026-08-28", today()).unwrap();
        assert_eq!(flight.delay.as_deref(), Some("45 min"));
        assert_eq!(flight.reason.as_deref(), Some("Check with airline"));
        assert_eq!(flight.gate_changes.len(), 1);
        assert_eq!(flight.gate_changes[0].to, "A17");
    }
}
