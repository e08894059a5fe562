//! The flight board: an owned, ordered collection of tracked flights.
//!
//! [`FlightBoard`] replaces the ambient module-level list the UI event
//! handlers used to mutate. All state transitions go through its methods;
//! the pure components in `flightdeck-models` take no dependency on it.
//!
//! Ordering: adding a flight re-sorts the board by departure instant, while
//! an explicit [`move_flight`](FlightBoard::move_flight) (drag reorder)
//! leaves the user's manual order in place until the next add or sort.

use chrono::{DateTime, Utc};
use flightdeck_models::{filter_archivable_at, flight_instant, Flight, FlightId};

// ---------------------------------------------------------------------------
// FlightBoard
// ---------------------------------------------------------------------------

/// Ordered, in-memory collection of tracked flights.
#[derive(Debug, Clone, Default)]
pub struct FlightBoard {
    flights: Vec<Flight>,
}

impl FlightBoard {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board from an existing list, sorted by departure.
    pub fn from_flights(flights: Vec<Flight>) -> Self {
        let mut board = Self { flights };
        board.sort_by_departure();
        board
    }

    /// The flights in their current order.
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    /// Number of tracked flights.
    pub fn len(&self) -> usize {
        self.flights.len()
    }

    /// Whether the board is empty.
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Add a flight and re-sort the board by departure instant.
    pub fn add(&mut self, flight: Flight) {
        self.flights.push(flight);
        self.sort_by_departure();
    }

    /// Remove a flight by id. Returns whether anything was removed.
    pub fn remove(&mut self, id: &FlightId) -> bool {
        let before = self.flights.len();
        self.flights.retain(|f| f.id != *id);
        self.flights.len() != before
    }

    /// Replace a flight wholesale, matching on id (refresh semantics).
    ///
    /// Returns `false` when no flight with that id is on the board. The
    /// position is preserved; callers re-sort explicitly if the departure
    /// moved.
    pub fn replace(&mut self, flight: Flight) -> bool {
        match self.flights.iter_mut().find(|f| f.id == flight.id) {
            Some(slot) => {
                *slot = flight;
                true
            }
            None => false,
        }
    }

    /// Move the flight at `from` so that it sits at index `to` (drag
    /// reorder). Out-of-range indices leave the board untouched.
    pub fn move_flight(&mut self, from: usize, to: usize) -> bool {
        if from >= self.flights.len() || to >= self.flights.len() || from == to {
            return false;
        }
        let flight = self.flights.remove(from);
        self.flights.insert(to, flight);
        true
    }

    /// Sort the board by departure instant, earliest first.
    ///
    /// Flights whose instant cannot be determined sort last, in their
    /// previous relative order.
    pub fn sort_by_departure(&mut self) {
        self.flights.sort_by_key(|f| {
            let instant = flight_instant(&f.date, &f.departure.time);
            (instant.is_none(), instant)
        });
    }

    /// The archive-filtered view of the board relative to `now`: flights
    /// that departed 72+ hours ago are excluded (but not deleted).
    pub fn active_at(&self, now: DateTime<Utc>) -> Vec<Flight> {
        filter_archivable_at(&self.flights, now)
    }

    /// The archive-filtered view of the board right now.
    pub fn active(&self) -> Vec<Flight> {
        self.active_at(Utc::now())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn flight(number: &str, date: &str, time: &str) -> Flight {
        let mut flight = Flight::placeholder(number, date);
        flight.departure.time = time.to_string();
        flight
    }

    fn numbers(board: &FlightBoard) -> Vec<&str> {
        board
            .flights()
            .iter()
            .map(|f| f.flight_number.as_str())
            .collect()
    }

    #[test]
    fn add_keeps_departure_order() {
        let mut board = FlightBoard::new();
        board.add(flight("BB2", "2026-08-30", "09:00"));
        board.add(flight("AA1", "2026-08-29", "18:30"));
        board.add(flight("CC3", "2026-08-30", "08:00"));
        assert_eq!(numbers(&board), vec!["AA1", "CC3", "BB2"]);
    }

    #[test]
    fn unknown_instants_sort_last() {
        let mut board = FlightBoard::new();
        board.add(flight("XX9", "", ""));
        board.add(flight("AA1", "2026-08-29", "18:30"));
        assert_eq!(numbers(&board), vec!["AA1", "XX9"]);
    }

    #[test]
    fn remove_by_id() {
        let mut board = FlightBoard::new();
        let target = flight("AA1", "2026-08-29", "18:30");
        let id = target.id;
        board.add(target);
        board.add(flight("BB2", "2026-08-30", "09:00"));

        assert!(board.remove(&id));
        assert_eq!(board.len(), 1);
        assert!(!board.remove(&id), "second removal finds nothing");
    }

    #[test]
    fn move_flight_reorders_by_index() {
        let mut board = FlightBoard::from_flights(vec![
            flight("AA1", "2026-08-29", "08:00"),
            flight("BB2", "2026-08-29", "09:00"),
            flight("CC3", "2026-08-29", "10:00"),
        ]);

        assert!(board.move_flight(0, 2));
        assert_eq!(numbers(&board), vec!["BB2", "CC3", "AA1"]);

        assert!(board.move_flight(2, 0));
        assert_eq!(numbers(&board), vec!["AA1", "BB2", "CC3"]);
    }

    #[test]
    fn move_flight_rejects_out_of_range() {
        let mut board = FlightBoard::from_flights(vec![flight("AA1", "2026-08-29", "08:00")]);
        assert!(!board.move_flight(0, 5));
        assert!(!board.move_flight(3, 0));
        assert!(!board.move_flight(0, 0));
        assert_eq!(numbers(&board), vec!["AA1"]);
    }

    #[test]
    fn replace_swaps_content_by_id() {
        let original = flight("AA1", "2026-08-29", "08:00");
        let id = original.id;
        let mut board = FlightBoard::from_flights(vec![original]);

        let mut refreshed = flight("AA1", "2026-08-29", "08:45");
        refreshed.id = id;
        assert!(board.replace(refreshed));
        assert_eq!(board.flights()[0].departure.time, "08:45");

        let stranger = flight("ZZ9", "2026-08-29", "12:00");
        assert!(!board.replace(stranger));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn active_excludes_archive_eligible_without_deleting() {
        let now = Utc.with_ymd_and_hms(2026, 8, 29, 12, 0, 0).unwrap();
        let mut board = FlightBoard::new();
        board.add(flight("OLD1", "2026-08-20", "09:00"));
        board.add(flight("NEW1", "2026-08-29", "11:00"));

        let active = board.active_at(now);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].flight_number, "NEW1");
        // The archived flight stays on the board itself.
        assert_eq!(board.len(), 2);
    }
}
