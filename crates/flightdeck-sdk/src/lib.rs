//! # Flightdeck SDK
//!
//! Everything a Flightdeck UI needs between the pure models and the screen:
//!
//! * [`AviationStackClient`] — single-shot HTTP lookups against the
//!   flight-status provider.
//! * [`resolve_flight`] — the infallible live → mock → placeholder
//!   resolution flow behind the "add flight" action.
//! * [`FlightBoard`] — the owned, ordered flight-list state container.
//! * [`credentials`] — API-key persistence in the user's config directory.
//! * [`mock`] — the bundled offline catalogue.
//! * [`FetchError`] — unified error type for the fetch path.
//!
//! Model types from [`flightdeck_models`] are re-exported for convenience.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use flightdeck_sdk::{resolve_flight, AviationStackClient, FlightBoard};
//!
//! # async fn run() {
//! let client = AviationStackClient::new("my-access-key").ok();
//! let mut board = FlightBoard::new();
//!
//! let flight = resolve_flight(client.as_ref(), "KL692", "2026-08-29").await;
//! board.add(flight);
//!
//! for flight in board.active() {
//!     println!("{} {}", flight.flight_number, flight.status);
//! }
//! # }
//! ```

pub mod board;
pub mod client;
pub mod credentials;
pub mod error;
pub mod lookup;
pub mod mock;

pub use board::FlightBoard;
pub use client::{decode_response, AviationStackClient, DEFAULT_BASE_URL};
pub use error::FetchError;
pub use lookup::resolve_flight;
pub use mock::{find_mock, mock_flights};

// Re-export the core model types for ergonomic usage.
pub use flightdeck_models::{
    map_provider_flight, parse_flight_number, CurrentStatus, Flight, FlightId, FlightStatus,
};
