#![deny(missing_docs)]

//! # Flightdeck Models
//!
//! Core data types and pure transformation logic for the Flightdeck
//! flight-tracking application.
//!
//! ## Data flow
//!
//! ```text
//! ProviderFlight (raw AviationStack payload)
//! └── mapper::map_provider_flight
//!     └── Flight (canonical record)
//!         ├── departure / arrival legs
//!         ├── FlightStatus (coarse, display-oriented)
//!         └── CurrentStatus (fine-grained lifecycle)
//! ```
//!
//! ## Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`flight`] | Canonical `Flight` record, legs, status enums, IDs |
//! | [`provider`] | Typed schema of the raw provider payload |
//! | [`mapper`] | Provider payload → `Flight` normalisation |
//! | [`voice`] | Flight-number extraction from speech transcripts |
//! | [`schedule`] | Departure-instant comparisons and archival rules |
//! | [`error`] | `ModelError` for fallible date/time constructors |
//!
//! All transformation functions in this crate are synchronous, side-effect
//! free, and total over their inputs: malformed or missing upstream data
//! degrades to documented defaults instead of failing.

pub mod error;
pub mod flight;
pub mod mapper;
pub mod provider;
pub mod schedule;
pub mod voice;

// Re-export all public types at crate root for convenience.
// Downstream crates can use `flightdeck_models::Flight` directly.
pub use error::*;
pub use flight::*;
pub use mapper::*;
pub use provider::*;
pub use schedule::*;
pub use voice::*;
