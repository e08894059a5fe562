//! Departure-instant comparisons and archival rules.
//!
//! A flight's `(date, time)` pair is combined into a single instant that
//! drives sorting, "has departed" display decisions, and the 72-hour
//! archival filter. Instants are interpreted as **UTC**: the source data
//! carries no timezone for the combined pair, and pinning UTC keeps the
//! archive/sort decisions independent of the executing environment.
//!
//! Every public helper comes in two flavours: an `_at` core that takes the
//! reference instant explicitly (testable), and a wrapper that uses
//! `Utc::now()`.
//!
//! Missing or malformed `date`/`time` input is treated as an unknown
//! instant: predicates return `false`, labels return an empty string, and
//! the archival filter retains the flight.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::error::ModelError;
use crate::flight::Flight;

/// A flight is archive-eligible once its departure is at least this far in
/// the past (inclusive boundary).
pub const ARCHIVE_AFTER_HOURS: i64 = 72;

// ---------------------------------------------------------------------------
// Strict parsers
// ---------------------------------------------------------------------------

/// Parse a `YYYY-MM-DD` calendar date strictly.
///
/// # Examples
///
/// ```
/// use flightdeck_models::schedule::parse_date;
///
/// assert!(parse_date("2026-08-29").is_ok());
/// assert!(parse_date("29/08/2026").is_err());
/// ```
pub fn parse_date(value: &str) -> Result<NaiveDate, ModelError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| ModelError::InvalidDate {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Parse an `HH:MM` clock time strictly.
pub fn parse_time(value: &str) -> Result<NaiveTime, ModelError> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|e| ModelError::InvalidTime {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

// ---------------------------------------------------------------------------
// flight_instant
// ---------------------------------------------------------------------------

/// Combine a `(date, time)` pair into a UTC instant.
///
/// Returns `None` when either part is missing or malformed; callers degrade
/// to their documented defaults instead of propagating an error.
pub fn flight_instant(date: &str, time: &str) -> Option<DateTime<Utc>> {
    let date = parse_date(date).ok()?;
    let time = parse_time(time).ok()?;
    Some(Utc.from_utc_datetime(&date.and_time(time)))
}

// ---------------------------------------------------------------------------
// has_passed
// ---------------------------------------------------------------------------

/// Whether the departure instant is strictly before `now`.
pub fn has_passed_at(date: &str, time: &str, now: DateTime<Utc>) -> bool {
    match flight_instant(date, time) {
        Some(instant) => instant < now,
        None => false,
    }
}

/// Whether the departure instant is strictly before the current time.
pub fn has_passed(date: &str, time: &str) -> bool {
    has_passed_at(date, time, Utc::now())
}

// ---------------------------------------------------------------------------
// should_archive
// ---------------------------------------------------------------------------

/// Whether a departure is archive-eligible relative to `now`.
///
/// True iff `now − instant ≥ 72h`, boundary inclusive.
pub fn should_archive_at(date: &str, time: &str, now: DateTime<Utc>) -> bool {
    match flight_instant(date, time) {
        Some(instant) => {
            now.signed_duration_since(instant) >= Duration::hours(ARCHIVE_AFTER_HOURS)
        }
        None => false,
    }
}

/// Whether a departure is archive-eligible right now.
pub fn should_archive(date: &str, time: &str) -> bool {
    should_archive_at(date, time, Utc::now())
}

// ---------------------------------------------------------------------------
// time_difference_label
// ---------------------------------------------------------------------------

/// Human-readable distance between the departure instant and `now`.
///
/// Buckets the absolute difference into minutes (<60), hours (<24h) or
/// days, with the sign chosen by whether the instant is in the past:
/// `"45 minutes ago"`, `"in 3 hours"`, `"2 days ago"`. Bucket boundaries
/// are exclusive on the lower unit (59 minutes stays in the minutes bucket,
/// 60 minutes moves to hours). An unknown instant yields an empty string.
pub fn time_difference_label_at(date: &str, time: &str, now: DateTime<Utc>) -> String {
    let Some(instant) = flight_instant(date, time) else {
        return String::new();
    };

    let diff = instant.signed_duration_since(now);
    let is_past = diff < Duration::zero();
    let minutes = diff.abs().num_minutes();
    let hours = minutes / 60;
    let days = hours / 24;

    let (count, unit) = if minutes < 60 {
        (minutes, "minutes")
    } else if hours < 24 {
        (hours, "hours")
    } else {
        (days, "days")
    };

    if is_past {
        format!("{count} {unit} ago")
    } else {
        format!("in {count} {unit}")
    }
}

/// Human-readable distance between the departure instant and the current
/// time. See [`time_difference_label_at`].
pub fn time_difference_label(date: &str, time: &str) -> String {
    time_difference_label_at(date, time, Utc::now())
}

// ---------------------------------------------------------------------------
// filter_archivable
// ---------------------------------------------------------------------------

/// Drop flights whose departure is archive-eligible relative to `now`.
///
/// A flight with an empty departure time is evaluated at `00:00`; a flight
/// whose instant cannot be determined at all is retained.
pub fn filter_archivable_at(flights: &[Flight], now: DateTime<Utc>) -> Vec<Flight> {
    flights
        .iter()
        .filter(|flight| {
            let time = if flight.departure.time.is_empty() {
                "00:00"
            } else {
                flight.departure.time.as_str()
            };
            !should_archive_at(&flight.date, time, now)
        })
        .cloned()
        .collect()
}

/// Drop flights whose departure is archive-eligible right now.
pub fn filter_archivable(flights: &[Flight]) -> Vec<Flight> {
    filter_archivable_at(flights, Utc::now())
}

/// Defensive variant for callers that may not have a list at all: `None`
/// yields an empty output rather than an error.
pub fn filter_archivable_opt(flights: Option<&[Flight]>, now: DateTime<Utc>) -> Vec<Flight> {
    match flights {
        Some(flights) => filter_archivable_at(flights, now),
        None => Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
