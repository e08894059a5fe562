//! Error types for the `flightdeck-models` crate.
//!
//! The mapping, voice-parsing and schedule components are total functions
//! and never return errors; [`ModelError`] is only produced by the strict
//! date/time constructors in [`crate::schedule`].

/// Errors produced when parsing calendar dates and clock times strictly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// A calendar date string was not in `YYYY-MM-DD` form.
    #[error("invalid flight date \"{value}\": {reason}")]
    InvalidDate {
        /// The value that failed to parse.
        value: String,
        /// Human-readable explanation.
        reason: String,
    },

    /// A clock time string was not in `HH:MM` form.
    #[error("invalid flight time \"{value}\": {reason}")]
    InvalidTime {
        /// The value that failed to parse.
        value: String,
        /// Human-readable explanation.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_date() {
        let err = ModelError::InvalidDate {
            value: "2026-13-40".into(),
            reason: "input is out of range".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid flight date \"2026-13-40\": input is out of range"
        );
    }

    #[test]
    fn error_display_time() {
        let err = ModelError::InvalidTime {
            value: "25:99".into(),
            reason: "input is out of range".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid flight time \"25:99\": input is out of range"
        );
    }
}
