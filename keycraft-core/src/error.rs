//! Error taxonomy for enumeration

use std::io;
use thiserror::Error;

/// Errors surfaced by validation and enumeration
///
/// Cancellation is deliberately absent: a cooperative stop is a terminal
/// [`Status`](crate::Status), not a failure.
#[derive(Error, Debug)]
pub enum Error {
    /// Length bounds below 1 or inverted
    #[error("invalid length range {min}..={max}: {reason}")]
    InvalidRange {
        /// Requested minimum length
        min: usize,
        /// Requested maximum length
        max: usize,
        /// Which bound was violated
        reason: &'static str,
    },

    /// Empty alphabet, or an unknown character class
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),

    /// The sink refused a word; enumeration stopped on the spot
    #[error("sink failed after {delivered} words: {source}")]
    SinkFailure {
        /// Words accepted before the failing call
        delivered: u64,
        /// Underlying failure reported by the sink
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Whether the error was raised before any word was produced
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::InvalidRange { .. } | Error::InvalidAlphabet(_))
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_display() {
        let err = Error::InvalidRange {
            min: 3,
            max: 2,
            reason: "minimum exceeds maximum",
        };
        assert_eq!(
            err.to_string(),
            "invalid length range 3..=2: minimum exceeds maximum"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_sink_failure_keeps_source() {
        let err = Error::SinkFailure {
            delivered: 7,
            source: io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"),
        };
        assert!(err.to_string().contains("after 7 words"));
        assert!(!err.is_validation());

        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "pipe closed");
    }
}
