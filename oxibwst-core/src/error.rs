//! Error types for OxiBWST operations.
//!
//! The transforms themselves are total over byte strings, so the only
//! failures are the ones reported when a caller verifies a round-trip.

use thiserror::Error;

/// The main error type for OxiBWST operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BwstError {
    /// The recovered buffer has a different length from the original.
    #[error("Length mismatch: expected {expected} bytes, found {found}")]
    LengthMismatch {
        /// Length of the original buffer.
        expected: usize,
        /// Length of the recovered buffer.
        found: usize,
    },

    /// The recovered buffer differs from the original.
    #[error(
        "Round-trip mismatch at offset {offset}: expected {expected:#04x}, found {found:#04x}"
    )]
    RoundTripMismatch {
        /// Offset of the first differing byte.
        offset: usize,
        /// Byte in the original buffer.
        expected: u8,
        /// Byte in the recovered buffer.
        found: u8,
    },
}

/// Result type alias for OxiBWST operations.
pub type Result<T> = std::result::Result<T, BwstError>;

impl BwstError {
    /// Create a length mismatch error.
    pub fn length_mismatch(expected: usize, found: usize) -> Self {
        Self::LengthMismatch { expected, found }
    }

    /// Create a round-trip mismatch error.
    pub fn round_trip_mismatch(offset: usize, expected: u8, found: u8) -> Self {
        Self::RoundTripMismatch {
            offset,
            expected,
            found,
        }
    }
}
