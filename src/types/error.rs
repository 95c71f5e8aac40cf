//! Error taxonomy for the codec and the spiral generator
//!
//! Three kinds, all deterministic: a failed call fails identically on retry.

use thiserror::Error;

/// Errors surfaced by the Lucid-0 core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Value cannot be represented in the requested digit width,
    /// or a decoded value does not fit a signed 64-bit integer
    #[error("value {value} out of range [{min}, {max}] for code length {length}")]
    InvalidRange {
        value: i64,
        length: usize,
        min: i64,
        max: i64,
    },

    /// Code contains a character outside the {T, 0, 1} alphabet
    #[error("invalid character {character:?} at position {position}, expected T, 0 or 1")]
    InvalidCharacter { character: char, position: usize },

    /// Generator configuration is unusable
    #[error("invalid spiral configuration: {reason}")]
    InvalidConfiguration { reason: &'static str },
}
