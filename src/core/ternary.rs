//! Balanced-ternary codec: lossless two-way mapping between signed
//! integers and fixed-width codes over {T, 0, 1}
//!
//! Digits carry the values T=-1, 0=0, 1=1. The balanced "borrow" rule
//! (remainder 2 → digit T, carry +1 into the quotient) gives every integer
//! exactly one representation per width; zero is the all-zero string.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::{CoreError, TernaryCode};

lazy_static! {
    /// The full {T, 0, 1} alphabet; star so the empty string matches
    static ref RE_TERNARY: Regex = Regex::new(r"^[T01]*$").unwrap();
}

/// Balanced-ternary codec
#[derive(Debug, Default)]
pub struct TernaryCodec;

impl TernaryCodec {
    /// Create new codec
    pub fn new() -> Self {
        Self
    }

    /// Largest value representable in `length` digits: (3^length - 1) / 2
    ///
    /// Saturates at `i64::MAX` for widths past 40 digits. The span is
    /// symmetric, so the smallest value is the negation.
    pub fn max_value(length: usize) -> i64 {
        // (3^L - 1) / 2 == sum of 3^k for k in 0..L
        let mut max: i128 = 0;
        let mut power: i128 = 1;
        for _ in 0..length {
            max += power;
            power *= 3;
            if max > i64::MAX as i128 {
                return i64::MAX;
            }
        }
        max as i64
    }

    /// Encode `value` as a balanced-ternary code of exactly `length` digits
    ///
    /// Fails with `InvalidRange` if `value` lies outside the representable
    /// span, or if `length` is zero.
    pub fn encode(&self, value: i64, length: usize) -> Result<TernaryCode, CoreError> {
        if length == 0 {
            return Err(CoreError::InvalidRange {
                value,
                length,
                min: 0,
                max: 0,
            });
        }

        let max = Self::max_value(length);
        if value < -max || value > max {
            return Err(CoreError::InvalidRange {
                value,
                length,
                min: -max,
                max,
            });
        }

        // Digits come out least significant first
        let mut digits: Vec<char> = Vec::with_capacity(length);
        let mut remaining = value;
        while remaining != 0 {
            let digit = match remaining.rem_euclid(3) {
                0 => 0,
                1 => 1,
                // Borrow: remainder 2 becomes digit -1, carrying +1 upward
                _ => -1,
            };
            digits.push(match digit {
                -1 => 'T',
                0 => '0',
                _ => '1',
            });
            remaining = (remaining - digit) / 3;
        }

        // Left-pad with zeros up to the requested width
        while digits.len() < length {
            digits.push('0');
        }
        digits.reverse();

        Ok(TernaryCode::new(digits.into_iter().collect()))
    }

    /// Decode a balanced-ternary code to its signed integer value
    ///
    /// Accepts any length; the empty string decodes to 0. Fails with
    /// `InvalidCharacter` on anything outside {T, 0, 1}, and with
    /// `InvalidRange` if the value does not fit an `i64`.
    pub fn decode(&self, code: &str) -> Result<i64, CoreError> {
        let mut acc: i128 = 0;
        for (position, character) in code.chars().enumerate() {
            let digit: i128 = match character {
                'T' => -1,
                '0' => 0,
                '1' => 1,
                _ => return Err(CoreError::InvalidCharacter {
                    character,
                    position,
                }),
            };
            acc = acc * 3 + digit;
            // Magnitude only grows from here, so bail as soon as i64 is out
            if acc > i64::MAX as i128 || acc < i64::MIN as i128 {
                return Err(CoreError::InvalidRange {
                    value: if acc > 0 { i64::MAX } else { i64::MIN },
                    length: code.chars().count(),
                    min: i64::MIN,
                    max: i64::MAX,
                });
            }
        }
        Ok(acc as i64)
    }

    /// Non-throwing guard: exact width and alphabet check
    pub fn validate(&self, code: &str, required_length: usize) -> bool {
        code.chars().count() == required_length && RE_TERNARY.is_match(code)
    }
}

// =============================================================================
// TESTS
// =============================================================================
