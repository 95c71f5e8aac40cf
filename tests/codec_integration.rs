//! Integration tests for the balanced-ternary codec
//!
//! Exercises the full contract: round-trips in both directions, range
//! boundaries, the zero case, concrete width-5 vectors, and validation.

use lucid0::core::TernaryCodec;
use lucid0::types::CoreError;
use lucid0::CODE_LENGTH;
use pretty_assertions::assert_eq;

/// All strings of `length` digits over {T, 0, 1}, counted in base 3
fn all_codes(length: usize) -> Vec<String> {
    let total = 3usize.pow(length as u32);
    (0..total)
        .map(|mut n| {
            let mut chars = vec!['T'; length];
            for slot in chars.iter_mut().rev() {
                *slot = ['T', '0', '1'][n % 3];
                n /= 3;
            }
            chars.into_iter().collect()
        })
        .collect()
}

/// decode(encode(v, L)) == v for every v in span, for L in 1..=8
#[test]
fn test_value_round_trip_widths_1_to_8() {
    let codec = TernaryCodec::new();
    for length in 1..=8 {
        let max = TernaryCodec::max_value(length);
        for value in -max..=max {
            let code = codec.encode(value, length).unwrap();
            assert_eq!(
                code.len(),
                length,
                "encode({}, {}) must produce exactly {} digits",
                value,
                length,
                length
            );
            assert_eq!(codec.decode(code.as_str()).unwrap(), value);
        }
    }
}

/// encode(decode(s), L) == s for every well-formed string of width L
///
/// Together with the value round-trip this shows the mapping is a
/// bijection per width: no two codes share a value, no value has two codes.
#[test]
fn test_string_round_trip_widths_1_to_5() {
    let codec = TernaryCodec::new();
    for length in 1..=5 {
        for code in all_codes(length) {
            let value = codec.decode(&code).unwrap();
            let recoded = codec.encode(value, length).unwrap();
            assert_eq!(recoded.as_str(), code);
        }
    }
}

/// Range boundaries: all-1s at the top, all-Ts at the bottom, one past fails
#[test]
fn test_range_boundaries() {
    let codec = TernaryCodec::new();
    for length in 1..=8 {
        let max = TernaryCodec::max_value(length);

        let top = codec.encode(max, length).unwrap();
        assert_eq!(top.as_str(), "1".repeat(length));

        let bottom = codec.encode(-max, length).unwrap();
        assert_eq!(bottom.as_str(), "T".repeat(length));

        assert_eq!(
            codec.encode(max + 1, length).unwrap_err(),
            CoreError::InvalidRange {
                value: max + 1,
                length,
                min: -max,
                max,
            }
        );
        assert!(codec.encode(-max - 1, length).is_err());
    }
}

/// encode(0, L) is L copies of '0' for every width
#[test]
fn test_zero_case() {
    let codec = TernaryCodec::new();
    for length in 1..=8 {
        assert_eq!(codec.encode(0, length).unwrap().as_str(), "0".repeat(length));
    }
}

/// The width-5 vectors from the core contract
#[test]
fn test_concrete_vectors() {
    let codec = TernaryCodec::new();

    assert_eq!(codec.encode(0, CODE_LENGTH).unwrap().as_str(), "00000");
    assert_eq!(codec.encode(121, CODE_LENGTH).unwrap().as_str(), "11111");
    assert_eq!(codec.encode(-121, CODE_LENGTH).unwrap().as_str(), "TTTTT");

    assert_eq!(codec.decode("00000").unwrap(), 0);
    assert_eq!(codec.decode("11111").unwrap(), 121);
    assert_eq!(codec.decode("TTTTT").unwrap(), -121);
}

/// validate truth table: exact width plus alphabet, never an error
#[test]
fn test_validate_guard() {
    let codec = TernaryCodec::new();

    assert!(codec.validate("TT1T1", 5));
    assert!(!codec.validate("TT1T12", 5), "wrong length");
    assert!(!codec.validate("TT1TX", 5), "bad character");
    assert!(!codec.validate("TT1T", 5), "too short");
    assert!(!codec.validate("", 5));
    assert!(codec.validate("", 0), "empty code at width 0 is vacuously well-formed");
}

/// Decode reports the first offending character and its position
#[test]
fn test_invalid_character_positions() {
    let codec = TernaryCodec::new();
    assert_eq!(
        codec.decode("X0000").unwrap_err(),
        CoreError::InvalidCharacter {
            character: 'X',
            position: 0,
        }
    );
    assert_eq!(
        codec.decode("0001x").unwrap_err(),
        CoreError::InvalidCharacter {
            character: 'x',
            position: 4,
        }
    );
    assert_eq!(
        codec.decode("012").unwrap_err(),
        CoreError::InvalidCharacter {
            character: '2',
            position: 2,
        }
    );
}

/// Decode accepts any width; leading zeros never change the value
#[test]
fn test_decode_width_independence() {
    let codec = TernaryCodec::new();
    assert_eq!(codec.decode("1T").unwrap(), 2);
    assert_eq!(codec.decode("0001T").unwrap(), 2);
    assert_eq!(codec.decode("000000001T").unwrap(), 2);
}

/// Exact arithmetic end to end: spot-check positional weights
#[test]
fn test_positional_weights() {
    let codec = TernaryCodec::new();
    // 10000 = 3^4 = 81, 1000T = 81 - 1 = 80, T1111 = -81 + 40 = -41
    assert_eq!(codec.decode("10000").unwrap(), 81);
    assert_eq!(codec.decode("1000T").unwrap(), 80);
    assert_eq!(codec.decode("T1111").unwrap(), -41);
}
