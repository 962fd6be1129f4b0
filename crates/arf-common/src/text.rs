//! Fixed-width text codec.
//!
//! Text fields occupy a fixed byte budget. Each character is stored as a
//! single byte (the ISO-8859-1 range `U+0001..=U+00FF`) and the remainder of
//! the field is padded with `0x00`. A string that uses the whole budget is
//! stored without a terminator.
//!
//! Overflow is rejected rather than truncated, so a failed encode never
//! produces bytes that could reach a neighbouring field.

use crate::{Error, Result};

/// Padding and terminator byte.
pub const PAD: u8 = 0x00;

/// Number of bytes `text` occupies once encoded.
pub fn encoded_len(text: &str) -> usize {
    text.chars().count()
}

/// Encode `text` into exactly `budget` bytes.
///
/// Fails with [`Error::UnencodableChar`] for characters outside the codec's
/// range (including `U+0000`, which would read back as a terminator) and
/// with [`Error::EncodingOverflow`] if the text needs more than `budget` bytes.
pub fn encode_fixed(text: &str, budget: usize) -> Result<Vec<u8>> {
    let needed = encoded_len(text);
    if needed > budget {
        return Err(Error::EncodingOverflow { budget, needed });
    }

    let mut bytes = Vec::with_capacity(budget);
    for c in text.chars() {
        match u32::from(c) {
            0 => return Err(Error::UnencodableChar(c)),
            code @ 1..=0xFF => bytes.push(code as u8),
            _ => return Err(Error::UnencodableChar(c)),
        }
    }
    bytes.resize(budget, PAD);

    Ok(bytes)
}

/// Decode a fixed-width field, stopping at the first padding byte.
///
/// Only the terminator and what follows it are dropped; any other trailing
/// byte (spaces included) is part of the text.
pub fn decode_fixed(bytes: &[u8]) -> String {
    let end = memchr::memchr(PAD, bytes).unwrap_or(bytes.len());
    bytes[..end].iter().map(|&b| char::from(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_pads_to_budget() {
        let bytes = encode_fixed("Tackle", 8).unwrap();
        assert_eq!(bytes, b"Tackle\0\0");
    }

    #[test]
    fn test_exact_budget_has_no_terminator() {
        let bytes = encode_fixed("abcd", 4).unwrap();
        assert_eq!(bytes, b"abcd");
        assert_eq!(decode_fixed(&bytes), "abcd");
    }

    #[test]
    fn test_overflow_rejected() {
        match encode_fixed("abcde", 4) {
            Err(Error::EncodingOverflow { budget, needed }) => {
                assert_eq!(budget, 4);
                assert_eq!(needed, 5);
            }
            other => panic!("expected overflow, got {:?}", other),
        }
    }

    #[test]
    fn test_latin1_round_trip() {
        let bytes = encode_fixed("Stärke", 10).unwrap();
        assert_eq!(bytes[2], 0xE4);
        assert_eq!(decode_fixed(&bytes), "Stärke");
    }

    #[test]
    fn test_unencodable_chars() {
        assert!(matches!(
            encode_fixed("a\u{263A}", 8),
            Err(Error::UnencodableChar('\u{263A}'))
        ));
        assert!(matches!(
            encode_fixed("a\0b", 8),
            Err(Error::UnencodableChar('\0'))
        ));
    }

    #[test]
    fn test_decode_keeps_trailing_spaces() {
        assert_eq!(decode_fixed(b"Hit  \0\0\0"), "Hit  ");
    }

    #[test]
    fn test_decode_stops_at_first_terminator() {
        assert_eq!(decode_fixed(b"ab\0cd\0"), "ab");
        assert_eq!(decode_fixed(b"\0garbage"), "");
    }
}
