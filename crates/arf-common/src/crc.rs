//! CRC16-CCITT checksum utilities.
//!
//! ARF data files guard each record body with a 16-bit CRC using the
//! CCITT polynomial `0x1021`, initial value `0xFFFF`, no bit reflection and
//! no final XOR (catalogued as CRC-16/IBM-3740, also known as CCITT-FALSE).

use crc::{Crc, CRC_16_IBM_3740};

const CCITT: Crc<u16> = Crc::<u16>::new(&CRC_16_IBM_3740);

/// Compute CRC16-CCITT over `length` bytes of `data` starting at `start`.
///
/// # Panics
///
/// Panics if `start + length` exceeds `data.len()`.
#[inline]
pub fn crc16_ccitt(data: &[u8], start: usize, length: usize) -> u16 {
    crc16_ccitt_bytes(&data[start..start + length])
}

/// Compute CRC16-CCITT over a whole byte slice.
#[inline]
pub fn crc16_ccitt_bytes(data: &[u8]) -> u16 {
    CCITT.checksum(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_value() {
        assert_eq!(crc16_ccitt_bytes(b"123456789"), 0x29B1);
    }

    #[test]
    fn test_empty_is_initial_value() {
        assert_eq!(crc16_ccitt_bytes(&[]), 0xFFFF);
    }

    #[test]
    fn test_sub_range() {
        let data = b"xx123456789yy";
        assert_eq!(crc16_ccitt(data, 2, 9), 0x29B1);
        assert_eq!(crc16_ccitt(data, 0, data.len()), crc16_ccitt_bytes(data));
    }
}
