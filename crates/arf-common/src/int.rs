//! Two-byte integer codec.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

/// Byte order of a multi-byte field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endian {
    /// Least significant byte first. Every ARF record field uses this.
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}

/// Decode a `u16` from two bytes.
#[inline]
pub fn decode_u16(bytes: [u8; 2], endian: Endian) -> u16 {
    match endian {
        Endian::Little => LittleEndian::read_u16(&bytes),
        Endian::Big => BigEndian::read_u16(&bytes),
    }
}

/// Encode a `u16` into two bytes.
#[inline]
pub fn encode_u16(value: u16, endian: Endian) -> [u8; 2] {
    let mut bytes = [0u8; 2];
    match endian {
        Endian::Little => LittleEndian::write_u16(&mut bytes, value),
        Endian::Big => BigEndian::write_u16(&mut bytes, value),
    }
    bytes
}
