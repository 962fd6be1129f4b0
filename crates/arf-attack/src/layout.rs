//! Byte layout of an attack record.
//!
//! ```text
//! Record
//!   0x000  0x00D  Header (signature)
//!   0x00D  0x135  Body
//!   0x135  0x3E8  Reserved, preserved verbatim
//!
//! Body
//!   0x000  0x002  Id (u16 LE)
//!   0x002  0x022  Name (32 bytes text)
//!   0x022  0x122  Display text (256 bytes text)
//!   0x122         Attack type
//!   0x123  0x125  Effect block
//!   0x125         Strength
//!   0x126  0x128  Checksum (CRC16-CCITT of Body[..0x126], u16 LE)
//!
//! Effect block
//!   0x00          Effect kind
//!   0x01          Effect chance (1 in N)
//! ```

use arf_common::Region;

/// On-disk size of one attack record.
pub const RECORD_SIZE: usize = 1000;

/// Bytes of a record covered by the header and body.
pub const USED_SIZE: usize = 0x135;

/// Signature every well-formed record starts with.
pub const HEADER_SIGNATURE: [u8; HEADER_SIZE] = [
    0x2B, 0x52, 0x4D, 0x51, 0x49, 0x3C, 0x53, 0x5D, 0x45, 0x50, 0x49, 0x1F, 0xFF,
];

/// Size of the header in bytes.
pub const HEADER_SIZE: usize = 0x0D;

/// Size of the body in bytes.
pub const BODY_SIZE: usize = USED_SIZE - HEADER_SIZE;

/// Size of the checksum field in bytes.
pub const CHECKSUM_SIZE: usize = 2;

/// Byte budget of the name field.
pub const NAME_SIZE: usize = 0x20;

/// Byte budget of the display text field.
pub const DISPLAY_TEXT_SIZE: usize = 0x100;

/// Header, relative to the record.
pub const HEADER: Region = Region::from_range(0x00, HEADER_SIZE);
/// Body, relative to the record.
pub const BODY: Region = Region::from_range(HEADER_SIZE, USED_SIZE);
/// Reserved tail, relative to the record.
pub const RESERVED: Region = Region::from_range(USED_SIZE, RECORD_SIZE);

/// Id, relative to the body.
pub const ID: Region = Region::from_range(0x00, 0x02);
/// Name, relative to the body.
pub const NAME: Region = Region::from_range(0x02, 0x22);
/// Display text, relative to the body.
pub const DISPLAY_TEXT: Region = Region::from_range(0x22, 0x122);
/// Attack type, relative to the body.
pub const ATTACK_TYPE: Region = Region::byte(0x122);
/// Effect block, relative to the body.
pub const EFFECT_BLOCK: Region = Region::from_range(0x123, 0x125);
/// Strength, relative to the body.
pub const STRENGTH: Region = Region::byte(0x125);
/// Checksum, relative to the body.
pub const CHECKSUM: Region = Region::from_range(0x126, BODY_SIZE);
/// Bytes covered by the checksum, relative to the body.
pub const CHECKSUMMED: Region = Region::from_range(0x00, BODY_SIZE - CHECKSUM_SIZE);

/// Effect kind, relative to the effect block.
pub const EFFECT_KIND: Region = Region::byte(0x00);
/// Effect chance, relative to the effect block.
pub const EFFECT_CHANCE: Region = Region::byte(0x01);

const _: () = {
    assert!(BODY_SIZE == 0x128);
    assert!(BODY.end() <= RECORD_SIZE);
    assert!(NAME.len() == NAME_SIZE);
    assert!(DISPLAY_TEXT.len() == DISPLAY_TEXT_SIZE);
    assert!(CHECKSUM.len() == CHECKSUM_SIZE);
    assert!(CHECKSUM.offset() == CHECKSUMMED.end());
    assert!(EFFECT_CHANCE.end() <= EFFECT_BLOCK.len());
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_fields_tile_the_body() {
        let fields = [
            ID,
            NAME,
            DISPLAY_TEXT,
            ATTACK_TYPE,
            EFFECT_BLOCK,
            STRENGTH,
            CHECKSUM,
        ];

        let mut next = 0;
        for field in fields {
            assert_eq!(field.offset(), next, "gap before {:?}", field);
            next = field.end();
        }
        assert_eq!(next, BODY_SIZE);
    }

    #[test]
    fn test_record_regions() {
        assert_eq!(HEADER.end(), BODY.offset());
        assert_eq!(BODY.end(), RESERVED.offset());
        assert_eq!(RESERVED.end(), RECORD_SIZE);
    }
}
