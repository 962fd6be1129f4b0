//! Attack record handling.

use std::fmt;
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};

use arf_common::{crc, int, text, Endian, Region};
use tracing::{debug, warn};

use crate::effect::EffectBlock;
use crate::error::LookupError;
use crate::kinds::{AttackType, EffectKind};
use crate::layout::*;
use crate::lookup::PrimaryKeyLookup;
use crate::summary::AttackSummary;
use crate::{Error, Result};

/// One attack entry of an ARF data file.
///
/// The record owns its full on-disk buffer. Field accessors copy bytes out of
/// the buffer and setters write through a copy of the enclosing region, so
/// every byte outside the written field (the reserved tail included) stays as
/// it was loaded.
///
/// Header and checksum are not checked on load. Use [`has_valid_header`] and
/// [`is_checksum_valid`] to inspect them and [`fix_header`] /
/// [`fix_checksum`] to repair them.
///
/// [`has_valid_header`]: AttackRecord::has_valid_header
/// [`is_checksum_valid`]: AttackRecord::is_checksum_valid
/// [`fix_header`]: AttackRecord::fix_header
/// [`fix_checksum`]: AttackRecord::fix_checksum
#[derive(Clone, PartialEq, Eq)]
pub struct AttackRecord {
    /// The full record bytes.
    buffer: Box<[u8; RECORD_SIZE]>,
    /// Display-only key from the external attack table.
    primary_key: u16,
    /// Store position the record was read from.
    base_offset: u64,
}

impl AttackRecord {
    /// Create an empty record: the header signature followed by zeros.
    pub fn new() -> Self {
        let mut buffer = Box::new([0u8; RECORD_SIZE]);
        HEADER.write(&mut buffer[..], &HEADER_SIGNATURE);

        Self {
            buffer,
            primary_key: 0,
            base_offset: 0,
        }
    }

    /// Create a record from the first [`RECORD_SIZE`] bytes of `data`.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < RECORD_SIZE {
            return Err(Error::Read {
                needed: RECORD_SIZE,
                available: data.len(),
            });
        }

        let mut buffer = Box::new([0u8; RECORD_SIZE]);
        buffer.copy_from_slice(&data[..RECORD_SIZE]);

        Ok(Self {
            buffer,
            primary_key: 0,
            base_offset: 0,
        })
    }

    /// Read a record from the current position of `reader`.
    ///
    /// The position becomes the record's base offset, which [`save`] later
    /// writes back to.
    ///
    /// [`save`]: AttackRecord::save
    pub fn from_store<R: Read + Seek>(reader: &mut R) -> Result<Self> {
        let base_offset = reader.stream_position()?;

        let mut buffer = Box::new([0u8; RECORD_SIZE]);
        let mut filled = 0;
        while filled < RECORD_SIZE {
            match reader.read(&mut buffer[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::Io(e)),
            }
        }

        if filled < RECORD_SIZE {
            return Err(Error::Read {
                needed: RECORD_SIZE,
                available: filled,
            });
        }

        debug!(offset = base_offset, "loaded attack record");

        Ok(Self {
            buffer,
            primary_key: 0,
            base_offset,
        })
    }

    /// Read a record and resolve its primary key.
    ///
    /// A failed lookup leaves the key at 0 and does not fail the load.
    pub fn from_store_with_lookup<R, L>(reader: &mut R, lookup: &L) -> Result<Self>
    where
        R: Read + Seek,
        L: PrimaryKeyLookup + ?Sized,
    {
        let mut record = Self::from_store(reader)?;
        record.update_primary_key(lookup);
        Ok(record)
    }

    /// Resolve the primary key from the current id and name.
    ///
    /// Returns whether a key was found. On failure the key is left unchanged.
    pub fn update_primary_key<L: PrimaryKeyLookup + ?Sized>(&mut self, lookup: &L) -> bool {
        let id = self.id();
        let name = self.name();

        match lookup.lookup_primary_key(id, &name) {
            Ok(pk) => {
                self.primary_key = pk;
                true
            }
            Err(LookupError::NotFound { .. }) => {
                debug!(id, name = %name, "no primary key for attack");
                false
            }
            Err(e) => {
                warn!(id, name = %name, "primary key lookup failed: {}", e);
                false
            }
        }
    }

    /// Get the display-only primary key (0 unless a lookup succeeded).
    pub fn primary_key(&self) -> u16 {
        self.primary_key
    }

    /// Get the store offset this record is saved at.
    pub fn base_offset(&self) -> u64 {
        self.base_offset
    }

    /// Set the store offset this record is saved at.
    pub fn set_base_offset(&mut self, offset: u64) {
        self.base_offset = offset;
    }

    /// Get the raw record bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..]
    }

    /// Consume the record, returning its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer.to_vec()
    }

    // Header

    /// Get the header bytes.
    pub fn header(&self) -> [u8; HEADER_SIZE] {
        HEADER.read_array(&self.buffer[..])
    }

    /// Overwrite the header bytes.
    pub fn set_header(&mut self, header: [u8; HEADER_SIZE]) {
        HEADER.write(&mut self.buffer[..], &header);
    }

    /// Check if the header matches the signature.
    pub fn has_valid_header(&self) -> bool {
        self.header() == HEADER_SIGNATURE
    }

    /// Reset the header to the signature.
    pub fn fix_header(&mut self) {
        if !self.has_valid_header() {
            debug!(header = ?self.header(), "repairing attack header");
        }
        self.set_header(HEADER_SIGNATURE);
    }

    // Body

    /// Get a copy of the body bytes.
    pub fn body(&self) -> Vec<u8> {
        BODY.read(&self.buffer[..])
    }

    /// Write `bytes` into the body field `field` through a copy of the body.
    fn write_body(&mut self, field: Region, bytes: &[u8]) {
        debug_assert_eq!(field.len(), bytes.len());

        let mut body = self.body();
        field.write(&mut body, bytes);
        BODY.write(&mut self.buffer[..], &body);
    }

    fn body_u8(&self, field: Region) -> u8 {
        field.read_u8(&self.body())
    }

    /// Get the attack id.
    pub fn id(&self) -> u16 {
        int::decode_u16(ID.read_array(&self.body()), Endian::Little)
    }

    /// Set the attack id.
    pub fn set_id(&mut self, id: u16) {
        self.write_body(ID, &int::encode_u16(id, Endian::Little));
    }

    /// Get the attack name.
    pub fn name(&self) -> String {
        text::decode_fixed(&NAME.read(&self.body()))
    }

    /// Set the attack name.
    ///
    /// Names longer than [`NAME_SIZE`] bytes are rejected and the record is
    /// left unchanged.
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        let bytes = text::encode_fixed(name, NAME_SIZE)?;
        self.write_body(NAME, &bytes);
        Ok(())
    }

    /// Get the text shown when the attack is played.
    pub fn display_text(&self) -> String {
        text::decode_fixed(&DISPLAY_TEXT.read(&self.body()))
    }

    /// Set the text shown when the attack is played.
    ///
    /// Text longer than [`DISPLAY_TEXT_SIZE`] bytes is rejected and the
    /// record is left unchanged.
    pub fn set_display_text(&mut self, display_text: &str) -> Result<()> {
        let bytes = text::encode_fixed(display_text, DISPLAY_TEXT_SIZE)?;
        self.write_body(DISPLAY_TEXT, &bytes);
        Ok(())
    }

    /// Get the raw attack type byte.
    pub fn attack_type_raw(&self) -> u8 {
        self.body_u8(ATTACK_TYPE)
    }

    /// Get the attack type, if the stored byte is a known value.
    pub fn attack_type(&self) -> Option<AttackType> {
        AttackType::try_from(self.attack_type_raw()).ok()
    }

    /// Set the raw attack type byte. Unknown values are stored as-is.
    pub fn set_attack_type_raw(&mut self, value: u8) {
        self.write_body(ATTACK_TYPE, &[value]);
    }

    /// Set the attack type.
    pub fn set_attack_type(&mut self, attack_type: AttackType) {
        self.set_attack_type_raw(attack_type.raw());
    }

    // Effect block

    /// Get a copy of the effect block.
    pub fn effect_block(&self) -> EffectBlock {
        EffectBlock::from_bytes(EFFECT_BLOCK.read_array(&self.body()))
    }

    /// Overwrite the effect block.
    pub fn set_effect_block(&mut self, block: EffectBlock) {
        self.write_body(EFFECT_BLOCK, &block.to_bytes());
    }

    /// Write `value` into the effect block field `field` through a copy of
    /// the block.
    fn write_effect(&mut self, field: Region, value: u8) {
        let mut block = self.effect_block().to_bytes();
        field.write(&mut block, &[value]);
        self.set_effect_block(EffectBlock::from_bytes(block));
    }

    /// Get the raw effect kind byte.
    pub fn effect_kind_raw(&self) -> u8 {
        EFFECT_KIND.read_u8(&self.effect_block().to_bytes())
    }

    /// Get the effect kind, if the stored byte is a known value.
    pub fn effect_kind(&self) -> Option<EffectKind> {
        EffectKind::try_from(self.effect_kind_raw()).ok()
    }

    /// Set the raw effect kind byte. Unknown values are stored as-is.
    pub fn set_effect_kind_raw(&mut self, value: u8) {
        self.write_effect(EFFECT_KIND, value);
    }

    /// Set the effect kind.
    pub fn set_effect_kind(&mut self, kind: EffectKind) {
        self.set_effect_kind_raw(kind.raw());
    }

    /// Get the effect chance (1 in N; 1 = always, 0 = never).
    pub fn effect_chance(&self) -> u8 {
        EFFECT_CHANCE.read_u8(&self.effect_block().to_bytes())
    }

    /// Set the effect chance.
    pub fn set_effect_chance(&mut self, chance: u8) {
        self.write_effect(EFFECT_CHANCE, chance);
    }

    /// Get the attack strength.
    pub fn strength(&self) -> u8 {
        self.body_u8(STRENGTH)
    }

    /// Set the attack strength.
    pub fn set_strength(&mut self, strength: u8) {
        self.write_body(STRENGTH, &[strength]);
    }

    // Checksum

    /// Get the checksum stored in the record.
    pub fn stored_checksum(&self) -> u16 {
        int::decode_u16(CHECKSUM.read_array(&self.body()), Endian::Little)
    }

    /// Overwrite the stored checksum.
    pub fn set_stored_checksum(&mut self, checksum: u16) {
        self.write_body(CHECKSUM, &int::encode_u16(checksum, Endian::Little));
    }

    /// Compute the checksum of the current body contents.
    pub fn compute_checksum(&self) -> u16 {
        crc::crc16_ccitt(&self.body(), CHECKSUMMED.offset(), CHECKSUMMED.len())
    }

    /// Check if the stored checksum matches the body.
    pub fn is_checksum_valid(&self) -> bool {
        self.stored_checksum() == self.compute_checksum()
    }

    /// Store the checksum of the current body contents.
    pub fn fix_checksum(&mut self) {
        let checksum = self.compute_checksum();
        self.set_stored_checksum(checksum);
    }

    // Persistence

    /// Fix the checksum and write the record to `writer` at its base offset.
    ///
    /// The header is written as-is; call [`fix_header`] first to repair it.
    /// If the write fails the checksum stays fixed, so `save` can simply be
    /// retried.
    ///
    /// [`fix_header`]: AttackRecord::fix_header
    pub fn save<W: Write + Seek>(&mut self, writer: &mut W) -> Result<()> {
        self.fix_checksum();

        writer
            .seek(SeekFrom::Start(self.base_offset))
            .map_err(Error::Write)?;
        writer.write_all(&self.buffer[..]).map_err(Error::Write)?;
        writer.flush().map_err(Error::Write)?;

        debug!(
            offset = self.base_offset,
            checksum = self.stored_checksum(),
            "saved attack record"
        );

        Ok(())
    }

    /// Take a snapshot of every decoded field.
    pub fn summary(&self) -> AttackSummary {
        AttackSummary::from_record(self)
    }
}

impl Default for AttackRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AttackRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttackRecord")
            .field("id", &self.id())
            .field("name", &self.name())
            .field("attack_type", &self.attack_type_raw())
            .field("effect", &self.effect_block())
            .field("strength", &self.strength())
            .field("checksum", &format_args!("{:#06x}", self.stored_checksum()))
            .field("primary_key", &self.primary_key)
            .field("base_offset", &self.base_offset)
            .finish_non_exhaustive()
    }
}
