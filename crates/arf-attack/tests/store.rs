//! Loading and saving attack records through a byte store.

use std::io::{self, Cursor, Seek, SeekFrom, Write};

use arf_attack::layout::{BODY, RESERVED};
use arf_attack::{
    AttackRecord, AttackType, EffectKind, Error, KeyTable, NoLookup, HEADER_SIGNATURE,
    RECORD_SIZE,
};

fn sample_record() -> AttackRecord {
    let mut record = AttackRecord::new();
    record.set_id(0x0007);
    record.set_name("Tackle").unwrap();
    record
        .set_display_text("A full-body charge.")
        .unwrap();
    record.set_attack_type(AttackType::Attack);
    record.set_effect_kind(EffectKind::None);
    record.set_effect_chance(0);
    record.set_strength(0x28);
    record
}

/// A store whose writes can be switched off.
struct FlakyStore {
    inner: Cursor<Vec<u8>>,
    fail_writes: bool,
}

impl Write for FlakyStore {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.fail_writes {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
        }
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl Seek for FlakyStore {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}

#[test]
fn test_save_then_load_round_trip() {
    let mut record = sample_record();
    let mut store = Cursor::new(Vec::new());

    record.save(&mut store).unwrap();
    assert_eq!(store.get_ref().len(), RECORD_SIZE);

    store.set_position(0);
    let loaded = AttackRecord::from_store(&mut store).unwrap();

    assert_eq!(loaded.as_bytes(), record.as_bytes());
    assert!(loaded.is_checksum_valid());
    assert!(loaded.has_valid_header());
    assert_eq!(loaded.name(), "Tackle");
    assert_eq!(loaded.display_text(), "A full-body charge.");
    assert_eq!(loaded.strength(), 0x28);
}

#[test]
fn test_reserved_bytes_survive_round_trip() {
    let mut data = AttackRecord::new().into_bytes();
    for (i, b) in data[RESERVED.range()].iter_mut().enumerate() {
        *b = (i as u8).wrapping_mul(31).wrapping_add(7);
    }
    let reserved = data[RESERVED.range()].to_vec();

    let mut store = Cursor::new(data);
    let mut record = AttackRecord::from_store(&mut store).unwrap();
    record.set_name("Ember").unwrap();
    record.set_effect_kind(EffectKind::Burn);
    record.save(&mut store).unwrap();

    let saved = store.into_inner();
    assert_eq!(saved.len(), RECORD_SIZE);
    assert_eq!(&saved[RESERVED.range()], &reserved[..]);
}

#[test]
fn test_save_writes_at_base_offset() {
    let mut file = vec![0xAAu8; 16];
    file.extend(sample_record().into_bytes());
    file.extend(vec![0xBBu8; 16]);

    let mut store = Cursor::new(file);
    store.set_position(16);
    let mut record = AttackRecord::from_store(&mut store).unwrap();
    assert_eq!(record.base_offset(), 16);
    assert_eq!(record.id(), 7);

    record.set_strength(0x30);
    // Leave the cursor somewhere else; save must seek back
    store.seek(SeekFrom::End(0)).unwrap();
    record.save(&mut store).unwrap();

    let saved = store.into_inner();
    assert_eq!(saved.len(), 16 + RECORD_SIZE + 16);
    assert!(saved[..16].iter().all(|&b| b == 0xAA));
    assert!(saved[16 + RECORD_SIZE..].iter().all(|&b| b == 0xBB));
    assert_eq!(&saved[16..16 + RECORD_SIZE], record.as_bytes());
    assert_eq!(saved[16 + BODY.offset() + 0x125], 0x30);
}

#[test]
fn test_short_store_fails_load() {
    let mut store = Cursor::new(vec![0u8; RECORD_SIZE - 1]);
    match AttackRecord::from_store(&mut store) {
        Err(Error::Read { needed, available }) => {
            assert_eq!(needed, RECORD_SIZE);
            assert_eq!(available, RECORD_SIZE - 1);
        }
        other => panic!("expected read error, got {:?}", other),
    }
}

#[test]
fn test_load_keeps_malformed_record() {
    let mut data = vec![0u8; RECORD_SIZE];
    data[0] = 0x00;
    data[BODY.offset()] = 0x05;

    let record = AttackRecord::from_store(&mut Cursor::new(data)).unwrap();
    assert!(!record.has_valid_header());
    assert!(!record.is_checksum_valid());
    assert_eq!(record.id(), 5);
}

#[test]
fn test_save_does_not_repair_header() {
    let mut record = sample_record();
    record.set_header([0x11u8; 13]);

    let mut store = Cursor::new(Vec::new());
    record.save(&mut store).unwrap();
    assert_eq!(&store.get_ref()[..13], &[0x11u8; 13]);

    record.fix_header();
    record.save(&mut store).unwrap();
    assert_eq!(&store.get_ref()[..13], &HEADER_SIGNATURE);
}

#[test]
fn test_failed_save_can_be_retried() {
    let mut record = sample_record();
    assert!(!record.is_checksum_valid());

    let mut store = FlakyStore {
        inner: Cursor::new(Vec::new()),
        fail_writes: true,
    };

    let err = record.save(&mut store).unwrap_err();
    assert!(matches!(err, Error::Write(_)));
    // The checksum was fixed before the write was attempted
    assert!(record.is_checksum_valid());
    let fixed = record.clone();

    store.fail_writes = false;
    record.save(&mut store).unwrap();
    assert_eq!(record, fixed);
    assert_eq!(store.inner.get_ref().as_slice(), record.as_bytes());
}

#[test]
fn test_load_with_lookup() {
    let mut bytes = Cursor::new(Vec::new());
    sample_record().save(&mut bytes).unwrap();

    let mut table = KeyTable::new();
    table.insert(7, "Tackle", 501);

    bytes.set_position(0);
    let record = AttackRecord::from_store_with_lookup(&mut bytes, &table).unwrap();
    assert_eq!(record.primary_key(), 501);

    bytes.set_position(0);
    let record = AttackRecord::from_store_with_lookup(&mut bytes, &NoLookup).unwrap();
    assert_eq!(record.primary_key(), 0);
}

#[test]
fn test_consecutive_records() {
    let mut store = Cursor::new(Vec::new());

    let mut first = sample_record();
    first.save(&mut store).unwrap();

    let mut second = AttackRecord::new();
    second.set_id(8);
    second.set_name("Quick Heal").unwrap();
    second.set_attack_type(AttackType::Heal);
    second.set_base_offset(RECORD_SIZE as u64);
    second.save(&mut store).unwrap();

    store.set_position(0);
    let a = AttackRecord::from_store(&mut store).unwrap();
    let b = AttackRecord::from_store(&mut store).unwrap();

    assert_eq!(a.name(), "Tackle");
    assert_eq!(b.name(), "Quick Heal");
    assert_eq!(b.base_offset(), RECORD_SIZE as u64);
    assert_eq!(b.attack_type(), Some(AttackType::Heal));
}
