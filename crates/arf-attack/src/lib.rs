//! Attack record reader and writer for ARF data files.
//!
//! An attack record is a fixed 1000 byte entry describing a single attack
//! card: its id, name, display text, type, status effect and strength. The
//! used part of the record is guarded by a CRC16-CCITT checksum.
//!
//! # File Format
//!
//! - 13 bytes: Header signature
//! - 0x128 bytes: Body
//!   - 2 bytes: Id (u16 LE)
//!   - 32 bytes: Name
//!   - 256 bytes: Display text
//!   - 1 byte: Attack type
//!   - 2 bytes: Effect block (kind, chance)
//!   - 1 byte: Strength
//!   - 2 bytes: CRC16-CCITT of the preceding body bytes (u16 LE)
//! - Remaining bytes: Reserved, preserved on save
//!
//! See [`layout`] for the exact offsets.
//!
//! # Example
//!
//! ```no_run
//! use std::fs::OpenOptions;
//!
//! use arf_attack::{AttackRecord, AttackType};
//!
//! let mut file = OpenOptions::new().read(true).write(true).open("tackle.atk")?;
//! let mut record = AttackRecord::from_store(&mut file)?;
//!
//! if !record.is_checksum_valid() {
//!     println!("checksum mismatch in {}", record.name());
//! }
//!
//! record.set_attack_type(AttackType::Attack);
//! record.set_strength(40);
//! record.save(&mut file)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod effect;
mod error;
mod kinds;
mod lookup;
mod record;
mod summary;

pub mod layout;

pub use effect::{EffectBlock, EFFECT_BLOCK_SIZE};
pub use error::{Error, LookupError, Result};
pub use kinds::{AttackType, EffectKind};
pub use layout::{HEADER_SIGNATURE, RECORD_SIZE};
pub use lookup::{KeyRow, KeyTable, NoLookup, PrimaryKeyLookup};
pub use record::AttackRecord;
pub use summary::AttackSummary;
