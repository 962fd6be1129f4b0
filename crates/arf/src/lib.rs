//! ARF - card game data file editing library.
//!
//! This crate provides a unified interface to the ARF library crates.
//!
//! # Crates
//!
//! - [`arf_common`] - Common utilities (byte regions, text codec, CRC16)
//! - [`arf_attack`] - Attack record reading, editing and saving
//!
//! # Example
//!
//! ```no_run
//! use std::fs::File;
//!
//! use arf::prelude::*;
//!
//! let mut file = File::open("tackle.atk")?;
//! let record = AttackRecord::from_store(&mut file)?;
//! println!("{}", record.summary());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all sub-crates
pub use arf_attack as attack;
pub use arf_common as common;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use arf_attack::{
        AttackRecord, AttackSummary, AttackType, EffectBlock, EffectKind, KeyTable, NoLookup,
        PrimaryKeyLookup,
    };
    pub use arf_common::{crc, text, Region};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
