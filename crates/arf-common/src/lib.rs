//! Common utilities for ARF.
//!
//! This crate provides the byte-level building blocks used by the record crates:
//!
//! - [`Region`] - Fixed `(offset, length)` windows with copy-out / copy-back access
//! - [`crc`] - CRC16-CCITT checksums
//! - [`int`] - Two-byte integer codec
//! - [`text`] - Fixed-width, NUL padded text codec

mod error;
mod region;

pub mod crc;
pub mod int;
pub mod text;

pub use error::{Error, Result};
pub use int::Endian;
pub use region::Region;

/// Re-export memchr for byte searching
pub use memchr;
