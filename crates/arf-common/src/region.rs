//! Fixed byte regions with copy-out / copy-back access.
//!
//! A [`Region`] names an `(offset, length)` window inside a parent buffer.
//! Reads always return an owned copy, so inspecting a region can never
//! mutate its parent. Writes patch a copy of the region and then store that
//! copy back over the window, leaving every byte outside it untouched.
//!
//! Nested layouts are expressed by applying a region to the copy produced by
//! its parent region, patching it, and writing the patched copy back up.
//!
//! # Example
//!
//! ```
//! use arf_common::Region;
//!
//! const BODY: Region = Region::from_range(2, 6);
//! const FIELD: Region = Region::from_range(1, 3);
//!
//! let mut data = [0u8; 8];
//! let mut body = BODY.read(&data);
//! FIELD.write(&mut body, &[0xAA, 0xBB]);
//! BODY.write(&mut data, &body);
//!
//! assert_eq!(data, [0, 0, 0, 0xAA, 0xBB, 0, 0, 0]);
//! ```

use std::ops::Range;

use crate::{Error, Result};

/// An `(offset, length)` window into a parent byte buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    offset: usize,
    len: usize,
}

impl Region {
    /// Create a region of `len` bytes at `offset`.
    #[inline]
    pub const fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Create a region covering `start..end`.
    ///
    /// # Panics
    ///
    /// Panics if `end < start`. In a `const` context this is a compile error.
    #[inline]
    pub const fn from_range(start: usize, end: usize) -> Self {
        assert!(end >= start, "region end before start");
        Self {
            offset: start,
            len: end - start,
        }
    }

    /// Create a single-byte region at `offset`.
    #[inline]
    pub const fn byte(offset: usize) -> Self {
        Self { offset, len: 1 }
    }

    /// Offset of the region within its parent.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Length of the region in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Check if the region is zero-length.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// One past the last byte of the region.
    #[inline]
    pub const fn end(&self) -> usize {
        self.offset + self.len
    }

    /// The region as a range of parent indices.
    #[inline]
    pub const fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }

    /// Check whether `inner` lies entirely within a region of this length.
    #[inline]
    pub const fn contains(&self, inner: Region) -> bool {
        inner.end() <= self.len
    }

    /// Check whether this region fits inside a parent of `parent_len` bytes.
    #[inline]
    pub const fn fits(&self, parent_len: usize) -> bool {
        self.end() <= parent_len
    }

    fn check(&self, parent_len: usize) -> Result<()> {
        if !self.fits(parent_len) {
            return Err(Error::OutOfBounds {
                offset: self.offset,
                len: self.len,
                available: parent_len.saturating_sub(self.offset),
            });
        }
        Ok(())
    }

    /// Copy the region out of `parent`.
    pub fn try_read(&self, parent: &[u8]) -> Result<Vec<u8>> {
        self.check(parent.len())?;
        Ok(parent[self.range()].to_vec())
    }

    /// Copy the region out of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if the region does not fit inside `parent`.
    #[inline]
    pub fn read(&self, parent: &[u8]) -> Vec<u8> {
        parent[self.range()].to_vec()
    }

    /// Copy the region out of `parent` into a fixed-size array.
    ///
    /// # Panics
    ///
    /// Panics if the region does not fit inside `parent` or `N != self.len()`.
    #[inline]
    pub fn read_array<const N: usize>(&self, parent: &[u8]) -> [u8; N] {
        assert_eq!(N, self.len, "array size does not match region length");
        let mut out = [0u8; N];
        out.copy_from_slice(&parent[self.range()]);
        out
    }

    /// Read the first byte of the region.
    ///
    /// # Panics
    ///
    /// Panics if the region is empty or does not fit inside `parent`.
    #[inline]
    pub fn read_u8(&self, parent: &[u8]) -> u8 {
        assert!(!self.is_empty(), "read_u8 on an empty region");
        parent[self.offset]
    }

    /// Write `bytes` at `at` (relative to the region start) into `parent`.
    ///
    /// The region is copied out, patched, and copied back in full.
    pub fn try_write_at(&self, parent: &mut [u8], at: usize, bytes: &[u8]) -> Result<()> {
        self.check(parent.len())?;
        let patch = Region::new(at, bytes.len());
        if !self.contains(patch) {
            return Err(Error::OutOfBounds {
                offset: at,
                len: bytes.len(),
                available: self.len.saturating_sub(at),
            });
        }

        let mut copy = self.read(parent);
        copy[patch.range()].copy_from_slice(bytes);
        parent[self.range()].copy_from_slice(&copy);
        Ok(())
    }

    /// Write `bytes` at `at` (relative to the region start) into `parent`.
    ///
    /// # Panics
    ///
    /// Panics if the region does not fit `parent` or the patch does not fit
    /// the region.
    #[inline]
    pub fn write_at(&self, parent: &mut [u8], at: usize, bytes: &[u8]) {
        if let Err(e) = self.try_write_at(parent, at, bytes) {
            panic!("{}", e);
        }
    }

    /// Write `bytes` at the start of the region.
    ///
    /// # Panics
    ///
    /// Same conditions as [`Region::write_at`].
    #[inline]
    pub fn write(&self, parent: &mut [u8], bytes: &[u8]) {
        self.write_at(parent, 0, bytes);
    }
}
