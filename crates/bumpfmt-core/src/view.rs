//! Bounds-tracked mutable windows over caller memory.
//!
//! A [`BufferView`] is the only path through which formatting code touches
//! the destination buffer. It wraps a `&mut [u8]` window and remembers where
//! that window starts inside the root buffer so that errors can report an
//! absolute offset.
//!
//! Invariants:
//! - `start <= start + len <= root buffer length`
//! - a view sliced from offset `k` covers `[parent.start + k, parent.end)`
//! - no method reads or writes outside the window; every access is checked
//!   and reports [`FormatError::OutOfBounds`] instead of panicking.

use crate::error::{FormatError, Result};

/// Non-owning, bounds-checked window `[start, end)` into a byte buffer.
#[derive(Debug)]
pub struct BufferView<'a> {
    bytes: &'a mut [u8],
    start: usize,
}

impl<'a> BufferView<'a> {
    /// Wrap a whole caller buffer. The view starts at absolute offset 0.
    #[must_use]
    pub fn new(bytes: &'a mut [u8]) -> Self {
        Self { bytes, start: 0 }
    }

    /// Number of bytes addressable through this view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true when the view has no room left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Absolute offset of the first byte of this view in the root buffer.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Absolute offset one past the last byte of this view.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.bytes.len()
    }

    /// Borrow a sub-view covering `[from, len)` of this view. No bytes are copied.
    ///
    /// `from == len` yields an empty view; `from > len` is out of bounds.
    pub fn slice_from(&mut self, from: usize) -> Result<BufferView<'_>> {
        self.check_offset(from)?;
        Ok(BufferView {
            bytes: &mut self.bytes[from..],
            start: self.start + from,
        })
    }

    /// Consuming form of [`slice_from`](Self::slice_from) that keeps the full lifetime.
    pub fn into_slice_from(self, from: usize) -> Result<BufferView<'a>> {
        self.check_offset(from)?;
        let start = self.start + from;
        let bytes = self.bytes;
        Ok(BufferView {
            bytes: &mut bytes[from..],
            start,
        })
    }

    /// Borrow the whole view again for a shorter lifetime.
    pub fn reborrow(&mut self) -> BufferView<'_> {
        BufferView {
            bytes: &mut *self.bytes,
            start: self.start,
        }
    }

    /// Read the byte at `index`.
    pub fn get(&self, index: usize) -> Result<u8> {
        self.bytes
            .get(index)
            .copied()
            .ok_or_else(|| self.overflow(index, 1))
    }

    /// Write `byte` at `index`.
    pub fn set(&mut self, index: usize, byte: u8) -> Result<()> {
        let err = self.overflow(index, 1);
        let slot = self.bytes.get_mut(index).ok_or(err)?;
        *slot = byte;
        Ok(())
    }

    /// Fail unless `needed` bytes fit starting at `at`.
    pub fn ensure(&self, at: usize, needed: usize) -> Result<()> {
        match at.checked_add(needed) {
            Some(end) if end <= self.bytes.len() => Ok(()),
            _ => Err(self.overflow(at, needed)),
        }
    }

    /// Copy `src` into the view starting at `at`; returns `src.len()`.
    ///
    /// All-or-nothing: if `src` does not fit, nothing is written.
    pub fn put_slice(&mut self, at: usize, src: &[u8]) -> Result<usize> {
        self.ensure(at, src.len())?;
        self.bytes[at..at + src.len()].copy_from_slice(src);
        Ok(src.len())
    }

    /// Write `count` copies of `byte` starting at `at`; returns `count`.
    pub fn fill(&mut self, at: usize, byte: u8, count: usize) -> Result<usize> {
        self.ensure(at, count)?;
        self.bytes[at..at + count].fill(byte);
        Ok(count)
    }

    /// Read-only access to the window contents.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..]
    }

    /// Give the underlying window back to the caller.
    #[must_use]
    pub fn into_bytes(self) -> &'a mut [u8] {
        self.bytes
    }

    fn check_offset(&self, from: usize) -> Result<()> {
        if from > self.bytes.len() {
            return Err(FormatError::OutOfBounds {
                offset: self.start,
                needed: from,
                available: self.bytes.len(),
            });
        }
        Ok(())
    }

    fn overflow(&self, at: usize, needed: usize) -> FormatError {
        FormatError::OutOfBounds {
            offset: self.start.saturating_add(at),
            needed,
            available: self.bytes.len().saturating_sub(at),
        }
    }
}

impl<'a> From<&'a mut [u8]> for BufferView<'a> {
    fn from(bytes: &'a mut [u8]) -> Self {
        Self::new(bytes)
    }
}
