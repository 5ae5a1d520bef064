//! Bounds-checked output cursor over a fixed buffer.
//!
//! [`CheckedBufferCursor`] is the write-only counterpart of a slice iterator: it
//! hands out slots one at a time and refuses to go past the end. A write into a
//! full buffer is an [`OutOfBounds`] error, never a silent truncation.

use thiserror::Error;

/// A write was attempted after the buffer filled up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index out of range: output buffer of capacity {capacity} is full")]
pub struct OutOfBounds {
    /// Capacity of the buffer that overflowed.
    pub capacity: usize,
}

/// Write-and-advance cursor over `&mut [T]`.
#[derive(Debug)]
pub struct CheckedBufferCursor<'a, T> {
    buf: &'a mut [T],
    pos: usize,
}

impl<'a, T> CheckedBufferCursor<'a, T> {
    /// Cursor positioned at the start of `buf`.
    pub fn new(buf: &'a mut [T]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Slots still writable.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Number of slots written so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_full(&self) -> bool {
        self.pos == self.buf.len()
    }

    /// Store `value` in the next slot and advance.
    ///
    /// Fails without touching the buffer when no slot is left.
    pub fn write(&mut self, value: T) -> Result<(), OutOfBounds> {
        let capacity = self.buf.len();
        let Some(slot) = self.buf.get_mut(self.pos) else {
            tracing::trace!(capacity, "checked cursor: write past end rejected");
            return Err(OutOfBounds { capacity });
        };
        *slot = value;
        self.pos += 1;
        Ok(())
    }

    /// Write every item in order, returning how many were written.
    ///
    /// Stops at the first item that does not fit; items written before it stay.
    pub fn write_all<I>(&mut self, items: I) -> Result<usize, OutOfBounds>
    where
        I: IntoIterator<Item = T>,
    {
        let mut written = 0;
        for item in items {
            self.write(item)?;
            written += 1;
        }
        Ok(written)
    }

    /// The filled prefix of the buffer.
    pub fn written(&self) -> &[T] {
        &self.buf[..self.pos]
    }

    /// Give back the filled prefix with the buffer's full lifetime.
    pub fn into_written(self) -> &'a mut [T] {
        let Self { buf, pos } = self;
        &mut buf[..pos]
    }
}
