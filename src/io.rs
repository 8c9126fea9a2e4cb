//! Lightweight cursors over byte buffers allowing access to consecutive slices.
//! They do not support the actual IO.

use crate::error::{
    Error::{StreamAllocationExceededIn, StreamAllocationExceededOut},
    Result,
};

/// Write
pub(crate) trait OStream {
    /// Try put n bytes into the stream, returning a slice to the buffer.
    fn try_advance(&mut self, n: usize) -> Result<&mut [u8]>;

    /// Copy a byte slice into the stream.
    fn put(&mut self, bytes: &[u8]) -> Result<()> {
        self.try_advance(bytes.len())?.copy_from_slice(bytes);
        Ok(())
    }
}

/// Read
pub(crate) trait IStream {
    /// Try get n bytes from the stream, returning a slice to the buffer.
    fn try_advance(&mut self, n: usize) -> Result<&[u8]>;

    /// Get a single byte from the stream.
    fn get_u8(&mut self) -> Result<u8> {
        Ok(self.try_advance(1)?[0])
    }

    /// Get a little-endian `u16` from the stream.
    fn get_u16(&mut self) -> Result<u16> {
        let bytes = self.try_advance(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }
}

impl<'b> OStream for &'b mut [u8] {
    fn try_advance(&mut self, n: usize) -> Result<&mut [u8]> {
        if n > self.len() {
            return Err(StreamAllocationExceededOut(n, self.len()));
        }
        let (head, tail) = core::mem::take(self).split_at_mut(n);
        *self = tail;
        Ok(head)
    }
}

impl<'b> IStream for &'b [u8] {
    fn try_advance(&mut self, n: usize) -> Result<&[u8]> {
        if n > self.len() {
            return Err(StreamAllocationExceededIn(n, self.len()));
        }
        let (head, tail) = self.split_at(n);
        *self = tail;
        Ok(head)
    }
}
