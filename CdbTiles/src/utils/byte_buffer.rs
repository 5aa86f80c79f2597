//! Growable little-endian byte buffer with checked positional writes.

use byteorder::{ByteOrder, LittleEndian};
use glam::Vec3;

use crate::error::{Error, Result};

/// Byte buffer used to pack container sections.
///
/// Offsets are always explicit: `append*` returns the offset the data landed
/// at, and `write_*_at` refuses to write past the current length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteBuffer {
    data: Vec<u8>,
}

impl ByteBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create a zero-filled buffer of `len` bytes, ready for `write_*_at`.
    #[must_use]
    pub fn zeroed(len: usize) -> Self {
        Self { data: vec![0u8; len] }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    /// Append raw bytes, returning the offset they were written at.
    pub fn append(&mut self, bytes: &[u8]) -> usize {
        let offset = self.data.len();
        self.data.extend_from_slice(bytes);
        offset
    }

    pub fn append_i32(&mut self, value: i32) -> usize {
        self.append(&value.to_le_bytes())
    }

    pub fn append_f64(&mut self, value: f64) -> usize {
        self.append(&value.to_le_bytes())
    }

    /// Zero-pad the buffer to a multiple of `alignment`, returning the new length.
    pub fn align(&mut self, alignment: usize) -> usize {
        let padding = (alignment - (self.data.len() % alignment)) % alignment;
        self.data.extend(std::iter::repeat_n(0u8, padding));
        self.data.len()
    }

    /// Overwrite `bytes.len()` bytes starting at `offset`.
    ///
    /// # Errors
    /// Returns [`Error::BufferOutOfBounds`] if the range is not inside the buffer.
    pub fn write_at(&mut self, offset: usize, bytes: &[u8]) -> Result<()> {
        let target = self.slice_mut(offset, bytes.len())?;
        target.copy_from_slice(bytes);
        Ok(())
    }

    /// Write three little-endian `f32` components at `offset`.
    ///
    /// # Errors
    /// Returns [`Error::BufferOutOfBounds`] if the 12 bytes do not fit.
    pub fn write_vec3_at(&mut self, offset: usize, value: Vec3) -> Result<()> {
        let target = self.slice_mut(offset, 12)?;
        LittleEndian::write_f32_into(&value.to_array(), target);
        Ok(())
    }

    fn slice_mut(&mut self, offset: usize, len: usize) -> Result<&mut [u8]> {
        let buffer_len = self.data.len();
        match offset.checked_add(len) {
            Some(end) if end <= buffer_len => Ok(&mut self.data[offset..end]),
            _ => Err(Error::BufferOutOfBounds {
                offset,
                len,
                buffer_len,
            }),
        }
    }
}

impl From<ByteBuffer> for Vec<u8> {
    fn from(buffer: ByteBuffer) -> Self {
        buffer.into_inner()
    }
}
