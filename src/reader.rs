//! Big-endian, bounds-checked reads over an immutable byte buffer.
//!
//! Rather than a `Seek`-based streaming reader, every read here takes
//! an explicit byte offset: the font tables this crate decodes
//! are randomly addressed (loca offsets into glyf, cmap subtable
//! offsets, component glyph ids), so there is no meaningful "current
//! position" to carry between reads.

use byteorder::{BigEndian, ByteOrder};

use crate::error::DecodeError;

/// A positional, big-endian reader over a borrowed byte slice.
#[derive(Clone, Copy)]
pub struct Reader<'a> {
    buf: &'a [u8],
}

impl<'a> Reader<'a> {
    pub fn new(buf: &'a [u8]) -> Reader<'a> {
        Reader { buf }
    }

    fn check(&self, offset: usize, width: usize) -> Result<(), DecodeError> {
        if offset.checked_add(width).map_or(true, |end| end > self.buf.len()) {
            Err(DecodeError::Truncated { offset, len: self.buf.len() })
        } else {
            Ok(())
        }
    }

    pub fn u8(&self, offset: usize) -> Result<u8, DecodeError> {
        self.check(offset, 1)?;
        Ok(self.buf[offset])
    }

    pub fn i8(&self, offset: usize) -> Result<i8, DecodeError> {
        Ok(self.u8(offset)? as i8)
    }

    pub fn u16(&self, offset: usize) -> Result<u16, DecodeError> {
        self.check(offset, 2)?;
        Ok(BigEndian::read_u16(&self.buf[offset..]))
    }

    pub fn i16(&self, offset: usize) -> Result<i16, DecodeError> {
        self.check(offset, 2)?;
        Ok(BigEndian::read_i16(&self.buf[offset..]))
    }

    pub fn u32(&self, offset: usize) -> Result<u32, DecodeError> {
        self.check(offset, 4)?;
        Ok(BigEndian::read_u32(&self.buf[offset..]))
    }

    pub fn i32(&self, offset: usize) -> Result<i32, DecodeError> {
        self.check(offset, 4)?;
        Ok(BigEndian::read_i32(&self.buf[offset..]))
    }

    /// F2Dot14: 16-bit signed fixed point, 14 fractional bits.
    pub fn f2dot14(&self, offset: usize) -> Result<f32, DecodeError> {
        Ok(self.i16(offset)? as f32 / 16384.0)
    }
}
