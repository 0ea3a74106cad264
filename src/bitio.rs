//! MSB-first bit streams over in-memory byte buffers.
//!
//! [`BitWriter`] packs bits into bytes, most significant bit first, and pads
//! the final byte with zeros. [`BitReader`] mirrors it, with one twist: once
//! the source is exhausted it keeps producing one-bits for exactly
//! [`CODE_BITS`] more reads before reporting end of stream. The decoder's
//! 16-bit shift register relies on this to drain the last code value, which
//! the encoder never writes out in full.

use crate::arithmetic::CODE_BITS;

/// Initial mask of a byte being written.
const FIRST_BIT: u8 = 0x80;

/// Bit writer: MSB-first, accumulates completed bytes in a buffer.
#[derive(Debug, Clone)]
pub struct BitWriter {
    buf: Vec<u8>,
    current: u8,
    mask: u8,
}

impl BitWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self {
            buf: Vec::new(),
            current: 0,
            mask: FIRST_BIT,
        }
    }

    /// Append one bit. Any non-zero value is written as a one.
    #[inline]
    pub fn write_bit(&mut self, bit: u8) {
        if bit != 0 {
            self.current |= self.mask;
        }
        self.mask >>= 1;
        if self.mask == 0 {
            self.buf.push(self.current);
            self.current = 0;
            self.mask = FIRST_BIT;
        }
    }

    /// Number of bits written so far, including those of a partial byte.
    pub fn bits_written(&self) -> usize {
        self.buf.len() * 8 + self.mask.leading_zeros() as usize
    }

    /// Flush a partially filled byte (unset positions are zero) and return
    /// the buffer.
    pub fn finish(mut self) -> Vec<u8> {
        if self.mask != FIRST_BIT {
            self.buf.push(self.current);
        }
        self.buf
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Bit reader: MSB-first, reads from a byte slice.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    pos: usize,
    current: u8,
    /// Mask of the bit returned last; 1 means the current byte is used up.
    mask: u8,
    /// Synthetic bits still available past the end of `data`.
    remaining: i32,
}

impl<'a> BitReader<'a> {
    /// Create a reader over `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            current: 0,
            mask: 1,
            remaining: CODE_BITS as i32,
        }
    }

    /// Read one bit, returning `Some(0)` or `Some(1)`.
    ///
    /// After the buffer ends, 16 synthetic one-bits follow (two all-ones
    /// bytes). Once those are spent every call returns `None`.
    #[inline]
    pub fn read_bit(&mut self) -> Option<u32> {
        if self.mask == 1 {
            match self.data.get(self.pos) {
                Some(&byte) => {
                    self.current = byte;
                    self.pos += 1;
                }
                None => {
                    if self.remaining <= 0 {
                        return None;
                    }
                    self.current = 0xFF;
                    self.remaining -= 8;
                }
            }
            self.mask = FIRST_BIT;
        } else {
            self.mask >>= 1;
        }
        Some(u32::from(self.current & self.mask != 0))
    }
}
