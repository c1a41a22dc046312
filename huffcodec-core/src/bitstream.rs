//! MSB-first bit stream operations.
//!
//! Prefix codes are packed most-significant-bit first: the first bit written
//! becomes the high-order bit of the first byte, and a trailing partial byte
//! is padded with zero bits.
//!
//! # Example
//!
//! ```
//! use huffcodec_core::bitstream::{MsbBitReader, MsbBitWriter};
//!
//! let mut writer = MsbBitWriter::new();
//! for bit in [true, false, true, true] {
//!     writer.write_bit(bit);
//! }
//! let data = writer.into_vec();
//! assert_eq!(data, vec![0b1011_0000]);
//!
//! let mut reader = MsbBitReader::new(&data);
//! assert!(reader.read_bit().unwrap());
//! assert!(!reader.read_bit().unwrap());
//! ```

use crate::error::{BitstreamError, Result};

/// MSB-first bit reader over a borrowed byte slice.
#[derive(Debug)]
pub struct MsbBitReader<'a> {
    /// Input data.
    data: &'a [u8],
    /// Position of the next byte to load.
    byte_pos: usize,
    /// Byte currently being consumed.
    current: u8,
    /// Unread bits left in `current`.
    bits_in_current: u8,
    /// Total bits read (for error reporting).
    total_bits_read: u64,
}

impl<'a> MsbBitReader<'a> {
    /// Create a new MSB bit reader.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            byte_pos: 0,
            current: 0,
            bits_in_current: 0,
            total_bits_read: 0,
        }
    }

    /// Read a single bit.
    ///
    /// Bytes are treated as unsigned, so a set high bit reads as `true`
    /// and never leaks into the bits after it.
    #[inline]
    pub fn read_bit(&mut self) -> Result<bool> {
        if self.bits_in_current == 0 {
            let Some(&byte) = self.data.get(self.byte_pos) else {
                return Err(BitstreamError::unexpected_eof(self.total_bits_read));
            };
            self.byte_pos += 1;
            self.current = byte;
            self.bits_in_current = 8;
        }

        self.bits_in_current -= 1;
        self.total_bits_read += 1;
        Ok((self.current >> self.bits_in_current) & 1 == 1)
    }

    /// Get total bits read.
    pub fn bits_read(&self) -> u64 {
        self.total_bits_read
    }
}

/// MSB-first bit writer producing an owned byte vector.
#[derive(Debug, Default)]
pub struct MsbBitWriter {
    /// Output buffer.
    output: Vec<u8>,
    /// Partial byte, filled from the low end and shifted up.
    buffer: u8,
    /// Number of bits in buffer.
    bits_in_buffer: u8,
    /// Total bits written, excluding padding.
    total_bits_written: u64,
}

impl MsbBitWriter {
    /// Create a new MSB bit writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer whose output buffer can hold `bytes` without reallocating.
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            output: Vec::with_capacity(bytes),
            ..Self::default()
        }
    }

    /// Write a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) {
        self.buffer = (self.buffer << 1) | u8::from(bit);
        self.bits_in_buffer += 1;
        self.total_bits_written += 1;

        if self.bits_in_buffer == 8 {
            self.output.push(self.buffer);
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }
    }

    /// Get total bits written so far, excluding padding.
    pub fn bits_written(&self) -> u64 {
        self.total_bits_written
    }

    /// Number of zero bits `into_vec` will append to reach a byte boundary.
    pub fn padding_bits(&self) -> u8 {
        (8 - self.bits_in_buffer) % 8
    }

    /// Pad the final partial byte with zeros and return the packed output.
    pub fn into_vec(mut self) -> Vec<u8> {
        if self.bits_in_buffer > 0 {
            self.output.push(self.buffer << (8 - self.bits_in_buffer));
        }
        self.output
    }
}
