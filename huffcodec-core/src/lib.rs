//! # huffcodec Core
//!
//! Core components shared by the huffcodec crates:
//!
//! - [`bitstream`]: MSB-first bit-level I/O for prefix codes
//! - [`error`]: Error types
//!
//! ## Example
//!
//! ```rust
//! use huffcodec_core::{MsbBitReader, MsbBitWriter};
//!
//! let mut writer = MsbBitWriter::new();
//! writer.write_bit(true);
//! writer.write_bit(true);
//! let data = writer.into_vec();
//! assert_eq!(data, vec![0b1100_0000]);
//!
//! let mut reader = MsbBitReader::new(&data);
//! assert!(reader.read_bit().unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod error;

pub use bitstream::{MsbBitReader, MsbBitWriter};
pub use error::{BitstreamError, Result};
