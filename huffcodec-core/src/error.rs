//! Error types for bit-level I/O.

use thiserror::Error;

/// Errors raised by the MSB-first bit reader.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitstreamError {
    /// Ran out of input before the requested bit was available.
    #[error("Unexpected end of data at bit position {position}")]
    UnexpectedEof {
        /// Bit position where the input ran out.
        position: u64,
    },
}

/// Result type alias for bitstream operations.
pub type Result<T> = std::result::Result<T, BitstreamError>;

impl BitstreamError {
    /// Create an unexpected end-of-data error.
    pub fn unexpected_eof(position: u64) -> Self {
        Self::UnexpectedEof { position }
    }
}
