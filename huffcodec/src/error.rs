//! Huffman codec error types.

use huffcodec_core::BitstreamError;
use thiserror::Error;

/// Errors raised while training, compressing, or decompressing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HuffmanError {
    /// A message character has no codeword in the trained table.
    #[error("Unknown symbol {symbol:?} at position {position}: not present in training corpus")]
    UnknownSymbol {
        /// The offending character.
        symbol: char,
        /// Character index within the message.
        position: usize,
    },

    /// The sentinel symbol appeared in a corpus or message.
    #[error("Reserved sentinel symbol {symbol:?} found at position {position}")]
    ReservedSymbol {
        /// The sentinel character.
        symbol: char,
        /// Character index within the corpus or message.
        position: usize,
    },

    /// The bitstream ended before the sentinel code was decoded.
    #[error("Malformed stream: no end-of-transmission symbol before bit position {bit_position}")]
    MalformedStream {
        /// Number of bits consumed when the input ran out.
        bit_position: u64,
    },

    /// The corpus is empty and the configuration rejects empty alphabets.
    #[error("Empty alphabet: training corpus contains no symbols")]
    EmptyAlphabet,

    /// The trie has no leaf for the configured sentinel.
    #[error("Trie has no leaf for sentinel symbol {sentinel:?}")]
    MissingSentinel {
        /// The sentinel that was looked up.
        sentinel: char,
    },
}

/// Result type alias for Huffman codec operations.
pub type Result<T> = std::result::Result<T, HuffmanError>;

impl HuffmanError {
    /// Create an unknown symbol error.
    pub fn unknown_symbol(symbol: char, position: usize) -> Self {
        Self::UnknownSymbol { symbol, position }
    }

    /// Create a reserved symbol error.
    pub fn reserved_symbol(symbol: char, position: usize) -> Self {
        Self::ReservedSymbol { symbol, position }
    }

    /// Create a malformed stream error.
    pub fn malformed(bit_position: u64) -> Self {
        Self::MalformedStream { bit_position }
    }
}

impl From<BitstreamError> for HuffmanError {
    fn from(err: BitstreamError) -> Self {
        match err {
            BitstreamError::UnexpectedEof { position } => Self::malformed(position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HuffmanError::unknown_symbol('d', 3);
        assert!(err.to_string().contains("'d'"));
        assert!(err.to_string().contains("position 3"));

        let err = HuffmanError::malformed(16);
        assert!(err.to_string().contains("16"));

        let err = HuffmanError::reserved_symbol('\u{17}', 0);
        assert!(err.to_string().contains("sentinel"));
    }

    #[test]
    fn test_bitstream_error_conversion() {
        let err: HuffmanError = BitstreamError::unexpected_eof(24).into();
        assert_eq!(err, HuffmanError::MalformedStream { bit_position: 24 });
    }
}
