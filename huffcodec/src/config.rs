//! Codec configuration.

/// ASCII End-of-Transmission-Block control character.
pub const ETB: char = '\u{17}';

/// Huffman codec configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HuffmanConfig {
    /// Symbol appended to every compressed stream to mark its end.
    /// Must never occur in a corpus or message.
    pub sentinel: char,
    /// Whether an empty corpus is accepted.
    /// When it is, the trie degenerates to a single sentinel leaf.
    pub allow_empty_corpus: bool,
}

impl HuffmanConfig {
    /// Default configuration.
    ///
    /// - ETB (`U+0017`) sentinel
    /// - Empty corpus accepted
    pub const DEFAULT: Self = Self {
        sentinel: ETB,
        allow_empty_corpus: true,
    };

    /// Strict configuration.
    ///
    /// - ETB (`U+0017`) sentinel
    /// - Empty corpus rejected with `EmptyAlphabet`
    pub const STRICT: Self = Self {
        sentinel: ETB,
        allow_empty_corpus: false,
    };

    /// Create the default configuration.
    pub fn new() -> Self {
        Self::DEFAULT
    }

    /// Use a different sentinel symbol.
    pub fn with_sentinel(mut self, sentinel: char) -> Self {
        self.sentinel = sentinel;
        self
    }

    /// Set whether an empty corpus is accepted.
    pub fn allow_empty_corpus(mut self, allow: bool) -> Self {
        self.allow_empty_corpus = allow;
        self
    }
}

impl Default for HuffmanConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
