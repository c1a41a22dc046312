//! Reusable corpus-trained Huffman codec.

use crate::config::HuffmanConfig;
use crate::decoder::HuffmanDecoder;
use crate::encoder::HuffmanEncoder;
use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::table::CodeTable;
use crate::trie::Trie;
use tracing::debug;

/// A Huffman code trained on one corpus.
///
/// The trie and code table are built once in the constructor and never
/// change, so a single instance can compress and decompress any number of
/// messages, from any number of threads.
///
/// Messages may only contain characters that occurred in the training
/// corpus; anything else is rejected with `UnknownSymbol`. The sentinel
/// (ETB by default) is reserved and may appear in neither corpus nor message.
#[derive(Debug, Clone)]
pub struct Huffman {
    config: HuffmanConfig,
    trie: Trie,
    table: CodeTable,
}

impl Huffman {
    /// Train on `corpus` with the default configuration.
    pub fn new(corpus: &str) -> Result<Self> {
        Self::with_config(corpus, HuffmanConfig::DEFAULT)
    }

    /// Train on `corpus` with an explicit configuration.
    pub fn with_config(corpus: &str, config: HuffmanConfig) -> Result<Self> {
        let frequencies = FrequencyTable::from_corpus(corpus, &config)?;
        let trie = Trie::build(&frequencies)?;
        let table = CodeTable::from_trie(&trie)?;

        debug!(
            symbols = table.len(),
            weight = trie.weight(),
            max_code_len = table.max_code_len(),
            "trained huffman code"
        );

        Ok(Self {
            config,
            trie,
            table,
        })
    }

    /// Compress `message` into a packed, self-terminating bitstream.
    pub fn compress(&self, message: &str) -> Result<Vec<u8>> {
        HuffmanEncoder::new(&self.table).encode(message)
    }

    /// Recover a message produced by [`Huffman::compress`].
    pub fn decompress(&self, data: &[u8]) -> Result<String> {
        HuffmanDecoder::new(&self.trie).decode(data)
    }

    /// The configuration used for training.
    pub fn config(&self) -> &HuffmanConfig {
        &self.config
    }

    /// The decoding trie.
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// The encoding map.
    pub fn code_table(&self) -> &CodeTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ETB;
    use crate::error::HuffmanError;

    #[test]
    fn test_roundtrip_abracadabra() {
        let huffman = Huffman::new("abracadabra").unwrap();
        let compressed = huffman.compress("abracadabra").unwrap();
        assert_eq!(compressed.len(), 4);
        assert_eq!(huffman.decompress(&compressed).unwrap(), "abracadabra");
    }

    #[test]
    fn test_reuse_for_other_messages() {
        let huffman = Huffman::new("abracadabra").unwrap();
        for message in ["", "a", "cab", "dad", "barbara", "rrrrrrrrrrrrrrrrrrrr"] {
            let compressed = huffman.compress(message).unwrap();
            assert_eq!(huffman.decompress(&compressed).unwrap(), message);
        }
    }

    #[test]
    fn test_strict_rejects_empty_corpus() {
        let err = Huffman::with_config("", HuffmanConfig::STRICT).unwrap_err();
        assert_eq!(err, HuffmanError::EmptyAlphabet);
        assert!(Huffman::with_config("a", HuffmanConfig::STRICT).is_ok());
    }

    #[test]
    fn test_custom_sentinel() {
        let config = HuffmanConfig::new().with_sentinel('\0');
        let huffman = Huffman::with_config("tab\u{17}bed", config).unwrap();
        assert_eq!(huffman.code_table().sentinel(), '\0');

        let message = "bet\u{17}";
        let compressed = huffman.compress(message).unwrap();
        assert_eq!(huffman.decompress(&compressed).unwrap(), message);
        assert!(huffman.compress("a\0").is_err());
        assert!(huffman.code_table().contains(ETB));
    }

    #[test]
    fn test_accessors() {
        let huffman = Huffman::new("x").unwrap();
        assert_eq!(huffman.config(), &HuffmanConfig::DEFAULT);
        assert_eq!(huffman.trie().leaf_count(), 2);
        assert_eq!(huffman.code_table().len(), 2);
    }
}
