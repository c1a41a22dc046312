//! Huffman decoder (decompression).

use crate::error::Result;
use crate::trie::{Trie, TrieNode};
use huffcodec_core::MsbBitReader;
use tracing::trace;

/// Decoder walking a trained trie bit by bit.
#[derive(Debug, Clone, Copy)]
pub struct HuffmanDecoder<'a> {
    trie: &'a Trie,
}

impl<'a> HuffmanDecoder<'a> {
    /// Create a decoder over `trie`.
    pub fn new(trie: &'a Trie) -> Self {
        Self { trie }
    }

    /// Decode `data` up to the sentinel.
    ///
    /// Each `0` bit moves to the zero-child and each `1` bit to the
    /// one-child. On reaching a leaf its symbol is emitted and the walk
    /// restarts at the root; the sentinel leaf stops decoding and any
    /// remaining bits (padding included) are ignored. A single-leaf trie
    /// consumes one bit per symbol.
    ///
    /// # Errors
    ///
    /// `MalformedStream` if the input runs out before the sentinel, which
    /// includes empty input.
    pub fn decode(&self, data: &[u8]) -> Result<String> {
        let root = self.trie.root();
        let sentinel = self.trie.sentinel();
        let mut reader = MsbBitReader::new(data);
        let mut output = String::new();
        let mut node = root;

        loop {
            let bit = reader.read_bit()?;
            node = node.child(bit).unwrap_or(node);

            if let TrieNode::Leaf { symbol, .. } = node {
                if *symbol == sentinel {
                    break;
                }
                output.push(*symbol);
                node = root;
            }
        }

        trace!(
            input_bytes = data.len(),
            consumed_bits = reader.bits_read(),
            output_bytes = output.len(),
            "decoded message"
        );
        Ok(output)
    }
}
