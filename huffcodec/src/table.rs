//! Code table generation.
//!
//! Codes are read off the trie with an explicit-stack pre-order walk that
//! prefers the zero-child; the trie itself is never modified.

use crate::error::{HuffmanError, Result};
use crate::trie::{Trie, TrieNode};
use std::collections::BTreeMap;
use std::fmt;

/// A variable-length binary code, first bit first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Codeword {
    bits: Vec<bool>,
}

impl Codeword {
    /// Create a codeword from its bits.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the codeword has no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The bits, first bit first.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Whether `self` is a (non-strict) prefix of `other`.
    pub fn is_prefix_of(&self, other: &Codeword) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Symbol-to-codeword map derived from a trie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<char, Codeword>,
    sentinel: char,
    sentinel_code: Codeword,
}

impl CodeTable {
    /// Assign every leaf of `trie` its root-to-leaf path.
    ///
    /// A trie that is a single leaf gets the one-bit code `0`, so even the
    /// degenerate alphabet produces a non-empty stream.
    pub fn from_trie(trie: &Trie) -> Result<Self> {
        let mut codes = BTreeMap::new();

        if let TrieNode::Leaf { symbol, .. } = trie.root() {
            codes.insert(*symbol, Codeword::from_bits(vec![false]));
        } else {
            let mut stack: Vec<(&TrieNode, Vec<bool>)> = vec![(trie.root(), Vec::new())];
            while let Some((node, path)) = stack.pop() {
                match node {
                    TrieNode::Leaf { symbol, .. } => {
                        codes.insert(*symbol, Codeword::from_bits(path));
                    }
                    TrieNode::Internal { zero, one, .. } => {
                        let mut one_path = path.clone();
                        one_path.push(true);
                        let mut zero_path = path;
                        zero_path.push(false);
                        stack.push((&**one, one_path));
                        stack.push((&**zero, zero_path));
                    }
                }
            }
        }

        let sentinel = trie.sentinel();
        let sentinel_code = codes
            .get(&sentinel)
            .cloned()
            .ok_or(HuffmanError::MissingSentinel { sentinel })?;

        Ok(Self {
            codes,
            sentinel,
            sentinel_code,
        })
    }

    /// Codeword for `symbol`.
    pub fn get(&self, symbol: char) -> Option<&Codeword> {
        self.codes.get(&symbol)
    }

    /// Whether `symbol` has a codeword.
    pub fn contains(&self, symbol: char) -> bool {
        self.codes.contains_key(&symbol)
    }

    /// The sentinel symbol.
    pub fn sentinel(&self) -> char {
        self.sentinel
    }

    /// Codeword terminating every stream.
    pub fn sentinel_code(&self) -> &Codeword {
        &self.sentinel_code
    }

    /// Number of entries, sentinel included.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Always false for a table built from a trie.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Length of the longest codeword.
    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(Codeword::len).max().unwrap_or(0)
    }

    /// Iterate entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &Codeword)> {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }

    /// Payload bits `message` compresses to, sentinel included, padding excluded.
    pub fn encoded_bit_len(&self, message: &str) -> Result<usize> {
        let mut total = self.sentinel_code.len();
        for (position, symbol) in message.chars().enumerate() {
            total += self.lookup(symbol, position)?.len();
        }
        Ok(total)
    }

    /// Codeword for a message symbol, rejecting the sentinel and unknown symbols.
    pub(crate) fn lookup(&self, symbol: char, position: usize) -> Result<&Codeword> {
        if symbol == self.sentinel {
            return Err(HuffmanError::reserved_symbol(symbol, position));
        }
        self.codes
            .get(&symbol)
            .ok_or_else(|| HuffmanError::unknown_symbol(symbol, position))
    }
}

impl fmt::Display for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, code) in self.iter() {
            writeln!(f, "{symbol:?} -> {code}")?;
        }
        Ok(())
    }
}
