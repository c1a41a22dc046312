//! Corpus frequency analysis.
//!
//! A single pass over the training corpus counts every distinct character.
//! The sentinel is then added with a count of 1, so the table always holds at
//! least one symbol and every compressed stream can be terminated.

use crate::config::HuffmanConfig;
use crate::error::{HuffmanError, Result};
use std::collections::BTreeMap;

/// Occurrence counts for each symbol of a training corpus, plus the sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<char, usize>,
    sentinel: char,
}

impl FrequencyTable {
    /// Count the characters of `corpus`.
    ///
    /// Fails with `ReservedSymbol` if the corpus contains the sentinel and
    /// with `EmptyAlphabet` if the corpus is empty and `config` rejects that.
    pub fn from_corpus(corpus: &str, config: &HuffmanConfig) -> Result<Self> {
        let sentinel = config.sentinel;
        let mut counts = BTreeMap::new();

        for (position, symbol) in corpus.chars().enumerate() {
            if symbol == sentinel {
                return Err(HuffmanError::reserved_symbol(symbol, position));
            }
            *counts.entry(symbol).or_insert(0) += 1;
        }

        if counts.is_empty() && !config.allow_empty_corpus {
            return Err(HuffmanError::EmptyAlphabet);
        }

        counts.insert(sentinel, 1);
        Ok(Self { counts, sentinel })
    }

    /// Occurrences of `symbol` (0 if absent).
    pub fn count(&self, symbol: char) -> usize {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    /// Whether `symbol` has an entry.
    pub fn contains(&self, symbol: char) -> bool {
        self.counts.contains_key(&symbol)
    }

    /// Number of distinct symbols, sentinel included.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Always false: the sentinel is present in every table.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, sentinel included.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// The sentinel symbol.
    pub fn sentinel(&self) -> char {
        self.sentinel
    }

    /// Iterate `(symbol, count)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }
}
