//! Huffman trie construction.
//!
//! The builder repeatedly merges the two lightest nodes until one root
//! remains. Extraction order is fully deterministic:
//!
//! 1. Lower weight first.
//! 2. At equal weight, internal nodes before leaves.
//! 3. Internal nodes of equal weight in creation order.
//! 4. Leaves of equal weight in ascending symbol order.
//!
//! The first node extracted becomes the zero-child of the merged node.

use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A node of the Huffman trie.
///
/// Internal nodes own both children exclusively; the tree is immutable once
/// built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrieNode {
    /// A symbol with its corpus frequency.
    Leaf {
        /// Symbol represented by this leaf.
        symbol: char,
        /// Occurrence count.
        weight: usize,
    },
    /// A merge point with exactly two children.
    Internal {
        /// Sum of the children's weights.
        weight: usize,
        /// Subtree reached by a `0` bit.
        zero: Box<TrieNode>,
        /// Subtree reached by a `1` bit.
        one: Box<TrieNode>,
    },
}

impl TrieNode {
    /// Create a leaf.
    pub fn leaf(symbol: char, weight: usize) -> Self {
        TrieNode::Leaf { symbol, weight }
    }

    /// Create an internal node owning `zero` and `one`.
    pub fn merge(zero: Self, one: Self) -> Self {
        TrieNode::Internal {
            weight: zero.weight() + one.weight(),
            zero: Box::new(zero),
            one: Box::new(one),
        }
    }

    /// Aggregate weight of this subtree.
    pub fn weight(&self) -> usize {
        match self {
            TrieNode::Leaf { weight, .. } | TrieNode::Internal { weight, .. } => *weight,
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, TrieNode::Leaf { .. })
    }

    /// The leaf's symbol, or `None` for internal nodes.
    pub fn symbol(&self) -> Option<char> {
        match self {
            TrieNode::Leaf { symbol, .. } => Some(*symbol),
            TrieNode::Internal { .. } => None,
        }
    }

    /// The child selected by `bit`, or `None` for leaves.
    #[inline]
    pub fn child(&self, bit: bool) -> Option<&TrieNode> {
        match self {
            TrieNode::Leaf { .. } => None,
            TrieNode::Internal { zero, one, .. } => Some(if bit { &**one } else { &**zero }),
        }
    }
}

/// Tie-break key at equal weight. Variant order puts internal nodes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum TieBreak {
    /// Creation sequence number.
    Internal(usize),
    Leaf(char),
}

#[derive(Debug)]
struct HeapEntry {
    weight: usize,
    tie: TieBreak,
    node: TrieNode,
}

impl HeapEntry {
    fn key(&self) -> (usize, TieBreak) {
        (self.weight, self.tie)
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// A complete Huffman trie together with its sentinel symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trie {
    root: TrieNode,
    sentinel: char,
}

impl Trie {
    /// Build the trie for a frequency table.
    pub fn build(frequencies: &FrequencyTable) -> Result<Self> {
        let mut heap: BinaryHeap<Reverse<HeapEntry>> = frequencies
            .iter()
            .map(|(symbol, count)| {
                Reverse(HeapEntry {
                    weight: count,
                    tie: TieBreak::Leaf(symbol),
                    node: TrieNode::leaf(symbol, count),
                })
            })
            .collect();

        let mut next_seq = 0;
        while heap.len() > 1 {
            let (Some(Reverse(zero)), Some(Reverse(one))) = (heap.pop(), heap.pop()) else {
                break;
            };
            let node = TrieNode::merge(zero.node, one.node);
            heap.push(Reverse(HeapEntry {
                weight: node.weight(),
                tie: TieBreak::Internal(next_seq),
                node,
            }));
            next_seq += 1;
        }

        let root = heap
            .pop()
            .map(|Reverse(entry)| entry.node)
            .ok_or(HuffmanError::EmptyAlphabet)?;

        Ok(Self {
            root,
            sentinel: frequencies.sentinel(),
        })
    }

    /// Wrap an existing tree.
    pub fn from_root(root: TrieNode, sentinel: char) -> Self {
        Self { root, sentinel }
    }

    /// The root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// The end-of-transmission symbol.
    pub fn sentinel(&self) -> char {
        self.sentinel
    }

    /// Total weight of the trie.
    pub fn weight(&self) -> usize {
        self.root.weight()
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.nodes().filter(|(node, _)| node.is_leaf()).count()
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.nodes().map(|(_, depth)| depth).max().unwrap_or(0)
    }

    /// Every node with its depth, pre-order.
    fn nodes(&self) -> impl Iterator<Item = (&TrieNode, usize)> {
        let mut stack = vec![(&self.root, 0)];
        std::iter::from_fn(move || {
            let (node, depth) = stack.pop()?;
            if let TrieNode::Internal { zero, one, .. } = node {
                stack.push((&**one, depth + 1));
                stack.push((&**zero, depth + 1));
            }
            Some((node, depth))
        })
    }
}
