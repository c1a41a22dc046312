//! # huffcodec
//!
//! Pure Rust Huffman coding trained on a sample corpus.
//!
//! A [`Huffman`] instance analyzes a training corpus once, builds a binary
//! trie over its character distribution, and derives a prefix-free code
//! table from it. Both are then fixed, and the instance compresses and
//! decompresses any number of messages drawn from the same alphabet.
//!
//! ## Pipeline
//!
//! ```text
//! corpus ──► FrequencyTable ──► Trie ──► CodeTable
//!                                 │          │
//!                 HuffmanDecoder ◄┘          └► HuffmanEncoder
//! ```
//!
//! ## Stream Format
//!
//! - **Codewords**: one per message character, in order
//! - **Sentinel**: the codeword of a reserved end-of-transmission symbol
//!   (ETB, `U+0017`, by default)
//! - **Padding**: zero bits up to the next byte boundary
//! - **MSB-first**: the first bit is the high-order bit of the first byte
//!
//! There is no header or length field; decoding stops at the sentinel.
//!
//! ## Example
//!
//! ```rust
//! use huffcodec::Huffman;
//!
//! let huffman = Huffman::new("abracadabra").unwrap();
//!
//! let compressed = huffman.compress("abracadabra").unwrap();
//! assert_eq!(compressed, vec![0x6E, 0xB4, 0x6E, 0xA0]);
//!
//! let decompressed = huffman.decompress(&compressed).unwrap();
//! assert_eq!(decompressed, "abracadabra");
//! ```
//!
//! ## Errors
//!
//! ```rust
//! use huffcodec::{Huffman, HuffmanError};
//!
//! let huffman = Huffman::new("abc").unwrap();
//! assert_eq!(
//!     huffman.compress("abcd"),
//!     Err(HuffmanError::UnknownSymbol { symbol: 'd', position: 3 })
//! );
//! assert!(matches!(
//!     huffman.decompress(&[]),
//!     Err(HuffmanError::MalformedStream { .. })
//! ));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod codec;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod frequency;
pub mod table;
pub mod trie;

pub use codec::Huffman;
pub use config::{ETB, HuffmanConfig};
pub use decoder::HuffmanDecoder;
pub use encoder::HuffmanEncoder;
pub use error::{HuffmanError, Result};
pub use frequency::FrequencyTable;
pub use table::{CodeTable, Codeword};
pub use trie::{Trie, TrieNode};
