//! Property-based tests for the Huffman codec.

use huffcodec::{Codeword, Huffman, HuffmanError};
use proptest::prelude::*;
use proptest::sample::Index;

// Corpus over a mixed alphabet, including multi-byte characters.
fn corpus_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 .,!?éü日本😀\n]{0,200}").unwrap()
}

// A corpus plus a message drawn only from the corpus's characters.
fn corpus_and_message() -> impl Strategy<Value = (String, String)> {
    (corpus_strategy(), prop::collection::vec(any::<Index>(), 0..300)).prop_map(
        |(corpus, picks)| {
            let symbols: Vec<char> = corpus.chars().collect();
            let message = if symbols.is_empty() {
                String::new()
            } else {
                picks.iter().map(|pick| *pick.get(&symbols)).collect()
            };
            (corpus, message)
        },
    )
}

proptest! {
    // Property: decompress(compress(m)) == m for messages over the corpus alphabet
    #[test]
    fn prop_roundtrip((corpus, message) in corpus_and_message()) {
        let huffman = Huffman::new(&corpus).unwrap();
        let compressed = huffman.compress(&message).unwrap();
        prop_assert!(!compressed.is_empty());
        prop_assert_eq!(huffman.decompress(&compressed).unwrap(), message);
    }

    // Property: output length is the payload bit count rounded up to bytes
    #[test]
    fn prop_output_length((corpus, message) in corpus_and_message()) {
        let huffman = Huffman::new(&corpus).unwrap();
        let bits = huffman.code_table().encoded_bit_len(&message).unwrap();
        let compressed = huffman.compress(&message).unwrap();
        prop_assert_eq!(compressed.len(), bits.div_ceil(8));
    }

    // Property: no codeword is a prefix of another
    #[test]
    fn prop_prefix_free(corpus in corpus_strategy()) {
        let huffman = Huffman::new(&corpus).unwrap();
        let codes: Vec<&Codeword> = huffman
            .code_table()
            .iter()
            .map(|(_, code)| code)
            .collect();
        prop_assert_eq!(codes.len(), huffman.trie().leaf_count());
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    prop_assert!(!a.is_prefix_of(b));
                }
            }
        }
    }

    // Property: two instances from one corpus agree bit for bit
    #[test]
    fn prop_deterministic((corpus, message) in corpus_and_message()) {
        let first = Huffman::new(&corpus).unwrap();
        let second = Huffman::new(&corpus).unwrap();
        prop_assert_eq!(first.code_table(), second.code_table());
        let first_bytes = first.compress(&message).unwrap();
        let second_bytes = second.compress(&message).unwrap();
        prop_assert_eq!(first_bytes, second_bytes);
    }

    // Property: more frequent symbols never get longer codes
    #[test]
    fn prop_frequency_monotone(corpus in corpus_strategy()) {
        let huffman = Huffman::new(&corpus).unwrap();
        let table = huffman.code_table();
        let counts: Vec<(char, usize)> = corpus
            .chars()
            .fold(std::collections::BTreeMap::new(), |mut acc, c| {
                *acc.entry(c).or_insert(0usize) += 1;
                acc
            })
            .into_iter()
            .collect();
        for &(a, count_a) in &counts {
            for &(b, count_b) in &counts {
                if count_a > count_b {
                    let len_a = table.get(a).unwrap().len();
                    let len_b = table.get(b).unwrap().len();
                    prop_assert!(len_a <= len_b);
                }
            }
        }
    }

    // Property: a character outside the corpus is always rejected
    #[test]
    fn prop_unknown_symbol_rejected(
        corpus in "[a-m]{1,50}",
        prefix in "[a-m]{0,20}",
    ) {
        let huffman = Huffman::new(&corpus).unwrap();
        let known: String = prefix.chars().filter(|c| corpus.contains(*c)).collect();
        let message = format!("{known}z");
        let position = known.chars().count();
        let err = huffman.compress(&message).unwrap_err();
        prop_assert_eq!(err, HuffmanError::unknown_symbol('z', position));
    }

    // Property: arbitrary bytes either decode or fail as malformed, never panic
    #[test]
    fn prop_arbitrary_bytes(
        corpus in corpus_strategy(),
        data in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        let huffman = Huffman::new(&corpus).unwrap();
        match huffman.decompress(&data) {
            Ok(decoded) => prop_assert!(decoded.chars().all(|c| corpus.contains(c))),
            Err(err) => prop_assert!(
                matches!(err, HuffmanError::MalformedStream { .. }),
                "unexpected error: {:?}",
                err
            ),
        }
    }
}
