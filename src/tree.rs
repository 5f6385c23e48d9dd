// src/tree.rs

use crate::bits::BitBuf;
use crate::error::{Error, Result};
use crate::freq::FrequencyTable;
use crate::symbol::Symbol;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};
use tracing::trace;

/// Root-first codeword for every symbol of the alphabet.
pub type CodewordTable<S> = BTreeMap<S, BitBuf>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S> {
    Leaf(S),
    Internal { low: Box<Node<S>>, high: Box<Node<S>> },
}

impl<S> Node<S> {
    pub fn internal(low: Node<S>, high: Node<S>) -> Self {
        Node::Internal {
            low: Box::new(low),
            high: Box::new(high),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Internal { low, high } => low.leaf_count() + high.leaf_count(),
        }
    }
}

// Working-set entry. Among equal weights the higher `seq` pops first.
// Leaves count up from 0, so the later leaf wins a tie; merged entries count
// down from -1, so they lose every tie and pop oldest first.
struct Pending<S> {
    weight: u64,
    seq: i64,
    node: Node<S>,
    symbols: Vec<S>,
}

impl<S> PartialEq for Pending<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S> Eq for Pending<S> {}

// BinaryHeap is a max-heap: the lowest weight has to compare greatest.
impl<S> Ord for Pending<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl<S> PartialOrd for Pending<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the Huffman tree for `freqs` together with its codeword table.
///
/// Leaves enter the working set in ascending symbol order. Each step pops
/// the two lightest entries; the first becomes `low` (bit 0) and the second
/// `high` (bit 1). Equal-weight leaves pop latest-inserted first, and a
/// merged entry queues behind everything of its weight already waiting. A
/// one-symbol alphabet yields a bare leaf whose codeword is empty.
pub fn build_huffman_tree<S: Symbol>(
    freqs: &FrequencyTable<S>,
) -> Result<(Node<S>, CodewordTable<S>)> {
    let mut heap = BinaryHeap::with_capacity(freqs.len());
    // bits are gathered leaf-first and flipped once the root is known
    let mut codes: BTreeMap<S, Vec<bool>> = BTreeMap::new();
    let mut seq = 0i64;

    for (&symbol, &weight) in freqs {
        heap.push(Pending {
            weight,
            seq,
            node: Node::Leaf(symbol),
            symbols: vec![symbol],
        });
        codes.insert(symbol, Vec::new());
        seq += 1;
    }
    let mut merged_seq = -1i64;

    let root = loop {
        let Some(low) = heap.pop() else {
            return Err(Error::EmptyAlphabet);
        };
        let Some(high) = heap.pop() else {
            break low.node;
        };

        for symbol in &low.symbols {
            if let Some(code) = codes.get_mut(symbol) {
                code.push(false);
            }
        }
        for symbol in &high.symbols {
            if let Some(code) = codes.get_mut(symbol) {
                code.push(true);
            }
        }
        trace!(
            low_weight = low.weight,
            high_weight = high.weight,
            merged_seq,
            "merging working-set entries"
        );

        let weight = low.weight + high.weight;
        let mut symbols = low.symbols;
        symbols.extend(high.symbols);
        heap.push(Pending {
            weight,
            seq: merged_seq,
            node: Node::internal(low.node, high.node),
            symbols,
        });
        merged_seq -= 1;
    };

    let table = codes
        .into_iter()
        .map(|(symbol, bits)| (symbol, bits.into_iter().rev().collect()))
        .collect();
    Ok((root, table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::build_frequency_map;

    fn code(s: &str) -> BitBuf {
        s.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn empty_alphabet_fails() {
        let freqs = FrequencyTable::<u8>::new();
        assert!(matches!(build_huffman_tree(&freqs), Err(Error::EmptyAlphabet)));
    }

    #[test]
    fn single_symbol_is_bare_leaf() {
        let (root, codes) = build_huffman_tree(&build_frequency_map(b"aaaa")).unwrap();
        assert_eq!(root, Node::Leaf(b'a'));
        assert!(codes[&b'a'].is_empty());
    }

    #[test]
    fn two_symbols_lighter_goes_low() {
        let (root, codes) = build_huffman_tree(&build_frequency_map(b"aaab")).unwrap();
        assert_eq!(root, Node::internal(Node::Leaf(b'b'), Node::Leaf(b'a')));
        assert_eq!(codes[&b'b'], code("0"));
        assert_eq!(codes[&b'a'], code("1"));
    }

    #[test]
    fn ties_prefer_latest_insertion() {
        // a, b, c enter in that order with equal weight: c pops first, then b
        let (root, codes) = build_huffman_tree(&build_frequency_map(b"abc")).unwrap();
        assert_eq!(
            root,
            Node::internal(
                Node::Leaf(b'a'),
                Node::internal(Node::Leaf(b'c'), Node::Leaf(b'b')),
            )
        );
        assert_eq!(codes[&b'a'], code("0"));
        assert_eq!(codes[&b'c'], code("10"));
        assert_eq!(codes[&b'b'], code("11"));
    }

    #[test]
    fn merged_entry_loses_tie_against_older_leaf() {
        // cb and a both weigh 2: a was waiting first and pops first
        let (root, codes) = build_huffman_tree(&build_frequency_map(b"aabc")).unwrap();
        assert_eq!(
            root,
            Node::internal(
                Node::Leaf(b'a'),
                Node::internal(Node::Leaf(b'c'), Node::Leaf(b'b')),
            )
        );
        assert_eq!(codes[&b'a'], code("0"));
        assert_eq!(codes[&b'c'], code("10"));
        assert_eq!(codes[&b'b'], code("11"));
    }

    #[test]
    fn equal_merged_entries_pop_oldest_first() {
        // d,c -> m1 (2) then b,a -> m2 (2); m1 is older so it goes low
        let (root, _) = build_huffman_tree(&build_frequency_map(b"abcd")).unwrap();
        assert_eq!(
            root,
            Node::internal(
                Node::internal(Node::Leaf(b'd'), Node::Leaf(b'c')),
                Node::internal(Node::Leaf(b'b'), Node::Leaf(b'a')),
            )
        );
    }

    #[test]
    fn codeword_lengths_match_leaf_depths() {
        let (root, codes) =
            build_huffman_tree(&build_frequency_map(b"this is an example of a huffman tree"))
                .unwrap();
        assert_eq!(root.leaf_count(), codes.len());

        fn walk(node: &Node<u8>, depth: usize, codes: &CodewordTable<u8>) {
            match node {
                Node::Leaf(s) => assert_eq!(codes[s].len(), depth),
                Node::Internal { low, high } => {
                    walk(low, depth + 1, codes);
                    walk(high, depth + 1, codes);
                }
            }
        }
        walk(&root, 0, &codes);
    }

    #[test]
    fn codewords_follow_tree_from_root() {
        let (root, codes) = build_huffman_tree(&build_frequency_map(b"mississippi river")).unwrap();
        for (symbol, bits) in &codes {
            let mut node = &root;
            for bit in bits {
                node = match node {
                    Node::Internal { low, high } => {
                        if bit { &**high } else { &**low }
                    }
                    Node::Leaf(_) => panic!("codeword runs past a leaf"),
                };
            }
            assert_eq!(node, &Node::Leaf(*symbol));
        }
    }
}
