// src/tree_format.rs

//! Pre-order bit encoding of a Huffman tree.
//!
//! A leaf is a `1` bit followed by the `8 * WIDTH` bits of its symbol; an
//! internal node is a `0` bit followed by its `low` and then its `high`
//! subtree. The encoding delimits itself, so no length is stored.

use crate::bits::BitBuf;
use crate::error::{Error, Result};
use crate::symbol::{self, Symbol};
use crate::tree::Node;

/// No Huffman tree built from u64 counts nests deeper than this.
const MAX_DEPTH: usize = 128;

pub fn serialize_tree<S: Symbol>(root: &Node<S>) -> BitBuf {
    let mut bits = BitBuf::new();
    write_node(root, &mut bits);
    bits
}

fn write_node<S: Symbol>(node: &Node<S>, bits: &mut BitBuf) {
    match node {
        Node::Leaf(value) => {
            bits.push(true);
            symbol::push_bits(*value, bits);
        }
        Node::Internal { low, high } => {
            bits.push(false);
            write_node(low, bits);
            write_node(high, bits);
        }
    }
}

/// Rebuild a tree from the front of `bits`.
///
/// Returns the tree and the number of bits it took up; whatever follows is
/// left untouched for the caller.
pub fn deserialize_tree<S: Symbol>(bits: &BitBuf) -> Result<(Node<S>, usize)> {
    let mut pos = 0;
    let root = read_node(bits, &mut pos, 0)?;
    Ok((root, pos))
}

fn read_node<S: Symbol>(bits: &BitBuf, pos: &mut usize, depth: usize) -> Result<Node<S>> {
    if depth > MAX_DEPTH {
        return Err(Error::CorruptTree("tree nests deeper than any Huffman code"));
    }
    let is_leaf = bits.get(*pos).ok_or(Error::truncated(1, 0))?;
    *pos += 1;

    if is_leaf {
        let value = symbol::value_of_bits(bits, *pos)?;
        *pos += S::WIDTH * 8;
        Ok(Node::Leaf(value))
    } else {
        let low = read_node(bits, pos, depth + 1)?;
        let high = read_node(bits, pos, depth + 1)?;
        Ok(Node::internal(low, high))
    }
}
