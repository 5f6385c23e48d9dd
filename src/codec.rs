// src/codec.rs

use crate::bits::BitBuf;
use crate::error::Result;
use crate::freq::build_frequency_map;
use crate::frame;
use crate::stream::{decode_stream, encode_stream};
use crate::symbol::Symbol;
use crate::tree::build_huffman_tree;
use crate::tree_format::{deserialize_tree, serialize_tree};
use std::io::Cursor;
use tracing::debug;

/// Huffman-encode `data` into one bit sequence: the serialized tree
/// followed by the codewords of the data.
///
/// The empty sequence encodes to the empty bit sequence.
pub fn encode<S: Symbol>(data: &[S]) -> Result<BitBuf> {
    if data.is_empty() {
        return Ok(BitBuf::new());
    }

    let freq_map = build_frequency_map(data);
    let (tree, codes) = build_huffman_tree(&freq_map)?;

    let mut out = serialize_tree(&tree);
    let tree_bits = out.len();
    encode_stream(data, &codes, &mut out)?;

    debug!(
        symbols = data.len(),
        alphabet = freq_map.len(),
        tree_bits,
        data_bits = out.len() - tree_bits,
        "encoded"
    );
    Ok(out)
}

/// Inverse of [`encode`].
pub fn decode<S: Symbol>(bits: &BitBuf) -> Result<Vec<S>> {
    if bits.is_empty() {
        return Ok(Vec::new());
    }

    let (tree, tree_bits) = deserialize_tree::<S>(bits)?;
    let decoded = decode_stream(bits, tree_bits, &tree)?;

    debug!(
        tree_bits,
        data_bits = bits.len() - tree_bits,
        symbols = decoded.len(),
        "decoded"
    );
    Ok(decoded)
}

/// Encode `data` and frame it into bytes ready for storage.
pub fn compress<S: Symbol>(data: &[S]) -> Result<Vec<u8>> {
    let bits = encode(data)?;
    let mut out = Vec::with_capacity(8 + bits.len().div_ceil(8));
    frame::write_framed(&bits, &mut out)?;
    Ok(out)
}

pub fn decompress<S: Symbol>(data: &[u8]) -> Result<Vec<S>> {
    let bits = frame::read_framed(Cursor::new(data))?;
    decode(&bits)
}
