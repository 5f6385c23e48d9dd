// src/stream.rs

use crate::bits::BitBuf;
use crate::error::{Error, Result};
use crate::symbol::Symbol;
use crate::tree::{CodewordTable, Node};

/// Append the codeword of every symbol of `data`, in order, to `out`.
///
/// A one-symbol alphabet has an empty codeword; each occurrence is written
/// as a single `0` bit so the count survives.
pub fn encode_stream<S: Symbol>(data: &[S], codes: &CodewordTable<S>, out: &mut BitBuf) -> Result<()> {
    for symbol in data {
        let code = codes.get(symbol).ok_or(Error::UnknownSymbol)?;
        if code.is_empty() {
            out.push(false);
        } else {
            out.append(code);
        }
    }
    Ok(())
}

/// Decode the bits of `bits` from `offset` to the end by walking `root`.
pub fn decode_stream<S: Symbol>(bits: &BitBuf, offset: usize, root: &Node<S>) -> Result<Vec<S>> {
    let mut output = Vec::new();

    if let Node::Leaf(symbol) = root {
        for bit in bits.iter_from(offset) {
            if bit {
                return Err(Error::CorruptTree("set bit in a single-symbol stream"));
            }
            output.push(*symbol);
        }
        return Ok(output);
    }

    let mut current = root;
    let mut depth = 0;
    for bit in bits.iter_from(offset) {
        current = match current {
            Node::Internal { low, high } => {
                if bit {
                    &**high
                } else {
                    &**low
                }
            }
            // the cursor is reset on every leaf, so it never rests on one
            Node::Leaf(_) => unreachable!(),
        };
        depth += 1;

        if let Node::Leaf(symbol) = current {
            output.push(*symbol);
            current = root;
            depth = 0;
        }
    }

    if depth != 0 {
        // stopped part way down a codeword
        return Err(Error::truncated(1, 0));
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::build_frequency_map;
    use crate::tree::build_huffman_tree;

    fn render(bits: &BitBuf) -> String {
        bits.iter().map(|b| if b { '1' } else { '0' }).collect()
    }

    #[test]
    fn aaab_is_four_bits() {
        let data = b"aaab";
        let (root, codes) = build_huffman_tree(&build_frequency_map(data)).unwrap();
        let mut bits = BitBuf::new();
        encode_stream(data, &codes, &mut bits).unwrap();
        assert_eq!(render(&bits), "1110");
        assert_eq!(decode_stream(&bits, 0, &root).unwrap(), data.to_vec());
    }

    #[test]
    fn decode_starts_at_offset() {
        let data = b"abracadabra";
        let (root, codes) = build_huffman_tree(&build_frequency_map(data)).unwrap();
        let mut bits: BitBuf = [true, true, false].into_iter().collect();
        encode_stream(data, &codes, &mut bits).unwrap();
        assert_eq!(decode_stream(&bits, 3, &root).unwrap(), data.to_vec());
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        let (_, codes) = build_huffman_tree(&build_frequency_map(b"ab")).unwrap();
        let mut bits = BitBuf::new();
        assert!(matches!(
            encode_stream(b"abc", &codes, &mut bits),
            Err(Error::UnknownSymbol)
        ));
    }

    #[test]
    fn single_symbol_keeps_count() {
        let (root, codes) = build_huffman_tree(&build_frequency_map(b"zzzzz")).unwrap();
        let mut bits = BitBuf::new();
        encode_stream(b"zzzzz", &codes, &mut bits).unwrap();
        assert_eq!(render(&bits), "00000");
        assert_eq!(decode_stream(&bits, 0, &root).unwrap(), b"zzzzz".to_vec());

        bits.push(true);
        assert!(matches!(decode_stream(&bits, 0, &root), Err(Error::CorruptTree(_))));
    }

    #[test]
    fn dangling_codeword_is_truncated() {
        // c = 10, b = 11: a lone `1` stops inside the tree
        let (root, _) = build_huffman_tree(&build_frequency_map(b"abc")).unwrap();
        let bits: BitBuf = [false, true, false, true].into_iter().collect();
        assert!(matches!(
            decode_stream(&bits, 0, &root),
            Err(Error::TruncatedInput { .. })
        ));
        let whole: BitBuf = [false, true, false].into_iter().collect();
        assert_eq!(decode_stream(&whole, 0, &root).unwrap(), b"ac".to_vec());
    }
}
