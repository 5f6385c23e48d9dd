//! # huffcodec
//!
//! Lossless Huffman coding over fixed-width symbols.
//!
//! The output of [`encode`] is a single bit sequence: the code tree in a
//! self-delimiting pre-order form, followed by the codewords of the input.
//! [`write_framed`] and [`read_framed`] move such a sequence to and from
//! bytes with a little-endian u64 bit-count header.
//!
//! ```
//! let packed = huffcodec::compress(b"abracadabra")?;
//! let restored: Vec<u8> = huffcodec::decompress(&packed)?;
//! assert_eq!(restored, b"abracadabra");
//! # Ok::<(), huffcodec::Error>(())
//! ```

pub mod bits;
pub mod codec;
pub mod error;
pub mod frame;
pub mod freq;
pub mod stream;
pub mod symbol;
pub mod tree;
pub mod tree_format;

pub use bits::BitBuf;
pub use codec::{compress, decode, decompress, encode};
pub use error::{Error, Result};
pub use frame::{read_framed, write_framed};
pub use freq::{FrequencyTable, build_frequency_map};
pub use symbol::Symbol;
pub use tree::{CodewordTable, Node, build_huffman_tree};
