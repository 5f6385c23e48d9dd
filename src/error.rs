// src/error.rs

use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A fixed-width read ran past the end of its input.
    #[error("truncated input: needed {needed} more, only {available} available")]
    TruncatedInput { needed: usize, available: usize },

    #[error("corrupt tree: {0}")]
    CorruptTree(&'static str),

    #[error("cannot build a Huffman tree from an empty alphabet")]
    EmptyAlphabet,

    /// Raw input does not split into whole symbols.
    #[error("input of {len} bytes is not a multiple of the {width}-byte symbol width")]
    MisalignedInput { len: usize, width: usize },

    /// The symbol has no codeword in the table it was encoded against.
    #[error("symbol has no codeword in the table")]
    UnknownSymbol,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn truncated(needed: usize, available: usize) -> Self {
        Error::TruncatedInput { needed, available }
    }
}
