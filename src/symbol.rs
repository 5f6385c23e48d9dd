// src/symbol.rs

//! Fixed-width symbol values and their wire form.
//!
//! Every value is written little-endian whatever the host byte order, and
//! each byte is laid into a bit sequence most-significant bit first.

use crate::bits::BitBuf;
use crate::error::{Error, Result};
use std::fmt::Debug;

/// A fixed-width alphabet value.
pub trait Symbol: Copy + Ord + Debug {
    /// Width in bytes on the wire.
    const WIDTH: usize;

    fn write_le(self, out: &mut Vec<u8>);

    /// Decode from exactly `WIDTH` little-endian bytes.
    fn read_le(bytes: &[u8]) -> Self;
}

macro_rules! impl_symbol {
    ($($t:ty),*) => {$(
        impl Symbol for $t {
            const WIDTH: usize = std::mem::size_of::<$t>();

            fn write_le(self, out: &mut Vec<u8>) {
                out.extend_from_slice(&self.to_le_bytes());
            }

            fn read_le(bytes: &[u8]) -> Self {
                let mut raw = [0u8; std::mem::size_of::<$t>()];
                raw.copy_from_slice(&bytes[..Self::WIDTH]);
                <$t>::from_le_bytes(raw)
            }
        }

        const _: () = assert!(<$t as Symbol>::WIDTH * 8 == <$t>::BITS as usize);
    )*};
}

impl_symbol!(u8, u16, u32, u64, i8, i16, i32, i64);

pub fn bytes_of<S: Symbol>(value: S) -> Vec<u8> {
    let mut out = Vec::with_capacity(S::WIDTH);
    value.write_le(&mut out);
    out
}

/// Read one value starting at byte `offset`.
pub fn value_of<S: Symbol>(bytes: &[u8], offset: usize) -> Result<S> {
    let available = bytes.len().saturating_sub(offset);
    if available < S::WIDTH {
        return Err(Error::truncated(S::WIDTH, available));
    }
    Ok(S::read_le(&bytes[offset..offset + S::WIDTH]))
}

pub fn bits_of<S: Symbol>(value: S) -> BitBuf {
    let mut bits = BitBuf::with_capacity(S::WIDTH * 8);
    push_bits(value, &mut bits);
    bits
}

/// Append the `8 * WIDTH` bits of `value` to `bits`.
pub fn push_bits<S: Symbol>(value: S, bits: &mut BitBuf) {
    for byte in bytes_of(value) {
        for i in (0..8).rev() {
            bits.push((byte >> i) & 1 == 1);
        }
    }
}

/// Read one value starting at bit `offset`.
pub fn value_of_bits<S: Symbol>(bits: &BitBuf, offset: usize) -> Result<S> {
    let needed = S::WIDTH * 8;
    let available = bits.len().saturating_sub(offset);
    if available < needed {
        return Err(Error::truncated(needed, available));
    }

    let mut raw = Vec::with_capacity(S::WIDTH);
    let mut iter = bits.iter_from(offset);
    for _ in 0..S::WIDTH {
        let mut byte = 0u8;
        for bit in iter.by_ref().take(8) {
            byte = (byte << 1) | bit as u8;
        }
        raw.push(byte);
    }
    Ok(S::read_le(&raw))
}

/// Split raw bytes into symbols. The length must be a multiple of the width.
pub fn symbols_from_bytes<S: Symbol>(bytes: &[u8]) -> Result<Vec<S>> {
    if bytes.len() % S::WIDTH != 0 {
        return Err(Error::MisalignedInput {
            len: bytes.len(),
            width: S::WIDTH,
        });
    }
    Ok(bytes.chunks_exact(S::WIDTH).map(S::read_le).collect())
}

pub fn bytes_from_symbols<S: Symbol>(symbols: &[S]) -> Vec<u8> {
    let mut out = Vec::with_capacity(symbols.len() * S::WIDTH);
    for &s in symbols {
        s.write_le(&mut out);
    }
    out
}
