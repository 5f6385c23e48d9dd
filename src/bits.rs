// src/bits.rs

/// Growable sequence of bits packed MSB-first into bytes.
///
/// `len` is the logical bit count. Storage is rounded up to whole bytes and
/// every bit past `len` is kept at zero, so two buffers holding the same bits
/// compare equal regardless of how they were built.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BitBuf {
    bytes: Vec<u8>,
    len: usize,
}

impl BitBuf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    /// Take `len` bits from `bytes`. Padding past `len` is cleared and
    /// excess whole bytes are dropped.
    pub fn from_bytes(mut bytes: Vec<u8>, len: usize) -> Self {
        let len = len.min(bytes.len() * 8);
        bytes.truncate(len.div_ceil(8));
        let tail = len % 8;
        if tail != 0 {
            if let Some(last) = bytes.last_mut() {
                *last &= 0xFFu8 << (8 - tail);
            }
        }
        Self { bytes, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Backing bytes, padded with zero bits up to the next byte boundary.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn push(&mut self, bit: bool) {
        let byte_index = self.len / 8;
        let bit_offset = self.len % 8;

        if byte_index >= self.bytes.len() {
            self.bytes.push(0);
        }
        if bit {
            self.bytes[byte_index] |= 1 << (7 - bit_offset);
        }
        self.len += 1;
    }

    pub fn append(&mut self, other: &BitBuf) {
        if self.len % 8 == 0 {
            // byte aligned, copy whole bytes
            self.bytes.extend_from_slice(&other.bytes);
            self.len += other.len;
        } else {
            self.extend(other.iter());
        }
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        Some(self.bytes[index / 8] & (0x80 >> (index % 8)) != 0)
    }

    pub fn iter(&self) -> Bits<'_> {
        self.iter_from(0)
    }

    /// Iterate the bits starting at `offset` (empty if past the end).
    pub fn iter_from(&self, offset: usize) -> Bits<'_> {
        Bits {
            buf: self,
            pos: offset.min(self.len),
        }
    }
}

impl Extend<bool> for BitBuf {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        for bit in iter {
            self.push(bit);
        }
    }
}

impl FromIterator<bool> for BitBuf {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut buf = BitBuf::new();
        buf.extend(iter);
        buf
    }
}

impl<'a> IntoIterator for &'a BitBuf {
    type Item = bool;
    type IntoIter = Bits<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Bits<'a> {
    buf: &'a BitBuf,
    pos: usize,
}

impl Iterator for Bits<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        let bit = self.buf.get(self.pos)?;
        self.pos += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.buf.len - self.pos;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Bits<'_> {}
