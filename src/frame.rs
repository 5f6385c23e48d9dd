// src/frame.rs

//! Byte framing for bit sequences.
//!
//! Layout: the bit count as a little-endian u64, then the bits packed
//! most-significant first, with the final byte padded by zero bits.

use crate::bits::BitBuf;
use crate::error::{Error, Result};
use crate::symbol;
use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};
use std::io::{self, Read, Write};
use tracing::{debug, warn};

const LEN_FIELD: usize = 8;

// Cap on the up-front allocation; a lying length field must not reserve memory.
const MAX_PREALLOC_BITS: usize = 1 << 26;

pub fn write_framed<W: Write>(bits: &BitBuf, mut writer: W) -> Result<()> {
    writer.write_all(&symbol::bytes_of(bits.len() as u64))?;

    let whole = bits.len() / 8;
    {
        let mut bit_writer = BitWriter::endian(&mut writer, BigEndian);
        bit_writer.write_bytes(&bits.as_bytes()[..whole])?;
        for bit in bits.iter_from(whole * 8) {
            bit_writer.write_bit(bit)?;
        }
        bit_writer.byte_align()?;
    }
    writer.flush()?;

    debug!(bits = bits.len(), bytes = LEN_FIELD + bits.len().div_ceil(8), "wrote frame");
    Ok(())
}

pub fn read_framed<R: Read>(mut reader: R) -> Result<BitBuf> {
    let mut len_field = [0u8; LEN_FIELD];
    let got = fill(&mut reader, &mut len_field)?;
    if got < LEN_FIELD {
        return Err(Error::truncated(LEN_FIELD, got));
    }
    let declared: u64 = symbol::value_of(&len_field, 0)?;
    let byte_len = declared.div_ceil(8);
    let Ok(len) = usize::try_from(declared) else {
        return Err(Error::truncated(usize::MAX, 0));
    };

    let mut bits = BitBuf::with_capacity(len.min(MAX_PREALLOC_BITS));
    let mut bit_reader = BitReader::endian(reader.take(byte_len), BigEndian);
    for i in 0..len {
        match bit_reader.read_bit() {
            Ok(bit) => bits.push(bit),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                // bits are pulled a whole byte at a time
                return Err(Error::truncated(len.div_ceil(8), i / 8));
            }
            Err(e) => return Err(e.into()),
        }
    }
    if stray_padding(&mut bit_reader, len)? {
        warn!(bits = len, "frame has non-zero padding bits");
    }

    debug!(bits = len, "read frame");
    Ok(bits)
}

// Consume the rest of the final byte; true if any of it is set.
fn stray_padding<B: BitRead>(bit_reader: &mut B, len: usize) -> io::Result<bool> {
    let mut stray = false;
    if len % 8 != 0 {
        for _ in 0..8 - len % 8 {
            stray |= bit_reader.read_bit()?;
        }
    }
    Ok(stray)
}

// Read until `buf` is full or the reader runs dry; returns the count read.
fn fill<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
