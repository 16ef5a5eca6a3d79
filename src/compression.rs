//! The compressed integer encoding used for event payload fields.
//!
//! A compressed value is a length byte `L` followed by the `L` most
//! significant-first (big-endian) bytes of the value. The marker length
//! `0xff` escapes to the full-width little-endian representation; it is
//! what producers use for values whose topmost byte is meaningful, and it
//! is also how the "undefined" all-ones ids stay one byte short on the
//! wire reader side.

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{Error, Result};

pub const FULL_WIDTH_MARKER: u8 = 0xff;

fn take<'a>(data: &'a [u8], pos: &mut usize, n: usize) -> Result<&'a [u8]> {
    if data.len() - *pos < n {
        return Err(Error::IndexOutOfBounds);
    }
    let bytes = &data[*pos..*pos + n];
    *pos += n;
    Ok(bytes)
}

pub fn read_u8(data: &[u8], pos: &mut usize) -> Result<u8> {
    Ok(take(data, pos, 1)?[0])
}

/// Big-endian accumulation of `len` bytes.
fn read_be(data: &[u8], pos: &mut usize, len: usize) -> Result<u64> {
    let mut value = 0u64;
    for &byte in take(data, pos, len)? {
        value = (value << 8) | u64::from(byte);
    }
    Ok(value)
}

pub fn read_compressed_u64(data: &[u8], pos: &mut usize) -> Result<u64> {
    let len = read_u8(data, pos)?;
    if len == FULL_WIDTH_MARKER {
        return Ok(LittleEndian::read_u64(take(data, pos, 8)?));
    }
    if len > 8 {
        return Err(Error::ProcessedWithFaults);
    }
    read_be(data, pos, len as usize)
}

/// The escape always carries the full 8 little-endian bytes, whatever the
/// target width; narrower reads truncate. A step-over therefore never
/// needs to know the value's type (see [`compressed_size`]).
pub fn read_compressed_u32(data: &[u8], pos: &mut usize) -> Result<u32> {
    let len = read_u8(data, pos)?;
    if len == FULL_WIDTH_MARKER {
        return Ok(LittleEndian::read_u64(take(data, pos, 8)?) as u32);
    }
    if len > 4 {
        return Err(Error::ProcessedWithFaults);
    }
    Ok(read_be(data, pos, len as usize)? as u32)
}

/// Signed variant: sign-extends from the encoded byte count.
pub fn read_compressed_i64(data: &[u8], pos: &mut usize) -> Result<i64> {
    let len = read_u8(data, pos)?;
    if len == FULL_WIDTH_MARKER {
        return Ok(LittleEndian::read_i64(take(data, pos, 8)?));
    }
    if len > 8 {
        return Err(Error::ProcessedWithFaults);
    }
    if len == 0 {
        return Ok(0);
    }
    let raw = read_be(data, pos, len as usize)?;
    let shift = 64 - 8 * u32::from(len);
    Ok(((raw << shift) as i64) >> shift)
}

/// Number of bytes a compressed value occupies, given its length byte.
/// Used to step over a value without decoding it.
pub fn compressed_size(length_byte: u8) -> Result<usize> {
    if length_byte == FULL_WIDTH_MARKER {
        return Ok(1 + 8);
    }
    if length_byte > 8 {
        return Err(Error::ProcessedWithFaults);
    }
    Ok(1 + length_byte as usize)
}
