//! Big-endian integer conversions
//!
//! Provides functions for converting between:
//! - fixed-width integers (u16, u32, u64) ↔ big-endian byte runs
//! - integers ↔ their high/low halves
//! - signed octets ↔ unsigned values, hex digits ↔ nibbles
//!
//! Bytes are always reassembled as unsigned octets, so a byte such as `0x90`
//! never sign-extends into the high bits of the wider result.

use super::buffer::{append, fill};
use errors::{Result, WireError};

// ============================================================================
// Half extraction
// ============================================================================

/// High byte of a 16-bit value
pub fn hi_byte(value: u16) -> u8 {
    (value >> 8) as u8
}

/// Low byte of a 16-bit value
pub fn lo_byte(value: u16) -> u8 {
    value as u8
}

/// High 16-bit word of a 32-bit value
pub fn hi_word(value: u32) -> u16 {
    (value >> 16) as u16
}

/// Low 16-bit word of a 32-bit value
pub fn lo_word(value: u32) -> u16 {
    value as u16
}

/// High 32-bit dword of a 64-bit value
pub fn hi_dword(value: u64) -> u32 {
    (value >> 32) as u32
}

/// Low 32-bit dword of a 64-bit value
pub fn lo_dword(value: u64) -> u32 {
    value as u32
}

// ============================================================================
// Integer to Bytes
// ============================================================================

/// Write `value` big-endian into `dest` at `offset`, growing `dest` if needed
pub fn fill_u16(dest: Vec<u8>, offset: usize, value: u16) -> Vec<u8> {
    fill(dest, offset, &value.to_be_bytes())
}

/// Write `value` big-endian into `dest` at `offset`, growing `dest` if needed
pub fn fill_u32(dest: Vec<u8>, offset: usize, value: u32) -> Vec<u8> {
    fill(dest, offset, &value.to_be_bytes())
}

/// Write `value` big-endian into `dest` at `offset`, growing `dest` if needed
pub fn fill_u64(dest: Vec<u8>, offset: usize, value: u64) -> Vec<u8> {
    fill(dest, offset, &value.to_be_bytes())
}

/// Append the big-endian bytes of `value` to `dest`
pub fn append_u16(dest: Vec<u8>, value: u16) -> Vec<u8> {
    append(dest, &value.to_be_bytes())
}

/// Append the big-endian bytes of `value` to `dest`
pub fn append_u32(dest: Vec<u8>, value: u32) -> Vec<u8> {
    append(dest, &value.to_be_bytes())
}

/// Append the big-endian bytes of `value` to `dest`
pub fn append_u64(dest: Vec<u8>, value: u64) -> Vec<u8> {
    append(dest, &value.to_be_bytes())
}

/// New one-byte buffer holding `value`
pub fn to_bytes_u8(value: u8) -> Vec<u8> {
    vec![value]
}

/// New buffer holding `value` big-endian
pub fn to_bytes_u16(value: u16) -> Vec<u8> {
    fill_u16(Vec::with_capacity(2), 0, value)
}

/// New buffer holding `value` big-endian
pub fn to_bytes_u32(value: u32) -> Vec<u8> {
    fill_u32(Vec::with_capacity(4), 0, value)
}

/// New buffer holding `value` big-endian
pub fn to_bytes_u64(value: u64) -> Vec<u8> {
    fill_u64(Vec::with_capacity(8), 0, value)
}

// ============================================================================
// Bytes to Integer
// ============================================================================

/// Combine a high and a low byte into a 16-bit value
pub fn join_u16(hi: u8, lo: u8) -> u16 {
    (u16::from(hi) << 8) | u16::from(lo)
}

/// Combine four bytes (most significant first) into a 32-bit value
pub fn join_u32(bytes: [u8; 4]) -> u32 {
    bytes
        .iter()
        .fold(0u32, |acc, &b| (acc << 8) | u32::from(b))
}

/// Combine eight bytes (most significant first) into a 64-bit value
pub fn join_u64(bytes: [u8; 8]) -> u64 {
    bytes
        .iter()
        .fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}

/// Borrow exactly `N` bytes of `data` starting at `offset`
fn take<const N: usize>(data: &[u8], offset: usize) -> Result<[u8; N]> {
    offset
        .checked_add(N)
        .and_then(|end| data.get(offset..end))
        .and_then(|slice| slice.try_into().ok())
        .ok_or(WireError::BufferTooShort {
            offset,
            needed: N,
            available: data.len(),
        })
}

/// Read a big-endian 16-bit value at `offset`
///
/// # Errors
/// `BufferTooShort` when fewer than 2 bytes remain at `offset`
pub fn to_u16(data: &[u8], offset: usize) -> Result<u16> {
    let [hi, lo] = take::<2>(data, offset)?;
    Ok(join_u16(hi, lo))
}

/// Read a big-endian 32-bit value at `offset`
///
/// # Errors
/// `BufferTooShort` when fewer than 4 bytes remain at `offset`
pub fn to_u32(data: &[u8], offset: usize) -> Result<u32> {
    take::<4>(data, offset).map(join_u32)
}

/// Read a big-endian 64-bit value at `offset`
///
/// # Errors
/// `BufferTooShort` when fewer than 8 bytes remain at `offset`
pub fn to_u64(data: &[u8], offset: usize) -> Result<u64> {
    take::<8>(data, offset).map(join_u64)
}

// ============================================================================
// Octets and Digits
// ============================================================================

/// Widen a signed octet to its unsigned value in `0..=255`
pub fn byte_to_unsigned(b: i8) -> u8 {
    b as u8
}

/// Map a hex digit (`0-9`, `A-F`, `a-f`) to its value in `0..=15`
///
/// # Errors
/// `InvalidHexChar` for any other character
pub fn hex_char_to_int(c: char) -> Result<u8> {
    match c {
        '0'..='9' => Ok(c as u8 - b'0'),
        'A'..='F' => Ok(c as u8 - b'A' + 10),
        'a'..='f' => Ok(c as u8 - b'a' + 10),
        _ => Err(WireError::InvalidHexChar(c)),
    }
}
