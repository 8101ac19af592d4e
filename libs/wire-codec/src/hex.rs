//! Hex encoding utility
//!
//! Uppercase hex rendering of byte buffers, hex string parsing and a
//! classic memory dump (`0x` offset column, 16 bytes per line, ASCII gutter).

use crate::bytes::{clamp_range, hex_char_to_int};
use errors::{Result, WireError};
use tracing::debug;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Bytes rendered per dump line
pub const DUMP_LINE_WIDTH: usize = 16;

#[inline]
fn push_byte(out: &mut String, b: u8) {
    out.push(HEX_DIGITS[usize::from(b >> 4)] as char);
    out.push(HEX_DIGITS[usize::from(b & 0x0F)] as char);
}

/// Encode `length` bytes of `data` from `offset` as uppercase hex
///
/// The range is clamped to `data`; the result holds two characters per byte,
/// high nibble first.
///
/// # Example
/// ```
/// use wire_codec::hex::bytes_to_hex;
///
/// assert_eq!(bytes_to_hex(&[0x12, 0x34, 0x56, 0x78], 2, 2), "5678");
/// ```
pub fn bytes_to_hex(data: &[u8], offset: usize, length: usize) -> String {
    let range = clamp_range(data.len(), offset, length);
    let mut result = String::with_capacity(range.len() * 2);
    for &b in &data[range] {
        push_byte(&mut result, b);
    }
    result
}

/// Encode bytes to uppercase hex string
/// Example: [0x12, 0x34, 0xAB] -> "1234AB"
pub fn encode_upper(data: &[u8]) -> String {
    bytes_to_hex(data, 0, data.len())
}

/// Same as [`bytes_to_hex`], with a single space between bytes
///
/// Example: [0x12, 0x34, 0xAB] -> "12 34 AB" (no trailing space)
pub fn bytes_to_hex_with_spaces(data: &[u8], offset: usize, length: usize) -> String {
    let range = clamp_range(data.len(), offset, length);
    let mut result = String::with_capacity(range.len() * 3);
    for (i, &b) in data[range].iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        push_byte(&mut result, b);
    }
    result
}

/// Render a byte as 2 hex digits
pub fn u8_to_hex(value: u8) -> String {
    encode_upper(&[value])
}

/// Render a 16-bit value as 4 big-endian hex digits
pub fn u16_to_hex(value: u16) -> String {
    encode_upper(&value.to_be_bytes())
}

/// Render a 32-bit value as 8 big-endian hex digits
pub fn u32_to_hex(value: u32) -> String {
    encode_upper(&value.to_be_bytes())
}

/// Render a 64-bit value as 16 big-endian hex digits
pub fn u64_to_hex(value: u64) -> String {
    encode_upper(&value.to_be_bytes())
}

/// Decode `length` hex characters of `s` starting at character `offset`
///
/// The range is clamped to the string. Digits may be upper or lower case.
///
/// # Errors
/// - `InvalidHexLength` when the clamped length is zero or odd
/// - `InvalidHexChar` when a character is not a hex digit
///
/// # Example
/// ```
/// use wire_codec::hex::hex_to_bytes;
///
/// assert_eq!(hex_to_bytes("0A1B2C", 2, 4).unwrap(), [0x1B, 0x2C]);
/// assert!(hex_to_bytes("0A1", 0, 3).is_err());
/// ```
pub fn hex_to_bytes(s: &str, offset: usize, length: usize) -> Result<Vec<u8>> {
    let chars: Vec<char> = s.chars().collect();
    let range = clamp_range(chars.len(), offset, length);
    let digits = &chars[range];

    if digits.is_empty() || digits.len() % 2 != 0 {
        debug!("Rejecting hex input of {} characters", digits.len());
        return Err(WireError::InvalidHexLength(digits.len()));
    }

    digits
        .chunks_exact(2)
        .map(|pair| -> Result<u8> {
            Ok((hex_char_to_int(pair[0])? << 4) | hex_char_to_int(pair[1])?)
        })
        .collect()
}

/// Decode a whole hex string
pub fn decode(s: &str) -> Result<Vec<u8>> {
    hex_to_bytes(s, 0, usize::MAX)
}

#[inline]
fn push_ascii(out: &mut String, line: &[u8]) {
    for &b in line {
        if (0x20..=0x7E).contains(&b) {
            out.push(b as char);
        } else {
            out.push('.');
        }
    }
}

/// Produce a memory dump of `length` bytes of `data` starting at `offset`
///
/// Each line is `0x` + the 8-digit offset of its first byte (relative to
/// `offset`), up to 16 ` XX` byte columns, a single space and the ASCII
/// rendering of those bytes (`0x20..=0x7E` literally, `.` otherwise). A short
/// final line is padded so its ASCII gutter lines up. Lines are separated by
/// `\n` with no trailing newline; an empty range yields an empty string.
///
/// # Example
/// ```
/// use wire_codec::hex::dump_all;
///
/// assert_eq!(
///     dump_all(b"Hi\n"),
///     "0x00000000 48 69 0A                                        Hi."
/// );
/// ```
pub fn dump(data: &[u8], offset: usize, length: usize) -> String {
    let range = clamp_range(data.len(), offset, length);
    let bytes = &data[range];
    if bytes.is_empty() {
        return String::new();
    }

    let line_count = bytes.len().div_ceil(DUMP_LINE_WIDTH);
    // "0x" + 8 digits + 16 * " XX" + " " + 16 ascii + "\n"
    let mut result = String::with_capacity(line_count * (10 + DUMP_LINE_WIDTH * 4 + 2));

    for (index, line) in bytes.chunks(DUMP_LINE_WIDTH).enumerate() {
        if index > 0 {
            result.push('\n');
        }

        result.push_str("0x");
        result.push_str(&u32_to_hex((index * DUMP_LINE_WIDTH) as u32));

        for &b in line {
            result.push(' ');
            push_byte(&mut result, b);
        }
        for _ in line.len()..DUMP_LINE_WIDTH {
            result.push_str("   ");
        }

        result.push(' ');
        push_ascii(&mut result, line);
    }

    result
}

/// Dump a whole buffer
pub fn dump_all(data: &[u8]) -> String {
    dump(data, 0, data.len())
}
