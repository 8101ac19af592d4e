//! Byte buffer packing utilities
//!
//! Low-level assembly and disassembly of byte buffers:
//! copy/fill/append/concat with grow-on-demand destinations, big-endian
//! integer packing, half swaps for endianness fixes, and range comparison.
//!
//! # Buffer convention
//!
//! Operations that may need a larger destination take the destination
//! `Vec<u8>` by value and hand back the (possibly grown) buffer. An absent
//! destination is simply `Vec::new()`. Always use the returned buffer.
//!
//! # Ranges
//!
//! Every `(offset, length)` pair is clamped to the buffer with
//! [`clamp_range`]; asking for more bytes than exist is not an error.

pub mod buffer;
pub mod conversions;
pub mod flip;

pub use buffer::*;
pub use conversions::*;
pub use flip::*;

use std::ops::Range;

/// Clamp `offset..offset + length` to a buffer of `len` bytes
///
/// The end index is `min(offset + length, len)`; an offset at or past the
/// end yields an empty range positioned at `len`.
pub fn clamp_range(len: usize, offset: usize, length: usize) -> Range<usize> {
    let start = offset.min(len);
    let end = offset.saturating_add(length).min(len);
    start..end
}
