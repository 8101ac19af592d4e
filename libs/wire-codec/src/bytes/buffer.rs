//! Grow-on-demand buffer assembly: copy, fill, append, concat and compare

use super::clamp_range;
use tracing::trace;

/// Copy `length` bytes of `src` starting at `src_offset` into `dest` at `dest_offset`
///
/// `dest` is grown (zero-filled) when it cannot hold `dest_offset + length`
/// bytes; its existing content is preserved. The source range is clamped to
/// `src`. When `src` is empty, `dest` is returned unchanged.
///
/// # Example
/// ```
/// use wire_codec::bytes::copy;
///
/// let dest = copy(vec![0xAA], 2, &[0x01, 0x02, 0x03], 1, 2);
/// assert_eq!(dest, [0xAA, 0x00, 0x02, 0x03]);
/// ```
pub fn copy(
    mut dest: Vec<u8>,
    dest_offset: usize,
    src: &[u8],
    src_offset: usize,
    length: usize,
) -> Vec<u8> {
    if src.is_empty() {
        return dest;
    }

    let range = clamp_range(src.len(), src_offset, length);
    let total_len = dest_offset + range.len();

    if dest.len() < total_len {
        trace!("Growing buffer from {} to {} bytes", dest.len(), total_len);
        dest.resize(total_len, 0);
    }

    dest[dest_offset..total_len].copy_from_slice(&src[range]);
    dest
}

/// Copy the whole of `src` into `dest` at `dest_offset`
pub fn copy_all(dest: Vec<u8>, dest_offset: usize, src: &[u8]) -> Vec<u8> {
    copy(dest, dest_offset, src, 0, src.len())
}

/// Write literal byte values into `dest` at `dest_offset`
pub fn fill(dest: Vec<u8>, dest_offset: usize, bytes: &[u8]) -> Vec<u8> {
    copy(dest, dest_offset, bytes, 0, bytes.len())
}

/// Append literal byte values to the end of `dest`
pub fn append(dest: Vec<u8>, bytes: &[u8]) -> Vec<u8> {
    let offset = dest.len();
    fill(dest, offset, bytes)
}

/// Append a single byte to the end of `dest`
pub fn append_u8(dest: Vec<u8>, value: u8) -> Vec<u8> {
    append(dest, &[value])
}

/// Write each buffer of `parts` into `dest` back to back, starting at `offset`
///
/// # Example
/// ```
/// use wire_codec::bytes::concat;
///
/// let head: &[u8] = &[0x10];
/// let tail: &[u8] = &[0x11, 0x12];
/// let dest = concat(vec![0x01], 1, &[head, tail]);
/// assert_eq!(dest, [0x01, 0x10, 0x11, 0x12]);
/// ```
pub fn concat(mut dest: Vec<u8>, offset: usize, parts: &[&[u8]]) -> Vec<u8> {
    let mut offset = offset;
    for part in parts {
        dest = copy_all(dest, offset, part);
        offset += part.len();
    }
    dest
}

/// Compare `a[offset_a..]` and `b[offset_b..]` over at most `length` bytes
///
/// Both ranges are clamped to their buffers; ranges of different effective
/// length are unequal. Two absent buffers are equal, exactly one absent
/// buffer is unequal.
///
/// # Example
/// ```
/// use wire_codec::bytes::compare;
///
/// assert!(compare(Some(&b"Hello"[..]), 1, Some(&b"HHello"[..]), 2, 6));
/// assert!(compare(None, 0, None, 0, 4));
/// assert!(!compare(None, 0, Some(&b"Hello"[..]), 0, 5));
/// ```
pub fn compare(
    a: Option<&[u8]>,
    offset_a: usize,
    b: Option<&[u8]>,
    offset_b: usize,
    length: usize,
) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a[clamp_range(a.len(), offset_a, length)] == b[clamp_range(b.len(), offset_b, length)]
        },
        _ => false,
    }
}
