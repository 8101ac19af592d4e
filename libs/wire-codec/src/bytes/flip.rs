//! Half swaps for endianness fixes between mismatched peers
//!
//! Each flip exchanges the high and low halves of a value: nibbles of a
//! byte, bytes of a short, words of an int, dwords of a long. Applying a
//! flip twice restores the original value.

/// Swap the two nibbles of a byte (`0xAB` -> `0xBA`)
pub fn flip_u8(value: u8) -> u8 {
    value.rotate_left(4)
}

/// Swap the two bytes of a 16-bit value (`0x1234` -> `0x3412`)
pub fn flip_u16(value: u16) -> u16 {
    value.rotate_left(8)
}

/// Swap the two words of a 32-bit value (`0x12345678` -> `0x56781234`)
pub fn flip_u32(value: u32) -> u32 {
    value.rotate_left(16)
}

/// Swap the two dwords of a 64-bit value
pub fn flip_u64(value: u64) -> u64 {
    value.rotate_left(32)
}
