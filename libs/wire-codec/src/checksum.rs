//! Frame checksum accumulators
//!
//! Three running-register checksums share the [`Checksum`] interface:
//! - [`Bcc`]: XOR of every byte (block check character)
//! - [`Additive`]: byte sum folded to an 8-bit two's complement
//! - [`Crc16`]: CRC-16/ARC (reflected polynomial 0xA001), table or bit-shift
//!
//! # State model
//!
//! An accumulator only ever accumulates. `finalize*` reads the register (or a
//! copy of it) and never resets it, so finalizing twice gives the same value
//! and later updates continue from the same state. Feeding input in several
//! `update` calls is equivalent to one call with the concatenated input.

pub mod algorithm;
pub mod bcc;
pub mod crc16;
pub mod sum;

pub use algorithm::{Accumulator, Algorithm};
pub use bcc::{bcc, Bcc};
pub use crc16::{crc16, Crc16, Crc16Mode, CRC16_TABLE};
pub use sum::{additive_checksum, Additive};

use crate::bytes::{byte_to_unsigned, clamp_range};

/// Running checksum over a byte stream
pub trait Checksum: Clone {
    /// Value produced by [`Checksum::finalize`]
    type Output: Copy;

    /// Feed a single byte into the register
    fn update_byte(&mut self, b: u8);

    /// Feed a signed octet, taken as its unsigned value
    fn update_signed(&mut self, b: i8) {
        self.update_byte(byte_to_unsigned(b));
    }

    /// Feed every byte of `data` in order
    fn update(&mut self, data: &[u8]) {
        for &b in data {
            self.update_byte(b);
        }
    }

    /// Feed `data[offset..]`
    fn update_from(&mut self, data: &[u8], offset: usize) {
        self.update_range(data, offset, data.len());
    }

    /// Feed `length` bytes of `data` from `offset`, clamped to the buffer
    fn update_range(&mut self, data: &[u8], offset: usize, length: usize) {
        self.update(&data[clamp_range(data.len(), offset, length)]);
    }

    /// Current checksum value; does not alter the register
    fn finalize(&self) -> Self::Output;

    /// Checksum of the current state continued with `data`
    ///
    /// Works on a copy: `self` is left exactly as it was.
    fn finalize_with(&self, data: &[u8]) -> Self::Output {
        let mut copy = self.clone();
        copy.update(data);
        copy.finalize()
    }

    /// Checksum of the current state continued with a clamped range of `data`
    fn finalize_range(&self, data: &[u8], offset: usize, length: usize) -> Self::Output {
        self.finalize_with(&data[clamp_range(data.len(), offset, length)])
    }
}
