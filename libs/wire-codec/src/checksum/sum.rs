//! Additive checksum
//!
//! Sums every byte. A sum that still fits in a byte is returned as is;
//! a larger sum is folded to the two's complement of its low byte,
//! `(!sum & 0xFF) + 1`, so the result lies in `0..=256`.

use super::Checksum;

/// Byte-sum accumulator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Additive {
    sum: u64,
}

impl Additive {
    /// Accumulator starting from 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulator starting from `initial`
    pub fn with_initial(initial: u64) -> Self {
        Self { sum: initial }
    }

    /// Raw running sum
    pub fn sum(&self) -> u64 {
        self.sum
    }
}

impl Checksum for Additive {
    type Output = u16;

    #[inline]
    fn update_byte(&mut self, b: u8) {
        self.sum = self.sum.wrapping_add(u64::from(b));
    }

    fn finalize(&self) -> u16 {
        if self.sum <= 0xFF {
            self.sum as u16
        } else {
            u16::from(!(self.sum as u8)) + 1
        }
    }
}

/// One-shot additive checksum of `data`
pub fn additive_checksum(data: &[u8]) -> u16 {
    Additive::new().finalize_with(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_within_byte() {
        assert_eq!(additive_checksum(b"ab"), 195);
        assert_eq!(additive_checksum(&[]), 0);
        assert_eq!(additive_checksum(&[0xFF]), 0xFF);
    }

    #[test]
    fn test_sum_boundary() {
        // 255 is returned as is, 256 folds to (!0x00) + 1
        assert_eq!(additive_checksum(&[0xF0, 0x0F]), 255);
        assert_eq!(additive_checksum(&[0xF0, 0x10]), 256);
        assert_eq!(additive_checksum(&[0xF0, 0x11]), 255);
    }

    #[test]
    fn test_sum_overflowing_byte() {
        // "Hello" sums to 500 = 0x1F4 -> (!0xF4 & 0xFF) + 1 = 12
        assert_eq!(additive_checksum(b"Hello"), 12);
        let sum: u64 = b"Hello".iter().map(|&b| u64::from(b)).sum();
        assert_eq!(
            u64::from(additive_checksum(b"Hello")),
            (!sum & 0xFF) + 1
        );
    }

    #[test]
    fn test_sum_streaming_and_initial() {
        let mut sum = Additive::with_initial(100);
        sum.update(&[50]);
        assert_eq!(sum.finalize(), 150);
        sum.update(&[200]);
        assert_eq!(sum.sum(), 350);
        assert_eq!(sum.finalize(), u16::from(!(350u64 as u8)) + 1);
    }

    #[test]
    fn test_sum_finalize_idempotent() {
        let mut sum = Additive::new();
        sum.update(b"Hello");
        assert_eq!(sum.finalize(), sum.finalize());
        assert_eq!(sum.finalize_with(b"!"), sum.finalize_with(b"!"));
        assert_eq!(sum.sum(), 500);
    }
}
