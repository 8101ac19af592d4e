//! BCC (Block Check Character)
//!
//! XOR of every byte: `0x01 ^ 0xA0 ^ 0x7C ^ 0xFF ^ 0x02 = 0x20`.

use super::Checksum;

/// XOR-based block check accumulator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bcc {
    code: u8,
}

impl Bcc {
    /// Accumulator starting from 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulator starting from `initial`
    pub fn with_initial(initial: u8) -> Self {
        Self { code: initial }
    }
}

impl Checksum for Bcc {
    type Output = u8;

    #[inline]
    fn update_byte(&mut self, b: u8) {
        self.code ^= b;
    }

    fn finalize(&self) -> u8 {
        self.code
    }
}

/// One-shot BCC of `data`
pub fn bcc(data: &[u8]) -> u8 {
    Bcc::new().finalize_with(data)
}
