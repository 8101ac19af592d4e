//! Runtime algorithm selection

use super::{Additive, Bcc, Checksum, Crc16, Crc16Mode};
use errors::{Result, WireError};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Checksum algorithm chosen by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bcc,
    Additive,
    Crc16(Crc16Mode),
}

impl Algorithm {
    /// Every algorithm with its canonical name
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bcc,
        Algorithm::Additive,
        Algorithm::Crc16(Crc16Mode::TableLookup),
        Algorithm::Crc16(Crc16Mode::BitShift),
    ];

    /// Parse an optional name; `None` and blank names are `MissingAlgorithm`
    pub fn parse_optional(name: Option<&str>) -> Result<Self> {
        name.ok_or(WireError::MissingAlgorithm)?.parse()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Bcc => "bcc",
            Self::Additive => "sum",
            Self::Crc16(Crc16Mode::TableLookup) => "crc16",
            Self::Crc16(Crc16Mode::BitShift) => "crc16-shift",
        }
    }

    /// Number of hex digits needed to render a result
    pub fn hex_width(&self) -> usize {
        match self {
            Self::Bcc => 2,
            Self::Additive | Self::Crc16(_) => 4,
        }
    }

    /// Largest initial register value the algorithm accepts
    pub fn max_initial(&self) -> u32 {
        match self {
            Self::Bcc => u32::from(u8::MAX),
            Self::Additive => u32::MAX,
            Self::Crc16(_) => u32::from(u16::MAX),
        }
    }

    /// Fresh accumulator for this algorithm
    ///
    /// # Errors
    /// `InvalidParameter` when `initial` does not fit the register width.
    pub fn accumulator(&self, initial: u32) -> Result<Accumulator> {
        let out_of_range = || {
            WireError::invalid_parameter(
                "initial",
                format!(
                    "{initial:#X} exceeds {:#X} for {}",
                    self.max_initial(),
                    self.name()
                ),
            )
        };

        let acc = match *self {
            Self::Bcc => {
                Accumulator::Bcc(Bcc::with_initial(u8::try_from(initial).map_err(|_| out_of_range())?))
            },
            Self::Additive => Accumulator::Additive(Additive::with_initial(u64::from(initial))),
            Self::Crc16(mode) => Accumulator::Crc16(Crc16::with_mode_and_initial(
                mode,
                u16::try_from(initial).map_err(|_| out_of_range())?,
            )),
        };
        trace!("Created {} accumulator, initial {:#X}", self.name(), initial);
        Ok(acc)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = WireError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        if name.is_empty() {
            return Err(WireError::MissingAlgorithm);
        }
        match name.to_ascii_lowercase().as_str() {
            "bcc" | "xor" => Ok(Self::Bcc),
            "sum" | "checksum" | "additive" => Ok(Self::Additive),
            "crc16" | "crc-16" | "crc16-table" => Ok(Self::Crc16(Crc16Mode::TableLookup)),
            "crc16-shift" | "crc16-bit-shift" => Ok(Self::Crc16(Crc16Mode::BitShift)),
            _ => Err(WireError::UnknownAlgorithm(name.to_string())),
        }
    }
}

/// Accumulator over a runtime-selected algorithm
///
/// Results are widened to `u32` so all algorithms share one output type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accumulator {
    Bcc(Bcc),
    Additive(Additive),
    Crc16(Crc16),
}

impl Accumulator {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Bcc(_) => Algorithm::Bcc,
            Self::Additive(_) => Algorithm::Additive,
            Self::Crc16(crc) => Algorithm::Crc16(crc.mode()),
        }
    }
}

impl Checksum for Accumulator {
    type Output = u32;

    #[inline]
    fn update_byte(&mut self, b: u8) {
        match self {
            Self::Bcc(acc) => acc.update_byte(b),
            Self::Additive(acc) => acc.update_byte(b),
            Self::Crc16(acc) => acc.update_byte(b),
        }
    }

    fn update(&mut self, data: &[u8]) {
        match self {
            Self::Bcc(acc) => acc.update(data),
            Self::Additive(acc) => acc.update(data),
            Self::Crc16(acc) => acc.update(data),
        }
    }

    fn finalize(&self) -> u32 {
        let value = match self {
            Self::Bcc(acc) => u32::from(acc.finalize()),
            Self::Additive(acc) => u32::from(acc.finalize()),
            Self::Crc16(acc) => u32::from(acc.finalize()),
        };
        trace!("{} finalized to {:#X}", self.algorithm(), value);
        value
    }
}
