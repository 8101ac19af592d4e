//! Input selection shared by the byte-oriented commands

use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use tracing::debug;
use wire_codec::{hex, Checksum, WireError};

/// Read size when streaming a file through an accumulator
pub const CHUNK_SIZE: usize = 8 * 1024;

/// Where the bytes come from; exactly one source is required
#[derive(Args, Debug, Clone, Default)]
#[group(required = true, multiple = false)]
pub struct InputArgs {
    /// Literal text, taken as its UTF-8 bytes
    #[arg(long)]
    pub text: Option<String>,

    /// Read bytes from a file
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Hex string, e.g. 010300000001
    #[arg(long = "hex")]
    pub hex: Option<String>,
}

impl InputArgs {
    /// Load the selected input into memory
    pub fn read(&self) -> Result<Vec<u8>> {
        if let Some(text) = &self.text {
            return Ok(text.as_bytes().to_vec());
        }
        if let Some(path) = &self.file {
            return std::fs::read(path)
                .map_err(WireError::from)
                .with_context(|| format!("Failed to read {}", path.display()));
        }
        if let Some(digits) = &self.hex {
            return Ok(hex::decode(digits)?);
        }
        Err(WireError::invalid_parameter("input", "one of --text, --file or --hex is required").into())
    }
}

/// Byte range within the input
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct RangeArgs {
    /// First byte to use
    #[arg(long, default_value_t = 0)]
    pub offset: usize,

    /// Number of bytes (default: to the end)
    #[arg(long)]
    pub length: Option<usize>,
}

impl RangeArgs {
    pub fn length(&self) -> usize {
        self.length.unwrap_or(usize::MAX)
    }
}

/// Feed a file through an accumulator in `CHUNK_SIZE` pieces
///
/// Returns the number of bytes read.
pub fn stream_file<C: Checksum>(path: &Path, acc: &mut C) -> Result<u64> {
    let mut file = File::open(path)
        .map_err(WireError::from)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut total = 0u64;
    loop {
        let n = match file.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(WireError::from(e))
                    .with_context(|| format!("Failed to read {}", path.display()))
            },
        };
        acc.update(&buf[..n]);
        total += n as u64;
    }

    debug!("Streamed {} bytes from {}", total, path.display());
    Ok(total)
}

/// Parse an unsigned integer given in decimal or `0x` hex, bounded by `max`
pub fn parse_number(param: &str, text: &str, max: u64) -> wire_codec::Result<u64> {
    let digits = text.trim().replace('_', "");
    let parsed = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex_digits) => u64::from_str_radix(hex_digits, 16),
        None => digits.parse::<u64>(),
    };

    let value =
        parsed.map_err(|e| WireError::invalid_parameter(param, format!("'{}': {}", text, e)))?;
    if value > max {
        return Err(WireError::invalid_parameter(
            param,
            format!("{:#X} exceeds {:#X}", value, max),
        ));
    }
    Ok(value)
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use std::io::Write;
    use wire_codec::checksum::{crc16, Crc16};

    #[test]
    fn test_read_text_and_hex() {
        let input = InputArgs {
            text: Some("Hi".to_string()),
            ..Default::default()
        };
        assert_eq!(input.read().unwrap(), b"Hi");

        let input = InputArgs {
            hex: Some("0a1B".to_string()),
            ..Default::default()
        };
        assert_eq!(input.read().unwrap(), [0x0A, 0x1B]);
    }

    #[test]
    fn test_read_bad_hex_keeps_wire_error() {
        let input = InputArgs {
            hex: Some("0G".to_string()),
            ..Default::default()
        };
        let err = input.read().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WireError>(),
            Some(WireError::InvalidHexChar('G'))
        ));
    }

    #[test]
    fn test_read_missing_file() {
        let input = InputArgs {
            file: Some(PathBuf::from("/definitely/not/here.bin")),
            ..Default::default()
        };
        let err = input.read().unwrap_err();
        assert!(matches!(err.downcast_ref::<WireError>(), Some(WireError::Io(_))));
        assert!(format!("{:#}", err).contains("here.bin"));
    }

    #[test]
    fn test_stream_file_crosses_chunks() {
        let data: Vec<u8> = (0..CHUNK_SIZE * 2 + 123).map(|i| (i % 251) as u8).collect();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&data).unwrap();

        let mut acc = Crc16::new();
        let total = stream_file(file.path(), &mut acc).unwrap();
        assert_eq!(total, data.len() as u64);
        assert_eq!(acc.finalize(), crc16(&data));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("value", "4660", u64::MAX).unwrap(), 0x1234);
        assert_eq!(parse_number("value", "0x1234", u64::MAX).unwrap(), 4660);
        assert_eq!(parse_number("value", "0XFF_FF", 0xFFFF).unwrap(), 0xFFFF);
        assert!(parse_number("value", "0x10000", 0xFFFF).is_err());
        assert!(parse_number("value", "-1", u64::MAX).is_err());

        let err = parse_number("initial", "ten", 0xFF).unwrap_err();
        assert!(err.to_string().contains("initial"));
    }

    #[test]
    fn test_range_length_default() {
        assert_eq!(RangeArgs::default().length(), usize::MAX);
        let range = RangeArgs {
            offset: 2,
            length: Some(4),
        };
        assert_eq!(range.length(), 4);
    }
}
