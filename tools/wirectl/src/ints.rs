//! `pack`, `unpack` and `flip` commands

use crate::input::parse_number;
use crate::report::Report;
use anyhow::Result;
use clap::ValueEnum;
use serde_json::json;
use wire_codec::bytes::{
    flip_u16, flip_u32, flip_u64, flip_u8, to_bytes_u16, to_bytes_u32, to_bytes_u64, to_bytes_u8,
    to_u16, to_u32, to_u64,
};
use wire_codec::hex::{decode, encode_upper};
use wire_codec::WireError;

/// Integer width
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IntWidth {
    U8,
    U16,
    U32,
    U64,
}

impl IntWidth {
    pub fn name(&self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
        }
    }

    pub fn bytes(&self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 => 2,
            Self::U32 => 4,
            Self::U64 => 8,
        }
    }

    pub fn max(&self) -> u64 {
        match self {
            Self::U8 => u64::from(u8::MAX),
            Self::U16 => u64::from(u16::MAX),
            Self::U32 => u64::from(u32::MAX),
            Self::U64 => u64::MAX,
        }
    }

    /// Zero-padded hex rendering of a value of this width
    fn hex(&self, value: u64) -> String {
        format!("0x{:0width$X}", value, width = self.bytes() * 2)
    }
}

/// Big-endian bytes of `value`
pub fn pack(width: IntWidth, value: &str) -> Result<Report> {
    let value = parse_number("value", value, width.max())?;
    let bytes = match width {
        IntWidth::U8 => to_bytes_u8(value as u8),
        IntWidth::U16 => to_bytes_u16(value as u16),
        IntWidth::U32 => to_bytes_u32(value as u32),
        IntWidth::U64 => to_bytes_u64(value),
    };
    let hex = encode_upper(&bytes);

    Ok(Report::new(
        hex.clone(),
        json!({ "width": width.name(), "value": value, "hex": hex }),
    ))
}

/// Read a big-endian integer out of a hex capture
pub fn unpack(width: IntWidth, hex: &str, offset: usize) -> Result<Report> {
    let data = decode(hex)?;
    let value = match width {
        IntWidth::U8 => {
            return Err(WireError::invalid_parameter(
                "width",
                "unpack reads u16, u32 or u64; a u8 is a single hex byte",
            )
            .into())
        },
        IntWidth::U16 => u64::from(to_u16(&data, offset)?),
        IntWidth::U32 => u64::from(to_u32(&data, offset)?),
        IntWidth::U64 => to_u64(&data, offset)?,
    };

    Ok(Report::new(
        format!("{} ({})", value, width.hex(value)),
        json!({ "width": width.name(), "offset": offset, "value": value }),
    ))
}

/// Swap the high and low halves of `value`
pub fn flip(width: IntWidth, value: &str) -> Result<Report> {
    let value = parse_number("value", value, width.max())?;
    let flipped = match width {
        IntWidth::U8 => u64::from(flip_u8(value as u8)),
        IntWidth::U16 => u64::from(flip_u16(value as u16)),
        IntWidth::U32 => u64::from(flip_u32(value as u32)),
        IntWidth::U64 => flip_u64(value),
    };

    Ok(Report::new(
        format!("{} -> {}", width.hex(value), width.hex(flipped)),
        json!({ "width": width.name(), "value": value, "flipped": flipped }),
    ))
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_pack_widths() {
        assert_eq!(pack(IntWidth::U8, "0xAB").unwrap().body, "AB");
        assert_eq!(pack(IntWidth::U16, "4660").unwrap().body, "1234");
        assert_eq!(pack(IntWidth::U32, "0x10").unwrap().body, "00000010");
        assert_eq!(
            pack(IntWidth::U64, "0x1234567890ABCDEF").unwrap().body,
            "1234567890ABCDEF"
        );
    }

    #[test]
    fn test_pack_out_of_range() {
        let err = pack(IntWidth::U16, "65536").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WireError>(),
            Some(WireError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_unpack() {
        let report = unpack(IntWidth::U32, "FF0000012C", 1).unwrap();
        assert_eq!(report.body, "300 (0x0000012C)");
        assert_eq!(report.json["value"], 300);
    }

    #[test]
    fn test_unpack_short_buffer() {
        let err = unpack(IntWidth::U64, "0102", 0).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WireError>(),
            Some(WireError::BufferTooShort { needed: 8, .. })
        ));
        assert!(unpack(IntWidth::U8, "01", 0).is_err());
    }

    #[test]
    fn test_flip() {
        assert_eq!(flip(IntWidth::U8, "0xAB").unwrap().body, "0xAB -> 0xBA");
        assert_eq!(flip(IntWidth::U16, "0x1234").unwrap().body, "0x1234 -> 0x3412");
        assert_eq!(
            flip(IntWidth::U32, "0x12345678").unwrap().body,
            "0x12345678 -> 0x56781234"
        );
        assert_eq!(flip(IntWidth::U64, "1").unwrap().json["flipped"], 1u64 << 32);
    }
}
