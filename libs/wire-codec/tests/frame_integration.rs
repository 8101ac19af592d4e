//! Frame building integration tests
//!
//! Exercises the packer, hex codec and checksums together the way a
//! protocol driver uses them:
//! - Building request frames and appending a CRC trailer
//! - Parsing hex captures back into integers
//! - Runtime-selected checksum algorithms over streamed input

#![allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable

use wire_codec::bytes::{
    append, append_u16, append_u8, compare, concat, copy, flip_u16, hi_byte, lo_byte, to_u16,
    to_u32,
};
use wire_codec::checksum::{additive_checksum, bcc, crc16};
use wire_codec::hex::{decode, dump_all, encode_upper};
use wire_codec::{Algorithm, Checksum, Crc16, Crc16Mode, WireError};

// ============================================================================
// Frame Building
// ============================================================================

#[test]
fn test_modbus_read_request_with_crc_trailer() {
    let mut frame = append_u8(Vec::new(), 0x01);
    frame = append_u8(frame, 0x03);
    frame = append_u16(frame, 0x0000);
    frame = append_u16(frame, 0x0001);

    let crc = Crc16::with_initial(0xFFFF).finalize_with(&frame);
    assert_eq!(crc, 0x0A84);

    // RTU sends the CRC low byte first
    let frame = append_u16(frame, flip_u16(crc));
    assert_eq!(encode_upper(&frame), "010300000001840A");
    assert_eq!(frame[6], lo_byte(crc));
    assert_eq!(frame[7], hi_byte(crc));

    // a received frame checks to zero over payload plus trailer
    assert_eq!(Crc16::with_initial(0xFFFF).finalize_with(&frame), 0);
}

#[test]
fn test_bcc_framed_message() {
    let header: &[u8] = &[0x01, 0xA0];
    let body: &[u8] = &[0x7C, 0xFF, 0x02];
    let frame = concat(Vec::new(), 0, &[header, body]);
    let check = bcc(&frame);
    assert_eq!(check, 0x20);

    let frame = append_u8(frame, check);
    assert_eq!(bcc(&frame), 0);
}

#[test]
fn test_copy_then_compare() {
    let src = b"\x10\x20\x30\x40\x50";
    let dest = copy(Vec::new(), 0, src, 0, src.len());
    assert_eq!(dest, src);
    assert_eq!(dest, copy(vec![0; src.len()], 0, src, 0, src.len()));

    assert!(compare(Some(&dest[..]), 1, Some(&src[..]), 1, 3));
    assert!(!compare(Some(&dest[..]), 0, None, 0, 3));
    assert!(compare(None, 0, None, 0, 3));
}

// ============================================================================
// Parsing Captures
// ============================================================================

#[test]
fn test_parse_hex_capture() {
    let capture = decode("0103040000012C5A1B").unwrap();
    assert_eq!(capture[2], 4);
    assert_eq!(to_u32(&capture, 3).unwrap(), 0x0000_012C);
    assert_eq!(to_u16(&capture, 7).unwrap(), 0x5A1B);
}

#[test]
fn test_read_past_end_is_error() {
    let capture = decode("0103").unwrap();
    match to_u32(&capture, 0) {
        Err(WireError::BufferTooShort {
            offset,
            needed,
            available,
        }) => {
            assert_eq!((offset, needed, available), (0, 4, 2));
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn test_dump_of_built_frame() {
    let frame = append(b"AT+".to_vec(), b"CSQ\r\n");
    assert_eq!(
        dump_all(&frame),
        format!("0x00000000 41 54 2B 43 53 51 0D 0A{}AT+CSQ..", " ".repeat(25))
    );
}

// ============================================================================
// Runtime-Selected Checksums
// ============================================================================

#[test]
fn test_accumulator_streams_chunks() {
    let payload = b"This is memory dump testing, should show the memory view";

    for algorithm in Algorithm::ALL {
        let mut acc = algorithm.accumulator(0).unwrap();
        for chunk in payload.chunks(7) {
            acc.update(chunk);
        }

        let expected = match algorithm {
            Algorithm::Bcc => u32::from(bcc(payload)),
            Algorithm::Additive => u32::from(additive_checksum(payload)),
            Algorithm::Crc16(_) => u32::from(crc16(payload)),
        };
        assert_eq!(acc.finalize(), expected, "{algorithm}");
    }
}

#[test]
fn test_crc_modes_agree_on_reference_inputs() {
    let inputs: [&[u8]; 4] = [b"", b"123456789", b"This is memory d", &[0xFF; 64]];
    for input in inputs {
        assert_eq!(
            Crc16::with_mode(Crc16Mode::TableLookup).finalize_with(input),
            Crc16::with_mode(Crc16Mode::BitShift).finalize_with(input)
        );
    }
    assert_eq!(crc16(b"This is memory d"), 0x0543);
}

#[test]
fn test_error_categories() {
    let err = "adler32".parse::<Algorithm>().unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_ALGORITHM");
    assert!(err.is_invalid_argument());

    let err = decode("0Z").unwrap_err();
    assert_eq!(err.to_string(), "Invalid hex char 'Z'");
}
