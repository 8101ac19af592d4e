//! Property tests for the codec
//!
//! Cross-checks against reference crates (`crc` for CRC-16/ARC, `hex` for
//! uppercase encoding) and checks the algebraic properties the protocol
//! code relies on.

#![allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable

use proptest::prelude::*;
use wire_codec::bytes::{
    append_u16, append_u32, append_u64, clamp_range, fill_u16, fill_u32, fill_u64, flip_u16,
    flip_u32, flip_u64, flip_u8, join_u16, to_bytes_u32, to_u16, to_u32, to_u64,
};
use wire_codec::checksum::{crc16, Additive, Bcc, Checksum, Crc16, Crc16Mode};
use wire_codec::hex as wire_hex;

const ARC: crc::Crc<u16> = crc::Crc::<u16>::new(&crc::CRC_16_ARC);

fn streamed<C: Checksum>(mut acc: C, data: &[u8], split: usize) -> C::Output {
    let split = if data.is_empty() { 0 } else { split % (data.len() + 1) };
    acc.update(&data[..split]);
    acc.update(&data[split..]);
    acc.finalize()
}

// ============================================================================
// Packer
// ============================================================================

proptest! {
    #[test]
    fn prop_integers_round_trip(a: u16, b: u32, c: u64, prefix in proptest::collection::vec(any::<u8>(), 0..8)) {
        let offset = prefix.len();
        let buf = append_u64(append_u32(append_u16(prefix, a), b), c);

        prop_assert_eq!(buf.len(), offset + 14);
        prop_assert_eq!(to_u16(&buf, offset).unwrap(), a);
        prop_assert_eq!(to_u32(&buf, offset + 2).unwrap(), b);
        prop_assert_eq!(to_u64(&buf, offset + 6).unwrap(), c);
        prop_assert_eq!(&buf[offset..offset + 2], &a.to_be_bytes()[..]);
    }

    #[test]
    fn prop_fill_then_read(a: u16, b: u32, c: u64, at in 0usize..16) {
        prop_assert_eq!(to_u16(&fill_u16(Vec::new(), at, a), at).unwrap(), a);
        prop_assert_eq!(to_u32(&fill_u32(vec![0xEE; 4], at, b), at).unwrap(), b);
        prop_assert_eq!(to_u64(&fill_u64(Vec::new(), at, c), at).unwrap(), c);
        prop_assert_eq!(to_u32(&to_bytes_u32(b), 0).unwrap(), b);
    }

    #[test]
    fn prop_flip_is_involution(a: u8, b: u16, c: u32, d: u64) {
        prop_assert_eq!(flip_u8(flip_u8(a)), a);
        prop_assert_eq!(flip_u16(flip_u16(b)), b);
        prop_assert_eq!(flip_u32(flip_u32(c)), c);
        prop_assert_eq!(flip_u64(flip_u64(d)), d);
        prop_assert_eq!(flip_u16(b), join_u16(b as u8, (b >> 8) as u8));
    }

    #[test]
    fn prop_clamp_range_stays_in_bounds(len in 0usize..64, offset: usize, length: usize) {
        let range = clamp_range(len, offset, length);
        prop_assert!(range.start <= range.end);
        prop_assert!(range.end <= len);
        prop_assert!(range.len() <= length);
    }
}

// ============================================================================
// Hex Codec
// ============================================================================

proptest! {
    #[test]
    fn prop_hex_matches_reference(data in proptest::collection::vec(any::<u8>(), 0..128)) {
        prop_assert_eq!(wire_hex::encode_upper(&data), hex::encode_upper(&data));
    }

    #[test]
    fn prop_hex_round_trip(data in proptest::collection::vec(any::<u8>(), 1..128)) {
        let encoded = wire_hex::encode_upper(&data);
        prop_assert_eq!(wire_hex::decode(&encoded).unwrap(), data.clone());
        prop_assert_eq!(wire_hex::decode(&encoded.to_lowercase()).unwrap(), data);
    }

    #[test]
    fn prop_dump_line_count(data in proptest::collection::vec(any::<u8>(), 0..200)) {
        let dumped = wire_hex::dump_all(&data);
        prop_assert_eq!(dumped.lines().count(), data.len().div_ceil(16));
        for line in dumped.lines() {
            prop_assert!(line.starts_with("0x"));
            prop_assert_eq!(&line[58..59], " ");
        }
    }
}

// ============================================================================
// Checksums
// ============================================================================

proptest! {
    #[test]
    fn prop_crc16_matches_reference(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        prop_assert_eq!(crc16(&data), ARC.checksum(&data));
    }

    #[test]
    fn prop_crc16_modes_agree(data in proptest::collection::vec(any::<u8>(), 0..256), initial: u16) {
        let table = Crc16::with_mode_and_initial(Crc16Mode::TableLookup, initial);
        let shift = Crc16::with_mode_and_initial(Crc16Mode::BitShift, initial);
        prop_assert_eq!(table.finalize_with(&data), shift.finalize_with(&data));
    }

    #[test]
    fn prop_streaming_equivalence(data in proptest::collection::vec(any::<u8>(), 0..256), split: usize) {
        prop_assert_eq!(streamed(Bcc::new(), &data, split), Bcc::new().finalize_with(&data));
        prop_assert_eq!(streamed(Additive::new(), &data, split), Additive::new().finalize_with(&data));
        prop_assert_eq!(streamed(Crc16::new(), &data, split), crc16(&data));
        prop_assert_eq!(
            streamed(Crc16::with_mode(Crc16Mode::BitShift), &data, split),
            crc16(&data)
        );
    }

    #[test]
    fn prop_finalize_is_idempotent(head in proptest::collection::vec(any::<u8>(), 0..64), tail in proptest::collection::vec(any::<u8>(), 0..64)) {
        let mut crc = Crc16::new();
        crc.update(&head);

        let first = crc.finalize_with(&tail);
        let second = crc.finalize_with(&tail);
        prop_assert_eq!(first, second);
        prop_assert_eq!(crc.finalize(), crc16(&head));

        crc.update(&tail);
        prop_assert_eq!(crc.finalize(), first);
    }

    #[test]
    fn prop_additive_result_in_range(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let result = Additive::new().finalize_with(&data);
        prop_assert!(result <= 256);

        let sum: u64 = data.iter().map(|&b| u64::from(b)).sum();
        if sum > 0xFF {
            prop_assert_eq!(u64::from(result), (!sum & 0xFF) + 1);
        } else {
            prop_assert_eq!(u64::from(result), sum);
        }
    }
}
