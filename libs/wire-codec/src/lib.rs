//! wirekit codec library
//!
//! Provides the binary building blocks used when assembling and checking
//! serial/wire frames:
//! - big-endian packing and unpacking of 16/32/64-bit integers
//! - hex rendering, parsing and memory dumps
//! - BCC, additive and CRC-16/ARC checksum accumulators
//!
//! A typical pipeline is encode -> checksum -> hex render:
//!
//! ```
//! use wire_codec::{bytes, checksum::{Checksum, Crc16}, hex};
//!
//! let frame = bytes::append_u16(vec![0x01, 0x03], 0x0000);
//! let frame = bytes::append_u16(frame, 0x0001);
//! // Modbus RTU seeds the register with 0xFFFF and sends the CRC low byte first
//! let crc = Crc16::with_initial(0xFFFF).finalize_with(&frame);
//! let frame = bytes::append_u16(frame, bytes::flip_u16(crc));
//! assert_eq!(hex::encode_upper(&frame), "010300000001840A");
//! ```
//!
//! None of the types here lock internally; an accumulator is plain data and
//! is meant to be owned by one computation at a time.

pub mod bytes;
pub mod checksum;
pub mod hex;

pub use checksum::{Accumulator, Additive, Algorithm, Bcc, Checksum, Crc16, Crc16Mode};
pub use errors::{Result, WireError};
