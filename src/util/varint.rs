//! Variable-length integer encoding utilities.
//!
//! 7 bits per byte with a continuation bit, as used by protocol buffers
//! and most binary index formats. Small values (deltas between sorted
//! document ids, position gaps) encode in a single byte.

use crate::error::{Result, XiphosError};

/// Encode a u64 value using variable-length encoding.
pub fn encode_u64(value: u64, out: &mut Vec<u8>) {
    let mut val = value;

    loop {
        let mut byte = (val & 0x7F) as u8;
        val >>= 7;

        if val != 0 {
            byte |= 0x80; // Set continuation bit
        }

        out.push(byte);

        if val == 0 {
            break;
        }
    }
}

/// Decode a u64 value from variable-length encoding.
///
/// Returns the value and the number of bytes consumed.
pub fn decode_u64(bytes: &[u8]) -> Result<(u64, usize)> {
    let mut result = 0u64;
    let mut shift = 0;
    let mut bytes_read = 0;

    for &byte in bytes {
        bytes_read += 1;

        if shift >= 64 {
            return Err(XiphosError::storage("VarInt overflow"));
        }

        result |= ((byte & 0x7F) as u64) << shift;

        if (byte & 0x80) == 0 {
            return Ok((result, bytes_read));
        }

        shift += 7;
    }

    Err(XiphosError::storage("Incomplete VarInt"))
}
