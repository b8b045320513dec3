// rr3036/rr3036/src/protocol/crc.rs
//! CRC16 used by the reader (reflected 0x8408, init 0xFFFF).

use crate::constants::{CRC_INITIAL, CRC_POLYNOMIAL};

/// Compute the reader's CRC16 (reflected, poly 0x8408, init 0xFFFF, no
/// final xor) and return it as `(lo, hi)`, the order it appears on the wire.
pub fn crc16(data: &[u8]) -> (u8, u8) {
    let value = crc16_value(data);
    ((value & 0xff) as u8, (value >> 8) as u8)
}

/// Same as [`crc16`] but returns the raw 16-bit register.
pub fn crc16_value(data: &[u8]) -> u16 {
    data.iter().fold(CRC_INITIAL, |mut crc, &b| {
        crc ^= b as u16;
        for _ in 0..8 {
            if crc & 0x0001 != 0 {
                crc = (crc >> 1) ^ CRC_POLYNOMIAL;
            } else {
                crc >>= 1;
            }
        }
        crc
    })
}

/// Append the CRC16 of `frame` to it, low byte first.
pub fn append_crc(frame: &mut Vec<u8>) {
    let (lo, hi) = crc16(frame);
    frame.push(lo);
    frame.push(hi);
}
