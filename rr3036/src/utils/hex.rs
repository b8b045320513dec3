// rr3036/rr3036/src/utils/hex.rs
//! Hex formatting for frame logs and tag data dumps.

use std::fmt::Write;

use crate::{Error, Result};

/// Lowercase hex without separators: `&[0xe0, 0x04]` -> `"e004"`.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        // writing into a String cannot fail
        let _ = write!(s, "{:02x}", b);
        s
    })
}

/// Lowercase hex with one space between bytes, the format used when
/// logging frames: `&[0x05, 0x00]` -> `"05 00"`.
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse hex digits into bytes, ignoring whitespace between them.
pub fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let digits: Vec<u8> = s.bytes().filter(|c| !c.is_ascii_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err(Error::InvalidHex(format!("odd number of digits in {:?}", s)));
    }

    digits
        .chunks(2)
        .map(|pair| {
            let text = std::str::from_utf8(pair)
                .map_err(|_| Error::InvalidHex(format!("non-ascii input {:?}", s)))?;
            u8::from_str_radix(text, 16)
                .map_err(|e| Error::InvalidHex(format!("'{}': {}", text, e)))
        })
        .collect()
}
