// rr3036/rr3036/src/protocol/responses/reader.rs
//! Reader information returned by `init_device`.

use crate::protocol::parser;
use crate::Result;

/// Reader identification returned by `init_device`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReaderInfo {
    /// Firmware version, major in the high byte.
    pub version: u16,
    /// Reserved.
    pub rfu: u16,
    /// Reader model code.
    pub reader_type: u8,
    /// Bit mask of supported air-interface protocols.
    pub supported_protocols: u16,
    /// Inventory scan time in units of 100 ms.
    pub inventory_scan_time: u8,
}

impl ReaderInfo {
    /// `(major, minor)` firmware version.
    pub fn firmware_version(&self) -> (u8, u8) {
        ((self.version >> 8) as u8, (self.version & 0xff) as u8)
    }
}

/// Decode the `init_device` data block.
/// Layout: version(2, BE) + rfu(2, BE) + reader_type(1) + tr_type(2, BE) + inventory_scan_time(1)
pub fn decode_reader_info(data: &[u8]) -> Result<ReaderInfo> {
    const LEN: usize = 2 + 2 + 1 + 2 + 1;
    parser::ensure_len(data, LEN)?;

    Ok(ReaderInfo {
        version: parser::be_u16_at(data, 0)?,
        rfu: parser::be_u16_at(data, 2)?,
        reader_type: parser::byte_at(data, 4)?,
        supported_protocols: parser::be_u16_at(data, 5)?,
        inventory_scan_time: parser::byte_at(data, 7)?,
    })
}
