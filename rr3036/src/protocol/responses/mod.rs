// rr3036/rr3036/src/protocol/responses/mod.rs
//! Response frames and per-command data decoders.

pub mod block;
pub mod inventory;
pub mod reader;
pub mod tag_info;

pub use block::decode_block;
pub use inventory::{decode_inventory, InventoryEntry};
pub use reader::{decode_reader_info, ReaderInfo};
pub use tag_info::{decode_tag_info, TagInfo};

use crate::constants::{RESPONSE_LEN_OVERHEAD, STATUS_OK};
use crate::protocol::crc::crc16;
use crate::protocol::status::{self, StatusDescription};
use crate::{Error, Result};

/// A response frame as read from the reader. Per-command decoders in
/// `protocol::responses::<name>.rs` interpret `data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Length byte: everything after it, CRC included.
    pub length: u8,
    /// Address of the answering reader.
    pub address: u8,
    /// Status byte, 0 on success.
    pub status: u8,
    /// Command specific data block.
    pub data: Vec<u8>,
    /// Received CRC as `(lo, hi)`.
    pub crc: (u8, u8),
}

impl Response {
    /// Split a complete frame into its fields without checking the CRC.
    pub fn parse(frame: &[u8]) -> Result<Self> {
        let length = *frame.first().ok_or(Error::InvalidLength {
            expected: 1 + RESPONSE_LEN_OVERHEAD,
            actual: 0,
        })?;
        let data_len = data_len_for(length)?;

        let required = 1 + length as usize;
        if frame.len() != required {
            return Err(Error::InvalidLength {
                expected: required,
                actual: frame.len(),
            });
        }

        let data_end = 3 + data_len;
        Ok(Self {
            length,
            address: frame[1],
            status: frame[2],
            data: frame[3..data_end].to_vec(),
            crc: (frame[data_end], frame[data_end + 1]),
        })
    }

    /// CRC16 recomputed over `[length, address, status] ++ data`.
    pub fn computed_crc(&self) -> (u8, u8) {
        let mut covered = Vec::with_capacity(3 + self.data.len());
        covered.push(self.length);
        covered.push(self.address);
        covered.push(self.status);
        covered.extend_from_slice(&self.data);
        crc16(&covered)
    }

    /// Whether the received CRC matches the recomputed one.
    pub fn checksum_matches(&self) -> bool {
        self.computed_crc() == self.crc
    }

    /// Fail with `ChecksumMismatch` when the CRC is wrong.
    pub fn verify_checksum(&self) -> Result<()> {
        let expected = self.computed_crc();
        if expected != self.crc {
            return Err(Error::ChecksumMismatch {
                expected: u16::from_le_bytes([expected.0, expected.1]),
                actual: u16::from_le_bytes([self.crc.0, self.crc.1]),
            });
        }
        Ok(())
    }

    /// Status is 0.
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Human-readable diagnosis of a nonzero status.
    pub fn status_description(&self) -> Option<StatusDescription> {
        status::describe(self.status, &self.data)
    }

    /// Re-encode the frame, e.g. for logging.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + self.length as usize);
        out.push(self.length);
        out.push(self.address);
        out.push(self.status);
        out.extend_from_slice(&self.data);
        out.push(self.crc.0);
        out.push(self.crc.1);
        out
    }
}

/// Number of data bytes announced by a response length byte.
pub fn data_len_for(length: u8) -> Result<usize> {
    (length as usize)
        .checked_sub(RESPONSE_LEN_OVERHEAD)
        .ok_or_else(|| {
            Error::FrameFormat(format!(
                "declared length {} is shorter than the {} byte response header",
                length, RESPONSE_LEN_OVERHEAD
            ))
        })
}
