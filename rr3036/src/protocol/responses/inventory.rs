// rr3036/rr3036/src/protocol/responses/inventory.rs
//! Inventory response.

use crate::constants::UID_LEN;
use crate::protocol::parser;
use crate::types::Uid;
use crate::{Error, Result};

const RECORD_LEN: usize = 1 + UID_LEN;

/// One tag reported by `iso15693_inventory`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryEntry {
    /// Data storage format identifier.
    pub dsfid: u8,
    /// Tag UID.
    pub uid: Uid,
}

/// Decode an inventory data block: N records of dsfid(1) + uid(8).
/// An empty block (no tag in the field) yields an empty list.
pub fn decode_inventory(data: &[u8]) -> Result<Vec<InventoryEntry>> {
    if data.len() % RECORD_LEN != 0 {
        return Err(Error::InvalidLength {
            expected: (data.len() / RECORD_LEN + 1) * RECORD_LEN,
            actual: data.len(),
        });
    }

    data.chunks_exact(RECORD_LEN)
        .map(|record| {
            Ok(InventoryEntry {
                dsfid: parser::byte_at(record, 0)?,
                uid: parser::uid_at(record, 1)?,
            })
        })
        .collect()
}
