// rr3036/rr3036/src/protocol/responses/tag_info.rs
//! ISO15693 system information response.

use crate::protocol::parser;
use crate::types::Uid;
use crate::Result;

/// ISO15693 system information returned by `iso15693_tag_info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagInfo {
    /// Information flags saying which fields are present.
    pub flags: u8,
    /// Tag UID.
    pub uid: Uid,
    /// Data storage format identifier.
    pub dsfid: u8,
    /// Application family identifier.
    pub afi: u8,
    /// Raw memory size word as reported by the tag.
    pub memory_size: u16,
    /// IC reference byte.
    pub ic_reference: u8,
}

/// Decode the tag info data block.
/// Layout: flags(1) + uid(8) + dsfid(1) + afi(1) + memory_size(2, BE) + ic_reference(1)
pub fn decode_tag_info(data: &[u8]) -> Result<TagInfo> {
    const LEN: usize = 1 + 8 + 1 + 1 + 2 + 1; // 14
    parser::ensure_len(data, LEN)?;

    Ok(TagInfo {
        flags: parser::byte_at(data, 0)?,
        uid: parser::uid_at(data, 1)?,
        dsfid: parser::byte_at(data, 9)?,
        afi: parser::byte_at(data, 10)?,
        memory_size: parser::be_u16_at(data, 11)?,
        ic_reference: parser::byte_at(data, 13)?,
    })
}
