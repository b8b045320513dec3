// rr3036/rr3036/src/protocol/commands/iso15693.rs
//! Payload builders for addressed ISO15693 commands.

use crate::types::Uid;

/// Payload for `iso15693_tag_info`: the addressed tag's UID.
pub fn encode_tag_info(uid: Uid) -> Vec<u8> {
    uid.as_bytes().to_vec()
}

/// Payload for `iso15693_read_4byte`: UID followed by the block number.
pub fn encode_read_4byte(uid: Uid, block: u8) -> Vec<u8> {
    let mut buf = Vec::with_capacity(9);
    buf.extend_from_slice(uid.as_bytes());
    buf.push(block);
    buf
}

/// Payload for `iso15693_write_4byte`: UID, block number, then the 4 data bytes.
pub fn encode_write_4byte(uid: Uid, block: u8, data: [u8; 4]) -> Vec<u8> {
    let mut buf = encode_read_4byte(uid, block);
    buf.extend_from_slice(&data);
    buf
}
