// rr3036/rr3036/src/tag/operations/read.rs
//! Block reads.

use std::ops::Range;

use crate::constants::{ERROR_CODE_BLOCK_UNAVAILABLE, STATUS_ISO15693_EXTENSION};
use crate::device::{Connection, SendOptions};
use crate::protocol::commands::encode_read_4byte;
use crate::protocol::responses::decode_block;
use crate::protocol::Command;
use crate::tag::Tag;
use crate::types::Block;
use crate::{Error, Result};

/// Read one 4-byte block using `iso15693_read_4byte`.
pub fn read_block(tag: &Tag, conn: &mut Connection, block: u8) -> Result<Block> {
    let payload = encode_read_4byte(*tag.uid(), block);
    let resp = conn.send(Command::Iso15693Read4Byte, &SendOptions::with_payload(payload))?;
    decode_block(&resp.data)
}

/// Read a range of blocks one command at a time.
pub fn read_blocks(tag: &Tag, conn: &mut Connection, blocks: Range<u8>) -> Result<Vec<Block>> {
    blocks.map(|block| read_block(tag, conn, block)).collect()
}

/// Walk the tag memory from block 0 until the tag answers that the block
/// does not exist.
pub fn read_memory(tag: &Tag, conn: &mut Connection) -> Result<Vec<Block>> {
    let mut blocks = Vec::new();
    for block in 0..=u8::MAX {
        match read_block(tag, conn, block) {
            Ok(b) => blocks.push(b),
            Err(Error::ReaderStatus {
                status,
                description,
            }) if status == STATUS_ISO15693_EXTENSION
                && description.detail.map(|(code, _)| code) == Some(ERROR_CODE_BLOCK_UNAVAILABLE) =>
            {
                log::debug!("tag {}: memory ends at block {}", tag.uid(), block);
                break;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(blocks)
}
