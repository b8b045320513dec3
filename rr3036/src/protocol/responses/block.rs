// rr3036/rr3036/src/protocol/responses/block.rs
//! Block read response.

use crate::constants::BLOCK_LEN;
use crate::protocol::parser;
use crate::types::Block;
use crate::Result;

/// Decode a `iso15693_read_4byte` data block.
/// Layout: security_status(1) + data(4)
pub fn decode_block(data: &[u8]) -> Result<Block> {
    parser::ensure_len(data, 1 + BLOCK_LEN)?;

    let security_status = parser::byte_at(data, 0)?;
    let mut bytes = [0u8; BLOCK_LEN];
    bytes.copy_from_slice(parser::slice_at(data, 1, BLOCK_LEN)?);
    Ok(Block::new(security_status, bytes))
}
