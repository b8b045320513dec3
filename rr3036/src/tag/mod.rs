// rr3036/rr3036/src/tag/mod.rs
//! ISO15693 tags found by inventory.

use std::ops::Range;

use crate::device::Connection;
use crate::protocol::responses::InventoryEntry;
use crate::types::{Block, Uid};
use crate::Result;

pub use crate::protocol::responses::TagInfo;

pub mod operations;

/// An ISO15693 tag found by inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    uid: Uid,
    dsfid: u8,
}

impl Tag {
    /// Tag handle for a known UID.
    pub fn new(uid: Uid, dsfid: u8) -> Self {
        Self { uid, dsfid }
    }

    /// Tag UID.
    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    /// DSFID reported during inventory.
    pub fn dsfid(&self) -> u8 {
        self.dsfid
    }

    /// Query system information (AFI, memory size, IC reference).
    pub fn info(&self, conn: &mut Connection) -> Result<TagInfo> {
        conn.tag_info(self.uid)
    }

    /// Read a single 4-byte block.
    pub fn read_block(&self, conn: &mut Connection, block: u8) -> Result<Block> {
        operations::read_block(self, conn, block)
    }

    /// Read consecutive blocks, stopping at the first error.
    pub fn read_blocks(&self, conn: &mut Connection, blocks: Range<u8>) -> Result<Vec<Block>> {
        operations::read_blocks(self, conn, blocks)
    }

    /// Read blocks from 0 until the tag reports that no further block exists.
    pub fn read_memory(&self, conn: &mut Connection) -> Result<Vec<Block>> {
        operations::read_memory(self, conn)
    }

    /// Write a single 4-byte block.
    pub fn write_block(&self, conn: &mut Connection, block: u8, data: [u8; 4]) -> Result<()> {
        operations::write_block(self, conn, block, data)
    }
}

impl From<InventoryEntry> for Tag {
    fn from(entry: InventoryEntry) -> Self {
        Self::new(entry.uid, entry.dsfid)
    }
}
