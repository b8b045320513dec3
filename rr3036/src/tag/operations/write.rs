// rr3036/rr3036/src/tag/operations/write.rs
//! Block writes.

use crate::device::{Connection, SendOptions};
use crate::protocol::commands::encode_write_4byte;
use crate::protocol::Command;
use crate::tag::Tag;
use crate::Result;

/// Write 4 bytes into `block` using `iso15693_write_4byte`.
///
/// 書き込み結果はステータスのみで判定する（データ部は空）。
pub fn write_block(tag: &Tag, conn: &mut Connection, block: u8, data: [u8; 4]) -> Result<()> {
    let payload = encode_write_4byte(*tag.uid(), block, data);
    conn.send(Command::Iso15693Write4Byte, &SendOptions::with_payload(payload))?;
    log::debug!("tag {}: wrote block {}", tag.uid(), block);
    Ok(())
}
