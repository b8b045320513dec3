//! Block level tag operations.

pub mod read;
pub mod write;

// Re-export commonly used functions at the operations root so callers
// can use `crate::tag::operations::read_block(...)`.
pub use read::{read_block, read_blocks, read_memory};
pub use write::write_block;
