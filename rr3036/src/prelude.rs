// rr3036/rr3036/src/prelude.rs
//! Commonly used types, for `use rr3036::prelude::*`.

pub use crate::device::{Connection, ConnectionBuilder, SendOptions};
pub use crate::protocol::{Command, ReaderInfo, Response, StatusDescription};
pub use crate::tag::{Tag, TagInfo};
pub use crate::transport::{MockTransport, Transport};
pub use crate::{Block, Error, OperationMode, Result, Uid};

#[cfg(feature = "serial")]
pub use crate::transport::SerialTransport;

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, default_read_timeout, ms, parse_hex};
