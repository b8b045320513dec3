// rr3036/rr3036/src/protocol/mod.rs
//! Wire protocol: frames, commands, responses and status codes.

pub mod codec;
pub mod commands;
pub mod crc;
pub mod frame;
pub mod parser;
pub mod responses;
pub mod status;

pub use commands::{Command, CommandSpec, COMMAND_TABLE};
pub use crc::crc16;
pub use frame::Frame;
pub use responses::*;
pub use status::{describe, StatusDescription};
