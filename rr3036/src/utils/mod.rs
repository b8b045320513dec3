//! Small helpers shared by the protocol and transport layers: hex
//! formatting for frame logs and read timeout defaults.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
