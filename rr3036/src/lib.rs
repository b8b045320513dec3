// rr3036/rr3036/src/lib.rs

//! rr3036
//!
//! Pure Rust driver for RR3036 style HF RFID readers (ISO15693 / ISO14443)
//! attached over a serial line.
#![warn(missing_docs)]

pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod tag;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// `rr3036::Error`, `rr3036::Uid` etc. resolve from the crate root.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
