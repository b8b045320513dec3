// rr3036/rr3036/src/device/mod.rs
//! Reader connection, its builder and per-call options.

pub mod builder;
pub mod handle;
pub mod options;

pub use builder::ConnectionBuilder;
pub use handle::Connection;
pub use options::SendOptions;
