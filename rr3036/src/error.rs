// rr3036/rr3036/src/error.rs
//! Crate-wide error type.

use std::io;

use thiserror::Error;

use crate::protocol::status::StatusDescription;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// No transport was configured for the connection.
    #[error("device not found")]
    DeviceNotFound,

    /// Command name missing from the command table.
    #[error("unsupported command: {0}")]
    UnsupportedCommand(String),

    /// Operation mode name that could not be parsed.
    #[error("unknown operation mode: {0}")]
    UnknownMode(String),

    /// A payload or data block had the wrong size.
    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Size required.
        expected: usize,
        /// Size received.
        actual: usize,
    },

    /// Nonzero status byte that the caller did not tolerate.
    #[error("reader error: status={status:#04x}: {description}")]
    ReaderStatus {
        /// Status byte of the response.
        status: u8,
        /// Table text for the status and its sub-error, if any.
        description: StatusDescription,
    },

    /// CRC values are little-endian combinations of `(crc_lo, crc_hi)`.
    #[error("checksum mismatch: expected {expected:#06x}, got {actual:#06x}")]
    ChecksumMismatch {
        /// CRC computed over the received bytes.
        expected: u16,
        /// CRC carried by the frame.
        actual: u16,
    },

    /// Malformed hex input.
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    /// Response frame that cannot be split into its fields.
    #[error("frame format error: {0}")]
    FrameFormat(String),

    /// The transport gave up waiting for bytes.
    #[error("operation timed out")]
    Timeout,

    /// Transport I/O failure.
    #[error("i/o error: {0}")]
    Io(#[source] io::Error),

    /// Failure opening or configuring the serial port.
    #[cfg(feature = "serial")]
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => Error::Timeout,
            _ => Error::Io(err),
        }
    }
}

impl Error {
    /// Status byte carried by a `ReaderStatus` error.
    pub fn status(&self) -> Option<u8> {
        match self {
            Error::ReaderStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
