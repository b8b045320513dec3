// rr3036/rr3036/src/device/options.rs
//! Per-call send options.

use std::collections::BTreeSet;

/// Per-call policy for [`Connection::send`](crate::device::Connection::send).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendOptions {
    /// Command data block placed after the state byte.
    pub payload: Vec<u8>,
    /// Nonzero statuses returned as a normal response instead of an error.
    pub tolerated_statuses: BTreeSet<u8>,
    /// Return responses with a bad CRC instead of failing.
    pub suppress_checksum_errors: bool,
}

impl SendOptions {
    /// No payload, no tolerated statuses, strict checksums.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options carrying `payload` and otherwise defaults.
    pub fn with_payload(payload: impl Into<Vec<u8>>) -> Self {
        Self::new().payload(payload)
    }

    /// Set the command data block.
    pub fn payload(mut self, payload: impl Into<Vec<u8>>) -> Self {
        self.payload = payload.into();
        self
    }

    /// Return `status` as a normal response instead of an error.
    pub fn tolerate(mut self, status: u8) -> Self {
        self.tolerated_statuses.insert(status);
        self
    }

    /// Tolerate every status in `statuses`.
    pub fn tolerate_all(mut self, statuses: impl IntoIterator<Item = u8>) -> Self {
        self.tolerated_statuses.extend(statuses);
        self
    }

    /// Log CRC mismatches instead of failing.
    pub fn suppress_checksum_errors(mut self, suppress: bool) -> Self {
        self.suppress_checksum_errors = suppress;
        self
    }

    /// Whether `status` is tolerated.
    pub fn is_tolerated(&self, status: u8) -> bool {
        self.tolerated_statuses.contains(&status)
    }
}
