//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::protocol::crc::append_crc;
use crate::transport::{MockTransport, Transport};
use crate::{device, Result};

/// Build a well-formed response frame with a valid CRC.
#[doc(hidden)]
pub fn response_frame(address: u8, status: u8, data: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(data.len() + 5);
    frame.push((data.len() + 4) as u8);
    frame.push(address);
    frame.push(status);
    frame.extend_from_slice(data);
    append_crc(&mut frame);
    frame
}

/// Same as [`response_frame`] but with the CRC bytes corrupted.
#[doc(hidden)]
pub fn corrupt_response_frame(address: u8, status: u8, data: &[u8]) -> Vec<u8> {
    let mut frame = response_frame(address, status, data);
    let last = frame.len() - 1;
    frame[last] ^= 0xFF;
    frame
}

/// Transport wrapper that delegates into a shared MockTransport so a test
/// can inspect written frames after a Connection has taken ownership.
#[doc(hidden)]
#[derive(Debug, Clone, Default)]
pub struct SharedTransport {
    inner: Rc<RefCell<MockTransport>>,
}

impl SharedTransport {
    /// Empty shared mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared mock pre-seeded with response frames.
    pub fn with_responses(responses: Vec<Vec<u8>>) -> Self {
        let shared = Self::new();
        for resp in responses {
            shared.inner.borrow_mut().push_response(resp);
        }
        shared
    }

    /// Frames written so far.
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.inner.borrow().sent.clone()
    }

    /// Number of flushes so far.
    pub fn flushes(&self) -> usize {
        self.inner.borrow().flushes
    }

    /// Queued bytes not yet read.
    pub fn pending(&self) -> usize {
        self.inner.borrow().pending()
    }

    /// Queue another response frame.
    pub fn push_response(&self, resp: Vec<u8>) {
        self.inner.borrow_mut().push_response(resp);
    }

    /// Make the next `n` reads fail with an I/O error.
    pub fn set_read_failures(&self, n: usize) {
        self.inner.borrow_mut().set_read_failures(n);
    }
}

impl Transport for SharedTransport {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        self.inner.borrow_mut().write(data)
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.borrow_mut().flush()
    }

    fn read(&mut self, len: usize) -> Result<Vec<u8>> {
        self.inner.borrow_mut().read(len)
    }

    fn set_timeout(&mut self, timeout: Duration) -> Result<()> {
        self.inner.borrow_mut().set_timeout(timeout)
    }

    fn timeout(&self) -> Duration {
        self.inner.borrow().timeout()
    }
}

/// Convenience: a Connection with default settings backed by a shared mock
/// pre-seeded with the provided responses. The returned handle observes
/// every frame the connection writes.
#[doc(hidden)]
pub fn mock_connection(responses: Vec<Vec<u8>>) -> (device::Connection, SharedTransport) {
    let shared = SharedTransport::with_responses(responses);
    let connection = device::Connection::new(Box::new(shared.clone()));
    (connection, shared)
}
