// rr3036/rr3036/src/transport/mock.rs
//! In-memory transport for tests.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crate::transport::traits::Transport;
use crate::utils::default_read_timeout;
use crate::{Error, Result};

/// Mock transport for unit tests. It records written frames and serves
/// queued response bytes.
#[derive(Debug)]
pub struct MockTransport {
    /// Every `write` call, in order.
    pub sent: Vec<Vec<u8>>,
    /// Number of `flush` calls.
    pub flushes: usize,
    /// Bytes waiting to be read. Queued frames are concatenated, as on a wire.
    pub incoming: VecDeque<u8>,
    /// Testing hook: number of read calls that should fail with an I/O error
    pub read_failures: usize,
    timeout: Duration,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    /// Empty mock with the default read timeout.
    pub fn new() -> Self {
        Self {
            sent: Vec::new(),
            flushes: 0,
            incoming: VecDeque::new(),
            read_failures: 0,
            timeout: default_read_timeout(),
        }
    }

    /// Set how many subsequent reads should fail (for tests).
    pub fn set_read_failures(&mut self, n: usize) {
        self.read_failures = n;
    }

    /// Queue response bytes behind anything already queued.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.incoming.extend(resp);
    }

    /// Remove and return the most recently written frame.
    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }

    /// Bytes queued but not yet read.
    pub fn pending(&self) -> usize {
        self.incoming.len()
    }
}

impl Transport for MockTransport {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        self.sent.push(data.to_vec());
        Ok(data.len())
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }

    fn read(&mut self, len: usize) -> Result<Vec<u8>> {
        if self.read_failures > 0 {
            self.read_failures -= 1;
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "mock read failure").into());
        }
        // A real port would wait out the timeout, then give up.
        if self.incoming.len() < len {
            self.incoming.clear();
            return Err(Error::Timeout);
        }
        Ok(self.incoming.drain(..len).collect())
    }

    fn set_timeout(&mut self, timeout: Duration) -> Result<()> {
        self.timeout = timeout;
        Ok(())
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }
}
