// rr3036/rr3036/src/device/builder.rs
//! Builder for [`Connection`](crate::device::Connection).

use std::time::Duration;

use crate::constants::DEFAULT_ADDRESS;
use crate::device::handle::Connection;
use crate::transport::Transport;
use crate::types::OperationMode;
use crate::{Error, Result};

/// Helper to construct a Connection with optional configuration.
pub struct ConnectionBuilder {
    transport: Option<Box<dyn Transport>>,
    address: u8,
    mode: OperationMode,
    read_timeout: Option<Duration>,
}

impl Default for ConnectionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectionBuilder {
    /// Builder with address 0x00, ISO15693 and no transport.
    pub fn new() -> Self {
        Self {
            transport: None,
            address: DEFAULT_ADDRESS,
            mode: OperationMode::default(),
            read_timeout: None,
        }
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Reader address placed in every request frame.
    pub fn address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Mode the reader is known to be in when the connection starts.
    pub fn mode(mut self, mode: OperationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Read timeout applied to the transport on build.
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Consume the builder and return a Connection.
    /// Requires a transport to be provided; otherwise returns DeviceNotFound.
    pub fn build(self) -> Result<Connection> {
        let mut transport = self.transport.ok_or(Error::DeviceNotFound)?;
        if let Some(timeout) = self.read_timeout {
            transport.set_timeout(timeout)?;
        }
        Ok(Connection::with_settings(transport, self.address, self.mode))
    }
}
