// rr3036/rr3036/src/transport/serial.rs
//! Serial port transport.

#![cfg(feature = "serial")]

use std::io::{Read, Write};
use std::time::Duration;

use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};

use crate::constants::DEFAULT_BAUD_RATE;
use crate::transport::traits::Transport;
use crate::utils::default_read_timeout;
use crate::Result;

/// Serial-port transport. The reader ships configured for 19200 baud 8N1
/// without flow control; `open` uses those settings.
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
}

impl SerialTransport {
    /// Open `path` with the reader's default line settings and read timeout.
    pub fn open(path: &str) -> Result<Self> {
        Self::open_with(path, DEFAULT_BAUD_RATE, default_read_timeout())
    }

    /// Open `path` with an explicit baud rate and read timeout.
    pub fn open_with(path: &str, baud_rate: u32, timeout: Duration) -> Result<Self> {
        let port = serialport::new(path, baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(timeout)
            .open()?;
        log::debug!(
            "opened {} at {} baud (timeout {} ms)",
            path,
            baud_rate,
            timeout.as_millis()
        );
        Ok(Self::from_port(port))
    }

    /// Wrap an already-configured port.
    pub fn from_port(port: Box<dyn SerialPort>) -> Self {
        Self { port }
    }

    /// Port name, if the platform reports one.
    pub fn name(&self) -> Option<String> {
        self.port.name()
    }
}

impl Transport for SerialTransport {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        self.port.write_all(data)?;
        Ok(data.len())
    }

    fn flush(&mut self) -> Result<()> {
        Write::flush(&mut self.port)?;
        Ok(())
    }

    fn read(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        // io::ErrorKind::TimedOut converts into Error::Timeout
        self.port.read_exact(&mut buf)?;
        Ok(buf)
    }

    fn set_timeout(&mut self, timeout: Duration) -> Result<()> {
        self.port.set_timeout(timeout)?;
        Ok(())
    }

    fn timeout(&self) -> Duration {
        self.port.timeout()
    }
}
