// rr3036/rr3036/src/transport/traits.rs
//! The [`Transport`] trait.

use std::time::Duration;

use crate::Result;

/// Transport trait abstracts I/O away from protocol/connection logic.
///
/// Implementations are half-duplex byte channels. Reads block until the
/// requested bytes arrive or the read timeout elapses; on timeout they must
/// return `Error::Timeout` instead of hanging or returning short.
pub trait Transport {
    /// Write raw bytes to the device, returning how many were accepted.
    fn write(&mut self, data: &[u8]) -> Result<usize>;

    /// Push any buffered output onto the wire.
    fn flush(&mut self) -> Result<()>;

    /// Read exactly `len` bytes.
    fn read(&mut self, len: usize) -> Result<Vec<u8>>;

    /// Read a single byte. Default implementation goes through `read`.
    fn read_byte(&mut self) -> Result<u8> {
        let bytes = self.read(1)?;
        bytes.first().copied().ok_or(crate::Error::Timeout)
    }

    /// Change the read timeout.
    fn set_timeout(&mut self, timeout: Duration) -> Result<()>;

    /// Current read timeout.
    fn timeout(&self) -> Duration;
}
