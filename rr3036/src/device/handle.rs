// rr3036/rr3036/src/device/handle.rs
//! The reader connection and its command exchange.

use std::io;
use std::time::Duration;

use crate::constants::{DEFAULT_ADDRESS, STATUS_NO_TAG};
use crate::device::builder::ConnectionBuilder;
use crate::device::options::SendOptions;
use crate::protocol::responses::{self, ReaderInfo, TagInfo};
use crate::protocol::{codec, Command, Response};
use crate::tag::Tag;
use crate::transport::Transport;
use crate::types::{OperationMode, Uid};
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Connection to a single reader.
///
/// Owns the transport together with the reader address and the active
/// air-interface mode. Every exchange is one request followed by exactly one
/// response; the protocol has no request ids, so a `Connection` must not be
/// shared between threads without external serialization.
pub struct Connection {
    transport: Box<dyn Transport>,
    address: u8,
    mode: OperationMode,
}

impl Connection {
    /// Create a Connection with the default address (0x00) and ISO15693 mode.
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self::with_settings(transport, DEFAULT_ADDRESS, OperationMode::default())
    }

    /// Create a Connection with an explicit address and starting mode.
    pub fn with_settings(transport: Box<dyn Transport>, address: u8, mode: OperationMode) -> Self {
        Self {
            transport,
            address,
            mode,
        }
    }

    /// Start a [`ConnectionBuilder`].
    pub fn builder() -> ConnectionBuilder {
        ConnectionBuilder::new()
    }

    /// Reader address written into every frame. Fixed for the lifetime of the connection.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Mode used to encode state bytes. Changes only after a mode-switch
    /// command is answered with status 0.
    pub fn mode(&self) -> OperationMode {
        self.mode
    }

    /// Change the transport read timeout.
    pub fn set_read_timeout(&mut self, timeout: Duration) -> Result<()> {
        self.transport.set_timeout(timeout)
    }

    /// Current transport read timeout.
    pub fn read_timeout(&self) -> Duration {
        self.transport.timeout()
    }

    /// Release the underlying transport.
    pub fn into_transport(self) -> Box<dyn Transport> {
        self.transport
    }

    /// Send a command and wait for its response.
    ///
    /// Nonzero statuses not listed in `options.tolerated_statuses` become
    /// `Error::ReaderStatus`; tolerated ones are returned like any other
    /// response. No retries are attempted.
    pub fn send(&mut self, command: Command, options: &SendOptions) -> Result<Response> {
        let frame = codec::encode_command_frame(command, &options.payload, self.mode, self.address)?;
        log::debug!("-> {} [{}]", command, bytes_to_hex_spaced(&frame));

        let written = self.transport.write(&frame)?;
        if written != frame.len() {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::WriteZero,
                format!("wrote {} of {} bytes", written, frame.len()),
            )));
        }
        self.transport.flush()?;

        let response =
            codec::decode_response(&mut *self.transport, options.suppress_checksum_errors)?;

        if let Some(description) = response.status_description() {
            if !options.is_tolerated(response.status) {
                return Err(Error::ReaderStatus {
                    status: response.status,
                    description,
                });
            }
            log::debug!("{}: tolerated status {:#04x}", command, response.status);
        } else if let Some(mode) = command.target_mode() {
            // a suppressed checksum failure leaves the status byte untrusted
            if response.checksum_matches() {
                self.apply_mode(mode);
            } else {
                log::warn!("{}: not switching to {} on a corrupt reply", command, mode);
            }
        }

        Ok(response)
    }

    /// Send a command identified by its table name (e.g. `"iso15693_inventory"`).
    /// Unknown names fail with `UnsupportedCommand` before anything is written.
    pub fn send_named(&mut self, name: &str, options: &SendOptions) -> Result<Response> {
        let command: Command = name.parse()?;
        self.send(command, options)
    }

    fn apply_mode(&mut self, mode: OperationMode) {
        if self.mode != mode {
            log::info!("reader mode {} -> {}", self.mode, mode);
            self.mode = mode;
        }
    }

    /// Query reader identification.
    pub fn init_device(&mut self) -> Result<ReaderInfo> {
        let resp = self.send(Command::InitDevice, &SendOptions::new())?;
        responses::decode_reader_info(&resp.data)
    }

    /// Switch the reader's air interface.
    pub fn change_mode(&mut self, mode: OperationMode) -> Result<()> {
        self.send(mode.change_command(), &SendOptions::new())?;
        Ok(())
    }

    /// Switch the RF field on.
    pub fn open_rf(&mut self) -> Result<()> {
        self.send(Command::OpenRf, &SendOptions::new())?;
        Ok(())
    }

    /// Switch the RF field off.
    pub fn close_rf(&mut self) -> Result<()> {
        self.send(Command::CloseRf, &SendOptions::new())?;
        Ok(())
    }

    /// Run an ISO15693 inventory. An empty field yields an empty list.
    pub fn inventory(&mut self) -> Result<Vec<Tag>> {
        let opts = SendOptions::new().tolerate(STATUS_NO_TAG);
        let resp = self.send(Command::Iso15693Inventory, &opts)?;
        if resp.status == STATUS_NO_TAG {
            return Ok(Vec::new());
        }
        let entries = responses::decode_inventory(&resp.data)?;
        Ok(entries.into_iter().map(Tag::from).collect())
    }

    /// Query system information of the tag with `uid`.
    pub fn tag_info(&mut self, uid: Uid) -> Result<TagInfo> {
        let payload = crate::protocol::commands::encode_tag_info(uid);
        let resp = self.send(Command::Iso15693TagInfo, &SendOptions::with_payload(payload))?;
        responses::decode_tag_info(&resp.data)
    }
}
