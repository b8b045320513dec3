// rr3036/rr3036/src/protocol/codec.rs
//! Command encoding and response reading on top of a [`Transport`].

use crate::transport::Transport;
use crate::types::OperationMode;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

use super::Frame;
use super::commands::{self, Command, CommandSpec};
use super::responses::{data_len_for, Response};

/// Encode a command into a full wire frame for the given mode and address.
pub fn encode_command_frame(
    command: Command,
    payload: &[u8],
    mode: OperationMode,
    address: u8,
) -> Result<Vec<u8>> {
    encode_spec_frame(command.spec(), payload, mode, address)
}

/// Encode a command looked up by name. Fails with `UnsupportedCommand`
/// for names missing from the table.
pub fn encode_named_frame(
    name: &str,
    payload: &[u8],
    mode: OperationMode,
    address: u8,
) -> Result<Vec<u8>> {
    encode_spec_frame(commands::lookup(name)?, payload, mode, address)
}

fn encode_spec_frame(
    spec: &CommandSpec,
    payload: &[u8],
    mode: OperationMode,
    address: u8,
) -> Result<Vec<u8>> {
    Frame::encode(address, spec.opcode, spec.state_for(mode), payload)
}

/// Read one length-prefixed response frame from the transport.
///
/// The CRC is not checked here; callers decide how to treat a mismatch via
/// [`Response::verify_checksum`].
pub fn read_response(transport: &mut dyn Transport) -> Result<Response> {
    let length = transport.read_byte()?;
    let data_len = data_len_for(length)?;

    let header = read_exact(transport, 2)?;
    let data = read_exact(transport, data_len)?;
    let crc = read_exact(transport, 2)?;

    let response = Response {
        length,
        address: header[0],
        status: header[1],
        data,
        crc: (crc[0], crc[1]),
    };
    log::debug!("<- {}", bytes_to_hex_spaced(&response.to_bytes()));
    Ok(response)
}

/// `Transport::read` with the length checked. A transport handing back
/// fewer bytes than asked for is treated like one that timed out.
fn read_exact(transport: &mut dyn Transport, len: usize) -> Result<Vec<u8>> {
    let bytes = transport.read(len)?;
    if bytes.len() != len {
        log::debug!("short read: wanted {} bytes, got {}", len, bytes.len());
        return Err(Error::Timeout);
    }
    Ok(bytes)
}

/// Read a response and apply the checksum policy. With
/// `suppress_checksum_errors` a mismatch is logged and the response is
/// returned anyway.
pub fn decode_response(
    transport: &mut dyn Transport,
    suppress_checksum_errors: bool,
) -> Result<Response> {
    let response = read_response(transport)?;
    if let Err(err) = response.verify_checksum() {
        if !suppress_checksum_errors {
            return Err(err);
        }
        log::warn!("ignoring response checksum failure: {}", err);
    }
    Ok(response)
}
