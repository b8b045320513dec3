// rr3036/rr3036/src/protocol/frame.rs
//! Request frame encoding and in-memory response decoding.

use crate::constants::{MAX_PAYLOAD_LEN, REQUEST_OVERHEAD};
use crate::protocol::crc::append_crc;
use crate::protocol::responses::Response;
use crate::{Error, Result};

/// Reader frame helper. Provides encode/decode of the wire frames.
///
/// Request:  `[Len(1)] [Addr(1)] [Cmd(1)] [State(1)] [Data(n)] [CRC-LSB(1)] [CRC-MSB(1)]`
/// Response: `[Len(1)] [Addr(1)] [Status(1)] [Data(Len-4)] [CRC-LSB(1)] [CRC-MSB(1)]`
///
/// `Len` counts every byte after itself, so a request carries `n + 5`.
pub struct Frame;

impl Frame {
    /// Encode a request frame, appending the CRC16 of everything before it.
    pub fn encode(address: u8, opcode: u8, state: u8, payload: &[u8]) -> Result<Vec<u8>> {
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(Error::InvalidLength {
                expected: MAX_PAYLOAD_LEN,
                actual: payload.len(),
            });
        }

        let len = (payload.len() + REQUEST_OVERHEAD - 1) as u8;
        let mut out = Vec::with_capacity(payload.len() + REQUEST_OVERHEAD);
        out.push(len);
        out.push(address);
        out.push(opcode);
        out.push(state);
        out.extend_from_slice(payload);
        append_crc(&mut out);
        Ok(out)
    }

    /// Decode a complete response frame held in memory and verify its CRC.
    pub fn decode(frame: &[u8]) -> Result<Response> {
        let response = Response::parse(frame)?;
        response.verify_checksum()?;
        Ok(response)
    }
}
