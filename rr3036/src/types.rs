// rr3036/rr3036/src/types.rs
//! Reader mode and ISO15693 value types.

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use crate::constants::{BLOCK_LEN, UID_LEN};
use crate::protocol::Command;
use crate::Error;

/// Air-interface mode the reader is currently operating in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OperationMode {
    /// ISO15693 (vicinity cards), the power-on mode.
    #[default]
    #[display(fmt = "iso15693")]
    Iso15693,
    /// ISO14443 type A.
    #[display(fmt = "iso14443a")]
    Iso14443a,
    /// ISO14443 type B.
    #[display(fmt = "iso14443b")]
    Iso14443b,
}

impl OperationMode {
    /// Every mode, in table order.
    pub const ALL: [Self; 3] = [Self::Iso15693, Self::Iso14443a, Self::Iso14443b];

    /// Derive the wire state byte from a command's state template.
    ///
    /// Outside ISO15693 the firmware expects the high nibble set as a
    /// protocol-family marker; in ISO15693 it must be clear.
    pub fn state_byte(self, template: u8) -> u8 {
        match self {
            Self::Iso15693 => template & 0x0F,
            Self::Iso14443a | Self::Iso14443b => template | 0xF0,
        }
    }

    /// The command that switches the reader into this mode.
    pub fn change_command(self) -> Command {
        match self {
            Self::Iso15693 => Command::ChangeToIso15693,
            Self::Iso14443a => Command::ChangeToIso14443a,
            Self::Iso14443b => Command::ChangeToIso14443b,
        }
    }
}

impl FromStr for OperationMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "iso15693" => Ok(Self::Iso15693),
            "iso14443a" => Ok(Self::Iso14443a),
            "iso14443b" => Ok(Self::Iso14443b),
            _ => Err(Error::UnknownMode(s.to_string())),
        }
    }
}

/// UID - Newtype Pattern (8 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::From)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid([u8; UID_LEN]);

impl Uid {
    /// Wrap raw UID bytes as reported by the tag.
    pub fn from_bytes(bytes: [u8; UID_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw UID bytes.
    pub fn as_bytes(&self) -> &[u8; UID_LEN] {
        &self.0
    }

    /// Lowercase hex without separators.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Accepts 16 hex digits, optionally separated by whitespace.
impl FromStr for Uid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = crate::utils::parse_hex(s)?;
        Self::try_from(bytes.as_slice())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != UID_LEN {
            return Err(Error::InvalidLength {
                expected: UID_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; UID_LEN];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// Block (セキュリティ状態 1 バイト + データ 4 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Block {
    security_status: u8,
    data: [u8; BLOCK_LEN],
}

impl Block {
    /// Block with its security status byte and 4 data bytes.
    pub fn new(security_status: u8, data: [u8; BLOCK_LEN]) -> Self {
        Self {
            security_status,
            data,
        }
    }

    /// Raw security status byte.
    pub fn security_status(&self) -> u8 {
        self.security_status
    }

    /// Bit 0 of the security status marks a locked block.
    pub fn is_locked(&self) -> bool {
        self.security_status & 0x01 != 0
    }

    /// The 4 data bytes.
    pub fn as_bytes(&self) -> &[u8; BLOCK_LEN] {
        &self.data
    }

    /// Data bytes as spaced hex.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }

    /// Data bytes as text, with unprintable bytes shown as `.`.
    pub fn to_ascii_safe(&self) -> String {
        self.data
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect()
    }
}
