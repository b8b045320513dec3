// rr3036/rr3036/src/protocol/commands/mod.rs
//! Command identifiers and the opcode table.

pub mod iso15693;

pub use iso15693::{encode_read_4byte, encode_tag_info, encode_write_4byte};

use std::fmt;
use std::str::FromStr;

use crate::types::OperationMode;
use crate::{Error, Result};

/// Commands understood by the reader. New commands need an entry in
/// [`COMMAND_TABLE`] with the opcode/state values from the firmware manual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Read reader information.
    InitDevice,
    /// Switch the RF field off.
    CloseRf,
    /// Switch the RF field on.
    OpenRf,
    /// LED control.
    Led,
    /// Switch the reader to ISO15693.
    ChangeToIso15693,
    /// Switch the reader to ISO14443A.
    ChangeToIso14443a,
    /// Switch the reader to ISO14443B.
    ChangeToIso14443b,
    /// List ISO15693 tags in the field.
    Iso15693Inventory,
    /// Read one 4-byte block.
    Iso15693Read4Byte,
    /// Write one 4-byte block.
    Iso15693Write4Byte,
    /// Read ISO15693 system information.
    Iso15693TagInfo,
}

/// Opcode and state-byte template for one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    /// Command this entry describes.
    pub command: Command,
    /// Stable snake_case name.
    pub name: &'static str,
    /// Command byte.
    pub opcode: u8,
    /// State byte before mode adjustment.
    pub state_template: u8,
}

impl CommandSpec {
    /// State byte as sent while the reader is in `mode`.
    pub fn state_for(&self, mode: OperationMode) -> u8 {
        mode.state_byte(self.state_template)
    }
}

const fn spec(command: Command, name: &'static str, opcode: u8, state_template: u8) -> CommandSpec {
    CommandSpec {
        command,
        name,
        opcode,
        state_template,
    }
}

/// Opcode table. Values must match the reader firmware byte for byte.
pub static COMMAND_TABLE: [CommandSpec; 11] = [
    spec(Command::InitDevice, "init_device", 0x00, 0x00),
    spec(Command::CloseRf, "close_rf", 0x00, 0x01),
    spec(Command::OpenRf, "open_rf", 0x00, 0x02),
    spec(Command::Led, "led", 0x00, 0x07),
    spec(Command::ChangeToIso15693, "change_to_iso15693", 0x00, 0x06),
    spec(Command::ChangeToIso14443a, "change_to_iso14443a", 0x00, 0x05),
    spec(Command::ChangeToIso14443b, "change_to_iso14443b", 0x00, 0x09),
    spec(Command::Iso15693Inventory, "iso15693_inventory", 0x01, 0x06),
    spec(Command::Iso15693Read4Byte, "iso15693_read_4byte", 0x20, 0x00),
    spec(Command::Iso15693Write4Byte, "iso15693_write_4byte", 0x21, 0x00),
    spec(Command::Iso15693TagInfo, "iso15693_tag_info", 0x2B, 0x00),
];

/// Look up a command by its snake_case name.
pub fn lookup(name: &str) -> Result<&'static CommandSpec> {
    log::trace!("command lookup: {}", name);
    COMMAND_TABLE
        .iter()
        .find(|entry| entry.name == name)
        .ok_or_else(|| Error::UnsupportedCommand(name.to_string()))
}

impl Command {
    /// Table entry for this command.
    pub fn spec(self) -> &'static CommandSpec {
        // COMMAND_TABLE is ordered like the enum
        let entry = &COMMAND_TABLE[self as usize];
        debug_assert_eq!(entry.command, self);
        entry
    }

    /// Command byte sent on the wire.
    pub fn opcode(self) -> u8 {
        self.spec().opcode
    }

    /// Snake_case name, as accepted by `lookup`.
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// Mode the reader enters when this command succeeds, if it is a mode switch.
    pub fn target_mode(self) -> Option<OperationMode> {
        match self {
            Self::ChangeToIso15693 => Some(OperationMode::Iso15693),
            Self::ChangeToIso14443a => Some(OperationMode::Iso14443a),
            Self::ChangeToIso14443b => Some(OperationMode::Iso14443b),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        lookup(s).map(|entry| entry.command)
    }
}
