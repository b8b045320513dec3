// rr3036/rr3036/src/protocol/status.rs
//! Reader status byte taxonomy.
//!
//! Most statuses map to a single message. Three of them (0x0F ISO15693
//! extension, 0x10 ISO14443A, 0x1B ISO14443B) only say which protocol failed;
//! the first data byte of the response then carries an error code that is
//! looked up in the entry's `details` map.

use std::fmt;

/// One row of the status table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusEntry {
    /// Status byte.
    pub status: u8,
    /// Short message.
    pub message: &'static str,
    /// Longer explanation from the reader manual.
    pub description: &'static str,
    /// Sub-error code (first data byte) -> text. Empty for most statuses.
    pub details: &'static [(u8, &'static str)],
}

impl StatusEntry {
    /// Whether the first data byte refines this status.
    pub fn has_details(&self) -> bool {
        !self.details.is_empty()
    }

    /// Sub-error text for `code`, if this status has one.
    pub fn detail(&self, code: u8) -> Option<&'static str> {
        self.details
            .iter()
            .find(|(key, _)| *key == code)
            .map(|(_, text)| *text)
    }
}

/// Message used for status bytes missing from [`STATUS_TABLE`].
pub const UNKNOWN_ERROR: &str = "UNKNOWN ERROR";

static ISO15693_EXTENSION_DETAILS: [(u8, &str); 9] = [
    (0x01, "Commands not support. For example: invalid command code"),
    (0x02, "Commands can not be identified. For example: invalid command format"),
    (0x03, "Operation not supported"),
    (0x0F, "Unknown error"),
    (0x10, "Appointed block is not available or don't exist."),
    (0x11, "Appointed block has been locked and can't be locked again."),
    (0x12, "Appointed block is locked and can't change its content."),
    (0x13, "Appointed block does not operate normally."),
    (0x14, "Appointed block can't be locked normally."),
];

static ISO14443A_DETAILS: [(u8, &str); 20] = [
    (0x10, "Halt failed"),
    (0x20, "No ISO14443A card in the inductive area."),
    (0x21, "select failed"),
    (0x22, "authentication failed"),
    (0x23, "read failed"),
    (0x24, "write failed"),
    (0x25, "e-wallet initialization failed"),
    (0x26, "read value failed"),
    (0x27, "decrement/Increment failed"),
    (0x28, "transfer failed"),
    (0x29, "write/read E2PROM failes"),
    (0x2A, "load key failed"),
    (0x2B, "checkwrite failed"),
    (0x2C, "data for checkwrite error"),
    (0x2D, "value operation failed"),
    (0x2E, "Ultralight card write failed"),
    (0x30, "Anti-collision failed"),
    (0x31, "Multiple card entering inductive area forbidden"),
    (0x32, "Mifare I and Ultralight collision error"),
    (0x33, "Ultralight card collision failed."),
];

static ISO14443B_DETAILS: [(u8, &str); 5] = [
    (0x34, "No ISO14443B card in the inductive area."),
    (0x35, "select failed"),
    (0x36, "halt failed"),
    (0x37, "execute transparent command failed"),
    (0x38, "Anticollision failed"),
];

const fn entry(status: u8, message: &'static str, description: &'static str) -> StatusEntry {
    StatusEntry {
        status,
        message,
        description,
        details: &[],
    }
}

/// Status table as documented for the reader firmware.
pub static STATUS_TABLE: [StatusEntry; 14] = [
    entry(
        0x01,
        "Command operand length error",
        "Return status 1 to host when the number of command operands doesn't conform to the command request.",
    ),
    entry(
        0x02,
        "Command not supported",
        "Return status 2 to host when the reader does not support the command the host sends.",
    ),
    entry(
        0x03,
        "Operand out of range",
        "Return status 3 to host when one or more operand of command data block sent by host are out of range.",
    ),
    entry(
        0x04,
        "Operation Not Availible",
        "Return status 4 to host when the requested operation is not available for the reader.",
    ),
    entry(
        0x05,
        "Inductive field closed",
        "Return status 5 to host when the inductive field is closed and the host sends a ISO15693 ISO14443 protocol command.",
    ),
    entry(
        0x06,
        "EEPROM operation error",
        "Return status 6 to host when the reader encounters error in EEPROM access.",
    ),
    entry(
        0x0A,
        "ISO15693 Inventory Operation Error",
        "Return status 0x0A when the reader executing an ISO15693 Inventory command does not get one complete tag's UID before InventoryScanTime overflows.",
    ),
    entry(
        0x0B,
        "ISO15693 Inventory Operation Error",
        "Return status 0x0B when the reader executing an ISO15693 Inventory command does not get all tags' UIDs before InventoryScanTime overflows.",
    ),
    entry(
        0x0C,
        "ISO15693 Tag Response Error",
        "Return status 0x0C when the reader finds one or more tag response in a way that is not compatible with ISO15693 protocol definition.",
    ),
    entry(
        0x0E,
        "ISO15693 Operation No Tag Error",
        "Return ox0E when the reader finds no active tag in the inductive field.",
    ),
    StatusEntry {
        status: 0x0F,
        message: "ISO15693 Operation Extension error",
        description: "Return status 0x0F when an error occurred in ISO15693 command execution and the further information of the error is defined by the Error_code in response data block.",
        details: &ISO15693_EXTENSION_DETAILS,
    },
    StatusEntry {
        status: 0x10,
        message: "ISO14443A Operation error",
        description: "Return status 0x10 when an error occurred in ISO14443A command execution and the further information of the error is defined by the Error_code in response data block.",
        details: &ISO14443A_DETAILS,
    },
    StatusEntry {
        status: 0x1B,
        message: "ISO14443B Operation error",
        description: "Return status 0x1B when an error occurred in ISO14443B command execution and the further information of the error is defined by the Error_code in response data block.",
        details: &ISO14443B_DETAILS,
    },
    entry(
        0x1F,
        "Protocol model error",
        "Return status 0x1F when the reader accepts a command not conforming to its current protocol model. For example, the reader accepts a ISO14443A protocol command but its current model is ISO15693.",
    ),
];

/// Table entry for `status`.
pub fn lookup(status: u8) -> Option<&'static StatusEntry> {
    STATUS_TABLE.iter().find(|e| e.status == status)
}

/// Resolved diagnostic for a nonzero status byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDescription {
    /// Status byte of the response.
    pub status: u8,
    /// Short message, `UNKNOWN ERROR` for unlisted statuses.
    pub message: &'static str,
    /// Longer explanation, empty for unlisted statuses.
    pub description: &'static str,
    /// `(sub_code, text)` when the first data byte refined the status.
    pub detail: Option<(u8, &'static str)>,
}

impl StatusDescription {
    /// Most specific text available: the sub-error if resolved, else the message.
    pub fn text(&self) -> &'static str {
        self.detail.map(|(_, text)| text).unwrap_or(self.message)
    }

    /// Whether the status byte is in the table.
    pub fn is_known(&self) -> bool {
        lookup(self.status).is_some()
    }
}

impl fmt::Display for StatusDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)?;
        if let Some((code, text)) = self.detail {
            write!(f, " (error_code={:#04x}: {})", code, text)?;
        }
        Ok(())
    }
}

/// Describe a response status. Returns `None` for status 0.
pub fn describe(status: u8, data: &[u8]) -> Option<StatusDescription> {
    if status == crate::constants::STATUS_OK {
        return None;
    }

    let Some(entry) = lookup(status) else {
        return Some(StatusDescription {
            status,
            message: UNKNOWN_ERROR,
            description: "",
            detail: None,
        });
    };

    let detail = match data.first() {
        Some(&code) if entry.has_details() => entry.detail(code).map(|text| (code, text)),
        _ => None,
    };

    Some(StatusDescription {
        status,
        message: entry.message,
        description: entry.description,
        detail,
    })
}
