// rr3036/rr3036/src/constants.rs
//! Common protocol constants used across the crate

/// CRC16 polynomial (reflected) used by the reader firmware
pub const CRC_POLYNOMIAL: u16 = 0x8408;

/// CRC16 initial register value
pub const CRC_INITIAL: u16 = 0xFFFF;

/// Bytes an outgoing frame adds around its payload: len, addr, cmd, state, crc(2)
pub const REQUEST_OVERHEAD: usize = 6;

/// Response header bytes counted by the length byte besides data: addr, status, crc(2)
pub const RESPONSE_LEN_OVERHEAD: usize = 4;

/// Largest payload whose frame length still fits the one-byte length prefix
pub const MAX_PAYLOAD_LEN: usize = u8::MAX as usize - 5;

/// Device address used unless configured otherwise
pub const DEFAULT_ADDRESS: u8 = 0x00;

/// Status byte reported for a successful command
pub const STATUS_OK: u8 = 0x00;

/// Status byte reported when no ISO15693 tag answered
pub const STATUS_NO_TAG: u8 = 0x0E;

/// Status byte for ISO15693 errors refined by an error code in the data block
pub const STATUS_ISO15693_EXTENSION: u8 = 0x0F;

/// ISO15693 error code: addressed block is not available or does not exist
pub const ERROR_CODE_BLOCK_UNAVAILABLE: u8 = 0x10;

/// Serial line settings the reader ships with
pub const DEFAULT_BAUD_RATE: u32 = 19200;

/// ISO15693 UID length in bytes
pub const UID_LEN: usize = 8;

/// Data bytes in a single 4-byte block
pub const BLOCK_LEN: usize = 4;
