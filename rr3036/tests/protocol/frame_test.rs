use rr3036::protocol::codec::{encode_command_frame, encode_named_frame};
use rr3036::protocol::{Command, Frame};
use rr3036::{Error, OperationMode};

use crate::common::*;

#[test]
fn request_frames_match_captures() {
    let cases = [
        (Command::InitDevice, OperationMode::Iso15693, INIT_REQUEST),
        (Command::Iso15693Inventory, OperationMode::Iso15693, INVENTORY_REQUEST_15693),
        (Command::Iso15693Inventory, OperationMode::Iso14443a, INVENTORY_REQUEST_14443A),
        (Command::ChangeToIso15693, OperationMode::Iso15693, CHANGE_TO_15693_REQUEST),
        (Command::ChangeToIso14443a, OperationMode::Iso14443a, CHANGE_TO_14443A_REQUEST),
        (Command::ChangeToIso14443b, OperationMode::Iso14443b, CHANGE_TO_14443B_REQUEST),
    ];
    for (command, mode, expected) in cases {
        let encoded = encode_command_frame(command, &[], mode, 0x00).unwrap();
        assert_eq!(encoded, frame(expected), "{} in {}", command, mode);
    }
}

#[test]
fn named_frame_uses_table_entry() {
    let encoded =
        encode_named_frame("iso15693_inventory", &[], OperationMode::Iso15693, 0x00).unwrap();
    assert_eq!(encoded, frame(INVENTORY_REQUEST_15693));

    match encode_named_frame("iso15693_lock_block", &[], OperationMode::Iso15693, 0x00) {
        Err(Error::UnsupportedCommand(name)) => assert_eq!(name, "iso15693_lock_block"),
        other => panic!("expected UnsupportedCommand, got {:?}", other),
    }
}

#[test]
fn decode_inventory_response() {
    let resp = Frame::decode(&frame(INVENTORY_ONE_TAG_RESPONSE)).unwrap();
    assert_eq!(resp.length, 0x0d);
    assert_eq!(resp.address, 0x00);
    assert!(resp.is_ok());
    assert_eq!(resp.data.len(), 9);
    assert_eq!(resp.to_bytes(), frame(INVENTORY_ONE_TAG_RESPONSE));
}

#[test]
fn decode_detects_corruption() {
    let mut bytes = frame(READ_BLOCK_RESPONSE);
    bytes[5] ^= 0x01;
    assert!(matches!(
        Frame::decode(&bytes),
        Err(Error::ChecksumMismatch { actual: 0x0163, .. })
    ));
}

#[test]
fn decode_rejects_short_length_byte() {
    assert!(matches!(
        Frame::decode(&[0x03, 0x00, 0x00, 0x00, 0x00]),
        Err(Error::FrameFormat(_))
    ));
}
