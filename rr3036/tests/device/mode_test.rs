use rr3036::device::ConnectionBuilder;
use rr3036::protocol::Command;
use rr3036::test_support::{corrupt_response_frame, response_frame, SharedTransport};
use rr3036::{Error, OperationMode, SendOptions};

use crate::common::*;

#[test]
fn successful_change_updates_mode_and_state_byte() {
    let (mut conn, shared) =
        connection_with(&[OK_EMPTY_RESPONSE, OK_EMPTY_RESPONSE, OK_EMPTY_RESPONSE]);
    assert_eq!(conn.mode(), OperationMode::Iso15693);

    conn.change_mode(OperationMode::Iso14443a).unwrap();
    assert_eq!(conn.mode(), OperationMode::Iso14443a);

    conn.send(Command::Iso15693Inventory, &SendOptions::new().tolerate(0x0E))
        .unwrap();
    conn.change_mode(OperationMode::Iso15693).unwrap();
    assert_eq!(conn.mode(), OperationMode::Iso15693);

    let sent = shared.sent();
    assert_eq!(sent[0], frame(CHANGE_TO_14443A_REQUEST));
    assert_eq!(sent[1], frame(INVENTORY_REQUEST_14443A));
    assert_eq!(sent[2], frame(CHANGE_TO_15693_REQUEST));
}

#[test]
fn failed_change_keeps_mode() {
    let reply = response_frame(0, 0x1F, &[]);
    let (mut conn, shared) = connection_with(&[]);
    shared.push_response(reply.clone());

    assert!(matches!(
        conn.change_mode(OperationMode::Iso14443b),
        Err(Error::ReaderStatus { status: 0x1F, .. })
    ));
    assert_eq!(conn.mode(), OperationMode::Iso15693);

    // tolerated nonzero status is returned but does not switch either
    shared.push_response(reply);
    conn
        .send(Command::ChangeToIso14443b, &SendOptions::new().tolerate(0x1F))
        .unwrap();
    assert_eq!(conn.mode(), OperationMode::Iso15693);
}

#[test]
fn corrupt_reply_does_not_switch_mode() {
    let (mut conn, shared) = connection_with(&[]);
    shared.push_response(corrupt_response_frame(0, 0, &[]));

    let opts = SendOptions::new().suppress_checksum_errors(true);
    let resp = conn.send(Command::ChangeToIso14443a, &opts).unwrap();
    assert!(resp.is_ok());
    assert!(!resp.checksum_matches());
    assert_eq!(conn.mode(), OperationMode::Iso15693);

    // the next frame is still encoded for iso15693
    shared.push_response(frame(OK_EMPTY_RESPONSE));
    conn.open_rf().unwrap();
    assert_eq!(shared.sent()[1][3], 0x02);
}

#[test]
fn builder_applies_address_mode_and_timeout() {
    let shared = SharedTransport::with_responses(vec![response_frame(0x02, 0, &[])]);
    let mut conn = ConnectionBuilder::new()
        .with_transport(Box::new(shared.clone()))
        .address(0x02)
        .mode(OperationMode::Iso14443b)
        .read_timeout(rr3036::ms(250))
        .build()
        .unwrap();

    assert_eq!(conn.address(), 0x02);
    assert_eq!(conn.read_timeout(), rr3036::ms(250));
    conn.open_rf().unwrap();

    let sent = &shared.sent()[0];
    assert_eq!(sent[1], 0x02);
    assert_eq!(sent[3], 0xF2);
}

#[test]
fn builder_without_transport_fails() {
    assert!(matches!(
        ConnectionBuilder::new().build(),
        Err(Error::DeviceNotFound)
    ));
}
