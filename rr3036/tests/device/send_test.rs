use rr3036::protocol::Command;
use rr3036::test_support::corrupt_response_frame;
use rr3036::{Error, SendOptions};

use crate::common::*;

#[test]
fn init_device_round_trip() {
    init_logging();
    let (mut conn, shared) = connection_with(&[INIT_INFO_RESPONSE]);

    let info = conn.init_device().unwrap();
    assert_eq!(shared.sent(), vec![frame(INIT_REQUEST)]);
    assert_eq!(shared.flushes(), 1);
    assert_eq!(info.version, 0x0102);
    assert_eq!(info.firmware_version(), (1, 2));
    assert_eq!(info.reader_type, 0x0c);
    assert_eq!(info.supported_protocols, 0x0007);
    assert_eq!(info.inventory_scan_time, 0x1e);
}

#[test]
fn nonzero_status_is_an_error_unless_tolerated() {
    let (mut conn, _) = connection_with(&[NO_TAG_RESPONSE, NO_TAG_RESPONSE]);

    let err = conn
        .send(Command::Iso15693Inventory, &SendOptions::new())
        .unwrap_err();
    match err {
        Error::ReaderStatus { status, description } => {
            assert_eq!(status, 0x0E);
            assert_eq!(description.message, "ISO15693 Operation No Tag Error");
        }
        other => panic!("unexpected error {:?}", other),
    }

    let resp = conn
        .send(Command::Iso15693Inventory, &SendOptions::new().tolerate(0x0E))
        .unwrap();
    assert_eq!(resp.status, 0x0E);
    assert!(resp.data.is_empty());
}

#[test]
fn checksum_policy() {
    let bad = corrupt_response_frame(0, 0, &[]);
    let (mut conn, shared) = connection_with(&[]);
    shared.push_response(bad.clone());

    assert!(matches!(
        conn.send(Command::OpenRf, &SendOptions::new()),
        Err(Error::ChecksumMismatch { .. })
    ));

    shared.push_response(bad);
    let resp = conn
        .send(Command::OpenRf, &SendOptions::new().suppress_checksum_errors(true))
        .unwrap();
    assert!(resp.is_ok());
    assert!(!resp.checksum_matches());
}

#[test]
fn unknown_name_fails_before_io() {
    let (mut conn, shared) = connection_with(&[OK_EMPTY_RESPONSE]);
    assert!(matches!(
        conn.send_named("iso15693_lock_block", &SendOptions::new()),
        Err(Error::UnsupportedCommand(_))
    ));
    assert!(shared.sent().is_empty());
    assert_eq!(shared.pending(), 5);

    conn.send_named("open_rf", &SendOptions::new()).unwrap();
    assert_eq!(shared.sent().len(), 1);
}

#[test]
fn missing_response_times_out() {
    let (mut conn, _) = connection_with(&[]);
    assert!(matches!(conn.close_rf(), Err(Error::Timeout)));
}
