use rr3036::protocol::status::{describe, lookup, UNKNOWN_ERROR};
use rr3036::protocol::Frame;

use crate::common::*;

#[test]
fn no_tag_status_from_capture() {
    let resp = Frame::decode(&frame(NO_TAG_RESPONSE)).unwrap();
    let d = resp.status_description().unwrap();
    assert_eq!(d.message, "ISO15693 Operation No Tag Error");
    assert!(d.detail.is_none());
}

#[test]
fn extension_error_resolves_sub_code() {
    let resp = Frame::decode(&frame(EXTENSION_ERROR_RESPONSE)).unwrap();
    let d = resp.status_description().unwrap();
    assert_eq!(d.status, 0x0F);
    assert_eq!(d.detail, Some((0x10, "Appointed block is not available or don't exist.")));
    assert_eq!(
        d.to_string(),
        "ISO15693 Operation Extension error (error_code=0x10: Appointed block is not available or don't exist.)"
    );
}

#[test]
fn iso14443_sub_errors() {
    assert_eq!(describe(0x10, &[0x21]).unwrap().text(), "select failed");
    assert_eq!(describe(0x1B, &[0x36]).unwrap().text(), "halt failed");
    // unmapped sub-code falls back to the status message
    assert_eq!(describe(0x1B, &[0x99]).unwrap().text(), "ISO14443B Operation error");
}

#[test]
fn unknown_and_ok_statuses() {
    assert!(describe(0x00, &[]).is_none());
    let d = describe(0x7E, &[]).unwrap();
    assert_eq!(d.message, UNKNOWN_ERROR);
    assert!(!d.is_known());
    assert!(lookup(0x01).is_some());
}
