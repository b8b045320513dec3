use std::io;
use std::time::Duration;

use rr3036::protocol::codec::decode_response;
use rr3036::protocol::Command;
use rr3036::transport::{MockTransport, Transport};
use rr3036::{Connection, Error, OperationMode, Result, SendOptions};

use crate::common::*;

#[test]
fn injected_read_failure_surfaces_as_io() {
    let mut m = MockTransport::new();
    m.push_response(frame(OK_EMPTY_RESPONSE));
    m.set_read_failures(1);

    match decode_response(&mut m, false) {
        Err(Error::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn connection_propagates_transport_errors() {
    let (mut conn, shared) = connection_with(&[OK_EMPTY_RESPONSE]);
    shared.set_read_failures(1);
    assert!(matches!(conn.open_rf(), Err(Error::Io(_))));
}

#[test]
fn io_timeouts_map_to_timeout() {
    let err: Error = io::Error::new(io::ErrorKind::TimedOut, "port").into();
    assert!(matches!(err, Error::Timeout));
    let err: Error = io::Error::new(io::ErrorKind::WouldBlock, "port").into();
    assert!(matches!(err, Error::Timeout));
}

#[test]
fn declared_length_below_header_is_rejected() {
    let mut m = MockTransport::new();
    m.push_response(vec![0x02, 0x00, 0x00]);
    assert!(matches!(decode_response(&mut m, true), Err(Error::FrameFormat(_))));
}

/// Serves a valid length byte, then truncates every later read to one byte.
#[derive(Default)]
struct TruncatingTransport {
    reads: usize,
}

impl Transport for TruncatingTransport {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        Ok(data.len())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn read(&mut self, len: usize) -> Result<Vec<u8>> {
        self.reads += 1;
        Ok(if self.reads == 1 { vec![0x05] } else { vec![0x00; len.min(1)] })
    }

    fn set_timeout(&mut self, _timeout: Duration) -> Result<()> {
        Ok(())
    }

    fn timeout(&self) -> Duration {
        rr3036::default_read_timeout()
    }
}

#[test]
fn truncated_transport_reads_are_errors_not_panics() {
    let mut t = TruncatingTransport::default();
    assert!(matches!(decode_response(&mut t, true), Err(Error::Timeout)));

    let mut conn = Connection::with_settings(
        Box::new(TruncatingTransport::default()),
        0x00,
        OperationMode::Iso15693,
    );
    assert!(matches!(
        conn.send(Command::ChangeToIso14443a, &SendOptions::new()),
        Err(Error::Timeout)
    ));
    assert_eq!(conn.mode(), OperationMode::Iso15693);
}
