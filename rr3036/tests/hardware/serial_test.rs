// Hardware tests against a reader on a real serial port. The port path is
// taken from RR3036_PORT; each test is skipped when it is unset.

use std::env;

use serial_test::serial;

use rr3036::{Connection, OperationMode, SerialTransport};

fn open() -> Option<Connection> {
    let _ = env_logger::builder().is_test(true).try_init();
    let path = env::var("RR3036_PORT").ok()?;
    let transport = SerialTransport::open(&path).expect("open serial port");
    Some(Connection::new(Box::new(transport)))
}

#[test]
#[ignore]
#[serial]
fn init_device_reports_version() {
    let Some(mut conn) = open() else { return };
    let info = conn.init_device().expect("init_device");
    assert_ne!(info.version, 0);
}

#[test]
#[ignore]
#[serial]
fn inventory_and_read_first_block() {
    let Some(mut conn) = open() else { return };
    conn.change_mode(OperationMode::Iso15693).expect("change mode");
    conn.open_rf().expect("open rf");

    for tag in conn.inventory().expect("inventory") {
        let block = tag.read_block(&mut conn, 0).expect("read block 0");
        println!("{} block0 = {}", tag.uid(), block.to_hex());
    }
}
