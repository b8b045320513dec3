// Dump every ISO15693 tag in the field of an RR3036 reader.
//
//   cargo run --example dump_tag --features serial -- /dev/ttyUSB0
//
// Set RUST_LOG=debug to see the raw frames.

use anyhow::Context;
use rr3036::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/dev/ttyUSB0".to_string());
    let transport = SerialTransport::open(&path).with_context(|| format!("opening {}", path))?;
    let mut conn = Connection::builder()
        .with_transport(Box::new(transport))
        .mode(OperationMode::Iso15693)
        .build()?;

    let info = conn.init_device().context("init_device")?;
    let (major, minor) = info.firmware_version();
    println!(
        "reader type {:#04x}, firmware {}.{}, protocols {:#06x}",
        info.reader_type, major, minor, info.supported_protocols
    );

    conn.change_mode(OperationMode::Iso15693)?;
    conn.open_rf()?;

    let tags = conn.inventory()?;
    if tags.is_empty() {
        println!("no tag in the field");
    }
    for tag in tags {
        println!("\nUID {} (DSFID {:#04x})", tag.uid(), tag.dsfid());
        match tag.info(&mut conn) {
            Ok(ti) => println!(
                "  AFI {:#04x}, memory size {:#06x}, IC reference {:#04x}",
                ti.afi, ti.memory_size, ti.ic_reference
            ),
            Err(e) => println!("  tag info unavailable: {}", e),
        }
        for (n, block) in tag.read_memory(&mut conn)?.iter().enumerate() {
            let lock = if block.is_locked() { "L" } else { " " };
            println!("  {:3} {} {}  {}", n, lock, block.to_hex(), block.to_ascii_safe());
        }
    }

    conn.close_rf()?;
    Ok(())
}
