use rr3036::protocol::commands::{lookup, COMMAND_TABLE};
use rr3036::protocol::Command;
use rr3036::{Error, OperationMode};

#[test]
fn table_names_and_opcodes() {
    let expected = [
        ("init_device", 0x00),
        ("close_rf", 0x00),
        ("open_rf", 0x00),
        ("led", 0x00),
        ("change_to_iso15693", 0x00),
        ("change_to_iso14443a", 0x00),
        ("change_to_iso14443b", 0x00),
        ("iso15693_inventory", 0x01),
        ("iso15693_read_4byte", 0x20),
        ("iso15693_write_4byte", 0x21),
        ("iso15693_tag_info", 0x2B),
    ];
    assert_eq!(COMMAND_TABLE.len(), expected.len());
    for (name, opcode) in expected {
        let spec = lookup(name).unwrap();
        assert_eq!(spec.name, name);
        assert_eq!(spec.opcode, opcode, "{}", name);
    }
}

#[test]
fn enum_and_table_agree() {
    for spec in COMMAND_TABLE.iter() {
        assert_eq!(spec.command.spec().name, spec.name);
        let parsed: Command = spec.name.parse().unwrap();
        assert_eq!(parsed, spec.command);
        assert_eq!(parsed.to_string(), spec.name);
    }
}

#[test]
fn mode_changes_have_targets() {
    for mode in OperationMode::ALL {
        assert_eq!(mode.change_command().target_mode(), Some(mode));
    }
    assert_eq!(Command::OpenRf.target_mode(), None);
}

#[test]
fn state_byte_depends_on_mode() {
    let inv = Command::Iso15693Inventory.spec();
    assert_eq!(inv.state_for(OperationMode::Iso15693), 0x06);
    assert_eq!(inv.state_for(OperationMode::Iso14443a), 0xF6);
    assert_eq!(inv.state_for(OperationMode::Iso14443b), 0xF6);
}

#[test]
fn unknown_name_is_unsupported() {
    assert!(matches!(lookup("beep"), Err(Error::UnsupportedCommand(_))));
}
