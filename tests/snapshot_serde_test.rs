//! Snapshot serialization tests (serde feature)

use serde_json::Value;
use tui_blockfit::core::GameState;
use tui_blockfit::types::{Cell, Command, PieceKind, Variant};

#[test]
fn snapshot_serializes_to_json() {
    let game = GameState::with_builtin_stages(0).unwrap();
    let json: Value = serde_json::to_value(game.snapshot()).unwrap();

    assert_eq!(json["rows"], 20);
    assert_eq!(json["cols"], 10);
    assert_eq!(json["board"].as_array().map(Vec::len), Some(200));
    assert_eq!(json["board"][0], "Empty");
    assert_eq!(json["board"][199], "Disabled");
    assert_eq!(json["status"], "Playing");
    assert_eq!(json["stage_name"], "Foothold");
    assert_eq!(json["cursor"]["x"], 4);
    assert_eq!(json["cursor"]["y"], 0);
    assert_eq!(json["ghost"]["y"], 15);
    assert_eq!(json["preview"].as_array().map(Vec::len), Some(4));
    assert_eq!(json["remaining"], 5);
}

#[test]
fn cell_and_command_roundtrip_through_json() {
    let cell = Cell::Piece(PieceKind::S, Variant::Highlighted);
    let text = serde_json::to_string(&cell).unwrap();
    assert_eq!(serde_json::from_str::<Cell>(&text).unwrap(), cell);

    let command: Command = serde_json::from_str("\"HardDrop\"").unwrap();
    assert_eq!(command, Command::HardDrop);
}
