//! Game controller tests

use tui_blockfit::core::{DropPreview, GameConfig, GameState, StageCatalog, StageError, StageTemplate};
use tui_blockfit::types::{BlockedDropPolicy, Cell, Command, GameEvent, PieceKind, StageStatus, Variant};

fn single_stage(board: &'static [&'static str], pieces: &'static str) -> GameState {
    let catalog = StageCatalog::new(
        vec![StageTemplate {
            name: "test",
            board,
            pieces,
        }],
        board.len() as u8,
        board[0].len() as u8,
    );
    GameState::new(catalog, GameConfig::default(), 0).unwrap()
}

fn two_stages() -> StageCatalog {
    StageCatalog::new(
        vec![
            StageTemplate {
                name: "first",
                board: &["..", ".."],
                pieces: "O",
            },
            StageTemplate {
                name: "second",
                board: &["..", "#."],
                pieces: "OO",
            },
        ],
        2,
        2,
    )
}

#[test]
fn test_o_piece_fills_empty_2x2_and_clears_stage() {
    let mut game = single_stage(&["..", ".."], "O");
    let cursor = game.cursor().unwrap();
    assert_eq!((cursor.x, cursor.y), (0, 0));
    assert_eq!(cursor.shape.kind(), Some(PieceKind::O));
    assert_eq!(game.ghost(), Some(DropPreview { x: 0, y: 0 }));

    assert!(game.apply_action(Command::HardDrop));

    assert_eq!(game.status(), StageStatus::StageClear);
    assert!(!game.grid().has_any_active_cell());
    assert_eq!(game.remaining_count(), 0);
    assert_eq!(game.pieces_placed(), 1);
}

#[test]
fn test_o_piece_blocked_by_disabled_cell_is_a_no_op() {
    let mut game = single_stage(&["..", ".#"], "O");
    assert_eq!(game.ghost(), None);
    let before = game.snapshot();

    assert!(!game.apply_action(Command::HardDrop));

    assert_eq!(game.status(), StageStatus::Playing);
    assert!(game.cursor().is_some());
    assert_eq!(game.grid().get(1, 1), Some(Cell::Disabled));
    assert!(!game.grid().has_any_active_cell());
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_fail_stage_policy() {
    let catalog = StageCatalog::new(
        vec![StageTemplate {
            name: "blocked",
            board: &["..", ".#"],
            pieces: "O",
        }],
        2,
        2,
    );
    let config = GameConfig {
        blocked_drop: BlockedDropPolicy::FailStage,
        ..GameConfig::default()
    };
    let mut game = GameState::new(catalog, config, 0).unwrap();
    assert!(game.apply_action(Command::HardDrop));
    assert_eq!(game.status(), StageStatus::StageFailed);
    assert_eq!(game.drain_events().last(), Some(&GameEvent::StageFailed));
}

#[test]
fn test_pieces_spawn_in_order() {
    let mut game = single_stage(&["......", "......", "......", "......"], "OTI");
    let mut kinds = vec![game.cursor().and_then(|c| c.shape.kind())];
    game.hard_drop();
    kinds.push(game.cursor().and_then(|c| c.shape.kind()));
    game.hard_drop();
    kinds.push(game.cursor().and_then(|c| c.shape.kind()));
    assert_eq!(
        kinds,
        vec![Some(PieceKind::O), Some(PieceKind::T), Some(PieceKind::I)]
    );
}

#[test]
fn test_spawn_centers_and_ghost_follows() {
    let mut game = single_stage(&[".........."; 6], "T");
    // cols 10, T width 3: 10/2 - 3/2 = 4
    assert_eq!(game.cursor().map(|c| c.x), Some(4));
    assert_eq!(game.ghost(), Some(DropPreview { x: 4, y: 4 }));
    assert!(game.apply_action(Command::MoveLeft));
    assert_eq!(game.ghost(), Some(DropPreview { x: 3, y: 4 }));
}

#[test]
fn test_rotate_at_right_wall_clamps() {
    let mut game = single_stage(&["....", "....", "....", "...."], "T");
    assert!(game.rotate());
    // Vertical T is 2 wide; push it to the wall.
    while game.move_by(1) {}
    assert_eq!(game.cursor().map(|c| c.x), Some(2));
    // Back to 3 wide: x clamps to 1.
    assert!(game.rotate());
    let cursor = game.cursor().unwrap();
    assert_eq!((cursor.x, cursor.shape.cols()), (1, 3));
}

#[test]
fn test_rotate_rejected_by_obstruction() {
    let mut game = single_stage(&["....", "#...", "....", "...."], "I");
    let before = game.cursor().cloned();
    assert!(!game.apply_action(Command::Rotate));
    assert_eq!(game.cursor().cloned(), before);
}

#[test]
fn test_o_rotation_is_accepted() {
    let mut game = single_stage(&["....", "...."], "O");
    let shape = game.cursor().unwrap().shape.clone();
    assert!(game.rotate());
    assert_eq!(game.cursor().unwrap().shape, shape);
}

#[test]
fn test_completed_row_counts_in_event() {
    let mut game = single_stage(&["....", "....", "##.."], "OI");
    game.drain_events();
    // O at x=1 first; move it into the gap on the right.
    assert!(game.move_by(1));
    assert!(game.hard_drop());
    let events = game.drain_events();
    assert!(events.contains(&GameEvent::PieceCommitted {
        x: 2,
        y: 1,
        rows_cleared: 1
    }));
    assert_eq!(game.grid().to_string(), "....\n....\n..OO");
}

#[test]
fn test_commands_ignored_when_terminal_but_reset_works() {
    let mut game = single_stage(&["..", ".."], "O");
    game.hard_drop();
    assert_eq!(game.status(), StageStatus::StageClear);
    for command in [Command::MoveLeft, Command::MoveRight, Command::Rotate, Command::HardDrop] {
        assert!(!game.apply_action(command));
    }
    assert!(game.apply_action(Command::Reset));
    assert_eq!(game.status(), StageStatus::Playing);
    assert_eq!(game.remaining_count(), 0);
    assert!(game.cursor().is_some());
}

#[test]
fn test_advance_and_select_stage() {
    let mut game = GameState::new(two_stages(), GameConfig::default(), 0).unwrap();
    assert_eq!(game.stage_count(), 2);
    game.hard_drop();
    assert_eq!(game.status(), StageStatus::StageClear);

    assert_eq!(game.advance_stage(), Ok(true));
    assert_eq!(game.stage_index(), 1);
    assert_eq!(game.stage_name(), "second");
    assert_eq!(game.status(), StageStatus::Playing);
    assert_eq!(game.remaining_count(), 1);
    assert_eq!(game.advance_stage(), Ok(false));

    assert_eq!(
        game.select_stage(5),
        Err(StageError::UnknownStage { index: 5, count: 2 })
    );
    assert_eq!(game.stage_index(), 1);

    assert_eq!(game.select_stage(0), Ok(()));
    assert_eq!(game.stage_name(), "first");
}

#[test]
fn test_new_rejects_unknown_stage() {
    assert!(GameState::with_builtin_stages(4).is_err());
    assert!(GameState::with_builtin_stages(3).is_ok());
}

#[test]
fn test_preview_respects_config() {
    let catalog = StageCatalog::new(
        vec![StageTemplate {
            name: "long",
            board: &["......", "......"],
            pieces: "OOOOOOO",
        }],
        2,
        6,
    );
    let config = GameConfig {
        preview_size: 2,
        ..GameConfig::default()
    };
    let game = GameState::new(catalog, config, 0).unwrap();
    assert_eq!(game.preview().count(), 2);
    assert_eq!(game.remaining_count(), 6);
    let snap = game.snapshot();
    assert_eq!(snap.preview.len(), 2);
    assert_eq!(snap.remaining, 6);
}

#[test]
fn test_snapshot_reflects_board_and_cursor() {
    let mut game = single_stage(&["....", "....", "#..."], "oO");
    game.hard_drop();
    let snap = game.snapshot();
    assert_eq!(snap.board_rows(), vec!["....", ".oo.", "#oo."]);
    assert_eq!(snap.cell(1, 2), Some(Cell::Piece(PieceKind::O, Variant::Highlighted)));
    assert_eq!(snap.cell(4, 0), None);
    assert!(snap.playable());
    assert_eq!(snap.cursor.as_ref().map(|c| (c.x, c.y)), Some((1, 0)));
    assert_eq!(snap.ghost, None);
    assert_eq!(snap.stage_name, "test");
}

#[test]
fn test_builtin_stages_start_playing() {
    for index in 0..4 {
        let game = GameState::with_builtin_stages(index).unwrap();
        assert_eq!(game.status(), StageStatus::Playing);
        assert!(game.cursor().is_some());
        assert!(game.ghost().is_some());
    }
}
