//! Stage catalog tests

use tui_blockfit::core::{Shape, StageCatalog, StageError, StageTemplate};
use tui_blockfit::types::{Cell, PieceKind, Variant};

fn catalog(template: StageTemplate, rows: u8, cols: u8) -> StageCatalog {
    StageCatalog::new(vec![template], rows, cols)
}

#[test]
fn test_builtin_catalog() {
    let catalog = StageCatalog::builtin();
    assert_eq!(catalog.len(), 4);
    assert!(!catalog.is_empty());
    assert_eq!((catalog.rows(), catalog.cols()), (20, 10));
    assert_eq!(catalog.name(0), Some("Foothold"));
    assert_eq!(catalog.name(4), None);
}

#[test]
fn test_load_parses_board_and_pieces() {
    let stage = catalog(
        StageTemplate {
            name: "mixed",
            board: &["..t", "#O."],
            pieces: "I z",
        },
        2,
        3,
    )
    .load(0);
    // The I piece is four wide and does not fit a 3-column board.
    assert_eq!(
        stage,
        Err(StageError::PieceTooLarge {
            stage: 0,
            position: 0,
            kind: PieceKind::I
        })
    );

    let stage = catalog(
        StageTemplate {
            name: "mixed",
            board: &["..t", "#O."],
            pieces: "O z",
        },
        2,
        3,
    )
    .load(0)
    .unwrap();
    assert_eq!(stage.name(), "mixed");
    assert_eq!(stage.grid().get(2, 0), Some(Cell::Piece(PieceKind::T, Variant::Highlighted)));
    assert_eq!(stage.grid().get(0, 1), Some(Cell::Disabled));
    assert_eq!(stage.grid().get(1, 1), Some(Cell::Piece(PieceKind::O, Variant::Normal)));
    let pieces: Vec<_> = stage.pieces().iter().filter_map(Shape::kind).collect();
    assert_eq!(pieces, vec![PieceKind::O, PieceKind::Z]);
    assert_eq!(stage.pieces()[1].variant(), Some(Variant::Highlighted));
}

#[test]
fn test_unknown_index() {
    assert_eq!(
        StageCatalog::builtin().load(9),
        Err(StageError::UnknownStage { index: 9, count: 4 })
    );
}

#[test]
fn test_dimension_mismatch_is_fatal() {
    let t = StageTemplate {
        name: "short",
        board: &["....", "...."],
        pieces: "O",
    };
    assert_eq!(
        catalog(t, 3, 4).load(0),
        Err(StageError::RowCount {
            stage: 0,
            expected: 3,
            actual: 2
        })
    );
    assert_eq!(
        catalog(t, 2, 5).load(0),
        Err(StageError::RowWidth {
            stage: 0,
            row: 0,
            expected: 5,
            actual: 4
        })
    );
}

#[test]
fn test_bad_letters() {
    let t = StageTemplate {
        name: "bad cell",
        board: &["..", ".?"],
        pieces: "O",
    };
    assert_eq!(
        catalog(t, 2, 2).load(0),
        Err(StageError::UnknownCell {
            stage: 0,
            row: 1,
            col: 1,
            ch: '?'
        })
    );

    let t = StageTemplate {
        name: "bad piece",
        board: &["..", ".."],
        pieces: "OX",
    };
    assert_eq!(
        catalog(t, 2, 2).load(0),
        Err(StageError::UnknownPiece {
            stage: 0,
            position: 1,
            ch: 'X'
        })
    );
}

#[test]
fn test_empty_piece_list() {
    let t = StageTemplate {
        name: "nothing",
        board: &[".."],
        pieces: "  ",
    };
    assert_eq!(catalog(t, 1, 2).load(0), Err(StageError::NoPieces { stage: 0 }));
}

#[test]
fn test_error_display() {
    let err = StageError::UnknownStage { index: 7, count: 4 };
    assert_eq!(err.to_string(), "stage 7 does not exist (catalog has 4 stages)");
}

#[test]
fn test_oversized_board_is_rejected() {
    const TALL: [&str; 130] = ["...."; 130];
    let t = StageTemplate {
        name: "tall",
        board: &TALL,
        pieces: "O",
    };
    let err = StageError::BoardTooLarge {
        rows: 130,
        cols: 4,
        max: 127,
    };
    assert_eq!(catalog(t, 130, 4).load(0), Err(err.clone()));
    assert_eq!(
        tui_blockfit::core::GameState::new(catalog(t, 130, 4), Default::default(), 0).err(),
        Some(err)
    );
}
