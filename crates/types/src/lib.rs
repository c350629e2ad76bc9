//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no behavior beyond parsing and formatting, so
//! they can be shared by the engine, the terminal view and the input mapping.
//!
//! # Board Dimensions
//!
//! The reference stage set is authored for a 10 x 20 board:
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, spawn row first, floor last)
//! - **Preview**: 4 upcoming pieces are shown to the player
//!
//! # Examples
//!
//! ```
//! use tui_blockfit_types::{Cell, Command, PieceKind, Variant, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let cell = Cell::Piece(PieceKind::T, Variant::Normal);
//! assert!(cell.is_active());
//! assert!(!Cell::Disabled.is_active());
//! assert!(Cell::Disabled.is_blocking());
//!
//! assert_eq!(Cell::from_char('#'), Some(Cell::Disabled));
//! assert_eq!(Cell::from_char('s'), Some(Cell::Piece(PieceKind::S, Variant::Highlighted)));
//!
//! assert_eq!(Command::from_str("hardDrop"), Some(Command::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Number of upcoming pieces shown to the player
pub const PREVIEW_SIZE: usize = 4;

/// Row every new cursor piece spawns on
pub const SPAWN_ROW: i8 = 0;

/// Fixed presentation timestep in milliseconds (16ms ≈ 60 FPS).
///
/// Only the frontend loop uses this; the engine has no timing rules.
pub const TICK_MS: u32 = 16;

/// The seven piece kinds
///
/// Geometry for each kind lives in the core shape registry; this enum is
/// only the tag carried by board cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Parse piece kind from a single letter (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfit_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_letter('i'), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_letter('O'), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_letter('x'), None);
    /// ```
    pub fn from_letter(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'I' => Some(PieceKind::I),
            'O' => Some(PieceKind::O),
            'T' => Some(PieceKind::T),
            'L' => Some(PieceKind::L),
            'J' => Some(PieceKind::J),
            'S' => Some(PieceKind::S),
            'Z' => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Uppercase letter for this kind
    pub fn letter(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
            PieceKind::J => 'J',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
        }
    }
}

/// Cosmetic tag chosen per spawned piece. Never affects legality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Variant {
    #[default]
    Normal,
    Highlighted,
}

/// A cell on the game board or inside a piece shape
///
/// - `Empty`: vacant and fillable
/// - `Disabled`: blocked by the stage template, never produced by placement
/// - `Piece`: occupied by a piece of the given kind and cosmetic variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Disabled,
    Piece(PieceKind, Variant),
}

impl Cell {
    /// True for piece cells only.
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self, Cell::Piece(..))
    }

    /// True for anything a piece cannot overlap (`Disabled` or a piece).
    #[inline]
    pub fn is_blocking(&self) -> bool {
        !matches!(self, Cell::Empty)
    }

    /// Parse a stage/shape literal character.
    ///
    /// `.` is empty, `#` is disabled, uppercase piece letters are the normal
    /// variant and lowercase letters are the highlighted variant.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Cell::Empty),
            '#' => Some(Cell::Disabled),
            _ => {
                let kind = PieceKind::from_letter(ch)?;
                let variant = if ch.is_ascii_lowercase() {
                    Variant::Highlighted
                } else {
                    Variant::Normal
                };
                Some(Cell::Piece(kind, variant))
            }
        }
    }

    /// Inverse of [`Cell::from_char`].
    pub fn to_char(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Disabled => '#',
            Cell::Piece(kind, Variant::Normal) => kind.letter(),
            Cell::Piece(kind, Variant::Highlighted) => kind.letter().to_ascii_lowercase(),
        }
    }
}

/// Discrete player commands accepted by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Command {
    /// Shift the cursor one column left
    MoveLeft,
    /// Shift the cursor one column right
    MoveRight,
    /// Rotate the cursor 90° clockwise
    Rotate,
    /// Commit the cursor at its drop preview
    HardDrop,
    /// Reload the current stage
    Reset,
}

impl Command {
    /// Parse a command from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfit_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("ROTATE"), Some(Command::Rotate));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "rotate" => Some(Command::Rotate),
            "harddrop" => Some(Command::HardDrop),
            "reset" => Some(Command::Reset),
            _ => None,
        }
    }

    /// camelCase name of the command
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::Rotate => "rotate",
            Command::HardDrop => "hardDrop",
            Command::Reset => "reset",
        }
    }
}

/// Per-stage outcome
///
/// `StageClear` and `StageFailed` are terminal for the loaded stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StageStatus {
    #[default]
    Playing,
    StageClear,
    StageFailed,
}

impl StageStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, StageStatus::Playing)
    }
}

/// What a hard drop does when no legal landing exists from the cursor column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BlockedDropPolicy {
    /// Leave everything untouched
    #[default]
    Ignore,
    /// End the stage as failed
    FailStage,
}

impl BlockedDropPolicy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ignore" => Some(BlockedDropPolicy::Ignore),
            "fail-stage" | "failstage" | "fail" => Some(BlockedDropPolicy::FailStage),
            _ => None,
        }
    }
}

/// State-change notification emitted by the engine.
///
/// The presentation layer drains these to decide when to redraw instead of
/// polling the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameEvent {
    StageLoaded { stage_index: usize },
    CursorMoved { x: i8 },
    CursorRotated { x: i8 },
    PieceCommitted { x: i8, y: i8, rows_cleared: u8 },
    PieceSpawned { x: i8 },
    StageCleared,
    StageFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_char_roundtrip_covers_all_kinds() {
        for kind in PieceKind::ALL {
            for variant in [Variant::Normal, Variant::Highlighted] {
                let cell = Cell::Piece(kind, variant);
                assert_eq!(Cell::from_char(cell.to_char()), Some(cell));
            }
        }
        assert_eq!(Cell::from_char('?'), None);
    }

    #[test]
    fn disabled_blocks_but_is_not_active() {
        assert!(Cell::Disabled.is_blocking());
        assert!(!Cell::Disabled.is_active());
        assert!(!Cell::Empty.is_blocking());
    }

    #[test]
    fn command_names_parse_back() {
        for cmd in [
            Command::MoveLeft,
            Command::MoveRight,
            Command::Rotate,
            Command::HardDrop,
            Command::Reset,
        ] {
            assert_eq!(Command::from_str(cmd.as_str()), Some(cmd));
        }
    }

    #[test]
    fn stage_status_terminal_flags() {
        assert!(!StageStatus::Playing.is_terminal());
        assert!(StageStatus::StageClear.is_terminal());
        assert!(StageStatus::StageFailed.is_terminal());
    }
}
