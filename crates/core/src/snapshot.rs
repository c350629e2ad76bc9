use crate::game_state::{Cursor, DropPreview};
use crate::shape::Shape;
use crate::types::{Cell, StageStatus};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Read-only copy of everything the presentation layer draws.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GameSnapshot {
    pub rows: u8,
    pub cols: u8,
    /// Row-major board cells
    pub board: Vec<Cell>,
    pub cursor: Option<Cursor>,
    /// Landing position for the cursor shape
    pub ghost: Option<DropPreview>,
    pub preview: Vec<Shape>,
    pub remaining: usize,
    pub stage_index: usize,
    pub stage_count: usize,
    pub stage_name: String,
    pub status: StageStatus,
    pub pieces_placed: u32,
    pub revision: u64,
    pub elapsed_ms: u64,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.rows = 0;
        self.cols = 0;
        self.board.clear();
        self.cursor = None;
        self.ghost = None;
        self.preview.clear();
        self.remaining = 0;
        self.stage_index = 0;
        self.stage_count = 0;
        self.stage_name.clear();
        self.status = StageStatus::Playing;
        self.pieces_placed = 0;
        self.revision = 0;
        self.elapsed_ms = 0;
    }

    pub fn cell(&self, x: i8, y: i8) -> Option<Cell> {
        if x < 0 || y < 0 || x as u8 >= self.cols || y as u8 >= self.rows {
            return None;
        }
        self.board
            .get(y as usize * self.cols as usize + x as usize)
            .copied()
    }

    pub fn playable(&self) -> bool {
        self.status == StageStatus::Playing
    }

    /// Board as literal rows, for logs and assertions
    pub fn board_rows(&self) -> Vec<String> {
        if self.cols == 0 {
            return Vec::new();
        }
        self.board
            .chunks(self.cols as usize)
            .map(|row| row.iter().map(Cell::to_char).collect())
            .collect()
    }
}
