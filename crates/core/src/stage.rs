//! Stage catalog - immutable stage templates and their validation
//!
//! A template is compiled-in text: board rows use `.` for empty, `#` for
//! disabled and piece letters for pre-placed pieces (uppercase normal,
//! lowercase highlighted); the piece list uses the same letters.
//!
//! Templates are validated once, when a stage is loaded. A template that does
//! not match the configured board size is a data error and the stage does not
//! load.

use thiserror::Error;

use crate::grid::{Grid, MAX_DIMENSION};
use crate::shape::Shape;
use crate::stages::BUILTIN_STAGES;
use crate::types::{Cell, PieceKind, Variant, BOARD_HEIGHT, BOARD_WIDTH};

/// Compiled-in description of one stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageTemplate {
    pub name: &'static str,
    /// Board rows, spawn row first
    pub board: &'static [&'static str],
    /// Piece sequence, one letter per piece (whitespace ignored)
    pub pieces: &'static str,
}

/// A validated, ready-to-play stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    index: usize,
    name: &'static str,
    grid: Grid,
    pieces: Vec<Shape>,
}

impl Stage {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Initial board
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Full piece sequence in play order
    pub fn pieces(&self) -> &[Shape] {
        &self.pieces
    }
}

/// Malformed stage data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StageError {
    #[error("stage {index} does not exist (catalog has {count} stages)")]
    UnknownStage { index: usize, count: usize },

    #[error("board of {rows} x {cols} exceeds the {max} x {max} limit")]
    BoardTooLarge { rows: u8, cols: u8, max: u8 },

    #[error("stage {stage}: board has {actual} rows, expected {expected}")]
    RowCount {
        stage: usize,
        expected: usize,
        actual: usize,
    },

    #[error("stage {stage}: row {row} has {actual} cells, expected {expected}")]
    RowWidth {
        stage: usize,
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("stage {stage}: unknown cell {ch:?} at row {row}, column {col}")]
    UnknownCell {
        stage: usize,
        row: usize,
        col: usize,
        ch: char,
    },

    #[error("stage {stage}: unknown piece {ch:?} at position {position}")]
    UnknownPiece {
        stage: usize,
        position: usize,
        ch: char,
    },

    #[error("stage {stage}: piece list is empty")]
    NoPieces { stage: usize },

    #[error("stage {stage}: piece {kind:?} at position {position} does not fit the board")]
    PieceTooLarge {
        stage: usize,
        position: usize,
        kind: PieceKind,
    },
}

/// Ordered collection of stage templates for a configured board size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageCatalog {
    templates: Vec<StageTemplate>,
    rows: u8,
    cols: u8,
}

impl StageCatalog {
    /// Catalog over `templates`, expecting `rows x cols` boards
    pub fn new(templates: Vec<StageTemplate>, rows: u8, cols: u8) -> Self {
        Self {
            templates,
            rows,
            cols,
        }
    }

    /// The compiled-in stages on the standard 10 x 20 board
    pub fn builtin() -> Self {
        Self::new(BUILTIN_STAGES.to_vec(), BOARD_HEIGHT, BOARD_WIDTH)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn name(&self, index: usize) -> Option<&'static str> {
        self.templates.get(index).map(|t| t.name)
    }

    /// Validate and build stage `index`
    pub fn load(&self, index: usize) -> Result<Stage, StageError> {
        let template = self.templates.get(index).ok_or(StageError::UnknownStage {
            index,
            count: self.templates.len(),
        })?;

        if self.rows > MAX_DIMENSION || self.cols > MAX_DIMENSION {
            return Err(StageError::BoardTooLarge {
                rows: self.rows,
                cols: self.cols,
                max: MAX_DIMENSION,
            });
        }

        let rows = self.rows as usize;
        let cols = self.cols as usize;

        if template.board.len() != rows {
            return Err(StageError::RowCount {
                stage: index,
                expected: rows,
                actual: template.board.len(),
            });
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (row, line) in template.board.iter().enumerate() {
            let width = line.chars().count();
            if width != cols {
                return Err(StageError::RowWidth {
                    stage: index,
                    row,
                    expected: cols,
                    actual: width,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let cell = Cell::from_char(ch).ok_or(StageError::UnknownCell {
                    stage: index,
                    row,
                    col,
                    ch,
                })?;
                cells.push(cell);
            }
        }

        let mut pieces = Vec::new();
        for (position, ch) in template
            .pieces
            .chars()
            .filter(|c| !c.is_whitespace())
            .enumerate()
        {
            let kind = PieceKind::from_letter(ch).ok_or(StageError::UnknownPiece {
                stage: index,
                position,
                ch,
            })?;
            let variant = if ch.is_ascii_lowercase() {
                Variant::Highlighted
            } else {
                Variant::Normal
            };
            let shape = Shape::new(kind, variant);
            if shape.rows() > self.rows || shape.cols() > self.cols {
                return Err(StageError::PieceTooLarge {
                    stage: index,
                    position,
                    kind,
                });
            }
            pieces.push(shape);
        }

        if pieces.is_empty() {
            return Err(StageError::NoPieces { stage: index });
        }

        log::info!(
            "loaded stage {} ({:?}): {}x{} board, {} pieces",
            index,
            template.name,
            cols,
            rows,
            pieces.len()
        );

        Ok(Stage {
            index,
            name: template.name,
            grid: Grid::from_cells(self.rows, self.cols, cells),
            pieces,
        })
    }
}

impl Default for StageCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
