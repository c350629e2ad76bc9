//! Grid module - the mutable puzzle board
//!
//! The grid is a `rows x cols` matrix of [`Cell`] stored as a flat row-major
//! vector. Dimensions are fixed once a stage loads.
//! Coordinates: (x, y) where x grows to the right and y grows toward the
//! floor. Row 0 is the spawn row, row `rows - 1` is the floor.

use std::fmt;

use crate::shape::Shape;
use crate::types::Cell;

/// Largest row or column count addressable with `i8` coordinates
pub const MAX_DIMENSION: u8 = i8::MAX as u8;

/// The puzzle board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: u8,
    cols: u8,
    /// Flat array of cells, row-major order (y * cols + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// Dimensions above [`MAX_DIMENSION`] cannot be addressed; stage loading
    /// rejects them.
    pub fn new(rows: u8, cols: u8) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows as usize * cols as usize],
        }
    }

    /// Create a grid from already validated row-major cells
    pub(crate) fn from_cells(rows: u8, cols: u8, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows as usize * cols as usize);
        Self { rows, cols, cells }
    }

    /// Parse a grid from literal rows (`.` empty, `#` disabled, piece letters)
    ///
    /// Returns `None` on ragged rows, unknown characters, or more than
    /// [`MAX_DIMENSION`] rows or columns.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let cols = rows.first()?.chars().count();
        if rows.len() > MAX_DIMENSION as usize || cols > MAX_DIMENSION as usize {
            return None;
        }
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.chars().count() != cols {
                return None;
            }
            for ch in row.chars() {
                cells.push(Cell::from_char(ch)?);
            }
        }
        Some(Self::from_cells(rows.len() as u8, cols as u8, cells))
    }

    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= self.cols as i16 || y < 0 || y >= self.rows as i16 {
            return None;
        }
        Some(y as usize * self.cols as usize + x as usize)
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Get cell at position (x, y), `None` if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x as i16, y as i16).map(|i| self.cells[i])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x as i16, y as i16) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn row(&self, y: usize) -> &[Cell] {
        let w = self.cols as usize;
        &self.cells[y * w..(y + 1) * w]
    }

    /// Whether any active cell of `shape` at `(x, y)` lands on a non-Empty cell.
    ///
    /// Callers keep the offset in range; a cell that would fall outside the
    /// board counts as overlapping instead of aliasing a neighbouring row.
    pub fn overlaps(&self, shape: &Shape, x: i8, y: i8) -> bool {
        self.overlaps_at(shape, x as i16, y as i16)
    }

    fn overlaps_at(&self, shape: &Shape, x: i16, y: i16) -> bool {
        shape.active_cells().any(|(dx, dy, _)| {
            match self.index(x + dx as i16, y + dy as i16) {
                Some(i) => self.cells[i].is_blocking(),
                None => true,
            }
        })
    }

    /// Whether every active cell of `shape` at `(x, y)` is inside the board
    pub fn fits_fully_inside(&self, shape: &Shape, x: i8, y: i8) -> bool {
        self.fits_at(shape, x as i16, y as i16)
    }

    fn fits_at(&self, shape: &Shape, x: i16, y: i16) -> bool {
        shape
            .active_cells()
            .all(|(dx, dy, _)| self.index(x + dx as i16, y + dy as i16).is_some())
    }

    /// Hard-drop landing row for `shape` dropped in column `x` from `from_y`.
    ///
    /// Scans downward for the first row where one more step would hit an
    /// occupied cell or the floor. That row is the landing row only if the
    /// shape fits there without overlapping; otherwise the column has no
    /// legal landing.
    pub fn find_landing_row(&self, shape: &Shape, x: i8, from_y: i8) -> Option<i8> {
        let x = x as i16;
        let max_y = self.rows as i16 - shape.rows() as i16;

        let mut y = from_y as i16;
        while y <= max_y {
            let touches = y + 1 > max_y || self.overlaps_at(shape, x, y + 1);
            if touches {
                let legal = self.fits_at(shape, x, y) && !self.overlaps_at(shape, x, y);
                return if legal { i8::try_from(y).ok() } else { None };
            }
            y += 1;
        }
        None
    }

    /// Write the active cells of `shape` into the board at `(x, y)`.
    ///
    /// Only covered cells change. The destination must have been validated
    /// with [`Grid::overlaps`]; committing onto an occupied or out-of-bounds
    /// cell panics.
    pub fn commit(&mut self, shape: &Shape, x: i8, y: i8) {
        assert!(
            !self.overlaps(shape, x, y),
            "commit onto occupied cells at ({x}, {y})"
        );
        for (dx, dy, cell) in shape.active_cells() {
            self.set(x + dx as i8, y + dy as i8, cell);
        }
    }

    /// True if any cell holds a piece
    pub fn has_any_active_cell(&self) -> bool {
        self.cells.iter().any(Cell::is_active)
    }

    fn is_row_complete(&self, y: usize) -> bool {
        let row = self.row(y);
        row.iter().all(Cell::is_blocking) && row.iter().any(Cell::is_active)
    }

    /// Remove completed rows and shift the rows above toward the floor.
    ///
    /// A row is completed when it has no Empty cell and holds at least one
    /// piece cell; rows made only of Disabled cells stay put.
    /// Returns the removed row indices, floor first.
    pub fn clear_completed_rows(&mut self) -> Vec<usize> {
        let width = self.cols as usize;
        let mut cleared = Vec::new();
        let mut write_y = self.rows as usize;

        // Two pointers, scanning from the floor up.
        for read_y in (0..self.rows as usize).rev() {
            if self.is_row_complete(read_y) {
                cleared.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * width;
                    self.cells.copy_within(src..src + width, write_y * width);
                }
            }
        }

        for cell in &mut self.cells[..write_y * width] {
            *cell = Cell::Empty;
        }

        cleared
    }

    pub fn count_active(&self) -> usize {
        self.cells.iter().filter(|c| c.is_active()).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.rows as usize {
            for cell in self.row(y) {
                write!(f, "{}", cell.to_char())?;
            }
            if y + 1 < self.rows as usize {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
