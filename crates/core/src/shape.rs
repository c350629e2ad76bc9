//! Shape catalog - piece geometry and clockwise rotation
//!
//! Every piece is a small rectangular matrix of [`Cell`] values. Active cells
//! carry the piece's `(kind, variant)` paint tag; the rest are `Empty`.
//! Geometry is looked up in a registry keyed by [`PieceKind`], so new kinds or
//! stages never touch control flow.
//!
//! Shapes are stored inline (at most 16 cells) to keep cloning cheap.

use arrayvec::ArrayVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{Cell, PieceKind, Variant};

/// Largest matrix a shape may occupy (4 x 4)
pub const MAX_SHAPE_CELLS: usize = 16;

/// Spawn-orientation geometry, `X` marks an active cell.
///
/// Indexed in [`PieceKind::ALL`] order.
const GEOMETRY: [(PieceKind, &[&str]); 7] = [
    (PieceKind::I, &["XXXX"]),
    (PieceKind::O, &["XX", "XX"]),
    (PieceKind::T, &["XXX", ".X."]),
    (PieceKind::L, &["..X", "XXX"]),
    (PieceKind::J, &["X..", "XXX"]),
    (PieceKind::S, &[".XX", "XX."]),
    (PieceKind::Z, &["XX.", ".XX"]),
];

/// Spawn-orientation pattern for a piece kind
pub fn pattern(kind: PieceKind) -> &'static [&'static str] {
    GEOMETRY[kind as usize].1
}

/// Immutable piece matrix (row-major)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: ArrayVec<Cell, MAX_SHAPE_CELLS>,
}

impl Shape {
    /// Canonical spawn-orientation shape for `kind`, painted with `variant`
    pub fn new(kind: PieceKind, variant: Variant) -> Self {
        let rows = pattern(kind);
        let mut cells = ArrayVec::new();
        for row in rows {
            for ch in row.chars() {
                cells.push(if ch == 'X' {
                    Cell::Piece(kind, variant)
                } else {
                    Cell::Empty
                });
            }
        }
        Self {
            rows: rows.len() as u8,
            cols: rows[0].len() as u8,
            cells,
        }
    }

    /// Build a shape from row-major cells.
    ///
    /// Returns `None` for an empty matrix, a length mismatch, or more than
    /// [`MAX_SHAPE_CELLS`] cells.
    pub fn from_cells(rows: u8, cols: u8, cells: &[Cell]) -> Option<Self> {
        let len = rows as usize * cols as usize;
        if len == 0 || len > MAX_SHAPE_CELLS || cells.len() != len {
            return None;
        }
        let mut out = ArrayVec::new();
        out.try_extend_from_slice(cells).ok()?;
        Some(Self {
            rows,
            cols,
            cells: out,
        })
    }

    /// Parse a shape from literal rows (same letters as stage boards)
    ///
    /// ```
    /// use tui_blockfit_core::Shape;
    /// use tui_blockfit_core::types::{PieceKind, Variant};
    ///
    /// let t = Shape::parse(&["TTT", ".T."]).unwrap();
    /// assert_eq!(t, Shape::new(PieceKind::T, Variant::Normal));
    /// ```
    pub fn parse(rows: &[&str]) -> Option<Self> {
        let cols = rows.first()?.chars().count();
        let mut cells: ArrayVec<Cell, MAX_SHAPE_CELLS> = ArrayVec::new();
        for row in rows {
            if row.chars().count() != cols {
                return None;
            }
            for ch in row.chars() {
                cells.try_push(Cell::from_char(ch)?).ok()?;
            }
        }
        Self::from_cells(rows.len() as u8, cols as u8, &cells)
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Cell at `(x, y)` inside the matrix, `Empty` outside it
    pub fn get(&self, x: u8, y: u8) -> Cell {
        if x >= self.cols || y >= self.rows {
            return Cell::Empty;
        }
        self.cells[y as usize * self.cols as usize + x as usize]
    }

    /// Row-major view of every cell
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate `(x, y, cell)` over active cells only
    pub fn active_cells(&self) -> impl Iterator<Item = (u8, u8, Cell)> + '_ {
        let cols = self.cols as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| is_active_cell(**cell))
            .map(move |(i, cell)| ((i % cols) as u8, (i / cols) as u8, *cell))
    }

    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|c| is_active_cell(**c)).count()
    }

    /// Paint value of the first active cell
    pub fn paint(&self) -> Option<Cell> {
        self.cells.iter().copied().find(|c| is_active_cell(*c))
    }

    pub fn kind(&self) -> Option<PieceKind> {
        match self.paint()? {
            Cell::Piece(kind, _) => Some(kind),
            _ => None,
        }
    }

    pub fn variant(&self) -> Option<Variant> {
        match self.paint()? {
            Cell::Piece(_, variant) => Some(variant),
            _ => None,
        }
    }
}

/// Rotate a shape 90° clockwise.
///
/// Reverses the row order and transposes, so the result is `cols x rows`.
/// Cell values move but never change; four rotations give back the input.
pub fn rotate_clockwise(shape: &Shape) -> Shape {
    let rows = shape.rows as usize;
    let cols = shape.cols as usize;
    let mut cells = ArrayVec::new();
    // new[r][c] = old[rows - 1 - c][r]
    for r in 0..cols {
        for c in 0..rows {
            cells.push(shape.cells[(rows - 1 - c) * cols + r]);
        }
    }
    Shape {
        rows: shape.cols,
        cols: shape.rows,
        cells,
    }
}

/// True for any piece cell, false for `Empty` and `Disabled`
#[inline]
pub fn is_active_cell(cell: Cell) -> bool {
    cell.is_active()
}

/// The 14 canonical shapes: every kind in both variants
pub fn canonical_shapes() -> impl Iterator<Item = Shape> {
    PieceKind::ALL.into_iter().flat_map(|kind| {
        [Variant::Normal, Variant::Highlighted]
            .into_iter()
            .map(move |variant| Shape::new(kind, variant))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_order_matches_kind_discriminants() {
        for kind in PieceKind::ALL {
            assert_eq!(GEOMETRY[kind as usize].0, kind);
        }
    }

    #[test]
    fn every_kind_has_four_cells() {
        for shape in canonical_shapes() {
            assert_eq!(shape.active_count(), 4, "{:?}", shape.kind());
        }
        assert_eq!(canonical_shapes().count(), 14);
    }

    #[test]
    fn rotate_t_points_left() {
        let t = Shape::new(PieceKind::T, Variant::Normal);
        let rotated = rotate_clockwise(&t);
        assert_eq!(rotated, Shape::parse(&[".T", "TT", ".T"]).unwrap());
    }

    #[test]
    fn rotate_i_becomes_vertical() {
        let i = Shape::new(PieceKind::I, Variant::Highlighted);
        let rotated = rotate_clockwise(&i);
        assert_eq!((rotated.rows(), rotated.cols()), (4, 1));
        assert!(rotated.cells().iter().all(|c| *c == Cell::Piece(PieceKind::I, Variant::Highlighted)));
    }

    #[test]
    fn from_cells_rejects_bad_sizes() {
        assert!(Shape::from_cells(0, 3, &[]).is_none());
        assert!(Shape::from_cells(2, 2, &[Cell::Empty; 3]).is_none());
        assert!(Shape::from_cells(5, 4, &[Cell::Empty; 20]).is_none());
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        assert!(Shape::parse(&["TT", "T"]).is_none());
        assert!(Shape::parse(&[]).is_none());
    }

    #[test]
    fn active_cells_report_coordinates() {
        let s = Shape::new(PieceKind::S, Variant::Normal);
        let coords: Vec<(u8, u8)> = s.active_cells().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(coords, vec![(1, 0), (2, 0), (0, 1), (1, 1)]);
    }
}
