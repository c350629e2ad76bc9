//! Color theme: the flat-UI palette keyed by board cell.
//!
//! The engine only knows `(kind, variant)` tags; every color decision lives
//! here.

use crate::fb::{CellStyle, Rgb};
use crate::types::{Cell, PieceKind, Variant};

pub const TURQUOISE: Rgb = Rgb::new(26, 188, 156);
pub const GREEN_SEA: Rgb = Rgb::new(22, 160, 133);
pub const EMERALD: Rgb = Rgb::new(46, 204, 113);
pub const NEPHRITIS: Rgb = Rgb::new(39, 174, 96);
pub const PETER_RIVER: Rgb = Rgb::new(52, 152, 219);
pub const BELIZE_HOLE: Rgb = Rgb::new(41, 128, 185);
pub const AMETHYST: Rgb = Rgb::new(155, 89, 182);
pub const WISTERIA: Rgb = Rgb::new(142, 68, 173);
pub const SUN_FLOWER: Rgb = Rgb::new(241, 196, 15);
pub const ORANGE: Rgb = Rgb::new(243, 156, 18);
pub const CARROT: Rgb = Rgb::new(230, 126, 34);
pub const PUMPKIN: Rgb = Rgb::new(211, 84, 0);
pub const ALIZARIN: Rgb = Rgb::new(231, 76, 60);
pub const POMEGRANATE: Rgb = Rgb::new(192, 57, 43);
pub const WET_ASPHALT: Rgb = Rgb::new(52, 73, 94);
pub const MIDNIGHT_BLUE: Rgb = Rgb::new(44, 62, 80);
pub const CLOUDS: Rgb = Rgb::new(236, 240, 241);
pub const SILVER: Rgb = Rgb::new(189, 195, 199);
pub const CONCRETE: Rgb = Rgb::new(149, 165, 166);
pub const ASBESTOS: Rgb = Rgb::new(127, 140, 141);

/// Colors and glyphs used by the game view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgb,
    pub board: Rgb,
    pub foreground: Rgb,
    pub muted: Rgb,
    pub disabled: Rgb,
    pub border: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: MIDNIGHT_BLUE,
            board: WET_ASPHALT,
            foreground: CLOUDS,
            muted: CONCRETE,
            disabled: ASBESTOS,
            border: SILVER,
        }
    }
}

impl Theme {
    /// Color for a piece kind in a given variant
    pub fn piece(&self, kind: PieceKind, variant: Variant) -> Rgb {
        match (kind, variant) {
            (PieceKind::I, Variant::Normal) => TURQUOISE,
            (PieceKind::O, Variant::Normal) => EMERALD,
            (PieceKind::T, Variant::Normal) => PETER_RIVER,
            (PieceKind::L, Variant::Normal) => AMETHYST,
            (PieceKind::J, Variant::Normal) => SUN_FLOWER,
            (PieceKind::S, Variant::Normal) => CARROT,
            (PieceKind::Z, Variant::Normal) => ALIZARIN,
            (PieceKind::I, Variant::Highlighted) => GREEN_SEA,
            (PieceKind::O, Variant::Highlighted) => NEPHRITIS,
            (PieceKind::T, Variant::Highlighted) => BELIZE_HOLE,
            (PieceKind::L, Variant::Highlighted) => WISTERIA,
            (PieceKind::J, Variant::Highlighted) => ORANGE,
            (PieceKind::S, Variant::Highlighted) => PUMPKIN,
            (PieceKind::Z, Variant::Highlighted) => POMEGRANATE,
        }
    }

    /// Glyph and style for a board cell
    pub fn cell(&self, cell: Cell) -> (char, CellStyle) {
        match cell {
            Cell::Empty => ('·', CellStyle::new(self.muted, self.board).dim()),
            Cell::Disabled => ('▓', CellStyle::new(self.disabled, self.board)),
            Cell::Piece(kind, variant) => ('█', CellStyle::new(self.piece(kind, variant), self.board)),
        }
    }

    /// Glyph and style for the drop preview of `paint`
    pub fn ghost(&self, paint: Cell) -> (char, CellStyle) {
        let fg = match paint {
            Cell::Piece(kind, variant) => self.piece(kind, variant),
            _ => self.muted,
        };
        ('░', CellStyle::new(fg, self.board).dim())
    }

    pub fn text(&self) -> CellStyle {
        CellStyle::new(self.foreground, self.background)
    }

    pub fn label(&self) -> CellStyle {
        self.text().bold()
    }

    pub fn frame(&self) -> CellStyle {
        CellStyle::new(self.border, self.background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_use_distinct_colors() {
        let theme = Theme::default();
        for kind in PieceKind::ALL {
            assert_ne!(
                theme.piece(kind, Variant::Normal),
                theme.piece(kind, Variant::Highlighted)
            );
        }
    }

    #[test]
    fn cell_glyphs() {
        let theme = Theme::default();
        assert_eq!(theme.cell(Cell::Empty).0, '·');
        assert_eq!(theme.cell(Cell::Disabled).0, '▓');
        let (ch, style) = theme.cell(Cell::Piece(PieceKind::Z, Variant::Normal));
        assert_eq!((ch, style.fg), ('█', ALIZARIN));
    }
}
