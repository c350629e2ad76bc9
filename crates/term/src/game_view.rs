//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Shape};
use crate::fb::{CellStyle, FrameBuffer, Glyph};
use crate::theme::Theme;
use crate::types::StageStatus;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders the board, the drop preview, the cursor piece and a side panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    theme: Theme,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

/// Top-left corner of the board frame in terminal coordinates
#[derive(Debug, Clone, Copy)]
struct Origin {
    x: u16,
    y: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            theme: Theme::default(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Frame size (board plus border) in terminal cells
    pub fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        (
            snap.cols as u16 * self.cell_w + 2,
            snap.rows as u16 * self.cell_h + 2,
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is resized to the
    /// viewport when needed.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::new(' ', CellStyle::new(self.theme.foreground, self.theme.background)));

        let (frame_w, frame_h) = self.frame_size(snap);
        let origin = Origin {
            x: viewport.width.saturating_sub(frame_w + PANEL_W) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
        };

        self.draw_border(fb, origin, frame_w, frame_h);

        for y in 0..snap.rows as i8 {
            for x in 0..snap.cols as i8 {
                if let Some(cell) = snap.cell(x, y) {
                    let (ch, style) = self.theme.cell(cell);
                    self.fill_board_cell(fb, origin, x, y, ch, style);
                }
            }
        }

        if let (Some(cursor), Some(ghost)) = (&snap.cursor, snap.ghost) {
            // The preview sits under the cursor when the piece is already resting.
            for (dx, dy, cell) in cursor.shape.active_cells() {
                let (ch, style) = self.theme.ghost(cell);
                self.fill_board_cell(fb, origin, ghost.x + dx as i8, ghost.y + dy as i8, ch, style);
            }
        }

        if let Some(cursor) = &snap.cursor {
            for (dx, dy, cell) in cursor.shape.active_cells() {
                let (ch, style) = self.theme.cell(cell);
                self.fill_board_cell(
                    fb,
                    origin,
                    cursor.x + dx as i8,
                    cursor.y + dy as i8,
                    ch,
                    style.bold(),
                );
            }
        }

        self.draw_side_panel(fb, snap, viewport, origin, frame_w);

        match snap.status {
            StageStatus::Playing => {}
            StageStatus::StageClear => {
                let hint = if snap.stage_index + 1 < snap.stage_count {
                    "n: next  r: replay"
                } else {
                    "r: replay"
                };
                self.draw_overlay_text(fb, origin, frame_w, frame_h, "STAGE CLEAR", hint);
            }
            StageStatus::StageFailed => {
                self.draw_overlay_text(fb, origin, frame_w, frame_h, "STAGE FAILED", "r: retry");
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, origin: Origin, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let style = self.theme.frame();
        let Origin { x, y } = origin;

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        origin: Origin,
        x: i8,
        y: i8,
        ch: char,
        style: CellStyle,
    ) {
        if x < 0 || y < 0 {
            return;
        }
        let px = origin.x + 1 + x as u16 * self.cell_w;
        let py = origin.y + 1 + y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    /// Small shape drawing used by the NEXT list
    fn draw_mini_shape(&self, fb: &mut FrameBuffer, x: u16, y: u16, shape: &Shape) {
        for (dx, dy, cell) in shape.active_cells() {
            let (ch, style) = self.theme.cell(cell);
            let style = CellStyle {
                bg: self.theme.background,
                ..style
            };
            fb.fill_rect(x + dx as u16 * 2, y + dy as u16, 2, 1, ch, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        origin: Origin,
        frame_w: u16,
    ) {
        let panel_x = origin.x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = self.theme.label();
        let value = self.theme.text();
        let muted = CellStyle::new(self.theme.muted, self.theme.background);

        let mut y = origin.y;
        fb.put_str(panel_x, y, "STAGE", label);
        fb.put_number(panel_x + 6, y, snap.stage_index + 1, label);
        y += 1;
        fb.put_str(panel_x, y, &snap.stage_name, muted);
        y += 2;

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        if snap.preview.is_empty() {
            fb.put_str(panel_x, y, "-", muted);
            y += 2;
        }
        for shape in &snap.preview {
            if y >= viewport.height {
                break;
            }
            self.draw_mini_shape(fb, panel_x, y, shape);
            y += shape.rows() as u16 + 1;
        }

        y += 1;
        fb.put_str(panel_x, y, "LEFT", label);
        fb.put_number(panel_x + 7, y, snap.remaining, value);
        y += 1;
        fb.put_str(panel_x, y, "PLACED", label);
        fb.put_number(panel_x + 7, y, snap.pieces_placed as usize, value);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        origin: Origin,
        frame_w: u16,
        frame_h: u16,
        title: &str,
        hint: &str,
    ) {
        let mid_y = origin.y.saturating_add(frame_h / 2);
        for (dy, text, style) in [
            (0, title, self.theme.label()),
            (1, hint, CellStyle::new(self.theme.muted, self.theme.background)),
        ] {
            let text_w = text.chars().count() as u16;
            let x = origin.x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            fb.put_str(x, mid_y + dy, text, style);
        }
    }
}

/// Columns reserved right of the board for the side panel
const PANEL_W: u16 = 14;
