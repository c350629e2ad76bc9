//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play. It avoids widget/layout
//! libraries and renders into a simple framebuffer that is flushed to a
//! terminal backend.
//!
//! The engine never sees colors: [`Theme`] turns `(kind, variant)` tags into
//! RGB, and [`GameView`] turns a snapshot into styled glyphs.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod theme;

pub use tui_blockfit_core as core;
pub use tui_blockfit_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_rows_into, TerminalRenderer};
pub use theme::Theme;
