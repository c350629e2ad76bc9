//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`]. The puzzle has
//! no timing rules, so there is no key-repeat handling: one key press is one
//! command.

pub mod map;

pub use tui_blockfit_types as types;

pub use map::{map_key, should_quit, wants_next_stage};
