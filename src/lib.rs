//! TUI block-fit puzzle (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_blockfit::{core,input,term,types}`
//! while the implementation lives in dedicated crates under `crates/`.

pub use tui_blockfit_core as core;
pub use tui_blockfit_input as input;
pub use tui_blockfit_term as term;
pub use tui_blockfit_types as types;
