//! Core puzzle logic - pure, deterministic, and testable
//!
//! This crate holds every rule of the block-fitting puzzle. It has no
//! dependency on the terminal or on input handling, so the same engine can be
//! driven by the TUI, by tests, or headless.
//!
//! # Module Structure
//!
//! - [`shape`]: piece geometry registry and clockwise rotation
//! - [`grid`]: the board, overlap tests, landing search and row clearing
//! - [`queue`]: the finite piece sequence of a stage
//! - [`stage`]: stage templates, validation and the catalog
//! - [`game_state`]: the controller that applies player commands
//! - [`snapshot`]: read-only view handed to the presentation layer
//!
//! # Rules
//!
//! - Pieces spawn on the top row, horizontally centered
//! - The player shifts and rotates the piece, then hard-drops it; there is no
//!   gravity and no timer
//! - Rows left with no empty cell and at least one piece cell are removed
//! - When the piece list runs out the stage is cleared if no piece cell is
//!   left on the board, and failed otherwise
//!
//! # Example
//!
//! ```
//! use tui_blockfit_core::{GameConfig, GameState, StageCatalog, StageTemplate};
//! use tui_blockfit_core::types::{Command, StageStatus};
//!
//! let catalog = StageCatalog::new(
//!     vec![StageTemplate { name: "demo", board: &["..", ".."], pieces: "O" }],
//!     2,
//!     2,
//! );
//! let mut game = GameState::new(catalog, GameConfig::default(), 0).unwrap();
//!
//! assert!(game.apply_action(Command::HardDrop));
//! assert_eq!(game.status(), StageStatus::StageClear);
//! ```

pub mod game_state;
pub mod grid;
pub mod queue;
pub mod shape;
pub mod snapshot;
pub mod stage;
mod stages;

pub use tui_blockfit_types as types;

// Re-export commonly used types for convenience
pub use game_state::{spawn_x, Cursor, DropPreview, GameConfig, GameState};
pub use grid::Grid;
pub use queue::PieceQueue;
pub use shape::{canonical_shapes, is_active_cell, rotate_clockwise, Shape};
pub use snapshot::GameSnapshot;
pub use stage::{Stage, StageCatalog, StageError, StageTemplate};
