//! Game state module - the per-stage controller
//!
//! This module ties together the grid, the piece queue and the stage catalog.
//! It owns the cursor piece and its drop preview, applies player commands and
//! decides when a stage is cleared or failed.
//!
//! Rejected moves are not errors: every command returns `false` when it did
//! not change anything.

use crate::grid::Grid;
use crate::queue::PieceQueue;
use crate::shape::{rotate_clockwise, Shape};
use crate::snapshot::GameSnapshot;
use crate::stage::{Stage, StageCatalog, StageError};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Pending events kept when nobody drains them; older ones are dropped
pub const MAX_PENDING_EVENTS: usize = 64;

/// Runtime options for a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Upcoming pieces exposed in snapshots
    pub preview_size: usize,
    /// Hard drop with no legal landing
    pub blocked_drop: BlockedDropPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            preview_size: PREVIEW_SIZE,
            blocked_drop: BlockedDropPolicy::Ignore,
        }
    }
}

/// Piece under player control
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Cursor {
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

/// Where the cursor would land if dropped now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DropPreview {
    pub x: i8,
    pub y: i8,
}

/// Spawn column: centered, never left of the board
pub fn spawn_x(board_cols: u8, shape_cols: u8) -> i8 {
    (board_cols as i16 / 2 - shape_cols as i16 / 2).max(0) as i8
}

/// Complete state of one stage being played
#[derive(Debug, Clone)]
pub struct GameState {
    catalog: StageCatalog,
    config: GameConfig,
    /// Template of the loaded stage; `reset` reseeds from it
    stage: Stage,
    grid: Grid,
    queue: PieceQueue,
    cursor: Option<Cursor>,
    ghost: Option<DropPreview>,
    status: StageStatus,
    pieces_placed: u32,
    /// Monotonic counter, bumped on every state change
    revision: u64,
    /// Presentation clock; no effect on gameplay
    elapsed_ms: u64,
    /// Pending notifications (drained by the presentation layer)
    events: Vec<GameEvent>,
}

impl GameState {
    /// Load stage `stage_index` from `catalog` and spawn its first piece
    pub fn new(
        catalog: StageCatalog,
        config: GameConfig,
        stage_index: usize,
    ) -> Result<Self, StageError> {
        let stage = catalog.load(stage_index)?;
        let mut state = Self {
            catalog,
            config,
            grid: stage.grid().clone(),
            stage,
            queue: PieceQueue::default(),
            cursor: None,
            ghost: None,
            status: StageStatus::Playing,
            pieces_placed: 0,
            revision: 0,
            elapsed_ms: 0,
            events: Vec::new(),
        };
        state.begin_stage();
        Ok(state)
    }

    /// Built-in stages with default options
    pub fn with_builtin_stages(stage_index: usize) -> Result<Self, StageError> {
        Self::new(StageCatalog::builtin(), GameConfig::default(), stage_index)
    }

    fn begin_stage(&mut self) {
        self.grid = self.stage.grid().clone();
        self.queue = PieceQueue::new(self.stage.pieces().iter().cloned());
        self.status = StageStatus::Playing;
        self.pieces_placed = 0;
        self.cursor = None;
        self.ghost = None;
        self.events.clear();
        self.push_event(GameEvent::StageLoaded {
            stage_index: self.stage.index(),
        });
        self.next_piece();
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn cursor(&self) -> Option<&Cursor> {
        self.cursor.as_ref()
    }

    pub fn ghost(&self) -> Option<DropPreview> {
        self.ghost
    }

    pub fn status(&self) -> StageStatus {
        self.status
    }

    pub fn stage_index(&self) -> usize {
        self.stage.index()
    }

    pub fn stage_name(&self) -> &'static str {
        self.stage.name()
    }

    pub fn stage_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn remaining_count(&self) -> usize {
        self.queue.remaining_count()
    }

    /// Upcoming pieces within the configured preview window
    pub fn preview(&self) -> impl Iterator<Item = &Shape> + '_ {
        self.queue.preview(self.config.preview_size)
    }

    pub fn pieces_placed(&self) -> u32 {
        self.pieces_placed
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Take all pending notifications, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Take the most recent notification, dropping older ones
    pub fn take_last_event(&mut self) -> Option<GameEvent> {
        let last = self.events.pop();
        self.events.clear();
        last
    }

    fn push_event(&mut self, event: GameEvent) {
        self.revision = self.revision.wrapping_add(1);
        if self.events.len() == MAX_PENDING_EVENTS {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    /// Pop the next queued piece into the cursor. False when exhausted.
    fn next_piece(&mut self) -> bool {
        let Some(shape) = self.queue.pop_front() else {
            return false;
        };
        let x = spawn_x(self.grid.cols(), shape.cols());
        log::debug!(
            "spawn {:?} at x={} ({} left)",
            shape.kind(),
            x,
            self.queue.remaining_count()
        );
        self.cursor = Some(Cursor {
            shape,
            x,
            y: SPAWN_ROW,
        });
        self.refresh_ghost();
        self.push_event(GameEvent::PieceSpawned { x });
        true
    }

    fn refresh_ghost(&mut self) {
        self.ghost = self.cursor.as_ref().and_then(|c| {
            self.grid
                .find_landing_row(&c.shape, c.x, c.y)
                .map(|y| DropPreview { x: c.x, y })
        });
    }

    fn max_x(&self, shape: &Shape) -> i16 {
        self.grid.cols() as i16 - shape.cols() as i16
    }

    /// Shift the cursor horizontally, clamped to the board
    pub fn move_by(&mut self, delta_x: i8) -> bool {
        if self.status != StageStatus::Playing {
            return false;
        }
        let Some(cursor) = self.cursor.as_ref() else {
            return false;
        };

        let max_x = self.max_x(&cursor.shape);
        if max_x < 0 {
            return false;
        }
        let next_x = (cursor.x as i16 + delta_x as i16).clamp(0, max_x) as i8;
        if next_x == cursor.x {
            return false;
        }
        if self.grid.overlaps(&cursor.shape, next_x, cursor.y) {
            log::trace!("move to x={} rejected: overlap", next_x);
            return false;
        }

        if let Some(cursor) = self.cursor.as_mut() {
            cursor.x = next_x;
        }
        self.refresh_ghost();
        self.push_event(GameEvent::CursorMoved { x: next_x });
        true
    }

    /// Rotate the cursor clockwise.
    ///
    /// If the rotated shape would stick out on the right it is pulled left just
    /// enough to fit. No other offsets are tried.
    pub fn rotate(&mut self) -> bool {
        if self.status != StageStatus::Playing {
            return false;
        }
        let Some(cursor) = self.cursor.as_ref() else {
            return false;
        };

        let rotated = rotate_clockwise(&cursor.shape);
        let max_x = self.max_x(&rotated);
        if max_x < 0 {
            return false;
        }
        let x = (cursor.x as i16).min(max_x) as i8;
        let y = cursor.y;
        if !self.grid.fits_fully_inside(&rotated, x, y) || self.grid.overlaps(&rotated, x, y) {
            log::trace!("rotation at x={} rejected", x);
            return false;
        }

        self.cursor = Some(Cursor { shape: rotated, x, y });
        self.refresh_ghost();
        self.push_event(GameEvent::CursorRotated { x });
        true
    }

    /// Commit the cursor at its drop preview.
    ///
    /// Completed rows are removed, then the next piece spawns. When the queue
    /// is exhausted the stage ends: cleared if no piece cell is left on the
    /// board, failed otherwise.
    pub fn hard_drop(&mut self) -> bool {
        if self.status != StageStatus::Playing {
            return false;
        }
        let Some(cursor) = self.cursor.as_ref() else {
            return false;
        };

        let Some(landing) = self.ghost else {
            return match self.config.blocked_drop {
                BlockedDropPolicy::Ignore => {
                    log::trace!("hard drop ignored: no landing from x={}", cursor.x);
                    false
                }
                BlockedDropPolicy::FailStage => {
                    self.finish(StageStatus::StageFailed);
                    true
                }
            };
        };

        let shape = cursor.shape.clone();
        self.grid.commit(&shape, landing.x, landing.y);
        let cleared = self.grid.clear_completed_rows();
        self.pieces_placed += 1;
        self.cursor = None;
        self.ghost = None;

        log::debug!(
            "committed {:?} at ({}, {}), cleared rows {:?}",
            shape.kind(),
            landing.x,
            landing.y,
            cleared
        );
        self.push_event(GameEvent::PieceCommitted {
            x: landing.x,
            y: landing.y,
            rows_cleared: cleared.len() as u8,
        });

        if !self.next_piece() {
            let outcome = if self.grid.has_any_active_cell() {
                StageStatus::StageFailed
            } else {
                StageStatus::StageClear
            };
            self.finish(outcome);
        }
        true
    }

    fn finish(&mut self, status: StageStatus) {
        self.status = status;
        self.cursor = None;
        self.ghost = None;
        log::info!(
            "stage {} ended: {:?} after {} pieces",
            self.stage.index(),
            status,
            self.pieces_placed
        );
        self.push_event(match status {
            StageStatus::StageClear => GameEvent::StageCleared,
            _ => GameEvent::StageFailed,
        });
    }

    /// Reload the current stage from its template
    pub fn reset(&mut self) {
        log::info!("resetting stage {}", self.stage.index());
        self.begin_stage();
    }

    /// Load another stage from the catalog.
    ///
    /// On error the current stage keeps running untouched.
    pub fn select_stage(&mut self, index: usize) -> Result<(), StageError> {
        self.stage = self.catalog.load(index)?;
        self.begin_stage();
        Ok(())
    }

    /// Move on to the next catalog stage. False when this is the last one.
    pub fn advance_stage(&mut self) -> Result<bool, StageError> {
        let next = self.stage.index() + 1;
        if next >= self.catalog.len() {
            return Ok(false);
        }
        self.select_stage(next)?;
        Ok(true)
    }

    /// Apply a player command
    pub fn apply_action(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_by(-1),
            Command::MoveRight => self.move_by(1),
            Command::Rotate => self.rotate(),
            Command::HardDrop => self.hard_drop(),
            Command::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Advance the presentation clock
    pub fn tick(&mut self, elapsed_ms: u32) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms as u64);
    }

    /// Fill `out`, reusing its buffers
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.grid.rows();
        out.cols = self.grid.cols();
        out.board.clear();
        out.board.extend_from_slice(self.grid.cells());
        out.cursor = self.cursor.clone();
        out.ghost = self.ghost;
        out.preview.clear();
        out.preview.extend(self.preview().cloned());
        out.remaining = self.queue.remaining_count();
        out.stage_index = self.stage.index();
        out.stage_count = self.catalog.len();
        out.stage_name.clear();
        out.stage_name.push_str(self.stage.name());
        out.status = self.status;
        out.pieces_placed = self.pieces_placed;
        out.revision = self.revision;
        out.elapsed_ms = self.elapsed_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
