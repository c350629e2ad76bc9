//! Piece queue - the finite, ordered sequence of upcoming pieces
//!
//! A stage seeds the queue with its full piece list. Pieces are consumed from
//! the front and the queue is never refilled, so its length only decreases.

use std::collections::VecDeque;

use crate::shape::Shape;

/// Upcoming pieces for the current stage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PieceQueue {
    pieces: VecDeque<Shape>,
}

impl PieceQueue {
    /// Create a queue holding `pieces` in order
    pub fn new(pieces: impl IntoIterator<Item = Shape>) -> Self {
        Self {
            pieces: pieces.into_iter().collect(),
        }
    }

    /// Remove and return the next piece, `None` once exhausted
    pub fn pop_front(&mut self) -> Option<Shape> {
        self.pieces.pop_front()
    }

    /// Peek at the next piece without removing it
    pub fn peek(&self) -> Option<&Shape> {
        self.pieces.front()
    }

    pub fn remaining_count(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// The next `window` pieces (fewer when the queue is shorter)
    pub fn preview(&self, window: usize) -> impl Iterator<Item = &Shape> + '_ {
        self.pieces.iter().take(window)
    }
}
