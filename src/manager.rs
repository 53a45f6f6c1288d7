//! Anchor lifecycle: one board per detected plane.
//!
//! The host framework reports plane anchors from its main update callback;
//! everything here is synchronous and single-threaded. Boards are owned by
//! the manager and dropped when their anchor is removed.

use crate::board::{Board, PlaneAnchor};
use crate::text::TextMeasurer;
use anyhow::{Context, Result};
use std::collections::HashMap;

/// Owns one [`Board`] per plane anchor.
pub struct BoardManager<M: TextMeasurer> {
    measurer: M,
    boards: HashMap<u64, Board>,
}

impl<M: TextMeasurer> BoardManager<M> {
    /// Create a manager measuring text through `measurer`.
    pub fn new(measurer: M) -> Self {
        Self {
            measurer,
            boards: HashMap::new(),
        }
    }

    /// Host callback: a new plane was detected. Builds the sample board on
    /// it. Detecting the same anchor twice rebuilds in place.
    pub fn on_anchor_added(&mut self, anchor: &PlaneAnchor) -> Result<()> {
        let board = Board::sample(anchor, &self.measurer)
            .with_context(|| format!("building board for anchor {}", anchor.id))?;
        tracing::info!(anchor = anchor.id, "board attached to plane");
        self.boards.insert(anchor.id, board);
        Ok(())
    }

    /// Host callback: an anchor's geometry changed; rebuild its board.
    /// Unknown anchors are ignored with a warning.
    pub fn on_anchor_updated(&mut self, anchor: &PlaneAnchor) -> Result<()> {
        match self.boards.get_mut(&anchor.id) {
            Some(board) => {
                board
                    .rebuild(anchor, &self.measurer)
                    .with_context(|| format!("rebuilding board for anchor {}", anchor.id))?;
                tracing::debug!(anchor = anchor.id, "board rebuilt");
            }
            None => {
                tracing::warn!(anchor = anchor.id, "update for unknown anchor");
            }
        }
        Ok(())
    }

    /// Host callback: the anchor is gone; drop its board subtree.
    pub fn on_anchor_removed(&mut self, anchor_id: u64) {
        if self.boards.remove(&anchor_id).is_some() {
            tracing::info!(anchor = anchor_id, "board removed with plane");
        }
    }

    /// Board attached to `anchor_id`, if any.
    pub fn board(&self, anchor_id: u64) -> Option<&Board> {
        self.boards.get(&anchor_id)
    }

    /// Number of live boards.
    pub fn board_count(&self) -> usize {
        self.boards.len()
    }
}
