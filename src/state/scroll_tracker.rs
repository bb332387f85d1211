//! Scroll Tracker - Per-column vertical offset reconciliation
//!
//! Live scroll frames only update the tracked direction. The stored offset
//! moves when a gesture settles (drag released or momentum finished), and
//! only if the settle agrees with that direction:
//!
//! - scrolling down and settled at or below the stored offset
//! - scrolling up and settled at or above the stored offset
//!
//! Anything else is a stale momentum-end from an interrupted fling and is
//! dropped. Accepted settles request one board re-measurement for the column.

use log::debug;

use crate::board::BoardContext;
use crate::types::Column;

/// Outcome of a settle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settle {
    Accepted,
    Ignored,
}

/// Vertical scroll state of one column.
pub struct ScrollTracker {
    column: Column,
    ctx: BoardContext,
    scrolling_down: bool,
}

impl ScrollTracker {
    pub fn new(column: Column, ctx: BoardContext) -> Self {
        Self {
            column,
            ctx,
            scrolling_down: false,
        }
    }

    pub fn column(&self) -> &Column {
        &self.column
    }

    pub fn scrolling_down(&self) -> bool {
        self.scrolling_down
    }

    /// Record direction from a live scroll frame. Never touches the stored
    /// offset and never requests measurement.
    pub fn on_live_scroll(&mut self, offset_y: f32) {
        self.scrolling_down = offset_y > self.column.scroll_offset();
    }

    /// Reconcile a drag-end or momentum-end position.
    pub fn on_settle(&mut self, offset_y: f32) -> Settle {
        let stored = self.column.scroll_offset();
        let down_ended = self.scrolling_down && offset_y >= stored;
        let up_ended = !self.scrolling_down && offset_y <= stored;

        if !(down_ended || up_ended) {
            debug!(
                "column {}: ignoring settle at {} (stored {}, scrolling down: {})",
                self.column.id(),
                offset_y,
                stored,
                self.scrolling_down
            );
            return Settle::Ignored;
        }

        self.column.set_scroll_offset(offset_y);
        self.ctx.request_measure(Some(&self.column));
        Settle::Accepted
    }

    /// Record the card list's content height.
    pub fn on_content_size_change(&mut self, height: f32) {
        self.column.set_content_height(height);
    }
}
