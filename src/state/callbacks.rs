//! Host Callbacks
//!
//! Notifications the board sends back to the host. Every callback is
//! optional; an absent callback is a no-op.
//!
//! # Example
//!
//! ```ignore
//! use kanban_carousel::state::BoardCallbacks;
//!
//! let callbacks = BoardCallbacks {
//!     on_active_index_change: Some(Box::new(|index| println!("column {index}"))),
//!     ..Default::default()
//! };
//! ```

use crate::types::Card;

/// Callbacks fired by the board
#[derive(Default)]
pub struct BoardCallbacks {
    pub on_card_press: Option<Box<dyn Fn(&Card)>>,
    pub on_long_press: Option<Box<dyn Fn(&Card)>>,
    pub on_active_index_change: Option<Box<dyn Fn(usize)>>,
    pub on_scroll_end_drag: Option<Box<dyn Fn()>>,
}

impl BoardCallbacks {
    pub(crate) fn card_pressed(&self, card: &Card) {
        if let Some(ref cb) = self.on_card_press {
            cb(card);
        }
    }

    pub(crate) fn long_pressed(&self, card: &Card) {
        if let Some(ref cb) = self.on_long_press {
            cb(card);
        }
    }

    pub(crate) fn active_index_changed(&self, index: usize) {
        if let Some(ref cb) = self.on_active_index_change {
            cb(index);
        }
    }

    pub(crate) fn scroll_end_drag(&self) {
        if let Some(ref cb) = self.on_scroll_end_drag {
            cb();
        }
    }
}

impl std::fmt::Debug for BoardCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardCallbacks")
            .field("on_card_press", &self.on_card_press.is_some())
            .field("on_long_press", &self.on_long_press.is_some())
            .field("on_active_index_change", &self.on_active_index_change.is_some())
            .field("on_scroll_end_drag", &self.on_scroll_end_drag.is_some())
            .finish()
    }
}
