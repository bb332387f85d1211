//! Card Interactions - press, long press, drag lifecycle
//!
//! The gesture recognizer lives in the host; this module receives the
//! discrete notifications. A long press starts a drag (unless dragging is
//! disabled), which puts the board in moving mode: the dragged card is
//! hidden and column lists stop scrolling. Finishing the drag leaves moving
//! mode and asks for one whole-board re-measurement, since card positions
//! may have changed.

use std::rc::Rc;

use log::debug;

use super::callbacks::BoardCallbacks;
use crate::board::BoardContext;

pub struct CardController {
    ctx: BoardContext,
    callbacks: Rc<BoardCallbacks>,
    disable_drag: bool,
    dragged: Option<String>,
}

impl CardController {
    pub fn new(ctx: BoardContext, callbacks: Rc<BoardCallbacks>, disable_drag: bool) -> Self {
        Self {
            ctx,
            callbacks,
            disable_drag,
            dragged: None,
        }
    }

    pub fn set_disable_drag(&mut self, disable_drag: bool) {
        self.disable_drag = disable_drag;
    }

    /// Forward a tap. Returns `false` for unknown cards.
    ///
    /// The board is released before the callback runs, so the host may
    /// edit it from there.
    pub fn press(&self, card_id: &str) -> bool {
        let card = match self.ctx.board().find_card(card_id) {
            Some((_, card)) => card.clone(),
            None => {
                debug!("press on unknown card {card_id}");
                return false;
            }
        };

        self.callbacks.card_pressed(&card);
        true
    }

    /// Start a drag. Returns `true` if the drag began.
    pub fn long_press(&mut self, card_id: &str) -> bool {
        if self.disable_drag || self.dragged.is_some() {
            return false;
        }

        let card = {
            let board = self.ctx.board();
            match board.find_card(card_id) {
                Some((_, card)) => card.clone(),
                None => {
                    debug!("long press on unknown card {card_id}");
                    return false;
                }
            }
        };

        self.dragged = Some(card.id.clone());
        self.ctx.board().set_moving_mode(true);
        self.callbacks.long_pressed(&card);
        true
    }

    pub fn dragged_card(&self) -> Option<&str> {
        self.dragged.as_deref()
    }

    /// The dragged card is drawn by the drag overlay, not in its column.
    pub fn is_hidden(&self, card_id: &str) -> bool {
        self.dragged.as_deref() == Some(card_id)
    }

    /// End the current drag, if any. Returns `true` if one was active.
    pub fn finish_drag(&mut self) -> bool {
        if self.dragged.take().is_none() {
            return false;
        }

        self.ctx.board().set_moving_mode(false);
        self.ctx.request_measure(None);
        true
    }
}
