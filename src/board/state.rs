//! Board State and Context
//!
//! `BoardState` is the data set: ordered columns, the cards of each column,
//! and the moving-mode flag raised while a card is dragged.
//!
//! `BoardContext` is the shared reference every controller holds. It pairs
//! the board with its measurement bridge; controllers read the board freely
//! but request layout work only through [`BoardContext::request_measure`].

use std::cell::{Ref, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use spark_signals::{signal, Signal};

use super::bridge::MeasurementBridge;
use crate::error::{BoardError, Result};
use crate::types::{Card, Column};

// =============================================================================
// BOARD STATE
// =============================================================================

/// Columns and their cards.
pub struct BoardState {
    columns: Vec<Column>,
    column_cards: HashMap<String, Vec<Card>>,
    moving_mode: Signal<bool>,
}

impl BoardState {
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
            column_cards: HashMap::new(),
            moving_mode: signal(false),
        }
    }

    /// Append a column with its cards. Replaces the cards of an existing
    /// column with the same id but keeps the existing handle.
    pub fn add_column(&mut self, column: Column, cards: Vec<Card>) {
        let id = column.id().to_string();
        if self.column(&id).is_none() {
            self.columns.push(column);
        }
        self.column_cards.insert(id, cards);
    }

    /// Remove a column and its cards.
    pub fn remove_column(&mut self, id: &str) -> Result<Column> {
        let position = self
            .columns
            .iter()
            .position(|c| c.id() == id)
            .ok_or_else(|| BoardError::ColumnNotFound { id: id.to_string() })?;

        self.column_cards.remove(id);
        Ok(self.columns.remove(position))
    }

    pub fn set_cards(&mut self, id: &str, cards: Vec<Card>) -> Result<()> {
        if self.column(id).is_none() {
            return Err(BoardError::ColumnNotFound { id: id.to_string() });
        }
        self.column_cards.insert(id.to_string(), cards);
        Ok(())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id() == id)
    }

    pub fn column_index(&self, id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id() == id)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Cards of a column; empty for unknown ids.
    pub fn cards(&self, id: &str) -> &[Card] {
        self.column_cards
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Find a card and the id of the column holding it.
    pub fn find_card(&self, card_id: &str) -> Option<(&str, &Card)> {
        self.columns.iter().find_map(|column| {
            self.cards(column.id())
                .iter()
                .find(|card| card.id == card_id)
                .map(|card| (column.id(), card))
        })
    }

    pub fn moving_mode(&self) -> bool {
        self.moving_mode.get()
    }

    pub fn moving_mode_signal(&self) -> Signal<bool> {
        self.moving_mode.clone()
    }

    pub(crate) fn set_moving_mode(&self, moving: bool) {
        self.moving_mode.set(moving);
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// BOARD CONTEXT
// =============================================================================

struct ContextInner {
    board: RefCell<BoardState>,
    bridge: Rc<dyn MeasurementBridge>,
}

/// Shared handle to the board and its measurement bridge.
#[derive(Clone)]
pub struct BoardContext {
    inner: Rc<ContextInner>,
}

impl BoardContext {
    pub fn new(board: BoardState, bridge: Rc<dyn MeasurementBridge>) -> Self {
        Self {
            inner: Rc::new(ContextInner {
                board: RefCell::new(board),
                bridge,
            }),
        }
    }

    /// Borrow the board for reading.
    pub fn board(&self) -> Ref<'_, BoardState> {
        self.inner.board.borrow()
    }

    /// Mutate the data set (add/remove columns, replace cards).
    pub fn update_board<R>(&self, f: impl FnOnce(&mut BoardState) -> R) -> R {
        f(&mut *self.inner.board.borrow_mut())
    }

    pub fn bridge(&self) -> &Rc<dyn MeasurementBridge> {
        &self.inner.bridge
    }

    pub fn column_count(&self) -> usize {
        self.board().column_count()
    }

    /// Forward a re-validation request to the bridge.
    ///
    /// The board is borrowed for reading while the bridge runs; see
    /// [`MeasurementBridge`] for what a bridge may do with it.
    pub fn request_measure(&self, changed: Option<&Column>) {
        let board = self.board();
        self.inner.bridge.validate_and_measure_board(&board, changed);
    }
}
