//! Board Measurement Bridge
//!
//! The narrow interface through which scroll and layout controllers ask for
//! a board-wide re-validation. Requests are fire-and-forget; coalescing is
//! the bridge's job, never the caller's.
//!
//! [`CoalescingBridge`] is the bundled implementation:
//! - requests only mark dirty flags and remember the changed columns
//! - the host calls [`CoalescingBridge::flush`] once per event-loop turn
//! - a flush with pending work runs one taffy pass and bumps the layout
//!   generation signal; a flush without pending work does nothing

use std::cell::RefCell;

use log::trace;
use spark_signals::{signal, Signal};

use super::state::BoardState;
use crate::config::BoardConfig;
use crate::layout::{measure_board, BoardLayout};
use crate::types::Column;

// =============================================================================
// BRIDGE CONTRACT
// =============================================================================

/// Receiver of board re-validation requests.
///
/// The board stays borrowed for the duration of each call. Implementations
/// may read it, directly or through a `BoardContext`, but must not call
/// `BoardContext::update_board` from inside a request; record the work and
/// do it after the event returns, as [`CoalescingBridge`] does.
pub trait MeasurementBridge {
    /// Request a re-measurement of the whole board. `changed` names the
    /// column that triggered the request, if any.
    fn validate_and_measure_board(&self, board: &BoardState, changed: Option<&Column>);

    /// The host replaced the board configuration.
    fn config_changed(&self, _config: &BoardConfig) {}
}

// =============================================================================
// DIRTY FLAGS
// =============================================================================

bitflags::bitflags! {
    /// What kind of requests arrived since the last flush.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Dirty: u8 {
        /// A request without a column.
        const BOARD = 1 << 0;
        /// At least one column-scoped request.
        const COLUMN = 1 << 1;
    }
}

#[derive(Debug, Default)]
struct Pending {
    dirty: Dirty,
    columns: Vec<String>,
}

// =============================================================================
// COALESCING BRIDGE
// =============================================================================

/// Bridge that batches requests until the host flushes.
pub struct CoalescingBridge {
    config: RefCell<BoardConfig>,
    pending: RefCell<Pending>,
    layout: RefCell<BoardLayout>,
    generation: Signal<u64>,
}

impl CoalescingBridge {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config: RefCell::new(config),
            pending: RefCell::new(Pending::default()),
            layout: RefCell::new(BoardLayout::default()),
            generation: signal(0),
        }
    }

    /// Replace the geometry inputs. Marks the board dirty.
    pub fn set_config(&self, config: BoardConfig) {
        *self.config.borrow_mut() = config;
        self.pending.borrow_mut().dirty |= Dirty::BOARD;
    }

    /// Configuration used by the next pass.
    pub fn config(&self) -> BoardConfig {
        self.config.borrow().clone()
    }

    /// Flags accumulated since the last flush.
    pub fn dirty(&self) -> Dirty {
        self.pending.borrow().dirty
    }

    /// Columns named by requests since the last flush, in arrival order.
    pub fn pending_columns(&self) -> Vec<String> {
        self.pending.borrow().columns.clone()
    }

    /// Run at most one measurement pass for everything requested so far.
    ///
    /// Returns `true` if a pass ran.
    pub fn flush(&self, board: &BoardState) -> bool {
        let pending = std::mem::take(&mut *self.pending.borrow_mut());
        if pending.dirty.is_empty() {
            return false;
        }

        let layout = measure_board(board, &self.config.borrow());
        trace!(
            "board measured: {:?}, changed columns {:?}, {} frames",
            pending.dirty,
            pending.columns,
            layout.columns.len()
        );

        *self.layout.borrow_mut() = layout;
        self.generation.set(self.generation.get() + 1);
        true
    }

    /// Layout from the most recent pass.
    pub fn layout(&self) -> BoardLayout {
        self.layout.borrow().clone()
    }

    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    /// Reactive generation counter, bumped once per measurement pass.
    pub fn generation_signal(&self) -> Signal<u64> {
        self.generation.clone()
    }
}

impl MeasurementBridge for CoalescingBridge {
    fn validate_and_measure_board(&self, _board: &BoardState, changed: Option<&Column>) {
        let mut pending = self.pending.borrow_mut();
        match changed {
            Some(column) => {
                pending.dirty |= Dirty::COLUMN;
                if !pending.columns.iter().any(|id| id == column.id()) {
                    pending.columns.push(column.id().to_string());
                }
            }
            None => pending.dirty |= Dirty::BOARD,
        }
    }

    fn config_changed(&self, config: &BoardConfig) {
        self.set_config(config.clone());
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Card;

    fn setup() -> (BoardState, CoalescingBridge) {
        let mut board = BoardState::new();
        board.add_column(Column::new("todo", "To do"), vec![Card::new("c1", "One")]);
        board.add_column(Column::new("doing", "Doing"), vec![]);
        board.add_column(Column::new("done", "Done"), vec![]);

        let config = BoardConfig {
            item_width: 300.0,
            viewport_height: 700.0,
            ..Default::default()
        };
        (board, CoalescingBridge::new(config))
    }

    #[test]
    fn test_flush_without_requests_is_noop() {
        let (board, bridge) = setup();

        assert!(!bridge.flush(&board));
        assert_eq!(bridge.generation(), 0);
        assert!(bridge.layout().columns.is_empty());
    }

    #[test]
    fn test_requests_coalesce_into_one_pass() {
        let (board, bridge) = setup();
        let todo = board.column("todo").unwrap().clone();

        bridge.validate_and_measure_board(&board, Some(&todo));
        bridge.validate_and_measure_board(&board, Some(&todo));
        bridge.validate_and_measure_board(&board, None);

        assert_eq!(bridge.dirty(), Dirty::BOARD | Dirty::COLUMN);
        assert_eq!(bridge.pending_columns(), vec!["todo".to_string()]);

        assert!(bridge.flush(&board));
        assert_eq!(bridge.generation(), 1);
        assert!(bridge.dirty().is_empty());
        assert!(!bridge.flush(&board));
        assert_eq!(bridge.generation(), 1);
    }

    #[test]
    fn test_duplicate_requests_match_single_request() {
        let (board, once) = setup();
        once.validate_and_measure_board(&board, None);
        once.flush(&board);

        let (_, twice) = setup();
        twice.validate_and_measure_board(&board, None);
        twice.validate_and_measure_board(&board, None);
        twice.flush(&board);

        assert_eq!(once.layout(), twice.layout());
        assert_eq!(once.generation(), twice.generation());
    }

    #[test]
    fn test_set_config_marks_board_dirty() {
        let (board, bridge) = setup();

        bridge.set_config(BoardConfig {
            item_width: 250.0,
            ..Default::default()
        });

        assert_eq!(bridge.dirty(), Dirty::BOARD);
        assert!(bridge.flush(&board));
        assert_eq!(bridge.layout().columns[1].frame.width, 250.0);
    }
}
