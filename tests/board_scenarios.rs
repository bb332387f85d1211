//! End-to-end board scenarios through the public API.
//!
//! Drives a `KanbanBoard` the way a host would: events in, surface
//! commands and callbacks out, one coalesced measurement pass per turn.
//!
//! Run with: cargo test --test board_scenarios

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use spark_signals::effect;

use kanban_carousel::{
    BoardCallbacks, BoardConfig, BoardContext, BoardEvent, BoardRenderer, BoardState, Card,
    CarouselSurface, CoalescingBridge, Column, ColumnBody, DefaultRenderer, DetachedSurface,
    FooterMode, KanbanBoard, MeasurementBridge,
};

// =============================================================================
// HOST FAKES
// =============================================================================

/// Carousel surface that records every scroll command.
#[derive(Clone, Default)]
struct Commands(Rc<RefCell<Vec<f32>>>);

impl CarouselSurface for Commands {
    fn scroll_to(&self, offset_x: f32, _animated: bool) {
        self.0.borrow_mut().push(offset_x);
    }
}

/// Bridge that counts requests and forwards them to a coalescing bridge.
struct Counted {
    requests: Cell<usize>,
    inner: CoalescingBridge,
}

impl MeasurementBridge for Counted {
    fn validate_and_measure_board(&self, board: &BoardState, changed: Option<&Column>) {
        self.requests.set(self.requests.get() + 1);
        self.inner.validate_and_measure_board(board, changed);
    }

    fn config_changed(&self, config: &BoardConfig) {
        self.inner.config_changed(config);
    }
}

struct EmptyMessage;

impl BoardRenderer for EmptyMessage {
    type Content = String;

    fn render_empty_column(&self, column: &Column) -> Option<String> {
        Some(format!("No cards in {}", column.title()))
    }
}

struct Host {
    board: KanbanBoard,
    bridge: Rc<Counted>,
    commands: Commands,
}

fn host(columns: &[(&str, usize)], config: BoardConfig, callbacks: BoardCallbacks) -> Host {
    let mut state = BoardState::new();
    for (id, cards) in columns {
        let cards = (0..*cards)
            .map(|i| Card::new(format!("{id}-{i}"), format!("Card {i}")))
            .collect();
        state.add_column(Column::new(*id, id.to_uppercase()), cards);
    }

    let bridge = Rc::new(Counted {
        requests: Cell::new(0),
        inner: CoalescingBridge::new(config.clone()),
    });
    let ctx = BoardContext::new(state, bridge.clone());
    let commands = Commands::default();

    let board = KanbanBoard::new(
        ctx,
        config,
        callbacks,
        Box::new(commands.clone()),
        |_| Box::new(DetachedSurface),
    )
    .unwrap();

    Host {
        board,
        bridge,
        commands,
    }
}

fn three_across() -> BoardConfig {
    BoardConfig {
        item_width: 300.0,
        column_margin: 16.0,
        displayed_columns: 3,
        platform_needs_manual_settle: true,
        ..Default::default()
    }
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn test_snap_next_clamps_at_last_column() {
    let mut h = host(&[("todo", 2), ("doing", 1), ("done", 0)], three_across(), BoardCallbacks::default());

    let seen = Rc::new(Cell::new(usize::MAX));
    let seen_clone = seen.clone();
    let active = h.board.carousel().active_index_signal();
    let _e = effect(move || seen_clone.set(active.get()));
    assert_eq!(seen.get(), 0);

    h.board.dispatch(BoardEvent::SnapToNext);
    assert_eq!(h.board.carousel().scroll_offset_x(), 316.0);
    assert_eq!(h.board.carousel().active_index(), 1);
    assert_eq!(seen.get(), 1);

    h.board.dispatch(BoardEvent::SnapToNext);
    h.board.dispatch(BoardEvent::SnapToNext);
    assert_eq!(h.board.carousel().scroll_offset_x(), 632.0);
    assert_eq!(h.board.carousel().active_index(), 2);
    assert_eq!(seen.get(), 2);
    assert_eq!(*h.commands.0.borrow(), vec![316.0, 632.0, 632.0]);
}

#[test]
fn test_single_column_resize_recenters() {
    let config = BoardConfig {
        displayed_columns: 1,
        platform_needs_manual_settle: true,
        ..Default::default()
    };
    let mut h = host(&[("todo", 3)], config, BoardCallbacks::default());

    assert!(h.board.dispatch(BoardEvent::ViewportResized {
        width: 428.0,
        height: 900.0
    }));

    assert_eq!(*h.commands.0.borrow(), vec![0.0]);
    assert_eq!(h.board.carousel().active_index(), 0);
    assert_eq!(h.board.carousel().scroll_offset_x(), 0.0);
}

#[test]
fn test_partial_upward_settle_is_accepted() {
    let mut h = host(&[("todo", 30)], three_across(), BoardCallbacks::default());

    // Bring the stored offset to 100 first
    h.board.dispatch(BoardEvent::ColumnScroll {
        column_id: "todo".into(),
        offset_y: 100.0,
    });
    h.board.dispatch(BoardEvent::ColumnMomentumEnd {
        column_id: "todo".into(),
        offset_y: 100.0,
    });
    let before = h.bridge.requests.get();

    h.board.dispatch(BoardEvent::ColumnScroll {
        column_id: "todo".into(),
        offset_y: 80.0,
    });
    assert!(h.board.dispatch(BoardEvent::ColumnMomentumEnd {
        column_id: "todo".into(),
        offset_y: 90.0
    }));

    assert_eq!(h.board.tracker("todo").unwrap().column().scroll_offset(), 90.0);
    assert_eq!(h.bridge.requests.get(), before + 1);
}

#[test]
fn test_empty_column_body() {
    let h = host(&[("todo", 0), ("done", 1)], three_across(), BoardCallbacks::default());

    let custom = h.board.column_views(&EmptyMessage);
    assert_eq!(custom[0].body, ColumnBody::CustomEmpty("No cards in TODO".to_string()));
    assert!(custom[1].body.is_list());

    let builtin = h.board.column_views(&DefaultRenderer);
    assert_eq!(builtin[0].body, ColumnBody::EmptyPlaceholder);
}

// =============================================================================
// MEASUREMENT COALESCING
// =============================================================================

#[test]
fn test_burst_of_requests_measures_once() {
    let mut h = host(&[("todo", 5), ("done", 5)], three_across(), BoardCallbacks::default());

    for _ in 0..3 {
        h.board.dispatch(BoardEvent::ViewableItemsChanged {
            column_id: "todo".into(),
        });
    }
    h.board.dispatch(BoardEvent::SnapToNext);
    assert!(h.bridge.requests.get() >= 4);

    let board = h.board.context().board();
    assert!(h.bridge.inner.flush(&board));
    assert!(!h.bridge.inner.flush(&board));
    assert_eq!(h.bridge.inner.generation(), 1);

    let layout = h.bridge.inner.layout();
    assert_eq!(layout.columns.len(), 2);
    assert_eq!(layout.column("done").unwrap().frame.x, 332.0);
}

#[test]
fn test_inline_footer_layout() {
    let config = BoardConfig {
        footer_mode: FooterMode::Inline,
        column_width: 320.0,
        footer_slot_height: 60.0,
        viewport_height: 700.0,
        ..three_across()
    };
    let h = host(&[("todo", 1)], config, BoardCallbacks::default());

    assert_eq!(h.board.carousel().item_layout().width, 320.0);
    assert_eq!(h.board.carousel().item_layout().footer_slot_height, Some(60.0));

    h.board.context().request_measure(None);
    let board = h.board.context().board();
    h.bridge.inner.flush(&board);
    let todo = h.bridge.inner.layout().column("todo").cloned().unwrap();
    assert_eq!(todo.frame.width, 320.0);
    assert_eq!(todo.footer_slot.unwrap().height, 60.0);
}

// =============================================================================
// DRAG LIFECYCLE
// =============================================================================

#[test]
fn test_drag_round_trip_notifies_host() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let pressed = log.clone();
    let held = log.clone();
    let callbacks = BoardCallbacks {
        on_card_press: Some(Box::new(move |card: &Card| {
            pressed.borrow_mut().push(format!("press {}", card.id))
        })),
        on_long_press: Some(Box::new(move |card: &Card| {
            held.borrow_mut().push(format!("hold {}", card.id))
        })),
        ..Default::default()
    };
    let mut h = host(&[("todo", 2)], three_across(), callbacks);

    h.board.dispatch(BoardEvent::CardPress {
        card_id: "todo-1".into(),
    });
    assert!(h.board.dispatch(BoardEvent::CardLongPress {
        card_id: "todo-0".into()
    }));
    assert!(h.board.context().board().moving_mode());
    assert!(h.board.cards().is_hidden("todo-0"));

    let before = h.bridge.requests.get();
    assert!(h.board.dispatch(BoardEvent::DragFinished));
    assert_eq!(h.bridge.requests.get(), before + 1);
    assert!(!h.board.context().board().moving_mode());

    assert_eq!(
        *log.borrow(),
        vec!["press todo-1".to_string(), "hold todo-0".to_string()]
    );
}
