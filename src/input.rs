//! Input Module - Terminal event translation
//!
//! Turns crossterm events into [`BoardEvent`]s so the board can be driven
//! from a terminal host:
//!
//! - `←` / `→` and horizontal wheel → snap to the previous / next column
//! - `Home` / `End` → first / last column
//! - vertical wheel over a column → one live scroll frame, then a settle
//! - terminal resize → viewport resize
//!
//! Hit testing uses the frames of the latest [`BoardLayout`], shifted by the
//! carousel's horizontal offset.
//!
//! # Example
//!
//! ```ignore
//! use kanban_carousel::input::{poll_event, route_event};
//! use std::time::Duration;
//!
//! loop {
//!     if let Ok(Some(event)) = poll_event(Duration::from_millis(16)) {
//!         route_event(&mut board, &bridge.layout(), event);
//!     }
//!     bridge.flush(&board.context().board());
//! }
//! ```

use crossterm::event::{
    poll, read, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyCode,
    KeyEvent as CrosstermKeyEvent, KeyEventKind, MouseEvent as CrosstermMouseEvent,
    MouseEventKind,
};
use crossterm::execute;
use std::io::stdout;
use std::time::Duration;

use crate::board::{BoardEvent, KanbanBoard};
use crate::layout::BoardLayout;

/// Vertical distance of one wheel notch.
pub const WHEEL_SCROLL: f32 = 3.0;

// =============================================================================
// KEYS
// =============================================================================

/// Translate a key press. Releases are ignored.
pub fn translate_key(event: CrosstermKeyEvent, board: &KanbanBoard) -> Option<BoardEvent> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    match event.code {
        KeyCode::Left => Some(BoardEvent::SnapToPrev),
        KeyCode::Right => Some(BoardEvent::SnapToNext),
        KeyCode::Home => Some(BoardEvent::ScrollToIndex(0)),
        KeyCode::End => {
            let last = board.context().column_count().saturating_sub(1);
            Some(BoardEvent::ScrollToIndex(last))
        }
        _ => None,
    }
}

// =============================================================================
// MOUSE
// =============================================================================

/// Column under a terminal cell, if any.
pub fn column_at(board: &KanbanBoard, layout: &BoardLayout, x: u16, y: u16) -> Option<String> {
    let content_x = x as f32 + board.carousel().scroll_offset_x();
    let y = y as f32;

    layout
        .columns
        .iter()
        .find(|c| {
            content_x >= c.frame.x
                && content_x < c.frame.x + c.frame.width
                && y >= c.frame.y
                && y < c.frame.y + c.frame.height
        })
        .map(|c| c.column_id.clone())
}

/// Translate a mouse event. Only wheel events move the board.
pub fn translate_mouse(
    event: CrosstermMouseEvent,
    board: &KanbanBoard,
    layout: &BoardLayout,
) -> Vec<BoardEvent> {
    let delta = match event.kind {
        MouseEventKind::ScrollUp => -WHEEL_SCROLL,
        MouseEventKind::ScrollDown => WHEEL_SCROLL,
        MouseEventKind::ScrollLeft => return vec![BoardEvent::SnapToPrev],
        MouseEventKind::ScrollRight => return vec![BoardEvent::SnapToNext],
        _ => return Vec::new(),
    };

    let Some(column_id) = column_at(board, layout, event.column, event.row) else {
        return Vec::new();
    };
    let (Some(tracker), Some(extent)) = (board.tracker(&column_id), layout.column(&column_id))
    else {
        return Vec::new();
    };

    let current = tracker.column().scroll_offset();
    let target = (current + delta).max(0.0).min(extent.max_scroll_y);
    if target == current {
        return Vec::new();
    }

    // A wheel notch has no momentum phase: it lands where it scrolled.
    vec![
        BoardEvent::ColumnScroll {
            column_id: column_id.clone(),
            offset_y: target,
        },
        BoardEvent::ColumnMomentumEnd {
            column_id,
            offset_y: target,
        },
    ]
}

// =============================================================================
// EVENTS
// =============================================================================

/// Translate any terminal event into board events.
pub fn translate_event(
    event: CrosstermEvent,
    board: &KanbanBoard,
    layout: &BoardLayout,
) -> Vec<BoardEvent> {
    match event {
        CrosstermEvent::Key(key) => translate_key(key, board).into_iter().collect(),
        CrosstermEvent::Mouse(mouse) => translate_mouse(mouse, board, layout),
        CrosstermEvent::Resize(w, h) => vec![BoardEvent::ViewportResized {
            width: w as f32,
            height: h as f32,
        }],
        _ => Vec::new(),
    }
}

/// Translate and dispatch. Returns true if any resulting event was handled.
pub fn route_event(board: &mut KanbanBoard, layout: &BoardLayout, event: CrosstermEvent) -> bool {
    let events = translate_event(event, board, layout);
    let mut handled = false;
    for event in events {
        handled |= board.dispatch(event);
    }
    handled
}

// =============================================================================
// POLLING
// =============================================================================

/// Poll for an event with timeout.
/// Returns None if no event within timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<CrosstermEvent>> {
    if poll(timeout)? {
        Ok(Some(read()?))
    } else {
        Ok(None)
    }
}

/// Enable mouse capture.
pub fn enable_mouse() -> std::io::Result<()> {
    execute!(stdout(), EnableMouseCapture)
}

/// Disable mouse capture.
pub fn disable_mouse() -> std::io::Result<()> {
    execute!(stdout(), DisableMouseCapture)
}

// =============================================================================
// TESTS
// =============================================================================
