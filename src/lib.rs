//! # kanban-carousel
//!
//! Headless scroll and layout coordination for carousel-style Kanban boards.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! shared column geometry and reactive board state.
//!
//! ## Architecture
//!
//! The board is a horizontal carousel of columns; each column holds a
//! vertically scrolling card list. The host owns rendering and gesture
//! recognition and feeds discrete events in:
//!
//! ```text
//! host event → KanbanBoard::dispatch → controller → Column / CarouselState
//!                                                 → MeasurementBridge (coalesced)
//!                                                 → host callbacks
//! ```
//!
//! Everything runs on one thread. Each event runs to completion before the
//! next is processed.
//!
//! ## Modules
//!
//! - [`types`] - Cards, columns (shared geometry handles), frames
//! - [`config`] - Board configuration and slot-width rules
//! - [`board`] - Board state, context, measurement bridge, event dispatch
//! - [`state`] - Scroll tracker, column layout, carousel snap, card controllers
//! - [`layout`] - Taffy measurement pass over the whole board
//! - [`render`] - Renderer hooks and render decisions
//! - [`surface`] - Host scroll surface handles
//! - [`input`] - Crossterm event translation for terminal hosts
//! - [`logging`] - Optional flexi_logger bootstrap

pub mod board;
pub mod config;
pub mod error;
pub mod input;
pub mod layout;
pub mod logging;
pub mod render;
pub mod state;
pub mod surface;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use board::{
    BoardContext, BoardEvent, BoardState, CoalescingBridge, ColumnView, Dirty, KanbanBoard,
    MeasurementBridge,
};

pub use config::{BoardConfig, FooterMode};

pub use error::{BoardError, Result};

pub use layout::{content_area_height, measure_board, BoardLayout, ColumnLayout};

pub use render::{card_body, BoardRenderer, CardBody, ColumnBody, ColumnHeader, DefaultRenderer};

pub use state::{
    BoardCallbacks, CardController, CarouselItemLayout, CarouselSnapController, CarouselState,
    ColumnLayoutController, ScrollTracker, Settle,
};

pub use surface::{CarouselSurface, ColumnSurface, DetachedSurface};
