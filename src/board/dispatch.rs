//! Board Dispatch - Route host events to controllers
//!
//! `KanbanBoard` owns one `ScrollTracker` + `ColumnLayoutController` pair
//! per column, the carousel controller, and the card controller. The host
//! feeds it [`BoardEvent`]s from its event loop; each event runs to
//! completion synchronously.
//!
//! # Example
//!
//! ```ignore
//! use kanban_carousel::board::{BoardEvent, KanbanBoard};
//!
//! let mut board = KanbanBoard::new(ctx, config, callbacks, carousel_surface, |_| {
//!     Box::new(DetachedSurface)
//! })?;
//!
//! board.dispatch(BoardEvent::SnapToNext);
//! bridge.flush(&board.context().board());
//! ```

use std::rc::Rc;

use log::{debug, warn};

use super::state::BoardContext;
use crate::config::BoardConfig;
use crate::error::Result;
use crate::render::{BoardRenderer, ColumnBody, ColumnHeader};
use crate::state::{
    BoardCallbacks, CardController, CarouselSnapController, ColumnLayoutController, ScrollTracker,
    Settle,
};
use crate::surface::{CarouselSurface, ColumnSurface};
use crate::types::{Card, Column};

// =============================================================================
// EVENTS
// =============================================================================

/// Everything the host can tell the board.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardEvent {
    /// Live vertical scroll frame of a column's card list.
    ColumnScroll { column_id: String, offset_y: f32 },
    /// User released a column drag.
    ColumnScrollEndDrag { column_id: String, offset_y: f32 },
    /// Column momentum scrolling finished.
    ColumnMomentumEnd { column_id: String, offset_y: f32 },
    ColumnContentSize { column_id: String, height: f32 },
    ColumnMeasured { column_id: String, height: f32 },
    /// The set of on-screen cards in a column changed.
    ViewableItemsChanged { column_id: String },
    CarouselDragEnd { offset_x: f32 },
    CarouselMomentumEnd { offset_x: f32 },
    SnapToPrev,
    SnapToNext,
    ScrollToIndex(usize),
    ColumnScrollTo { column_id: String, offset_y: f32 },
    ViewportResized { width: f32, height: f32 },
    ConfigChanged(BoardConfig),
    CardPress { card_id: String },
    CardLongPress { card_id: String },
    DragFinished,
}

/// Everything a host needs to draw one column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnView<C> {
    pub column_id: String,
    pub width: f32,
    pub margin_right: f32,
    pub content_area_height: f32,
    pub header: ColumnHeader<C>,
    pub body: ColumnBody<C>,
    pub footer: Option<C>,
}

// =============================================================================
// BOARD
// =============================================================================

type SurfaceFactory = Box<dyn Fn(&Column) -> Box<dyn ColumnSurface>>;

struct ColumnEntry {
    tracker: ScrollTracker,
    layout: ColumnLayoutController,
}

pub struct KanbanBoard {
    ctx: BoardContext,
    config: BoardConfig,
    carousel: CarouselSnapController,
    cards: CardController,
    columns: Vec<ColumnEntry>,
    surfaces: SurfaceFactory,
}

impl KanbanBoard {
    /// Wire controllers for every column currently on the board.
    ///
    /// `column_surface` is called once per column to obtain its card-list
    /// surface handle.
    pub fn new(
        ctx: BoardContext,
        config: BoardConfig,
        callbacks: BoardCallbacks,
        carousel_surface: Box<dyn CarouselSurface>,
        column_surface: impl Fn(&Column) -> Box<dyn ColumnSurface> + 'static,
    ) -> Result<Self> {
        let callbacks = Rc::new(callbacks);
        let carousel = CarouselSnapController::new(
            ctx.clone(),
            carousel_surface,
            callbacks.clone(),
            config.clone(),
        )?;
        let cards = CardController::new(ctx.clone(), callbacks, config.disable_drag);

        let mut board = Self {
            ctx,
            config,
            carousel,
            cards,
            columns: Vec::new(),
            surfaces: Box::new(column_surface),
        };

        let existing: Vec<Column> = board.ctx.board().columns().to_vec();
        for column in existing {
            board.wire_column(column);
        }
        Ok(board)
    }

    fn wire_column(&mut self, column: Column) {
        let surface = (self.surfaces)(&column);
        self.columns.push(ColumnEntry {
            tracker: ScrollTracker::new(column.clone(), self.ctx.clone()),
            layout: ColumnLayoutController::new(
                column,
                surface,
                self.ctx.clone(),
                self.config.clone(),
            ),
        });
    }

    pub fn context(&self) -> &BoardContext {
        &self.ctx
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn carousel(&self) -> &CarouselSnapController {
        &self.carousel
    }

    pub fn cards(&self) -> &CardController {
        &self.cards
    }

    pub fn tracker(&self, column_id: &str) -> Option<&ScrollTracker> {
        self.entry(column_id).map(|e| &e.tracker)
    }

    pub fn column_layout(&self, column_id: &str) -> Option<&ColumnLayoutController> {
        self.entry(column_id).map(|e| &e.layout)
    }

    fn entry(&self, column_id: &str) -> Option<&ColumnEntry> {
        self.columns.iter().find(|e| e.tracker.column().id() == column_id)
    }

    fn entry_mut(&mut self, column_id: &str) -> Option<&mut ColumnEntry> {
        let entry = self
            .columns
            .iter_mut()
            .find(|e| e.tracker.column().id() == column_id);
        if entry.is_none() {
            debug!("event for unknown column {column_id}");
        }
        entry
    }

    // =========================================================================
    // DATA SET CHANGES
    // =========================================================================

    /// Add a column to the board and wire its controllers.
    pub fn add_column(&mut self, column: Column, cards: Vec<Card>) {
        let is_new = self.ctx.board().column(column.id()).is_none();
        self.ctx
            .update_board(|board| board.add_column(column.clone(), cards));
        if is_new {
            self.wire_column(column);
            self.carousel.on_columns_changed();
        }
        self.ctx.request_measure(None);
    }

    /// Remove a column and drop its controllers.
    pub fn remove_column(&mut self, column_id: &str) -> Result<Column> {
        let removed = self.ctx.update_board(|board| board.remove_column(column_id))?;
        self.columns
            .retain(|e| e.tracker.column().id() != column_id);
        self.carousel.on_columns_changed();
        self.ctx.request_measure(None);
        Ok(removed)
    }

    // =========================================================================
    // DISPATCH
    // =========================================================================

    /// Route one event. Returns `false` if it was not handled (unknown
    /// column or card, rejected config, ignored settle, refused drag).
    pub fn dispatch(&mut self, event: BoardEvent) -> bool {
        match event {
            BoardEvent::ColumnScroll { column_id, offset_y } => {
                self.with_entry(&column_id, |e| e.tracker.on_live_scroll(offset_y))
            }
            BoardEvent::ColumnScrollEndDrag { column_id, offset_y }
            | BoardEvent::ColumnMomentumEnd { column_id, offset_y } => self
                .entry_mut(&column_id)
                .map(|e| e.tracker.on_settle(offset_y) == Settle::Accepted)
                .unwrap_or(false),
            BoardEvent::ColumnContentSize { column_id, height } => {
                self.with_entry(&column_id, |e| e.tracker.on_content_size_change(height))
            }
            BoardEvent::ColumnMeasured { column_id, height } => {
                self.with_entry(&column_id, |e| e.layout.on_container_measured(height))
            }
            BoardEvent::ViewableItemsChanged { column_id } => {
                self.with_entry(&column_id, |e| e.layout.on_viewable_items_changed())
            }
            BoardEvent::ColumnScrollTo { column_id, offset_y } => {
                self.with_entry(&column_id, |e| e.layout.scroll_to_offset(offset_y))
            }
            BoardEvent::CarouselDragEnd { offset_x } => {
                self.carousel.on_drag_end(offset_x);
                true
            }
            BoardEvent::CarouselMomentumEnd { offset_x } => {
                self.carousel.on_momentum_end(offset_x);
                true
            }
            BoardEvent::SnapToPrev => {
                self.carousel.snap_to_prev();
                true
            }
            BoardEvent::SnapToNext => {
                self.carousel.snap_to_next();
                true
            }
            BoardEvent::ScrollToIndex(index) => {
                self.carousel.scroll_to_index(index);
                true
            }
            BoardEvent::ViewportResized { width, height } => {
                let config = BoardConfig {
                    slider_width: width,
                    viewport_height: height,
                    ..self.config.clone()
                };
                self.apply_config(config)
            }
            BoardEvent::ConfigChanged(config) => self.apply_config(config),
            BoardEvent::CardPress { card_id } => self.cards.press(&card_id),
            BoardEvent::CardLongPress { card_id } => self.cards.long_press(&card_id),
            BoardEvent::DragFinished => self.cards.finish_drag(),
        }
    }

    fn with_entry(&mut self, column_id: &str, f: impl FnOnce(&mut ColumnEntry)) -> bool {
        match self.entry_mut(column_id) {
            Some(entry) => {
                f(entry);
                true
            }
            None => false,
        }
    }

    fn apply_config(&mut self, config: BoardConfig) -> bool {
        if let Err(err) = self.carousel.on_config_changed(config.clone()) {
            warn!("board configuration rejected: {err}");
            return false;
        }

        for entry in &mut self.columns {
            entry.layout.set_config(config.clone());
        }
        self.cards.set_disable_drag(config.disable_drag);
        self.ctx.bridge().config_changed(&config);
        self.config = config;
        true
    }

    // =========================================================================
    // VIEWS
    // =========================================================================

    /// Render decisions for every column, in board order.
    pub fn column_views<R: BoardRenderer>(&self, renderer: &R) -> Vec<ColumnView<R::Content>> {
        self.columns
            .iter()
            .map(|e| ColumnView {
                column_id: e.layout.column().id().to_string(),
                width: e.layout.column_width(),
                margin_right: e.layout.margin_right(),
                content_area_height: e.layout.compute_content_area_height(),
                header: e.layout.header(renderer),
                body: e.layout.body(renderer),
                footer: e.layout.footer(renderer),
            })
            .collect()
    }
}
