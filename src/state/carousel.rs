//! Carousel Snap Controller - Board-wide horizontal scroll state
//!
//! Owns [`CarouselState`] and is its only writer. Every transition goes
//! through [`CarouselSnapController::settle`], which keeps `active_index`
//! equal to the nearest snap slot of `scroll_offset_x`.
//!
//! # Events
//!
//! - drag end / momentum end → settle at the reported offset
//! - `snap_to_prev` / `snap_to_next` → scroll one slot, clamped to the board
//! - `scroll_to_index` / `scroll_to_offset` → imperative animated scroll
//! - config change in single-column display → re-center the active column
//!
//! # Manual settle
//!
//! Some hosts never report momentum end for programmatic scrolls. With
//! `platform_needs_manual_settle` the controller settles at the target right
//! after issuing the scroll command, without waiting for the animation.

use std::rc::Rc;

use log::warn;
use spark_signals::{signal, Signal};

use super::callbacks::BoardCallbacks;
use crate::board::BoardContext;
use crate::config::{BoardConfig, FooterMode};
use crate::error::Result;
use crate::surface::CarouselSurface;

// =============================================================================
// STATE
// =============================================================================

/// Horizontal scroll state of the board.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CarouselState {
    pub active_index: usize,
    pub scroll_offset_x: f32,
}

/// Size and spacing of one carousel item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselItemLayout {
    pub width: f32,
    pub margin_right: f32,
    /// Fixed footer slot under the column (inline footer mode).
    pub footer_slot_height: Option<f32>,
}

// =============================================================================
// CONTROLLER
// =============================================================================

pub struct CarouselSnapController {
    ctx: BoardContext,
    surface: Box<dyn CarouselSurface>,
    callbacks: Rc<BoardCallbacks>,
    config: BoardConfig,
    state: CarouselState,
    active_index: Signal<usize>,
}

impl CarouselSnapController {
    /// Build a controller. Fails if the configured slot width is not
    /// positive.
    pub fn new(
        ctx: BoardContext,
        surface: Box<dyn CarouselSurface>,
        callbacks: Rc<BoardCallbacks>,
        config: BoardConfig,
    ) -> Result<Self> {
        if let Err(err) = config.validate() {
            warn!("carousel configuration rejected: {err}");
            return Err(err);
        }

        Ok(Self {
            ctx,
            surface,
            callbacks,
            config,
            state: CarouselState::default(),
            active_index: signal(0),
        })
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn active_index(&self) -> usize {
        self.state.active_index
    }

    pub fn scroll_offset_x(&self) -> f32 {
        self.state.scroll_offset_x
    }

    /// Reactive active index, for position indicators.
    pub fn active_index_signal(&self) -> Signal<usize> {
        self.active_index.clone()
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    // =========================================================================
    // GEOMETRY
    // =========================================================================

    pub fn item_count(&self) -> usize {
        self.ctx.column_count()
    }

    /// Current slot width: item width in effect plus margin.
    pub fn slot_width(&self) -> f32 {
        self.config.slot_width(self.item_count())
    }

    /// Snap interval for the host scroll surface.
    pub fn snap_interval(&self) -> f32 {
        self.slot_width()
    }

    /// Largest valid horizontal offset.
    pub fn max_offset(&self) -> f32 {
        self.item_count().saturating_sub(1) as f32 * self.slot_width()
    }

    fn clamp_offset(&self, offset_x: f32) -> f32 {
        offset_x.max(0.0).min(self.max_offset())
    }

    /// Nearest slot index for an offset.
    fn slot_index(&self, offset_x: f32) -> usize {
        let slot = self.slot_width();
        if !(slot > 0.0) {
            return 0;
        }
        let last = self.item_count().saturating_sub(1);
        ((offset_x / slot).round().max(0.0) as usize).min(last)
    }

    pub fn item_layout(&self) -> CarouselItemLayout {
        let count = self.item_count();
        CarouselItemLayout {
            width: self.config.effective_item_width(count),
            margin_right: self.config.column_margin,
            footer_slot_height: match self.config.footer_mode {
                FooterMode::Inline => Some(self.config.footer_slot_height),
                FooterMode::BelowScroll => None,
            },
        }
    }

    /// One flag per column, set for the active one. Empty unless the host
    /// shows a single column at a time.
    pub fn position_indicators(&self) -> Vec<bool> {
        if !self.config.single_column_display() {
            return Vec::new();
        }
        (0..self.item_count())
            .map(|i| i == self.state.active_index)
            .collect()
    }

    pub fn scroll_enabled(&self) -> bool {
        self.config.scroll_enabled
    }

    // =========================================================================
    // SETTLE
    // =========================================================================

    /// Adopt a final horizontal position.
    pub fn settle(&mut self, offset_x: f32) {
        let offset_x = self.clamp_offset(offset_x);
        let index = self.slot_index(offset_x);

        self.state = CarouselState {
            active_index: index,
            scroll_offset_x: offset_x,
        };
        self.active_index.set(index);

        self.callbacks.active_index_changed(index);
        self.callbacks.scroll_end_drag();
        self.ctx.request_measure(None);
    }

    pub fn on_drag_end(&mut self, offset_x: f32) {
        self.settle(offset_x);
    }

    pub fn on_momentum_end(&mut self, offset_x: f32) {
        self.settle(offset_x);
    }

    // =========================================================================
    // COMMANDS
    // =========================================================================

    pub fn snap_to_prev(&mut self) {
        if self.state.scroll_offset_x <= 0.0 {
            return;
        }
        let target = (self.state.scroll_offset_x - self.slot_width()).max(0.0);
        self.scroll_to_offset(target);
    }

    pub fn snap_to_next(&mut self) {
        let target = (self.state.scroll_offset_x + self.slot_width()).min(self.max_offset());
        self.scroll_to_offset(target);
    }

    pub fn scroll_to_index(&mut self, index: usize) {
        let target = self.clamp_offset(index as f32 * self.slot_width());
        self.issue_scroll(target);
    }

    /// Scroll to an offset, rounded to a whole pixel.
    pub fn scroll_to_offset(&mut self, offset_x: f32) {
        let target = self.clamp_offset(offset_x.round());
        self.issue_scroll(target);
    }

    fn issue_scroll(&mut self, target: f32) {
        self.surface.scroll_to(target, true);

        if self.config.platform_needs_manual_settle {
            self.settle(target);
        }
    }

    // =========================================================================
    // CONFIG / DATA CHANGES
    // =========================================================================

    /// Apply new host configuration.
    ///
    /// In single-column display, a change of slot width or viewport width
    /// re-issues `scroll_to_index(active_index)` so the active column stays
    /// in view. Returns whether that happened. An invalid config is
    /// rejected and the previous one kept.
    pub fn on_config_changed(&mut self, config: BoardConfig) -> Result<bool> {
        config.validate()?;

        let count = self.item_count();
        let slot_changed = self.config.slot_width(count) != config.slot_width(count);
        let viewport_changed = self.config.slider_width != config.slider_width;
        self.config = config;

        if self.config.single_column_display() && (slot_changed || viewport_changed) {
            self.scroll_to_index(self.state.active_index);
            return Ok(true);
        }

        if slot_changed {
            self.reclamp();
        }
        Ok(false)
    }

    /// Pull the offset back into range after columns were added or removed.
    pub fn on_columns_changed(&mut self) {
        self.reclamp();
    }

    /// Re-derive state after the slot geometry changed. An offset past the
    /// last slot is scrolled back onto it. Settles immediately when the
    /// offset or the nearest slot moved.
    fn reclamp(&mut self) {
        let current = self.state.scroll_offset_x;
        let target = self.clamp_offset(current);
        if target != current {
            self.surface.scroll_to(target, true);
        }
        if target != current || self.slot_index(target) != self.state.active_index {
            self.settle(target);
        }
    }
}
