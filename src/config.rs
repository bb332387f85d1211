//! Board Configuration
//!
//! Geometry and behavior inputs supplied by the host. Every field has a
//! default so a partial TOML document (or `BoardConfig::default()`) is a
//! valid starting point.
//!
//! # Example
//!
//! ```ignore
//! use kanban_carousel::config::BoardConfig;
//!
//! let config = BoardConfig::from_toml_str(r#"
//!     item_width = 300.0
//!     slider_width = 390.0
//!     displayed_columns = 1
//!     platform_needs_manual_settle = true
//! "#)?;
//! ```

use serde::Deserialize;

use crate::error::{BoardError, Result};

// =============================================================================
// BOARD CONSTANTS
// =============================================================================

/// Horizontal gap between adjacent columns.
pub const COLUMN_MARGIN: f32 = 16.0;

/// Space kept free below a column's card list for its footer.
pub const FOOTER_RESERVED_SPACE: f32 = 60.0;

/// Content height used before the first container measurement arrives.
pub const FALLBACK_CONTENT_HEIGHT: f32 = 500.0;

/// Height of the footer slot wrapping each carousel item in inline mode.
pub const FOOTER_SLOT_HEIGHT: f32 = 60.0;

// =============================================================================
// FOOTER MODE
// =============================================================================

/// Where column footers live relative to the horizontal scroll surface.
///
/// The two modes also differ in which width a lone data column snaps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FooterMode {
    /// Footer rendered by the column, below its card list. A lone data
    /// column uses `one_column_width`.
    #[default]
    BelowScroll,
    /// Each carousel item is wrapped with a fixed-height footer slot. A lone
    /// data column uses `column_width`.
    Inline,
}

// =============================================================================
// BOARD CONFIG
// =============================================================================

/// Host-supplied board configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Width of one carousel item when several data columns exist.
    pub item_width: f32,
    /// Width of the horizontal viewport.
    pub slider_width: f32,
    /// Width of a column in multi-column display.
    pub column_width: f32,
    /// Width of a column when it is the only data column.
    pub one_column_width: f32,
    /// How many columns the host shows at once.
    pub displayed_columns: usize,
    /// Whether the carousel accepts user scrolling.
    pub scroll_enabled: bool,
    /// Show the card count badge in the default column header.
    pub is_with_count_badge: bool,
    /// Ignore long presses instead of starting a drag.
    pub disable_drag: bool,
    /// Gap between columns.
    pub column_margin: f32,
    pub footer_mode: FooterMode,
    pub footer_reserved_space: f32,
    pub fallback_content_height: f32,
    pub footer_slot_height: f32,
    /// The host's scroll view does not report momentum end for programmatic
    /// scrolls, so the carousel settles itself after each command.
    pub platform_needs_manual_settle: bool,
    /// Height available to the board, used by the board measurement pass.
    pub viewport_height: f32,
    /// Style overrides, passed through untouched.
    pub styles: toml::Table,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            item_width: 300.0,
            slider_width: 390.0,
            column_width: 300.0,
            one_column_width: 358.0,
            displayed_columns: 1,
            scroll_enabled: true,
            is_with_count_badge: false,
            disable_drag: false,
            column_margin: COLUMN_MARGIN,
            footer_mode: FooterMode::BelowScroll,
            footer_reserved_space: FOOTER_RESERVED_SPACE,
            fallback_content_height: FALLBACK_CONTENT_HEIGHT,
            footer_slot_height: FOOTER_SLOT_HEIGHT,
            platform_needs_manual_settle: false,
            viewport_height: 800.0,
            styles: toml::Table::new(),
        }
    }
}

impl BoardConfig {
    /// Parse a configuration document. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: BoardConfig = toml::from_str(text)?;
        Ok(config)
    }

    /// Item width in effect for the given number of data columns.
    pub fn effective_item_width(&self, data_columns: usize) -> f32 {
        if data_columns == 1 {
            match self.footer_mode {
                FooterMode::BelowScroll => self.one_column_width,
                FooterMode::Inline => self.column_width,
            }
        } else {
            self.item_width
        }
    }

    /// Horizontal span the carousel snaps to: item width plus margin.
    pub fn slot_width(&self, data_columns: usize) -> f32 {
        self.effective_item_width(data_columns) + self.column_margin
    }

    /// True when the host shows exactly one column at a time.
    pub fn single_column_display(&self) -> bool {
        self.displayed_columns == 1
    }

    /// Reject configurations whose slot width could be zero or negative in
    /// either display mode.
    pub fn validate(&self) -> Result<()> {
        let multi = self.slot_width(2);
        if !(multi > 0.0) {
            return Err(BoardError::InvalidSlotWidth {
                source_field: "item_width",
                width: multi,
            });
        }

        let single = self.slot_width(1);
        if !(single > 0.0) {
            let source_field = match self.footer_mode {
                FooterMode::BelowScroll => "one_column_width",
                FooterMode::Inline => "column_width",
            };
            return Err(BoardError::InvalidSlotWidth {
                source_field,
                width: single,
            });
        }

        Ok(())
    }
}
