//! Layout result types and the column content-area rule.

use crate::config::BoardConfig;
use crate::types::Frame;

/// Geometry of one column after a board measurement pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnLayout {
    pub column_id: String,
    /// Column body frame, relative to the carousel content origin.
    pub frame: Frame,
    /// Footer slot frame (inline footer mode only).
    pub footer_slot: Option<Frame>,
    /// Height available to the card list.
    pub content_area_height: f32,
    /// Largest valid vertical offset of the card list.
    pub max_scroll_y: f32,
}

/// Result of a board measurement pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoardLayout {
    pub columns: Vec<ColumnLayout>,
    /// Total width of the carousel content, including margins.
    pub content_width: f32,
    pub content_height: f32,
}

impl BoardLayout {
    pub fn column(&self, id: &str) -> Option<&ColumnLayout> {
        self.columns.iter().find(|c| c.column_id == id)
    }
}

/// Height left for the card list once the footer is reserved.
///
/// Unmeasured containers (`available_height <= 0`) get the configured
/// fallback so first paint never collapses.
pub fn content_area_height(available_height: f32, config: &BoardConfig) -> f32 {
    if available_height > 0.0 {
        available_height - config.footer_reserved_space
    } else {
        config.fallback_content_height
    }
}
