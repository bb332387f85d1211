//! Board Types
//!
//! Cards are plain immutable values. Columns are handles: cloning a
//! [`Column`] shares the same geometry cells, so every component holding a
//! handle observes the same column across re-renders.

use spark_signals::{signal, Signal};

// =============================================================================
// FRAME
// =============================================================================

/// Absolute rectangle reported by a host surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Frame {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

// =============================================================================
// CARDS
// =============================================================================

/// Tag chip attached to a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub label: String,
    pub color: Option<String>,
}

impl Tag {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: None,
        }
    }
}

/// A card on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub tags: Vec<Tag>,
}

impl Card {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: String::new(),
            description: String::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }
}

// =============================================================================
// COLUMNS
// =============================================================================

/// A board column.
///
/// Geometry lives in reactive cells. Writers are limited to the column's own
/// `ScrollTracker` (offset, content height) and `ColumnLayoutController`
/// (measured height, frame); everything else reads.
#[derive(Clone)]
pub struct Column {
    id: String,
    title: String,
    /// Last settled vertical offset of the card list.
    scroll_offset: Signal<f32>,
    /// Total height of the card list content.
    content_height: Signal<f32>,
    /// Height of the column container, 0 until first measured.
    measured_height: Signal<f32>,
    /// Absolute frame from the last surface measurement.
    frame: Signal<Option<Frame>>,
}

impl Column {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            scroll_offset: signal(0.0),
            content_height: signal(0.0),
            measured_height: signal(0.0),
            frame: signal(None),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset.get()
    }

    pub fn content_height(&self) -> f32 {
        self.content_height.get()
    }

    pub fn measured_height(&self) -> f32 {
        self.measured_height.get()
    }

    pub fn frame(&self) -> Option<Frame> {
        self.frame.get()
    }

    /// Reactive view of the settled offset, for hosts binding effects.
    pub fn scroll_offset_signal(&self) -> Signal<f32> {
        self.scroll_offset.clone()
    }

    pub(crate) fn set_scroll_offset(&self, offset: f32) {
        self.scroll_offset.set(offset);
    }

    pub(crate) fn set_content_height(&self, height: f32) {
        self.content_height.set(height);
    }

    pub(crate) fn set_measured_height(&self, height: f32) {
        self.measured_height.set(height);
    }

    pub(crate) fn set_frame(&self, frame: Option<Frame>) {
        self.frame.set(frame);
    }
}

impl std::fmt::Debug for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("scroll_offset", &self.scroll_offset())
            .field("content_height", &self.content_height())
            .field("measured_height", &self.measured_height())
            .finish()
    }
}

impl PartialEq for Column {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
