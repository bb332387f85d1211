//! Host Surfaces
//!
//! Imperative handles onto the host's native scroll views. The core never
//! awaits a command: scrolls are fire-and-forget, and a newer command on the
//! same surface supersedes an in-flight one.

use crate::types::Frame;

/// The vertical card list of one column.
pub trait ColumnSurface {
    /// Measure the column container's absolute frame, if laid out.
    fn measure(&self) -> Option<Frame>;

    /// Scroll the card list to a vertical offset.
    fn scroll_to_offset(&self, offset_y: f32, animated: bool);
}

/// The horizontal carousel surface.
pub trait CarouselSurface {
    /// Scroll horizontally to an offset.
    fn scroll_to(&self, offset_x: f32, animated: bool);
}

/// Surface that ignores every command, for headless hosts.
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedSurface;

impl ColumnSurface for DetachedSurface {
    fn measure(&self) -> Option<Frame> {
        None
    }

    fn scroll_to_offset(&self, _offset_y: f32, _animated: bool) {}
}

impl CarouselSurface for DetachedSurface {
    fn scroll_to(&self, _offset_x: f32, _animated: bool) {}
}
