//! Board Layout Module
//!
//! Board-wide geometry computed with Taffy.
//!
//! # Architecture
//!
//! The board is a flex row of carousel items, one per column:
//!
//! 1. Root row with a leading `column_margin` of padding
//! 2. One item per column, `column_margin` of right margin each
//! 3. In inline footer mode each item stacks the column body above a
//!    fixed-height footer slot
//!
//! The result carries each column's frame and vertical scroll extent.
//!
//! # Example
//!
//! ```ignore
//! use kanban_carousel::layout::measure_board;
//!
//! let layout = measure_board(&board, &config);
//! let todo = layout.column("todo");
//! ```

mod types;
mod taffy_bridge;

pub use types::*;
pub use taffy_bridge::measure_board;
