//! State Module - Scroll and layout controllers
//!
//! - **ScrollTracker** - per-column vertical offset reconciliation
//! - **ColumnLayoutController** - column measurement and render decisions
//! - **CarouselSnapController** - horizontal snap state for the board
//! - **CardController** - press, long press, drag lifecycle
//! - **BoardCallbacks** - notifications back to the host

mod callbacks;
mod card;
mod carousel;
mod column_layout;
mod scroll_tracker;

pub use callbacks::*;
pub use card::*;
pub use carousel::*;
pub use column_layout::*;
pub use scroll_tracker::*;
