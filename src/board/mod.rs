//! Board Module
//!
//! - **State** - columns, cards, moving mode, shared context
//! - **Bridge** - board re-measurement requests and their coalescing
//! - **Dispatch** - `KanbanBoard`, the single-threaded event router

mod bridge;
mod dispatch;
mod state;

pub use bridge::*;
pub use dispatch::*;
pub use state::*;

#[cfg(test)]
pub(crate) use bridge::testing;
