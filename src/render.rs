//! Render Capabilities
//!
//! The host's rendering hooks, as a trait with optional methods. Each
//! method returning `None` selects the built-in default for that slot:
//!
//! | Hook                    | Default                                  |
//! |-------------------------|------------------------------------------|
//! | `render_card_content`   | title, subtitle, description, tags       |
//! | `render_empty_column`   | built-in empty-column placeholder        |
//! | `render_column_header`  | column title, optional count badge       |
//! | `render_column_footer`  | no footer                                |
//!
//! The renderer is a generic parameter, so the choice is made statically.

use crate::types::{Card, Column, Tag};

/// Host rendering hooks.
pub trait BoardRenderer {
    /// Whatever the host's view tree is made of.
    type Content;

    fn render_card_content(&self, _card: &Card) -> Option<Self::Content> {
        None
    }

    fn render_empty_column(&self, _column: &Column) -> Option<Self::Content> {
        None
    }

    fn render_column_header(&self, _column: &Column) -> Option<Self::Content> {
        None
    }

    fn render_column_footer(&self, _column: &Column) -> Option<Self::Content> {
        None
    }
}

/// Renderer with no hooks; every slot uses its default.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultRenderer;

impl BoardRenderer for DefaultRenderer {
    type Content = ();
}

// =============================================================================
// SLOT DECISIONS
// =============================================================================

/// What fills a column's body.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnBody<C> {
    /// Scrollable card list.
    List { item_count: usize, scroll_enabled: bool },
    /// Host-supplied empty state.
    CustomEmpty(C),
    /// Built-in empty placeholder.
    EmptyPlaceholder,
}

impl<C> ColumnBody<C> {
    pub fn is_list(&self) -> bool {
        matches!(self, ColumnBody::List { .. })
    }
}

/// What fills a column's header.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnHeader<C> {
    Custom(C),
    Default { title: String, badge: Option<usize> },
}

/// What fills a card.
#[derive(Debug, Clone, PartialEq)]
pub enum CardBody<C> {
    Custom(C),
    Default {
        title: String,
        subtitle: String,
        description: String,
        tags: Vec<Tag>,
    },
}

/// Card body: custom content if the renderer supplies it.
pub fn card_body<R: BoardRenderer>(renderer: &R, card: &Card) -> CardBody<R::Content> {
    match renderer.render_card_content(card) {
        Some(content) => CardBody::Custom(content),
        None => CardBody::Default {
            title: card.title.clone(),
            subtitle: card.subtitle.clone(),
            description: card.description.clone(),
            tags: card.tags.clone(),
        },
    }
}
