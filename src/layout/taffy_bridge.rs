//! Taffy Bridge - Board measurement with the Taffy layout engine
//!
//! Builds a throwaway Taffy tree for the board's columns, computes it, and
//! extracts each column's frame back into a [`BoardLayout`].

use log::warn;
use taffy::{
    AvailableSpace, Dimension, Display, FlexDirection, LengthPercentage, LengthPercentageAuto,
    NodeId, Rect, Size, Style, TaffyError, TaffyTree,
};

use super::types::{content_area_height, BoardLayout, ColumnLayout};
use crate::board::BoardState;
use crate::config::{BoardConfig, FooterMode};
use crate::types::Frame;

// =============================================================================
// STYLE BUILDING
// =============================================================================

fn zero_padding() -> Rect<LengthPercentage> {
    Rect {
        top: LengthPercentage::Length(0.0),
        right: LengthPercentage::Length(0.0),
        bottom: LengthPercentage::Length(0.0),
        left: LengthPercentage::Length(0.0),
    }
}

/// Carousel content row: leading margin, fixed height.
fn root_style(config: &BoardConfig) -> Style {
    Style {
        display: Display::Flex,
        flex_direction: FlexDirection::Row,
        padding: Rect {
            left: LengthPercentage::Length(config.column_margin),
            ..zero_padding()
        },
        size: Size {
            width: Dimension::Auto,
            height: Dimension::Length(config.viewport_height.max(0.0)),
        },
        ..Default::default()
    }
}

/// One carousel item. Stretches to the row height.
fn item_style(width: f32, config: &BoardConfig) -> Style {
    Style {
        display: Display::Flex,
        flex_direction: FlexDirection::Column,
        flex_shrink: 0.0,
        size: Size {
            width: Dimension::Length(width),
            height: Dimension::Auto,
        },
        margin: Rect {
            top: LengthPercentageAuto::Length(0.0),
            right: LengthPercentageAuto::Length(config.column_margin),
            bottom: LengthPercentageAuto::Length(0.0),
            left: LengthPercentageAuto::Length(0.0),
        },
        ..Default::default()
    }
}

/// Column body inside an inline-footer item: takes what the slot leaves.
fn body_style() -> Style {
    Style {
        flex_grow: 1.0,
        flex_shrink: 1.0,
        ..Default::default()
    }
}

fn footer_slot_style(config: &BoardConfig) -> Style {
    Style {
        flex_shrink: 0.0,
        size: Size {
            width: Dimension::Auto,
            height: Dimension::Length(config.footer_slot_height),
        },
        ..Default::default()
    }
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

struct ItemNodes {
    item: NodeId,
    body: Option<NodeId>,
    footer: Option<NodeId>,
}

fn frame_of(tree: &TaffyTree<()>, node: NodeId, origin: (f32, f32)) -> Result<Frame, TaffyError> {
    let layout = tree.layout(node)?;
    Ok(Frame::new(
        origin.0 + layout.location.x,
        origin.1 + layout.location.y,
        layout.size.width,
        layout.size.height,
    ))
}

fn compute(board: &BoardState, config: &BoardConfig) -> Result<BoardLayout, TaffyError> {
    let mut tree: TaffyTree<()> = TaffyTree::new();
    let width = config.effective_item_width(board.column_count());

    let mut items = Vec::with_capacity(board.column_count());
    for _ in board.columns() {
        let nodes = match config.footer_mode {
            FooterMode::BelowScroll => ItemNodes {
                item: tree.new_leaf(item_style(width, config))?,
                body: None,
                footer: None,
            },
            FooterMode::Inline => {
                let body = tree.new_leaf(body_style())?;
                let footer = tree.new_leaf(footer_slot_style(config))?;
                let item = tree.new_with_children(item_style(width, config), &[body, footer])?;
                ItemNodes {
                    item,
                    body: Some(body),
                    footer: Some(footer),
                }
            }
        };
        items.push(nodes);
    }

    let children: Vec<NodeId> = items.iter().map(|n| n.item).collect();
    let root = tree.new_with_children(root_style(config), &children)?;

    let available = Size {
        width: AvailableSpace::MaxContent,
        height: AvailableSpace::Definite(config.viewport_height.max(0.0)),
    };
    tree.compute_layout(root, available)?;

    let root_layout = tree.layout(root)?;
    let mut result = BoardLayout {
        columns: Vec::with_capacity(items.len()),
        content_width: root_layout.size.width,
        content_height: root_layout.size.height,
    };

    for (column, nodes) in board.columns().iter().zip(&items) {
        let item_frame = frame_of(&tree, nodes.item, (0.0, 0.0))?;
        let item_origin = (item_frame.x, item_frame.y);

        let frame = match nodes.body {
            Some(body) => frame_of(&tree, body, item_origin)?,
            None => item_frame,
        };
        let footer_slot = match nodes.footer {
            Some(footer) => Some(frame_of(&tree, footer, item_origin)?),
            None => None,
        };

        // Host measurement wins over the computed frame once it exists
        let available_height = if column.measured_height() > 0.0 {
            column.measured_height()
        } else {
            frame.height
        };
        let content_area = content_area_height(available_height, config);

        result.columns.push(ColumnLayout {
            column_id: column.id().to_string(),
            frame,
            footer_slot,
            content_area_height: content_area,
            max_scroll_y: (column.content_height() - content_area).max(0.0),
        });
    }

    Ok(result)
}

/// Measure every column of the board.
///
/// A Taffy failure is logged and yields an empty layout; measurement is
/// advisory and never aborts event handling.
pub fn measure_board(board: &BoardState, config: &BoardConfig) -> BoardLayout {
    match compute(board, config) {
        Ok(layout) => layout,
        Err(err) => {
            warn!("board measurement failed: {err}");
            BoardLayout::default()
        }
    }
}
