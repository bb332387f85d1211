//! Column Layout Controller
//!
//! Owns one column's container measurement and its surface handle, derives
//! the card-list height, and decides what the column renders.
//!
//! Writes `measured_height` and `frame` of its column; nothing else does.

use crate::board::BoardContext;
use crate::config::BoardConfig;
use crate::layout::content_area_height;
use crate::render::{BoardRenderer, ColumnBody, ColumnHeader};
use crate::surface::ColumnSurface;
use crate::types::Column;

/// Layout state of one column.
pub struct ColumnLayoutController {
    column: Column,
    surface: Box<dyn ColumnSurface>,
    ctx: BoardContext,
    config: BoardConfig,
    available_height: f32,
}

impl ColumnLayoutController {
    pub fn new(
        column: Column,
        surface: Box<dyn ColumnSurface>,
        ctx: BoardContext,
        config: BoardConfig,
    ) -> Self {
        Self {
            column,
            surface,
            ctx,
            config,
            available_height: 0.0,
        }
    }

    pub fn column(&self) -> &Column {
        &self.column
    }

    pub fn set_config(&mut self, config: BoardConfig) {
        self.config = config;
    }

    pub fn available_height(&self) -> f32 {
        self.available_height
    }

    // =========================================================================
    // MEASUREMENT
    // =========================================================================

    /// Store the container height reported by the host. Latest value wins.
    pub fn on_container_measured(&mut self, height: f32) {
        self.available_height = height;
        self.column.set_measured_height(height);
        self.column.set_frame(self.surface.measure());
    }

    /// Height left for the card list.
    pub fn compute_content_area_height(&self) -> f32 {
        content_area_height(self.available_height, &self.config)
    }

    /// The card list's on-screen item set changed; ask for a re-measure of
    /// this column.
    pub fn on_viewable_items_changed(&self) {
        self.ctx.request_measure(Some(&self.column));
    }

    /// Scroll the card list programmatically.
    pub fn scroll_to_offset(&self, offset_y: f32) {
        self.surface.scroll_to_offset(offset_y, true);
    }

    // =========================================================================
    // GEOMETRY
    // =========================================================================

    fn single_data_column(&self) -> bool {
        self.ctx.column_count() == 1
    }

    pub fn column_width(&self) -> f32 {
        if self.single_data_column() {
            self.config.one_column_width
        } else {
            self.config.column_width
        }
    }

    pub fn margin_right(&self) -> f32 {
        if self.single_data_column() {
            0.0
        } else {
            self.config.column_margin
        }
    }

    // =========================================================================
    // RENDER DECISIONS
    // =========================================================================

    pub fn item_count(&self) -> usize {
        self.ctx.board().cards(self.column.id()).len()
    }

    /// List when there are cards, otherwise the renderer's empty state or
    /// the built-in placeholder.
    pub fn decide_empty_or_list<R: BoardRenderer>(
        &self,
        item_count: usize,
        renderer: &R,
    ) -> ColumnBody<R::Content> {
        if item_count > 0 {
            return ColumnBody::List {
                item_count,
                scroll_enabled: !self.ctx.board().moving_mode(),
            };
        }

        match renderer.render_empty_column(&self.column) {
            Some(content) => ColumnBody::CustomEmpty(content),
            None => ColumnBody::EmptyPlaceholder,
        }
    }

    /// Body for the column's current card count.
    pub fn body<R: BoardRenderer>(&self, renderer: &R) -> ColumnBody<R::Content> {
        self.decide_empty_or_list(self.item_count(), renderer)
    }

    pub fn header<R: BoardRenderer>(&self, renderer: &R) -> ColumnHeader<R::Content> {
        match renderer.render_column_header(&self.column) {
            Some(content) => ColumnHeader::Custom(content),
            None => ColumnHeader::Default {
                title: self.column.title().to_string(),
                badge: self
                    .config
                    .is_with_count_badge
                    .then(|| self.item_count()),
            },
        }
    }

    pub fn footer<R: BoardRenderer>(&self, renderer: &R) -> Option<R::Content> {
        renderer.render_column_footer(&self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use crate::board::testing::CountingBridge;
    use crate::board::BoardState;
    use crate::render::DefaultRenderer;
    use crate::surface::testing::RecordingSurface;
    use crate::types::{Card, Frame};

    struct EmptyText;

    impl BoardRenderer for EmptyText {
        type Content = &'static str;

        fn render_empty_column(&self, _column: &Column) -> Option<&'static str> {
            Some("Nothing here yet")
        }

        fn render_column_footer(&self, _column: &Column) -> Option<&'static str> {
            Some("+ Add card")
        }
    }

    struct Setup {
        controller: ColumnLayoutController,
        surface: Rc<RecordingSurface>,
        bridge: Rc<CountingBridge>,
        ctx: BoardContext,
    }

    fn setup(cards: Vec<Card>, extra_columns: usize, config: BoardConfig) -> Setup {
        let column = Column::new("todo", "To do");
        let mut board = BoardState::new();
        board.add_column(column.clone(), cards);
        for i in 0..extra_columns {
            board.add_column(Column::new(format!("extra-{i}"), "Extra"), vec![]);
        }

        let bridge = Rc::new(CountingBridge::default());
        let ctx = BoardContext::new(board, bridge.clone());
        let surface = RecordingSurface::shared();
        let controller =
            ColumnLayoutController::new(column, Box::new(surface.clone()), ctx.clone(), config);

        Setup {
            controller,
            surface,
            bridge,
            ctx,
        }
    }

    #[test]
    fn test_fallback_height_before_measure() {
        let s = setup(vec![], 0, BoardConfig::default());
        assert_eq!(s.controller.compute_content_area_height(), 500.0);
    }

    #[test]
    fn test_latest_measurement_wins() {
        let mut s = setup(vec![], 0, BoardConfig::default());
        s.surface.frame.set(Some(Frame::new(16.0, 40.0, 300.0, 640.0)));

        s.controller.on_container_measured(640.0);
        assert_eq!(s.controller.compute_content_area_height(), 580.0);

        s.controller.on_container_measured(420.0);
        assert_eq!(s.controller.compute_content_area_height(), 360.0);
        assert_eq!(s.controller.column().measured_height(), 420.0);
        assert_eq!(s.surface.measure_calls.get(), 2);
        assert_eq!(
            s.controller.column().frame(),
            Some(Frame::new(16.0, 40.0, 300.0, 640.0))
        );
        assert_eq!(s.bridge.count(), 0);
    }

    #[test]
    fn test_list_when_cards_present() {
        let s = setup(vec![Card::new("c1", "One")], 0, BoardConfig::default());

        assert_eq!(
            s.controller.body(&DefaultRenderer),
            ColumnBody::List {
                item_count: 1,
                scroll_enabled: true
            }
        );
    }

    #[test]
    fn test_list_scrolling_disabled_while_moving() {
        let s = setup(vec![Card::new("c1", "One")], 0, BoardConfig::default());
        s.ctx.board().set_moving_mode(true);

        assert_eq!(
            s.controller.body(&DefaultRenderer),
            ColumnBody::List {
                item_count: 1,
                scroll_enabled: false
            }
        );
    }

    #[test]
    fn test_empty_uses_custom_renderer() {
        let s = setup(vec![], 0, BoardConfig::default());

        assert_eq!(
            s.controller.decide_empty_or_list(0, &EmptyText),
            ColumnBody::CustomEmpty("Nothing here yet")
        );
        assert_eq!(
            s.controller.decide_empty_or_list(0, &DefaultRenderer),
            ColumnBody::EmptyPlaceholder
        );
    }

    #[test]
    fn test_viewable_items_request_column_measure() {
        let s = setup(vec![], 0, BoardConfig::default());

        s.controller.on_viewable_items_changed();

        assert_eq!(s.bridge.calls(), vec![Some("todo".to_string())]);
    }

    #[test]
    fn test_header_badge() {
        let config = BoardConfig {
            is_with_count_badge: true,
            ..Default::default()
        };
        let s = setup(vec![Card::new("a", "A"), Card::new("b", "B")], 0, config);

        assert_eq!(
            s.controller.header(&DefaultRenderer),
            ColumnHeader::Default {
                title: "To do".to_string(),
                badge: Some(2)
            }
        );
    }

    #[test]
    fn test_header_without_badge() {
        let s = setup(vec![Card::new("a", "A")], 0, BoardConfig::default());

        assert_eq!(
            s.controller.header(&DefaultRenderer),
            ColumnHeader::Default {
                title: "To do".to_string(),
                badge: None
            }
        );
    }

    #[test]
    fn test_footer_from_renderer() {
        let s = setup(vec![], 0, BoardConfig::default());
        assert_eq!(s.controller.footer(&EmptyText), Some("+ Add card"));
        assert_eq!(s.controller.footer(&DefaultRenderer), None);
    }

    #[test]
    fn test_width_depends_on_data_columns() {
        let config = BoardConfig {
            column_width: 280.0,
            one_column_width: 350.0,
            ..Default::default()
        };

        let single = setup(vec![], 0, config.clone());
        assert_eq!(single.controller.column_width(), 350.0);
        assert_eq!(single.controller.margin_right(), 0.0);

        let multi = setup(vec![], 2, config);
        assert_eq!(multi.controller.column_width(), 280.0);
        assert_eq!(multi.controller.margin_right(), 16.0);
    }

    #[test]
    fn test_scroll_to_offset_issues_command() {
        let s = setup(vec![], 0, BoardConfig::default());

        s.controller.scroll_to_offset(240.0);

        assert_eq!(s.surface.last_command(), Some(240.0));
    }
}
