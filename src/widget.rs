use ratatui::layout::Rect;
use ratatui::prelude::Buffer;
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph, StatefulWidget, Widget};

use crate::context::LeafRowContext;
use crate::event::ClickEvent;
use crate::glyphs::leaf_line;
use crate::render::{LeafId, RenderedTree};
use crate::style::LogViewStyle;
use crate::view::LogView;

/// Screen cells occupied by one painted leaf.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HitRow {
    pub y: u16,
    pub leaf: LeafId,
    /// Columns `[start, end)` of the affix, `None` when it is hidden.
    pub affix: Option<(u16, u16)>,
    /// Columns `[start, end)` of the label.
    pub label: (u16, u16),
}

/// Click targets recorded by the last paint, plus the scroll offset.
#[derive(Clone, Debug, Default)]
pub struct HitMap {
    rows: Vec<HitRow>,
    offset: usize,
    total: usize,
    viewport: usize,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[HitRow] {
        &self.rows
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn scroll_down_by(&mut self, amount: usize) {
        let max = self.total.saturating_sub(self.viewport);
        self.offset = self.offset.saturating_add(amount);
        if self.offset > max {
            self.offset = max;
        }
    }

    pub const fn scroll_up_by(&mut self, amount: usize) {
        self.offset = self.offset.saturating_sub(amount);
    }

    /// Maps a screen cell to the label or affix painted there.
    pub fn target_at(&self, x: u16, y: u16) -> Option<ClickEvent> {
        let row = self.rows.iter().find(|row| row.y == y)?;
        if let Some((start, end)) = row.affix
            && (start..end).contains(&x)
        {
            return Some(ClickEvent::affix(row.leaf));
        }
        (row.label.0..row.label.1)
            .contains(&x)
            .then(|| ClickEvent::label(row.leaf))
    }
}

/// Paints a [`LogView`]'s container: visible leaves or the placeholder text.
pub struct LogTreeView<'a> {
    view: &'a LogView,
    style: LogViewStyle<'a>,
}

impl<'a> LogTreeView<'a> {
    pub const fn new(view: &'a LogView, style: LogViewStyle<'a>) -> Self {
        Self { view, style }
    }

    fn paint_tree(&self, tree: &RenderedTree, area: Rect, buf: &mut Buffer, hits: &mut HitMap) {
        let glyphs = self.view.config().glyphs;
        let indent_width = text_width(glyphs.indent);
        let affix_width = Span::raw(glyphs.expanded)
            .width()
            .max(Span::raw(glyphs.collapsed).width());
        let right = area.right();

        let visible = tree.visible_leaves();
        hits.total = visible.len();
        hits.viewport = usize::from(area.height);
        hits.scroll_down_by(0);

        for (row_idx, id) in visible
            .iter()
            .skip(hits.offset)
            .take(usize::from(area.height))
            .enumerate()
        {
            let Some(leaf) = tree.leaf(*id) else {
                continue;
            };
            let y = area.y + u16::try_from(row_idx).unwrap_or(u16::MAX);
            let affix = (!leaf.affix.hidden).then_some(leaf.affix.text);
            let ctx = LeafRowContext {
                label: &leaf.label,
                depth: leaf.depth,
                affix,
                affix_width,
                indent_style: self.style.indent_style,
                affix_style: self.style.affix_style,
                label_style: self.style.label_style,
            };
            buf.set_line(area.x, y, &leaf_line(&ctx, &glyphs), area.width);

            let affix_start = area
                .x
                .saturating_add(indent_width.saturating_mul(leaf.depth))
                .min(right);
            let affix_end = affix_start.saturating_add(clamp_u16(affix_width)).min(right);
            let label_start = affix_end.saturating_add(1).min(right);
            let label_end = label_start
                .saturating_add(text_width(&leaf.label))
                .min(right);
            hits.rows.push(HitRow {
                y,
                leaf: *id,
                affix: affix.map(|_| (affix_start, affix_end)),
                label: (label_start, label_end),
            });
        }
    }
}

impl StatefulWidget for LogTreeView<'_> {
    type State = HitMap;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let mut block = Block::default().borders(self.style.borders);
        if let Some(title) = self.style.title.clone() {
            block = block.title(title);
        }
        block = block
            .style(self.style.block_style)
            .border_style(self.style.border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        state.rows.clear();
        if let Some(tree) = self.view.tree() {
            self.paint_tree(tree, inner, buf, state);
        } else if let Some(text) = self.view.container().placeholder() {
            state.total = 0;
            state.offset = 0;
            Paragraph::new(text)
                .style(self.style.placeholder_style)
                .render(inner, buf);
        }
    }
}

fn text_width(text: &str) -> u16 {
    clamp_u16(Span::raw(text).width())
}

fn clamp_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use ratatui::widgets::Borders;

    use super::*;
    use crate::config::LogViewConfig;
    use crate::glyphs::LeafGlyphs;
    use crate::model::{Node, Tree};

    fn view() -> LogView {
        let tree = Tree::new(vec![
            Node::new("a.b.C")
                .expanded(true)
                .child(Node::with_value("a.b.C.d", "Hi")),
            Node::new("a.b.E").child(Node::new("a.b.E.f")),
        ]);
        LogView::new(&tree, "log", None)
    }

    fn bare_style() -> LogViewStyle<'static> {
        LogViewStyle {
            borders: Borders::NONE,
            ..LogViewStyle::default()
        }
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[test]
    fn paints_visible_leaves_with_affixes() {
        let view = view();
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);
        let mut hits = HitMap::new();

        LogTreeView::new(&view, bare_style()).render(area, &mut buf, &mut hits);

        assert_eq!(row_text(&buf, 0), "- C");
        assert_eq!(row_text(&buf, 1), "    Hi");
        assert_eq!(row_text(&buf, 2), "+ E");
        assert_eq!(row_text(&buf, 3), "");
        assert_eq!(hits.rows().len(), 3);
    }

    #[test]
    fn hit_map_resolves_affix_and_label() {
        let view = view();
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);
        let mut hits = HitMap::new();

        LogTreeView::new(&view, bare_style()).render(area, &mut buf, &mut hits);
        let tree = view.tree().expect("rendered tree");
        let c = tree.find_by_label("C").expect("leaf C");
        let hi = tree.find_by_label("Hi").expect("leaf Hi");

        assert_eq!(hits.target_at(0, 0), Some(ClickEvent::affix(c)));
        assert_eq!(hits.target_at(2, 0), Some(ClickEvent::label(c)));
        assert_eq!(hits.target_at(1, 0), None);
        assert_eq!(hits.target_at(2, 1), None);
        assert_eq!(hits.target_at(4, 1), Some(ClickEvent::label(hi)));
        assert_eq!(hits.target_at(0, 3), None);
    }

    #[test]
    fn uneven_glyphs_keep_targets_on_painted_text() {
        let glyphs = LeafGlyphs {
            expanded: "[-]",
            collapsed: "+",
            ..LeafGlyphs::ascii()
        };
        let tree = Tree::new(vec![Node::new("Root").child(Node::new("Root.leaf"))]);
        let view = LogView::with_config(&tree, "log", None, LogViewConfig::new().glyphs(glyphs));
        let area = Rect::new(0, 0, 20, 2);
        let mut buf = Buffer::empty(area);
        let mut hits = HitMap::new();

        LogTreeView::new(&view, bare_style()).render(area, &mut buf, &mut hits);
        let root = view.tree().and_then(|tree| tree.find_by_label("Root")).expect("leaf Root");

        assert_eq!(row_text(&buf, 0), "+   Root");
        assert_eq!(hits.rows()[0].affix, Some((0, 3)));
        assert_eq!(hits.rows()[0].label, (4, 8));
        assert_eq!(hits.target_at(0, 0), Some(ClickEvent::affix(root)));
        assert_eq!(hits.target_at(2, 0), Some(ClickEvent::affix(root)));
        assert_eq!(hits.target_at(3, 0), None);
        assert_eq!(hits.target_at(4, 0), Some(ClickEvent::label(root)));
    }

    #[test]
    fn unicode_glyphs_from_config_are_painted() {
        let tree = Tree::new(vec![
            Node::new("a.b.C")
                .expanded(true)
                .child(Node::with_value("a.b.C.d", "Hi")),
            Node::new("a.b.E").child(Node::new("a.b.E.f")),
        ]);
        let config = LogViewConfig::new().glyphs(LeafGlyphs::unicode());
        let view = LogView::with_config(&tree, "log", None, config);
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        let mut hits = HitMap::new();

        LogTreeView::new(&view, bare_style()).render(area, &mut buf, &mut hits);
        let c = view.tree().and_then(|tree| tree.find_by_label("C")).expect("leaf C");

        assert_eq!(row_text(&buf, 0), "▼ C");
        assert_eq!(row_text(&buf, 1), "    Hi");
        assert_eq!(row_text(&buf, 2), "▶ E");
        assert_eq!(hits.target_at(0, 0), Some(ClickEvent::affix(c)));
        assert_eq!(hits.target_at(2, 0), Some(ClickEvent::label(c)));
    }

    #[test]
    fn placeholder_is_painted_without_targets() {
        let view = LogView::new(&Tree::default(), "log", None);
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        let mut hits = HitMap::new();

        LogTreeView::new(&view, bare_style()).render(area, &mut buf, &mut hits);

        assert_eq!(row_text(&buf, 0), "No data to display");
        assert!(hits.rows().is_empty());
    }

    #[test]
    fn offset_scrolls_rows_and_is_clamped() {
        let view = view();
        let area = Rect::new(0, 0, 20, 2);
        let mut buf = Buffer::empty(area);
        let mut hits = HitMap::new();
        let widget = || LogTreeView::new(&view, bare_style());

        widget().render(area, &mut buf, &mut hits);
        hits.scroll_down_by(10);
        assert_eq!(hits.offset(), 1);

        buf = Buffer::empty(area);
        widget().render(area, &mut buf, &mut hits);
        assert_eq!(row_text(&buf, 0), "    Hi");
        assert_eq!(row_text(&buf, 1), "+ E");
    }

    #[test]
    fn render_smoke_with_borders_and_title() {
        let view = view();
        let style = LogViewStyle {
            title: Some("log".into()),
            ..LogViewStyle::default()
        };
        let area = Rect::new(0, 0, 12, 4);
        let mut buf = Buffer::empty(area);
        let mut hits = HitMap::new();

        LogTreeView::new(&view, style).render(area, &mut buf, &mut hits);

        assert_eq!(hits.rows().len(), 2);
        assert!(hits.rows().iter().all(|row| row.y >= 1 && row.label.0 >= 1));
    }
}
