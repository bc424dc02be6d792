use ratatui::text::{Line, Span};

use crate::context::LeafRowContext;

/// Strings used for the expand affix and indentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeafGlyphs<'a> {
    pub indent: &'a str,
    pub expanded: &'a str,
    pub collapsed: &'a str,
}

impl LeafGlyphs<'static> {
    pub const fn ascii() -> Self {
        Self {
            indent: "  ",
            expanded: "-",
            collapsed: "+",
        }
    }

    pub const fn unicode() -> Self {
        Self {
            indent: "  ",
            expanded: "▼",
            collapsed: "▶",
        }
    }
}

impl Default for LeafGlyphs<'static> {
    fn default() -> Self {
        Self::ascii()
    }
}

impl<'a> LeafGlyphs<'a> {
    pub const fn affix(&self, expanded: bool) -> &'a str {
        if expanded { self.expanded } else { self.collapsed }
    }
}

/// Builds the terminal line for one leaf: indentation, affix, label.
///
/// Every affix, hidden or not, takes `affix_width` columns so labels of
/// siblings line up.
pub fn leaf_line<'a>(ctx: &LeafRowContext<'a>, glyphs: &LeafGlyphs<'a>) -> Line<'a> {
    let mut spans = Vec::with_capacity(usize::from(ctx.depth) + 3);
    for _ in 0..ctx.depth {
        spans.push(Span::styled(glyphs.indent, ctx.indent_style));
    }
    spans.push(Span::styled(ctx.affix_text(), ctx.affix_style));
    spans.push(Span::raw(" "));
    spans.push(Span::styled(ctx.label, ctx.label_style));
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use ratatui::style::Style;

    use super::*;

    fn ctx<'a>(label: &'a str, depth: u16, affix: Option<&'a str>) -> LeafRowContext<'a> {
        LeafRowContext {
            label,
            depth,
            affix,
            affix_width: 1,
            indent_style: Style::default(),
            affix_style: Style::default(),
            label_style: Style::default(),
        }
    }

    #[test]
    fn line_indents_and_prefixes_affix() {
        let line = leaf_line(&ctx("Foo", 2, Some("+")), &LeafGlyphs::ascii());

        assert_eq!(line.to_string(), "    + Foo");
    }

    #[test]
    fn hidden_affix_keeps_alignment() {
        let line = leaf_line(&ctx("bar", 1, None), &LeafGlyphs::ascii());

        assert_eq!(line.to_string(), "    bar");
    }

    #[test]
    fn affix_matches_state() {
        let glyphs = LeafGlyphs::ascii();

        assert_eq!(glyphs.affix(true), "-");
        assert_eq!(glyphs.affix(false), "+");
    }
}
