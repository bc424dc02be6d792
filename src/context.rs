use std::borrow::Cow;

use ratatui::style::Style;
use ratatui::text::Span;

#[derive(Clone, Copy)]
pub struct LeafRowContext<'a> {
    pub label: &'a str,
    pub depth: u16,
    /// Affix glyph, `None` when the leaf has no children.
    pub affix: Option<&'a str>,
    pub affix_width: usize,
    pub indent_style: Style,
    pub affix_style: Style,
    pub label_style: Style,
}

impl<'a> LeafRowContext<'a> {
    /// Affix padded to `affix_width` columns, blank when hidden.
    pub fn affix_text(&self) -> Cow<'a, str> {
        let glyph = self.affix.unwrap_or("");
        let pad = self.affix_width.saturating_sub(Span::raw(glyph).width());
        if pad == 0 {
            Cow::Borrowed(glyph)
        } else {
            Cow::Owned(format!("{glyph}{}", " ".repeat(pad)))
        }
    }
}
