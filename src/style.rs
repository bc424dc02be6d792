use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Borders;

/// Visual settings of the log tree widget.
#[derive(Clone)]
pub struct LogViewStyle<'a> {
    pub title: Option<Line<'a>>,
    pub block_style: Style,
    pub border_style: Style,
    pub indent_style: Style,
    pub affix_style: Style,
    pub label_style: Style,
    pub placeholder_style: Style,
    pub borders: Borders,
}

impl Default for LogViewStyle<'_> {
    fn default() -> Self {
        Self {
            title: None,
            block_style: Style::default(),
            border_style: Style::default(),
            indent_style: Style::default(),
            affix_style: Style::default(),
            label_style: Style::default(),
            placeholder_style: Style::default(),
            borders: Borders::ALL,
        }
    }
}
