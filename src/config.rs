use std::borrow::Cow;

use crate::glyphs::LeafGlyphs;

pub const DEFAULT_PLACEHOLDER: &str = "No data to display";

/// Construction-time settings of a log view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogViewConfig {
    /// Affix glyphs written into rendered leaves.
    pub glyphs: LeafGlyphs<'static>,
    /// Text shown instead of the tree when there is nothing to display.
    pub placeholder: Cow<'static, str>,
}

impl LogViewConfig {
    pub const fn new() -> Self {
        Self {
            glyphs: LeafGlyphs::ascii(),
            placeholder: Cow::Borrowed(DEFAULT_PLACEHOLDER),
        }
    }

    #[must_use]
    pub const fn glyphs(mut self, glyphs: LeafGlyphs<'static>) -> Self {
        self.glyphs = glyphs;
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<Cow<'static, str>>) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}

impl Default for LogViewConfig {
    fn default() -> Self {
        Self::new()
    }
}
