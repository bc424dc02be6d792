use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::error::LogViewError;
use crate::event::ClickEvent;
use crate::view::LogView;
use crate::widget::HitMap;

const SCROLL_STEP: usize = 1;

impl HitMap {
    /// Resolves a left-button press to the click target under the cursor.
    pub fn click_for(&self, mouse: MouseEvent) -> Option<ClickEvent> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.target_at(mouse.column, mouse.row),
            _ => None,
        }
    }
}

impl LogView {
    /// Routes a crossterm mouse event through the last painted hit map.
    ///
    /// Left clicks on a label or affix go to [`LogView::click`]; the wheel
    /// scrolls. Returns whether the event was consumed.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, hits: &mut HitMap) -> Result<bool, LogViewError> {
        match mouse.kind {
            MouseEventKind::ScrollDown => {
                hits.scroll_down_by(SCROLL_STEP);
                Ok(true)
            }
            MouseEventKind::ScrollUp => {
                hits.scroll_up_by(SCROLL_STEP);
                Ok(true)
            }
            _ => {
                let Some(click) = hits.click_for(mouse) else {
                    return Ok(false);
                };
                self.click(click)?;
                Ok(true)
            }
        }
    }
}
