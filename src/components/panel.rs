//! Background panel

use super::{Component, ComponentState};
use crate::themes::Theme;
use crate::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Clear};

/// Flat fill behind a dialog's children. Always covers the full dialog area.
pub struct Panel {
    state: ComponentState,
}

impl Panel {
    pub fn new() -> Self {
        Self {
            state: ComponentState::new(),
        }
    }

    /// Re-resolve panel styling after a theme change. Colors are looked up
    /// from the theme on every render, so this only logs the churn.
    pub fn restyle(&mut self) {
        tracing::trace!("dialog panel restyled");
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Component for Panel {
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(theme.panel_style()), area);
    }

    fn size(&self) -> Rect {
        self.state.size
    }

    fn set_size(&mut self, size: Rect) {
        self.state.size = size;
    }
}
