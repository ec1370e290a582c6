//! Dialog push button

use super::{Component, ComponentState};
use crate::themes::Theme;
use crate::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;
use uuid::Uuid;

/// What pressing a button means to the owning dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonRole {
    /// The permanent confirm button.
    Ok,

    /// A button wired to the cancel path.
    Cancel,

    /// A user-added action button. An empty id still reports the press but
    /// raises no custom-action event.
    Action(String),
}

/// A push button inside a dialog's button row.
#[derive(Debug)]
pub struct Button {
    state: ComponentState,
    id: Uuid,
    label: String,
    role: ButtonRole,
}

impl Button {
    pub fn new(label: impl Into<String>, role: ButtonRole) -> Self {
        Self {
            state: ComponentState::new(),
            id: Uuid::new_v4(),
            label: label.into(),
            role,
        }
    }

    pub(crate) fn id(&self) -> Uuid {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn role(&self) -> &ButtonRole {
        &self.role
    }

    pub fn is_disabled(&self) -> bool {
        !self.state.is_enabled
    }

    /// A disabled button cannot be pressed or focused.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.state.is_enabled = !disabled;
        if disabled {
            self.state.has_focus = false;
        }
    }

    /// Bordered label plus one cell of horizontal padding on each side.
    pub fn min_size(&self) -> (u16, u16) {
        (self.label.width() as u16 + 4, 3)
    }
}

#[async_trait::async_trait]
impl Component for Button {
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let style = theme.button_style(self.state.has_focus, self.state.is_enabled);
        let widget = Paragraph::new(format!(" {} ", self.label))
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(widget, area);
    }

    fn size(&self) -> Rect {
        self.state.size
    }

    fn set_size(&mut self, size: Rect) {
        self.state.size = size;
    }

    fn has_focus(&self) -> bool {
        self.state.has_focus
    }

    fn set_focus(&mut self, focus: bool) {
        self.state.has_focus = focus && self.state.is_enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_size_from_label() {
        let button = Button::new("OK", ButtonRole::Ok);
        assert_eq!(button.min_size(), (6, 3));
    }

    #[test]
    fn test_disabled_button_refuses_focus() {
        let mut button = Button::new("OK", ButtonRole::Ok);
        button.set_disabled(true);
        button.set_focus(true);
        assert!(!button.has_focus());
    }

    #[test]
    fn test_disabling_drops_focus() {
        let mut button = Button::new("OK", ButtonRole::Ok);
        button.set_focus(true);
        assert!(button.has_focus());
        button.set_disabled(true);
        assert!(!button.has_focus());
    }
}
