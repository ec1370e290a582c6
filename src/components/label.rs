//! Message label

use super::{Component, ComponentState, Control};
use crate::themes::Theme;
use crate::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

/// Multi-line text label shown at the top of a dialog.
///
/// An empty label measures zero height so it contributes nothing to dialog
/// layout or minimum size.
pub struct Label {
    state: ComponentState,
    text: String,
    autowrap: bool,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            state: ComponentState::new(),
            text: text.into(),
            autowrap: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_autowrap(&mut self, autowrap: bool) {
        self.autowrap = autowrap;
    }

    pub fn has_autowrap(&self) -> bool {
        self.autowrap
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of rows the text occupies when wrapped to `width` columns.
    pub fn wrapped_height(&self, width: u16) -> u16 {
        if self.text.is_empty() {
            return 0;
        }
        if !self.autowrap || width == 0 {
            return self.text.lines().count().max(1) as u16;
        }
        textwrap::wrap(&self.text, width as usize).len() as u16
    }
}

impl Control for Label {
    fn min_size(&self) -> (u16, u16) {
        if self.text.is_empty() {
            return (0, 0);
        }
        let width = if self.autowrap {
            // Wrapping can break anywhere between words; the widest word is
            // the narrowest the label can get.
            self.text
                .split_whitespace()
                .map(|word| word.width() as u16)
                .max()
                .unwrap_or(0)
        } else {
            self.text
                .lines()
                .map(|line| line.width() as u16)
                .max()
                .unwrap_or(0)
        };
        (width, self.text.lines().count().max(1) as u16)
    }
}

#[async_trait::async_trait]
impl Component for Label {
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if self.text.is_empty() || area.height == 0 {
            return;
        }
        let mut paragraph = Paragraph::new(self.text.clone()).style(theme.label_style());
        if self.autowrap {
            paragraph = paragraph.wrap(Wrap { trim: true });
        }
        frame.render_widget(paragraph, area);
    }

    fn size(&self) -> Rect {
        self.state.size
    }

    fn set_size(&mut self, size: Rect) {
        self.state.size = size;
    }

    fn is_visible(&self) -> bool {
        self.state.is_visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.state.is_visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_label_measures_zero() {
        let label = Label::new("");
        assert_eq!(label.min_size(), (0, 0));
        assert_eq!(label.wrapped_height(40), 0);
    }

    #[test]
    fn test_min_size_tracks_longest_line() {
        let label = Label::new("short\na much longer line");
        let (width, height) = label.min_size();
        assert_eq!(width, "a much longer line".len() as u16);
        assert_eq!(height, 2);
    }

    #[test]
    fn test_autowrap_min_width_is_longest_word() {
        let mut label = Label::new("delete everything irreversibly?");
        label.set_autowrap(true);
        let (width, _) = label.min_size();
        assert_eq!(width, "irreversibly?".len() as u16);
    }

    #[test]
    fn test_wrapped_height_grows_when_narrow() {
        let mut label = Label::new("one two three four five six seven eight");
        label.set_autowrap(true);
        assert!(label.wrapped_height(10) > label.wrapped_height(80));
    }
}
