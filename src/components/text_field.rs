//! Single-line text input field

use super::{Component, ComponentState, Control};
use crate::themes::Theme;
use crate::Frame;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::widgets::Paragraph;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Minimal one-line text input with a grapheme-aware cursor.
///
/// This is the control class a dialog accepts for enter-to-confirm
/// registration; pressing Enter inside a registered field routes through the
/// dialog's confirm path.
pub struct TextField {
    state: ComponentState,
    text: String,
    /// Cursor position in grapheme clusters, 0..=grapheme_count.
    cursor: usize,
    placeholder: String,
}

impl TextField {
    pub fn new() -> Self {
        Self {
            state: ComponentState::new(),
            text: String::new(),
            cursor: 0,
            placeholder: String::new(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.grapheme_count();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn grapheme_count(&self) -> usize {
        self.text.graphemes(true).count()
    }

    /// Byte offset of the grapheme at `index`, or the end of the string.
    fn byte_offset(&self, index: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .nth(index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.text.len())
    }

    fn insert_char(&mut self, c: char) {
        let offset = self.byte_offset(self.cursor);
        self.text.insert(offset, c);
        self.cursor += 1;
    }

    fn delete_previous(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.byte_offset(self.cursor - 1);
        let end = self.byte_offset(self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
    }

    fn delete_current(&mut self) {
        if self.cursor >= self.grapheme_count() {
            return;
        }
        let start = self.byte_offset(self.cursor);
        let end = self.byte_offset(self.cursor + 1);
        self.text.replace_range(start..end, "");
    }
}

impl Default for TextField {
    fn default() -> Self {
        Self::new()
    }
}

impl Control for TextField {
    fn min_size(&self) -> (u16, u16) {
        ((self.text.width() as u16 + 2).max(12), 1)
    }

    fn is_text_input(&self) -> bool {
        true
    }
}

#[async_trait::async_trait]
impl Component for TextField {
    async fn handle_key_event(&mut self, event: KeyEvent) -> Result<()> {
        match event.code {
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.delete_previous(),
            KeyCode::Delete => self.delete_current(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.grapheme_count()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.grapheme_count(),
            _ => {}
        }
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if area.height == 0 {
            return;
        }
        let style = theme.input_style(self.state.has_focus);
        let widget = if self.text.is_empty() && !self.placeholder.is_empty() {
            Paragraph::new(self.placeholder.clone()).style(style.add_modifier(Modifier::DIM))
        } else {
            Paragraph::new(self.text.clone()).style(style)
        };
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
        self.state.has_focus = focus;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_backspace() {
        let mut field = TextField::new();
        field.handle_key_event(KeyEvent::from(KeyCode::Char('h'))).await.unwrap();
        field.handle_key_event(KeyEvent::from(KeyCode::Char('i'))).await.unwrap();
        assert_eq!(field.text(), "hi");
        assert_eq!(field.cursor(), 2);

        field.handle_key_event(KeyEvent::from(KeyCode::Backspace)).await.unwrap();
        assert_eq!(field.text(), "h");
        assert_eq!(field.cursor(), 1);
    }

    #[tokio::test]
    async fn test_insert_at_cursor() {
        let mut field = TextField::new();
        field.set_text("ac");
        field.handle_key_event(KeyEvent::from(KeyCode::Left)).await.unwrap();
        field.handle_key_event(KeyEvent::from(KeyCode::Char('b'))).await.unwrap();
        assert_eq!(field.text(), "abc");
    }

    #[tokio::test]
    async fn test_cursor_respects_graphemes() {
        let mut field = TextField::new();
        field.set_text("héllo");
        assert_eq!(field.cursor(), 5);

        field.handle_key_event(KeyEvent::from(KeyCode::Home)).await.unwrap();
        field.handle_key_event(KeyEvent::from(KeyCode::Right)).await.unwrap();
        field.handle_key_event(KeyEvent::from(KeyCode::Delete)).await.unwrap();
        assert_eq!(field.text(), "hllo");
    }

    #[test]
    fn test_is_text_input() {
        assert!(TextField::new().is_text_input());
        assert_eq!(TextField::new().min_size().1, 1);
    }
}
