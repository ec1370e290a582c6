//! Theming for dialog widgets
//!
//! A small semantic theme: named colors plus the layout constants the dialog
//! system reads (margins around content and between buttons). Dialogs never
//! hardcode colors; everything visual is resolved through a [`Theme`] at
//! render time.

use ratatui::style::{Color, Modifier, Style};

/// Visual style configuration consumed by dialog widgets.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub is_dark: bool,

    // Primary brand color, used for the focused button
    pub primary: Color,

    // Background colors
    pub bg_base: Color,
    pub bg_overlay: Color,

    // Foreground colors
    pub fg_base: Color,
    pub fg_muted: Color,

    // Border colors
    pub border: Color,
    pub border_focus: Color,

    // Status colors
    pub error: Color,

    // Dialog layout constants, in terminal cells
    pub dialog_margin: u16,
    pub dialog_button_margin: u16,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "dark".to_string(),
            is_dark: true,
            primary: Color::Rgb(138, 99, 210),
            bg_base: Color::Rgb(24, 24, 32),
            bg_overlay: Color::Rgb(38, 38, 50),
            fg_base: Color::Rgb(220, 220, 228),
            fg_muted: Color::Rgb(140, 140, 152),
            border: Color::Rgb(70, 70, 86),
            border_focus: Color::Rgb(138, 99, 210),
            error: Color::Rgb(220, 80, 80),
            dialog_margin: 1,
            dialog_button_margin: 1,
        }
    }
}

impl Theme {
    /// Style for the dialog background panel.
    pub fn panel_style(&self) -> Style {
        Style::default().bg(self.bg_overlay)
    }

    /// Style for the dialog border and title chrome.
    pub fn chrome_style(&self, focused: bool) -> Style {
        let color = if focused { self.border_focus } else { self.border };
        Style::default().fg(color)
    }

    /// Style for the message label.
    pub fn label_style(&self) -> Style {
        Style::default().fg(self.fg_base)
    }

    /// Style for a button in the given interaction state.
    pub fn button_style(&self, focused: bool, enabled: bool) -> Style {
        if !enabled {
            Style::default()
                .fg(self.fg_muted)
                .add_modifier(Modifier::DIM)
        } else if focused {
            Style::default()
                .bg(self.primary)
                .fg(self.fg_base)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(self.bg_overlay).fg(self.fg_base)
        }
    }

    /// Style for single-line text input fields.
    pub fn input_style(&self, focused: bool) -> Style {
        let style = Style::default().fg(self.fg_base).bg(self.bg_base);
        if focused {
            style.add_modifier(Modifier::UNDERLINED)
        } else {
            style
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_margins() {
        let theme = Theme::default();
        assert_eq!(theme.dialog_margin, 1);
        assert_eq!(theme.dialog_button_margin, 1);
        assert!(theme.is_dark);
    }

    #[test]
    fn test_button_style_variants_differ() {
        let theme = Theme::default();
        assert_ne!(
            theme.button_style(true, true),
            theme.button_style(false, true)
        );
        assert_ne!(
            theme.button_style(false, true),
            theme.button_style(false, false)
        );
    }
}
