//! Widget primitives used by the dialog system
//!
//! Everything a dialog places inside itself implements [`Component`]; children
//! that participate in layout additionally implement [`Control`], which
//! exposes the minimum-size contract the layout engine consumes.

pub mod button;
pub mod button_row;
pub mod label;
pub mod panel;
pub mod text_field;

pub use button::{Button, ButtonRole};
pub use button_row::ButtonRow;
pub use label::Label;
pub use panel::Panel;
pub use text_field::TextField;

use crate::themes::Theme;
use crate::Frame;
use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::KeyEvent;
use ratatui::layout::Rect;

/// Base trait for all UI components
#[async_trait]
pub trait Component: Send + Sync {
    /// Handle keyboard input
    async fn handle_key_event(&mut self, event: KeyEvent) -> Result<()> {
        let _ = event;
        Ok(())
    }

    /// Render the component
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme);

    /// Get component dimensions
    fn size(&self) -> Rect;

    /// Set component dimensions
    fn set_size(&mut self, size: Rect);

    /// Check if component has focus
    fn has_focus(&self) -> bool {
        false
    }

    /// Set component focus
    fn set_focus(&mut self, focus: bool) {
        let _ = focus;
    }

    /// Check if component is visible
    fn is_visible(&self) -> bool {
        true
    }

    /// Set component visibility
    fn set_visible(&mut self, visible: bool) {
        let _ = visible;
    }
}

/// A component that can be placed in a dialog's content area.
///
/// The layout engine assigns every content control the same rectangle and
/// folds their minimum sizes into the dialog's own minimum size.
pub trait Control: Component {
    /// Smallest (width, height) this control renders legibly at.
    fn min_size(&self) -> (u16, u16);

    /// Whether this control accepts line-oriented text input. Only text-input
    /// controls can be registered for enter-to-confirm.
    fn is_text_input(&self) -> bool {
        false
    }
}

/// Base component state
#[derive(Debug, Clone)]
pub struct ComponentState {
    pub size: Rect,
    pub has_focus: bool,
    pub is_visible: bool,
    pub is_enabled: bool,
}

impl Default for ComponentState {
    fn default() -> Self {
        Self {
            size: Rect::default(),
            has_focus: false,
            is_visible: true,
            is_enabled: true,
        }
    }
}

impl ComponentState {
    pub fn new() -> Self {
        Self::default()
    }
}
