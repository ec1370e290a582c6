//! Horizontal button row
//!
//! The row that lines up a dialog's buttons: a permanent OK button plus any
//! caller-added buttons, separated by flexible spacers. Entry order is the
//! source of truth for both rendering and focus traversal.
//!
//! Composition starts as `[spacer, OK, spacer]`. Leading buttons are inserted
//! at the front, trailing buttons appended at the back, each with a companion
//! spacer directly after it. Removal takes the button and that companion,
//! tolerating a spacer that has already gone missing.

use super::{Button, Component, ComponentState};
use crate::dialogs::{ButtonHandle, DialogError, DialogId, DialogResult};
use crate::themes::Theme;
use crate::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

enum RowEntry {
    Spacer,
    Button(Button),
}

/// Container for a dialog's button row.
pub struct ButtonRow {
    state: ComponentState,
    dialog: DialogId,
    entries: Vec<RowEntry>,
    ok: ButtonHandle,
    focused: Option<ButtonHandle>,
}

impl ButtonRow {
    /// Build a row holding only the permanent OK button.
    pub fn new(dialog: DialogId, ok_button: Button) -> Self {
        let ok = ButtonHandle::new(dialog.clone(), ok_button.id());
        Self {
            state: ComponentState::new(),
            dialog,
            entries: vec![
                RowEntry::Spacer,
                RowEntry::Button(ok_button),
                RowEntry::Spacer,
            ],
            ok,
            focused: None,
        }
    }

    pub fn ok_handle(&self) -> ButtonHandle {
        self.ok.clone()
    }

    pub fn ok_button(&self) -> Option<&Button> {
        self.button(&self.ok)
    }

    pub fn ok_button_mut(&mut self) -> Option<&mut Button> {
        let handle = self.ok.clone();
        self.button_mut(&handle)
    }

    /// Insert before all existing leading buttons, companion spacer after it.
    pub fn add_leading(&mut self, button: Button) -> ButtonHandle {
        let handle = ButtonHandle::new(self.dialog.clone(), button.id());
        self.entries.insert(0, RowEntry::Button(button));
        self.entries.insert(1, RowEntry::Spacer);
        handle
    }

    /// Append at the back, companion spacer after it.
    pub fn add_trailing(&mut self, button: Button) -> ButtonHandle {
        let handle = ButtonHandle::new(self.dialog.clone(), button.id());
        self.entries.push(RowEntry::Button(button));
        self.entries.push(RowEntry::Spacer);
        handle
    }

    /// Remove a previously added button and its companion spacer.
    ///
    /// The permanent OK button and handles minted by other dialogs are
    /// rejected; the row is left unchanged on error.
    pub fn remove(&mut self, handle: &ButtonHandle) -> DialogResult<Button> {
        if handle.dialog != self.dialog {
            return Err(DialogError::InvalidOperation(format!(
                "button does not belong to dialog '{}'",
                self.dialog
            )));
        }
        if handle.button == self.ok.button {
            return Err(DialogError::InvalidOperation(
                "cannot remove the dialog's OK button".to_string(),
            ));
        }
        let index = self
            .entries
            .iter()
            .position(|entry| matches!(entry, RowEntry::Button(b) if b.id() == handle.button))
            .ok_or_else(|| {
                DialogError::InvalidOperation(format!(
                    "button does not belong to dialog '{}'",
                    self.dialog
                ))
            })?;

        let RowEntry::Button(button) = self.entries.remove(index) else {
            return Err(DialogError::InvalidOperation(
                "entry is not a button".to_string(),
            ));
        };
        // Companion spacer sits directly after the button; skip if missing
        if matches!(self.entries.get(index), Some(RowEntry::Spacer)) {
            self.entries.remove(index);
        }
        if self.focused.as_ref() == Some(handle) {
            self.focus_ok();
        }
        Ok(button)
    }

    pub fn button(&self, handle: &ButtonHandle) -> Option<&Button> {
        self.entries.iter().find_map(|entry| match entry {
            RowEntry::Button(b) if b.id() == handle.button => Some(b),
            _ => None,
        })
    }

    pub fn button_mut(&mut self, handle: &ButtonHandle) -> Option<&mut Button> {
        self.entries.iter_mut().find_map(|entry| match entry {
            RowEntry::Button(b) if b.id() == handle.button => Some(b),
            _ => None,
        })
    }

    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.entries.iter().filter_map(|entry| match entry {
            RowEntry::Button(b) => Some(b),
            RowEntry::Spacer => None,
        })
    }

    pub fn button_count(&self) -> usize {
        self.buttons().count()
    }

    pub fn focused_handle(&self) -> Option<ButtonHandle> {
        self.focused.clone()
    }

    pub fn focus_ok(&mut self) {
        let handle = self.ok.clone();
        self.set_focused(Some(handle));
    }

    pub fn focus_next(&mut self) {
        self.cycle_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.cycle_focus(-1);
    }

    pub fn clear_focus(&mut self) {
        self.set_focused(None);
    }

    fn enabled_handles(&self) -> Vec<ButtonHandle> {
        self.buttons()
            .filter(|b| !b.is_disabled())
            .map(|b| ButtonHandle::new(self.dialog.clone(), b.id()))
            .collect()
    }

    fn cycle_focus(&mut self, step: isize) {
        let handles = self.enabled_handles();
        if handles.is_empty() {
            self.set_focused(None);
            return;
        }
        let next = match self.focused.as_ref().and_then(|focused| {
            handles.iter().position(|h| h == focused)
        }) {
            Some(current) => {
                let len = handles.len() as isize;
                handles[((current as isize + step).rem_euclid(len)) as usize].clone()
            }
            None => handles[0].clone(),
        };
        self.set_focused(Some(next));
    }

    fn set_focused(&mut self, handle: Option<ButtonHandle>) {
        for entry in &mut self.entries {
            if let RowEntry::Button(b) = entry {
                let focus = handle
                    .as_ref()
                    .map(|h| h.button == b.id())
                    .unwrap_or(false);
                b.set_focus(focus);
            }
        }
        self.focused = handle.filter(|h| {
            self.entries.iter().any(
                |entry| matches!(entry, RowEntry::Button(b) if b.id() == h.button && !b.is_disabled()),
            )
        });
    }

    /// Minimum (width, height): button widths plus a `button_margin` floor
    /// for every spacer.
    pub fn min_size(&self, button_margin: u16) -> (u16, u16) {
        let mut width: u16 = 0;
        let mut height: u16 = 0;
        for entry in &self.entries {
            match entry {
                RowEntry::Spacer => width = width.saturating_add(button_margin),
                RowEntry::Button(b) => {
                    let (w, h) = b.min_size();
                    width = width.saturating_add(w);
                    height = height.max(h);
                }
            }
        }
        (width, height)
    }
}

#[async_trait::async_trait]
impl Component for ButtonRow {
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if area.height == 0 {
            return;
        }
        let constraints: Vec<Constraint> = self
            .entries
            .iter()
            .map(|entry| match entry {
                RowEntry::Spacer => Constraint::Min(theme.dialog_button_margin),
                RowEntry::Button(b) => Constraint::Length(b.min_size().0),
            })
            .collect();
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);
        for (entry, chunk) in self.entries.iter_mut().zip(chunks.iter()) {
            if let RowEntry::Button(b) = entry {
                b.render(frame, *chunk, theme);
            }
        }
    }

    fn size(&self) -> Rect {
        self.state.size
    }

    fn set_size(&mut self, size: Rect) {
        self.state.size = size;
    }

    fn has_focus(&self) -> bool {
        self.focused.is_some()
    }

    fn set_focus(&mut self, focus: bool) {
        if focus {
            if self.focused.is_none() {
                self.focus_ok();
            }
        } else {
            self.clear_focus();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ButtonRole;

    fn row() -> ButtonRow {
        ButtonRow::new(
            DialogId::new("test"),
            Button::new("OK", ButtonRole::Ok),
        )
    }

    fn shape(row: &ButtonRow) -> Vec<&'static str> {
        row.entries
            .iter()
            .map(|entry| match entry {
                RowEntry::Spacer => "spacer",
                RowEntry::Button(_) => "button",
            })
            .collect()
    }

    #[test]
    fn test_initial_composition() {
        let row = row();
        assert_eq!(shape(&row), vec!["spacer", "button", "spacer"]);
        assert_eq!(row.button_count(), 1);
    }

    #[test]
    fn test_add_then_remove_restores_composition() {
        let mut row = row();
        let before = shape(&row);

        let handle = row.add_trailing(Button::new("Retry", ButtonRole::Action("retry".into())));
        assert_eq!(
            shape(&row),
            vec!["spacer", "button", "spacer", "button", "spacer"]
        );

        row.remove(&handle).unwrap();
        assert_eq!(shape(&row), before);
    }

    #[test]
    fn test_leading_button_goes_first() {
        let mut row = row();
        let handle = row.add_leading(Button::new("Cancel", ButtonRole::Cancel));
        assert_eq!(
            shape(&row),
            vec!["button", "spacer", "spacer", "button", "spacer"]
        );
        assert_eq!(row.buttons().next().map(|b| b.label()), Some("Cancel"));

        row.remove(&handle).unwrap();
        assert_eq!(shape(&row), vec!["spacer", "button", "spacer"]);
    }

    #[test]
    fn test_remove_ok_button_fails() {
        let mut row = row();
        let before = shape(&row);
        let ok = row.ok_handle();
        let err = row.remove(&ok).unwrap_err();
        assert!(matches!(err, DialogError::InvalidOperation(_)));
        assert_eq!(shape(&row), before);
    }

    #[test]
    fn test_remove_foreign_handle_fails() {
        let mut row = row();
        let mut other = ButtonRow::new(
            DialogId::new("other"),
            Button::new("OK", ButtonRole::Ok),
        );
        let foreign = other.add_trailing(Button::new("X", ButtonRole::Action(String::new())));

        let err = row.remove(&foreign).unwrap_err();
        assert!(matches!(err, DialogError::InvalidOperation(_)));
        assert_eq!(shape(&row), vec!["spacer", "button", "spacer"]);
    }

    #[test]
    fn test_remove_tolerates_missing_spacer() {
        let mut row = row();
        let handle = row.add_trailing(Button::new("X", ButtonRole::Action(String::new())));
        // Simulate inconsistent state where the companion spacer is gone
        row.entries.pop();
        row.remove(&handle).unwrap();
        assert_eq!(shape(&row), vec!["spacer", "button", "spacer"]);
    }

    #[test]
    fn test_focus_cycles_enabled_buttons_only() {
        let mut row = row();
        row.add_trailing(Button::new("A", ButtonRole::Action("a".into())));
        let disabled = row.add_trailing(Button::new("B", ButtonRole::Action("b".into())));
        row.button_mut(&disabled).unwrap().set_disabled(true);

        row.focus_ok();
        row.focus_next();
        let focused = row.focused_handle().unwrap();
        assert_eq!(row.button(&focused).unwrap().label(), "A");

        // Wraps past the disabled button back to OK
        row.focus_next();
        let focused = row.focused_handle().unwrap();
        assert_eq!(row.button(&focused).unwrap().label(), "OK");
    }

    #[test]
    fn test_removing_focused_button_falls_back_to_ok() {
        let mut row = row();
        let handle = row.add_trailing(Button::new("X", ButtonRole::Action(String::new())));
        row.focus_ok();
        row.focus_next();
        assert_eq!(row.focused_handle(), Some(handle.clone()));

        row.remove(&handle).unwrap();
        assert_eq!(row.focused_handle(), Some(row.ok_handle()));
    }

    #[test]
    fn test_min_size_counts_buttons_and_spacers() {
        let mut row = row();
        // [spacer, OK(6), spacer] with margin 1 -> 8 wide
        assert_eq!(row.min_size(1), (8, 3));

        row.add_trailing(Button::new("Go", ButtonRole::Action(String::new())));
        // + button(6) + spacer(1)
        assert_eq!(row.min_size(1), (15, 3));
    }
}
