//! Confirmation dialog

use super::accept::{AcceptDialog, DialogHooks};
use super::host::WindowHost;
use super::types::{ButtonHandle, DialogDefaults, DialogId, DialogState};
use crate::components::Component;
use crate::events::Event;
use crate::themes::Theme;
use crate::Frame;
use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use tokio::sync::mpsc;

/// An [`AcceptDialog`] preset for yes/no decisions: a permanent cancel button
/// next to OK and a minimum size that fits both.
pub struct ConfirmationDialog {
    dialog: AcceptDialog,
    cancel: ButtonHandle,
}

impl ConfirmationDialog {
    pub fn new(defaults: DialogDefaults) -> Self {
        let mut dialog = AcceptDialog::new(defaults);
        dialog.set_title("Please Confirm...");
        dialog.set_min_size((40, 7));
        let cancel = dialog.add_cancel_button("");
        Self { dialog, cancel }
    }

    /// Handle of the permanent cancel button.
    pub fn cancel_button_handle(&self) -> ButtonHandle {
        self.cancel.clone()
    }

    pub fn dialog(&self) -> &AcceptDialog {
        &self.dialog
    }

    pub fn dialog_mut(&mut self) -> &mut AcceptDialog {
        &mut self.dialog
    }

    pub fn id(&self) -> &DialogId {
        self.dialog.id()
    }

    pub fn dialog_state(&self) -> DialogState {
        self.dialog.dialog_state()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.dialog.set_text(text);
    }

    pub fn set_event_sender(&mut self, sender: mpsc::UnboundedSender<Event>) {
        self.dialog.set_event_sender(sender);
    }

    pub fn add_hooks(&mut self, hooks: Box<dyn DialogHooks>) {
        self.dialog.add_hooks(hooks);
    }

    pub fn show(&mut self, host: &mut dyn WindowHost) {
        self.dialog.show(host);
    }

    pub fn hide(&mut self, host: &mut dyn WindowHost) {
        self.dialog.hide(host);
    }

    pub async fn on_key_event(&mut self, key: KeyEvent, host: &mut dyn WindowHost) -> Result<()> {
        self.dialog.on_key_event(key, host).await
    }

    pub fn run_deferred(&mut self, host: &mut dyn WindowHost) {
        self.dialog.run_deferred(host);
    }
}

#[async_trait]
impl Component for ConfirmationDialog {
    async fn handle_key_event(&mut self, event: KeyEvent) -> Result<()> {
        self.dialog.handle_key_event(event).await
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        self.dialog.render(frame, area, theme);
    }

    fn size(&self) -> Rect {
        self.dialog.size()
    }

    fn set_size(&mut self, size: Rect) {
        self.dialog.set_size(size);
    }

    fn is_visible(&self) -> bool {
        self.dialog.is_visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogs::host::{SingleWindowHost, WindowId};
    use crate::events::DialogEvent;

    #[test]
    fn test_preset_has_cancel_and_ok() {
        let confirm = ConfirmationDialog::new(DialogDefaults::default());
        assert_eq!(confirm.dialog().title(), "Please Confirm...");
        assert_ne!(
            confirm.cancel_button_handle(),
            confirm.dialog().ok_button_handle()
        );
    }

    #[test]
    fn test_cancel_button_cannot_be_removed_by_other_dialogs() {
        let confirm = ConfirmationDialog::new(DialogDefaults::default());
        let mut other = AcceptDialog::new(DialogDefaults::default());
        assert!(other.remove_button(&confirm.cancel_button_handle()).is_err());
    }

    #[test]
    fn test_minimum_size_respects_preset_floor() {
        let confirm = ConfirmationDialog::new(DialogDefaults::default());
        let host = SingleWindowHost::new();
        let (width, height) = confirm.dialog().minimum_size(&host);
        assert!(width >= 40);
        assert!(height >= 7);
    }

    #[tokio::test]
    async fn test_cancel_press_emits_cancelled() {
        let (sender, mut receiver) = mpsc::unbounded_channel();
        let mut confirm = ConfirmationDialog::new(DialogDefaults::default());
        confirm.set_event_sender(sender);
        confirm.set_size(Rect::new(0, 0, 40, 10));
        let mut host = SingleWindowHost::with_parent(WindowId(7));

        confirm.show(&mut host);
        confirm
            .on_key_event(KeyEvent::from(crossterm::event::KeyCode::Left), &mut host)
            .await
            .unwrap();
        confirm
            .on_key_event(KeyEvent::from(crossterm::event::KeyCode::Enter), &mut host)
            .await
            .unwrap();
        confirm.run_deferred(&mut host);

        assert_eq!(confirm.dialog_state(), DialogState::Hidden);
        let mut saw_cancel = false;
        while let Ok(event) = receiver.try_recv() {
            if matches!(event, Event::Dialog(DialogEvent::Cancelled)) {
                saw_cancel = true;
            }
        }
        assert!(saw_cancel);
    }
}
