//! Application event plumbing
//!
//! Dialogs communicate outcomes over an unbounded channel rather than
//! returning values from deep inside input handling. Consumers subscribe by
//! handing the dialog a sender and draining [`Event`]s in their main loop.

use crate::dialogs::ButtonHandle;
use anyhow::Result;
use crossterm::event::{Event as CrosstermEvent, KeyEvent};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::timeout;

/// Outcome events emitted by dialogs.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogEvent {
    /// The user accepted the dialog.
    Confirmed,

    /// The user dismissed the dialog (cancel button, escape, close request
    /// or a parent window reclaiming focus).
    Cancelled,

    /// A button carrying a non-empty action id was pressed.
    CustomAction(String),

    /// Any dialog button was pressed, including OK and Cancel.
    ButtonPressed(ButtonHandle),
}

/// Application events
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard input event
    Key(KeyEvent),

    /// Terminal resize event
    Resize(u16, u16),

    /// Periodic tick event
    Tick,

    /// Terminal gained focus
    FocusGained,

    /// Terminal lost focus
    FocusLost,

    /// Dialog outcome event
    Dialog(DialogEvent),

    /// Custom application events
    Custom(String, serde_json::Value),
}

/// Event handler for managing input events
pub struct EventHandler {
    /// Event receiver channel
    receiver: mpsc::UnboundedReceiver<Event>,

    /// Event sender channel
    sender: mpsc::UnboundedSender<Event>,
}

impl EventHandler {
    /// Create a new event handler
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self { receiver, sender }
    }

    /// Get the next event, falling back to a tick when nothing is pending.
    pub async fn next(&mut self) -> Option<Event> {
        // Internal events (dialog outcomes) take priority over terminal input
        if let Ok(event) = self.receiver.try_recv() {
            return Some(event);
        }

        if let Ok(Ok(Ok(crossterm_event))) = timeout(
            Duration::from_millis(50),
            tokio::task::spawn_blocking(crossterm::event::read),
        )
        .await
        {
            return Self::convert_crossterm_event(crossterm_event);
        }

        Some(Event::Tick)
    }

    /// Drain one pending internal event without touching terminal input.
    pub fn try_next(&mut self) -> Option<Event> {
        self.receiver.try_recv().ok()
    }

    /// Convert crossterm events to application events
    fn convert_crossterm_event(event: CrosstermEvent) -> Option<Event> {
        match event {
            CrosstermEvent::Key(key_event) => Some(Event::Key(key_event)),
            CrosstermEvent::Resize(width, height) => Some(Event::Resize(width, height)),
            CrosstermEvent::FocusGained => Some(Event::FocusGained),
            CrosstermEvent::FocusLost => Some(Event::FocusLost),
            CrosstermEvent::Paste(text) => Some(Event::Custom(
                "paste".to_string(),
                serde_json::Value::String(text),
            )),
            // Pointer input is owned by the host application
            CrosstermEvent::Mouse(_) => None,
        }
    }

    /// Send an internal event
    pub fn send(&self, event: Event) -> Result<()> {
        self.sender.send(event)?;
        Ok(())
    }

    /// Get a clone of the sender
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.sender.clone()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_internal_events_drain_first() {
        let mut handler = EventHandler::new();
        handler.send(Event::Dialog(DialogEvent::Confirmed)).unwrap();

        match handler.next().await {
            Some(Event::Dialog(DialogEvent::Confirmed)) => {}
            other => panic!("expected dialog event, got {:?}", other),
        }
    }

    #[test]
    fn test_sender_is_cloneable() {
        let handler = EventHandler::new();
        let sender = handler.sender();
        sender.send(Event::Tick).unwrap();
    }
}
