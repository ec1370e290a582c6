//! Core dialog types
//!
//! Identity, lifecycle state, configuration defaults and error types shared
//! across the dialog system.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for dialog instances
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DialogId(pub String);

impl DialogId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// A fresh process-unique id for anonymous dialogs.
    pub fn generate() -> Self {
        Self(format!("dialog-{}", Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DialogId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for DialogId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque handle to a button in a dialog's button row.
///
/// Handles remember which dialog minted them, so passing one to a different
/// dialog fails instead of removing an unrelated button.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ButtonHandle {
    pub(crate) dialog: DialogId,
    pub(crate) button: Uuid,
}

impl ButtonHandle {
    pub(crate) fn new(dialog: DialogId, button: Uuid) -> Self {
        Self { dialog, button }
    }

    pub fn dialog_id(&self) -> &DialogId {
        &self.dialog
    }
}

/// Which end of the button row a button is added to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSide {
    Leading,
    Trailing,
}

/// Dialog lifecycle state. There are no intermediate states: a dialog is
/// either showing or it is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Hidden,
    Visible,
}

/// Process-wide dialog construction defaults.
///
/// Read once when buttons are built; changing the defaults afterwards never
/// reshuffles an existing dialog.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DialogDefaults {
    /// Place cancel buttons on the trailing side instead of the leading one,
    /// for platforms whose conventions order buttons that way.
    #[serde(default)]
    pub swap_cancel_ok: bool,
}

/// Result type for dialog operations
pub type DialogResult<T> = std::result::Result<T, DialogError>;

/// Dialog-specific error types
#[derive(Debug, thiserror::Error)]
pub enum DialogError {
    /// A precondition was violated; the operation aborted and the dialog is
    /// unchanged.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}

/// Notifications delivered by the host window system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostNotification {
    /// The host made the dialog's window visible.
    BecameVisible,

    /// The host hid the dialog's window.
    BecameHidden,

    /// Theme constants changed; styling must be re-resolved.
    ThemeChanged,

    /// The window finished entering the tree.
    Ready,

    /// The window was resized to (width, height).
    Resized(u16, u16),

    /// The user asked the host to close the window.
    CloseRequested,
}

/// Work queued during a notification and applied after it completes.
///
/// Hiding mid-notification would mutate the widget tree while the host is
/// still scanning it, so the cancel path defers the hide through this queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    Hide,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(DialogId::generate(), DialogId::generate());
    }

    #[test]
    fn test_defaults_deserialize_missing_field() {
        let defaults: DialogDefaults = serde_json::from_str("{}").unwrap();
        assert!(!defaults.swap_cancel_ok);
    }

    #[test]
    fn test_defaults_roundtrip() {
        let defaults = DialogDefaults {
            swap_cancel_ok: true,
        };
        let json = serde_json::to_string(&defaults).unwrap();
        let back: DialogDefaults = serde_json::from_str(&json).unwrap();
        assert!(back.swap_cancel_ok);
    }
}
