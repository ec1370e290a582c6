//! Host window system interface
//!
//! Dialogs never own window-system state. Everything a dialog needs from the
//! windowing layer (parent window lookup, focus-lost subscriptions, whether a
//! nested exclusive window is blocking input, the floor on window sizes) goes
//! through [`WindowHost`], passed into each lifecycle operation by the owner.
//! Keeping the host at the call boundary makes the subscribed-while-visible
//! invariant observable from the outside.

use super::DialogId;
use std::collections::{HashMap, HashSet};

/// Identifier for a host-managed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub u64);

/// The window system a dialog runs inside.
pub trait WindowHost {
    /// The window holding input focus above this dialog, if any.
    fn parent_window(&self) -> Option<WindowId>;

    /// Start delivering `parent`'s focus-regained events to `dialog`.
    fn subscribe_parent_focus(&mut self, parent: WindowId, dialog: &DialogId);

    /// Stop delivering `parent`'s focus-regained events to `dialog`.
    /// Unsubscribing a pair that is not subscribed is a no-op.
    fn unsubscribe_parent_focus(&mut self, parent: WindowId, dialog: &DialogId);

    /// Whether a nested exclusive window currently blocks input to `dialog`.
    fn has_exclusive_child(&self, dialog: &DialogId) -> bool;

    /// Host-imposed floor on window minimum sizes.
    fn min_window_size(&self) -> (u16, u16);
}

/// A host managing one optional parent window.
///
/// Covers the common embedding: an application window that spawns modal
/// dialogs one at a time. Doubles as the reference implementation for the
/// subscription bookkeeping dialogs rely on.
#[derive(Debug, Default)]
pub struct SingleWindowHost {
    parent: Option<WindowId>,
    subscriptions: HashMap<WindowId, HashSet<DialogId>>,
    blocked: HashSet<DialogId>,
    min_size: (u16, u16),
}

impl SingleWindowHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parent(parent: WindowId) -> Self {
        Self {
            parent: Some(parent),
            ..Self::default()
        }
    }

    pub fn set_parent(&mut self, parent: Option<WindowId>) {
        self.parent = parent;
    }

    pub fn set_min_window_size(&mut self, min_size: (u16, u16)) {
        self.min_size = min_size;
    }

    /// Mark `dialog` as covered (or uncovered) by a nested exclusive window.
    pub fn set_blocked_by_exclusive(&mut self, dialog: &DialogId, blocked: bool) {
        if blocked {
            self.blocked.insert(dialog.clone());
        } else {
            self.blocked.remove(dialog);
        }
    }

    /// Whether `dialog` currently listens for `parent`'s focus-regained
    /// events.
    pub fn is_subscribed(&self, parent: WindowId, dialog: &DialogId) -> bool {
        self.subscriptions
            .get(&parent)
            .map(|dialogs| dialogs.contains(dialog))
            .unwrap_or(false)
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.values().map(HashSet::len).sum()
    }
}

impl WindowHost for SingleWindowHost {
    fn parent_window(&self) -> Option<WindowId> {
        self.parent
    }

    fn subscribe_parent_focus(&mut self, parent: WindowId, dialog: &DialogId) {
        tracing::debug!(parent = parent.0, dialog = %dialog, "subscribe parent focus");
        self.subscriptions
            .entry(parent)
            .or_default()
            .insert(dialog.clone());
    }

    fn unsubscribe_parent_focus(&mut self, parent: WindowId, dialog: &DialogId) {
        tracing::debug!(parent = parent.0, dialog = %dialog, "unsubscribe parent focus");
        if let Some(dialogs) = self.subscriptions.get_mut(&parent) {
            dialogs.remove(dialog);
            if dialogs.is_empty() {
                self.subscriptions.remove(&parent);
            }
        }
    }

    fn has_exclusive_child(&self, dialog: &DialogId) -> bool {
        self.blocked.contains(dialog)
    }

    fn min_window_size(&self) -> (u16, u16) {
        self.min_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_bookkeeping() {
        let mut host = SingleWindowHost::with_parent(WindowId(1));
        let dialog = DialogId::new("d");

        assert!(!host.is_subscribed(WindowId(1), &dialog));
        host.subscribe_parent_focus(WindowId(1), &dialog);
        assert!(host.is_subscribed(WindowId(1), &dialog));
        assert_eq!(host.subscription_count(), 1);

        host.unsubscribe_parent_focus(WindowId(1), &dialog);
        assert!(!host.is_subscribed(WindowId(1), &dialog));
        assert_eq!(host.subscription_count(), 0);
    }

    #[test]
    fn test_unsubscribe_unknown_pair_is_noop() {
        let mut host = SingleWindowHost::new();
        host.unsubscribe_parent_focus(WindowId(9), &DialogId::new("d"));
        assert_eq!(host.subscription_count(), 0);
    }

    #[test]
    fn test_exclusive_blocking_flag() {
        let mut host = SingleWindowHost::new();
        let dialog = DialogId::new("d");
        assert!(!host.has_exclusive_child(&dialog));

        host.set_blocked_by_exclusive(&dialog, true);
        assert!(host.has_exclusive_child(&dialog));

        host.set_blocked_by_exclusive(&dialog, false);
        assert!(!host.has_exclusive_child(&dialog));
    }
}
