//! Modal dialog system
//!
//! Dialog lifecycle policy layered over a host window system: visibility
//! transitions, escape-to-cancel, parent-focus tracking, button-row
//! management and deterministic child layout. The host itself (focus
//! delivery, window lookup, size floors) stays behind the [`WindowHost`]
//! trait.

pub mod accept;
pub mod confirm;
pub mod host;
pub mod layout;
pub mod types;

pub use accept::{AcceptDialog, DialogHooks};
pub use confirm::ConfirmationDialog;
pub use host::{SingleWindowHost, WindowHost, WindowId};
pub use layout::{ChildRects, LayoutMetrics};
pub use types::{
    ButtonHandle, ButtonSide, DeferredAction, DialogDefaults, DialogError, DialogId,
    DialogResult, DialogState, HostNotification,
};
