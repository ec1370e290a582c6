//! Modal accept/confirm dialog widgets for ratatui terminal apps
//!
//! `assent` provides the dialog policy layer most TUIs end up hand-rolling:
//! an [`AcceptDialog`](dialogs::AcceptDialog) with a permanent OK button,
//! escape-to-cancel, parent-focus tracking and deterministic layout, plus a
//! [`ConfirmationDialog`](dialogs::ConfirmationDialog) preset with a cancel
//! button. The window system stays behind the
//! [`WindowHost`](dialogs::WindowHost) trait so the same dialogs run against
//! a real terminal or a test host.

pub mod components;
pub mod dialogs;
pub mod events;
pub mod themes;

pub use dialogs::{AcceptDialog, ConfirmationDialog, DialogDefaults};
pub use events::{DialogEvent, Event, EventHandler};
pub use themes::Theme;

use anyhow::Result;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;

pub type Backend = CrosstermBackend<io::Stdout>;
pub type Frame<'a> = ratatui::Frame<'a>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Terminal<Backend>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
pub fn restore_terminal(terminal: &mut Terminal<Backend>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
