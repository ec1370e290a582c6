//! Demo: a confirmation dialog over a blank host window.
//!
//! Run with `cargo run --bin dialog_demo -- --message "Delete everything?"`.
//! Prints the dialog outcome on exit.

use anyhow::Result;
use assent::components::Component;
use assent::dialogs::{ConfirmationDialog, DialogState, SingleWindowHost, WindowId};
use assent::{init_terminal, restore_terminal, DialogDefaults, DialogEvent, Event, EventHandler, Theme};
use clap::Parser;
use ratatui::layout::Rect;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(about = "Show a confirmation dialog and print the outcome")]
struct Args {
    /// Message shown in the dialog body
    #[arg(long, default_value = "Are you sure?")]
    message: String,

    /// Dialog title
    #[arg(long)]
    title: Option<String>,

    /// Put the cancel button on the trailing side
    #[arg(long)]
    swap_cancel_ok: bool,

    /// Keep the dialog open after confirming
    #[arg(long)]
    keep_open_on_confirm: bool,
}

fn init_logging() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "assent=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}

/// Center `size` inside `area`, clamping when the terminal is too small.
fn centered_rect(size: (u16, u16), area: Rect) -> Rect {
    let width = size.0.min(area.width);
    let height = size.1.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging()?;

    let defaults = DialogDefaults {
        swap_cancel_ok: args.swap_cancel_ok,
    };
    let mut host = SingleWindowHost::with_parent(WindowId(1));
    host.set_min_window_size((24, 6));

    let mut dialog = ConfirmationDialog::new(defaults);
    dialog.set_text(args.message);
    if let Some(title) = args.title {
        dialog.dialog_mut().set_title(title);
    }
    if args.keep_open_on_confirm {
        dialog.dialog_mut().set_hide_on_confirm(false);
    }

    let mut events = EventHandler::new();
    dialog.set_event_sender(events.sender());

    let mut terminal = init_terminal()?;
    let theme = Theme::default();
    let mut outcome: Option<DialogEvent> = None;

    dialog.show(&mut host);
    while dialog.dialog_state() == DialogState::Visible {
        let min_size = dialog.dialog().minimum_size(&host);
        terminal.draw(|frame| {
            let area = centered_rect(min_size, frame.size());
            dialog.set_size(area);
            dialog.render(frame, area, &theme);
        })?;

        match events.next().await {
            Some(Event::Key(key)) => dialog.on_key_event(key, &mut host).await?,
            Some(Event::FocusGained) => {
                dialog
                    .dialog_mut()
                    .on_parent_focus_regained(&mut host)
                    .await?;
            }
            Some(Event::Dialog(event)) => {
                info!(?event, "dialog outcome");
                if !matches!(event, DialogEvent::ButtonPressed(_)) {
                    outcome = Some(event);
                }
            }
            _ => {}
        }
        dialog.run_deferred(&mut host);
    }

    // The outcome that closed the dialog may still be queued
    while let Some(event) = events.try_next() {
        if let Event::Dialog(event) = event {
            if !matches!(event, DialogEvent::ButtonPressed(_)) {
                outcome = Some(event);
            }
        }
    }

    restore_terminal(&mut terminal)?;
    match outcome {
        Some(DialogEvent::Confirmed) => println!("confirmed"),
        Some(DialogEvent::Cancelled) => println!("cancelled"),
        Some(DialogEvent::CustomAction(action)) => println!("action: {action}"),
        _ => println!("dismissed"),
    }
    Ok(())
}
