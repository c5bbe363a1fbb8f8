//! Terminal management and main run loop
//!
//! The loop owns the page state. Remote calls are spawned as tasks that
//! report a `RemoteOutcome` over a channel; the loop applies outcomes in
//! arrival order, so the view keeps rendering while calls are in flight
//! and concurrent resolutions cannot lose each other's updates.

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::warn;

use wishctl_api::HttpCollection;
use wishctl_core::{now_millis, RemoteCollection, RemoteOutcome};

use super::app::App;
use super::event::{handle_key, poll_event, HandleResult};
use super::ui;

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Run the tracker page against the given API endpoint
pub async fn run(endpoint: &str) -> Result<()> {
    let remote: Arc<dyn RemoteCollection> =
        Arc::new(HttpCollection::new(endpoint).context("Failed to build HTTP client")?);
    let (tx, mut rx) = mpsc::unbounded_channel();

    let mut terminal = init_terminal()?;
    let mut app = App::new();

    // The page renders immediately; the initial fetch resolves in the
    // background with no blocking spinner
    spawn_list(remote.clone(), tx.clone());

    let result = run_loop(&mut terminal, &mut app, &remote, &tx, &mut rx).await;

    // Restore terminal (even if loop failed)
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop
async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    remote: &Arc<dyn RemoteCollection>,
    tx: &UnboundedSender<RemoteOutcome>,
    rx: &mut UnboundedReceiver<RemoteOutcome>,
) -> Result<()> {
    loop {
        // Apply resolved remote calls, in arrival order
        while let Ok(outcome) = rx.try_recv() {
            app.state.apply(outcome, now_millis());
            app.clamp();
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        // Poll for events (with 100ms timeout for responsive UI)
        if let Some(event) = poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => match handle_key(app, key) {
                    HandleResult::Quit => break,
                    HandleResult::Continue => {}
                    HandleResult::Submit => submit_pending(app, remote, tx),
                    HandleResult::DeleteSelected => delete_selected(app, remote, tx),
                    HandleResult::Refresh => spawn_list(remote.clone(), tx.clone()),
                },
                Event::Resize(_, _) => {
                    // Terminal resized, will be handled on next draw
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Fetch the full collection in the background
fn spawn_list(remote: Arc<dyn RemoteCollection>, tx: UnboundedSender<RemoteOutcome>) {
    tokio::spawn(async move {
        let outcome = match remote.list().await {
            Ok(items) => RemoteOutcome::Loaded(items),
            Err(err) => {
                warn!("list fetch failed: {err}");
                RemoteOutcome::LoadFailed
            }
        };
        let _ = tx.send(outcome);
    });
}

/// Submit the current input field value as a new wisher
fn submit_pending(app: &mut App, remote: &Arc<dyn RemoteCollection>, tx: &UnboundedSender<RemoteOutcome>) {
    let name = app.state.pending_name.clone();
    if name.is_empty() {
        return;
    }

    app.state.begin_submit();

    let remote = remote.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let outcome = match remote.create(&name).await {
            Ok(user_id) => RemoteOutcome::CreateConfirmed { name, user_id },
            Err(err) => {
                warn!("create failed: {err}");
                RemoteOutcome::CreateUnconfirmed { name }
            }
        };
        let _ = tx.send(outcome);
    });
}

/// Delete the selected wisher through the remote collection
fn delete_selected(app: &mut App, remote: &Arc<dyn RemoteCollection>, tx: &UnboundedSender<RemoteOutcome>) {
    let Some(wisher) = app.selected_wisher() else {
        return;
    };

    if !wisher.is_confirmed() {
        app.set_status("entry has no server id yet, nothing to delete remotely");
        return;
    }

    let user_id = wisher.user_id.clone();
    let remote = remote.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let outcome = match remote.delete(&user_id).await {
            Ok(()) => RemoteOutcome::Deleted { user_id },
            Err(err) => {
                warn!("delete failed for {user_id}: {err}");
                RemoteOutcome::DeleteFailed
            }
        };
        let _ = tx.send(outcome);
    });
}
