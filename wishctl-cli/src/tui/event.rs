//! Event handling for the tracker page

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use super::app::App;

/// Poll for events with timeout
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Result of handling a key event
pub enum HandleResult {
    /// Continue running
    Continue,
    /// Quit the page
    Quit,
    /// Submit the current input field value as a new wisher
    Submit,
    /// Delete the currently selected wisher
    DeleteSelected,
    /// Re-fetch the collection
    Refresh,
}

/// Handle a key event
pub fn handle_key(app: &mut App, key: KeyEvent) -> HandleResult {
    // Global shortcuts (Ctrl+C, Ctrl+Q, Ctrl+R)
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => return HandleResult::Quit,
            KeyCode::Char('r') => return HandleResult::Refresh,
            _ => {}
        }
    }

    match key.code {
        // Enter with a non-empty field value submits it
        KeyCode::Enter => {
            if app.state.pending_name.is_empty() {
                HandleResult::Continue
            } else {
                HandleResult::Submit
            }
        }

        KeyCode::Esc => {
            app.state.dismiss_error();
            HandleResult::Continue
        }

        // List navigation
        KeyCode::Up => {
            app.select_prev();
            HandleResult::Continue
        }
        KeyCode::Down => {
            app.select_next();
            HandleResult::Continue
        }

        KeyCode::Delete => HandleResult::DeleteSelected,

        // Input field editing
        KeyCode::Backspace => {
            app.input_backspace();
            HandleResult::Continue
        }
        KeyCode::Left => {
            app.cursor_left();
            HandleResult::Continue
        }
        KeyCode::Right => {
            app.cursor_right();
            HandleResult::Continue
        }
        KeyCode::Char(c) => {
            app.input_insert(c);
            HandleResult::Continue
        }

        _ => HandleResult::Continue,
    }
}
