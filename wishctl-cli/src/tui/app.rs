//! Page state for the interactive tracker

use wishctl_core::{TrackerState, Wisher};

/// Main page state
#[derive(Debug, Default)]
pub struct App {
    /// Controller state the reducer applies outcomes to
    pub state: TrackerState,
    /// Cursor byte offset in the input field
    pub cursor: usize,
    /// Currently selected wisher index
    pub selected: usize,
    /// Whether the page should quit
    pub should_quit: bool,
    /// Status message (shown in the footer)
    pub status: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set status message
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some(msg.into());
    }

    /// Insert a char at the cursor. Editing the field clears the error
    /// banner, same as a verbatim pending-name update.
    pub fn input_insert(&mut self, c: char) {
        self.state.pending_name.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        self.state.has_error = false;
    }

    /// Delete the char before the cursor
    pub fn input_backspace(&mut self) {
        if let Some(c) = self.state.pending_name[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
            self.state.pending_name.remove(self.cursor);
            self.state.has_error = false;
        }
    }

    pub fn cursor_left(&mut self) {
        if let Some(c) = self.state.pending_name[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
        }
    }

    pub fn cursor_right(&mut self) {
        if let Some(c) = self.state.pending_name[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Select next wisher in the list
    pub fn select_next(&mut self) {
        let len = self.state.wishers.len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    /// Select previous wisher in the list
    pub fn select_prev(&mut self) {
        let len = self.state.wishers.len();
        if len > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(len - 1);
        }
    }

    /// Currently selected wisher
    pub fn selected_wisher(&self) -> Option<&Wisher> {
        self.state.wishers.get(self.selected)
    }

    /// Re-clamp cursor and selection after a reducer step mutated the
    /// state underneath them (e.g. a resolved create cleared the field)
    pub fn clamp(&mut self) {
        self.cursor = self.cursor.min(self.state.pending_name.len());
        if !self.state.pending_name.is_char_boundary(self.cursor) {
            // Walk back to the nearest boundary
            while self.cursor > 0 && !self.state.pending_name.is_char_boundary(self.cursor) {
                self.cursor -= 1;
            }
        }
        self.selected = self
            .selected
            .min(self.state.wishers.len().saturating_sub(1));
    }
}
