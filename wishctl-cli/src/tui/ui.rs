//! UI rendering using ratatui

use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::app::App;

/// Primary accent color
const ACCENT: Color = Color::Cyan;
/// Secondary color for less important elements
const SECONDARY: Color = Color::DarkGray;
/// Highlight color for selected items
const HIGHLIGHT: Color = Color::Yellow;
/// Error banner color
const DANGER: Color = Color::Red;
/// Dim text color
const DIM: Color = Color::Rgb(100, 100, 100);

/// Render the entire page
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let mut constraints = vec![Constraint::Length(3)]; // input field
    if app.state.has_error {
        constraints.push(Constraint::Length(3)); // error banner
    }
    constraints.push(Constraint::Min(3)); // wisher list
    constraints.push(Constraint::Length(1)); // status bar

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut next = 0;
    render_input(frame, app, chunks[next]);
    next += 1;

    if app.state.has_error {
        render_error_banner(frame, chunks[next]);
        next += 1;
    }

    render_list(frame, app, chunks[next]);
    render_status_bar(frame, app, chunks[next + 1]);
}

/// Render the name input field
fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let title = if app.state.is_submitting {
        " Add a wisher [saving…] "
    } else {
        " Add a wisher "
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT));

    let input = Paragraph::new(app.state.pending_name.as_str()).block(block);
    frame.render_widget(input, area);

    // Place the terminal cursor inside the field
    let offset = app.state.pending_name[..app.cursor].chars().count() as u16;
    frame.set_cursor_position(Position::new(area.x + 1 + offset, area.y + 1));
}

/// Render the dismissible error banner
fn render_error_banner(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DANGER));

    let line = Line::from(vec![
        Span::styled(
            "Sorry, something's wrong on our end! Your change was not saved.",
            Style::default().fg(DANGER),
        ),
        Span::styled("  (Esc to dismiss)", Style::default().fg(DIM)),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render the wisher list
fn render_list(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .state
        .wishers
        .iter()
        .map(|wisher| {
            let mut spans = vec![Span::raw(wisher.name.clone())];
            if wisher.is_confirmed() {
                spans.push(Span::styled(
                    format!("  {}", wisher.user_id),
                    Style::default().fg(SECONDARY),
                ));
            } else {
                spans.push(Span::styled(
                    "  [unconfirmed]",
                    Style::default().fg(HIGHLIGHT),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let block = Block::default()
        .title(format!(" wishers ({}) ", app.state.wishers.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(SECONDARY));

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD))
        .highlight_symbol("▸ ");

    let mut list_state = ListState::default();
    if !app.state.wishers.is_empty() {
        list_state.select(Some(app.selected));
    }

    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Render the status bar (status message or key hints)
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let line = match &app.status {
        Some(msg) => Line::from(Span::styled(msg.clone(), Style::default().fg(HIGHLIGHT))),
        None => Line::from(Span::styled(
            "Enter add · ↑/↓ select · Del remove · Esc dismiss · Ctrl+R refresh · Ctrl+C quit",
            Style::default().fg(DIM),
        )),
    };

    frame.render_widget(Paragraph::new(line), area);
}
