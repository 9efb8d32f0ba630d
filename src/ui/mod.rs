//! UI rendering for the character browser
//!
//! Implements the terminal interface:
//! - Header with the app title
//! - Search input bar (always focused, filter-as-you-type)
//! - Body: exactly one of Loading spinner / Error banner / character cards
//! - Pagination bar with the current page indicator
//! - Bottom keybind hints
//!
//! The whole frame is redrawn on every draw call, so each render fully
//! overwrites the previous content region.

pub mod cards;
mod theme;

// Re-export theme colors for external use
pub use theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_LOADING,
    COLOR_STATUS_ALIVE, COLOR_STATUS_DEAD, COLOR_STATUS_UNKNOWN,
};

pub use cards::{build_cards, CardView, StatusStyle};

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{App, UiMode};

/// Spinner frames for the loading animation, advanced by the app tick.
const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the UI from the current application state.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(3), // search input
            Constraint::Min(3),    // body
            Constraint::Length(3), // pagination
            Constraint::Length(1), // hints
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_search_bar(frame, chunks[1], app);
    render_body(frame, chunks[2], app);
    render_pagination(frame, chunks[3], app);
    render_hints(frame, chunks[4]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "MORTUI",
            Style::default()
                .fg(theme::COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" · Rick and Morty character browser", Style::default().fg(theme::COLOR_DIM)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(theme::COLOR_BORDER)));
    frame.render_widget(title, area);
}

fn render_search_bar(frame: &mut Frame, area: Rect, app: &App) {
    let content = if app.search_input.is_empty() {
        Line::from(Span::styled(
            "Type to search by name...",
            Style::default().fg(theme::COLOR_DIM),
        ))
    } else {
        Line::from(Span::raw(app.search_input.clone()))
    };

    let input = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::COLOR_BORDER))
            .title(" Search "),
    );
    frame.render_widget(input, area);
}

/// Render exactly one of the three body regions per the current mode.
fn render_body(frame: &mut Frame, area: Rect, app: &App) {
    match &app.mode {
        UiMode::Loading => render_loading(frame, area, app),
        UiMode::Error(message) => render_error(frame, area, message),
        UiMode::Content => render_cards(frame, area, app),
    }
}

fn render_loading(frame: &mut Frame, area: Rect, app: &App) {
    let spinner = SPINNER_FRAMES[(app.tick_count as usize / 8) % SPINNER_FRAMES.len()];
    let loading = Paragraph::new(Line::from(Span::styled(
        format!("{} Loading characters...", spinner),
        Style::default().fg(theme::COLOR_LOADING),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(theme::COLOR_BORDER)));
    frame.render_widget(loading, area);
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let error = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(theme::COLOR_ERROR),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::COLOR_ERROR))
            .title(" Error "),
    );
    frame.render_widget(error, area);
}

fn render_cards(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::COLOR_BORDER))
        .title(format!(" Characters ({}) ", app.session.filtered_characters.len()));

    if app.session.filtered_characters.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No characters found",
            Style::default().fg(theme::COLOR_DIM),
        )))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let lines: Vec<Line> = build_cards(&app.session.filtered_characters)
        .iter()
        .flat_map(|card| card.to_lines())
        .collect();

    let content = Paragraph::new(lines)
        .scroll((app.scroll, 0))
        .block(block);
    frame.render_widget(content, area);
}

fn render_pagination(frame: &mut Frame, area: Rect, app: &App) {
    let line = if app.pagination_visible {
        Line::from(vec![
            Span::styled("◀ prev  ", Style::default().fg(theme::COLOR_DIM)),
            Span::styled(
                format!("Page {}", app.session.current_page),
                Style::default()
                    .fg(theme::COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  next ▶", Style::default().fg(theme::COLOR_DIM)),
        ])
    } else {
        Line::from("")
    };

    let pagination = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(theme::COLOR_BORDER)));
    frame.render_widget(pagination, area);
}

fn render_hints(frame: &mut Frame, area: Rect) {
    let hints = Paragraph::new(Line::from(Span::styled(
        " ←/→ page · ↑/↓ scroll · esc clear search · ctrl+c quit",
        Style::default().fg(theme::COLOR_DIM),
    )));
    frame.render_widget(hints, area);
}
