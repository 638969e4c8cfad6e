//! TUI rendering with ratatui
//!
//! Grid view with the selected path highlighted, candidate list and the
//! words found so far.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Coord;
use crate::output::formatters::format_path;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 WORD FINDER - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let grid_height = u16::try_from(app.grid.row_count())
        .unwrap_or(u16::MAX)
        .saturating_add(4);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(grid_height), Constraint::Min(3)])
        .split(area);

    render_grid(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let path = app
        .selected_candidate()
        .map(|candidate| candidate.path.as_slice())
        .unwrap_or_default();

    let mut lines = vec![Line::from("")];
    for (row, cells) in app.grid.rows().enumerate() {
        let spans: Vec<Span> = cells
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                let text = format!(" {} ", cell.letter().map_or('·', |ch| ch.to_ascii_uppercase()));
                let style = match path.iter().position(|&c| c == Coord::new(row, col)) {
                    Some(0) => Style::default()
                        .fg(Color::Black)
                        .bg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                    Some(_) => Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                    None if cell.is_empty() => Style::default().fg(Color::DarkGray),
                    None => Style::default().fg(Color::White),
                };
                Span::styled(text, style)
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Grid ({} letters) ", app.grid.letter_count()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let title = match &app.query {
        Some(query) if query.prefix.is_empty() => format!(" Candidates: length {} ", query.length),
        Some(query) => format!(
            " Candidates: length {}, prefix {} ",
            query.length,
            query.prefix.to_uppercase()
        ),
        None => " Candidates ".to_string(),
    };

    let items: Vec<ListItem> = app
        .candidates
        .iter()
        .map(|candidate| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<10}", candidate.word.to_uppercase()),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    format_path(&candidate.path),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    if app.input_mode == InputMode::Browse {
        state.select(Some(app.selected));
    }
    f.render_stateful_widget(list, area, &mut state);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_found(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_found(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .found
        .iter()
        .enumerate()
        .map(|(i, found)| ListItem::new(format!("{}: {}", i + 1, found.word.to_uppercase())))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Found Words ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Query => (
            " Enter Query: LENGTH [PREFIX] ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::Browse => (
            " ↑/↓ select | Enter remove word | Esc new query ",
            "",
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::Query => "Mode: Query",
        InputMode::Browse => "Mode: Browse",
    };
    f.render_widget(
        Paragraph::new(mode_text).alignment(Alignment::Center),
        chunks[0],
    );

    let found_text = format!("Found: {}", app.found.len());
    f.render_widget(
        Paragraph::new(found_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.input_mode {
        InputMode::Query => "q: Quit | u: Undo | Enter: Search",
        InputMode::Browse => "q: Quit | u: Undo | Enter: Remove | Esc: Back",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
