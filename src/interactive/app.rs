//! TUI application state and logic

use crate::core::{Coord, Grid};
use crate::solver::{Candidate, Solver};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// A parsed `LENGTH [PREFIX]` query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub length: usize,
    pub prefix: String,
}

impl Query {
    /// Parse `"5"` or `"5 ca"`; the prefix must be alphabetic
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let mut parts = input.split_whitespace();
        let length = parts.next()?.parse().ok()?;
        let prefix = parts.next().unwrap_or_default();
        if parts.next().is_some() || !prefix.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        Some(Self {
            length,
            prefix: prefix.to_string(),
        })
    }
}

/// A word taken from the grid
#[derive(Debug, Clone)]
pub struct FoundWord {
    pub word: String,
    pub path: Vec<Coord>,
}

/// Application state
pub struct App<'a> {
    pub solver: Solver<'a>,
    pub grid: Grid,
    pub query: Option<Query>,
    pub candidates: Vec<Candidate>,
    pub selected: usize,
    pub found: Vec<FoundWord>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub undo_stack: Vec<Grid>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing a `LENGTH [PREFIX]` query
    Query,
    /// Choosing among the candidates of the last query
    Browse,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(grid: Grid, solver: Solver<'a>) -> Self {
        let dictionary_note = if solver.has_dictionary() {
            "Candidates are filtered by the dictionary."
        } else {
            "No dictionary: every letter sequence counts."
        };

        Self {
            solver,
            grid,
            query: None,
            candidates: Vec::new(),
            selected: 0,
            found: Vec::new(),
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Enter a word length and optional prefix, e.g. '5' or '4 ca'".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: dictionary_note.to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
            input_mode: InputMode::Query,
            undo_stack: Vec::new(),
        }
    }

    /// Parse and run a query, switching to browse mode when it has results
    pub fn submit_query(&mut self, input: &str) {
        let Some(query) = Query::parse(input) else {
            self.add_message(
                "Invalid query! Use LENGTH [PREFIX], e.g. '5 ca'",
                MessageStyle::Error,
            );
            return;
        };

        self.input_buffer.clear();
        self.query = Some(query);
        self.refresh_candidates();
    }

    /// Re-run the current query against the current grid
    fn refresh_candidates(&mut self) {
        let Some(query) = &self.query else {
            self.candidates.clear();
            return;
        };

        self.candidates = self
            .solver
            .candidates(&self.grid, query.length, &query.prefix);
        self.selected = 0;
        debug!(
            "Query {} '{}' matched {} paths",
            query.length,
            query.prefix,
            self.candidates.len()
        );

        if self.candidates.is_empty() {
            self.input_mode = InputMode::Query;
            self.add_message("No results", MessageStyle::Error);
        } else {
            self.input_mode = InputMode::Browse;
            let count = self.candidates.len();
            self.add_message(&format!("{count} candidate paths"), MessageStyle::Info);
        }
    }

    #[must_use]
    pub fn selected_candidate(&self) -> Option<&Candidate> {
        self.candidates.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.candidates.is_empty() {
            self.selected = (self.selected + 1) % self.candidates.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.candidates.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.candidates.len() - 1);
        }
    }

    /// Remove the selected word from the grid and collapse its columns
    pub fn remove_selected(&mut self) {
        let Some(candidate) = self.selected_candidate().cloned() else {
            self.add_message("Nothing selected!", MessageStyle::Error);
            return;
        };

        let before = self.grid.clone();
        if let Err(err) = self.grid.remove_word(&candidate.path, true) {
            self.add_message(&format!("Cannot remove word: {err}"), MessageStyle::Error);
            return;
        }

        self.undo_stack.push(before);
        self.add_message(
            &format!("Removed {}", candidate.word.to_uppercase()),
            MessageStyle::Success,
        );
        self.found.push(FoundWord {
            word: candidate.word,
            path: candidate.path,
        });

        if self.grid.letter_count() == 0 {
            self.add_message("Grid cleared!", MessageStyle::Success);
        }
        self.refresh_candidates();
    }

    /// Restore the grid as it was before the last removal
    pub fn undo_last(&mut self) {
        if let Some(grid) = self.undo_stack.pop() {
            self.grid = grid;
            if let Some(found) = self.found.pop() {
                self.add_message(
                    &format!("Put back {}", found.word.to_uppercase()),
                    MessageStyle::Info,
                );
            }
            self.refresh_candidates();
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    /// Leave browse mode for a new query
    pub fn back_to_query(&mut self) {
        self.input_mode = InputMode::Query;
        self.candidates.clear();
        self.selected = 0;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::Query => match key.code {
                    // Queries start with a digit, so a bare q or u is a command
                    KeyCode::Char('q') if app.input_buffer.is_empty() => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('u') if app.input_buffer.is_empty() => {
                        app.undo_last();
                    }
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.input_buffer.push(c);
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Esc => {
                        app.input_buffer.clear();
                    }
                    KeyCode::Enter => {
                        let input = app.input_buffer.clone();
                        app.submit_query(&input);
                    }
                    _ => {}
                },
                InputMode::Browse => match key.code {
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('u') => {
                        app.undo_last();
                    }
                    KeyCode::Up | KeyCode::Char('k') => {
                        app.select_previous();
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        app.select_next();
                    }
                    KeyCode::Enter => {
                        app.remove_selected();
                    }
                    KeyCode::Esc => {
                        app.back_to_query();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
