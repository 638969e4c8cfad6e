//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, FoundWord, InputMode, Query, run_tui};
