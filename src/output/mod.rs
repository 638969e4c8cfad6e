//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_benchmark_result, print_find_result, print_grid, print_solve_result};
