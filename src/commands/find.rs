//! Word finding command
//!
//! Finds every word of one length in a grid, optionally with a prefix.

use crate::core::Grid;
use crate::solver::Solver;
use log::debug;
use std::time::{Duration, Instant};

/// Configuration for a single-length search
pub struct FindConfig {
    pub length: usize,
    pub prefix: String,
    /// Collapse words that differ only by path or case
    pub unique: bool,
}

impl FindConfig {
    #[must_use]
    pub fn new(length: usize, prefix: impl Into<String>) -> Self {
        Self {
            length,
            prefix: prefix.into(),
            unique: true,
        }
    }
}

/// Result of a single-length search
pub struct FindResult {
    pub length: usize,
    pub prefix: String,
    pub words: Vec<String>,
    /// Number of paths found before de-duplication
    pub total_paths: usize,
    pub duration: Duration,
}

/// Find words of one length in `grid`
///
/// With `unique` set, words are upper-cased, sorted and de-duplicated;
/// otherwise every path contributes its word in grid case.
#[must_use]
pub fn find_in_grid(grid: &Grid, config: FindConfig, solver: &Solver) -> FindResult {
    let start = Instant::now();

    let mut words = solver.find_words(grid, config.length, &config.prefix);
    let total_paths = words.len();

    if config.unique {
        words = words.iter().map(|w| w.to_ascii_uppercase()).collect();
        words.sort();
        words.dedup();
    }

    let duration = start.elapsed();
    debug!(
        "{} distinct words from {total_paths} paths in {duration:?}",
        words.len()
    );

    FindResult {
        length: config.length,
        prefix: config.prefix,
        words,
        total_paths,
        duration,
    }
}
