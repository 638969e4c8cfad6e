//! Benchmark command
//!
//! Times path search on randomly generated grids.

use crate::core::{Grid, GridError};
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub rows: usize,
    pub cols: usize,
    pub trials: usize,
    pub word_length: usize,
    /// Probability that a generated cell is empty
    pub blank_ratio: f64,
    /// Seed for grid generation; random when `None`
    pub seed: Option<u64>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 5,
            trials: 20,
            word_length: 5,
            blank_ratio: 0.0,
            seed: None,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub trials: usize,
    pub word_length: usize,
    pub seed: u64,
    pub total_paths: usize,
    pub min_duration: Duration,
    pub max_duration: Duration,
    pub average_duration: Duration,
    /// Wall time including grid generation
    pub duration: Duration,
    /// Paths found per second of search time
    pub paths_per_second: f64,
}

/// Generate a random grid of uppercase letters
///
/// Each cell is empty with probability `blank_ratio` (clamped to `0..=1`).
///
/// # Errors
///
/// Never fails for generated content; the error type comes from grid
/// construction.
pub fn random_grid<R: Rng>(
    rng: &mut R,
    rows: usize,
    cols: usize,
    blank_ratio: f64,
) -> Result<Grid, GridError> {
    let blank_ratio = blank_ratio.clamp(0.0, 1.0);
    let raw: Vec<Vec<String>> = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| {
                    if rng.random_bool(blank_ratio) {
                        String::new()
                    } else {
                        char::from(rng.random_range(b'A'..=b'Z')).to_string()
                    }
                })
                .collect()
        })
        .collect();
    Grid::new(&raw)
}

/// Run path search on `config.trials` random grids
///
/// A progress bar is drawn on stderr when `show_progress` is set.
///
/// # Errors
///
/// Propagates grid construction errors from [`random_grid`].
pub fn run_benchmark(
    config: &BenchmarkConfig,
    solver: &Solver,
    show_progress: bool,
) -> Result<BenchmarkResult, GridError> {
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    info!(
        "Benchmarking {} trials on {}x{} grids (seed {seed})",
        config.trials, config.rows, config.cols
    );

    let pb = if show_progress {
        ProgressBar::new(config.trials as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut total_paths = 0;
    let mut min_duration = Duration::MAX;
    let mut max_duration = Duration::ZERO;
    let mut search_time = Duration::ZERO;

    for _ in 0..config.trials {
        let grid = random_grid(&mut rng, config.rows, config.cols, config.blank_ratio)?;

        let trial_start = Instant::now();
        let paths = solver.find_word_coords(&grid, config.word_length, "");
        let elapsed = trial_start.elapsed();

        total_paths += paths.len();
        search_time += elapsed;
        min_duration = min_duration.min(elapsed);
        max_duration = max_duration.max(elapsed);

        pb.set_message(format!("{} paths", paths.len()));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let duration = start.elapsed();
    if config.trials == 0 {
        min_duration = Duration::ZERO;
    }

    Ok(BenchmarkResult {
        trials: config.trials,
        word_length: config.word_length,
        seed,
        total_paths,
        min_duration,
        max_duration,
        average_duration: search_time
            .checked_div(config.trials as u32)
            .unwrap_or_default(),
        duration,
        paths_per_second: if search_time.is_zero() {
            0.0
        } else {
            total_paths as f64 / search_time.as_secs_f64()
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(trials: usize) -> BenchmarkConfig {
        BenchmarkConfig {
            rows: 3,
            cols: 3,
            trials,
            word_length: 3,
            blank_ratio: 0.0,
            seed: Some(17),
        }
    }

    #[test]
    fn random_grid_has_requested_shape() {
        let mut rng = StdRng::seed_from_u64(5);
        let grid = random_grid(&mut rng, 4, 6, 0.0).unwrap();
        assert_eq!(grid.row_count(), 4);
        assert_eq!(grid.column_count(), 6);
        assert_eq!(grid.letter_count(), 24);
    }

    #[test]
    fn random_grid_blank_ratio_extremes() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(random_grid(&mut rng, 3, 3, 1.0).unwrap().letter_count(), 0);
        assert_eq!(random_grid(&mut rng, 3, 3, 2.5).unwrap().letter_count(), 0);
        assert_eq!(random_grid(&mut rng, 3, 3, -1.0).unwrap().letter_count(), 9);
    }

    #[test]
    fn benchmark_runs() {
        let result = run_benchmark(&config(5), &Solver::new(None), false).unwrap();

        assert_eq!(result.trials, 5);
        assert_eq!(result.seed, 17);
        assert_eq!(result.word_length, 3);
        // A full 3x3 grid always has the same number of 3-cell paths
        assert_eq!(result.total_paths, 5 * 160);
        assert!(result.min_duration <= result.max_duration);
    }

    #[test]
    fn benchmark_is_reproducible_with_seed() {
        let mut sparse = config(4);
        sparse.blank_ratio = 0.4;
        let a = run_benchmark(&sparse, &Solver::new(None), false).unwrap();
        let b = run_benchmark(&sparse, &Solver::new(None), false).unwrap();
        assert_eq!(a.total_paths, b.total_paths);
    }

    #[test]
    fn benchmark_zero_trials() {
        let result = run_benchmark(&config(0), &Solver::new(None), false).unwrap();
        assert_eq!(result.trials, 0);
        assert_eq!(result.total_paths, 0);
        assert_eq!(result.min_duration, Duration::ZERO);
        assert_eq!(result.average_duration, Duration::ZERO);
    }
}
