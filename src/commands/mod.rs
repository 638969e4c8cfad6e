//! Command implementations

pub mod benchmark;
pub mod find;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, random_grid, run_benchmark};
pub use find::{FindConfig, FindResult, find_in_grid};
pub use solve::{SolveConfig, SolveResult, solve_grid, unique_solutions};
