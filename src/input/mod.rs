//! Grid input
//!
//! Loads letter grids from CSV files: one record per row, one field per cell.

mod grid_file;

pub use grid_file::{LoadError, load_grid, read_grid};
