//! Core domain types for letter grids
//!
//! This module contains the grid model the search engine runs on: cells,
//! coordinates, validation and the remove-and-collapse transformation.
//! Nothing here performs I/O or logging.

mod cell;
mod error;
mod grid;

pub use cell::{Cell, Coord, Path};
pub use error::GridError;
pub use grid::{Grid, NEIGHBOR_OFFSETS};
