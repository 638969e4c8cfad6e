//! Grid error types

use thiserror::Error;

/// Errors raised while building or addressing a [`Grid`](super::Grid)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Rows of differing lengths
    #[error("All rows must be the same length: row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A cell that is neither empty nor a single ASCII letter
    #[error("Only single letters are permitted, {value:?} at ({row}, {col}) is invalid")]
    InvalidCell {
        row: usize,
        col: usize,
        value: String,
    },

    /// A coordinate outside the grid
    #[error("Coordinate ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// A coordinate that holds no letter where one is required
    #[error("Cell ({row}, {col}) is empty")]
    EmptyCell { row: usize, col: usize },
}

impl GridError {
    /// True for construction-time validation failures
    #[must_use]
    pub const fn is_invalid_grid(&self) -> bool {
        matches!(self, Self::RaggedRows { .. } | Self::InvalidCell { .. })
    }
}
