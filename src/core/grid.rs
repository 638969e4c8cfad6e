//! Rectangular letter grid
//!
//! Cells are stored row-major in a flat vector. The grid validates its input
//! once at construction; afterwards only [`Grid::remove_word`] and
//! [`Grid::collapse_columns`] mutate it.

use super::{Cell, Coord, GridError};
use std::fmt;

/// Offsets of the eight neighbors, in the fixed order NW, N, NE, W, E, SW, S, SE
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A rectangular 2D array of cells, each empty or a single letter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from raw rows of cell strings
    ///
    /// # Errors
    /// Returns `GridError::RaggedRows` if the rows differ in length, or
    /// `GridError::InvalidCell` if a cell is not empty and not exactly one
    /// ASCII letter. Row lengths are checked before cell contents.
    ///
    /// # Examples
    /// ```
    /// use wordfinder::core::{Cell, Grid};
    ///
    /// let grid = Grid::new(&[vec!["A", "B"], vec!["", "c"]]).unwrap();
    /// assert_eq!(grid.row_count(), 2);
    /// assert_eq!(grid.element_at(1, 1).unwrap(), Cell::Letter('c'));
    ///
    /// assert!(Grid::new(&[vec!["A"], vec!["B", "C"]]).is_err());
    /// assert!(Grid::new(&[vec!["AB"]]).is_err());
    /// ```
    pub fn new<R, S>(rows: &[R]) -> Result<Self, GridError>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());

        if let Some((row, found)) = rows
            .iter()
            .map(|r| r.as_ref().len())
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(GridError::RaggedRows {
                row,
                expected: cols,
                found,
            });
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, raw_row) in rows.iter().enumerate() {
            for (col, raw) in raw_row.as_ref().iter().enumerate() {
                let raw = raw.as_ref();
                let cell = Cell::parse(raw).ok_or_else(|| GridError::InvalidCell {
                    row,
                    col,
                    value: raw.to_string(),
                })?;
                cells.push(cell);
            }
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// A grid with no rows
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            rows: 0,
            cols: 0,
            cells: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.rows
    }

    /// Number of columns (0 when there are no rows)
    #[inline]
    #[must_use]
    pub const fn column_count(&self) -> usize {
        self.cols
    }

    /// Number of cells currently holding a letter
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Whether `(row, col)` lies within the grid
    #[inline]
    #[must_use]
    pub const fn exists(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// The cell at `(row, col)`
    ///
    /// # Errors
    /// Returns `GridError::OutOfBounds` if the coordinate is outside the grid.
    pub fn element_at(&self, row: usize, col: usize) -> Result<Cell, GridError> {
        self.cell(Coord::new(row, col))
            .ok_or_else(|| self.out_of_bounds(Coord::new(row, col)))
    }

    /// Whether `(row, col)` exists and holds a letter
    #[inline]
    #[must_use]
    pub fn is_letter(&self, row: usize, col: usize) -> bool {
        self.cell(Coord::new(row, col))
            .is_some_and(|cell| !cell.is_empty())
    }

    /// The cell at `coord`, or `None` when out of bounds
    #[inline]
    #[must_use]
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// In-bounds letter cells adjacent to `coord`, in [`NEIGHBOR_OFFSETS`] order
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let row = coord.row.checked_add_signed(dr)?;
            let col = coord.col.checked_add_signed(dc)?;
            self.is_letter(row, col).then_some(Coord::new(row, col))
        })
    }

    /// Every letter cell, row by row
    pub fn letter_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_empty())
            .map(|(i, _)| Coord::new(i / self.cols, i % self.cols))
    }

    /// Rows as cell slices, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.rows).map(move |r| &self.cells[r * self.cols..(r + 1) * self.cols])
    }

    /// Concatenate the letters at `path`, preserving their case
    ///
    /// # Errors
    /// Returns `GridError::OutOfBounds` for a coordinate outside the grid and
    /// `GridError::EmptyCell` for one that holds no letter.
    pub fn word_at(&self, path: &[Coord]) -> Result<String, GridError> {
        path.iter()
            .map(|&coord| {
                self.cell(coord)
                    .ok_or_else(|| self.out_of_bounds(coord))?
                    .letter()
                    .ok_or(GridError::EmptyCell {
                        row: coord.row,
                        col: coord.col,
                    })
            })
            .collect()
    }

    /// Empty every cell of `path`, then collapse columns if `collapse` is set
    ///
    /// The grid is left untouched when any coordinate is out of bounds.
    ///
    /// # Errors
    /// Returns `GridError::OutOfBounds` if a coordinate is outside the grid.
    pub fn remove_word(&mut self, path: &[Coord], collapse: bool) -> Result<(), GridError> {
        let indices = path
            .iter()
            .map(|&coord| self.index(coord).ok_or_else(|| self.out_of_bounds(coord)))
            .collect::<Result<Vec<_>, _>>()?;

        for i in indices {
            self.cells[i] = Cell::Empty;
        }

        if collapse {
            self.collapse_columns();
        }
        Ok(())
    }

    /// Apply gravity to every column
    ///
    /// Letters keep their relative vertical order and settle at the bottom of
    /// their column; empty cells end up at the top.
    pub fn collapse_columns(&mut self) {
        let mut column = Vec::with_capacity(self.rows);

        for col in 0..self.cols {
            column.clear();
            column.extend(
                (0..self.rows)
                    .map(|row| self.cells[row * self.cols + col])
                    .filter(|cell| !cell.is_empty()),
            );

            let gap = self.rows - column.len();
            for row in 0..self.rows {
                self.cells[row * self.cols + col] = if row < gap {
                    Cell::Empty
                } else {
                    column[row - gap]
                };
            }
        }
    }

    #[inline]
    const fn index(&self, coord: Coord) -> Option<usize> {
        if self.exists(coord.row, coord.col) {
            Some(coord.row * self.cols + coord.col)
        } else {
            None
        }
    }

    const fn out_of_bounds(&self, coord: Coord) -> GridError {
        GridError::OutOfBounds {
            row: coord.row,
            col: coord.col,
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl fmt::Display for Grid {
    /// One line per row, `.` for empty cells
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                match cell.letter() {
                    Some(ch) => write!(f, "{ch}")?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}
