//! CSV grid loading

use crate::core::{Grid, GridError};
use log::debug;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a grid file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error reading grid file: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid grid: {0}")]
    Grid(#[from] GridError),
}

/// Load a grid from a CSV file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be opened, `LoadError::Csv` if
/// it is not readable as CSV, and `LoadError::Grid` if the rows are ragged or
/// a cell is not empty or a single letter.
///
/// # Examples
/// ```no_run
/// use wordfinder::input::load_grid;
///
/// let grid = load_grid("puzzle.csv").unwrap();
/// println!("{} x {}", grid.row_count(), grid.column_count());
/// ```
pub fn load_grid<P: AsRef<Path>>(path: P) -> Result<Grid, LoadError> {
    let file = File::open(path.as_ref())?;
    let grid = read_grid(file)?;
    debug!(
        "Loaded {}x{} grid from {}",
        grid.row_count(),
        grid.column_count(),
        path.as_ref().display()
    );
    Ok(grid)
}

/// Read a grid from CSV data
///
/// Each line is one row. A blank line is a row with no cells, so blank lines
/// inside a grid are reported as ragged rows rather than dropped. Records may
/// differ in length so that ragged input is reported by grid validation.
/// Fields are taken verbatim, so a space is an invalid cell.
///
/// # Errors
///
/// See [`load_grid`]. Input that is not UTF-8 is an I/O error.
pub fn read_grid<R: Read>(mut reader: R) -> Result<Grid, LoadError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;

    let rows = content
        .lines()
        .map(parse_row)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Grid::new(&rows)?)
}

/// Split one CSV line into its fields; a blank line has none
fn parse_row(line: &str) -> Result<Vec<String>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::None)
        .from_reader(line.as_bytes());

    let mut record = csv::StringRecord::new();
    csv_reader.read_record(&mut record)?;
    Ok(record.iter().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, Coord};

    #[test]
    fn reads_rows_and_empty_cells() {
        let grid = read_grid("A,b\n,C\n".as_bytes()).unwrap();
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.column_count(), 2);
        assert_eq!(grid.cell(Coord::new(0, 1)), Some(Cell::Letter('b')));
        assert_eq!(grid.cell(Coord::new(1, 0)), Some(Cell::Empty));
    }

    #[test]
    fn empty_input_is_empty_grid() {
        let grid = read_grid("".as_bytes()).unwrap();
        assert_eq!(grid.row_count(), 0);
    }

    #[test]
    fn ragged_rows_are_grid_errors() {
        let result = read_grid("A,B\nC\n".as_bytes());
        assert!(matches!(
            result,
            Err(LoadError::Grid(GridError::RaggedRows { row: 1, .. }))
        ));
    }

    #[test]
    fn blank_line_inside_grid_is_ragged() {
        let result = read_grid("A,B\n\nC,D\n".as_bytes());
        assert!(matches!(
            result,
            Err(LoadError::Grid(GridError::RaggedRows {
                row: 1,
                expected: 2,
                found: 0
            }))
        ));

        // Dropping the blank line would make A and B adjacent
        let result = read_grid("A\n\nB\n".as_bytes());
        assert!(matches!(
            result,
            Err(LoadError::Grid(GridError::RaggedRows { row: 1, .. }))
        ));
    }

    #[test]
    fn crlf_line_endings() {
        let grid = read_grid("A,B\r\nC,\r\n".as_bytes()).unwrap();
        assert_eq!(grid.to_string(), "AB\nC.");
    }

    #[test]
    fn quoted_fields() {
        let grid = read_grid("\"A\",\"\"\n".as_bytes()).unwrap();
        assert_eq!(grid.to_string(), "A.");
    }

    #[test]
    fn multi_letter_cells_are_rejected() {
        let result = read_grid("AB,C\n".as_bytes());
        assert!(matches!(
            result,
            Err(LoadError::Grid(GridError::InvalidCell { ref value, .. })) if value == "AB"
        ));
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        let result = read_grid("A, B\n".as_bytes());
        assert!(matches!(
            result,
            Err(LoadError::Grid(GridError::InvalidCell { .. }))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join("wordfinder-no-such-grid.csv");
        assert!(matches!(load_grid(path), Err(LoadError::Io(_))));
    }

    #[test]
    fn load_grid_from_file() {
        let path =
            std::env::temp_dir().join(format!("wordfinder-{}-grid.csv", std::process::id()));
        std::fs::write(&path, "C,A,T\nD,O,G\n").unwrap();

        let grid = load_grid(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(grid.to_string(), "CAT\nDOG");
    }
}
