//! Formatting utilities for terminal output

use crate::core::{Coord, Grid};
use crate::solver::Solution;

/// Format a grid as space-separated uppercase letters, `.` for empty cells
#[must_use]
pub fn format_grid(grid: &Grid) -> String {
    grid.rows()
        .map(|row| {
            row.iter()
                .map(|cell| cell.letter().map_or('.', |ch| ch.to_ascii_uppercase()))
                .map(String::from)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a path as `(r, c) → (r, c) → ...`
#[must_use]
pub fn format_path(path: &[Coord]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Format a solution as its uppercase words separated by spaces
#[must_use]
pub fn format_solution(solution: &Solution) -> String {
    solution
        .iter()
        .map(|word| word.to_uppercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format word lengths as `3 + 4 + 5`
#[must_use]
pub fn format_lengths(lengths: &[usize]) -> String {
    lengths
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" + ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_with_empty_cells() {
        let grid = Grid::new(&[vec!["a", ""], vec!["", "Z"]]).unwrap();
        assert_eq!(format_grid(&grid), "A .\n. Z");
    }

    #[test]
    fn empty_grid() {
        assert_eq!(format_grid(&Grid::empty()), "");
    }

    #[test]
    fn path_arrows() {
        let path = [Coord::new(0, 0), Coord::new(1, 1)];
        assert_eq!(format_path(&path), "(0, 0) → (1, 1)");
        assert_eq!(format_path(&[]), "");
    }

    #[test]
    fn solution_words() {
        let solution = vec!["cat".to_string(), "Dog".to_string()];
        assert_eq!(format_solution(&solution), "CAT DOG");
    }

    #[test]
    fn lengths() {
        assert_eq!(format_lengths(&[3, 4, 5]), "3 + 4 + 5");
        assert_eq!(format_lengths(&[2]), "2");
    }
}
