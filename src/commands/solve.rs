//! Word game solving command
//!
//! Solves a multi-word puzzle on a grid and returns the solutions.

use crate::core::{Grid, GridError};
use crate::solver::{Solution, Solver};
use log::{debug, warn};
use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};

/// Configuration for solving a grid
pub struct SolveConfig {
    pub word_lengths: Vec<usize>,
    /// Collapse solutions that spell the same words
    pub unique: bool,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(word_lengths: Vec<usize>) -> Self {
        Self {
            word_lengths,
            unique: true,
        }
    }
}

/// Result of solving a grid
pub struct SolveResult {
    pub word_lengths: Vec<usize>,
    pub solutions: Vec<Solution>,
    /// Number of solutions before de-duplication
    pub total_solutions: usize,
    pub duration: Duration,
}

/// Solve the word game on `grid`
///
/// With `unique` set, words are upper-cased and solutions spelling the same
/// word sequence are kept once, sorted. Otherwise solutions are returned in
/// solver order, one per distinct choice of paths.
///
/// # Errors
///
/// Propagates any `GridError` raised by the solver.
pub fn solve_grid(
    grid: &Grid,
    config: SolveConfig,
    solver: &Solver,
) -> Result<SolveResult, GridError> {
    let letters_available = grid.letter_count();
    match config
        .word_lengths
        .iter()
        .try_fold(0_usize, |total, &length| total.checked_add(length))
    {
        Some(needed) if needed <= letters_available => {}
        Some(needed) => warn!(
            "Word lengths need {needed} letters but the grid only has {letters_available}"
        ),
        None => warn!("Word lengths add up to more letters than any grid can hold"),
    }

    let start = Instant::now();
    let mut solutions = solver.solve(grid, &config.word_lengths)?;
    let total_solutions = solutions.len();

    if config.unique {
        solutions = unique_solutions(solutions);
    }

    let duration = start.elapsed();
    debug!(
        "{} solutions ({total_solutions} before de-duplication) in {duration:?}",
        solutions.len()
    );

    Ok(SolveResult {
        word_lengths: config.word_lengths,
        solutions,
        total_solutions,
        duration,
    })
}

/// Upper-case, de-duplicate and sort solutions
#[must_use]
pub fn unique_solutions(solutions: Vec<Solution>) -> Vec<Solution> {
    let set: FxHashSet<Solution> = solutions
        .into_iter()
        .map(|solution| {
            solution
                .into_iter()
                .map(|word| word.to_ascii_uppercase())
                .collect()
        })
        .collect();

    let mut unique: Vec<Solution> = set.into_iter().collect();
    unique.sort();
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordList;

    fn words(list: &[&str]) -> Solution {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn solve_two_by_two() {
        let grid = Grid::new(&[vec!["A", "B"], vec!["C", "D"]]).unwrap();
        let result = solve_grid(&grid, SolveConfig::new(vec![2, 2]), &Solver::new(None)).unwrap();

        assert_eq!(result.total_solutions, 24);
        assert_eq!(result.solutions.len(), 24);
        assert_eq!(result.solutions[0], words(&["AB", "CD"]));
        assert_eq!(result.word_lengths, vec![2, 2]);
    }

    #[test]
    fn unique_merges_repeated_spellings() {
        // Two A cells: "AB" can be taken from either, leaving "A" both times
        let grid = Grid::new(&[vec!["A", "B", "a"]]).unwrap();
        let solver = Solver::new(None);

        let mut config = SolveConfig::new(vec![2, 1]);
        config.unique = false;
        let all = solve_grid(&grid, config, &solver).unwrap();

        let unique = solve_grid(&grid, SolveConfig::new(vec![2, 1]), &solver).unwrap();

        assert!(all.solutions.len() > unique.solutions.len());
        assert_eq!(unique.total_solutions, all.solutions.len());
        assert!(unique.solutions.contains(&words(&["AB", "A"])));
        assert!(unique.solutions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn dictionary_solutions() {
        let grid = Grid::new(&[vec!["C", "A", "T"], vec!["D", "O", "G"]]).unwrap();
        let dictionary = WordList::from_words(["cat", "dog"]);
        let result = solve_grid(
            &grid,
            SolveConfig::new(vec![3, 3]),
            &Solver::new(Some(&dictionary)),
        )
        .unwrap();

        assert_eq!(
            result.solutions,
            vec![words(&["CAT", "DOG"]), words(&["DOG", "CAT"])]
        );
    }

    #[test]
    fn too_many_letters_requested() {
        let grid = Grid::new(&[vec!["A", "B"]]).unwrap();
        let result = solve_grid(&grid, SolveConfig::new(vec![2, 1]), &Solver::new(None)).unwrap();
        assert!(result.solutions.is_empty());
    }

    #[test]
    fn overflowing_lengths_have_no_solutions() {
        let grid = Grid::new(&[vec!["A", "B"]]).unwrap();
        let result = solve_grid(
            &grid,
            SolveConfig::new(vec![usize::MAX, 2]),
            &Solver::new(None),
        )
        .unwrap();
        assert!(result.solutions.is_empty());
        assert_eq!(result.total_solutions, 0);
    }

    #[test]
    fn unique_solutions_sorts() {
        let solutions = vec![
            words(&["ba", "c"]),
            words(&["AB", "C"]),
            words(&["BA", "C"]),
        ];
        assert_eq!(
            unique_solutions(solutions),
            vec![words(&["AB", "C"]), words(&["BA", "C"])]
        );
    }
}
