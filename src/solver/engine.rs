//! Main word finder interface

use super::game::{Solution, solve_word_game, solve_word_game_parallel};
use super::search::{find_word_coords, find_words};
use crate::core::{Grid, GridError, Path};
use crate::dictionary::Dictionary;

/// A found word together with the path that spells it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub word: String,
    pub path: Path,
}

/// Main word finder
///
/// Bundles the dictionary and execution options so commands and the
/// interactive mode do not have to thread them through every call.
#[derive(Clone, Copy)]
pub struct Solver<'a> {
    dictionary: Option<&'a dyn Dictionary>,
    parallel: bool,
}

impl<'a> Solver<'a> {
    /// Create a new solver
    ///
    /// # Parameters
    /// - `dictionary`: Filter applied to every complete word, or `None` to
    ///   accept any letter sequence
    #[must_use]
    pub const fn new(dictionary: Option<&'a dyn Dictionary>) -> Self {
        Self {
            dictionary,
            parallel: false,
        }
    }

    /// Spread the first word of [`Solver::solve`] across the rayon pool
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[must_use]
    pub const fn has_dictionary(&self) -> bool {
        self.dictionary.is_some()
    }

    #[must_use]
    pub const fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Paths of `length` cells starting with `prefix`
    #[must_use]
    pub fn find_word_coords(&self, grid: &Grid, length: usize, prefix: &str) -> Vec<Path> {
        find_word_coords(grid, length, prefix, self.dictionary)
    }

    /// Sorted words of `length` letters starting with `prefix`, duplicates kept
    #[must_use]
    pub fn find_words(&self, grid: &Grid, length: usize, prefix: &str) -> Vec<String> {
        find_words(grid, length, prefix, self.dictionary)
    }

    /// Words with their paths, sorted by word then path
    #[must_use]
    pub fn candidates(&self, grid: &Grid, length: usize, prefix: &str) -> Vec<Candidate> {
        let mut candidates: Vec<Candidate> = self
            .find_word_coords(grid, length, prefix)
            .into_iter()
            .filter_map(|path| {
                let word = grid.word_at(&path);
                debug_assert!(word.is_ok(), "search produced an unreadable path {path:?}");
                word.ok().map(|word| Candidate { word, path })
            })
            .collect();
        candidates.sort_by(|a, b| a.word.cmp(&b.word).then_with(|| a.path.cmp(&b.path)));
        candidates
    }

    /// Every ordered word sequence of the given lengths
    ///
    /// # Errors
    /// See [`solve_word_game`].
    pub fn solve(&self, grid: &Grid, word_lengths: &[usize]) -> Result<Vec<Solution>, GridError> {
        if self.parallel {
            solve_word_game_parallel(grid, word_lengths, self.dictionary)
        } else {
            solve_word_game(grid, word_lengths, self.dictionary)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coord;
    use crate::dictionary::WordList;

    fn setup_grid() -> Grid {
        Grid::new(&[vec!["C", "A", "T"], vec!["S", "O", "G"]]).unwrap()
    }

    #[test]
    fn without_dictionary_accepts_everything() {
        let grid = setup_grid();
        let solver = Solver::new(None);
        assert!(!solver.has_dictionary());
        assert_eq!(solver.find_words(&grid, 1, "").len(), 6);
    }

    #[test]
    fn dictionary_filters_words() {
        let grid = setup_grid();
        let words = WordList::from_words(["cat", "cot", "sog", "tog"]);
        let solver = Solver::new(Some(&words));

        assert!(solver.has_dictionary());
        assert_eq!(solver.find_words(&grid, 3, ""), ["CAT", "COT", "SOG", "TOG"]);
        assert_eq!(solver.find_words(&grid, 3, "c"), ["CAT", "COT"]);
    }

    #[test]
    fn candidates_carry_paths() {
        let grid = setup_grid();
        let words = WordList::from_words(["cat"]);
        let solver = Solver::new(Some(&words));

        let candidates = solver.candidates(&grid, 3, "");
        assert_eq!(
            candidates,
            vec![Candidate {
                word: "CAT".to_string(),
                path: vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)],
            }]
        );
    }

    #[test]
    fn candidates_sorted_by_word() {
        let grid = setup_grid();
        let candidates = Solver::new(None).candidates(&grid, 2, "");
        assert!(candidates.windows(2).all(|w| w[0].word <= w[1].word));
        assert_eq!(
            candidates.len(),
            Solver::new(None).find_word_coords(&grid, 2, "").len()
        );
    }

    #[test]
    fn oversized_lengths_find_nothing() {
        let grid = setup_grid();
        let solver = Solver::new(None);
        assert!(solver.candidates(&grid, usize::MAX, "").is_empty());
        assert!(solver.solve(&grid, &[1, usize::MAX]).unwrap().is_empty());
        assert!(
            solver
                .with_parallel(true)
                .solve(&grid, &[usize::MAX])
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn parallel_flag_gives_same_solutions() {
        let grid = setup_grid();
        let words = WordList::from_words(["cat", "cot", "tog", "so", "as"]);
        let sequential = Solver::new(Some(&words));
        let parallel = sequential.with_parallel(true);

        assert!(parallel.is_parallel());
        assert_eq!(
            sequential.solve(&grid, &[3, 2]).unwrap(),
            parallel.solve(&grid, &[3, 2]).unwrap()
        );
    }
}
