//! Path search over a letter grid
//!
//! Enumerates every simple path of an exact length through adjacent letter
//! cells, pruning on a prefix as it goes and consulting an optional
//! dictionary once a path is complete.
//!
//! # Algorithm
//! Depth-first backtracking from every letter cell. A single `used` mask and
//! a single trail are shared by the whole walk: a cell is marked before the
//! walk descends into it and unmarked on the way back, so sibling branches
//! never see each other's marks.
//!
//! The number of paths grows roughly as `cells * 8^(length-1)` on dense
//! grids; long lengths on large grids run for a long time.

use crate::core::{Coord, Grid, Path};
use crate::dictionary::Dictionary;
use log::trace;

/// All paths of exactly `length` cells whose word starts with `prefix`
///
/// Matching against `prefix` ignores ASCII case. When `dictionary` is given,
/// only paths whose word it contains are returned. The order of the result is
/// the walk order: start cells row by row, then neighbors in
/// [`NEIGHBOR_OFFSETS`](crate::core::NEIGHBOR_OFFSETS) order.
///
/// Returns nothing when `length` is 0, exceeds the grid's letter count, or
/// is shorter than `prefix`.
///
/// # Examples
/// ```
/// use wordfinder::core::{Coord, Grid};
/// use wordfinder::solver::find_word_coords;
///
/// let grid = Grid::new(&[vec!["A", "B"], vec!["", "C"]]).unwrap();
/// let paths = find_word_coords(&grid, 2, "c", None);
/// assert_eq!(
///     paths,
///     vec![
///         vec![Coord::new(1, 1), Coord::new(0, 0)],
///         vec![Coord::new(1, 1), Coord::new(0, 1)],
///     ]
/// );
/// ```
#[must_use]
pub fn find_word_coords(
    grid: &Grid,
    length: usize,
    prefix: &str,
    dictionary: Option<&dyn Dictionary>,
) -> Vec<Path> {
    let prefix_chars: Vec<char> = prefix.chars().collect();
    if length == 0 || length > grid.letter_count() || prefix_chars.len() > length {
        return Vec::new();
    }

    let mut walk = Walk {
        grid,
        length,
        prefix: prefix_chars,
        dictionary,
        used: vec![false; grid.row_count() * grid.column_count()],
        trail: Vec::with_capacity(length),
        word: String::with_capacity(length),
        found: Vec::new(),
    };

    for start in grid.letter_coords() {
        walk.visit(start);
    }

    trace!(
        "Found {} paths of length {length} with prefix {prefix:?}",
        walk.found.len()
    );
    walk.found
}

/// Words traced by [`find_word_coords`], sorted, duplicates kept
///
/// The same word appears once per distinct path that spells it. Letters keep
/// the case they have in the grid.
///
/// # Examples
/// ```
/// use wordfinder::core::Grid;
/// use wordfinder::solver::find_words;
///
/// let grid = Grid::new(&[vec!["A", "B"], vec!["", "C"]]).unwrap();
/// assert_eq!(find_words(&grid, 2, "", None), ["AB", "AC", "BA", "BC", "CA", "CB"]);
/// ```
#[must_use]
pub fn find_words(
    grid: &Grid,
    length: usize,
    prefix: &str,
    dictionary: Option<&dyn Dictionary>,
) -> Vec<String> {
    let mut words: Vec<String> = find_word_coords(grid, length, prefix, dictionary)
        .iter()
        .filter_map(|path| {
            let word = grid.word_at(path);
            debug_assert!(word.is_ok(), "search produced an unreadable path {path:?}");
            word.ok()
        })
        .collect();
    words.sort();
    words
}

/// State of one depth-first enumeration
struct Walk<'a> {
    grid: &'a Grid,
    length: usize,
    prefix: Vec<char>,
    dictionary: Option<&'a dyn Dictionary>,
    used: Vec<bool>,
    trail: Path,
    word: String,
    found: Vec<Path>,
}

impl Walk<'_> {
    fn visit(&mut self, coord: Coord) {
        let Some(letter) = self.grid.cell(coord).and_then(|cell| cell.letter()) else {
            return;
        };

        let depth = self.trail.len();
        if let Some(&expected) = self.prefix.get(depth)
            && !expected.eq_ignore_ascii_case(&letter)
        {
            return;
        }

        let index = coord.row * self.grid.column_count() + coord.col;
        self.used[index] = true;
        self.trail.push(coord);
        self.word.push(letter);

        if self.trail.len() == self.length {
            self.emit();
        } else {
            let grid = self.grid;
            for next in grid.neighbors(coord) {
                if !self.used[next.row * grid.column_count() + next.col] {
                    self.visit(next);
                }
            }
        }

        self.word.pop();
        self.trail.pop();
        self.used[index] = false;
    }

    fn emit(&mut self) {
        if self
            .dictionary
            .is_none_or(|dictionary| dictionary.contains(&self.word))
        {
            self.found.push(self.trail.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordList;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;

    fn grid(rows: &[&[&str]]) -> Grid {
        Grid::new(rows).unwrap()
    }

    fn small_grid() -> Grid {
        grid(&[&["A", "B"], &["", "C"]])
    }

    #[test]
    fn single_letters() {
        assert_eq!(find_words(&small_grid(), 1, "", None), ["A", "B", "C"]);
    }

    #[test]
    fn pairs_follow_adjacency() {
        assert_eq!(
            find_words(&small_grid(), 2, "", None),
            ["AB", "AC", "BA", "BC", "CA", "CB"]
        );
    }

    #[test]
    fn longer_than_letter_count_is_empty() {
        assert!(find_words(&small_grid(), 4, "", None).is_empty());
        assert_eq!(find_words(&small_grid(), 3, "", None).len(), 6);
    }

    #[test]
    fn huge_length_is_empty() {
        let row = grid(&[&["A", "B"]]);
        assert!(find_words(&row, usize::MAX, "", None).is_empty());
        assert!(find_word_coords(&row, 1 << 40, "A", None).is_empty());
    }

    #[test]
    fn every_path_reads_back_as_a_word() {
        let g = grid(&[&["A", "", "C"], &["D", "E", ""], &["", "H", "I"]]);
        for length in 1..=g.letter_count() {
            assert_eq!(
                find_words(&g, length, "", None).len(),
                find_word_coords(&g, length, "", None).len()
            );
        }
    }

    #[test]
    fn zero_length_is_empty() {
        assert!(find_word_coords(&small_grid(), 0, "", None).is_empty());
    }

    #[test]
    fn empty_grids_yield_nothing() {
        assert!(find_words(&Grid::empty(), 1, "", None).is_empty());
        let no_columns = Grid::new(&[Vec::<&str>::new()]).unwrap();
        assert!(find_words(&no_columns, 1, "", None).is_empty());
        let blank = grid(&[&["", ""], &["", ""]]);
        assert!(find_words(&blank, 1, "", None).is_empty());
    }

    #[test]
    fn single_row_with_prefix() {
        let row = grid(&[&["A", "B", "C", "D", "E", "F", "G", "H", "A", "I", "J"]]);
        assert_eq!(find_words(&row, 3, "A", None), ["ABC", "AHG", "AIJ"]);
    }

    #[test]
    fn prefix_is_case_insensitive_and_case_is_preserved() {
        let g = grid(&[&["c", "A"], &["", "t"]]);
        assert_eq!(find_words(&g, 3, "CA", None), ["cAt"]);
        assert_eq!(find_words(&g, 3, "cat", None), ["cAt"]);
    }

    #[test]
    fn prefix_longer_than_length_is_empty() {
        assert!(find_words(&small_grid(), 2, "ABC", None).is_empty());
    }

    #[test]
    fn prefix_with_no_match_is_empty() {
        assert!(find_words(&small_grid(), 2, "Z", None).is_empty());
    }

    #[test]
    fn duplicate_words_are_kept() {
        // "AB" can be traced from either A
        let g = grid(&[&["A", "B", "A"]]);
        assert_eq!(find_words(&g, 2, "", None), ["AB", "AB", "BA", "BA"]);
    }

    #[test]
    fn dictionary_filters_complete_words() {
        let g = grid(&[&["C", "A"], &["T", "S"]]);
        let words = WordList::from_words(["cat", "act", "sat", "tas"]);
        let found = find_words(&g, 3, "", Some(&words));
        assert_eq!(found, ["ACT", "CAT", "SAT", "TAS"]);

        let found = find_words(&g, 3, "s", Some(&words));
        assert_eq!(found, ["SAT"]);
    }

    #[test]
    fn dictionary_is_not_a_prefix_prune() {
        // "CA" is not a word but "CAT" is; the walk must still go through it
        let g = grid(&[&["C", "A", "T"]]);
        let only_cat = |word: &str| word.eq_ignore_ascii_case("cat");
        assert_eq!(find_words(&g, 3, "", Some(&only_cat)), ["CAT"]);
    }

    #[test]
    fn paths_are_simple_adjacent_and_exact_length() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..10 {
            let raw: Vec<Vec<String>> = (0..3)
                .map(|_| {
                    (0..4)
                        .map(|_| {
                            if rng.random_bool(0.2) {
                                String::new()
                            } else {
                                char::from(rng.random_range(b'A'..=b'D')).to_string()
                            }
                        })
                        .collect()
                })
                .collect();
            let g = Grid::new(&raw).unwrap();

            for length in 1..=4 {
                let paths = find_word_coords(&g, length, "", None);
                let unique: HashSet<&Path> = paths.iter().collect();
                assert_eq!(unique.len(), paths.len(), "paths must be distinct");

                for path in &paths {
                    assert_eq!(path.len(), length);
                    let cells: HashSet<&Coord> = path.iter().collect();
                    assert_eq!(cells.len(), length, "cells must not repeat");
                    assert!(path.windows(2).all(|pair| pair[0].is_adjacent(pair[1])));
                    assert!(path.iter().all(|c| g.is_letter(c.row, c.col)));
                }
            }

            assert!(find_word_coords(&g, g.letter_count() + 1, "", None).is_empty());
        }
    }

    #[test]
    fn every_word_starts_with_prefix() {
        let g = grid(&[&["a", "B", "a"], &["b", "A", "b"], &["A", "b", "A"]]);
        for prefix in ["a", "AB", "aba", "B"] {
            let words = find_words(&g, 4, prefix, None);
            assert!(!words.is_empty());
            for word in words {
                assert!(
                    word.to_ascii_uppercase()
                        .starts_with(&prefix.to_ascii_uppercase())
                );
            }
        }
    }

    #[test]
    fn search_does_not_mutate_grid() {
        let g = small_grid();
        let before = g.clone();
        let _ = find_word_coords(&g, 3, "", None);
        assert_eq!(g, before);
    }
}
