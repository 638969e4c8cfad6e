//! Multi-word game solver
//!
//! Finds every ordered sequence of words with the requested lengths such
//! that each word is traced on the grid left after removing the previous
//! words and collapsing the columns.
//!
//! # Cost
//! Each level branches once per path of its length, and every branch clones
//! the grid. The total work is the product of the path counts at every
//! level, so two or three words on a dense 5x5 grid without a dictionary is
//! already millions of branches. Use a dictionary to keep it tractable.

use super::search::find_word_coords;
use crate::core::{Grid, GridError, Path};
use crate::dictionary::Dictionary;
use log::{debug, trace};
use rayon::prelude::*;

/// One complete answer: a word per requested length, in order
pub type Solution = Vec<String>;

/// Solve the game sequentially
///
/// Solutions come out in the order of the first word's candidate paths
/// (see [`find_word_coords`]), then recursively the same for later words.
/// Different paths spelling the same words give separate solutions.
/// An empty `word_lengths` gives no solutions.
///
/// # Errors
/// Propagates `GridError` if a candidate path cannot be read back from or
/// removed from the grid, which indicates a bug in the search.
///
/// # Examples
/// ```
/// use wordfinder::core::Grid;
/// use wordfinder::solver::solve_word_game;
///
/// let grid = Grid::new(&[vec!["A", "B", "C"]]).unwrap();
/// let mut solutions = solve_word_game(&grid, &[3], None).unwrap();
/// solutions.sort();
/// assert_eq!(solutions, vec![vec!["ABC".to_string()], vec!["CBA".to_string()]]);
/// ```
pub fn solve_word_game(
    grid: &Grid,
    word_lengths: &[usize],
    dictionary: Option<&dyn Dictionary>,
) -> Result<Vec<Solution>, GridError> {
    let Some((&length, rest)) = word_lengths.split_first() else {
        return Ok(Vec::new());
    };

    let mut solutions = Vec::new();
    for path in find_word_coords(grid, length, "", dictionary) {
        solutions.extend(solve_branch(grid, &path, rest, dictionary)?);
    }

    trace!(
        "{} solutions for lengths {word_lengths:?} on a grid with {} letters",
        solutions.len(),
        grid.letter_count()
    );
    Ok(solutions)
}

/// Solve the game with the first word's candidates spread across threads
///
/// Returns the same solutions in the same order as [`solve_word_game`]; only
/// the top level runs in parallel, each branch on its own grid copy.
///
/// # Errors
/// Same as [`solve_word_game`].
pub fn solve_word_game_parallel(
    grid: &Grid,
    word_lengths: &[usize],
    dictionary: Option<&dyn Dictionary>,
) -> Result<Vec<Solution>, GridError> {
    let Some((&length, rest)) = word_lengths.split_first() else {
        return Ok(Vec::new());
    };

    let candidates = find_word_coords(grid, length, "", dictionary);
    debug!(
        "Solving {} first-word candidates across {} threads",
        candidates.len(),
        rayon::current_num_threads()
    );

    let branches = candidates
        .par_iter()
        .map(|path| solve_branch(grid, path, rest, dictionary))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(branches.into_iter().flatten().collect())
}

/// Solutions that start with the word at `path`
fn solve_branch(
    grid: &Grid,
    path: &Path,
    rest: &[usize],
    dictionary: Option<&dyn Dictionary>,
) -> Result<Vec<Solution>, GridError> {
    let word = grid.word_at(path)?;

    if rest.is_empty() {
        return Ok(vec![vec![word]]);
    }

    let mut reduced = grid.clone();
    reduced.remove_word(path, true)?;

    let solutions = solve_word_game(&reduced, rest, dictionary)?
        .into_iter()
        .map(|tail| {
            let mut solution = Vec::with_capacity(tail.len() + 1);
            solution.push(word.clone());
            solution.extend(tail);
            solution
        })
        .collect();
    Ok(solutions)
}
