//! Word finding algorithms
//!
//! Path search over a single grid and the multi-word game solver built on it.

mod engine;
pub mod game;
pub mod search;

pub use engine::{Candidate, Solver};
pub use game::{Solution, solve_word_game, solve_word_game_parallel};
pub use search::{find_word_coords, find_words};
