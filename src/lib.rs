//! Word Finder
//!
//! Finds words traced through adjacent cells of a letter grid, and solves
//! puzzles where words are removed one after another while the remaining
//! letters fall down their columns.
//!
//! # Quick Start
//!
//! ```rust
//! use wordfinder::core::Grid;
//! use wordfinder::dictionary::WordList;
//! use wordfinder::solver::Solver;
//!
//! let grid = Grid::new(&[vec!["C", "A", "T"], vec!["D", "O", "G"]]).unwrap();
//! let dictionary = WordList::from_words(["cat", "dog"]);
//! let solver = Solver::new(Some(&dictionary));
//!
//! assert_eq!(solver.find_words(&grid, 3, ""), vec!["CAT", "DOG"]);
//! assert_eq!(solver.solve(&grid, &[3, 3]).unwrap().len(), 2);
//! ```

// Core domain types
pub mod core;

// Path search and game solving
pub mod solver;

// Word lists
pub mod dictionary;

// Grid files
pub mod input;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod logging;
