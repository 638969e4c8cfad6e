//! Grid cells and coordinates

use std::fmt;

/// One grid position: either empty or holding a single ASCII letter
///
/// Letters keep the case they were given; comparisons elsewhere fold case
/// at the comparison site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Letter(char),
}

impl Cell {
    /// Parse a raw cell string
    ///
    /// Accepts the empty string or exactly one ASCII letter (`^[A-Za-z]?$`).
    /// Returns `None` for anything else.
    ///
    /// # Examples
    /// ```
    /// use wordfinder::core::Cell;
    ///
    /// assert_eq!(Cell::parse(""), Some(Cell::Empty));
    /// assert_eq!(Cell::parse("q"), Some(Cell::Letter('q')));
    /// assert_eq!(Cell::parse("QU"), None);
    /// assert_eq!(Cell::parse("9"), None);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Some(Self::Empty),
            (Some(ch), None) if ch.is_ascii_alphabetic() => Some(Self::Letter(ch)),
            _ => None,
        }
    }

    /// The letter in this cell, if any
    #[inline]
    #[must_use]
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Letter(ch) => Some(ch),
            Self::Empty => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Case-insensitive comparison against a letter
    #[inline]
    #[must_use]
    pub const fn matches(self, other: char) -> bool {
        match self {
            Self::Letter(ch) => ch.eq_ignore_ascii_case(&other),
            Self::Empty => false,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(ch) => write!(f, "{ch}"),
            Self::Empty => Ok(()),
        }
    }
}

/// A 0-based `(row, col)` position in a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether `other` touches this coordinate, diagonals included
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr <= 1 && dc <= 1 && (dr + dc) > 0
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An ordered trace of distinct, pairwise-adjacent cells
pub type Path = Vec<Coord>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_empty_and_single_letters() {
        assert_eq!(Cell::parse(""), Some(Cell::Empty));
        assert_eq!(Cell::parse("A"), Some(Cell::Letter('A')));
        assert_eq!(Cell::parse("z"), Some(Cell::Letter('z')));
    }

    #[test]
    fn parse_rejects_non_letters() {
        assert_eq!(Cell::parse(" "), None);
        assert_eq!(Cell::parse("9"), None);
        assert_eq!(Cell::parse("."), None);
        assert_eq!(Cell::parse("ABC"), None);
        assert_eq!(Cell::parse("é"), None);
    }

    #[test]
    fn matches_folds_case() {
        assert!(Cell::Letter('a').matches('A'));
        assert!(Cell::Letter('A').matches('a'));
        assert!(!Cell::Letter('a').matches('b'));
        assert!(!Cell::Empty.matches('a'));
    }

    #[test]
    fn display_preserves_case() {
        assert_eq!(Cell::Letter('q').to_string(), "q");
        assert_eq!(Cell::Empty.to_string(), "");
    }

    #[test]
    fn adjacency_includes_diagonals() {
        let center = Coord::new(1, 1);
        assert!(center.is_adjacent(Coord::new(0, 0)));
        assert!(center.is_adjacent(Coord::new(2, 2)));
        assert!(center.is_adjacent(Coord::new(1, 0)));
        assert!(!center.is_adjacent(center));
        assert!(!center.is_adjacent(Coord::new(3, 1)));
    }
}
