//! Dictionaries for filtering found words
//!
//! The search engine only ever asks one question of a dictionary: does it
//! contain this word? [`Dictionary`] is that predicate. [`WordList`] is the
//! concrete set loaded from the system word list, a custom file or the
//! embedded fallback list.

mod embedded;
pub mod loader;

pub use embedded::{FALLBACK_WORDS, FALLBACK_WORDS_COUNT};

use rustc_hash::FxHashSet;

/// Case-insensitive word membership predicate
///
/// `Sync` so one dictionary can be shared by the parallel solver.
pub trait Dictionary: Sync {
    /// Whether `word` is a known word, ignoring ASCII case
    fn contains(&self, word: &str) -> bool;
}

impl<F> Dictionary for F
where
    F: Fn(&str) -> bool + Sync,
{
    fn contains(&self, word: &str) -> bool {
        self(word)
    }
}

/// A set of known words, stored upper-cased
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: FxHashSet<String>,
}

impl WordList {
    /// Build a word list from any sequence of words
    ///
    /// # Examples
    /// ```
    /// use wordfinder::dictionary::{Dictionary, WordList};
    ///
    /// let words = WordList::from_words(["cat", "Dog"]);
    /// assert!(words.contains("CAT"));
    /// assert!(words.contains("dog"));
    /// assert!(!words.contains("cow"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_ascii_uppercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_ascii_uppercase())
    }
}
