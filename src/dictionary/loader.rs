//! Dictionary loading utilities
//!
//! Provides functions to load word lists from files, from the system word
//! list, or from the embedded fallback list.

use super::{FALLBACK_WORDS, WordList};
use log::{debug, info};
use std::fs;
use std::io;
use std::path::Path;

/// System word lists, tried in this order
pub const SYSTEM_CANDIDATES: &[&str] = &["/usr/share/dict/words", "/usr/dict/words"];

/// Load a word list from a file, one word per line
///
/// Blank lines are skipped; words are matched case-insensitively.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use wordfinder::dictionary::Dictionary;
/// use wordfinder::dictionary::loader::load_from_file;
///
/// let words = load_from_file("/usr/share/dict/words").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordList> {
    let content = fs::read_to_string(path.as_ref())?;
    let words = WordList::from_words(content.lines());
    debug!(
        "Loaded {} words from {}",
        words.len(),
        path.as_ref().display()
    );
    Ok(words)
}

/// The embedded fallback list
#[must_use]
pub fn embedded() -> WordList {
    WordList::from_words(FALLBACK_WORDS)
}

/// Load the first available system word list, or the embedded fallback
///
/// # Errors
///
/// Returns an I/O error if a system word list exists but cannot be read.
pub fn load_system() -> io::Result<WordList> {
    load_first_available(SYSTEM_CANDIDATES)
}

/// Load the first existing file among `candidates`, or the embedded fallback
///
/// # Errors
///
/// Returns an I/O error if the chosen candidate exists but cannot be read.
pub fn load_first_available<P: AsRef<Path>>(candidates: &[P]) -> io::Result<WordList> {
    match candidates.iter().map(AsRef::<Path>::as_ref).find(|p| p.exists()) {
        Some(path) => {
            info!("Using dictionary {}", path.display());
            load_from_file(path)
        }
        None => {
            info!("No system dictionary found, using embedded word list");
            Ok(embedded())
        }
    }
}
