//! Word bank loading utilities
//!
//! Loads word banks from tab-separated files or from the embedded constant.
//! Each line reads `category<TAB>difficulty<TAB>word<TAB>hint`; blank lines and
//! lines starting with `#` are ignored.

use super::WordBank;
use crate::core::{Category, Difficulty, Word};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Error type for loading a word bank from disk
#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: io::Error },
    Empty { path: PathBuf },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "Failed to read {}: {source}", path.display()),
            Self::Empty { path } => write!(f, "No valid words in {}", path.display()),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Empty { .. } => None,
        }
    }
}

/// Load a word bank from a file
///
/// Invalid lines are skipped with a warning.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read and `LoadError::Empty`
/// if it holds no valid entries.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let bank = load_from_file("data/words.tsv").unwrap();
/// println!("Loaded {} words", bank.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordBank, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let bank = parse_bank(&content);
    if bank.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(bank)
}

/// Parse word bank text, skipping invalid lines
#[must_use]
pub fn parse_bank(content: &str) -> WordBank {
    let mut bank = WordBank::new();

    for (number, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        // Split before trimming so an empty trailing hint stays a field
        let fields: Vec<&str> = line.splitn(4, '\t').map(str::trim).collect();
        let &[category, difficulty, word, hint] = fields.as_slice() else {
            warn!(line = number + 1, "expected 4 tab-separated fields, skipping");
            continue;
        };

        match parse_entry(category, difficulty, word, hint) {
            Some((category, difficulty, word)) => bank.insert(category, difficulty, word),
            None => warn!(line = number + 1, entry = trimmed, "invalid word entry, skipping"),
        }
    }

    bank
}

/// Convert embedded tuples to a word bank
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::bank_from_slice;
/// use hangman::wordlists::WORDS;
///
/// let bank = bank_from_slice(WORDS);
/// assert_eq!(bank.len(), WORDS.len());
/// ```
#[must_use]
pub fn bank_from_slice(slice: &[(&str, &str, &str, &str)]) -> WordBank {
    let mut bank = WordBank::new();
    for &(category, difficulty, word, hint) in slice {
        if let Some((category, difficulty, word)) = parse_entry(category, difficulty, word, hint) {
            bank.insert(category, difficulty, word);
        }
    }
    bank
}

fn parse_entry(
    category: &str,
    difficulty: &str,
    word: &str,
    hint: &str,
) -> Option<(Category, Difficulty, Word)> {
    Some((
        Category::from_name(category)?,
        Difficulty::from_name(difficulty)?,
        Word::new(word, hint).ok()?,
    ))
}
