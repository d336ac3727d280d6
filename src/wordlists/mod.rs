//! Word source for hangman
//!
//! Provides the embedded word bank compiled into the binary, plus a loader for
//! custom word lists in the same tab-separated format.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::{Category, Difficulty, Word};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use std::fmt;

/// Supplies secret words for a category and difficulty
pub trait WordSource {
    /// Pick one word matching the category and difficulty
    ///
    /// # Errors
    ///
    /// Returns `WordSourceError::NoMatch` if the source has no such word.
    fn select_word<R: Rng + ?Sized>(
        &self,
        category: Category,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<Word, WordSourceError>;
}

/// Error type for word sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSourceError {
    NoMatch {
        category: Category,
        difficulty: Difficulty,
    },
}

impl fmt::Display for WordSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self::NoMatch {
            category,
            difficulty,
        } = self;
        write!(f, "No words available for {category} / {difficulty}")
    }
}

impl std::error::Error for WordSourceError {}

/// Words grouped by category and difficulty
#[derive(Debug, Clone, Default)]
pub struct WordBank {
    words: FxHashMap<(Category, Difficulty), Vec<Word>>,
}

impl WordBank {
    /// Empty bank
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The bank compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        loader::bank_from_slice(WORDS)
    }

    /// Add a word to the bank
    pub fn insert(&mut self, category: Category, difficulty: Difficulty, word: Word) {
        self.words.entry((category, difficulty)).or_default().push(word);
    }

    /// All words for a category and difficulty
    #[must_use]
    pub fn words(&self, category: Category, difficulty: Difficulty) -> &[Word] {
        self.words
            .get(&(category, difficulty))
            .map_or(&[], Vec::as_slice)
    }

    /// Total number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl WordSource for WordBank {
    fn select_word<R: Rng + ?Sized>(
        &self,
        category: Category,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<Word, WordSourceError> {
        self.words(category, difficulty)
            .choose(rng)
            .cloned()
            .ok_or(WordSourceError::NoMatch {
                category,
                difficulty,
            })
    }
}
