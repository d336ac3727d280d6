//! Letters guessed during one game

use super::Word;
use rustc_hash::FxHashSet;

/// Set of letters guessed so far, normalized to lowercase
///
/// Grows monotonically for the lifetime of a single game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessedLetters {
    letters: FxHashSet<char>,
}

impl GuessedLetters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a letter; returns `false` if it was already guessed
    pub fn insert(&mut self, letter: char) -> bool {
        self.letters.insert(normalize(letter))
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&normalize(letter))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// True once every letter of the secret has been guessed
    #[must_use]
    pub fn reveals(&self, word: &Word) -> bool {
        word.secret().chars().all(|c| self.letters.contains(&c))
    }

    /// Guessed letters in alphabetical order
    #[must_use]
    pub fn sorted(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.letters.iter().copied().collect();
        letters.sort_unstable();
        letters
    }
}

fn normalize(letter: char) -> char {
    letter.to_lowercase().next().unwrap_or(letter)
}
