//! Formatting utilities for terminal output

use crate::core::{GuessedLetters, Word};

/// Placeholder shown for letters not yet guessed
pub const PLACEHOLDER: char = '_';

/// Gallows figures indexed by the number of wrong guesses (0-6)
pub const GALLOWS: [&str; 7] = [
    "  +---+
  |   |
      |
      |
      |
      |
=========",
    "  +---+
  |   |
  O   |
      |
      |
      |
=========",
    "  +---+
  |   |
  O   |
  |   |
      |
      |
=========",
    "  +---+
  |   |
  O   |
 /|   |
      |
      |
=========",
    "  +---+
  |   |
  O   |
 /|\\  |
      |
      |
=========",
    "  +---+
  |   |
  O   |
 /|\\  |
 /    |
      |
=========",
    "  +---+
  |   |
  O   |
 /|\\  |
 / \\  |
      |
=========",
];

/// Format the secret with unguessed letters masked, letters separated by spaces
///
/// # Examples
/// ```
/// use hangman::core::{GuessedLetters, Word};
/// use hangman::output::formatters::mask_word;
///
/// let word = Word::new("banana", "").unwrap();
/// let mut guessed = GuessedLetters::new();
/// guessed.insert('a');
/// assert_eq!(mask_word(&word, &guessed), "_ a _ a _ a");
/// ```
#[must_use]
pub fn mask_word(word: &Word, guessed: &GuessedLetters) -> String {
    word.secret()
        .chars()
        .map(|c| if guessed.contains(c) { c } else { PLACEHOLDER })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Gallows figure for a number of wrong guesses, saturating at the last stage
#[must_use]
pub fn gallows(wrong_guesses: usize) -> &'static str {
    GALLOWS[wrong_guesses.min(GALLOWS.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_word_nothing_guessed() {
        let word = Word::new("cat", "").unwrap();
        assert_eq!(mask_word(&word, &GuessedLetters::new()), "_ _ _");
    }

    #[test]
    fn mask_word_all_guessed() {
        let word = Word::new("cat", "").unwrap();
        let mut guessed = GuessedLetters::new();
        for c in ['t', 'a', 'c', 'z'] {
            guessed.insert(c);
        }
        assert_eq!(mask_word(&word, &guessed), "c a t");
    }

    #[test]
    fn gallows_stages_grow() {
        assert!(!gallows(0).contains('O'));
        assert!(gallows(1).contains('O'));
        assert!(gallows(6).contains("/ \\"));
        // Saturates past the last stage
        assert_eq!(gallows(9), gallows(6));
    }
}
