//! Classification of a raw guess line

use super::config::HINT_KEYWORD;
use crate::core::GuessedLetters;

/// What a line of player input means while a letter is expected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessInput {
    /// The hint keyword
    Hint,
    /// A new letter, lowercased
    Letter(char),
    /// A letter that was guessed before
    Repeated(char),
    /// Anything other than exactly one letter
    Invalid,
}

impl GuessInput {
    /// Classify one input line
    ///
    /// Input is trimmed and lowercased first, so `" A "` is the letter `a`
    /// and `"HINT"` asks for the hint.
    #[must_use]
    pub fn classify(line: &str, guessed: &GuessedLetters) -> Self {
        let input = line.trim().to_lowercase();
        if input == HINT_KEYWORD {
            return Self::Hint;
        }

        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_alphabetic() => {
                if guessed.contains(c) {
                    Self::Repeated(c)
                } else {
                    Self::Letter(c)
                }
            }
            _ => Self::Invalid,
        }
    }

    /// Whether this input uses up one of the limited input attempts
    #[must_use]
    pub const fn consumes_attempt(self) -> bool {
        matches!(self, Self::Repeated(_) | Self::Invalid)
    }
}
