//! Secret word representation
//!
//! A Word pairs the secret the player must guess with the hint shown at the start.

use std::fmt;

/// A secret word together with its hint
///
/// The secret is always non-empty, alphabetic and lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    secret: String,
    hint: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAlphabetic(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::NonAlphabetic(c) => write!(f, "Word contains non-letter character {c:?}"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a secret and a hint
    ///
    /// # Errors
    /// Returns `WordError` if the secret is empty or contains anything but letters.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Word;
    ///
    /// let word = Word::new("Cat", "A small pet that purrs").unwrap();
    /// assert_eq!(word.secret(), "cat");
    ///
    /// assert!(Word::new("", "nothing").is_err());
    /// assert!(Word::new("c4t", "typo").is_err());
    /// ```
    pub fn new(secret: impl Into<String>, hint: impl Into<String>) -> Result<Self, WordError> {
        let secret = secret.into().trim().to_lowercase();

        if secret.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(c) = secret.chars().find(|c| !c.is_alphabetic()) {
            return Err(WordError::NonAlphabetic(c));
        }

        Ok(Self {
            secret,
            hint: hint.into().trim().to_string(),
        })
    }

    /// Get the secret word
    #[inline]
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Get the hint
    #[inline]
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// Number of letters in the secret
    #[must_use]
    pub fn len(&self) -> usize {
        self.secret.chars().count()
    }

    /// True if the secret has no letters, which a constructed Word never does
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.secret.is_empty()
    }

    /// Check if the secret contains a letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.secret.contains(letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("elephant", "The largest land animal").unwrap();
        assert_eq!(word.secret(), "elephant");
        assert_eq!(word.hint(), "The largest land animal");
        assert_eq!(word.len(), 8);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("PERU", "").unwrap();
        assert_eq!(word.secret(), "peru");

        let word2 = Word::new("  KiWi ", " fuzzy ").unwrap();
        assert_eq!(word2.secret(), "kiwi");
        assert_eq!(word2.hint(), "fuzzy");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new("", "hint"), Err(WordError::Empty));
        assert_eq!(Word::new("   ", "hint"), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("c4t", ""), Err(WordError::NonAlphabetic('4')));
        assert!(Word::new("new york", "").is_err()); // Space
        assert!(Word::new("cat!", "").is_err()); // Punctuation
    }

    #[test]
    fn word_contains() {
        let word = Word::new("banana", "").unwrap();
        assert!(word.contains('b'));
        assert!(word.contains('n'));
        assert!(!word.contains('z'));
    }

    #[test]
    fn word_display() {
        let word = Word::new("cherry", "A small red fruit").unwrap();
        assert_eq!(format!("{word}"), "cherry");
    }
}
