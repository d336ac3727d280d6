//! Errors that abort a game session

use crate::wordlists::WordSourceError;
use std::fmt;
use std::io;

/// Reason a session ended without a win or loss
#[derive(Debug)]
pub enum SessionError {
    /// The player used up the input budget without giving a valid new letter
    InputExhausted { attempts: usize },
    /// The word source had nothing for the chosen category and difficulty
    NoWord(WordSourceError),
    /// Reading player input failed
    Io(io::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputExhausted { attempts } => {
                write!(f, "Max input attempts reached ({attempts})")
            }
            Self::NoWord(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "Failed to read input: {e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InputExhausted { .. } => None,
            Self::NoWord(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<WordSourceError> for SessionError {
    fn from(e: WordSourceError) -> Self {
        Self::NoWord(e)
    }
}

impl From<io::Error> for SessionError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl SessionError {
    /// True if the input stream ended, so no further session can be played
    #[must_use]
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, Difficulty};

    #[test]
    fn display_messages() {
        let exhausted = SessionError::InputExhausted { attempts: 10 };
        assert_eq!(exhausted.to_string(), "Max input attempts reached (10)");

        let no_word = SessionError::from(WordSourceError::NoMatch {
            category: Category::Animals,
            difficulty: Difficulty::Hard,
        });
        assert_eq!(no_word.to_string(), "No words available for Animals / Hard");
    }

    #[test]
    fn end_of_input_detection() {
        let eof = SessionError::from(io::Error::new(io::ErrorKind::UnexpectedEof, "eof"));
        assert!(eof.is_end_of_input());

        let other = SessionError::from(io::Error::other("broken"));
        assert!(!other.is_end_of_input());
        assert!(!SessionError::InputExhausted { attempts: 10 }.is_end_of_input());
    }
}
