//! Session limits

/// Wrong guesses allowed before the player is hanged
pub const MAX_ATTEMPTS: usize = 6;

/// Rejected inputs allowed while waiting for one valid letter
pub const MAX_INPUT_ATTEMPTS: usize = 10;

/// Keyword that re-displays the hint instead of guessing
pub const HINT_KEYWORD: &str = "hint";

/// Configuration for one game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub max_attempts: usize,
    pub max_input_attempts: usize,
}

impl SessionConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            max_input_attempts: MAX_INPUT_ATTEMPTS,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}
