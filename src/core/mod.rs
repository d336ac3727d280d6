//! Core domain types for hangman
//!
//! Plain data types and pure functions; all I/O lives in `game` and `output`.

mod category;
mod guess;
mod word;

pub use category::{Category, Difficulty, MenuChoice, parse_choice_or_random};
pub use guess::GuessedLetters;
pub use word::{Word, WordError};
