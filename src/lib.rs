//! Hangman
//!
//! A terminal word-guessing game: pick a category and difficulty, then guess the
//! hidden word one letter at a time before the gallows is complete.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::game::{GameSession, RecordingOutput, ScriptedInput, SessionOutcome};
//! use hangman::output::AsciiRenderer;
//! use hangman::wordlists::WordBank;
//!
//! let bank = WordBank::embedded();
//! let mut input = ScriptedInput::new(["1", "1", "hint"]);
//! let mut output = RecordingOutput::new();
//!
//! // Runs until the script runs out, then aborts cleanly
//! let outcome = GameSession::new(&bank, &mut input, &mut output, AsciiRenderer::plain(), rand::rng()).run();
//! assert!(matches!(outcome, SessionOutcome::Aborted(_)));
//! ```

// Core domain types
pub mod core;

// Word source
pub mod wordlists;

// Game session state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Diagnostic logging
pub mod logging;
