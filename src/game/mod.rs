//! Game session and its collaborators
//!
//! `GameSession` runs one game against a word source, line input, line output
//! and a renderer. All collaborators are traits so sessions can be driven by a
//! terminal or by a script.

pub mod config;
mod error;
pub mod io;
mod session;
mod validation;

pub use config::SessionConfig;
pub use error::SessionError;
pub use io::{LineInput, LineOutput, ReaderInput, RecordingOutput, ScriptedInput, WriterOutput};
pub use session::{GameSession, GameSummary, HINT_LABEL, SessionOutcome};
pub use validation::GuessInput;
