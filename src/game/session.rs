//! A single hangman game from menu selection to outcome
//!
//! The session walks a fixed sequence: category menu, difficulty menu, hint,
//! guess rounds, outcome. Menu input is lenient (anything unrecognised picks at
//! random); letter input is strict and bounded by the input budget.

use super::config::{HINT_KEYWORD, SessionConfig};
use super::error::SessionError;
use super::io::{LineInput, LineOutput};
use super::validation::GuessInput;
use crate::core::{Category, Difficulty, GuessedLetters, MenuChoice, Word, parse_choice_or_random};
use crate::output::Renderer;
use crate::wordlists::WordSource;
use rand::Rng;
use tracing::{debug, info, warn};

/// Label printed before the hint
pub const HINT_LABEL: &str = "Hint: ";

/// Final state of a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub word: Word,
    pub wrong_guesses: usize,
    pub guessed: GuessedLetters,
}

/// How a session ended
#[derive(Debug)]
pub enum SessionOutcome {
    Won(GameSummary),
    Lost(GameSummary),
    Aborted(SessionError),
}

impl SessionOutcome {
    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(self, Self::Won(_))
    }

    /// Summary of a finished game; `None` if the session was aborted
    #[must_use]
    pub const fn summary(&self) -> Option<&GameSummary> {
        match self {
            Self::Won(summary) | Self::Lost(summary) => Some(summary),
            Self::Aborted(_) => None,
        }
    }
}

/// One play-through, wired to its collaborators
pub struct GameSession<'a, S, I, O, D, R> {
    source: &'a S,
    input: I,
    output: O,
    renderer: D,
    rng: R,
    config: SessionConfig,
}

impl<'a, S, I, O, D, R> GameSession<'a, S, I, O, D, R>
where
    S: WordSource,
    I: LineInput,
    O: LineOutput,
    D: Renderer,
    R: Rng,
{
    pub fn new(source: &'a S, input: I, output: O, renderer: D, rng: R) -> Self {
        Self {
            source,
            input,
            output,
            renderer,
            rng,
            config: SessionConfig::new(),
        }
    }

    /// Override the default limits
    #[must_use]
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Play the session to completion
    ///
    /// Never fails: any error aborts the game with a single error line and is
    /// returned as `SessionOutcome::Aborted`.
    pub fn run(mut self) -> SessionOutcome {
        match self.play() {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(%error, "session aborted");
                self.output.println(&format!("An error occurred: {error}"));
                SessionOutcome::Aborted(error)
            }
        }
    }

    fn play(&mut self) -> Result<SessionOutcome, SessionError> {
        let category = self.select_category()?;
        let difficulty = self.select_difficulty()?;
        info!(%category, %difficulty, "starting game");

        let word = self.select_word(category, difficulty)?;
        self.output.println(&format!("{HINT_LABEL}{}", word.hint()));

        self.guess_loop(word)
    }

    fn select_category(&mut self) -> Result<Category, SessionError> {
        self.select("Select a category or press Enter for random:")
    }

    fn select_difficulty(&mut self) -> Result<Difficulty, SessionError> {
        self.select("Select a difficulty level or press Enter for random:")
    }

    fn select<T: MenuChoice>(&mut self, title: &str) -> Result<T, SessionError> {
        self.output.println(title);
        for (i, choice) in T::ALL.iter().enumerate() {
            self.output.println(&format!("{}. {}", i + 1, choice.label()));
        }

        let answer = self.input.read_line()?;
        let choice: T = parse_choice_or_random(&answer, &mut self.rng);
        debug!(answer = %answer, choice = choice.label(), "menu selection");
        Ok(choice)
    }

    fn select_word(
        &mut self,
        category: Category,
        difficulty: Difficulty,
    ) -> Result<Word, SessionError> {
        let word = self.source.select_word(category, difficulty, &mut self.rng)?;
        debug!(letters = word.len(), "word selected");
        Ok(word)
    }

    fn guess_loop(&mut self, word: Word) -> Result<SessionOutcome, SessionError> {
        let max_attempts = self.config.max_attempts;
        let mut wrong_guesses = 0;
        let mut guessed = GuessedLetters::new();

        self.output.println(&format!(
            "The word has {} letters. You have {max_attempts} attempts.",
            word.len()
        ));

        while wrong_guesses < max_attempts && !guessed.reveals(&word) {
            self.render(&word, &guessed, wrong_guesses);

            let letter = self.get_valid_letter(&word, &guessed)?;
            let hit = word.contains(letter);
            if hit {
                self.output.println("Correct guess!");
            } else {
                wrong_guesses += 1;
                self.output.println(&format!(
                    "Incorrect guess! Attempts left: {}",
                    max_attempts - wrong_guesses
                ));
            }
            guessed.insert(letter);
            debug!(%letter, hit, wrong_guesses, "guess");
        }

        self.render(&word, &guessed, wrong_guesses);

        let won = guessed.reveals(&word);
        let summary = GameSummary {
            word,
            wrong_guesses,
            guessed,
        };

        if won {
            self.output.println(&format!(
                "Congratulations! You guessed the word: {}",
                summary.word
            ));
            info!(wrong_guesses, "game won");
            Ok(SessionOutcome::Won(summary))
        } else {
            self.output.println(&format!(
                "Sorry, you've been hanged. The word was: {}",
                summary.word
            ));
            info!("game lost");
            Ok(SessionOutcome::Lost(summary))
        }
    }

    fn render(&mut self, word: &Word, guessed: &GuessedLetters, wrong_guesses: usize) {
        self.output.println(&self.renderer.masked_word(word, guessed));
        self.output.println(&self.renderer.gallows(wrong_guesses));
        if !guessed.is_empty() {
            let letters: Vec<String> = guessed.sorted().iter().map(char::to_string).collect();
            self.output
                .println(&format!("Guessed letters: {}", letters.join(" ")));
        }
    }

    /// Prompt until the player enters a letter not guessed before
    ///
    /// Asking for the hint is free; invalid and repeated input each use up
    /// one of the `max_input_attempts`.
    fn get_valid_letter(
        &mut self,
        word: &Word,
        guessed: &GuessedLetters,
    ) -> Result<char, SessionError> {
        let mut attempts = 0;

        while attempts < self.config.max_input_attempts {
            self.output
                .print(&format!("Enter a letter (or type '{HINT_KEYWORD}' for a hint): "));
            let line = self.input.read_line()?;

            let guess = GuessInput::classify(&line, guessed);
            match guess {
                GuessInput::Letter(letter) => return Ok(letter),
                GuessInput::Hint => {
                    self.output.println(&format!("{HINT_LABEL}{}", word.hint()));
                }
                GuessInput::Invalid => {
                    self.output
                        .println("Invalid input. Please enter a single letter.");
                }
                GuessInput::Repeated(letter) => {
                    debug!(%letter, "repeated guess rejected");
                    self.output
                        .println("You've already guessed this letter. Try again.");
                }
            }

            if guess.consumes_attempt() {
                attempts += 1;
            }
        }

        Err(SessionError::InputExhausted { attempts })
    }
}
