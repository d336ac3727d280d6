//! Rendering of the masked word and gallows

use super::formatters::{gallows, mask_word};
use crate::commands::{InventoryRow, PlayStats};
use crate::core::{GuessedLetters, Word};
use colored::Colorize;

/// Presentation of game progress
///
/// Stateless: everything shown is derived from the arguments of each call.
pub trait Renderer {
    /// Masked word line for the secret given the guessed letters
    fn masked_word(&self, word: &Word, guessed: &GuessedLetters) -> String;

    /// Gallows figure for the current number of wrong guesses
    fn gallows(&self, wrong_guesses: usize) -> String;
}

/// ASCII renderer, optionally colored
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiRenderer {
    color: bool,
}

impl AsciiRenderer {
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    /// Renderer without ANSI escapes
    #[must_use]
    pub const fn plain() -> Self {
        Self { color: false }
    }
}

impl Renderer for AsciiRenderer {
    fn masked_word(&self, word: &Word, guessed: &GuessedLetters) -> String {
        let masked = mask_word(word, guessed);
        if self.color {
            format!("Word: {}", masked.bright_yellow().bold())
        } else {
            format!("Word: {masked}")
        }
    }

    fn gallows(&self, wrong_guesses: usize) -> String {
        let figure = gallows(wrong_guesses);
        if !self.color {
            return figure.to_string();
        }

        match wrong_guesses {
            0..=2 => figure.green().to_string(),
            3..=4 => figure.yellow().to_string(),
            _ => figure.red().to_string(),
        }
    }
}

/// Print the welcome banner shown before the first game
pub fn print_banner() {
    println!("\n{}", "═".repeat(40).bright_cyan());
    println!("{}", "            H A N G M A N".bright_green().bold());
    println!("{}\n", "═".repeat(40).bright_cyan());
}

/// Print word counts per category and difficulty
pub fn print_inventory(rows: &[InventoryRow]) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(" {}", "WORD BANK".bright_cyan().bold());
    println!("{}", "─".repeat(40).cyan());

    for row in rows {
        let count = if row.count == 0 {
            "0".red().to_string()
        } else {
            row.count.to_string().bright_yellow().to_string()
        };
        println!("   {:<10} {:<8} {count:>4}", row.category, row.difficulty);
    }

    let total: usize = rows.iter().map(|row| row.count).sum();
    println!("{}", "─".repeat(40).cyan());
    println!("   {:<19} {}", "Total", total.to_string().bright_yellow().bold());
}

/// Print the tally after the player stops
pub fn print_play_stats(stats: &PlayStats) {
    if stats.games == 0 {
        return;
    }

    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Games: {}   Won: {}   Lost: {}",
        stats.games,
        stats.wins.to_string().green().bold(),
        stats.losses.to_string().red().bold()
    );
    if stats.aborted > 0 {
        println!("Aborted: {}", stats.aborted.to_string().yellow());
    }
    println!("\n👋 Thanks for playing!\n");
}
