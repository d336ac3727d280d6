//! Hangman - CLI
//!
//! Terminal hangman with categories, difficulty tiers and hints.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{PlayOptions, run_play, word_inventory},
    game::{ReaderInput, WriterOutput},
    logging::init_logging,
    output::{AsciiRenderer, print_banner, print_inventory, print_play_stats},
    wordlists::{WordBank, loader::load_from_file},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the hidden word one letter at a time before the gallows is complete",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file (category, difficulty, word, hint separated by tabs); embedded bank by default
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Seed for reproducible word and menu choices
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log detail on stderr (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play hangman (default)
    Play {
        /// Play a single game without offering another round
        #[arg(long)]
        once: bool,
    },

    /// Show how many words the bank holds per category and difficulty
    List,
}

/// Load the word bank based on the -w flag
fn load_bank(path: Option<&Path>) -> Result<WordBank> {
    match path {
        Some(path) => {
            let bank = load_from_file(path)
                .with_context(|| format!("loading word list {}", path.display()))?;
            info!(words = bank.len(), path = %path.display(), "loaded custom word list");
            Ok(bank)
        }
        None => Ok(WordBank::embedded()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let bank = load_bank(cli.words.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { once: false });

    match command {
        Commands::Play { once } => {
            run_play_command(&bank, cli.seed, !cli.no_color, PlayOptions { once });
            Ok(())
        }
        Commands::List => {
            print_inventory(&word_inventory(&bank));
            Ok(())
        }
    }
}

fn run_play_command(bank: &WordBank, seed: Option<u64>, color: bool, options: PlayOptions) {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let mut input = ReaderInput::new(io::stdin().lock());
    let mut output = WriterOutput::new(io::stdout());

    print_banner();
    let stats = run_play(
        bank,
        &mut input,
        &mut output,
        &AsciiRenderer::new(color),
        &mut rng,
        options,
    );
    print_play_stats(&stats);
}
