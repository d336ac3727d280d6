//! Interactive play mode
//!
//! Runs game sessions back to back until the player declines another round
//! or input runs out.

use crate::game::{GameSession, LineInput, LineOutput, SessionOutcome};
use crate::output::Renderer;
use crate::wordlists::WordSource;
use rand::Rng;
use tracing::info;

/// Options for the play command
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayOptions {
    /// Stop after a single session instead of offering another round
    pub once: bool,
}

/// Tally of sessions played in one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayStats {
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    pub aborted: usize,
}

impl PlayStats {
    fn record(&mut self, outcome: &SessionOutcome) {
        self.games += 1;
        match outcome {
            SessionOutcome::Won(_) => self.wins += 1,
            SessionOutcome::Lost(_) => self.losses += 1,
            SessionOutcome::Aborted(_) => self.aborted += 1,
        }
    }
}

/// Play sessions until the player stops
///
/// Each session starts from scratch; only the tally carries over.
pub fn run_play<S, I, O, D, R>(
    source: &S,
    input: &mut I,
    output: &mut O,
    renderer: &D,
    rng: &mut R,
    options: PlayOptions,
) -> PlayStats
where
    S: WordSource,
    I: LineInput,
    O: LineOutput,
    D: Renderer + Clone,
    R: Rng,
{
    let mut stats = PlayStats::default();

    loop {
        let outcome = GameSession::new(
            source,
            &mut *input,
            &mut *output,
            renderer.clone(),
            &mut *rng,
        )
        .run();
        stats.record(&outcome);

        if matches!(&outcome, SessionOutcome::Aborted(error) if error.is_end_of_input()) {
            break;
        }

        if options.once || !play_again(input, output) {
            break;
        }
        output.println("");
    }

    info!(
        games = stats.games,
        wins = stats.wins,
        losses = stats.losses,
        "play finished"
    );
    stats
}

fn play_again<I: LineInput, O: LineOutput>(input: &mut I, output: &mut O) -> bool {
    output.print("Play again? (yes/no): ");
    input
        .read_line()
        .is_ok_and(|answer| matches!(answer.trim().to_lowercase().as_str(), "yes" | "y"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, Difficulty, Word};
    use crate::game::{RecordingOutput, ScriptedInput};
    use crate::output::AsciiRenderer;
    use crate::wordlists::WordBank;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn single_word_bank() -> WordBank {
        let mut bank = WordBank::new();
        bank.insert(
            Category::Animals,
            Difficulty::Easy,
            Word::new("ox", "Strong farm animal").unwrap(),
        );
        bank
    }

    fn run(lines: &[&str], options: PlayOptions) -> (PlayStats, RecordingOutput) {
        let bank = single_word_bank();
        let mut input = ScriptedInput::new(lines.iter().copied());
        let mut output = RecordingOutput::new();
        let mut rng = StdRng::seed_from_u64(5);

        let stats = run_play(
            &bank,
            &mut input,
            &mut output,
            &AsciiRenderer::plain(),
            &mut rng,
            options,
        );
        (stats, output)
    }

    #[test]
    fn plays_until_declined() {
        let lines = [
            "1", "1", "o", "x", "yes", // first game, won
            "1", "1", "a", "b", "c", "d", "e", "f", "no", // second game, lost
        ];
        let (stats, output) = run(&lines, PlayOptions::default());

        assert_eq!(
            stats,
            PlayStats {
                games: 2,
                wins: 1,
                losses: 1,
                aborted: 0,
            }
        );
        assert_eq!(output.count_lines("Play again?"), 2);
    }

    #[test]
    fn once_skips_replay_prompt() {
        let (stats, output) = run(&["1", "1", "o", "x"], PlayOptions { once: true });

        assert_eq!(stats.games, 1);
        assert_eq!(stats.wins, 1);
        assert_eq!(output.count_lines("Play again?"), 0);
    }

    #[test]
    fn end_of_input_stops_without_prompt() {
        let (stats, output) = run(&["1", "1", "o"], PlayOptions::default());

        assert_eq!(stats.games, 1);
        assert_eq!(stats.aborted, 1);
        assert_eq!(output.count_lines("Play again?"), 0);
    }

    #[test]
    fn exhausted_session_can_be_followed_by_another() {
        let mut lines = vec!["1", "1"];
        lines.extend(std::iter::repeat_n("??", 10));
        lines.extend(["y", "1", "1", "o", "x", "n"]);

        let (stats, _) = run(&lines, PlayOptions::default());

        assert_eq!(stats.games, 2);
        assert_eq!(stats.aborted, 1);
        assert_eq!(stats.wins, 1);
    }
}
