//! Diagnostic logging setup
//!
//! Logs go to stderr so they never interleave with the game on stdout.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Filter directive for a `-v` count
///
/// 0 = errors only, 1 (-v) = game events, 2 (-vv) = every guess, 3+ = everything.
#[must_use]
pub const fn filter_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "error",
        1 => "warn,hangman=info",
        2 => "warn,hangman=debug",
        _ => "trace",
    }
}

/// Install the global subscriber; `RUST_LOG` overrides the verbosity flag
pub fn init_logging(verbosity: u8) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_for(verbosity)));

    let stderr = std::io::stderr.with_max_level(tracing::Level::TRACE);

    // Ignore a second initialisation instead of panicking
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(stderr)
        .with_target(true)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_detail() {
        assert_eq!(filter_for(0), "error");
        assert!(filter_for(1).contains("hangman=info"));
        assert!(filter_for(2).contains("hangman=debug"));
        assert_eq!(filter_for(7), "trace");
    }

    #[test]
    fn filters_parse() {
        for verbosity in 0..4 {
            assert!(EnvFilter::try_new(filter_for(verbosity)).is_ok());
        }
    }
}
