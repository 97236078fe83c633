//! Command-line interface for timed_tictactoe.

use clap::{Parser, Subcommand, ValueEnum};
use timed_tictactoe::BoardSize;

/// Timed Tic-Tac-Toe - two players, 3x3 to 5x5, ten seconds per turn
#[derive(Parser, Debug)]
#[command(name = "timed_tictactoe")]
#[command(about = "Two-player tic-tac-toe with a per-turn countdown", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "timed_tictactoe.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Start on this board size (3, 4 or 5) instead of asking
        #[arg(short, long)]
        size: Option<BoardSize>,

        /// Milliseconds per countdown second (defaults to the config value)
        #[arg(long)]
        tick_millis: Option<u64>,
    },

    /// Run a comma-separated script of cells and `t` ticks, print the result
    Replay {
        /// Board size (3, 4 or 5)
        #[arg(short, long, default_value = "3")]
        size: BoardSize,

        /// Steps, e.g. `0,3,1,t,t,4,2`
        script: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// How `replay` prints the final snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The same screen the interactive game shows
    Text,
    /// The snapshot as pretty JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play() {
        let cli = Cli::try_parse_from(["timed_tictactoe", "play", "--size", "5"]).expect("valid");
        match cli.command {
            Command::Play { size, tick_millis } => {
                assert_eq!(size, Some(BoardSize::Five));
                assert_eq!(tick_millis, None);
            }
            other => panic!("Expected play, got {:?}", other),
        }
    }

    #[test]
    fn test_reject_bad_size() {
        assert!(Cli::try_parse_from(["timed_tictactoe", "play", "--size", "9"]).is_err());
    }

    #[test]
    fn test_parse_replay() {
        let cli = Cli::try_parse_from([
            "timed_tictactoe",
            "replay",
            "0,3,1,4,2",
            "--format",
            "json",
        ])
        .expect("valid");
        match cli.command {
            Command::Replay {
                size,
                script,
                format,
            } => {
                assert_eq!(size, BoardSize::Three);
                assert_eq!(script, "0,3,1,4,2");
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("Expected replay, got {:?}", other),
        }
    }
}
