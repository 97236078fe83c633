//! Line-oriented terminal frontend.
//!
//! Reads commands from stdin, forwards them as intents to the session
//! controller, and prints the snapshots it emits. Holds no game logic.

use crate::config::AppConfig;
use crate::controller::{SessionController, SessionEvent};
use anyhow::Result;
use derive_more::Display;
use timed_tictactoe::{
    Board, BoardSize, BoardSizeError, Cell, Intent, Player, RoundControl, SessionSnapshot,
    TIMER_DURATION,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Command summary printed by `help`.
pub const HELP: &str = "\
Commands:
  size <3|4|5>   choose a board size and start
  play <cell>    mark a cell (a bare number works too)
  reset          restart the current round, keeping the score
  next           start the next round after a win or draw
  new            new game: back to size selection, scores cleared
  help           show this help
  quit           leave";

/// A parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Forward this intent to the engine.
    Intent(Intent),
    /// Print the help text.
    Help,
    /// Leave the game.
    Quit,
}

/// Why a line could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CommandError {
    /// Blank line.
    #[display("Empty command")]
    Empty,

    /// First word is not a command.
    #[display("Unknown command {:?}", _0)]
    Unknown(String),

    /// Command needs an argument.
    #[display("Missing {}", _0)]
    MissingArgument(&'static str),

    /// Cell is not a number.
    #[display("Invalid cell {:?}", _0)]
    InvalidCell(String),

    /// Board size is not 3, 4 or 5.
    #[display("{}", _0)]
    InvalidSize(BoardSizeError),
}

impl std::error::Error for CommandError {}

/// Parses one line of input.
#[instrument]
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    let first = words.next().ok_or(CommandError::Empty)?.to_lowercase();

    if let Ok(index) = first.parse::<usize>() {
        return Ok(Command::Intent(Intent::ClickCell(index)));
    }

    let command = match first.as_str() {
        "size" | "s" => {
            let arg = words.next().ok_or(CommandError::MissingArgument("board size"))?;
            let size = arg.parse::<BoardSize>().map_err(CommandError::InvalidSize)?;
            Command::Intent(Intent::ChooseBoardSize(size))
        }
        "play" | "p" => {
            let arg = words.next().ok_or(CommandError::MissingArgument("cell"))?;
            let index = arg
                .parse::<usize>()
                .map_err(|_| CommandError::InvalidCell(arg.to_string()))?;
            Command::Intent(Intent::ClickCell(index))
        }
        "reset" => Command::Intent(Intent::ResetRound),
        "next" => Command::Intent(Intent::NextRound),
        "new" => Command::Intent(Intent::NewGame),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => return Err(CommandError::Unknown(first)),
    };
    Ok(command)
}

/// Renders the full screen for a snapshot.
pub fn render(snapshot: &SessionSnapshot) -> String {
    let mut out = String::from("Tic Tac Toe\n");

    let Some(size) = snapshot.size() else {
        let choices = [BoardSize::Three, BoardSize::Four, BoardSize::Five]
            .map(|s| s.to_string())
            .join(" ");
        out.push_str(&format!("Choose board size: {} (type `size 3`)\n", choices));
        return out;
    };

    let score = snapshot.score();
    out.push_str(&format!(
        "Player X: {}   Player O: {}\n\n",
        score.wins(Player::X),
        score.wins(Player::O)
    ));

    let mut board = Board::new(*size);
    for (index, cell) in snapshot.cells().iter().enumerate() {
        if let Cell::Occupied(player) = cell {
            board.place(index, *player);
        }
    }
    out.push_str(&board.display());
    out.push_str("\n\n");

    if snapshot.outcome().is_finished() {
        out.push_str(snapshot.message());
        out.push('\n');
    } else {
        out.push_str(&render_status(snapshot));
        out.push('\n');
    }

    match snapshot.round_control() {
        Some(RoundControl::NextRound) => out.push_str("[next] Next round   [new] New game\n"),
        Some(RoundControl::ResetRound) => out.push_str("[reset] Reset round   [new] New game\n"),
        None => {}
    }
    out
}

/// Renders the countdown line, e.g. `Player O's turn: 6 s [######----]`.
pub fn render_status(snapshot: &SessionSnapshot) -> String {
    let width = usize::from(TIMER_DURATION);
    let filled = ((snapshot.timer_progress() * width as f32).round() as usize).min(width);
    format!(
        "{} [{}{}]",
        snapshot.turn_label(),
        "#".repeat(filled),
        "-".repeat(width - filled)
    )
}

/// Decides what to print for each controller event.
///
/// A snapshot that only differs from the previous one by the countdown
/// prints just the status line.
#[derive(Debug, Default)]
pub struct Presenter {
    last: Option<SessionSnapshot>,
}

impl Presenter {
    /// Creates a presenter that has printed nothing yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the text to print for an event, if any.
    pub fn present(&mut self, event: &SessionEvent) -> Option<String> {
        match event {
            SessionEvent::TurnForfeited(player) => {
                Some(format!("Player {} ran out of time!", player))
            }
            SessionEvent::Updated(snapshot) => {
                let text = match &self.last {
                    Some(last) if last == snapshot => None,
                    Some(last) if only_countdown_changed(last, snapshot) => {
                        Some(render_status(snapshot))
                    }
                    _ => Some(render(snapshot)),
                };
                self.last = Some(snapshot.clone());
                text
            }
        }
    }
}

fn only_countdown_changed(before: &SessionSnapshot, after: &SessionSnapshot) -> bool {
    before.turn_epoch() == after.turn_epoch()
        && before.size() == after.size()
        && before.cells() == after.cells()
        && before.outcome() == after.outcome()
        && before.score() == after.score()
}

/// Runs the interactive game until `quit`, end of input, or Ctrl+C.
#[instrument(skip_all, fields(tick_millis = *config.tick_millis()))]
pub async fn run_terminal(config: AppConfig) -> Result<()> {
    let (intent_tx, intent_rx) = mpsc::channel(16);
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let controller = SessionController::new(config.tick_period(), event_tx);
    let controller_task = tokio::spawn(controller.run(intent_rx));

    println!("{}", HELP);
    if let Some(size) = config.board_size() {
        info!(%size, "Starting with configured board size");
        intent_tx.send(Intent::ChooseBoardSize(*size)).await?;
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut presenter = Presenter::new();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("End of input");
                    break;
                };
                match parse_command(&line) {
                    Ok(Command::Quit) => break,
                    Ok(Command::Help) => println!("{}", HELP),
                    Ok(Command::Intent(intent)) => {
                        debug!(%intent, "Forwarding intent");
                        intent_tx.send(intent).await?;
                    }
                    Err(CommandError::Empty) => {}
                    Err(e) => println!("{}. Type `help` for commands.", e),
                }
            }
            Some(event) = event_rx.recv() => {
                if let Some(text) = presenter.present(&event) {
                    println!("{}", text);
                }
            }
            _ = tokio::signal::ctrl_c() => {
                warn!("Interrupted");
                break;
            }
        }
    }

    drop(intent_tx);
    controller_task.await??;
    info!("Goodbye");
    Ok(())
}
