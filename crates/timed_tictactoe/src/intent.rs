//! Intents forwarded from the presentation layer.
//!
//! Intents describe what a player asked for, not what happened. The engine
//! decides whether an intent changes anything.

use super::BoardSize;
use serde::{Deserialize, Serialize};

/// A user request entering the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Pick a board size and start a session.
    ChooseBoardSize(BoardSize),
    /// Tap the cell at a row-major index.
    ClickCell(usize),
    /// Abandon the current round and start over, keeping the score.
    ResetRound,
    /// Continue with another round after a win or draw.
    NextRound,
    /// Drop the session and return to board size selection.
    NewGame,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::ChooseBoardSize(size) => write!(f, "choose {}", size),
            Intent::ClickCell(index) => write!(f, "click cell {}", index),
            Intent::ResetRound => write!(f, "reset round"),
            Intent::NextRound => write!(f, "next round"),
            Intent::NewGame => write!(f, "new game"),
        }
    }
}
