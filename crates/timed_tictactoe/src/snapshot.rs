//! Read-only session view handed to the presentation layer.

use super::rules::WinningLine;
use super::{BoardSize, Cell, GameEngine, Player, RoundOutcome, Score, TIMER_DURATION};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Which round button the presentation should offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundControl {
    /// Round in progress: start it over.
    ResetRound,
    /// Round finished: play another.
    NextRound,
}

/// Immutable copy of everything a renderer needs.
///
/// Produced after every engine mutation. Holding a snapshot never blocks
/// or observes later changes.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Board size, or `None` when no session is active.
    size: Option<BoardSize>,
    /// Cells in row-major order. Empty without a session.
    cells: Vec<Cell>,
    /// Player whose turn it is.
    current_player: Player,
    /// Outcome of the current round.
    outcome: RoundOutcome,
    /// Result message ("Player X wins!", "It's a draw!" or empty).
    message: String,
    /// Running score.
    score: Score,
    /// Seconds left in the current turn.
    seconds_remaining: u8,
    /// Turn epoch at the time of the snapshot.
    turn_epoch: u64,
    /// Line that won the round, if any.
    winning_line: Option<WinningLine>,
}

impl SessionSnapshot {
    /// Returns true while a session is active.
    pub fn is_active(&self) -> bool {
        self.size.is_some()
    }

    /// Fraction of the turn still left, from 1.0 to 0.0.
    pub fn timer_progress(&self) -> f32 {
        f32::from(self.seconds_remaining) / f32::from(TIMER_DURATION)
    }

    /// Status line such as `Player X's turn: 7 s`.
    pub fn turn_label(&self) -> String {
        format!(
            "Player {}'s turn: {} s",
            self.current_player, self.seconds_remaining
        )
    }

    /// Round button to offer, or `None` without a session.
    pub fn round_control(&self) -> Option<RoundControl> {
        if !self.is_active() {
            return None;
        }
        if self.outcome.is_finished() {
            Some(RoundControl::NextRound)
        } else {
            Some(RoundControl::ResetRound)
        }
    }
}

impl From<&GameEngine> for SessionSnapshot {
    fn from(engine: &GameEngine) -> Self {
        Self {
            size: engine.size(),
            cells: engine
                .board()
                .map(|board| board.cells().to_vec())
                .unwrap_or_default(),
            current_player: engine.current_player(),
            outcome: engine.outcome(),
            message: engine.message(),
            score: engine.score(),
            seconds_remaining: engine.seconds_remaining(),
            turn_epoch: engine.turn_epoch(),
            winning_line: engine.winning_line(),
        }
    }
}
