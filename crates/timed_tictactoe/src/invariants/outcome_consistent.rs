//! Outcome consistency invariant: the outcome agrees with the board.

use super::super::{GameEngine, RoundOutcome};
use super::super::rules::{is_full, winning_line};
use super::Invariant;

/// Invariant: the recorded outcome matches what the board shows.
///
/// - `Win(p)`: `p` holds a complete line.
/// - `Draw`: the board is full and nobody holds a line.
/// - `InProgress` with a session: nobody holds a line and a cell is free.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameEngine> for OutcomeConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let Some(board) = engine.board() else {
            return engine.outcome() == RoundOutcome::InProgress;
        };

        match engine.outcome() {
            RoundOutcome::Win(player) => winning_line(board, player).is_some(),
            RoundOutcome::Draw => is_full(board) && engine.line_holder().is_none(),
            RoundOutcome::InProgress => engine.line_holder().is_none() && !is_full(board),
        }
    }

    fn description() -> &'static str {
        "Round outcome agrees with the board"
    }
}
