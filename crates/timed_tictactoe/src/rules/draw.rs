//! Draw detection logic.

use super::super::{Board, Cell};
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (no empty cell left).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A draw is a full board on which nobody completed a line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
