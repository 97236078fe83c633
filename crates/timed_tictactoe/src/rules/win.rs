//! Win detection logic for boards of any supported size.

use super::super::{Board, Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A complete line on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinningLine {
    /// Row `r`, cells `r*s .. r*s+s`.
    Row(usize),
    /// Column `c`, cells `c, c+s, c+2s, ...`.
    Column(usize),
    /// Top-left to bottom-right, cells `i*s+i`.
    MainDiagonal,
    /// Top-right to bottom-left, cells `i*s+(s-1-i)`.
    AntiDiagonal,
}

impl WinningLine {
    /// Board indices covered by this line on a board of dimension `n`.
    pub fn indices(self, n: usize) -> Vec<usize> {
        match self {
            WinningLine::Row(r) => (0..n).map(|c| r * n + c).collect(),
            WinningLine::Column(c) => (0..n).map(|r| r * n + c).collect(),
            WinningLine::MainDiagonal => (0..n).map(|i| i * n + i).collect(),
            WinningLine::AntiDiagonal => (0..n).map(|i| i * n + (n - 1 - i)).collect(),
        }
    }

    /// Every line of a board of dimension `n`, in check order.
    fn all(n: usize) -> impl Iterator<Item = WinningLine> {
        (0..n)
            .map(WinningLine::Row)
            .chain((0..n).map(WinningLine::Column))
            .chain([WinningLine::MainDiagonal, WinningLine::AntiDiagonal])
    }
}

/// Returns the first line fully held by `player`.
///
/// Lines are checked rows first, then columns, then the main diagonal,
/// then the anti-diagonal.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, player: Player) -> Option<WinningLine> {
    let n = board.dimension();
    let mark = Cell::Occupied(player);
    WinningLine::all(n).find(|line| {
        line.indices(n)
            .into_iter()
            .all(|index| board.get(index) == Some(mark))
    })
}

/// Checks if either player holds a complete line.
///
/// X is checked before O. A board reached through legal play never has
/// lines for both.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|player| winning_line(board, *player).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoardSize;

    fn board_with(size: BoardSize, player: Player, indices: &[usize]) -> Board {
        let mut board = Board::new(size);
        for index in indices {
            board.place(*index, player);
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new(BoardSize::Three);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(BoardSize::Three, Player::X, &[0, 1, 2]);
        assert_eq!(winning_line(&board, Player::X), Some(WinningLine::Row(0)));
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_column_on_four_by_four() {
        let board = board_with(BoardSize::Four, Player::O, &[1, 5, 9, 13]);
        assert_eq!(winning_line(&board, Player::O), Some(WinningLine::Column(1)));
        assert_eq!(winning_line(&board, Player::X), None);
    }

    #[test]
    fn test_winner_diagonals_on_five_by_five() {
        let main = board_with(BoardSize::Five, Player::X, &[0, 6, 12, 18, 24]);
        assert_eq!(winning_line(&main, Player::X), Some(WinningLine::MainDiagonal));

        let anti = board_with(BoardSize::Five, Player::O, &[4, 8, 12, 16, 20]);
        assert_eq!(winning_line(&anti, Player::O), Some(WinningLine::AntiDiagonal));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(BoardSize::Four, Player::X, &[0, 1, 2]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_rows_reported_before_columns() {
        // Row 0 and column 0 both complete.
        let board = board_with(BoardSize::Three, Player::X, &[0, 1, 2, 3, 6]);
        assert_eq!(winning_line(&board, Player::X), Some(WinningLine::Row(0)));
    }

    #[test]
    fn test_line_indices() {
        assert_eq!(WinningLine::Row(1).indices(3), vec![3, 4, 5]);
        assert_eq!(WinningLine::Column(2).indices(4), vec![2, 6, 10, 14]);
        assert_eq!(WinningLine::AntiDiagonal.indices(3), vec![2, 4, 6]);
    }
}
