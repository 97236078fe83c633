//! Core domain types for timed tic-tac-toe.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first every round).
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell carrying a player's mark.
    Occupied(Player),
}

/// Supported board dimensions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum BoardSize {
    /// 3x3 board.
    Three,
    /// 4x4 board.
    Four,
    /// 5x5 board.
    Five,
}

impl BoardSize {
    /// Number of rows (and columns).
    pub fn dimension(self) -> usize {
        match self {
            BoardSize::Three => 3,
            BoardSize::Four => 4,
            BoardSize::Five => 5,
        }
    }

    /// Number of cells on a board of this size.
    pub fn cell_count(self) -> usize {
        self.dimension() * self.dimension()
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.dimension();
        write!(f, "{}*{}", n, n)
    }
}

impl From<BoardSize> for u8 {
    fn from(size: BoardSize) -> Self {
        size.dimension() as u8
    }
}

impl TryFrom<u8> for BoardSize {
    type Error = BoardSizeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(BoardSize::Three),
            4 => Ok(BoardSize::Four),
            5 => Ok(BoardSize::Five),
            other => Err(BoardSizeError::Unsupported(other)),
        }
    }
}

impl FromStr for BoardSize {
    type Err = BoardSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u8>()
            .map_err(|_| BoardSizeError::NotANumber(s.to_string()))?;
        Self::try_from(value)
    }
}

/// Error raised when a board size outside {3, 4, 5} is requested.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardSizeError {
    /// The number is not a supported dimension.
    #[display("Unsupported board size {}, expected 3, 4 or 5", _0)]
    Unsupported(u8),

    /// The input could not be read as a number.
    #[display("Board size must be a number, got {:?}", _0)]
    NotANumber(String),
}

impl std::error::Error for BoardSizeError {}

/// Square board of `size * size` cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board of the given size.
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.cell_count()],
        }
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Returns the number of rows (and columns).
    pub fn dimension(&self) -> usize {
        self.size.dimension()
    }

    /// Gets the cell at the given index.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Gets the cell at the given row and column.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        let n = self.dimension();
        if row >= n || col >= n {
            return None;
        }
        self.get(row * n + col)
    }

    /// Checks if a cell is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Places a mark into an empty cell.
    ///
    /// Returns `false` and leaves the board untouched if the cell is
    /// occupied or out of range.
    pub fn place(&mut self, index: usize, player: Player) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) if *cell == Cell::Empty => {
                *cell = Cell::Occupied(player);
                true
            }
            _ => false,
        }
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Checks if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their index so a player can type it.
    pub fn display(&self) -> String {
        let n = self.dimension();
        let width = (self.cells.len() - 1).to_string().len();
        let separator = vec!["-".repeat(width); n].join("+");
        let mut result = String::new();
        for row in 0..n {
            let line = (0..n)
                .map(|col| {
                    let index = row * n + col;
                    let symbol = match self.cells[index] {
                        Cell::Empty => index.to_string(),
                        Cell::Occupied(player) => player.to_string(),
                    };
                    format!("{:>width$}", symbol)
                })
                .collect::<Vec<_>>()
                .join("|");
            result.push_str(&line);
            if row + 1 < n {
                result.push('\n');
                result.push_str(&separator);
                result.push('\n');
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_new_board_is_empty_for_every_size() {
        for size in BoardSize::iter() {
            let board = Board::new(size);
            assert_eq!(board.cells().len(), size.cell_count());
            assert!(board.cells().iter().all(|c| *c == Cell::Empty));
        }
    }

    #[test]
    fn test_place_only_into_empty_cell() {
        let mut board = Board::new(BoardSize::Three);
        assert!(board.place(4, Player::X));
        assert!(!board.place(4, Player::O));
        assert_eq!(board.get(4), Some(Cell::Occupied(Player::X)));
    }

    #[test]
    fn test_place_out_of_range_is_rejected() {
        let mut board = Board::new(BoardSize::Four);
        assert!(!board.place(16, Player::X));
        assert_eq!(board.cells().len(), 16);
    }

    #[test]
    fn test_cell_uses_row_major_index() {
        let mut board = Board::new(BoardSize::Five);
        board.place(2 * 5 + 3, Player::O);
        assert_eq!(board.cell(2, 3), Some(Cell::Occupied(Player::O)));
        assert_eq!(board.cell(3, 2), Some(Cell::Empty));
        assert_eq!(board.cell(5, 0), None);
    }

    #[test]
    fn test_board_size_parsing() {
        assert_eq!("4".parse::<BoardSize>(), Ok(BoardSize::Four));
        assert_eq!(BoardSize::try_from(6), Err(BoardSizeError::Unsupported(6)));
        assert!(matches!(
            "big".parse::<BoardSize>(),
            Err(BoardSizeError::NotANumber(_))
        ));
    }

    #[test]
    fn test_display_labels_empty_cells() {
        let mut board = Board::new(BoardSize::Three);
        board.place(0, Player::X);
        board.place(4, Player::O);
        assert_eq!(board.display(), "X|1|2\n-+-+-\n3|O|5\n-+-+-\n6|7|8");
    }

    #[test]
    fn test_display_pads_wide_indices() {
        let board = Board::new(BoardSize::Four);
        let first_line = board.display().lines().next().map(str::to_string);
        assert_eq!(first_line.as_deref(), Some(" 0| 1| 2| 3"));
    }
}
