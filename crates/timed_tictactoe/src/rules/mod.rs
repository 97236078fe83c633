//! Game rules for timed tic-tac-toe.
//!
//! Pure functions evaluating a board of any supported size. Rules are
//! separated from board storage so the engine and the invariant checks
//! share one definition of a win.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WinningLine, check_winner, winning_line};
