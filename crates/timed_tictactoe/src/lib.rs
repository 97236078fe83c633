//! Timed tic-tac-toe game logic.
//!
//! Generalized tic-tac-toe on 3x3, 4x4 and 5x5 boards where each turn has a
//! ten second countdown and a running score is kept across rounds.
//!
//! # Architecture
//!
//! - **Types**: board, cells, players and board sizes
//! - **Rules**: pure win and draw detection for any board size
//! - **Engine**: session state machine driven by intents and timer ticks
//! - **Snapshot**: immutable view handed to whatever renders the game
//! - **Invariants**: properties checked after every engine mutation
//!
//! The engine does not schedule anything. A driver calls
//! [`GameEngine::tick_timer`] once per second while
//! [`GameEngine::clock_epoch`] returns `Some`.
//!
//! # Example
//!
//! ```
//! use timed_tictactoe::{BoardSize, GameEngine, Intent, Player, RoundOutcome};
//!
//! let mut engine = GameEngine::new();
//! engine.apply(Intent::ChooseBoardSize(BoardSize::Three));
//! for index in [0, 3, 1, 4, 2] {
//!     engine.apply(Intent::ClickCell(index));
//! }
//!
//! let snapshot = engine.snapshot();
//! assert_eq!(*snapshot.outcome(), RoundOutcome::Win(Player::X));
//! assert_eq!(snapshot.message(), "Player X wins!");
//! assert_eq!(snapshot.score().wins(Player::X), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod intent;
mod outcome;
mod score;
mod snapshot;
mod timer;
mod types;

pub mod invariants;
pub mod rules;

pub use engine::{GameEngine, MoveRejected, TickOutcome};
pub use intent::Intent;
pub use outcome::RoundOutcome;
pub use rules::WinningLine;
pub use score::Score;
pub use snapshot::{RoundControl, SessionSnapshot};
pub use timer::{TIMER_DURATION, TurnTimer};
pub use types::{Board, BoardSize, BoardSizeError, Cell, Player};
