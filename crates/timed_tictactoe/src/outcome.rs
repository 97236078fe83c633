//! Round outcome and the result message derived from it.

use super::Player;
use serde::{Deserialize, Serialize};

/// Status of the current round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Round is ongoing.
    #[default]
    InProgress,
    /// Round ended with a completed line.
    Win(Player),
    /// Board filled with no completed line.
    Draw,
}

impl RoundOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            RoundOutcome::Win(player) => Some(*player),
            RoundOutcome::InProgress | RoundOutcome::Draw => None,
        }
    }

    /// Returns true once the round has a terminal outcome.
    pub fn is_finished(&self) -> bool {
        !matches!(self, RoundOutcome::InProgress)
    }

    /// Result message shown to the players. Empty while in progress.
    pub fn message(&self) -> String {
        match self {
            RoundOutcome::InProgress => String::new(),
            RoundOutcome::Win(player) => format!("Player {} wins!", player),
            RoundOutcome::Draw => "It's a draw!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(RoundOutcome::InProgress.message(), "");
        assert_eq!(RoundOutcome::Win(Player::X).message(), "Player X wins!");
        assert_eq!(RoundOutcome::Win(Player::O).message(), "Player O wins!");
        assert_eq!(RoundOutcome::Draw.message(), "It's a draw!");
    }

    #[test]
    fn test_winner() {
        assert_eq!(RoundOutcome::Win(Player::O).winner(), Some(Player::O));
        assert_eq!(RoundOutcome::Draw.winner(), None);
        assert!(RoundOutcome::Draw.is_finished());
        assert!(!RoundOutcome::InProgress.is_finished());
    }
}
