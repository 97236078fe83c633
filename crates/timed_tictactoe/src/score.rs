//! Running score across the rounds of a session.

use super::Player;
use serde::{Deserialize, Serialize};

/// Round wins per player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    x: u32,
    o: u32,
}

impl Score {
    /// Creates a zeroed score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for a player.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Records one round won by `player`.
    pub fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x = self.x.saturating_add(1),
            Player::O => self.o = self.o.saturating_add(1),
        }
    }

    /// Zeroes both counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_win_touches_only_winner() {
        let mut score = Score::new();
        score.record_win(Player::O);
        score.record_win(Player::O);
        assert_eq!(score.wins(Player::O), 2);
        assert_eq!(score.wins(Player::X), 0);

        score.reset();
        assert_eq!(score, Score::new());
    }
}
