//! Per-turn countdown.
//!
//! The timer only counts. Wall-clock scheduling belongs to whoever drives
//! [`crate::GameEngine::tick_timer`].

use serde::{Deserialize, Serialize};

/// Seconds each player has to move.
pub const TIMER_DURATION: u8 = 10;

/// Seconds remaining in the current turn, within `0..=TIMER_DURATION`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnTimer {
    remaining: u8,
}

impl TurnTimer {
    /// Creates a full timer.
    pub fn new() -> Self {
        Self {
            remaining: TIMER_DURATION,
        }
    }

    /// Seconds remaining.
    pub fn remaining(&self) -> u8 {
        self.remaining
    }

    /// Refills the timer.
    pub fn reset(&mut self) {
        self.remaining = TIMER_DURATION;
    }

    /// Counts down one second, floored at zero.
    ///
    /// Returns `true` when this tick brought the timer to zero.
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }

    /// Fraction of the turn still left, from 1.0 (full) to 0.0.
    pub fn progress(&self) -> f32 {
        f32::from(self.remaining) / f32::from(TIMER_DURATION)
    }
}

impl Default for TurnTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_to_zero_once() {
        let mut timer = TurnTimer::new();
        for _ in 0..TIMER_DURATION - 1 {
            assert!(!timer.tick());
        }
        assert!(timer.tick());
        assert_eq!(timer.remaining(), 0);

        // Floored.
        assert!(!timer.tick());
        assert_eq!(timer.remaining(), 0);
    }

    #[test]
    fn test_progress() {
        let mut timer = TurnTimer::new();
        assert_eq!(timer.progress(), 1.0);
        for _ in 0..5 {
            timer.tick();
        }
        assert_eq!(timer.progress(), 0.5);
    }
}
