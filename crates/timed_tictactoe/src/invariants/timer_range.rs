//! Timer range invariant.

use super::super::{GameEngine, TIMER_DURATION};
use super::Invariant;

/// Invariant: seconds remaining stay within `0..=TIMER_DURATION`, and a
/// running clock never rests at zero.
pub struct TimerRangeInvariant;

impl Invariant<GameEngine> for TimerRangeInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let remaining = engine.seconds_remaining();
        if remaining > TIMER_DURATION {
            return false;
        }
        !(engine.is_clock_running() && remaining == 0)
    }

    fn description() -> &'static str {
        "Timer stays within 0..=TIMER_DURATION and never rests at zero mid-round"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoardSize;

    #[test]
    fn test_holds_across_timeouts() {
        let mut engine = GameEngine::new();
        engine.start_session(BoardSize::Three);
        for _ in 0..35 {
            engine.tick_timer();
            assert!(TimerRangeInvariant::holds(&engine));
        }
    }
}
