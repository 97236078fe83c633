//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that hold after every engine
//! mutation. Debug builds check them after each transition; tests can
//! check them independently.

use super::GameEngine;
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

pub mod board_shape;
pub mod outcome_consistent;
pub mod timer_range;

pub use board_shape::BoardShapeInvariant;
pub use outcome_consistent::OutcomeConsistentInvariant;
pub use timer_range::TimerRangeInvariant;

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    BoardShapeInvariant,
    TimerRangeInvariant,
    OutcomeConsistentInvariant,
);

/// Asserts that all engine invariants hold (debug builds only).
#[instrument(skip(engine))]
pub fn assert_invariants(engine: &GameEngine) {
    if cfg!(debug_assertions)
        && let Err(violations) = EngineInvariants::check_all(engine)
    {
        for violation in &violations {
            warn!(description = %violation.description, "Engine invariant violated");
        }
        debug_assert!(violations.is_empty(), "Engine invariants violated: {:?}", violations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoardSize;

    #[test]
    fn test_invariant_set_holds_without_session() {
        let engine = GameEngine::new();
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_through_a_round() {
        let mut engine = GameEngine::new();
        engine.start_session(BoardSize::Four);
        for index in [0, 5, 1, 6, 2, 7] {
            engine.play_move(index).ok();
            engine.tick_timer();
            assert!(EngineInvariants::check_all(&engine).is_ok());
        }
    }

    #[test]
    fn test_two_invariants_as_set() {
        let mut engine = GameEngine::new();
        engine.start_session(BoardSize::Five);

        type TwoInvariants = (BoardShapeInvariant, TimerRangeInvariant);
        assert!(TwoInvariants::check_all(&engine).is_ok());
    }
}
