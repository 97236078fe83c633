//! Board shape invariant: a board always has `size * size` cells.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: the cell count matches the board size.
pub struct BoardShapeInvariant;

impl Invariant<GameEngine> for BoardShapeInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine
            .board()
            .is_none_or(|board| board.cells().len() == board.size().cell_count())
    }

    fn description() -> &'static str {
        "Board has exactly size * size cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoardSize;
    use strum::IntoEnumIterator;

    #[test]
    fn test_holds_for_every_size() {
        for size in BoardSize::iter() {
            let mut engine = GameEngine::new();
            engine.start_session(size);
            assert!(BoardShapeInvariant::holds(&engine));
        }
    }
}
