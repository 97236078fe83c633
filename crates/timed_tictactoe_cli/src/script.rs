//! Scripted replays without a clock.
//!
//! A script is a comma-separated list of steps: a cell index clicks that
//! cell, `t` counts down one second, and `reset`, `next` and `new` send the
//! matching round intents.

use crate::frontend::CommandError;
use timed_tictactoe::{BoardSize, GameEngine, Intent, SessionSnapshot, TickOutcome};
use tracing::{debug, instrument};

/// One step of a replay script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    /// Apply an intent.
    Intent(Intent),
    /// One second elapses.
    Tick,
}

/// Parses a replay script.
#[instrument]
pub fn parse_script(script: &str) -> Result<Vec<ScriptStep>, CommandError> {
    script
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| match token.to_lowercase().as_str() {
            "t" | "tick" => Ok(ScriptStep::Tick),
            "reset" => Ok(ScriptStep::Intent(Intent::ResetRound)),
            "next" => Ok(ScriptStep::Intent(Intent::NextRound)),
            "new" => Ok(ScriptStep::Intent(Intent::NewGame)),
            other => other
                .parse::<usize>()
                .map(|index| ScriptStep::Intent(Intent::ClickCell(index)))
                .map_err(|_| CommandError::InvalidCell(token.to_string())),
        })
        .collect()
}

/// Starts a session of `size` and runs every step against it.
#[instrument(skip(steps), fields(steps = steps.len()))]
pub fn run_script(size: BoardSize, steps: &[ScriptStep]) -> SessionSnapshot {
    let mut engine = GameEngine::new();
    engine.start_session(size);

    for step in steps {
        match step {
            ScriptStep::Intent(intent) => {
                engine.apply(*intent);
            }
            ScriptStep::Tick => {
                if let TickOutcome::Forfeited(player) = engine.tick_timer() {
                    debug!(%player, "Scripted timeout");
                }
            }
        }
    }
    engine.snapshot()
}
