//! Terminal driver for timed tic-tac-toe.
//!
//! # Architecture
//!
//! - **Clock**: cancellable one-second turn clock keyed on the turn epoch
//! - **Controller**: serializes intents and ticks into the engine
//! - **Frontend**: stdin command parser and snapshot renderer
//! - **Script**: clockless replays for scripting and debugging
//! - **Config**: TOML configuration with CLI overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod clock;
pub mod config;
pub mod controller;
pub mod frontend;
pub mod script;

pub use clock::{ClockTick, TurnClock};
pub use config::{AppConfig, ConfigError};
pub use controller::{SessionController, SessionEvent};
pub use frontend::{Command, CommandError, Presenter, parse_command, render, run_terminal};
pub use script::{ScriptStep, parse_script, run_script};
