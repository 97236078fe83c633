//! Session controller: serializes intents and clock ticks into the engine.
//!
//! The controller owns the engine and at most one [`TurnClock`]. After every
//! mutation it compares the engine's clock epoch with the running clock and
//! restarts or stops the clock to match, so a clock never outlives the turn
//! it was started for.

use crate::clock::{ClockTick, TurnClock};
use anyhow::Result;
use std::time::Duration;
use timed_tictactoe::{GameEngine, Intent, Player, SessionSnapshot, TickOutcome};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, trace};

/// Messages sent from the controller to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// State changed; render this snapshot.
    Updated(SessionSnapshot),
    /// The named player ran out of time and lost the turn.
    TurnForfeited(Player),
}

/// Owns the engine and its turn clock.
#[derive(Debug)]
pub struct SessionController {
    engine: GameEngine,
    clock: Option<TurnClock>,
    tick_period: Duration,
    tick_tx: mpsc::UnboundedSender<ClockTick>,
    tick_rx: mpsc::UnboundedReceiver<ClockTick>,
    event_tx: mpsc::UnboundedSender<SessionEvent>,
}

impl SessionController {
    /// Creates a controller with no active session.
    #[instrument(skip(event_tx))]
    pub fn new(tick_period: Duration, event_tx: mpsc::UnboundedSender<SessionEvent>) -> Self {
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        Self {
            engine: GameEngine::new(),
            clock: None,
            tick_period,
            tick_tx,
            tick_rx,
            event_tx,
        }
    }

    /// Read access to the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Epoch of the running clock, if one is running.
    pub fn clock_epoch(&self) -> Option<u64> {
        self.clock.as_ref().map(TurnClock::epoch)
    }

    /// Applies an intent, re-syncs the clock and emits the new snapshot.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(skip(self))]
    pub fn handle_intent(&mut self, intent: Intent) -> SessionSnapshot {
        let snapshot = self.engine.apply(intent);
        self.sync_clock();
        self.emit(SessionEvent::Updated(snapshot.clone()));
        snapshot
    }

    /// Counts down one second if the tick belongs to the running clock.
    ///
    /// Returns `None` for stale ticks, which are dropped without effect.
    #[instrument(skip(self), fields(tick_epoch = tick.epoch))]
    pub fn handle_tick(&mut self, tick: ClockTick) -> Option<SessionSnapshot> {
        if self.clock_epoch() != Some(tick.epoch) {
            debug!(running = ?self.clock_epoch(), "Discarding stale tick");
            return None;
        }

        match self.engine.tick_timer() {
            TickOutcome::Idle => {
                trace!("Tick while idle");
                return None;
            }
            TickOutcome::Counting(remaining) => trace!(remaining, "Countdown"),
            TickOutcome::Forfeited(player) => {
                info!(%player, "Turn forfeited");
                self.emit(SessionEvent::TurnForfeited(player));
            }
        }

        self.sync_clock();
        let snapshot = self.engine.snapshot();
        self.emit(SessionEvent::Updated(snapshot.clone()));
        Some(snapshot)
    }

    /// Processes intents and clock ticks one at a time until the intent
    /// channel closes.
    #[instrument(skip_all)]
    pub async fn run(mut self, mut intents: mpsc::Receiver<Intent>) -> Result<()> {
        info!("Session controller running");
        self.emit(SessionEvent::Updated(self.engine.snapshot()));

        loop {
            tokio::select! {
                intent = intents.recv() => match intent {
                    Some(intent) => {
                        self.handle_intent(intent);
                    }
                    None => {
                        debug!("Intent channel closed");
                        break;
                    }
                },
                Some(tick) = self.tick_rx.recv() => {
                    self.handle_tick(tick);
                }
            }
        }

        self.stop_clock();
        info!("Session controller stopped");
        Ok(())
    }

    fn sync_clock(&mut self) {
        let desired = self.engine.clock_epoch();
        if desired == self.clock_epoch() {
            return;
        }

        self.stop_clock();
        if let Some(epoch) = desired {
            self.clock = Some(TurnClock::start(
                epoch,
                self.tick_period,
                self.tick_tx.clone(),
            ));
        }
    }

    fn stop_clock(&mut self) {
        if let Some(clock) = self.clock.take() {
            debug!(epoch = clock.epoch(), "Stopping turn clock");
            clock.stop();
        }
    }

    fn emit(&self, event: SessionEvent) {
        if self.event_tx.send(event).is_err() {
            debug!("Event receiver gone");
        }
    }
}
