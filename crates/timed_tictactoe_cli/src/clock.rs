//! Cancellable repeating turn clock.
//!
//! A clock is started for one turn epoch and sends a [`ClockTick`] carrying
//! that epoch once per period until it is cancelled or dropped. Receivers
//! discard ticks from epochs that are no longer current.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, trace};

/// One elapsed period of a turn clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTick {
    /// Turn epoch the emitting clock was started for.
    pub epoch: u64,
}

/// Handle to a running clock task. Dropping it stops the clock.
#[derive(Debug)]
pub struct TurnClock {
    epoch: u64,
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl TurnClock {
    /// Spawns a clock for `epoch`. The first tick arrives one `period`
    /// after start.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(skip(ticks))]
    pub fn start(epoch: u64, period: Duration, ticks: mpsc::UnboundedSender<ClockTick>) -> Self {
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        debug!(epoch, "Turn clock cancelled");
                        break;
                    }
                    _ = interval.tick() => {
                        trace!(epoch, "Turn clock tick");
                        if ticks.send(ClockTick { epoch }).is_err() {
                            debug!(epoch, "Tick receiver gone, stopping clock");
                            break;
                        }
                    }
                }
            }
        });

        debug!(epoch, "Turn clock started");
        Self {
            epoch,
            cancel,
            handle,
        }
    }

    /// Epoch this clock ticks for.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Requests the clock task to stop. No tick is sent after the task
    /// observes cancellation.
    pub fn stop(&self) {
        self.cancel.cancel();
    }

    /// Returns true once the clock task has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for TurnClock {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
