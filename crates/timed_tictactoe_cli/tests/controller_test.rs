//! Controller tests against a paused tokio clock.

use std::time::Duration;
use timed_tictactoe::{BoardSize, Cell, Intent, Player, RoundOutcome, SessionSnapshot};
use timed_tictactoe_cli::{SessionController, SessionEvent};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

struct Harness {
    intents: mpsc::Sender<Intent>,
    events: mpsc::UnboundedReceiver<SessionEvent>,
    task: JoinHandle<anyhow::Result<()>>,
}

impl Harness {
    fn start() -> Self {
        let (intent_tx, intent_rx) = mpsc::channel(16);
        let (event_tx, events) = mpsc::unbounded_channel();
        let controller = SessionController::new(Duration::from_secs(1), event_tx);
        let task = tokio::spawn(controller.run(intent_rx));
        Self {
            intents: intent_tx,
            events,
            task,
        }
    }

    async fn send(&self, intent: Intent) {
        self.intents.send(intent).await.expect("controller running");
    }

    fn drain(&mut self) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            events.push(event);
        }
        events
    }

    async fn finish(self) {
        drop(self.intents);
        self.task
            .await
            .expect("controller task panicked")
            .expect("controller failed");
    }
}

fn last_snapshot(events: &[SessionEvent]) -> Option<&SessionSnapshot> {
    events.iter().rev().find_map(|event| match event {
        SessionEvent::Updated(snapshot) => Some(snapshot),
        SessionEvent::TurnForfeited(_) => None,
    })
}

fn forfeits(events: &[SessionEvent]) -> Vec<Player> {
    events
        .iter()
        .filter_map(|event| match event {
            SessionEvent::TurnForfeited(player) => Some(*player),
            SessionEvent::Updated(_) => None,
        })
        .collect()
}

#[tokio::test(start_paused = true)]
async fn test_initial_snapshot_has_no_session() {
    let mut harness = Harness::start();
    tokio::time::sleep(Duration::from_millis(10)).await;

    let events = harness.drain();
    let snapshot = last_snapshot(&events).expect("initial snapshot");
    assert!(!snapshot.is_active());

    // No clock without a session.
    tokio::time::sleep(Duration::from_secs(30)).await;
    assert!(harness.drain().is_empty());
    harness.finish().await;
}

#[tokio::test(start_paused = true)]
async fn test_idle_turn_is_forfeited_once() {
    let mut harness = Harness::start();
    harness
        .send(Intent::ChooseBoardSize(BoardSize::Three))
        .await;

    tokio::time::sleep(Duration::from_millis(10_500)).await;

    let events = harness.drain();
    assert_eq!(forfeits(&events), vec![Player::X]);
    let snapshot = last_snapshot(&events).expect("snapshot");
    assert_eq!(*snapshot.current_player(), Player::O);
    assert_eq!(*snapshot.seconds_remaining(), 10);
    assert!(snapshot.cells().iter().all(|cell| *cell == Cell::Empty));
    harness.finish().await;
}

#[tokio::test(start_paused = true)]
async fn test_move_restarts_countdown() {
    let mut harness = Harness::start();
    harness
        .send(Intent::ChooseBoardSize(BoardSize::Three))
        .await;

    tokio::time::sleep(Duration::from_millis(5_500)).await;
    harness.send(Intent::ClickCell(4)).await;
    tokio::time::sleep(Duration::from_millis(4_200)).await;

    let events = harness.drain();
    assert!(forfeits(&events).is_empty());
    let snapshot = last_snapshot(&events).expect("snapshot");
    assert_eq!(*snapshot.current_player(), Player::O);
    assert_eq!(*snapshot.seconds_remaining(), 6);
    harness.finish().await;
}

#[tokio::test(start_paused = true)]
async fn test_finished_round_stops_ticking() {
    let mut harness = Harness::start();
    harness
        .send(Intent::ChooseBoardSize(BoardSize::Three))
        .await;
    for index in [0, 3, 1, 4, 2] {
        harness.send(Intent::ClickCell(index)).await;
    }
    tokio::time::sleep(Duration::from_millis(10)).await;

    let events = harness.drain();
    let snapshot = last_snapshot(&events).expect("snapshot");
    assert_eq!(*snapshot.outcome(), RoundOutcome::Win(Player::X));

    tokio::time::sleep(Duration::from_secs(30)).await;
    assert!(harness.drain().is_empty());

    // The next round starts a fresh countdown.
    harness.send(Intent::NextRound).await;
    tokio::time::sleep(Duration::from_millis(2_500)).await;
    let events = harness.drain();
    let snapshot = last_snapshot(&events).expect("snapshot");
    assert_eq!(*snapshot.outcome(), RoundOutcome::InProgress);
    assert_eq!(*snapshot.seconds_remaining(), 8);
    assert_eq!(snapshot.score().wins(Player::X), 1);
    harness.finish().await;
}

#[tokio::test(start_paused = true)]
async fn test_new_game_stops_clock() {
    let mut harness = Harness::start();
    harness
        .send(Intent::ChooseBoardSize(BoardSize::Four))
        .await;
    tokio::time::sleep(Duration::from_millis(3_500)).await;
    harness.send(Intent::NewGame).await;
    tokio::time::sleep(Duration::from_millis(10)).await;

    let events = harness.drain();
    assert!(!last_snapshot(&events).expect("snapshot").is_active());

    tokio::time::sleep(Duration::from_secs(20)).await;
    assert!(harness.drain().is_empty());
    harness.finish().await;
}
