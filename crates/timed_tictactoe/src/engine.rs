//! Game engine: the single source of truth for a timed tic-tac-toe session.
//!
//! The engine is synchronous and owns no clock. A driver calls
//! [`GameEngine::tick_timer`] once per elapsed second and forwards
//! presentation intents through [`GameEngine::apply`]. Every accepted
//! mutation bumps the turn epoch, which a driver uses to key its clock.

use super::invariants::assert_invariants;
use super::rules::{WinningLine, check_winner, is_full, winning_line};
use super::{
    Board, BoardSize, Intent, Player, RoundOutcome, Score, SessionSnapshot, TurnTimer,
};
use tracing::{debug, info, instrument};

/// Reason a move was ignored.
///
/// Ignored moves have no side effect. The reason exists for callers and
/// logs; it is never shown to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejected {
    /// No board size has been chosen.
    #[display("No active session")]
    NoSession,

    /// The round already has a winner or ended in a draw.
    #[display("Round is already over")]
    RoundOver,

    /// The index is not on the board.
    #[display("Cell {} is off the board", _0)]
    OutOfBounds(usize),

    /// The cell already carries a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),
}

impl std::error::Error for MoveRejected {}

/// What a single timer tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No session or the round is over; nothing counted.
    Idle,
    /// The countdown moved; seconds remaining.
    Counting(u8),
    /// The countdown expired and this player lost the turn.
    Forfeited(Player),
}

/// Game engine for one session of rounds.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Option<Board>,
    current_player: Player,
    outcome: RoundOutcome,
    score: Score,
    timer: TurnTimer,
    turn_epoch: u64,
}

impl GameEngine {
    /// Creates an engine with no active session.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: None,
            current_player: Player::X,
            outcome: RoundOutcome::InProgress,
            score: Score::new(),
            timer: TurnTimer::new(),
            turn_epoch: 0,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Operations
    // ─────────────────────────────────────────────────────────────

    /// Starts a session on an empty board of the given size.
    ///
    /// Scores are zeroed and X moves first.
    #[instrument(skip(self), fields(epoch = self.turn_epoch))]
    pub fn start_session(&mut self, size: BoardSize) {
        info!(%size, "Starting session");
        self.board = Some(Board::new(size));
        self.score.reset();
        self.begin_round();
    }

    /// Places the current player's mark at `index`.
    ///
    /// Returns the outcome after the move. On rejection nothing changes.
    ///
    /// # Errors
    ///
    /// Returns the [`MoveRejected`] reason when there is no session, the
    /// round is over, the index is off the board, or the cell is taken.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play_move(&mut self, index: usize) -> Result<RoundOutcome, MoveRejected> {
        let board = self.board.as_mut().ok_or(MoveRejected::NoSession)?;

        if self.outcome.is_finished() {
            return Err(MoveRejected::RoundOver);
        }
        if index >= board.cells().len() {
            return Err(MoveRejected::OutOfBounds(index));
        }

        let player = self.current_player;
        if !board.place(index, player) {
            return Err(MoveRejected::CellOccupied(index));
        }

        if winning_line(board, player).is_some() {
            self.outcome = RoundOutcome::Win(player);
            self.score.record_win(player);
            info!(%player, "Round won");
        } else if is_full(board) {
            self.outcome = RoundOutcome::Draw;
            info!("Round drawn");
        } else {
            self.current_player = player.opponent();
        }

        self.timer.reset();
        self.turn_epoch += 1;
        debug!(index, outcome = ?self.outcome, epoch = self.turn_epoch, "Move applied");
        assert_invariants(self);

        Ok(self.outcome)
    }

    /// Counts down one second of the current turn.
    ///
    /// When the countdown reaches zero the turn passes to the opponent
    /// without a mark being placed, and the timer refills.
    #[instrument(skip(self), fields(remaining = self.timer.remaining()))]
    pub fn tick_timer(&mut self) -> TickOutcome {
        if !self.is_clock_running() {
            return TickOutcome::Idle;
        }

        if !self.timer.tick() {
            return TickOutcome::Counting(self.timer.remaining());
        }

        let forfeited = self.current_player;
        self.current_player = forfeited.opponent();
        self.timer.reset();
        self.turn_epoch += 1;
        info!(player = %forfeited, epoch = self.turn_epoch, "Turn forfeited on timeout");
        assert_invariants(self);

        TickOutcome::Forfeited(forfeited)
    }

    /// Clears the board for a new round, keeping the score.
    #[instrument(skip(self))]
    pub fn reset_round(&mut self) {
        let Some(board) = self.board.as_mut() else {
            debug!("Reset ignored without a session");
            return;
        };
        *board = Board::new(board.size());
        self.begin_round();
    }

    /// Starts the next round. Same as [`GameEngine::reset_round`].
    #[instrument(skip(self))]
    pub fn next_round(&mut self) {
        self.reset_round();
    }

    /// Ends the session: no board, scores zeroed.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        info!("Ending session");
        self.board = None;
        self.score.reset();
        self.begin_round();
    }

    /// Dispatches a presentation intent and returns the resulting snapshot.
    ///
    /// A board size is only honored while no session is active.
    #[instrument(skip(self))]
    pub fn apply(&mut self, intent: Intent) -> SessionSnapshot {
        match intent {
            Intent::ChooseBoardSize(size) => {
                if self.is_active() {
                    debug!(%size, "Board size ignored during an active session");
                } else {
                    self.start_session(size);
                }
            }
            Intent::ClickCell(index) => {
                if let Err(reason) = self.play_move(index) {
                    debug!(index, %reason, "Move ignored");
                }
            }
            Intent::ResetRound => self.reset_round(),
            Intent::NextRound => self.next_round(),
            Intent::NewGame => self.new_game(),
        }
        self.snapshot()
    }

    /// Returns an immutable view of the session for rendering.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::from(self)
    }

    fn begin_round(&mut self) {
        self.current_player = Player::X;
        self.outcome = RoundOutcome::InProgress;
        self.timer.reset();
        self.turn_epoch += 1;
        debug!(epoch = self.turn_epoch, "Round started");
        assert_invariants(self);
    }

    // ─────────────────────────────────────────────────────────────
    //  Accessors
    // ─────────────────────────────────────────────────────────────

    /// Board size of the active session.
    pub fn size(&self) -> Option<BoardSize> {
        self.board.as_ref().map(Board::size)
    }

    /// The board, if a session is active.
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Returns true while a session is active.
    pub fn is_active(&self) -> bool {
        self.board.is_some()
    }

    /// Player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Outcome of the current round.
    pub fn outcome(&self) -> RoundOutcome {
        self.outcome
    }

    /// Result message derived from the outcome.
    pub fn message(&self) -> String {
        self.outcome.message()
    }

    /// Running score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Seconds left in the current turn.
    pub fn seconds_remaining(&self) -> u8 {
        self.timer.remaining()
    }

    /// Counter bumped by every mutation that refills the timer.
    pub fn turn_epoch(&self) -> u64 {
        self.turn_epoch
    }

    /// Returns true while the countdown should be running.
    pub fn is_clock_running(&self) -> bool {
        self.is_active() && !self.outcome.is_finished()
    }

    /// Epoch a driver's clock should be keyed on, or `None` when no clock
    /// should run.
    pub fn clock_epoch(&self) -> Option<u64> {
        self.is_clock_running().then_some(self.turn_epoch)
    }

    /// Line that won the round, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        let board = self.board.as_ref()?;
        let winner = self.outcome.winner()?;
        winning_line(board, winner)
    }

    /// Player holding a complete line on the board, regardless of outcome.
    pub(crate) fn line_holder(&self) -> Option<Player> {
        self.board.as_ref().and_then(check_winner)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
