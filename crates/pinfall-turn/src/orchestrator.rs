//! The turn state machine.

use pinfall_lane::{Ball, Force, InputGate, Notifier, PINS_PER_RACK, PinGroup};
use pinfall_scoring::{SessionId, ThrowOrdinal, ThrowOutcome, ThrowScorer};
use pinfall_settle::{PollOutcome, Poller, SettleOutcome, SettlementWaiter};
use tokio::time::{self, Instant};
use tracing::{debug, error, info, warn};

use crate::{LaneInfo, TurnConfig, TurnState};

/// Drives one lane through launch, roll, settle, score and reset.
///
/// The orchestrator owns its collaborators and the scorer outright; there
/// is a single control flow and no locking. Launches come in through
/// [`request_launch`](Self::request_launch), everything after that happens
/// inside [`step`](Self::step).
pub struct TurnOrchestrator<B, P, I> {
    config: TurnConfig,
    state: TurnState,
    scorer: ThrowScorer,
    ball: B,
    pins: P,
    input: I,
    input_enabled: bool,
    roll_watch: Poller,
    settler: SettlementWaiter,
    /// End of the scripted pause in `Scoring` or `Resetting`.
    delay_until: Option<Instant>,
    last_outcome: Option<ThrowOutcome>,
}

impl<B: Ball, P: PinGroup, I: InputGate> TurnOrchestrator<B, P, I> {
    /// Creates an orchestrator in `WaitingForInput` on a fresh session.
    ///
    /// Input is enabled immediately, as on every entry into
    /// `WaitingForInput`.
    pub fn new(config: TurnConfig, ball: B, pins: P, input: I, notifier: Notifier) -> Self {
        let config = config.validated();
        let mut orchestrator = Self {
            roll_watch: Poller::new(config.roll_poll_interval),
            settler: SettlementWaiter::new(config.settle.clone()),
            config,
            state: TurnState::WaitingForInput,
            scorer: ThrowScorer::new(notifier),
            ball,
            pins,
            input,
            input_enabled: false,
            delay_until: None,
            last_outcome: None,
        };
        orchestrator.set_input(true);
        orchestrator
    }

    /// Launches the ball if the lane is waiting for input.
    ///
    /// Returns `false`, with no side effects at all, when a throw is
    /// already in progress or the force is unusable.
    pub fn request_launch(&mut self, force: Force) -> bool {
        if !self.state.accepts_input() {
            debug!(state = %self.state, "launch ignored, lane busy");
            return false;
        }
        if !force.is_valid() {
            debug!(?force, "launch ignored, invalid force");
            return false;
        }

        if let Err(err) = self.ball.launch(force) {
            warn!(%err, "ball launch failed");
        }
        self.set_input(false);

        let now = Instant::now();
        let deadline = self.config.roll_timeout.map(|t| now + t);
        self.roll_watch
            .arm(now + self.config.roll_poll_interval, deadline);
        self.transition(TurnState::BallRolling);
        true
    }

    /// Waits for whatever the current state is waiting on, then applies
    /// one transition and returns the new state.
    ///
    /// In `WaitingForInput` this future pends forever; only a launch moves
    /// the lane on. Cancel-safe: every pending deadline lives on `self`.
    pub async fn step(&mut self) -> TurnState {
        match self.state {
            TurnState::WaitingForInput => return std::future::pending().await,
            TurnState::BallRolling => {
                let ball = &self.ball;
                let outcome = self
                    .roll_watch
                    .until("ball_stopped", || ball.is_moving().map(|moving| !moving))
                    .await;
                if let PollOutcome::TimedOut { polls } = outcome {
                    warn!(polls, "ball still moving at roll timeout, settling anyway");
                }
                self.settler.begin();
                self.transition(TurnState::BallStopped);
            }
            TurnState::BallStopped => {
                let outcome = self.settler.wait(&self.pins).await;
                self.score_throw(outcome);
            }
            TurnState::Scoring => {
                self.finish_delay().await;
                if self.scorer.is_frame_complete() {
                    self.reset_rack();
                } else {
                    self.prepare_second_throw();
                }
            }
            TurnState::Resetting => {
                self.finish_delay().await;
                self.set_input(true);
                self.transition(TurnState::WaitingForInput);
            }
        }
        self.state
    }

    /// Abandons the current throw and starts a new scoring session.
    ///
    /// Works from any state: pending waits are dropped, the rack and ball
    /// are reset, and the lane returns to `WaitingForInput`.
    pub fn new_session(&mut self) -> SessionId {
        self.roll_watch.disarm();
        self.settler.cancel();
        self.delay_until = None;
        self.last_outcome = None;

        let id = self.scorer.new_session().id();
        if let Err(err) = self.pins.reset_all_pins() {
            warn!(%err, "pin reset failed");
        }
        if let Err(err) = self.ball.reset_to_start() {
            warn!(%err, "ball reset failed");
        }
        self.set_input(true);
        self.transition(TurnState::WaitingForInput);
        info!(session = %id, "lane session started");
        id
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn scorer(&self) -> &ThrowScorer {
        &self.scorer
    }

    pub fn config(&self) -> &TurnConfig {
        &self.config
    }

    pub fn ball(&self) -> &B {
        &self.ball
    }

    pub fn pins(&self) -> &P {
        &self.pins
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    /// Whether the input source is currently switched on.
    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// Outcome of the most recent throw in this session.
    pub fn last_outcome(&self) -> Option<ThrowOutcome> {
        self.last_outcome
    }

    /// Snapshot of the lane for status queries.
    pub fn info(&self) -> LaneInfo {
        LaneInfo {
            state: self.state,
            session_id: self.scorer.session().id(),
            frame: self.scorer.current_frame_index(),
            throw: self.scorer.current_throw_ordinal(),
            total: self.scorer.total(),
            frames: self.scorer.ledger().frames().to_vec(),
            scoreline: self.scorer.formatted_scoreline(),
            input_enabled: self.input_enabled,
            last_outcome: self.last_outcome,
        }
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    /// `BallStopped` → `Scoring`.
    fn score_throw(&mut self, settle: SettleOutcome) {
        let reported = match self.pins.pins_knocked_down() {
            Ok(pins) => pins,
            Err(err) => {
                warn!(%err, "pin count unavailable, scoring 0");
                0
            }
        };
        let pins = self.clamp_to_standing(reported);
        self.transition(TurnState::Scoring);

        let frame = self.scorer.current_frame_index();
        let delay = match self.scorer.record_throw(pins) {
            Ok(outcome) => {
                self.last_outcome = Some(outcome);
                info!(
                    frame,
                    pins,
                    ?outcome,
                    settled = settle.is_settled(),
                    total = self.scorer.total(),
                    "throw scored"
                );
                if outcome.completes_frame() {
                    self.config.frame_end_delay
                } else {
                    self.config.next_throw_delay
                }
            }
            Err(err) => {
                error!(frame, pins, %err, "scorer rejected throw");
                self.config.next_throw_delay
            }
        };
        self.delay_until = Some(Instant::now() + delay);
    }

    /// `Scoring` → `WaitingForInput`, frame still open.
    fn prepare_second_throw(&mut self) {
        if let Err(err) = self.pins.reset_only_standing_pins() {
            warn!(%err, "standing pin reset failed");
        }
        if let Err(err) = self.ball.reset_to_start() {
            warn!(%err, "ball reset failed");
        }
        self.set_input(true);
        self.transition(TurnState::WaitingForInput);
    }

    /// `Scoring` → `Resetting`, frame complete.
    fn reset_rack(&mut self) {
        if let Err(err) = self.pins.reset_all_pins() {
            warn!(%err, "pin reset failed");
        }
        if let Err(err) = self.ball.reset_to_start() {
            warn!(%err, "ball reset failed");
        }
        if let Err(err) = self.scorer.advance_frame() {
            error!(%err, "frame advance rejected");
        }
        self.set_input(false);
        self.delay_until = Some(Instant::now() + self.config.reset_delay);
        self.transition(TurnState::Resetting);
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    /// Caps a reported pin count at the pins that were standing.
    ///
    /// Ten on the first throw, `10 - first` on the second.
    fn clamp_to_standing(&self, reported: u8) -> u8 {
        let standing = match self.scorer.current_throw_ordinal() {
            ThrowOrdinal::First => PINS_PER_RACK,
            ThrowOrdinal::Second => {
                let first = self.scorer.frame().first_throw().unwrap_or(0);
                PINS_PER_RACK.saturating_sub(first)
            }
        };
        if reported > standing {
            warn!(reported, standing, "pin count exceeds standing pins, clamping");
            standing
        } else {
            reported
        }
    }

    async fn finish_delay(&mut self) {
        if let Some(until) = self.delay_until {
            time::sleep_until(until).await;
            self.delay_until = None;
        }
    }

    fn set_input(&mut self, enabled: bool) {
        self.input.set_input_enabled(enabled);
        self.input_enabled = enabled;
    }

    fn transition(&mut self, next: TurnState) {
        debug!(from = %self.state, to = %next, "turn state changed");
        self.state = next;
    }
}
