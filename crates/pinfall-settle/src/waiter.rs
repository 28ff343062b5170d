//! The two-phase pin settlement wait.

use std::time::Duration;

use pinfall_lane::PinGroup;
use tokio::time::{self, Instant};
use tracing::{debug, warn};

use crate::{PollOutcome, Poller, SettleConfig};

/// How a settlement wait ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleOutcome {
    /// Every pin reported stationary.
    Settled { polls: u32, waited: Duration },
    /// The configured timeout passed with pins still moving.
    TimedOut { polls: u32, waited: Duration },
}

impl SettleOutcome {
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Settled { .. })
    }

    /// Time from [`SettlementWaiter::begin`] to the end of the wait.
    pub fn waited(&self) -> Duration {
        match self {
            Self::Settled { waited, .. } | Self::TimedOut { waited, .. } => *waited,
        }
    }
}

/// Waits for knocked pins to come to rest after the ball stops.
///
/// Phase one sleeps for `initial_delay` no matter what. Phase two probes
/// [`PinGroup::all_pins_stationary`] every `poll_interval` until it answers
/// `true`, or until `timeout` (counted from [`begin`](Self::begin)) runs out.
#[derive(Debug)]
pub struct SettlementWaiter {
    config: SettleConfig,
    started: Option<Instant>,
    delay_until: Option<Instant>,
    deadline: Option<Instant>,
    poller: Poller,
}

impl SettlementWaiter {
    pub fn new(config: SettleConfig) -> Self {
        let config = config.validated();
        let poller = Poller::new(config.poll_interval);
        Self {
            config,
            started: None,
            delay_until: None,
            deadline: None,
            poller,
        }
    }

    /// Starts a new wait from now, discarding any wait in progress.
    pub fn begin(&mut self) {
        let now = Instant::now();
        self.started = Some(now);
        self.delay_until = Some(now + self.config.initial_delay);
        self.deadline = self.config.timeout.map(|t| now + t);
        self.poller.disarm();
        debug!(
            initial_delay_ms = self.config.initial_delay.as_secs_f64() * 1000.0,
            timeout = ?self.config.timeout,
            "settlement wait started"
        );
    }

    /// Abandons the wait in progress.
    pub fn cancel(&mut self) {
        self.started = None;
        self.delay_until = None;
        self.deadline = None;
        self.poller.disarm();
    }

    /// Whether a wait has begun and not yet finished.
    pub fn is_active(&self) -> bool {
        self.started.is_some()
    }

    pub fn config(&self) -> &SettleConfig {
        &self.config
    }

    /// Runs the wait to completion. Begins one first if none is active.
    ///
    /// Cancel-safe: dropping the future keeps the schedule, the next call
    /// picks up where this one stopped.
    pub async fn wait<P: PinGroup + ?Sized>(&mut self, pins: &P) -> SettleOutcome {
        if !self.is_active() {
            self.begin();
        }

        if let Some(until) = self.delay_until {
            time::sleep_until(until).await;
            self.delay_until = None;
            self.poller.arm(until, self.deadline);
        }

        let outcome = self
            .poller
            .until("all_pins_stationary", || pins.all_pins_stationary())
            .await;

        let waited = self
            .started
            .map(|s| s.elapsed())
            .unwrap_or_default();
        self.cancel();

        match outcome {
            PollOutcome::Satisfied { polls } => {
                debug!(polls, waited_ms = waited.as_millis() as u64, "pins settled");
                SettleOutcome::Settled { polls, waited }
            }
            PollOutcome::TimedOut { polls } => {
                warn!(
                    polls,
                    waited_ms = waited.as_millis() as u64,
                    "pins still moving at settle timeout, scoring anyway"
                );
                SettleOutcome::TimedOut { polls, waited }
            }
        }
    }
}
