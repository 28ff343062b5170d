//! Fixed-interval polling of a physics probe.

use std::time::Duration;

use pinfall_lane::LaneError;
use tokio::time::{self, Instant};
use tracing::{trace, warn};

use crate::cap_delay;

/// How a poll ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// The probe reported the condition (or failed, see [`Poller::until`]).
    Satisfied { polls: u32 },
    /// The deadline passed with the condition still false.
    TimedOut { polls: u32 },
}

impl PollOutcome {
    /// Number of probes made.
    pub fn polls(&self) -> u32 {
        match self {
            Self::Satisfied { polls } | Self::TimedOut { polls } => *polls,
        }
    }
}

/// Repeatedly asks a probe a yes/no question at a fixed interval.
///
/// The schedule lives on the poller, so [`until`](Self::until) can be
/// dropped mid-wait and resumed.
#[derive(Debug)]
pub struct Poller {
    interval: Duration,
    next_check: Option<Instant>,
    deadline: Option<Instant>,
    polls: u32,
}

impl Poller {
    /// Intervals above [`SettleConfig::MAX_DELAY`](crate::SettleConfig::MAX_DELAY)
    /// are lowered to it.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: cap_delay("poll interval", interval),
            next_check: None,
            deadline: None,
            polls: 0,
        }
    }

    /// Schedules the first probe at `first_check`, with an optional
    /// deadline after which the poll gives up.
    pub fn arm(&mut self, first_check: Instant, deadline: Option<Instant>) {
        self.next_check = Some(first_check);
        self.deadline = deadline;
        self.polls = 0;
    }

    /// Abandons the current poll.
    pub fn disarm(&mut self) {
        self.next_check = None;
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_check.is_some()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Polls `probe` until it answers `true` or the deadline passes.
    ///
    /// An unarmed poller probes immediately with no deadline. A probe
    /// returning `Err` means the collaborator is missing; that is logged
    /// and counted as satisfied so the lane never waits on nothing.
    pub async fn until<F>(&mut self, probe_name: &'static str, mut probe: F) -> PollOutcome
    where
        F: FnMut() -> Result<bool, LaneError>,
    {
        if !self.is_armed() {
            self.arm(Instant::now(), None);
        }

        loop {
            let next = self.next_check.unwrap_or_else(Instant::now);
            time::sleep_until(next).await;

            self.polls += 1;
            let polls = self.polls;
            match probe() {
                Ok(true) => {
                    trace!(probe = probe_name, polls, "poll satisfied");
                    self.disarm();
                    return PollOutcome::Satisfied { polls };
                }
                Ok(false) => trace!(probe = probe_name, polls, "poll not yet satisfied"),
                Err(err) => {
                    warn!(probe = probe_name, %err, "probe failed, treating as satisfied");
                    self.disarm();
                    return PollOutcome::Satisfied { polls };
                }
            }

            let now = Instant::now();
            let mut next = now + self.interval;
            if let Some(deadline) = self.deadline {
                if now >= deadline {
                    self.disarm();
                    return PollOutcome::TimedOut { polls };
                }
                next = next.min(deadline);
            }
            self.next_check = Some(next);
        }
    }
}
