//! Settlement timing configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Timing for the pin settlement wait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettleConfig {
    /// Unconditional pause after the ball stops, before the first poll.
    pub initial_delay: Duration,
    /// Time between "are all pins stationary?" probes.
    pub poll_interval: Duration,
    /// Upper bound on the whole wait, measured from its start.
    /// `None` polls forever.
    pub timeout: Option<Duration>,
}

impl Default for SettleConfig {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_secs(1),
            poll_interval: Duration::from_millis(100),
            timeout: Some(Duration::from_secs(10)),
        }
    }
}

impl SettleConfig {
    /// Shortest accepted poll interval.
    pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

    /// Longest accepted delay, interval or timeout.
    ///
    /// Deadlines are `now + duration`; anything near `Duration::MAX` would
    /// overflow the clock.
    pub const MAX_DELAY: Duration = Duration::from_secs(24 * 60 * 60);

    /// Clamp out-of-range values so the config is safe to use.
    ///
    /// A zero poll interval would spin the lane task; it is raised to
    /// [`Self::MIN_POLL_INTERVAL`]. Durations above [`Self::MAX_DELAY`] are
    /// lowered to it. The initial delay is never cut short, so a timeout
    /// shorter than it is raised to match.
    pub fn validated(mut self) -> Self {
        if self.poll_interval < Self::MIN_POLL_INTERVAL {
            warn!(
                poll_interval_ms = self.poll_interval.as_secs_f64() * 1000.0,
                "settle poll_interval below minimum, clamping"
            );
            self.poll_interval = Self::MIN_POLL_INTERVAL;
        }
        self.poll_interval = cap_delay("settle.poll_interval", self.poll_interval);
        self.initial_delay = cap_delay("settle.initial_delay", self.initial_delay);
        self.timeout = self.timeout.map(|t| cap_delay("settle.timeout", t));

        if let Some(timeout) = self.timeout {
            if timeout < self.initial_delay {
                warn!(
                    timeout_ms = timeout.as_millis() as u64,
                    initial_delay_ms = self.initial_delay.as_millis() as u64,
                    "settle timeout shorter than initial delay, raising"
                );
                self.timeout = Some(self.initial_delay);
            }
        }
        self
    }
}

/// Lowers `value` to [`SettleConfig::MAX_DELAY`], logging when it does.
pub fn cap_delay(field: &'static str, value: Duration) -> Duration {
    if value > SettleConfig::MAX_DELAY {
        warn!(field, value = ?value, "duration above maximum, clamping");
        SettleConfig::MAX_DELAY
    } else {
        value
    }
}
