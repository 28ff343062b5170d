//! Lane timing configuration.

use std::time::Duration;

use pinfall_settle::{SettleConfig, cap_delay};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Timing and sizing for a lane.
///
/// Every scripted pause in the turn cycle is configurable. Missing fields
/// in a serialized config fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurnConfig {
    /// How often to ask the ball whether it is still moving.
    pub roll_poll_interval: Duration,

    /// Give up waiting for the ball after this long. `None` waits forever.
    pub roll_timeout: Option<Duration>,

    /// Pause after an open first throw before the second throw is allowed.
    pub next_throw_delay: Duration,

    /// Pause after a frame completes before the rack is reset.
    pub frame_end_delay: Duration,

    /// Pause after the rack reset before the next frame accepts input.
    pub reset_delay: Duration,

    /// Pin settlement timing.
    pub settle: SettleConfig,

    /// Command channel capacity for a spawned lane actor.
    pub channel_size: usize,
}

impl Default for TurnConfig {
    fn default() -> Self {
        Self {
            roll_poll_interval: Duration::from_millis(50),
            roll_timeout: Some(Duration::from_secs(30)),
            next_throw_delay: Duration::from_secs(2),
            frame_end_delay: Duration::from_secs(3),
            reset_delay: Duration::from_secs(1),
            settle: SettleConfig::default(),
            channel_size: 64,
        }
    }
}

impl TurnConfig {
    /// Shortest accepted ball poll interval.
    pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

    /// Longest accepted delay, interval or timeout.
    pub const MAX_DELAY: Duration = SettleConfig::MAX_DELAY;

    /// Clamp out-of-range values so the config is safe to use.
    ///
    /// Durations above [`Self::MAX_DELAY`] are lowered to it. Called by
    /// [`TurnOrchestrator::new`](crate::TurnOrchestrator::new).
    pub fn validated(mut self) -> Self {
        if self.roll_poll_interval < Self::MIN_POLL_INTERVAL {
            warn!(
                roll_poll_interval_ms = self.roll_poll_interval.as_secs_f64() * 1000.0,
                "roll_poll_interval below minimum, clamping"
            );
            self.roll_poll_interval = Self::MIN_POLL_INTERVAL;
        }
        self.roll_poll_interval = cap_delay("roll_poll_interval", self.roll_poll_interval);
        self.roll_timeout = self.roll_timeout.map(|t| cap_delay("roll_timeout", t));
        self.next_throw_delay = cap_delay("next_throw_delay", self.next_throw_delay);
        self.frame_end_delay = cap_delay("frame_end_delay", self.frame_end_delay);
        self.reset_delay = cap_delay("reset_delay", self.reset_delay);
        if self.channel_size == 0 {
            warn!("channel_size of 0 is invalid, using 1");
            self.channel_size = 1;
        }
        self.settle = self.settle.validated();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_config_default() {
        let config = TurnConfig::default();
        assert_eq!(config.roll_poll_interval, Duration::from_millis(50));
        assert_eq!(config.roll_timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.next_throw_delay, Duration::from_secs(2));
        assert_eq!(config.frame_end_delay, Duration::from_secs(3));
        assert_eq!(config.reset_delay, Duration::from_secs(1));
        assert_eq!(config.channel_size, 64);
    }

    #[test]
    fn test_validated_fixes_zero_values() {
        let config = TurnConfig {
            roll_poll_interval: Duration::ZERO,
            channel_size: 0,
            settle: SettleConfig {
                poll_interval: Duration::ZERO,
                ..SettleConfig::default()
            },
            ..TurnConfig::default()
        }
        .validated();
        assert_eq!(config.roll_poll_interval, TurnConfig::MIN_POLL_INTERVAL);
        assert_eq!(config.channel_size, 1);
        assert_eq!(config.settle.poll_interval, SettleConfig::MIN_POLL_INTERVAL);
    }

    #[test]
    fn test_validated_caps_huge_delays() {
        let config = TurnConfig {
            roll_poll_interval: Duration::MAX,
            roll_timeout: Some(Duration::MAX),
            next_throw_delay: Duration::MAX,
            frame_end_delay: Duration::MAX,
            reset_delay: Duration::MAX,
            settle: SettleConfig {
                initial_delay: Duration::MAX,
                ..SettleConfig::default()
            },
            ..TurnConfig::default()
        }
        .validated();
        assert_eq!(config.roll_poll_interval, TurnConfig::MAX_DELAY);
        assert_eq!(config.roll_timeout, Some(TurnConfig::MAX_DELAY));
        assert_eq!(config.next_throw_delay, TurnConfig::MAX_DELAY);
        assert_eq!(config.frame_end_delay, TurnConfig::MAX_DELAY);
        assert_eq!(config.reset_delay, TurnConfig::MAX_DELAY);
        assert_eq!(config.settle.initial_delay, SettleConfig::MAX_DELAY);
    }

    #[test]
    fn test_config_json_round_trip_keeps_defaults() {
        let config: TurnConfig =
            serde_json::from_str(r#"{"reset_delay":{"secs":5,"nanos":0}}"#).unwrap();
        assert_eq!(config.reset_delay, Duration::from_secs(5));
        assert_eq!(config.frame_end_delay, Duration::from_secs(3));
        assert_eq!(config.settle, SettleConfig::default());
    }
}
