//! Mock lane collaborators shared by the turn integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use pinfall_lane::{Ball, Force, InputGate, LaneError, PinGroup};
use pinfall_settle::SettleConfig;
use pinfall_turn::TurnConfig;

/// A collaborator call, in the order the orchestrator made it.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Launch(Force),
    ResetBall,
    ResetAllPins,
    ResetStandingPins,
    Input(bool),
}

#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    pub fn push(&self, call: Call) {
        self.0.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }

    pub fn count(&self, call: &Call) -> usize {
        self.0.lock().unwrap().iter().filter(|c| *c == call).count()
    }

    pub fn launches(&self) -> usize {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|c| matches!(c, Call::Launch(_)))
            .count()
    }
}

// =========================================================================
// Ball
// =========================================================================

/// A ball that reports moving for `moving_polls` probes after each launch.
pub struct MockBall {
    log: CallLog,
    moving_polls: u32,
    remaining: AtomicU32,
}

impl MockBall {
    pub fn new(log: CallLog, moving_polls: u32) -> Self {
        Self {
            log,
            moving_polls,
            remaining: AtomicU32::new(0),
        }
    }
}

impl Ball for MockBall {
    fn launch(&mut self, force: Force) -> Result<(), LaneError> {
        self.log.push(Call::Launch(force));
        self.remaining.store(self.moving_polls, Ordering::SeqCst);
        Ok(())
    }

    fn is_moving(&self) -> Result<bool, LaneError> {
        let left = self.remaining.load(Ordering::SeqCst);
        if left == 0 {
            return Ok(false);
        }
        self.remaining.store(left - 1, Ordering::SeqCst);
        Ok(true)
    }

    fn reset_to_start(&mut self) -> Result<(), LaneError> {
        self.log.push(Call::ResetBall);
        Ok(())
    }
}

// =========================================================================
// Pins
// =========================================================================

/// A rack that reports a scripted pin count per throw.
pub struct MockPins {
    log: CallLog,
    knocked: Mutex<VecDeque<u8>>,
    missing: bool,
}

impl MockPins {
    pub fn scripted(log: CallLog, throws: &[u8]) -> Self {
        Self {
            log,
            knocked: Mutex::new(throws.iter().copied().collect()),
            missing: false,
        }
    }

    /// A pin group that is not attached: every query fails.
    pub fn missing(log: CallLog) -> Self {
        Self {
            missing: true,
            ..Self::scripted(log, &[])
        }
    }
}

impl PinGroup for MockPins {
    fn pins_knocked_down(&self) -> Result<u8, LaneError> {
        if self.missing {
            return Err(LaneError::Unavailable("pins"));
        }
        Ok(self.knocked.lock().unwrap().pop_front().unwrap_or(0))
    }

    fn all_pins_stationary(&self) -> Result<bool, LaneError> {
        if self.missing {
            return Err(LaneError::Unavailable("pins"));
        }
        Ok(true)
    }

    fn reset_all_pins(&mut self) -> Result<(), LaneError> {
        self.log.push(Call::ResetAllPins);
        Ok(())
    }

    fn reset_only_standing_pins(&mut self) -> Result<(), LaneError> {
        self.log.push(Call::ResetStandingPins);
        Ok(())
    }
}

// =========================================================================
// Input
// =========================================================================

pub struct MockInput {
    log: CallLog,
}

impl MockInput {
    pub fn new(log: CallLog) -> Self {
        Self { log }
    }
}

impl InputGate for MockInput {
    fn set_input_enabled(&mut self, enabled: bool) {
        self.log.push(Call::Input(enabled));
    }
}

// =========================================================================
// Config and forces
// =========================================================================

/// Short, round timings so elapsed-time assertions stay readable.
///
/// roll poll 50 ms, settle 1 s then 100 ms polls, next throw 2 s,
/// frame end 3 s, reset 1 s.
pub fn test_config() -> TurnConfig {
    TurnConfig {
        roll_poll_interval: Duration::from_millis(50),
        roll_timeout: None,
        next_throw_delay: Duration::from_secs(2),
        frame_end_delay: Duration::from_secs(3),
        reset_delay: Duration::from_secs(1),
        settle: SettleConfig {
            initial_delay: Duration::from_secs(1),
            poll_interval: Duration::from_millis(100),
            timeout: None,
        },
        channel_size: 8,
    }
}

pub fn straight() -> Force {
    Force::new(0.0, 0.0, 1.0)
}
