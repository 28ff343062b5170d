//! Traits implemented by the physics and input layers.
//!
//! The turn core never simulates anything itself. It drives these traits
//! and reads back what they report. Every call may fail with
//! [`LaneError`]; callers treat a failure as "nothing happened".

use crate::{Force, LaneError};

/// The bowling ball's physics body.
///
/// # Trait bounds
///
/// `Send + Sync + 'static` lets the lane actor own the ball inside its Tokio
/// task and hold `&self` across the await points of a motion poll.
pub trait Ball: Send + Sync + 'static {
    /// Applies the launch force to the ball.
    fn launch(&mut self, force: Force) -> Result<(), LaneError>;

    /// Returns `true` while the ball still has nonzero velocity.
    fn is_moving(&self) -> Result<bool, LaneError>;

    /// Moves the ball back to the foul line, at rest.
    fn reset_to_start(&mut self) -> Result<(), LaneError>;
}

/// The rack of ten pins.
pub trait PinGroup: Send + Sync + 'static {
    /// Number of pins knocked down since the last reset, in `0..=10`.
    fn pins_knocked_down(&self) -> Result<u8, LaneError>;

    /// Returns `true` once no pin is moving.
    fn all_pins_stationary(&self) -> Result<bool, LaneError>;

    /// Stands all ten pins back up (new frame).
    fn reset_all_pins(&mut self) -> Result<(), LaneError>;

    /// Sweeps fallen pins and leaves the standing ones (second throw).
    fn reset_only_standing_pins(&mut self) -> Result<(), LaneError>;
}

/// The gesture source's on/off switch.
///
/// The turn core enables input when it enters `WaitingForInput` and
/// disables it on every other state entry that takes input away.
pub trait InputGate: Send + Sync + 'static {
    fn set_input_enabled(&mut self, enabled: bool);
}
