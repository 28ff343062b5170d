//! The turn state machine's states.

use serde::{Deserialize, Serialize};

/// Where the lane is in the current throw.
///
/// ```text
/// WaitingForInput → BallRolling → BallStopped → Scoring → WaitingForInput
///                                                   └──→ Resetting → WaitingForInput
/// ```
///
/// - **WaitingForInput**: The only state that accepts a launch. Initial state.
/// - **BallRolling**: Ball launched, waiting for it to stop.
/// - **BallStopped**: Ball at rest, waiting for the pins to settle.
/// - **Scoring**: Throw recorded, showing the result before moving on.
/// - **Resetting**: Frame over, rack being reset for the next frame.
///
/// There is no terminal state; the lane loops until it is shut down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TurnState {
    #[default]
    WaitingForInput,
    BallRolling,
    BallStopped,
    Scoring,
    Resetting,
}

impl TurnState {
    /// Returns `true` if a launch request is accepted in this state.
    pub fn accepts_input(&self) -> bool {
        matches!(self, Self::WaitingForInput)
    }

    /// Returns `true` while a throw or frame reset is in progress.
    pub fn is_busy(&self) -> bool {
        !self.accepts_input()
    }
}

impl std::fmt::Display for TurnState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WaitingForInput => write!(f, "WaitingForInput"),
            Self::BallRolling => write!(f, "BallRolling"),
            Self::BallStopped => write!(f, "BallStopped"),
            Self::Scoring => write!(f, "Scoring"),
            Self::Resetting => write!(f, "Resetting"),
        }
    }
}
