//! Turn orchestration for a Pinfall lane.
//!
//! The lane runs one throw at a time through a fixed cycle:
//!
//! ```text
//! WaitingForInput → BallRolling → BallStopped → Scoring ─┬→ WaitingForInput
//!        ↑                                               └→ Resetting ─┐
//!        └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key types
//!
//! - [`TurnOrchestrator`]: the state machine over the lane's collaborators
//! - [`TurnState`]: the five states above
//! - [`TurnConfig`]: poll intervals and scripted delays
//! - [`spawn_lane`] / [`LaneHandle`]: run a lane as a Tokio actor

mod config;
mod error;
mod lane;
mod orchestrator;
mod state;

pub use config::TurnConfig;
pub use error::TurnError;
pub use lane::{LaneHandle, LaneInfo, spawn_lane};
pub use orchestrator::TurnOrchestrator;
pub use state::TurnState;
