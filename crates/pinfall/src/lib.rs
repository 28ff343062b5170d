//! # Pinfall
//!
//! Single-lane bowling turn orchestration and scoring.
//!
//! Pinfall decides when a throw may happen, waits for the ball and pins to
//! come to rest, scores the throw, and moves the lane on to the second
//! throw or the next frame. Physics, input and display plug in through the
//! traits in [`pinfall_lane`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pinfall::prelude::*;
//!
//! let (notifier, mut events) = Notifier::channel();
//! let lane = spawn_lane(TurnConfig::default(), ball, pins, input, notifier);
//! lane.launch(Force::new(0.0, 0.0, 1.0)).await?;
//! ```

mod error;
pub mod telemetry;

pub use error::PinfallError;

pub use pinfall_lane as lane;
pub use pinfall_scoring as scoring;
pub use pinfall_settle as settle;
pub use pinfall_turn as turn;

pub mod prelude {
    pub use crate::PinfallError;
    pub use crate::telemetry::init_tracing;
    pub use pinfall_lane::{
        Ball, EventReceiver, EventSender, Force, InputGate, LaneError, LaneEvent, Notifier,
        PinGroup,
    };
    pub use pinfall_scoring::{
        ScoreLedger, ScoringError, Session, SessionId, ThrowOrdinal, ThrowOutcome, ThrowScorer,
    };
    pub use pinfall_settle::{SettleConfig, SettleOutcome, SettlementWaiter};
    pub use pinfall_turn::{
        LaneHandle, LaneInfo, TurnConfig, TurnError, TurnOrchestrator, TurnState, spawn_lane,
    };
}
