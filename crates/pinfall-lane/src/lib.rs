//! Collaborator contracts for a Pinfall lane.
//!
//! This crate defines everything the turn core talks to but does not own:
//!
//! - **Physics** ([`Ball`], [`PinGroup`]): the rigid-body simulation that
//!   rolls the ball and knocks pins over.
//! - **Input** ([`InputGate`], [`Force`]): the gesture source that produces
//!   one launch force per accepted gesture.
//! - **Presentation** ([`LaneEvent`], [`Notifier`]): typed notifications
//!   consumed by whatever draws the scoreboard.
//! - **Errors** ([`LaneError`]): what a collaborator reports when it is
//!   missing or refuses an operation.
//!
//! # Architecture
//!
//! ```text
//! Input (Force) → Turn core → Physics (Ball, PinGroup)
//!                     ↓
//!              Presentation (LaneEvent)
//! ```

mod collaborator;
mod error;
mod notify;
mod types;

pub use collaborator::{Ball, InputGate, PinGroup};
pub use error::LaneError;
pub use notify::{EventReceiver, EventSender, Notifier};
pub use types::{Force, LaneEvent, PINS_PER_RACK};
