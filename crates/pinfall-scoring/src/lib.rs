//! Throw scoring for Pinfall.
//!
//! Pure bookkeeping: given the pin count of each throw, [`ThrowScorer`]
//! tracks the current frame, the session's grand total, and the ledger of
//! completed frame scores. No I/O, no timing.
//!
//! The rule set is deliberately simplified: every frame scores only its own
//! pins. Strikes and spares end the frame but carry no bonus into later
//! throws.
//!
//! # Key types
//!
//! - [`ThrowScorer`]: records throws and advances frames
//! - [`ThrowOutcome`]: what a single throw amounted to
//! - [`Frame`]: the frame currently being bowled
//! - [`Session`] / [`ScoreLedger`]: the session-long score history

mod error;
mod frame;
mod scorer;
mod session;

pub use error::ScoringError;
pub use frame::{Frame, ThrowOrdinal, ThrowOutcome};
pub use scorer::ThrowScorer;
pub use session::{ScoreLedger, Session, SessionId};
