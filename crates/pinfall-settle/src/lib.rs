//! Cooperative waits for physical motion to end.
//!
//! Two waits sit between a launch and a score: the ball has to stop, and
//! then the pins have to stop wobbling. Both are fixed-interval polls of a
//! physics collaborator, driven by `tokio::time` so they suspend the lane
//! task instead of blocking a thread.
//!
//! # Cancel safety
//!
//! [`Poller::until`] and [`SettlementWaiter::wait`] keep their deadlines on
//! `self`. Dropping the future (a losing `tokio::select!` branch) and
//! calling again later resumes the same wait rather than restarting it:
//!
//! ```ignore
//! loop {
//!     tokio::select! {
//!         Some(cmd) = cmd_rx.recv() => { /* handle commands */ }
//!         outcome = waiter.wait(&pins) => { /* score the throw */ }
//!     }
//! }
//! ```

mod config;
mod poller;
mod waiter;

pub use config::{SettleConfig, cap_delay};
pub use poller::{PollOutcome, Poller};
pub use waiter::{SettleOutcome, SettlementWaiter};
