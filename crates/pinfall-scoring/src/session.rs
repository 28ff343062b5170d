//! The session: the score history that outlives individual frames.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Counter for generating unique session IDs.
static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

/// A unique identifier for a scoring session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S-{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// ScoreLedger
// ---------------------------------------------------------------------------

/// Append-only history of completed frame scores plus the grand total.
///
/// Each entry is one frame's own pins, not a running sum. The total grows
/// on every throw, so mid-frame it is ahead of the sum of the entries by
/// the current frame's provisional score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLedger {
    frames: Vec<u8>,
    total: u32,
}

impl ScoreLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed frame scores, oldest first.
    pub fn frames(&self) -> &[u8] {
        &self.frames
    }

    /// Sum of every throw recorded in the session.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Number of completed frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub(crate) fn add_pins(&mut self, pins: u8) {
        self.total += u32::from(pins);
    }

    pub(crate) fn push_frame(&mut self, score: u8) {
        self.frames.push(score);
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// One bowler's session on the lane.
///
/// Created with [`Session::new`]; never cleared by a frame transition.
/// Starting over means replacing the whole session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    ledger: ScoreLedger,
}

impl Session {
    /// Starts a new session with a fresh ID and an empty ledger.
    pub fn new() -> Self {
        let id = SessionId(NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed));
        Self {
            id,
            ledger: ScoreLedger::new(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    pub(crate) fn ledger_mut(&mut self) -> &mut ScoreLedger {
        &mut self.ledger
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_ids_are_unique() {
        let a = Session::new();
        let b = Session::new();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_session_id_display_and_json() {
        assert_eq!(SessionId(4).to_string(), "S-4");
        assert_eq!(serde_json::to_string(&SessionId(4)).unwrap(), "4");
    }

    #[test]
    fn test_ledger_total_tracks_every_throw() {
        let mut ledger = ScoreLedger::new();
        ledger.add_pins(4);
        assert_eq!(ledger.total(), 4);
        assert!(ledger.is_empty());

        ledger.add_pins(5);
        ledger.push_frame(9);
        assert_eq!(ledger.total(), 9);
        assert_eq!(ledger.frames(), &[9]);
        assert_eq!(ledger.len(), 1);
    }
}
