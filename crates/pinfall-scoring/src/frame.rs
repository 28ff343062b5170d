//! Frame state and per-throw outcomes.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ThrowOrdinal
// ---------------------------------------------------------------------------

/// Which throw of the frame is next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThrowOrdinal {
    #[default]
    First,
    Second,
}

impl ThrowOrdinal {
    /// `1` or `2`, as shown on the scoreboard.
    pub fn as_number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
        }
    }
}

impl fmt::Display for ThrowOrdinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_number())
    }
}

// ---------------------------------------------------------------------------
// ThrowOutcome
// ---------------------------------------------------------------------------

/// What a recorded throw amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThrowOutcome {
    /// All ten pins on the first throw. The frame is over.
    Strike,
    /// First throw left pins standing. Carries the pins knocked down.
    Partial(u8),
    /// Second throw cleared the rack.
    Spare,
    /// Second throw left pins standing. Carries the frame's total.
    Open(u8),
}

impl ThrowOutcome {
    /// Returns `true` if this throw ended the frame.
    pub fn completes_frame(&self) -> bool {
        !matches!(self, Self::Partial(_))
    }

    /// Result text for the scoreboard.
    pub fn message(&self) -> String {
        match self {
            Self::Strike => "STRIKE!".to_string(),
            Self::Spare => "SPARE!".to_string(),
            Self::Partial(pins) => format!("{pins} pins"),
            Self::Open(total) => format!("Total: {total} pins"),
        }
    }
}

// ---------------------------------------------------------------------------
// Frame
// ---------------------------------------------------------------------------

/// The frame currently being bowled.
///
/// A frame completes the instant its first throw is a strike or its second
/// throw is recorded. `score` is provisional until then.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub(crate) index: u32,
    pub(crate) ordinal: ThrowOrdinal,
    pub(crate) first: Option<u8>,
    pub(crate) second: Option<u8>,
    pub(crate) score: u8,
    pub(crate) complete: bool,
}

impl Frame {
    pub(crate) fn new(index: u32) -> Self {
        Self {
            index,
            ordinal: ThrowOrdinal::First,
            first: None,
            second: None,
            score: 0,
            complete: false,
        }
    }

    /// 1-based frame number.
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn ordinal(&self) -> ThrowOrdinal {
        self.ordinal
    }

    pub fn first_throw(&self) -> Option<u8> {
        self.first
    }

    pub fn second_throw(&self) -> Option<u8> {
        self.second
    }

    /// Pins scored in this frame so far.
    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }
}
