//! Value types shared between the turn core and its collaborators.

use serde::{Deserialize, Serialize};

/// Number of pins in a full rack.
pub const PINS_PER_RACK: u8 = 10;

// ---------------------------------------------------------------------------
// Force
// ---------------------------------------------------------------------------

/// A 3D launch force produced by the input source, one per gesture.
///
/// The input layer is expected to hand over a normalized vector scaled by
/// throw strength; the turn core only checks that it is usable.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Force {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Force {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean length of the vector.
    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// `true` if every component is finite and the vector is not zero.
    ///
    /// A launch with an invalid force is ignored by the turn core.
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.z.is_finite()
            && self.magnitude() > f32::EPSILON
    }

    /// Unit vector in the same direction, or `None` for an invalid force.
    pub fn normalized(&self) -> Option<Self> {
        if !self.is_valid() {
            return None;
        }
        let m = self.magnitude();
        Some(Self::new(self.x / m, self.y / m, self.z / m))
    }
}

// ---------------------------------------------------------------------------
// LaneEvent
// ---------------------------------------------------------------------------

/// A notification for the presentation layer.
///
/// `#[serde(tag = "type")]` gives the scoreboard a flat JSON shape:
///   `{ "type": "ScoreChanged", "total": 17 }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LaneEvent {
    /// Human-readable result of the last throw: `"STRIKE!"`, `"SPARE!"`,
    /// `"7 pins"`, `"Total: 8 pins"`.
    ResultMessage { message: String },

    /// The session's grand total after a throw.
    ScoreChanged { total: u32 },

    /// The frame index or throw ordinal moved.
    FrameChanged { frame: u32, throw: u8 },

    /// A frame just completed with the given score.
    FrameComplete { frame: u32, score: u8 },
}
