//! Error types for the scoring layer.

/// Contract violations rejected by [`ThrowScorer`](crate::ThrowScorer).
///
/// A rejected call leaves the scorer untouched and emits no events.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    /// A throw reported more pins than a rack holds.
    #[error("pin count {0} out of range 0..=10")]
    PinCountOutOfRange(u8),

    /// A throw was recorded after the frame had already completed.
    /// The frame must be advanced first.
    #[error("frame {frame} is complete, no throw expected")]
    FrameComplete { frame: u32 },

    /// The frame was advanced before it completed.
    #[error("frame {frame} is still open")]
    FrameIncomplete { frame: u32 },
}
