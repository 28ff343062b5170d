//! Error types for the turn layer.

/// Errors returned by a [`LaneHandle`](crate::LaneHandle).
///
/// The turn state machine itself never fails. Collaborator and scoring
/// problems are logged and the lane carries on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    /// The lane actor stopped or its command channel closed.
    #[error("lane is unavailable")]
    Unavailable,
}
