//! Unified error type for Pinfall.

use pinfall_lane::LaneError;
use pinfall_scoring::ScoringError;
use pinfall_turn::TurnError;

/// Top-level error that wraps all crate-specific errors.
///
/// The `#[from]` attribute on each variant lets `?` convert sub-crate
/// errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum PinfallError {
    /// A physics or input collaborator failed.
    #[error(transparent)]
    Lane(#[from] LaneError),

    /// The scorer rejected a call.
    #[error(transparent)]
    Scoring(#[from] ScoringError),

    /// The lane actor is gone.
    #[error(transparent)]
    Turn(#[from] TurnError),

    /// The tracing subscriber could not be installed.
    #[error("telemetry init failed: {0}")]
    Telemetry(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lane_error() {
        let err: PinfallError = LaneError::Unavailable("ball").into();
        assert!(matches!(err, PinfallError::Lane(_)));
        assert!(err.to_string().contains("ball"));
    }

    #[test]
    fn test_from_scoring_error() {
        let err: PinfallError = ScoringError::PinCountOutOfRange(12).into();
        assert!(matches!(err, PinfallError::Scoring(_)));
        assert!(err.to_string().contains("12"));
    }

    #[test]
    fn test_from_turn_error() {
        let err: PinfallError = TurnError::Unavailable.into();
        assert!(matches!(err, PinfallError::Turn(_)));
        assert_eq!(err.to_string(), "lane is unavailable");
    }
}
