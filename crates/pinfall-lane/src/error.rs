//! Error types for lane collaborators.
//!
//! Collaborator failures are never fatal. The turn core logs them and
//! carries on as if the call had been a no-op, so a lane with a missing
//! pin rack stalls at worst, it never crashes.

/// Errors a physics or input collaborator can report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LaneError {
    /// The collaborator is not attached (no physics body, no pin group).
    ///
    /// The `&'static str` names which one, e.g. `"ball"` or `"pins"`.
    #[error("{0} collaborator unavailable")]
    Unavailable(&'static str),

    /// The collaborator is present but refused the operation.
    #[error("collaborator rejected operation: {0}")]
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_names_collaborator() {
        let err = LaneError::Unavailable("pins");
        assert_eq!(err.to_string(), "pins collaborator unavailable");
    }

    #[test]
    fn test_rejected_carries_reason() {
        let err = LaneError::Rejected("ball still in gutter".into());
        assert!(err.to_string().contains("gutter"));
    }
}
