//! Error types for the design operations.

use thiserror::Error;

/// Errors from experiment-design computations
///
/// Every public operation validates its inputs eagerly at the call boundary
/// and returns one of these instead of letting a constraint violation escape
/// as NaN or infinity. Nothing is retried internally; re-invoking with
/// corrected parameters is a caller concern.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DesignError {
    /// Variance, size, or ratio vectors are empty, mismatched, or out of domain.
    #[error("invalid group data: {reason}")]
    InvalidGroupData {
        /// Which constraint the group data violated.
        reason: String,
    },

    /// Significance level, power target, or effect size is out of domain.
    #[error("invalid design parameters: {reason}")]
    InvalidDesignParameters {
        /// Which constraint the parameters violated.
        reason: String,
    },

    /// The sample-size iteration did not converge within the step limit.
    #[error("sample-size iteration did not converge within {limit} refinement steps")]
    IterationLimitExceeded {
        /// The refinement-step cap that was exhausted.
        limit: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = DesignError::InvalidGroupData {
            reason: "at least one group ratio required".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid group data: at least one group ratio required"
        );

        let err = DesignError::IterationLimitExceeded { limit: 32 };
        assert!(err.to_string().contains("32"));
    }
}
