//! Error types for distribution construction and evaluation.

use std::fmt;

use crate::special::NonConvergence;

/// Result type for statistics operations.
pub type StatsResult<T> = Result<T, StatsError>;

/// Errors that can occur when building or evaluating a distribution.
#[derive(Debug, Clone, PartialEq)]
pub enum StatsError {
    /// Invalid parameter value for a distribution.
    InvalidParameter {
        name: String,
        value: f64,
        reason: String,
    },

    /// Iterative method did not converge.
    ConvergenceError { iterations: usize, context: String },
}

impl StatsError {
    pub(crate) fn invalid(name: &str, value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            value,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                name,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{}' = {}: {}", name, value, reason)
            }
            Self::ConvergenceError {
                iterations,
                context,
            } => {
                write!(
                    f,
                    "{} did not converge after {} iterations",
                    context, iterations
                )
            }
        }
    }
}

impl std::error::Error for StatsError {}

impl From<NonConvergence> for StatsError {
    fn from(err: NonConvergence) -> Self {
        Self::ConvergenceError {
            iterations: err.iterations,
            context: "inverse incomplete beta".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StatsError::invalid("alpha", -1.0, "must be positive");
        assert!(err.to_string().contains("alpha"));
        assert!(err.to_string().contains("-1"));

        let err: StatsError = NonConvergence {
            iterations: 100,
            estimate: 0.5,
        }
        .into();
        assert!(err.to_string().contains("100"));
        assert!(matches!(
            err,
            StatsError::ConvergenceError {
                iterations: 100,
                ..
            }
        ));
    }
}
