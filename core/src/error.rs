//! Error type for filter operations

use thiserror::Error;

/// Errors returned by clause mutations.
///
/// Index and operator errors are caller contract violations: a filter panel
/// never produces an out-of-range row or an unlisted operator on its own.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Index outside `[0, len)`
    #[error("Filter index {index} out of range (list has {len} clauses)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Operator name outside the fixed enumeration
    #[error("Invalid filter operator: '{0}'")]
    InvalidOperator(String),

    /// The task owning the controller is gone
    #[error("Filter session closed")]
    SessionClosed,
}

impl FilterError {
    /// Create an index error
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create an invalid operator error
    pub fn invalid_operator(name: impl Into<String>) -> Self {
        Self::InvalidOperator(name.into())
    }

    /// Whether the error is a local precondition violation (programming error)
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::IndexOutOfRange { .. } | Self::InvalidOperator(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_error_message() {
        let err = FilterError::index_out_of_range(3, 2);
        assert_eq!(
            err.to_string(),
            "Filter index 3 out of range (list has 2 clauses)"
        );
        assert!(err.is_contract_violation());
    }

    #[test]
    fn invalid_operator_message() {
        let err = FilterError::invalid_operator("startsWith");
        assert_eq!(err.to_string(), "Invalid filter operator: 'startsWith'");
        assert!(err.is_contract_violation());
    }

    #[test]
    fn session_closed_is_not_contract_violation() {
        assert!(!FilterError::SessionClosed.is_contract_violation());
    }
}
