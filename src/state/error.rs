//! State management-specific error types.

use super::View;

/// Errors that can occur during state operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// Transition not allowed from the current view
    #[error("Invalid view transition: {from:?} -> {to:?}")]
    InvalidViewTransition { from: View, to: View },

    /// Form operation attempted without an open draft
    #[error("No plant draft is open")]
    NoDraft,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_error_display() {
        let error = StateError::InvalidViewTransition {
            from: View::Add,
            to: View::Add,
        };
        assert!(error.to_string().contains("Invalid view transition"));
        assert!(error.to_string().contains("Add -> Add"));

        let error = StateError::NoDraft;
        assert!(error.to_string().contains("No plant draft"));
    }
}
