//! Error types for prompt formatting.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors that can occur while rendering a prompt.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The output buffer could not grow.
    #[error("prompt buffer allocation failed: {0}")]
    Allocation(#[from] TryReserveError),

    /// Strict rendering was requested and the template has more
    /// placeholders than substitutions.
    #[error("template '{template}' has {expected} placeholders but only {supplied} substitutions")]
    MissingSubstitution {
        template: String,
        expected: usize,
        supplied: usize,
    },
}

/// Convenience result type for prompt operations.
pub type PromptResult<T> = Result<T, PromptError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_missing_substitution() {
        let err = PromptError::MissingSubstitution {
            template: "grammar".into(),
            expected: 3,
            supplied: 1,
        };
        assert_eq!(
            err.to_string(),
            "template 'grammar' has 3 placeholders but only 1 substitutions"
        );
    }

    #[test]
    fn allocation_error_converts() {
        let reserve_err = Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err();
        let err: PromptError = reserve_err.into();
        assert!(matches!(err, PromptError::Allocation(_)));
        assert!(err.to_string().starts_with("prompt buffer allocation failed"));
    }
}
