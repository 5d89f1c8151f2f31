use thiserror::Error;

/// The kinds of errors raised by the harness.
///
/// Functions of this crate return [anyhow::Result] values;
/// when the failure belongs to one of these kinds, the underlying error is a [`HarnessError`] that may be retrieved with [`HarnessError::find_in`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HarnessError {
    /// A bad value was provided by the caller (unknown payload kind, unknown registry name, malformed CLI value, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The output of a solver does not follow the expected grammar.
    #[error("syntax error: {0}")]
    Syntax(String),
    /// A generator or a checker is badly configured.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// An operation was called while its preconditions do not hold.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl HarnessError {
    /// Searches the error chain of an [anyhow::Error] for a [`HarnessError`].
    ///
    /// # Example
    ///
    /// ```
    /// # use crusticheck::utils::HarnessError;
    /// # use anyhow::Context;
    /// let result: anyhow::Result<()> = Err(HarnessError::Syntax("foo".to_string()))
    ///     .context("while reading solver output");
    /// let err = result.unwrap_err();
    /// assert_eq!(
    ///     Some(&HarnessError::Syntax("foo".to_string())),
    ///     HarnessError::find_in(&err),
    /// );
    /// ```
    pub fn find_in(err: &anyhow::Error) -> Option<&HarnessError> {
        err.chain().find_map(|e| e.downcast_ref::<HarnessError>())
    }

    /// Returns `true` iff the error chain contains a syntax error.
    pub fn is_syntax_error(err: &anyhow::Error) -> bool {
        matches!(Self::find_in(err), Some(HarnessError::Syntax(_)))
    }

    /// Returns `true` iff the error chain contains an invalid argument error.
    pub fn is_invalid_argument(err: &anyhow::Error) -> bool {
        matches!(Self::find_in(err), Some(HarnessError::InvalidArgument(_)))
    }

    /// Returns `true` iff the error chain contains an invalid configuration error.
    pub fn is_invalid_configuration(err: &anyhow::Error) -> bool {
        matches!(Self::find_in(err), Some(HarnessError::InvalidConfiguration(_)))
    }

    /// Returns `true` iff the error chain contains an invalid state error.
    pub fn is_invalid_state(err: &anyhow::Error) -> bool {
        matches!(Self::find_in(err), Some(HarnessError::InvalidState(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_find_in_context_chain() {
        let err = Err::<(), _>(HarnessError::InvalidState("foo".to_string()))
            .context("bar")
            .context("baz")
            .unwrap_err();
        assert!(HarnessError::is_invalid_state(&err));
        assert!(!HarnessError::is_syntax_error(&err));
    }

    #[test]
    fn test_find_in_foreign_error() {
        let err = anyhow::anyhow!("foo");
        assert!(HarnessError::find_in(&err).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            "syntax error: missing bracket",
            HarnessError::Syntax("missing bracket".to_string()).to_string()
        );
    }
}
