//! Error types for combinat kernel operations.

/// Errors arising from invalid input to a counting or enumeration operation.
///
/// Every failure is raised synchronously, before any caller-visible side
/// effect. Degenerate but well-formed input (for example `k > n`) is not an
/// error; it resolves to a base-case value instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CombinatoricsError {
    /// A negative integer, or an inverted range, was supplied.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl CombinatoricsError {
    pub(crate) fn invalid(description: impl Into<String>) -> Self {
        Self::InvalidArgument(description.into())
    }
}

/// Result alias used throughout the kernel.
pub type Result<T> = std::result::Result<T, CombinatoricsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_display() {
        let err = CombinatoricsError::invalid("choose: n = -1");
        assert_eq!(err.to_string(), "invalid argument: choose: n = -1");
    }
}
