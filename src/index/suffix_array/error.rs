//! Errors raised by suffix array construction and queries

/// Result type for suffix array operations
pub type SaResult<T> = Result<T, SuffixArrayError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SuffixArrayError {
    /// Construction input was rejected (empty text, corrupt offsets, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// A sorted index was not below the suffix count
    #[error("Index {index} is out of range for a suffix array of length {len}")]
    OutOfRange { index: usize, len: usize },
}

impl SuffixArrayError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        SuffixArrayError::InvalidArgument(msg.into())
    }
}
