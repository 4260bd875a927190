use thiserror::Error;

/// Why a path failed to resolve. Only ever logged; callers see `None`.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum LookupError {
    #[error("key '{0}' not found")]
    MissingKey(String),

    #[error("cannot look up key '{0}' in a non-mapping value")]
    NotAMapping(String),

    #[error("cannot index a non-sequence value with '{0}'")]
    NotASequence(String),

    #[error("invalid sequence index '{0}'")]
    InvalidIndex(String),

    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("value at '{0}' is null")]
    Null(String),
}
