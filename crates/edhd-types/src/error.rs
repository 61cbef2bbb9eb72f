use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    #[error("invalid byte length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid derivation path: {0}")]
    InvalidPath(String),

    #[error("child number {0} does not fit below the hardened bit")]
    IndexOutOfRange(u32),
}
