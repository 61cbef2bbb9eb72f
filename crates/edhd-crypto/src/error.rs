use edhd_types::ChildIndex;
use thiserror::Error;

/// Errors from key derivation.
///
/// Every error is local to one call; no partial output is ever returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeriveError {
    #[error("{field} must be {expected} bytes, got {actual}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("index {0} is not hardened; ed25519 only supports hardened derivation")]
    InvalidIndex(ChildIndex),

    #[error("derivation failed at depth {depth} (index {index}): {source}")]
    AtDepth {
        depth: usize,
        index: ChildIndex,
        source: Box<DeriveError>,
    },
}

pub type DeriveResult<T> = Result<T, DeriveError>;
