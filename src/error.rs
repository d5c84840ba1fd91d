//! Error types for board access.

use crate::constants::N;

/// Errors reported by board read accessors.
///
/// Writes never fail: an out-of-range or occupied placement is ignored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cell ({row}, {col}) is out of range, indices must be in 0..{}", N)]
    OutOfRange { row: usize, col: usize },

    #[error("invalid board picture: {0}")]
    BadPicture(String),
}
