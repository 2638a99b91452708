//! Error types for the apgcode codec.

use thiserror::Error;

/// Errors produced while reading an apgcode.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApgcodeError {
    /// The string is not a well-formed apgcode.
    #[error("invalid apgcode at byte {position}: {reason}")]
    InvalidApgcode {
        /// Byte offset of the offending character (the string length for
        /// errors at the end of input).
        position: usize,
        /// What went wrong.
        reason: String,
    },
}

impl ApgcodeError {
    pub(crate) fn invalid(position: usize, reason: impl Into<String>) -> Self {
        Self::InvalidApgcode {
            position,
            reason: reason.into(),
        }
    }
}
