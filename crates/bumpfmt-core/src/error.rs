//! Error taxonomy for template writes.
//!
//! Two failure kinds exist and both are raised at the point of detection:
//! a placeholder/argument count disagreement, and a write that would run
//! past the end of the destination view. Nothing is retried internally.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, FormatError>;

/// Failure raised by the write engine or by a `Format` implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FormatError {
    /// The template's placeholder count differs from the argument count.
    ///
    /// `placeholders` is the number of `{}` tokens in the whole template,
    /// `arguments` the number of values supplied by the caller.
    #[error(
        "template has {placeholders} placeholder(s) but {arguments} argument(s) were supplied"
    )]
    PlaceholderCountMismatch {
        placeholders: usize,
        arguments: usize,
    },
    /// A write needed more room than the view had left.
    ///
    /// `offset` is the absolute position (from the root buffer start) at
    /// which the write was attempted.
    #[error("write of {needed} byte(s) at offset {offset} exceeds the {available} byte(s) available")]
    OutOfBounds {
        offset: usize,
        needed: usize,
        available: usize,
    },
}

impl FormatError {
    /// Stable snake_case tag, used for fixture comparison and structured logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::PlaceholderCountMismatch { .. } => "placeholder_count_mismatch",
            Self::OutOfBounds { .. } => "out_of_bounds",
        }
    }

    /// Returns true for the buffer-exhaustion kind.
    #[must_use]
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}
