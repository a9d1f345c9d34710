//! Error type for the checked entry points.
//!
//! The plain free functions never fail: malformed input produces degenerate
//! but well-defined output. The `checked_*` variants surface those cases as
//! [`InputError`] to the immediate caller instead.

use thiserror::Error;

/// Invalid argument passed to a checked kernel entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// Cost and label sequences must be the same length.
    #[error("cost/label length mismatch: {costs} costs vs {labels} labels")]
    LengthMismatch {
        /// Length of the cost sequence.
        costs: usize,
        /// Length of the label sequence.
        labels: usize,
    },

    /// The day quota must be at least one.
    #[error("quota must be positive")]
    ZeroQuota,

    /// Series length must be non-negative.
    #[error("series length must be non-negative, got {0}")]
    NegativeLength(i32),
}
