//! Error type for the fallible traversal operations.

use thiserror::Error;

/// Failure of a `try_` traversal.
///
/// Callback errors pass through untouched; `Callback` is transparent so the
/// caller sees their own error's message and source chain. `InvalidSequence`
/// reports a [`SequenceView`](crate::SequenceView) that broke its contract
/// by returning `None` below its reported length.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TraverseError<E> {
    #[error("sequence has no element at index {index} despite reported length {expected_len}")]
    InvalidSequence { index: usize, expected_len: usize },

    #[error(transparent)]
    Callback(E),
}
