//! The traversal operations: `for_each`, `find_first`, `map_all`.
//!
//! Every operation walks the sequence with an explicit index, from 0 while
//! `index < sequence.len()`. The length is re-read each iteration; if the
//! view stops producing elements below that length mid-walk, the infallible
//! operations end the walk quietly and the `try_` variants report
//! [`TraverseError::InvalidSequence`].

use alloc::vec::Vec;

use crate::error::TraverseError;
use crate::view::SequenceView;

// ============================================================================
// Infallible operations
// ============================================================================

/// Invoke `callback` once per element, in ascending index order.
///
/// The callback's return value is ignored; an empty sequence means zero
/// invocations.
///
/// # Examples
///
/// ```
/// let mut seen = Vec::new();
/// seq_ops::for_each(&["a", "b", "c"], |e| seen.push(e));
/// assert_eq!(seen, ["a", "b", "c"]);
/// ```
pub fn for_each<E, S, F>(sequence: &S, mut callback: F)
where
    S: SequenceView<E> + ?Sized,
    F: FnMut(E),
{
    tracing::trace!(len = sequence.len(), "for_each");
    let mut index = 0;
    while index < sequence.len() {
        let Some(element) = sequence.get(index) else {
            break;
        };
        callback(element);
        index += 1;
    }
}

/// Yield the first element for which `predicate` returns true.
///
/// Short-circuits: once a match is found, no further elements are visited
/// and the predicate is not invoked again. `None` means no element matched
/// (an empty sequence never invokes the predicate at all).
///
/// # Examples
///
/// ```
/// let names = ["Brooke", "Gehrig", "Cecilia"];
/// assert_eq!(
///     seq_ops::find_first(&names, |n| n.starts_with('C')),
///     Some("Cecilia"),
/// );
/// assert_eq!(seq_ops::find_first(&names, |n| n.starts_with('Z')), None);
/// ```
pub fn find_first<E, S, P>(sequence: &S, mut predicate: P) -> Option<E>
where
    S: SequenceView<E> + ?Sized,
    P: FnMut(&E) -> bool,
{
    tracing::trace!(len = sequence.len(), "find_first");
    let mut index = 0;
    while index < sequence.len() {
        let element = sequence.get(index)?;
        if predicate(&element) {
            return Some(element);
        }
        index += 1;
    }
    None
}

/// Build a new sequence by applying `transform` to every element.
///
/// The result has the same length as the input, with
/// `result[i] == transform(input[i])`; the input is left untouched. An
/// empty input yields an empty output and zero invocations.
///
/// # Examples
///
/// ```
/// let doubled = seq_ops::map_all(&[1, 2, 3], |n| n * 2);
/// assert_eq!(doubled, [2, 4, 6]);
/// ```
pub fn map_all<E, U, S, F>(sequence: &S, mut transform: F) -> Vec<U>
where
    S: SequenceView<E> + ?Sized,
    F: FnMut(E) -> U,
{
    tracing::trace!(len = sequence.len(), "map_all");
    let mut mapped = Vec::with_capacity(sequence.len());
    let mut index = 0;
    while index < sequence.len() {
        let Some(element) = sequence.get(index) else {
            break;
        };
        mapped.push(transform(element));
        index += 1;
    }
    mapped
}

// ============================================================================
// Fallible operations
// ============================================================================

/// [`for_each`] with a fallible callback.
///
/// The first callback error aborts the remaining traversal and comes back
/// unwrapped through [`TraverseError::Callback`].
pub fn try_for_each<E, S, F, Err>(sequence: &S, mut callback: F) -> Result<(), TraverseError<Err>>
where
    S: SequenceView<E> + ?Sized,
    F: FnMut(E) -> Result<(), Err>,
{
    let expected_len = sequence.len();
    let mut index = 0;
    while index < sequence.len() {
        let Some(element) = sequence.get(index) else {
            return Err(TraverseError::InvalidSequence {
                index,
                expected_len,
            });
        };
        callback(element).map_err(TraverseError::Callback)?;
        index += 1;
    }
    Ok(())
}

/// [`find_first`] with a fallible predicate.
///
/// A predicate error aborts the search at the element that raised it.
pub fn try_find_first<E, S, P, Err>(
    sequence: &S,
    mut predicate: P,
) -> Result<Option<E>, TraverseError<Err>>
where
    S: SequenceView<E> + ?Sized,
    P: FnMut(&E) -> Result<bool, Err>,
{
    let expected_len = sequence.len();
    let mut index = 0;
    while index < sequence.len() {
        let Some(element) = sequence.get(index) else {
            return Err(TraverseError::InvalidSequence {
                index,
                expected_len,
            });
        };
        if predicate(&element).map_err(TraverseError::Callback)? {
            return Ok(Some(element));
        }
        index += 1;
    }
    Ok(None)
}

/// [`map_all`] with a fallible transform.
///
/// On the first transform error the whole call fails: output built so far
/// is discarded and the error propagates via [`TraverseError::Callback`].
pub fn try_map_all<E, U, S, F, Err>(
    sequence: &S,
    mut transform: F,
) -> Result<Vec<U>, TraverseError<Err>>
where
    S: SequenceView<E> + ?Sized,
    F: FnMut(E) -> Result<U, Err>,
{
    let expected_len = sequence.len();
    let mut mapped = Vec::with_capacity(expected_len);
    let mut index = 0;
    while index < sequence.len() {
        let Some(element) = sequence.get(index) else {
            return Err(TraverseError::InvalidSequence {
                index,
                expected_len,
            });
        };
        mapped.push(transform(element).map_err(TraverseError::Callback)?);
        index += 1;
    }
    Ok(mapped)
}

// ============================================================================
// Method-call surface
// ============================================================================

/// Method-call syntax for the traversal operations, available on every
/// [`SequenceView`].
///
/// ```
/// use seq_ops::SequenceOps;
///
/// let lens = ["a", "bb", "ccc"].map_all(|s| s.len());
/// assert_eq!(lens, [1, 2, 3]);
/// ```
pub trait SequenceOps<E>: SequenceView<E> {
    fn for_each<F>(&self, callback: F)
    where
        F: FnMut(E),
    {
        for_each(self, callback)
    }

    fn find_first<P>(&self, predicate: P) -> Option<E>
    where
        P: FnMut(&E) -> bool,
    {
        find_first(self, predicate)
    }

    fn map_all<U, F>(&self, transform: F) -> Vec<U>
    where
        F: FnMut(E) -> U,
    {
        map_all(self, transform)
    }

    fn try_for_each<F, Err>(&self, callback: F) -> Result<(), TraverseError<Err>>
    where
        F: FnMut(E) -> Result<(), Err>,
    {
        try_for_each(self, callback)
    }

    fn try_find_first<P, Err>(&self, predicate: P) -> Result<Option<E>, TraverseError<Err>>
    where
        P: FnMut(&E) -> Result<bool, Err>,
    {
        try_find_first(self, predicate)
    }

    fn try_map_all<U, F, Err>(&self, transform: F) -> Result<Vec<U>, TraverseError<Err>>
    where
        F: FnMut(E) -> Result<U, Err>,
    {
        try_map_all(self, transform)
    }
}

impl<E, S: SequenceView<E> + ?Sized> SequenceOps<E> for S {}

#[cfg(test)]
#[path = "ops_test.rs"]
mod ops_test;
