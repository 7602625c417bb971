//! Index-addressable view over an ordered sequence.

use alloc::vec::Vec;

/// An ordered, 0-indexed sequence of elements of type `E`.
///
/// `get` yields an owned `E`, so the borrowed std impls require
/// `E: Clone`. Out-of-range access returns `None` rather than panicking;
/// the traversal operations rely on that to stay total.
pub trait SequenceView<E> {
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<E>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

static_assertions::assert_obj_safe!(SequenceView<u8>);

impl<E: Clone> SequenceView<E> for [E] {
    fn len(&self) -> usize {
        <[E]>::len(self)
    }

    fn get(&self, index: usize) -> Option<E> {
        <[E]>::get(self, index).cloned()
    }
}

impl<E: Clone, const N: usize> SequenceView<E> for [E; N] {
    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<E> {
        self.as_slice().get(index).cloned()
    }
}

impl<E: Clone> SequenceView<E> for Vec<E> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<E> {
        self.as_slice().get(index).cloned()
    }
}

impl<E, S: SequenceView<E> + ?Sized> SequenceView<E> for &S {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, index: usize) -> Option<E> {
        (**self).get(index)
    }
}
