//! Presortedness probes.
//!
//! A probe reads a sequence without modifying it and returns a single disorder score. The score is
//! the smallest parameter for which the sequence satisfies a monotonic ordering predicate, 0 means
//! sorted.
//!
//! Which algorithm a probe may use depends on how the sequence can be traversed. The capability is
//! part of the sequence type, see [`Sequence::TRAVERSAL`], and is resolved at compile time.

use std::collections::{linked_list, vec_deque, LinkedList, VecDeque};
use std::iter::{self, Rev};
use std::slice;

mod p_sorted;
pub mod par;

pub use p_sorted::{is_p_sorted, MonotonicOracle, PSorted};

/// How a sequence can be traversed, every tier includes the ones before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Traversal {
    /// Front to back, any number of times.
    Forward,
    /// Additionally back to front.
    Bidirectional,
    /// Additionally constant time jumps and distances.
    RandomAccess,
}

mod sealed {
    pub trait Sealed {}
}

/// A borrowed, read-only view of a finite sequence.
///
/// Positions are plain references into the sequence. The trait is sealed, use [`Forward`] and
/// [`Bidirectional`] to probe arbitrary iterators.
pub trait Sequence<'a>: sealed::Sealed + Clone {
    type Item: 'a;

    /// Front to back traversal, cloning it yields an independent cursor.
    type Iter: Iterator<Item = &'a Self::Item> + Clone;

    /// Back to front traversal, [`iter::Empty`] for forward-only sequences.
    type Backward: Iterator<Item = &'a Self::Item>;

    const TRAVERSAL: Traversal;

    fn elements(&self) -> Self::Iter;

    /// Number of elements, linear for forward-only sequences.
    fn size(&self) -> usize;

    /// `Some` exactly when `TRAVERSAL` is at least [`Traversal::Bidirectional`].
    fn backward(&self) -> Option<Self::Backward>;
}

/// Sequences that can always be walked back to front.
pub trait BidirectionalSequence<'a>: Sequence<'a> {
    fn rev_elements(&self) -> Self::Backward;
}

macro_rules! impl_sequence {
    ($traversal:ident, $ty:ty, $iter:ty, $len:ident) => {
        impl<'a, T> sealed::Sealed for &'a $ty {}

        impl<'a, T> Sequence<'a> for &'a $ty {
            type Item = T;
            type Iter = $iter;
            type Backward = Rev<$iter>;

            const TRAVERSAL: Traversal = Traversal::$traversal;

            #[inline]
            fn elements(&self) -> Self::Iter {
                self.iter()
            }

            #[inline]
            fn size(&self) -> usize {
                self.$len()
            }

            #[inline]
            fn backward(&self) -> Option<Self::Backward> {
                Some(self.iter().rev())
            }
        }

        impl<'a, T> BidirectionalSequence<'a> for &'a $ty {
            #[inline]
            fn rev_elements(&self) -> Self::Backward {
                self.iter().rev()
            }
        }
    };
}

impl_sequence!(RandomAccess, [T], slice::Iter<'a, T>, len);
impl_sequence!(RandomAccess, Vec<T>, slice::Iter<'a, T>, len);
impl_sequence!(RandomAccess, VecDeque<T>, vec_deque::Iter<'a, T>, len);
impl_sequence!(Bidirectional, LinkedList<T>, linked_list::Iter<'a, T>, len);

impl<'a, T, const N: usize> sealed::Sealed for &'a [T; N] {}

impl<'a, T, const N: usize> Sequence<'a> for &'a [T; N] {
    type Item = T;
    type Iter = slice::Iter<'a, T>;
    type Backward = Rev<slice::Iter<'a, T>>;

    const TRAVERSAL: Traversal = Traversal::RandomAccess;

    #[inline]
    fn elements(&self) -> Self::Iter {
        self.iter()
    }

    #[inline]
    fn size(&self) -> usize {
        N
    }

    #[inline]
    fn backward(&self) -> Option<Self::Backward> {
        Some(self.iter().rev())
    }
}

impl<'a, T, const N: usize> BidirectionalSequence<'a> for &'a [T; N] {
    #[inline]
    fn rev_elements(&self) -> Self::Backward {
        self.iter().rev()
    }
}

/// Views a cloneable iterator as a forward-only sequence.
///
/// ```ignore
/// let list = std::collections::LinkedList::from([3, 1, 2]);
/// assert_eq!(par(Forward(list.iter())), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Forward<I>(pub I);

impl<I> sealed::Sealed for Forward<I> {}

impl<'a, T: 'a, I> Sequence<'a> for Forward<I>
where
    I: Iterator<Item = &'a T> + Clone,
{
    type Item = T;
    type Iter = I;
    type Backward = iter::Empty<&'a T>;

    const TRAVERSAL: Traversal = Traversal::Forward;

    #[inline]
    fn elements(&self) -> Self::Iter {
        self.0.clone()
    }

    fn size(&self) -> usize {
        self.0.clone().count()
    }

    #[inline]
    fn backward(&self) -> Option<Self::Backward> {
        None
    }
}

/// Views a cloneable double ended iterator as a bidirectional sequence.
#[derive(Debug, Clone)]
pub struct Bidirectional<I>(pub I);

impl<I> sealed::Sealed for Bidirectional<I> {}

impl<'a, T: 'a, I> Sequence<'a> for Bidirectional<I>
where
    I: DoubleEndedIterator<Item = &'a T> + Clone,
{
    type Item = T;
    type Iter = I;
    type Backward = Rev<I>;

    const TRAVERSAL: Traversal = Traversal::Bidirectional;

    #[inline]
    fn elements(&self) -> Self::Iter {
        self.0.clone()
    }

    fn size(&self) -> usize {
        self.0.clone().count()
    }

    #[inline]
    fn backward(&self) -> Option<Self::Backward> {
        Some(self.rev_elements())
    }
}

impl<'a, T: 'a, I> BidirectionalSequence<'a> for Bidirectional<I>
where
    I: DoubleEndedIterator<Item = &'a T> + Clone,
{
    #[inline]
    fn rev_elements(&self) -> Self::Backward {
        self.0.clone().rev()
    }
}
