use std::cmp::Ordering;

use crate::{heapsort, order};

sort_impl!("rust_heapsort_move_min");

/// Sorts the slice with the move-minimizing heap engine.
///
/// This sort is unstable, in-place and *O*(*n* \* log(*n*)) worst-case.
#[inline]
pub fn sort<T: Ord>(v: &mut [T]) {
    heapsort::heapsort(v, &mut order::natural());
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    heapsort::heapsort(v, &mut order::from_compare(compare));
}

#[inline]
pub fn sort_by_key<T, K, F>(v: &mut [T], key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    heapsort::heapsort(v, &mut order::by_key(key));
}
