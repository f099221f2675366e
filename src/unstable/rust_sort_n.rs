use std::cmp::Ordering;

use crate::order;
use crate::sort_n::{self, Heapsort};

sort_impl!("rust_sort_n_heapsort_fallback");

/// Sorts with a fixed-size routine when one is registered for `v.len()`, otherwise with
/// [`Heapsort`]. Neither path allocates.
#[inline]
pub fn sort<T: Ord>(v: &mut [T]) {
    sort_n::sort_exact(v, &mut order::natural(), Heapsort);
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_n::sort_exact(v, &mut order::from_compare(compare), Heapsort);
}
