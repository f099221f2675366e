//! Comparator and projection plumbing.
//!
//! Every routine in this crate compares through a single `is_less(a, b)` predicate which must
//! implement a strict weak ordering. A projection is never applied on its own, it is composed with
//! the key comparator up front so that `lt(a, b) = less(key(a), key(b))`.

use std::cmp::Ordering;

/// A trait alias for `is_less` predicates.
pub trait IsLess<T>: FnMut(&T, &T) -> bool {}
impl<T, F: FnMut(&T, &T) -> bool> IsLess<T> for F {}

/// The natural order of `T`, equivalent to the identity projection paired with `<`.
#[inline(always)]
pub fn natural<T: Ord>() -> impl FnMut(&T, &T) -> bool {
    |a, b| a.lt(b)
}

/// Turns a three-way comparator into an `is_less` predicate.
#[inline(always)]
pub fn from_compare<T, F>(mut compare: F) -> impl FnMut(&T, &T) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    move |a, b| compare(a, b) == Ordering::Less
}

/// Composes the projection `key` with the key comparator `less`.
#[inline(always)]
pub fn projected<T, K, P, C>(mut key: P, mut less: C) -> impl FnMut(&T, &T) -> bool
where
    P: FnMut(&T) -> K,
    C: FnMut(&K, &K) -> bool,
{
    move |a, b| less(&key(a), &key(b))
}

/// Compares elements by the natural order of the key extracted with `key`.
#[inline(always)]
pub fn by_key<T, K, P>(key: P) -> impl FnMut(&T, &T) -> bool
where
    K: Ord,
    P: FnMut(&T) -> K,
{
    projected(key, |a: &K, b: &K| a.lt(b))
}

/// Flips the arguments of `less`, turning an ascending order into a descending one.
#[inline(always)]
pub fn reversed<T, F>(mut less: F) -> impl FnMut(&T, &T) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    move |a, b| less(b, a)
}
