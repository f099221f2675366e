//! The `par` measure of presortedness.
//!
//! `par(X)` is the smallest `p` such that `X` is p-sorted, which equals the greatest distance
//! `j - i` over all inversions `i < j, X[j] < X[i]`, or 0 if there is none. Strictly descending
//! input of length `n` scores [`max_for_size`]`(n)`.
//!
//! Two algorithms are available:
//!
//! - forward: binary search over `p` with a [`MonotonicOracle`], *O*(*n* \* log(*n*)) time and no
//!   extra memory. Works on every [`Sequence`].
//! - direct: one pass in each direction plus a merge, *O*(*n*) time and two scratch vectors of
//!   `n` references. Needs at least [`Traversal::Bidirectional`](super::Traversal).
//!
//! [`par`] picks the direct algorithm when the sequence supports it and quietly falls back to the
//! forward one when scratch memory is unavailable. Both return the same value.

use tracing::debug;

use super::{BidirectionalSequence, MonotonicOracle, PSorted, Sequence};
use crate::error::ScratchError;
use crate::order;
use crate::scratch::{Global, ScratchAlloc};

/// Largest possible `par` for a sequence of `n` elements.
#[inline]
pub const fn max_for_size(n: usize) -> usize {
    n.saturating_sub(1)
}

/// Measures the presortedness of `seq` in its natural order.
///
/// ```ignore
/// assert_eq!(par(&[2, 1, 4, 3]), 1);
/// ```
pub fn par<'a, S>(seq: S) -> usize
where
    S: Sequence<'a>,
    S::Item: Ord,
{
    par_with(seq, &mut order::natural(), &mut PSorted, Global)
}

/// Measures the presortedness of `seq` with a comparator function.
pub fn par_by<'a, S, F>(seq: S, compare: F) -> usize
where
    S: Sequence<'a>,
    F: FnMut(&S::Item, &S::Item) -> std::cmp::Ordering,
{
    par_with(seq, &mut order::from_compare(compare), &mut PSorted, Global)
}

/// Measures the presortedness of `seq` by the natural order of a projected key.
pub fn par_by_key<'a, S, K, P>(seq: S, key: P) -> usize
where
    S: Sequence<'a>,
    K: Ord,
    P: FnMut(&S::Item) -> K,
{
    par_with(seq, &mut order::by_key(key), &mut PSorted, Global)
}

/// Measures `seq` with an explicit oracle for the forward path and scratch source for the direct
/// path.
pub fn par_with<'a, S, F, O, A>(seq: S, is_less: &mut F, oracle: &mut O, scratch: A) -> usize
where
    S: Sequence<'a>,
    F: FnMut(&S::Item, &S::Item) -> bool,
    O: MonotonicOracle<S::Item>,
    A: ScratchAlloc,
{
    let Some(backward) = seq.backward() else {
        return par_forward(seq, is_less, oracle);
    };

    let size = seq.size();
    match direct(size, seq.elements(), backward, is_less, scratch) {
        Ok(res) => res,
        Err(err) => {
            debug!(size, error = %err, "no scratch for direct par, using forward search");
            par_forward(seq, is_less, oracle)
        }
    }
}

/// Binary searches the smallest `p` for which `oracle` holds, over `[0, size]`.
///
/// Calls the oracle *O*(log(*n*)) times and allocates nothing.
pub fn par_forward<'a, S, F, O>(seq: S, is_less: &mut F, oracle: &mut O) -> usize
where
    S: Sequence<'a>,
    F: FnMut(&S::Item, &S::Item) -> bool,
    O: MonotonicOracle<S::Item>,
{
    let mut res = 0;
    let mut size = seq.size();

    while size > 0 {
        let p = res + size / 2;
        if oracle.holds(seq.elements(), p, is_less) {
            size /= 2;
        } else {
            res = p + 1;
            size -= size / 2 + 1;
        }
    }

    res
}

/// Runs the linear time algorithm, or reports why its scratch could not be obtained. Never falls
/// back to the forward path.
pub fn try_par_direct<'a, S, F, A>(
    seq: S,
    is_less: &mut F,
    scratch: A,
) -> Result<usize, ScratchError>
where
    S: BidirectionalSequence<'a>,
    F: FnMut(&S::Item, &S::Item) -> bool,
    A: ScratchAlloc,
{
    direct(seq.size(), seq.elements(), seq.rev_elements(), is_less, scratch)
}

fn direct<'a, T, I, R, F, A>(
    size: usize,
    forward: I,
    backward: R,
    is_less: &mut F,
    mut scratch: A,
) -> Result<usize, ScratchError>
where
    T: 'a,
    I: Iterator<Item = &'a T>,
    R: Iterator<Item = &'a T>,
    F: FnMut(&T, &T) -> bool,
    A: ScratchAlloc,
{
    if size < 2 {
        return Ok(0);
    }

    // `prefix_max[i]` is the leftmost maximum of `x[..=i]`, `suffix_min[i]` the rightmost minimum
    // of `x[i..]`. Both are non-decreasing.
    let mut prefix_max: Vec<&'a T> = scratch.try_alloc(size)?;
    let mut suffix_min: Vec<&'a T> = scratch.try_alloc(size)?;

    for elem in forward {
        let repr = match prefix_max.last().copied() {
            Some(max) if !is_less(max, elem) => max,
            _ => elem,
        };
        prefix_max.push(repr);
    }

    for elem in backward {
        let repr = match suffix_min.last().copied() {
            Some(min) if !is_less(elem, min) => min,
            _ => elem,
        };
        suffix_min.push(repr);
    }
    suffix_min.reverse();

    debug_assert_eq!(prefix_max.len(), suffix_min.len());
    let len = prefix_max.len().min(suffix_min.len());

    // Merge from the right, `i` only ever moves left. The widest gap `i - j` seen while the
    // prefix maximum before `j` exceeds the suffix minimum from `i - 1` on is the answer.
    let mut res = 0;
    let mut i = len;
    for j in (1..=len).rev() {
        while j <= i
            && i >= 1
            && !is_less(prefix_max[j - 1], suffix_min[i - 1])
            && (j == 1 || !is_less(suffix_min[i - 1], prefix_max[j - 2]))
        {
            res = res.max(i - j);
            i -= 1;
        }
    }

    Ok(res)
}
