//! Decision trees that sort up to `MAX_LEN` elements with the minimal number of comparisons.
//!
//! | len         | 0 | 1 | 2 | 3 | 4 | 5 | 6  | 7  | 8  |
//! |-------------|---|---|---|---|---|---|----|----|----|
//! | comparisons | 0 | 0 | 1 | 3 | 5 | 7 | 10 | 13 | 16 |
//!
//! Unlike a sorting network, later comparisons depend on the outcome of earlier ones. Most lengths
//! sort the prefix `v[..len - 1]` and then lift the last element out, shift the tail of the prefix
//! up by one slot and drop it into its binary search position. Five elements use a dedicated tree,
//! binary insertion would need 8 comparisons there.

pub const MAX_LEN: usize = 8;

/// Sorts `v` with the minimal number of comparisons.
///
/// Panics if `v.len() > MAX_LEN`.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    assert!(len <= MAX_LEN, "no low comparison tree for {len} elements");

    match len {
        0 | 1 => {}
        5 => sort5(v, is_less),
        _ => {
            sort(&mut v[..len - 1], is_less);
            binary_insert(v, len - 1, len - 1, is_less);
        }
    }
}

fn sort5<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Two ordered pairs a <= b and c <= d.
    swap_if_less(v, 0, 1, is_less);
    swap_if_less(v, 2, 3, is_less);

    // Order the pairs by their greater element, giving the chain a <= b <= d with c <= d.
    if is_less(&v[3], &v[1]) {
        v.swap(0, 2);
        v.swap(1, 3);
    }

    // [a, b, c, d, e] -> [a, b, d, e, c]
    v.swap(2, 3);
    v.swap(3, 4);

    // e into the chain, 2 comparisons.
    let e_pos = binary_insert(v, 3, 3, is_less);

    // c is known to be <= d, so it only has to be searched for left of d. At most 2 comparisons.
    let d_pos = if e_pos == 3 { 2 } else { 3 };
    binary_insert(v, d_pos, 4, is_less);
}

/// Moves `v[from]` into its upper bound position inside the sorted `v[..sorted_len]` and returns
/// that position. Elements in `v[sorted_len..from]` must not be less than `v[from]`.
#[inline(always)]
fn binary_insert<T, F>(v: &mut [T], sorted_len: usize, from: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let (sorted, tail) = v.split_at(from);
    let elem = &tail[0];

    let mut lo = 0;
    let mut hi = sorted_len;
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if is_less(elem, &sorted[mid]) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }

    // Lift the element out, shift `v[lo..from]` up by one and reinsert it at `lo`.
    v[lo..=from].rotate_right(1);
    lo
}

#[inline(always)]
fn swap_if_less<T, F>(v: &mut [T], a: usize, b: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if is_less(&v[b], &v[a]) {
        v.swap(a, b);
    }
}
