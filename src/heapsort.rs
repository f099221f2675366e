//! Array based binary max-heap, usable as an *O*(*n* \* log(*n*)) worst-case in-place sort.
//!
//! The heap region is the prefix `v[..heap_len]` viewed as an implicit binary tree, the children
//! of `i` live at `2 * i + 1` and `2 * i + 2`. All operations respect the invariant
//! `!is_less(parent, child)`.

use core::mem::ManuallyDrop;
use core::ptr;

/// Sorts `v` using heapsort, which guarantees *O*(*n* \* log(*n*)) worst-case.
///
/// This sort is unstable and does not allocate.
#[inline(never)]
pub fn heapsort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    make_heap(v, is_less);
    sort_heap(v, is_less);
}

/// Establishes the heap invariant over all of `v` in *O*(*n*).
pub fn make_heap<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // Start from the last parent, leaves are trivially heaps.
    for start in (0..=(len - 2) / 2).rev() {
        sift_down(v, len, start, is_less);
    }

    debug_assert!(is_heap(v, is_less), "comparison does not implement a strict weak ordering");
}

/// Moves the maximum of the heap `v[..heap_len]` to `v[heap_len - 1]` and restores the heap
/// invariant for `v[..heap_len - 1]`.
///
/// Does nothing if `heap_len <= 1`.
pub fn pop_heap<T, F>(v: &mut [T], heap_len: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if heap_len > 1 {
        v.swap(0, heap_len - 1);
        sift_down(v, heap_len - 1, 0, is_less);
    }
}

/// Turns the heap `v` into an ascending sequence by repeatedly popping the maximum.
pub fn sort_heap<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for heap_len in (2..=v.len()).rev() {
        pop_heap(v, heap_len, is_less);
    }
}

/// Returns `true` if `v` satisfies the max-heap invariant.
pub fn is_heap<T, F>(v: &[T], is_less: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    (1..v.len()).all(|child| !is_less(&v[(child - 1) / 2], &v[child]))
}

/// Restores the heap invariant for the subtree rooted at `start` inside `v[..heap_len]`, assuming
/// both subtrees of `start` are already valid heaps.
///
/// Instead of swapping at every level, the value at `start` is read out once, each level moves the
/// greater child up by one slot, and the value is written back exactly once into the final gap.
/// The descent stops at the first child that is not strictly greater than the sifted value. On
/// equal children the left one is chosen.
///
/// Panics if `heap_len > v.len()`. Does nothing if `start` has no children inside the heap.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn sift_down<T, F>(v: &mut [T], heap_len: usize, start: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let v = &mut v[..heap_len];
    let len = v.len();

    // Only nodes up to the last parent `(len - 2) / 2` have children.
    if len < 2 || (len - 2) / 2 < start {
        return;
    }

    let mut child = 2 * start + 1;
    if child + 1 < len && is_less(&v[child], &v[child + 1]) {
        child += 1;
    }

    // Already in heap order, the common case while building a heap from sorted input.
    if !is_less(&v[start], &v[child]) {
        return;
    }

    let v_base = v.as_mut_ptr();

    // SAFETY: `start` and every `child` are in-bounds as checked above and below. The gap always
    // points at a slot whose value has been copied elsewhere, either into `gap.value` or one level
    // up. The drop guard `gap` writes the saved value into the current gap both on the normal exit
    // path and should `is_less` panic, so every element is present exactly once afterwards. The
    // saved value is only ever handed to `is_less` by shared reference, any changes via interior
    // mutability are carried along when it is written back.
    unsafe {
        let mut gap = GapGuard {
            pos: v_base.add(start),
            value: ManuallyDrop::new(ptr::read(v_base.add(start))),
        };
        count_move();

        loop {
            // Shift the greater child up into the gap, the gap moves one level down.
            ptr::copy_nonoverlapping(v_base.add(child), gap.pos, 1);
            count_move();
            gap.pos = v_base.add(child);

            let node = child;
            if (len - 2) / 2 < node {
                break;
            }

            child = 2 * node + 1;
            if child + 1 < len && is_less(&*v_base.add(child), &*v_base.add(child + 1)) {
                child += 1;
            }

            if !is_less(&*gap.value, &*v_base.add(child)) {
                break;
            }
        }

        // `gap` goes out of scope and writes the sifted value into its final slot.
    }
}

/// When dropped, copies `value` into `pos`.
struct GapGuard<T> {
    pos: *mut T,
    value: ManuallyDrop<T>,
}

impl<T> Drop for GapGuard<T> {
    fn drop(&mut self) {
        // SAFETY: `pos` is the single slot whose value currently lives elsewhere.
        unsafe {
            ptr::copy_nonoverlapping(&*self.value, self.pos, 1);
        }
        count_move();
    }
}

#[cfg(test)]
thread_local! {
    static MOVES: core::cell::Cell<usize> = const { core::cell::Cell::new(0) };
}

#[cfg(test)]
#[inline(always)]
fn count_move() {
    MOVES.with(|moves| moves.set(moves.get() + 1));
}

#[cfg(not(test))]
#[inline(always)]
fn count_move() {}
