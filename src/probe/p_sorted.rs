/// A predicate over `(sequence, p)` that is monotonic in `p`: once it holds for some `p` it holds
/// for every greater `p`.
///
/// The forward `par` search binary searches the smallest `p` for which the oracle holds.
pub trait MonotonicOracle<T> {
    fn holds<'a, I, F>(&mut self, elements: I, p: usize, is_less: &mut F) -> bool
    where
        T: 'a,
        I: Iterator<Item = &'a T> + Clone,
        F: FnMut(&T, &T) -> bool;
}

impl<T, O: MonotonicOracle<T> + ?Sized> MonotonicOracle<T> for &mut O {
    #[inline]
    fn holds<'a, I, F>(&mut self, elements: I, p: usize, is_less: &mut F) -> bool
    where
        T: 'a,
        I: Iterator<Item = &'a T> + Clone,
        F: FnMut(&T, &T) -> bool,
    {
        (**self).holds(elements, p, is_less)
    }
}

/// The oracle that defines `par`, see [`is_p_sorted`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PSorted;

impl<T> MonotonicOracle<T> for PSorted {
    #[inline]
    fn holds<'a, I, F>(&mut self, elements: I, p: usize, is_less: &mut F) -> bool
    where
        T: 'a,
        I: Iterator<Item = &'a T> + Clone,
        F: FnMut(&T, &T) -> bool,
    {
        is_p_sorted(elements, p, is_less)
    }
}

/// Returns `true` if no element is less than any element more than `p` positions before it.
///
/// `p = 0` is equivalent to being sorted. Single pass, the leading cursor runs `p + 1` elements
/// ahead of the trailing one, which tracks the maximum of everything it has passed.
pub fn is_p_sorted<'a, T, I, F>(elements: I, p: usize, is_less: &mut F) -> bool
where
    T: 'a,
    I: Iterator<Item = &'a T> + Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut trailing = elements.clone();
    let Some(mut max) = trailing.next() else {
        return true;
    };

    for elem in elements.skip(p.saturating_add(1)) {
        if is_less(elem, max) {
            return false;
        }

        // The trailing cursor is always behind the leading one.
        if let Some(next) = trailing.next() {
            if is_less(max, next) {
                max = next;
            }
        }
    }

    true
}
