//! Ordering kernel: a move-minimizing heap engine, a fixed-size sorting dispatcher and the `par`
//! presortedness probe.
//!
//! Everything operates through a composed `is_less(a, b)` predicate, see [`order`]. The sorts
//! mutate their input in place, the probes only read it.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod error;
pub mod heapsort;
pub mod order;
pub mod probe;
pub mod scratch;
pub mod sort_n;
pub mod unstable;

pub use error::ScratchError;
