//! Sorts of a statically known, small exact length.
//!
//! A [`RoutineTable`] maps an exact element count to a hand-optimized [`Routine`], either a
//! sorting network or a low comparison decision tree. Counts without an entry are handed to an
//! injected [`FallbackSorter`], which makes the [`Dispatcher`] total over all lengths. The tables
//! are immutable and built once on first use.

use std::cmp::Ordering;

use once_cell::sync::Lazy;
use tracing::trace;

use crate::heapsort;
use crate::order;

pub mod low_comparisons;
pub mod sorting_network;

/// A fixed sequence of operations that sorts exactly one length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routine {
    /// Lengths 0 and 1 are sorted by definition.
    Noop,
    /// Data independent compare-exchange pairs, see [`sorting_network`].
    Network(&'static [(u8, u8)]),
    /// Decision tree for the given length, see [`low_comparisons`].
    LowComparisons(usize),
}

impl Routine {
    /// Executes the routine on `v`, which must have exactly the length the routine was registered
    /// for.
    #[inline]
    pub fn run<T, F>(&self, v: &mut [T], is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        match *self {
            Routine::Noop => {}
            Routine::Network(network) => sorting_network::run(v, network, is_less),
            Routine::LowComparisons(len) => {
                debug_assert_eq!(v.len(), len);
                low_comparisons::sort(v, is_less);
            }
        }
    }

    /// Network routines may be reordered or executed concurrently, decision trees may not.
    pub fn is_network(&self) -> bool {
        matches!(self, Routine::Network(_))
    }
}

/// Immutable mapping from an exact element count to the routine that sorts it.
#[derive(Debug, Clone, Default)]
pub struct RoutineTable {
    entries: Vec<Option<Routine>>,
}

impl RoutineTable {
    /// A table without any entries, every length goes to the fallback.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registers `routine` for inputs of exactly `len` elements, replacing any previous entry.
    pub fn with(mut self, len: usize, routine: Routine) -> Self {
        if self.entries.len() <= len {
            self.entries.resize(len + 1, None);
        }
        self.entries[len] = Some(routine);
        self
    }

    /// Every registered sorting network.
    pub fn sorting_networks() -> Self {
        sorting_network::LENGTHS.iter().fold(
            Self::empty().with(0, Routine::Noop).with(1, Routine::Noop),
            |table, &len| match sorting_network::network(len) {
                Some(network) => table.with(len, Routine::Network(network)),
                None => table,
            },
        )
    }

    /// Decision trees for every length up to [`low_comparisons::MAX_LEN`].
    pub fn low_comparisons() -> Self {
        (2..=low_comparisons::MAX_LEN).fold(
            Self::empty().with(0, Routine::Noop).with(1, Routine::Noop),
            |table, len| table.with(len, Routine::LowComparisons(len)),
        )
    }

    /// Networks for the smallest lengths, where they already use the minimal number of
    /// comparisons, decision trees for 5 - 8, and networks again above that.
    pub fn hybrid() -> Self {
        (5..=low_comparisons::MAX_LEN).fold(Self::sorting_networks(), |table, len| {
            table.with(len, Routine::LowComparisons(len))
        })
    }

    /// Returns the routine for exactly `len` elements, if there is one.
    #[inline]
    pub fn get(&self, len: usize) -> Option<Routine> {
        self.entries.get(len).copied().flatten()
    }

    /// Iterates over every registered length in ascending order.
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(len, entry)| entry.map(|_| len))
    }
}

static SORTING_NETWORKS: Lazy<RoutineTable> = Lazy::new(RoutineTable::sorting_networks);
static LOW_COMPARISONS: Lazy<RoutineTable> = Lazy::new(RoutineTable::low_comparisons);
static HYBRID: Lazy<RoutineTable> = Lazy::new(RoutineTable::hybrid);

pub fn sorting_networks() -> &'static RoutineTable {
    &SORTING_NETWORKS
}

pub fn low_comparisons() -> &'static RoutineTable {
    &LOW_COMPARISONS
}

/// The table used by [`sort_n`] and friends.
pub fn hybrid() -> &'static RoutineTable {
    &HYBRID
}

/// General purpose sort used for lengths without a fixed routine.
pub trait FallbackSorter {
    fn sort_by_less<T, F>(&mut self, v: &mut [T], is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool;
}

impl<S: FallbackSorter + ?Sized> FallbackSorter for &mut S {
    #[inline]
    fn sort_by_less<T, F>(&mut self, v: &mut [T], is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        (**self).sort_by_less(v, is_less);
    }
}

/// `slice::sort_unstable_by`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdUnstable;

impl FallbackSorter for StdUnstable {
    #[inline]
    fn sort_by_less<T, F>(&mut self, v: &mut [T], is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        v.sort_unstable_by(|a, b| {
            if is_less(a, b) {
                Ordering::Less
            } else if is_less(b, a) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
    }
}

/// The heap engine of this crate, never allocates.
#[derive(Debug, Default, Clone, Copy)]
pub struct Heapsort;

impl FallbackSorter for Heapsort {
    #[inline]
    fn sort_by_less<T, F>(&mut self, v: &mut [T], is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        heapsort::heapsort(v, is_less);
    }
}

/// Looks up the routine for the exact input length and runs it, or delegates to the fallback.
///
/// Holds no state besides its configuration and never allocates on its own.
#[derive(Debug, Clone)]
pub struct Dispatcher<'t, S = StdUnstable> {
    table: &'t RoutineTable,
    fallback: S,
}

impl Default for Dispatcher<'static, StdUnstable> {
    fn default() -> Self {
        Self::new(hybrid(), StdUnstable)
    }
}

impl<'t, S: FallbackSorter> Dispatcher<'t, S> {
    pub fn new(table: &'t RoutineTable, fallback: S) -> Self {
        Self { table, fallback }
    }

    pub fn table(&self) -> &'t RoutineTable {
        self.table
    }

    /// Sorts `v` whose length is only known at runtime.
    #[inline]
    pub fn sort_with<T, F>(&mut self, v: &mut [T], is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        match self.table.get(v.len()) {
            Some(routine) => routine.run(v, is_less),
            None => {
                trace!(len = v.len(), "no fixed-size routine, delegating to fallback sorter");
                self.fallback.sort_by_less(v, is_less);
            }
        }
    }

    /// Sorts exactly `N` elements.
    #[inline]
    pub fn sort_array<const N: usize, T, F>(&mut self, arr: &mut [T; N], is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.sort_with(arr.as_mut_slice(), is_less);
    }
}

/// Sorts exactly `N` elements in their natural order.
#[inline]
pub fn sort_n<const N: usize, T: Ord>(arr: &mut [T; N]) {
    Dispatcher::new(hybrid(), StdUnstable).sort_array(arr, &mut order::natural());
}

/// Sorts exactly `N` elements with a comparator function.
#[inline]
pub fn sort_n_by<const N: usize, T, F>(arr: &mut [T; N], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    Dispatcher::new(hybrid(), StdUnstable).sort_array(arr, &mut order::from_compare(compare));
}

/// Sorts exactly `N` elements by the natural order of a projected key.
#[inline]
pub fn sort_n_by_key<const N: usize, T, K, P>(arr: &mut [T; N], key: P)
where
    K: Ord,
    P: FnMut(&T) -> K,
{
    Dispatcher::new(hybrid(), StdUnstable).sort_array(arr, &mut order::by_key(key));
}

/// Sorts `v` with the default table, lengths without a routine go to `fallback`.
#[inline]
pub fn sort_exact<T, F, S>(v: &mut [T], is_less: &mut F, fallback: S)
where
    F: FnMut(&T, &T) -> bool,
    S: FallbackSorter,
{
    Dispatcher::new(hybrid(), fallback).sort_with(v, is_less);
}
