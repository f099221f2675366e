//! Sorting networks for small exact lengths.
//!
//! A network is a flat list of compare-exchange pairs `(i, j)` with `i < j`. After
//! `swap_if_less(i, j)` the smaller element sits at `i`. No pair depends on the outcome of another,
//! pairs that touch disjoint indices may run in any order or in parallel. The lists below are
//! grouped so that every line is a run of such independent pairs.
//!
//! Networks for 9 and 26 inputs stem from cpp-sort. 11 and 13 - 15 are the 12 and 16 input
//! networks with every pair that touches a missing input removed, those pairs never swap when the
//! missing inputs are thought of as `+inf`.

use paste::paste;

macro_rules! sorting_networks {
    ($($n:literal => [$(($a:literal, $b:literal)),* $(,)?]),* $(,)?) => {
        paste! {
            $(
                const [<NETWORK_ $n>]: &[(u8, u8)] = &[$(($a, $b)),*];
            )*
        }

        /// Returns the sorting network for exactly `n` inputs, if one is registered.
        pub fn network(n: usize) -> Option<&'static [(u8, u8)]> {
            paste! {
                match n {
                    $($n => Some([<NETWORK_ $n>]),)*
                    _ => None,
                }
            }
        }

        /// Every length that has a registered network.
        pub const LENGTHS: &[usize] = &[$($n),*];
    };
}

sorting_networks! {
    2 => [
        (0, 1),
    ],
    3 => [
        (0, 2),
        (0, 1),
        (1, 2),
    ],
    4 => [
        (0, 2), (1, 3),
        (0, 1), (2, 3),
        (1, 2),
    ],
    5 => [
        (0, 3), (1, 4),
        (0, 2), (1, 3),
        (0, 1), (2, 4),
        (1, 2), (3, 4),
        (2, 3),
    ],
    6 => [
        (0, 5), (1, 3), (2, 4),
        (1, 2), (3, 4),
        (0, 3), (2, 5),
        (0, 1), (2, 3), (4, 5),
        (1, 2), (3, 4),
    ],
    7 => [
        (0, 6), (2, 3), (4, 5),
        (0, 2), (1, 4), (3, 6),
        (0, 1), (2, 5), (3, 4),
        (1, 2), (4, 6),
        (2, 3), (4, 5),
        (1, 2), (3, 4), (5, 6),
    ],
    8 => [
        (0, 2), (1, 3), (4, 6), (5, 7),
        (0, 4), (1, 5), (2, 6), (3, 7),
        (0, 1), (2, 3), (4, 5), (6, 7),
        (2, 4), (3, 5),
        (1, 4), (3, 6),
        (1, 2), (3, 4), (5, 6),
    ],
    9 => [
        (0, 1), (3, 4), (6, 7),
        (1, 2), (4, 5), (7, 8),
        (0, 1), (3, 4), (6, 7),
        (0, 3),
        (3, 6),
        (0, 3), (1, 4),
        (4, 7),
        (1, 4), (2, 5),
        (5, 8),
        (2, 5), (1, 3),
        (5, 7), (2, 6),
        (4, 6),
        (2, 4),
        (2, 3), (5, 6),
    ],
    10 => [
        (0, 8), (1, 9), (2, 7), (3, 5), (4, 6),
        (0, 2), (1, 4), (5, 8), (7, 9),
        (0, 3), (2, 4), (5, 7), (6, 9),
        (0, 1), (3, 6), (8, 9),
        (1, 5), (2, 3), (4, 8), (6, 7),
        (1, 2), (3, 5), (4, 6), (7, 8),
        (2, 3), (4, 5), (6, 7),
        (3, 4), (5, 6),
    ],
    11 => [
        (0, 8), (1, 7), (2, 6), (4, 10), (5, 9),
        (0, 1), (2, 5), (3, 4), (6, 9), (7, 8),
        (0, 2), (1, 6), (5, 10),
        (0, 3), (1, 2), (4, 6), (5, 7), (9, 10),
        (1, 4), (3, 5), (6, 8), (7, 10),
        (1, 3), (2, 5), (6, 9), (8, 10),
        (2, 3), (4, 5), (6, 7), (8, 9),
        (4, 6), (5, 7),
        (3, 4), (5, 6), (7, 8),
    ],
    12 => [
        (0, 8), (1, 7), (2, 6), (3, 11), (4, 10), (5, 9),
        (0, 1), (2, 5), (3, 4), (6, 9), (7, 8), (10, 11),
        (0, 2), (1, 6), (5, 10), (9, 11),
        (0, 3), (1, 2), (4, 6), (5, 7), (8, 11), (9, 10),
        (1, 4), (3, 5), (6, 8), (7, 10),
        (1, 3), (2, 5), (6, 9), (8, 10),
        (2, 3), (4, 5), (6, 7), (8, 9),
        (4, 6), (5, 7),
        (3, 4), (5, 6), (7, 8),
    ],
    13 => [
        (1, 12), (4, 8), (5, 6), (7, 11), (9, 10),
        (0, 5), (1, 7), (2, 9), (3, 4), (11, 12),
        (0, 1), (2, 3), (4, 5), (6, 8), (7, 9), (10, 11),
        (0, 2), (1, 3), (4, 10), (5, 11), (6, 7), (8, 9),
        (1, 2), (3, 12), (4, 6), (5, 7), (8, 10), (9, 11),
        (1, 4), (2, 6), (5, 8), (7, 10),
        (2, 4), (3, 6), (9, 12),
        (3, 5), (6, 8), (7, 9), (10, 12),
        (3, 4), (5, 6), (7, 8), (9, 10), (11, 12),
        (6, 7), (8, 9),
    ],
    14 => [
        (0, 13), (1, 12), (4, 8), (5, 6), (7, 11), (9, 10),
        (0, 5), (1, 7), (2, 9), (3, 4), (6, 13), (11, 12),
        (0, 1), (2, 3), (4, 5), (6, 8), (7, 9), (10, 11), (12, 13),
        (0, 2), (1, 3), (4, 10), (5, 11), (6, 7), (8, 9),
        (1, 2), (3, 12), (4, 6), (5, 7), (8, 10), (9, 11),
        (1, 4), (2, 6), (5, 8), (7, 10), (9, 13),
        (2, 4), (3, 6), (9, 12), (11, 13),
        (3, 5), (6, 8), (7, 9), (10, 12),
        (3, 4), (5, 6), (7, 8), (9, 10), (11, 12),
        (6, 7), (8, 9),
    ],
    15 => [
        (0, 13), (1, 12), (3, 14), (4, 8), (5, 6), (7, 11), (9, 10),
        (0, 5), (1, 7), (2, 9), (3, 4), (6, 13), (8, 14), (11, 12),
        (0, 1), (2, 3), (4, 5), (6, 8), (7, 9), (10, 11), (12, 13),
        (0, 2), (1, 3), (4, 10), (5, 11), (6, 7), (8, 9), (12, 14),
        (1, 2), (3, 12), (4, 6), (5, 7), (8, 10), (9, 11), (13, 14),
        (1, 4), (2, 6), (5, 8), (7, 10), (9, 13), (11, 14),
        (2, 4), (3, 6), (9, 12), (11, 13),
        (3, 5), (6, 8), (7, 9), (10, 12),
        (3, 4), (5, 6), (7, 8), (9, 10), (11, 12),
        (6, 7), (8, 9),
    ],
    16 => [
        (0, 13), (1, 12), (2, 15), (3, 14), (4, 8), (5, 6), (7, 11), (9, 10),
        (0, 5), (1, 7), (2, 9), (3, 4), (6, 13), (8, 14), (10, 15), (11, 12),
        (0, 1), (2, 3), (4, 5), (6, 8), (7, 9), (10, 11), (12, 13), (14, 15),
        (0, 2), (1, 3), (4, 10), (5, 11), (6, 7), (8, 9), (12, 14), (13, 15),
        (1, 2), (3, 12), (4, 6), (5, 7), (8, 10), (9, 11), (13, 14),
        (1, 4), (2, 6), (5, 8), (7, 10), (9, 13), (11, 14),
        (2, 4), (3, 6), (9, 12), (11, 13),
        (3, 5), (6, 8), (7, 9), (10, 12),
        (3, 4), (5, 6), (7, 8), (9, 10), (11, 12),
        (6, 7), (8, 9),
    ],
    26 => [
        (0, 25), (1, 3), (2, 9), (4, 19), (5, 18), (6, 21), (7, 20), (8, 10), (11, 12), (13, 14),
        (15, 17), (16, 23), (22, 24),
        (1, 4), (2, 16), (3, 19), (5, 13), (6, 22), (7, 11), (8, 15), (9, 23), (10, 17), (12, 20),
        (14, 18), (21, 24),
        (1, 5), (2, 8), (3, 14), (4, 13), (6, 7), (9, 15), (10, 16), (11, 22), (12, 21), (17, 23),
        (18, 19), (20, 24),
        (0, 10), (1, 6), (3, 7), (4, 11), (5, 12), (13, 20), (14, 21), (15, 25), (18, 22), (19, 24),
        (0, 4), (8, 10), (12, 13), (15, 17), (21, 25),
        (0, 2), (4, 8), (10, 12), (13, 15), (17, 21), (23, 25),
        (0, 1), (2, 3), (4, 5), (8, 14), (9, 13), (11, 17), (12, 16), (20, 21), (22, 23), (24, 25),
        (1, 4), (3, 10), (6, 9), (7, 13), (8, 11), (12, 18), (14, 17), (15, 22), (16, 19), (21, 24),
        (2, 6), (3, 8), (5, 7), (9, 12), (13, 16), (17, 22), (18, 20), (19, 23),
        (1, 2), (4, 6), (5, 9), (7, 10), (11, 12), (13, 14), (15, 18), (16, 20), (19, 21), (23, 24),
        (2, 4), (3, 5), (7, 13), (8, 9), (10, 14), (11, 15), (12, 18), (16, 17), (20, 22), (21, 23),
        (3, 4), (6, 9), (7, 11), (10, 12), (13, 15), (14, 18), (16, 19), (21, 22),
        (5, 7), (6, 8), (9, 13), (10, 11), (12, 16), (14, 15), (17, 19), (18, 20),
        (5, 6), (7, 8), (9, 10), (11, 13), (12, 14), (15, 16), (17, 18), (19, 20),
        (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15), (16, 17), (18, 19), (20, 21),
    ],
}

/// Applies `network` to `v`.
///
/// Panics if the network touches an index outside of `v`.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn run<T, F>(v: &mut [T], network: &[(u8, u8)], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for &(a, b) in network {
        swap_if_less(v, a as usize, b as usize, is_less);
    }
}

/// Splits `network` into consecutive runs of pairs that touch pairwise disjoint indices.
///
/// The pairs inside a run can be executed in any order, or concurrently, without changing the
/// result.
pub fn layers(network: &[(u8, u8)]) -> Vec<&[(u8, u8)]> {
    let mut layers = Vec::new();
    // One slot per possible `u8` index.
    let mut used = [false; 256];
    let mut layer_start = 0;

    for (i, &(a, b)) in network.iter().enumerate() {
        let (a, b) = (a as usize, b as usize);
        if used[a] || used[b] {
            layers.push(&network[layer_start..i]);
            layer_start = i;
            used = [false; 256];
        }
        used[a] = true;
        used[b] = true;
    }

    if layer_start < network.len() {
        layers.push(&network[layer_start..]);
    }

    layers
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
