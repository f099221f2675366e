use std::cell::Cell;

use rand::distributions::Uniform;
use rand::prelude::*;
use sort_kernel_rs::sort_n::{
    self, low_comparisons, sorting_network, Dispatcher, FallbackSorter, Heapsort, Routine,
    RoutineTable, StdUnstable,
};
use sort_test_tools::patterns;

fn for_each_permutation(len: usize, mut f: impl FnMut(&[usize])) {
    // Heap's algorithm, iterative.
    let mut v = (0..len).collect::<Vec<_>>();
    let mut c = vec![0; len];
    f(&v);

    let mut i = 1;
    while i < len {
        if c[i] < i {
            if i % 2 == 0 {
                v.swap(0, i);
            } else {
                v.swap(c[i], i);
            }
            f(&v);
            c[i] += 1;
            i = 1;
        } else {
            c[i] = 0;
            i += 1;
        }
    }
}

// `patterns` reseeds on every call, so repeated calls return the same input. Loops that want
// fresh inputs draw them from one stream instead.
fn new_rng() -> StdRng {
    StdRng::seed_from_u64(patterns::random_seed())
}

fn random_vec(rng: &mut StdRng, len: usize, range: Uniform<i32>) -> Vec<i32> {
    (0..len).map(|_| range.sample(rng)).collect()
}

/// Fresh inputs of `len` elements, unique-ish and duplicate heavy.
fn input_stream(rng: &mut StdRng, len: usize) -> [Vec<i32>; 2] {
    [
        random_vec(rng, len, Uniform::from(i32::MIN..=i32::MAX)),
        random_vec(rng, len, Uniform::from(0..3)),
    ]
}

fn is_sorted<T: Ord>(v: &[T]) -> bool {
    v.windows(2).all(|w| w[0] <= w[1])
}

#[test]
fn networks_sort_every_binary_input() {
    // A comparator network sorts all inputs iff it sorts all inputs of zeros and ones.
    for &len in sorting_network::LENGTHS.iter().filter(|&&len| len <= 16) {
        let network = sorting_network::network(len).unwrap();
        for bits in 0u32..(1 << len) {
            let mut v = (0..len).map(|i| (bits >> i) & 1).collect::<Vec<_>>();
            sorting_network::run(&mut v, network, &mut |a, b| a < b);
            assert!(is_sorted(&v), "len: {len} input: {bits:#b}");
        }
    }
}

#[test]
#[ignore = "2^26 inputs, run with --release --ignored"]
fn network_26_sorts_every_binary_input() {
    let network = sorting_network::network(26).unwrap();
    let mut v = [0u32; 26];
    for bits in 0u32..(1 << 26) {
        for (i, slot) in v.iter_mut().enumerate() {
            *slot = (bits >> i) & 1;
        }
        sorting_network::run(&mut v, network, &mut |a, b| a < b);
        assert!(is_sorted(&v), "input: {bits:#b}");
    }
}

#[test]
fn input_stream_yields_fresh_inputs() {
    let mut rng = new_rng();
    let [first, _] = input_stream(&mut rng, 26);
    let [second, _] = input_stream(&mut rng, 26);
    assert_ne!(first, second);
}

#[test]
fn network_pairs_are_ordered_and_in_bounds() {
    for &len in sorting_network::LENGTHS {
        let network = sorting_network::network(len).unwrap();
        assert!(network.iter().all(|&(a, b)| a < b && (b as usize) < len));
    }

    assert_eq!(sorting_network::network(9).unwrap().len(), 25);
    assert_eq!(sorting_network::network(26).unwrap().len(), 139);
    assert!(sorting_network::network(17).is_none());
}

#[test]
fn network_26_sorts_random_and_duplicate_inputs() {
    let network = sorting_network::network(26).unwrap();
    let mut rng = new_rng();
    for _ in 0..2_000 {
        let [unique, dups] = input_stream(&mut rng, 26);
        for mut v in [unique, dups, random_vec(&mut rng, 26, Uniform::from(0..8))] {
            let mut expected = v.clone();
            expected.sort();
            sorting_network::run(&mut v, network, &mut |a, b| a < b);
            assert_eq!(v, expected);
        }
    }
}

#[test]
fn layers_partition_the_network_into_disjoint_runs() {
    for &len in sorting_network::LENGTHS {
        let network = sorting_network::network(len).unwrap();
        let layers = sorting_network::layers(network);

        assert_eq!(layers.concat(), network);
        for layer in &layers {
            let mut seen = vec![false; len];
            for &(a, b) in *layer {
                assert!(!seen[a as usize] && !seen[b as usize], "len: {len}");
                seen[a as usize] = true;
                seen[b as usize] = true;
            }
        }
    }

    assert!(sorting_network::layers(&[]).is_empty());
}

#[test]
fn layers_handle_every_u8_index() {
    let network = [(0, 64), (63, 200), (1, 255), (64, 255), (2, 3)];
    let layers = sorting_network::layers(&network);
    assert_eq!(layers, [&network[..3], &network[3..]]);
}

#[test]
fn low_comparison_trees_sort_every_permutation_with_minimal_comparisons() {
    const WORST_CASE: [usize; low_comparisons::MAX_LEN + 1] = [0, 0, 1, 3, 5, 7, 10, 13, 16];

    for len in 0..=low_comparisons::MAX_LEN {
        let mut worst = 0;
        for_each_permutation(len, |perm| {
            let mut v = perm.to_vec();
            let mut comparisons = 0;
            low_comparisons::sort(&mut v, &mut |a, b| {
                comparisons += 1;
                a < b
            });
            assert!(is_sorted(&v), "{perm:?} -> {v:?}");
            worst = worst.max(comparisons);
        });
        assert_eq!(worst, WORST_CASE[len], "len: {len}");
    }
}

#[test]
fn low_comparison_trees_handle_duplicates() {
    for len in 0..=low_comparisons::MAX_LEN {
        let mut rng = new_rng();
        for _ in 0..500 {
            let mut v = random_vec(&mut rng, len, Uniform::from(0..3));
            let mut expected = v.clone();
            expected.sort();
            low_comparisons::sort(&mut v, &mut |a, b| a < b);
            assert_eq!(v, expected);
        }
    }
}

#[test]
#[should_panic]
fn low_comparison_tree_rejects_long_input() {
    let mut v = [0; low_comparisons::MAX_LEN + 1];
    low_comparisons::sort(&mut v, &mut |a, b| a < b);
}

#[test]
fn every_registered_routine_sorts_its_length() {
    for table in [
        sort_n::sorting_networks(),
        sort_n::low_comparisons(),
        sort_n::hybrid(),
    ] {
        for len in table.lengths() {
            let routine = table.get(len).unwrap();
            let mut rng = new_rng();
            for _ in 0..200 {
                for mut v in input_stream(&mut rng, len) {
                    let mut expected = v.clone();
                    expected.sort();
                    routine.run(&mut v, &mut |a, b| a < b);
                    assert_eq!(v, expected, "len: {len} routine: {routine:?}");
                }
            }
        }
    }
}

#[test]
fn table_contents() {
    let networks = sort_n::sorting_networks().lengths().collect::<Vec<_>>();
    let mut expected = vec![0, 1];
    expected.extend_from_slice(sorting_network::LENGTHS);
    assert_eq!(networks, expected);

    assert_eq!(
        sort_n::low_comparisons().lengths().collect::<Vec<_>>(),
        (0..=low_comparisons::MAX_LEN).collect::<Vec<_>>()
    );

    let hybrid = sort_n::hybrid();
    assert_eq!(hybrid.get(4), sort_n::sorting_networks().get(4));
    assert_eq!(hybrid.get(6), Some(Routine::LowComparisons(6)));
    assert!(hybrid.get(16).unwrap().is_network());
    assert!(hybrid.get(26).unwrap().is_network());
    assert_eq!(hybrid.get(17), None);

    let custom = RoutineTable::empty().with(3, Routine::LowComparisons(3));
    assert_eq!(custom.get(3), Some(Routine::LowComparisons(3)));
    assert_eq!(custom.get(2), None);
    assert_eq!(custom.lengths().collect::<Vec<_>>(), [3]);
}

#[test]
fn sort_n_small_example() {
    let mut arr = [3, 1, 2];
    sort_n::sort_n(&mut arr);
    assert_eq!(arr, [1, 2, 3]);

    let mut empty: [i32; 0] = [];
    sort_n::sort_n(&mut empty);

    let mut single = [7];
    sort_n::sort_n(&mut single);
    assert_eq!(single, [7]);
}

#[test]
fn empty_table_routes_everything_to_fallback() {
    let table = RoutineTable::empty();
    let mut arr = [3, 1, 2];
    Dispatcher::new(&table, StdUnstable).sort_array(&mut arr, &mut |a, b| a < b);
    assert_eq!(arr, [1, 2, 3]);

    let mut arr = [3, 1, 2];
    Dispatcher::new(&table, Heapsort).sort_array(&mut arr, &mut |a, b| a < b);
    assert_eq!(arr, [1, 2, 3]);
}

#[test]
fn sort_n_26_leaves_sorted_input_untouched() {
    let sorted: [i32; 26] = std::array::from_fn(|i| i as i32);
    let mut arr = sorted;
    let swaps = Cell::new(0);

    // A network only exchanges a pair when `is_less(v[j], v[i])` holds, which never happens on
    // sorted input.
    Dispatcher::new(sort_n::hybrid(), StdUnstable).sort_array(&mut arr, &mut |a, b| {
        let less = a < b;
        if less {
            swaps.set(swaps.get() + 1);
        }
        less
    });

    assert_eq!(arr, sorted);
    assert_eq!(swaps.get(), 0);
}

#[test]
fn sort_n_by_and_by_key() {
    let mut arr: [i32; 16] = std::array::from_fn(|i| ((i * 7_919) % 31) as i32);
    sort_n::sort_n_by(&mut arr, |a: &i32, b: &i32| b.cmp(a));
    assert!(arr.windows(2).all(|w| w[0] >= w[1]));

    let mut pairs: [(i32, u8); 8] = [
        (5, 0),
        (1, 1),
        (4, 2),
        (1, 3),
        (9, 4),
        (0, 5),
        (3, 6),
        (2, 7),
    ];
    sort_n::sort_n_by_key(&mut pairs, |p| p.0);
    assert!(pairs.windows(2).all(|w| w[0].0 <= w[1].0));
}

#[test]
fn unregistered_length_matches_fallback_exactly() {
    // Duplicate keys with distinguishable payloads, the unstable fallback decides their order.
    let original: [(i32, usize); 17] = std::array::from_fn(|i| ((i as i32 * 7) % 5, i));

    let mut via_sort_n = original;
    sort_n::sort_n_by_key(&mut via_sort_n, |p| p.0);

    let mut direct = original;
    direct.sort_unstable_by(|a, b| a.0.cmp(&b.0));

    assert_eq!(via_sort_n, direct);
}

#[derive(Default)]
struct CountingFallback {
    calls: usize,
}

impl FallbackSorter for CountingFallback {
    fn sort_by_less<T, F>(&mut self, v: &mut [T], is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.calls += 1;
        Heapsort.sort_by_less(v, is_less);
    }
}

#[test]
fn fallback_runs_only_for_unregistered_lengths() {
    let mut fallback = CountingFallback::default();
    let mut dispatcher = Dispatcher::new(sort_n::hybrid(), &mut fallback);

    for len in 0..=40 {
        let mut v = patterns::random(len);
        let mut expected = v.clone();
        expected.sort();
        dispatcher.sort_with(&mut v, &mut |a, b| a < b);
        assert_eq!(v, expected);
    }

    let registered = sort_n::hybrid().lengths().filter(|&len| len <= 40).count();
    assert_eq!(fallback.calls, 41 - registered);
}

#[test]
fn sort_exact_with_heapsort_fallback() {
    for len in [0, 5, 9, 17, 26, 100] {
        let mut v = patterns::random_zipf(len, 1.0);
        let mut expected = v.clone();
        expected.sort();
        sort_n::sort_exact(&mut v, &mut |a, b| a < b, Heapsort);
        assert_eq!(v, expected);
    }
}
