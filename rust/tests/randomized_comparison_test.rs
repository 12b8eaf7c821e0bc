use bplus_index::BPlusTreeIndex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

const ORDERS: [usize; 6] = [3, 4, 5, 7, 16, 64];

/// Build a multiset oracle the same way the index stores keys.
fn oracle(keys: &[i64]) -> BTreeMap<i64, usize> {
    let mut counts = BTreeMap::new();
    for &key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

fn expected_sequence(counts: &BTreeMap<i64, usize>) -> Vec<i64> {
    counts
        .iter()
        .flat_map(|(&key, &count)| std::iter::repeat(key).take(count))
        .collect()
}

#[test]
fn test_random_inserts_match_btreemap() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for order in ORDERS {
        for _round in 0..5 {
            let count = rng.gen_range(0..2_000);
            let keys: Vec<i64> = (0..count).map(|_| rng.gen_range(-1_000..1_000)).collect();

            let mut index = BPlusTreeIndex::new(order).unwrap();
            for &key in &keys {
                index.insert(key);
            }

            let counts = oracle(&keys);
            let actual: Vec<i64> = index.display().into_iter().flatten().collect();
            assert_eq!(actual, expected_sequence(&counts), "order {}", order);
            assert_eq!(index.len(), keys.len());

            for probe in -1_050..1_050 {
                assert_eq!(
                    index.search(&probe),
                    counts.contains_key(&probe),
                    "order {} probe {}",
                    order,
                    probe
                );
            }

            if let Err(e) = index.validate() {
                index.print_node_chain();
                panic!("order {}: {}", order, e);
            }
        }
    }
}

#[test]
fn test_shuffled_unique_keys() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut keys: Vec<i64> = (0..5_000).collect();
    keys.shuffle(&mut rng);

    for order in ORDERS {
        let mut index = BPlusTreeIndex::new(order).unwrap();
        index.extend(keys.iter().copied());

        let sorted: Vec<i64> = index.keys().copied().collect();
        assert_eq!(sorted, (0..5_000).collect::<Vec<_>>());
        assert!(index.check_invariants(), "order {}", order);
        assert!(index.leaf_sizes().iter().all(|&size| size > 0 && size < order));
        assert_eq!(index.first(), Some(&0));
        assert_eq!(index.last(), Some(&4_999));
    }
}

#[test]
fn test_invariants_hold_after_every_insert() {
    let mut rng = StdRng::seed_from_u64(7);

    for order in [3, 4, 5] {
        let mut index = BPlusTreeIndex::new(order).unwrap();
        for _ in 0..400 {
            // A narrow key range forces many duplicates and equal separators.
            let key: i64 = rng.gen_range(0..40);
            index
                .try_insert(key)
                .unwrap_or_else(|e| panic!("order {} key {}: {}", order, key, e));
        }
        assert_eq!(index.len(), 400);
    }
}

#[test]
fn test_rebuild_after_clear_matches_fresh_index() {
    let mut rng = StdRng::seed_from_u64(99);
    let keys: Vec<i64> = (0..1_000).map(|_| rng.gen_range(0..10_000)).collect();

    let mut reused = BPlusTreeIndex::new(5).unwrap();
    reused.extend((0..300).map(|k: i64| k * 3));
    reused.clear();
    reused.extend(keys.iter().copied());

    let mut fresh = BPlusTreeIndex::new(5).unwrap();
    fresh.extend(keys.iter().copied());

    assert_eq!(reused.display(), fresh.display());
    assert_eq!(reused.height(), fresh.height());
    assert_eq!(reused.count_nodes_in_tree(), fresh.count_nodes_in_tree());
}
