use bplus_index::{BPlusTreeError, BPlusTreeIndex, NodeRef, MIN_ORDER};

/// Walk every node and check the per-node shape rules through the public API.
fn assert_node_shapes(index: &BPlusTreeIndex<i64>) {
    let mut stack: Vec<NodeRef> = index.root().into_iter().collect();

    while let Some(node) = stack.pop() {
        match node {
            NodeRef::Leaf(id) => {
                let leaf = index.get_leaf(id).unwrap();
                assert!(leaf.len() < index.order(), "leaf {} over capacity", id);
            }
            NodeRef::Branch(id) => {
                let branch = index.get_branch(id).unwrap();
                assert!(branch.len() < index.order(), "branch {} over capacity", id);
                assert_eq!(branch.children().len(), branch.keys().len() + 1);
                stack.extend(branch.children().iter().copied());
            }
        }
    }
}

#[test]
fn test_order_three_scenario() {
    let mut index = BPlusTreeIndex::new(3).unwrap();
    for key in [5, 2, 8, 1, 9, 3] {
        index.insert(key);
    }

    let keys: Vec<i64> = index.display().into_iter().flatten().collect();
    assert_eq!(keys, vec![1, 2, 3, 5, 8, 9]);
    assert!(index.search(&8));
    assert!(!index.search(&7));
    assert_node_shapes(&index);
}

#[test]
fn test_single_key_scenario() {
    let mut index = BPlusTreeIndex::new(3).unwrap();
    index.insert(42);

    assert!(index.is_leaf_root());
    assert_eq!(index.display(), vec![vec![42_i64]]);
}

#[test]
fn test_empty_index_scenario() {
    let index = BPlusTreeIndex::<i64>::new(3).unwrap();

    for key in [-1, 0, 1, i64::MAX, i64::MIN] {
        assert!(!index.search(&key));
    }
    assert!(index.display().is_empty());
}

#[test]
fn test_rejects_small_orders() {
    for order in 0..MIN_ORDER {
        match BPlusTreeIndex::<i64>::new(order) {
            Err(BPlusTreeError::InvalidConfiguration(msg)) => {
                assert!(msg.contains(&order.to_string()), "{}", msg)
            }
            other => panic!("order {} accepted: {:?}", order, other.map(|_| ())),
        }
    }
}

#[test]
fn test_height_grows_one_level_at_a_time() {
    for order in [3, 4, 5, 8] {
        let mut index = BPlusTreeIndex::new(order).unwrap();
        let mut previous_height = 0;
        let mut first_split_seen = false;

        for key in 0..500_i64 {
            let was_leaf_root = index.is_leaf_root();
            index.insert(key * 7 % 311);
            let height = index.height();

            assert!(
                height == previous_height || height == previous_height + 1,
                "order {}: height jumped from {} to {}",
                order,
                previous_height,
                height
            );

            // The root stops being a leaf exactly when that leaf first splits.
            if was_leaf_root && !index.is_leaf_root() {
                assert!(!first_split_seen);
                assert_eq!(height, 2);
                assert_eq!(index.len(), order);
                first_split_seen = true;
            }
            previous_height = height;
        }
        assert!(first_split_seen);
    }
}

#[test]
fn test_separators_route_right() {
    let mut index = BPlusTreeIndex::new(3).unwrap();
    index.extend([10_i64, 20, 30]);

    // Leaves are [10] and [20, 30] under separator 20.
    let root = index.root().unwrap();
    let branch = index.get_branch(root.id()).unwrap();
    assert_eq!(branch.keys(), &[20]);

    let right = branch.get_child(&20).unwrap();
    assert_eq!(index.get_leaf(right.id()).unwrap().keys(), &[20, 30]);
    let left = branch.get_child(&19).unwrap();
    assert_eq!(index.get_leaf(left.id()).unwrap().keys(), &[10]);
}

#[test]
fn test_duplicates_stay_adjacent_and_searchable() {
    let mut index = BPlusTreeIndex::new(3).unwrap();
    let inserted = [4_i64, 4, 1, 4, 9, 4, 4, 2, 4, 9, 9];
    index.extend(inserted);

    let mut expected = inserted.to_vec();
    expected.sort();
    let keys: Vec<i64> = index.keys().copied().collect();
    assert_eq!(keys, expected);

    for key in inserted {
        assert!(index.search(&key));
    }
    assert!(!index.search(&3));
    assert!(index.validate().is_ok());
    assert_node_shapes(&index);
}

#[test]
fn test_descending_and_ascending_inserts() {
    let mut ascending = BPlusTreeIndex::new(4).unwrap();
    let mut descending = BPlusTreeIndex::new(4).unwrap();
    for key in 0..200_i64 {
        ascending.insert(key);
        descending.insert(199 - key);
    }

    let expected: Vec<i64> = (0..200).collect();
    assert_eq!(ascending.keys().copied().collect::<Vec<_>>(), expected);
    assert_eq!(descending.keys().copied().collect::<Vec<_>>(), expected);
    assert_node_shapes(&ascending);
    assert_node_shapes(&descending);
    assert!(ascending.check_invariants());
    assert!(descending.check_invariants());
}

#[test]
fn test_display_renders_leaf_groups() {
    let mut index = BPlusTreeIndex::new(3).unwrap();
    index.extend([5_i64, 2, 8, 1, 9, 3]);

    assert_eq!(index.to_string(), "[1] [2 3] [5] [8 9]");
    assert_eq!(
        index.display(),
        vec![vec![1], vec![2, 3], vec![5], vec![8, 9]]
    );
}
