use avl_collections::avl_tree::AvlSet;
use rand::Rng;
use std::vec::Vec;

const NUM_OF_OPERATIONS: usize = 100_000;

// An avl tree with n nodes has fewer than 1.4405 * log2(n + 2) - 0.3277 levels. Heights here
// count edges, so a tree has one more level than its height.
fn level_bound(len: usize) -> f64 {
    1.4405 * ((len + 2) as f64).log2() - 0.3277
}

fn is_within_avl_bound<T: Ord>(set: &AvlSet<T>) -> bool {
    f64::from(set.height() + 1) < level_bound(set.len())
}

#[test]
fn int_test_avl_set() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = AvlSet::new();
    let mut expected = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen::<u32>();

        set.insert(key);
        expected.push(key);
    }

    expected.sort();
    expected.dedup();

    assert_eq!(set.len(), expected.len());
    assert!(is_within_avl_bound(&set));

    assert_eq!(set.min(), Some(&expected[0]));
    assert_eq!(set.max(), Some(&expected[expected.len() - 1]));

    for key in &expected {
        assert!(set.contains(key));
    }

    assert_eq!(
        set.iter().collect::<Vec<&u32>>(),
        expected.iter().collect::<Vec<&u32>>(),
    );
    assert_eq!(set.into_iter().collect::<Vec<u32>>(), expected);
}

#[test]
fn int_test_avl_set_duplicates() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = AvlSet::new();
    let mut seen = vec![false; 1000];
    let mut expected = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        // a small key space so most insertions hit an existing key
        let key: usize = rng.gen_range(0, 1000);

        assert_eq!(set.insert(key), !seen[key]);
        if !seen[key] {
            seen[key] = true;
            expected.push(key);
        }
    }

    expected.sort();

    assert_eq!(set.len(), expected.len());
    assert!(is_within_avl_bound(&set));
    assert_eq!(
        set.iter().collect::<Vec<&usize>>(),
        expected.iter().collect::<Vec<&usize>>(),
    );
}

#[test]
fn int_test_avl_set_shuffled() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut keys = (0..NUM_OF_OPERATIONS as u32).collect::<Vec<u32>>();
    rng.shuffle(&mut keys);

    let mut set = AvlSet::new();
    for key in &keys {
        assert!(set.insert(*key));
    }

    assert_eq!(set.len(), NUM_OF_OPERATIONS);
    assert!(is_within_avl_bound(&set));
    assert!(set.iter().cloned().eq(0..NUM_OF_OPERATIONS as u32));
}

#[test]
fn int_test_avl_set_height_bound() {
    // the sparsest avl tree with 7 keys has 4 levels (height 3); 5 levels is out of reach
    assert!(4.0 < level_bound(7));
    assert!(!(5.0 < level_bound(7)));

    let set = (0..7).collect::<AvlSet<u32>>();
    assert_eq!(set.height(), 2);
    assert!(is_within_avl_bound(&set));
}
