use bst_rebuild::{Order, Tree};

use std::collections::{BTreeSet, HashSet};

/// The distinct keys of `xs` in ascending order.
fn sorted_distinct<K: Ord + Copy>(xs: &[K]) -> Vec<K> {
    xs.iter().copied().collect::<BTreeSet<_>>().into_iter().collect()
}

#[quickcheck]
fn build_yields_sorted_distinct_keys(xs: Vec<i64>) -> bool {
    let tree = Tree::build(xs.clone());

    tree.to_vec() == sorted_distinct(&xs) && tree.len() == sorted_distinct(&xs).len()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.find(x).map(|n| n.key()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = Tree::build(xs.clone());
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn insert_new_key(xs: Vec<i8>, key: i8) -> bool {
    let mut tree = Tree::build(xs);
    let was_there = tree.contains(&key);

    let inserted = tree.insert(key);
    let keys = tree.to_vec();

    inserted != was_there
        && tree.contains(&key)
        && keys.windows(2).all(|w| w[0] < w[1])
        && keys.iter().filter(|k| **k == key).count() == 1
}

#[quickcheck]
fn insert_twice_is_insert_once(xs: Vec<i8>, key: i8) -> bool {
    let mut once = Tree::new();
    for x in &xs {
        once.insert(*x);
    }
    once.insert(key);

    let mut twice = once.clone();
    twice.insert(key);

    once == twice
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
        && tree.to_vec() == sorted_distinct(&still_present)
}

#[quickcheck]
fn delete_removes_exactly_one_key(xs: Vec<i16>, pick: usize) -> bool {
    if xs.is_empty() {
        return true;
    }
    let key = xs[pick % xs.len()];
    let mut tree = Tree::build(xs);
    let mut expected = tree.to_vec();
    expected.retain(|k| *k != key);

    tree.delete(&key) && tree.find(&key).is_none() && tree.to_vec() == expected
}

#[quickcheck]
fn rebalance_is_idempotent(xs: Vec<i16>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let keys = tree.to_vec();

    tree.rebalance();
    let once = tree.clone();
    tree.rebalance();

    tree == once && tree.is_balanced() && tree.to_vec() == keys
}

#[quickcheck]
fn depth_is_at_most_height(xs: Vec<i16>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    tree.iter(Order::Level).all(|key| match tree.depth(key) {
        Ok(depth) => depth as isize <= tree.height(),
        Err(_) => false,
    })
}

#[quickcheck]
fn every_order_visits_every_key_once(xs: Vec<i16>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let keys = sorted_distinct(&xs);

    Order::ALL.iter().all(|order| {
        let mut visited: Vec<_> = tree.iter(*order).copied().collect();
        visited.sort_unstable();
        visited == keys
    })
}
