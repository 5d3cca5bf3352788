use bst_rebuild::{Order, Tree, TreeError};

use pretty_assertions::assert_eq;

fn keys(tree: &Tree<i64>, order: Order) -> Vec<i64> {
    let mut keys = Vec::new();
    tree.traverse(order, Some(&mut |key: &i64| keys.push(*key)))
        .expect("a visitor was given");
    keys
}

fn sample() -> Tree<i64> {
    Tree::build([3, 1, 4, 1, 5, 9, 2, 6])
}

#[test]
fn build_from_unsorted_input_with_duplicates() {
    let tree = sample();

    assert_eq!(keys(&tree, Order::In), vec![1, 2, 3, 4, 5, 6, 9]);
    assert_eq!(keys(&tree, Order::Level), vec![4, 2, 6, 1, 3, 5, 9]);
    assert_eq!(keys(&tree, Order::Pre), vec![4, 2, 1, 3, 6, 5, 9]);
    assert_eq!(keys(&tree, Order::Post), vec![1, 3, 2, 5, 9, 6, 4]);
    assert!(tree.is_balanced());
    assert_eq!(tree.height(), 2);
}

#[test]
fn insert_then_find_and_list() {
    let mut tree = sample();

    tree.insert(200);

    assert_eq!(tree.find(&200).map(|n| *n.key()), Some(200));
    assert_eq!(tree.to_vec(), vec![1, 2, 3, 4, 5, 6, 9, 200]);
    assert_eq!(tree.depth(&200), Ok(3));
}

#[test]
fn delete_smallest_key() {
    let mut tree = sample();

    tree.delete(&1);

    assert_eq!(tree.to_vec(), vec![2, 3, 4, 5, 6, 9]);
    assert!(tree.find(&1).is_none());
}

#[test]
fn delete_root_uses_successor() {
    let mut tree = sample();

    tree.delete(&4);

    // 5 is the smallest key right of the root.
    assert_eq!(tree.root().map(|n| *n.key()), Some(5));
    assert_eq!(keys(&tree, Order::Level), vec![5, 2, 6, 1, 3, 9]);
}

#[test]
fn ascending_run_then_rebalance() {
    let mut tree = sample();
    for key in 10..=20 {
        tree.insert(key);
    }
    let before = tree.to_vec();
    assert!(!tree.is_balanced());
    assert_eq!(tree.height(), 13);

    tree.rebalance();

    assert!(tree.is_balanced());
    assert_eq!(tree.to_vec(), before);
    assert_eq!(tree.height(), 4);
}

#[test]
fn empty_and_single_heights() {
    let mut tree = Tree::new();
    assert_eq!(tree.height(), -1);
    assert!(tree.find(&1).is_none());
    assert_eq!(keys(&tree, Order::Level), Vec::<i64>::new());

    tree.insert(1);
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.depth(&1), Ok(0));
}

#[test]
fn usage_errors() {
    let tree = sample();

    assert_eq!(tree.traverse(Order::In, None), Err(TreeError::MissingVisitor));
    assert_eq!(tree.depth(&7), Err(TreeError::KeyNotFound));
    assert_eq!(
        TreeError::MissingVisitor.to_string(),
        "a traversal requires a visitor"
    );
}

#[test]
fn draw_after_insert() {
    let mut tree = sample();
    tree.insert(200);

    let expected = "\
│           ┌── 200
│       ┌── 9
│   ┌── 6
│   │   └── 5
└── 4
    │   ┌── 3
    └── 2
        └── 1
";
    assert_eq!(tree.to_string(), expected);
}
