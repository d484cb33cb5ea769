use obst::{compute, solve, tree, ObstBuilder, Tree};

#[test]
fn heavy_last_key_becomes_root() {
    let keys = [10, 20, 30];
    let sol = solve(&keys, &[1u64, 1, 10], None).unwrap();
    assert_eq!(sol.tables.optimal_cost(), 1 * 2 + 1 * 3 + 10 * 1);
    assert_eq!(sol.cost, 15);
    assert_eq!(sol.tables.optimal_root(), Some(2));
    assert_eq!(sol.tree.key(), Some(&30));
    assert_eq!(sol.tree.depth_of(&10), Some(2));
    assert_eq!(sol.tree.depth_of(&20), Some(3));
}

#[test]
fn four_letter_keys_root_at_b() {
    let keys = ['A', 'B', 'C', 'D'];
    let sol = solve(&keys, &[5u64, 10, 3, 2], None).unwrap();
    assert_eq!(sol.tables.optimal_root(), Some(1));
    assert_eq!(sol.cost, 32);
    assert_eq!(sol.cost, sol.tables.optimal_cost());
    let expected = Tree::node(
        'B',
        Tree::leaf('A'),
        Tree::node('C', Tree::Empty, Tree::leaf('D')),
    );
    assert_eq!(sol.tree, expected);
}

#[test]
fn textbook_five_keys_with_gaps() {
    let p: [f64; 5] = [0.15, 0.10, 0.05, 0.10, 0.20];
    let q = [0.05, 0.10, 0.05, 0.05, 0.05, 0.10];
    let tables = ObstBuilder::new(&p).with_gap_weights(&q).compute().unwrap();
    assert!((tables.optimal_cost() - 2.75).abs() < 1e-9);
    assert_eq!(tables.optimal_root(), Some(1));
    assert!((tables.weight_sum(0..5).unwrap() - 1.0).abs() < 1e-9);
    // Right subtree of k2 is rooted at k5, whose left child is k4.
    assert_eq!(tables.root(2..5), Some(4));
    assert_eq!(tables.root(2..4), Some(3));

    let keys = [1, 2, 3, 4, 5];
    let tree = tree::build(&keys, &tables, 0..5).unwrap();
    let pre: Vec<i32> = tree.pre_order().copied().collect();
    assert_eq!(pre, [2, 1, 5, 4, 3]);
}

#[test]
fn three_key_sample_root_table() {
    let p: [f64; 3] = [0.15, 0.10, 0.05];
    let q = [0.05, 0.10, 0.05, 0.05];
    let tables = compute(&p, Some(&q[..]), 3).unwrap();
    assert_eq!(tables.root(0..1), Some(0));
    assert_eq!(tables.root(0..2), Some(0));
    assert_eq!(tables.root(0..3), Some(1));
    assert_eq!(tables.root(1..3), Some(1));
    assert_eq!(tables.root(2..3), Some(2));
    assert!((tables.optimal_cost() - 1.25).abs() < 1e-9);
}

#[test]
fn empty_input_is_not_an_error() {
    let keys: [u32; 0] = [];
    let sol = solve(&keys, &[] as &[u64], None).unwrap();
    assert!(sol.tree.is_empty());
    assert_eq!(sol.cost, 0);
    assert_eq!(sol.tables.optimal_root(), None);
}

#[test]
fn single_key_costs_its_weight() {
    let sol = solve(&["only"], &[9u64], None).unwrap();
    assert_eq!(sol.cost, 9);
    assert_eq!(sol.tree, Tree::leaf("only"));
    assert_eq!(sol.tree.height(), 1);
}

#[test]
fn symmetric_ties_pick_the_lower_root() {
    let tables = compute(&[1u64, 1, 1, 1], None, 4).unwrap();
    assert_eq!(tables.optimal_cost(), 8);
    assert_eq!(tables.optimal_root(), Some(1));

    let gaps = [1u64; 5];
    let tables = compute(&[1u64, 1, 1, 1], Some(&gaps[..]), 4).unwrap();
    assert_eq!(tables.optimal_cost(), 25);
    assert_eq!(tables.optimal_root(), Some(1));

    let tables = compute(&[4u64, 4], None, 2).unwrap();
    assert_eq!(tables.optimal_root(), Some(0));
}
