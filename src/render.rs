//! Plain-text rendering of tables and trees for console output.
//!
//! Key numbers in rendered tables are 1-based (`k1..kn`), the convention used
//! in textbook presentations of the algorithm.

use std::fmt::Display;

use crate::table::ObstTables;
use crate::traits::Weight;
use crate::tree::Tree;

/// Rectangular root table over rows and columns `0..=n`.
///
/// Cell `(i, j)` shows the 1-based root chosen for keys `k_i..=k_j`; rows,
/// columns and intervals with no root show `0`.
pub fn root_table<W: Weight>(tables: &ObstTables<W>) -> String {
    let n = tables.n();
    let header: String = (0..=n).map(|j| format!("  {j:>3}")).collect();
    let mut out = format!("{:>3}{header}\n", "i\\j");
    for i in 0..=n {
        let cells: String = (0..=n)
            .map(|j| {
                let root = if i >= 1 && j >= i {
                    tables.root(i - 1..j).map_or(0, |r| r + 1)
                } else {
                    0
                };
                format!("  {root:>3}")
            })
            .collect();
        out.push_str(&format!("{i:>3}{cells}\n"));
    }
    out
}

/// Upper-triangular expected-cost table for 1-based `k_i..=k_j`.
pub fn cost_table<W: Weight>(tables: &ObstTables<W>) -> String {
    let n = tables.n();
    let mut out = String::new();
    for i in 1..=n {
        let row: Vec<String> = (1..=n)
            .map(|j| {
                let value = if j >= i {
                    tables.cost(i - 1..j).map_or(0.0, Weight::as_f64)
                } else {
                    0.0
                };
                format!("{value:6.2}")
            })
            .collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}

/// Sideways outline: right subtree above, left subtree below, one key per
/// line, indented by depth.
pub fn tree_outline<K: Display>(tree: &Tree<K>) -> String {
    let mut out = String::new();
    // Reverse in-order (right, node, left) so the top line is the largest key.
    let mut stack = vec![(tree, 0usize, false)];
    while let Some((node, depth, expanded)) = stack.pop() {
        match node {
            Tree::Empty => {}
            Tree::Node { key, .. } if expanded => {
                out.push_str(&format!("{:indent$}{key}\n", "", indent = depth * 4));
            }
            Tree::Node { left, right, .. } => {
                stack.push((&**left, depth + 1, false));
                stack.push((node, depth, true));
                stack.push((&**right, depth + 1, false));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute;

    #[test]
    fn root_table_uses_one_based_keys() {
        let tables = compute(&[1u64, 1, 10], None, 3).unwrap();
        let rendered = root_table(&tables);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "i\\j    0    1    2    3");
        assert_eq!(lines[4], "  3    0    0    0    3");
        let cells: Vec<&str> = lines[1].split_whitespace().collect();
        assert_eq!(cells, ["1", "0", "1", "1", "3"]);
    }

    #[test]
    fn cost_table_is_upper_triangular() {
        let tables = compute(&[5u64, 10, 3, 2], None, 4).unwrap();
        let rendered = cost_table(&tables);
        let first: Vec<&str> = rendered.lines().next().unwrap().split_whitespace().collect();
        assert_eq!(first, ["5.00", "20.00", "26.00", "32.00"]);
        let last: Vec<&str> = rendered.lines().last().unwrap().split_whitespace().collect();
        assert_eq!(last, ["0.00", "0.00", "0.00", "2.00"]);
    }

    #[test]
    fn outline_puts_largest_key_first() {
        let tree = Tree::node(2, Tree::leaf(1), Tree::leaf(3));
        assert_eq!(tree_outline(&tree), "    3\n2\n    1\n");
        assert_eq!(tree_outline(&Tree::<u8>::Empty), "");
    }
}
