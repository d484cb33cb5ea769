//! Cost evaluation of explicit trees.
//!
//! This is the correctness oracle for the DP: the cost of the tree rebuilt
//! from the root table must equal the table's optimum. Keys are mapped to
//! their weights through the sorted key sequence (binary search), so the
//! evaluator never relies on the tree itself being well formed.

use crate::error::{ObstError, Result};
use crate::traits::Weight;
use crate::tree::Tree;

fn check_parallel<K, W>(keys: &[K], weights: &[W]) -> Result<()> {
    if keys.len() != weights.len() {
        return Err(ObstError::LengthMismatch {
            what: "key weights",
            expected: keys.len(),
            found: weights.len(),
        });
    }
    Ok(())
}

fn index_of<K: Ord>(key: &K, keys: &[K]) -> Result<usize> {
    keys.binary_search(key).map_err(|_| ObstError::UnknownKey)
}

fn charge<W: Weight>(total: W, weight: W, depth: usize) -> Result<W> {
    weight
        .checked_times(depth)
        .and_then(|c| total.checked_add(c))
        .ok_or(ObstError::Overflow {
            what: "expected cost",
        })
}

/// Sum of `weight(key) * depth(key)` over all nodes, root at depth 1.
///
/// `keys` must be sorted; `weights[i]` belongs to `keys[i]`.
pub fn expected_cost<K: Ord, W: Weight>(tree: &Tree<K>, keys: &[K], weights: &[W]) -> Result<W> {
    check_parallel(keys, weights)?;
    let mut total = W::ZERO;
    let mut stack = vec![(tree, 1usize)];
    while let Some((node, depth)) = stack.pop() {
        if let Tree::Node { key, left, right } = node {
            total = charge(total, weights[index_of(key, keys)?], depth)?;
            stack.push((&**left, depth + 1));
            stack.push((&**right, depth + 1));
        }
    }
    Ok(total)
}

/// Expected cost including unsuccessful searches.
///
/// Every empty child is charged its gap weight at the depth it would occupy
/// as a leaf (its parent's depth plus one). Gap `k` lies between `keys[k-1]`
/// and `keys[k]`, so the empty left child of `keys[i]` is gap `i` and its
/// empty right child is gap `i + 1`. This holds for any search tree over a
/// contiguous run of keys, including subtrees that do not start at `keys[0]`.
///
/// An empty tree has no key to anchor it and is charged as gap 0 at depth 1.
pub fn expected_cost_with_gaps<K: Ord, W: Weight>(
    tree: &Tree<K>,
    keys: &[K],
    weights: &[W],
    gaps: &[W],
) -> Result<W> {
    check_parallel(keys, weights)?;
    if gaps.len() != keys.len() + 1 {
        return Err(ObstError::LengthMismatch {
            what: "gap weights",
            expected: keys.len() + 1,
            found: gaps.len(),
        });
    }
    if tree.is_empty() {
        return Ok(gaps[0]);
    }

    let mut total = W::ZERO;
    let mut stack = vec![(tree, 1usize)];
    while let Some((node, depth)) = stack.pop() {
        let Tree::Node { key, left, right } = node else {
            continue;
        };
        let idx = index_of(key, keys)?;
        total = charge(total, weights[idx], depth)?;
        for (child, slot) in [(&**left, idx), (&**right, idx + 1)] {
            if child.is_empty() {
                total = charge(total, gaps[slot], depth + 1)?;
            } else {
                stack.push((child, depth + 1));
            }
        }
    }
    Ok(total)
}
