//! Explicit optimal trees reconstructed from a root table.
//!
//! [`build`] trusts the root table completely and performs no key comparisons.
//! Reconstruction, traversal, equality, cloning and drop all run on explicit
//! work stacks, so a degenerate (chain-shaped) tree over many keys never
//! exhausts the call stack. `Debug` is derived and recurses; format deep trees
//! through [`Tree::in_order`] or [`Tree::pre_order`] instead.

use std::mem;
use std::ops::Range;

use crate::error::{ObstError, Result};
use crate::table::ObstTables;
use crate::traits::Weight;

/// Owning binary tree: every node exclusively owns its two subtrees.
#[derive(Debug)]
pub enum Tree<K> {
    Empty,
    Node {
        key: K,
        left: Box<Tree<K>>,
        right: Box<Tree<K>>,
    },
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Tree::Empty
    }
}

impl<K: PartialEq> PartialEq for Tree<K> {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some(pair) = pending.pop() {
            match pair {
                (Tree::Empty, Tree::Empty) => {}
                (
                    Tree::Node {
                        key: a,
                        left: a_left,
                        right: a_right,
                    },
                    Tree::Node {
                        key: b,
                        left: b_left,
                        right: b_right,
                    },
                ) => {
                    if a != b {
                        return false;
                    }
                    pending.push((&**a_right, &**b_right));
                    pending.push((&**a_left, &**b_left));
                }
                _ => return false,
            }
        }
        true
    }
}

impl<K: Eq> Eq for Tree<K> {}

enum CloneStep<'a, K> {
    Visit(&'a Tree<K>),
    Assemble(&'a K),
}

impl<K: Clone> Clone for Tree<K> {
    fn clone(&self) -> Self {
        let mut steps = vec![CloneStep::Visit(self)];
        let mut built: Vec<Tree<K>> = Vec::new();
        while let Some(step) = steps.pop() {
            match step {
                CloneStep::Visit(Tree::Empty) => built.push(Tree::Empty),
                CloneStep::Visit(Tree::Node { key, left, right }) => {
                    steps.push(CloneStep::Assemble(key));
                    steps.push(CloneStep::Visit(&**right));
                    steps.push(CloneStep::Visit(&**left));
                }
                CloneStep::Assemble(key) => {
                    let right = built.pop().unwrap_or_default();
                    let left = built.pop().unwrap_or_default();
                    built.push(Tree::node(key.clone(), left, right));
                }
            }
        }
        built.pop().unwrap_or_default()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        if let Tree::Node { left, right, .. } = self {
            pending.push(mem::take(&mut **left));
            pending.push(mem::take(&mut **right));
        }
        while let Some(mut tree) = pending.pop() {
            if let Tree::Node { left, right, .. } = &mut tree {
                pending.push(mem::take(&mut **left));
                pending.push(mem::take(&mut **right));
            }
        }
    }
}

impl<K> Tree<K> {
    /// A node with the given children.
    pub fn node(key: K, left: Tree<K>, right: Tree<K>) -> Self {
        Tree::Node {
            key,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// A node without children.
    pub fn leaf(key: K) -> Self {
        Self::node(key, Tree::Empty, Tree::Empty)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Tree::Empty)
    }

    /// Key at the root, if any.
    pub fn key(&self) -> Option<&K> {
        match self {
            Tree::Empty => None,
            Tree::Node { key, .. } => Some(key),
        }
    }

    pub fn left(&self) -> Option<&Tree<K>> {
        match self {
            Tree::Empty => None,
            Tree::Node { left, .. } => Some(&**left),
        }
    }

    pub fn right(&self) -> Option<&Tree<K>> {
        match self {
            Tree::Empty => None,
            Tree::Node { right, .. } => Some(&**right),
        }
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.pre_order().count()
    }

    /// Number of nodes on the longest root-to-leaf path; 0 for an empty tree.
    pub fn height(&self) -> usize {
        let mut best = 0;
        let mut stack = vec![(self, 1usize)];
        while let Some((tree, depth)) = stack.pop() {
            if let Tree::Node { left, right, .. } = tree {
                best = best.max(depth);
                stack.push((&**left, depth + 1));
                stack.push((&**right, depth + 1));
            }
        }
        best
    }

    /// Keys in symmetric (sorted, for a search tree) order.
    pub fn in_order(&self) -> InOrder<'_, K> {
        let mut iter = InOrder { stack: Vec::new() };
        iter.descend(self);
        iter
    }

    /// Keys in root-left-right order.
    pub fn pre_order(&self) -> PreOrder<'_, K> {
        PreOrder { stack: vec![self] }
    }
}

impl<K: Ord> Tree<K> {
    /// Depth of `target` (root = 1) following search-tree order, or `None`
    /// if the key is absent.
    pub fn depth_of(&self, target: &K) -> Option<usize> {
        let mut tree = self;
        let mut depth = 1;
        while let Tree::Node { key, left, right } = tree {
            match target.cmp(key) {
                std::cmp::Ordering::Equal => return Some(depth),
                std::cmp::Ordering::Less => tree = &**left,
                std::cmp::Ordering::Greater => tree = &**right,
            }
            depth += 1;
        }
        None
    }

    /// Whether the in-order key sequence is strictly increasing.
    pub fn is_search_tree(&self) -> bool {
        let mut keys = self.in_order();
        let Some(mut prev) = keys.next() else {
            return true;
        };
        for key in keys {
            if prev >= key {
                return false;
            }
            prev = key;
        }
        true
    }
}

/// Iterator returned by [`Tree::in_order`].
pub struct InOrder<'a, K> {
    stack: Vec<&'a Tree<K>>,
}

impl<'a, K> InOrder<'a, K> {
    fn descend(&mut self, mut tree: &'a Tree<K>) {
        while let Tree::Node { left, .. } = tree {
            self.stack.push(tree);
            tree = &**left;
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.stack.pop()?;
        match tree {
            Tree::Empty => None,
            Tree::Node { key, right, .. } => {
                self.descend(&**right);
                Some(key)
            }
        }
    }
}

/// Iterator returned by [`Tree::pre_order`].
pub struct PreOrder<'a, K> {
    stack: Vec<&'a Tree<K>>,
}

impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(tree) = self.stack.pop() {
            if let Tree::Node { key, left, right } = tree {
                self.stack.push(&**right);
                self.stack.push(&**left);
                return Some(key);
            }
        }
        None
    }
}

enum Step {
    Visit { lo: usize, hi: usize },
    Assemble { root: usize },
}

/// Materialize the subtree for keys `range` from the root table.
///
/// An empty range yields [`Tree::Empty`]. Roots are selected top-down, left
/// subtree before right, exactly as the recursive formulation
/// `node(keys[r], build(lo..r), build(r+1..hi))` would, with `r = root(lo..hi)`.
///
/// Errors:
/// - `LengthMismatch` if `keys.len()` differs from the table's key count,
/// - `InvalidInterval` if `range.start > range.end` or `range.end > n`.
pub fn build<K: Clone, W: Weight>(
    keys: &[K],
    tables: &ObstTables<W>,
    range: Range<usize>,
) -> Result<Tree<K>> {
    let n = tables.n();
    if keys.len() != n {
        return Err(ObstError::LengthMismatch {
            what: "keys",
            expected: n,
            found: keys.len(),
        });
    }
    let Range { start: lo, end: hi } = range;
    if lo > hi || hi > n {
        return Err(ObstError::InvalidInterval { lo, hi, n });
    }

    #[cfg(feature = "tracing")]
    let span = tracing::debug_span!("obst_build_tree", lo, hi);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut steps = vec![Step::Visit { lo, hi }];
    let mut built: Vec<Tree<K>> = Vec::new();
    while let Some(step) = steps.pop() {
        match step {
            Step::Visit { lo, hi } if lo == hi => built.push(Tree::Empty),
            Step::Visit { lo, hi } => {
                let r = tables.root_unchecked(lo, hi);
                debug_assert!((lo..hi).contains(&r), "root {r} outside {lo}..{hi}");
                steps.push(Step::Assemble { root: r });
                steps.push(Step::Visit { lo: r + 1, hi });
                steps.push(Step::Visit { lo, hi: r });
            }
            Step::Assemble { root } => {
                let right = built.pop().unwrap_or_default();
                let left = built.pop().unwrap_or_default();
                built.push(Tree::node(keys[root].clone(), left, right));
            }
        }
    }
    debug_assert_eq!(built.len(), 1);
    Ok(built.pop().unwrap_or_default())
}
