//! End-to-end solving: tables, tree and validated cost in one call.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::engine::ObstEngine;
use crate::error::{ObstError, Result};
use crate::evaluate::{expected_cost, expected_cost_with_gaps};
use crate::table::ObstTables;
use crate::traits::Weight;
use crate::tree::{self, Tree};
use crate::utils::check_strictly_increasing;

/// One OBST instance: sorted keys, their weights and optional gap weights.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance<K, W> {
    pub keys: Vec<K>,
    pub weights: Vec<W>,
    pub gaps: Option<Vec<W>>,
}

impl<K, W> Instance<K, W> {
    pub fn new(keys: Vec<K>, weights: Vec<W>) -> Self {
        Self {
            keys,
            weights,
            gaps: None,
        }
    }

    pub fn with_gaps(mut self, gaps: Vec<W>) -> Self {
        self.gaps = Some(gaps);
        self
    }
}

/// Output of [`solve`].
#[derive(Debug, Clone)]
pub struct Solution<K, W> {
    pub tables: ObstTables<W>,
    pub tree: Tree<K>,
    /// Cost of `tree` as measured by the evaluator; agrees with
    /// `tables.optimal_cost()` up to [`Weight::approx_eq`].
    pub cost: W,
}

/// Compute the optimal tree for `keys` and check it against the tables.
///
/// # Errors
/// - `KeysNotIncreasing` for unsorted or duplicate keys,
/// - any input error from [`ObstEngine::new`],
/// - `CostMismatch` if the rebuilt tree does not reproduce the table optimum.
pub fn solve<K, W>(keys: &[K], weights: &[W], gaps: Option<&[W]>) -> Result<Solution<K, W>>
where
    K: Ord + Clone,
    W: Weight,
{
    check_strictly_increasing(keys)?;
    let tables = ObstEngine::new(weights, gaps, keys.len())?.run()?;
    let tree = tree::build(keys, &tables, 0..keys.len())?;
    let cost = match gaps {
        Some(q) => expected_cost_with_gaps(&tree, keys, weights, q)?,
        None => expected_cost(&tree, keys, weights)?,
    };
    let table_cost = tables.optimal_cost();
    if !cost.approx_eq(table_cost) {
        return Err(ObstError::CostMismatch {
            tree: format!("{cost:?}"),
            table: format!("{table_cost:?}"),
        });
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(n = keys.len(), ?cost, root = ?tables.optimal_root(), "solved obst instance");
    Ok(Solution { tables, tree, cost })
}

/// Solve independent instances; results are returned in input order.
///
/// With the `parallel` feature, instances are distributed over the rayon
/// thread pool. Instances share nothing, so the results are identical either way.
#[cfg(feature = "parallel")]
pub fn solve_batch<K, W>(instances: &[Instance<K, W>]) -> Vec<Result<Solution<K, W>>>
where
    K: Ord + Clone + Send + Sync,
    W: Weight,
{
    instances
        .par_iter()
        .map(|inst| solve(&inst.keys, &inst.weights, inst.gaps.as_deref()))
        .collect()
}

/// Solve independent instances; results are returned in input order.
#[cfg(not(feature = "parallel"))]
pub fn solve_batch<K, W>(instances: &[Instance<K, W>]) -> Vec<Result<Solution<K, W>>>
where
    K: Ord + Clone,
    W: Weight,
{
    instances
        .iter()
        .map(|inst| solve(&inst.keys, &inst.weights, inst.gaps.as_deref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_rejects_duplicate_keys() {
        let err = solve(&[1, 1, 2], &[1u64, 1, 1], None).unwrap_err();
        assert_eq!(err, ObstError::KeysNotIncreasing { index: 1 });
    }

    #[test]
    fn solve_clrs_five_keys() {
        let p = [0.15, 0.10, 0.05, 0.10, 0.20];
        let q = [0.05, 0.10, 0.05, 0.05, 0.05, 0.10];
        let keys = ["k1", "k2", "k3", "k4", "k5"];
        let sol = solve(&keys, &p, Some(&q[..])).unwrap();
        assert!((sol.cost - 2.75f64).abs() < 1e-9);
        assert_eq!(sol.tree.key(), Some(&"k2"));
    }

    #[test]
    fn batch_keeps_input_order_and_isolates_errors() {
        let batch = vec![
            Instance::new(vec![1, 2, 3], vec![1u64, 1, 10]),
            Instance::new(vec![3, 2], vec![1, 1]),
            Instance::new(vec![7], vec![4]).with_gaps(vec![1, 1]),
        ];
        let results = solve_batch(&batch);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().cost, 15);
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().cost, 4 + 2 * (1 + 1));
    }
}
