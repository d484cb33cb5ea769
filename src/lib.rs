//! Optimal Binary Search Trees (OBST)
//!
//! Given sorted keys with access weights, and optionally the weights of
//! searches that fall between keys, this crate finds the binary search tree
//! minimizing expected search cost and materializes it for inspection.
//!
//! ## Core idea
//! 1. [`ObstEngine`] (configured through [`ObstBuilder`]) runs the classic
//!    interval DP once over all keys and produces cost, weight-sum and root
//!    tables ([`ObstTables`]).
//! 2. [`tree::build`] rebuilds the optimal [`Tree`] top-down from the root table.
//! 3. [`evaluate`] measures an explicit tree's cost, which must match the
//!    table's optimum. [`solve`] runs all three and performs that check.
//!
//! Two cost models share the same recurrence:
//! - **keys only**: cost is `sum(weight * depth)` with the root at depth 1;
//! - **with gap weights**: each empty slot additionally costs its gap weight
//!   times the depth it would occupy as a leaf.
//!
//! ## Quick start
//! ```
//! use obst::solve;
//!
//! let keys = ["A", "B", "C", "D"];
//! let sol = solve(&keys, &[5u64, 10, 3, 2], None).unwrap();
//! assert_eq!(sol.cost, 32);
//! assert_eq!(sol.tree.key(), Some(&"B"));
//! assert_eq!(sol.tables.optimal_root(), Some(1));
//! ```
//!
//! ## Features
//! - `parallel`: [`solve_batch`] spreads independent instances over rayon.
//! - `tracing`: spans and events around the DP and tree reconstruction.
//! - `cli`: the `obst_demo` binary.

pub mod builder;
pub mod engine;
pub mod error;
pub mod evaluate;
pub mod render;
pub mod solve;
pub mod table;
pub mod traits;
pub mod tree;
pub mod utils;

pub use crate::builder::ObstBuilder;
pub use crate::engine::{compute, ObstEngine};
pub use crate::error::{ObstError, Result, WeightSeries};
pub use crate::solve::{solve, solve_batch, Instance, Solution};
pub use crate::table::{IntervalTable, ObstTables};
pub use crate::traits::Weight;
pub use crate::tree::Tree;
