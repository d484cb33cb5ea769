//! Interval DP for optimal binary search trees.
//!
//! For keys `0..n` with weights `p` and optional gap weights `q` (one more
//! entry than `p`), the engine fills, for every interval `lo..hi`:
//!
//! ```text
//! w(lo, lo) = q[lo]                     (0 without gaps)
//! e(lo, lo) = q[lo]                     (0 without gaps)
//! w(lo, hi) = w(lo, hi-1) + p[hi-1] + q[hi]
//! e(lo, hi) = min over r in lo..hi of  e(lo, r) + e(r+1, hi) + w(lo, hi)
//! ```
//!
//! Intervals are visited by increasing length, so both sub-intervals of every
//! candidate root are final before they are read. Candidates are scanned in
//! increasing `r` and only a strict improvement replaces the incumbent, so the
//! recorded root is the smallest index attaining the minimum.
//!
//! Every `(lo, hi, r)` triple is visited exactly once: `O(n^3)` time and
//! `O(n^2)` space.
//!
//! All sums are checked. A candidate whose cost does not fit the weight type
//! is larger than any representable cost and is skipped; the run fails with
//! [`ObstError::Overflow`] only when an interval weight sum overflows or no
//! candidate root of an interval fits.

use crate::error::{ObstError, Result, WeightSeries};
use crate::table::{IntervalTable, ObstTables};
use crate::traits::Weight;
use crate::utils::{add_or_overflow, check_weights};

const WEIGHT_SUM: &str = "interval weight sum";

/// Validated DP instance over borrowed weight series.
///
/// Typical usage:
/// ```
/// use obst::ObstEngine;
///
/// let engine = ObstEngine::new(&[1u64, 1, 10], None, 3).unwrap();
/// let tables = engine.run().unwrap();
/// assert_eq!(tables.optimal_cost(), 15);
/// assert_eq!(tables.optimal_root(), Some(2));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ObstEngine<'a, W> {
    weights: &'a [W],
    gaps: Option<&'a [W]>,
}

impl<'a, W: Weight> ObstEngine<'a, W> {
    /// Validate the inputs and create an engine.
    ///
    /// `n` must equal `weights.len()`; gap weights, when given, must have
    /// `n + 1` entries. All weights must be admissible (see
    /// [`Weight::is_admissible`]).
    pub fn new(weights: &'a [W], gaps: Option<&'a [W]>, n: usize) -> Result<Self> {
        if weights.len() != n {
            return Err(ObstError::LengthMismatch {
                what: "key weights",
                expected: n,
                found: weights.len(),
            });
        }
        if let Some(q) = gaps {
            if q.len() != n + 1 {
                return Err(ObstError::LengthMismatch {
                    what: "gap weights",
                    expected: n + 1,
                    found: q.len(),
                });
            }
        }
        check_weights(WeightSeries::Keys, weights)?;
        if let Some(q) = gaps {
            check_weights(WeightSeries::Gaps, q)?;
        }
        Ok(Self { weights, gaps })
    }

    /// Number of keys.
    pub fn n(&self) -> usize {
        self.weights.len()
    }

    /// Whether gap weights take part in the recurrence.
    pub fn is_gap_aware(&self) -> bool {
        self.gaps.is_some()
    }

    #[inline]
    fn gap(&self, slot: usize) -> W {
        self.gaps.map_or(W::ZERO, |q| q[slot])
    }

    /// Fill the cost, weight-sum and root tables.
    pub fn run(&self) -> Result<ObstTables<W>> {
        let n = self.n();
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("obst_compute", n, gap_aware = self.is_gap_aware());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut cost = IntervalTable::new(n, W::ZERO);
        let mut weight_sum = IntervalTable::new(n, W::ZERO);
        let mut root = IntervalTable::new(n, usize::MAX);

        for lo in 0..=n {
            cost.set(lo, lo, self.gap(lo));
            weight_sum.set(lo, lo, self.gap(lo));
        }

        for len in 1..=n {
            #[cfg(feature = "tracing")]
            tracing::trace!(len, intervals = n - len + 1, "filling interval length");
            for lo in 0..=(n - len) {
                let hi = lo + len;
                let w = add_or_overflow(*weight_sum.at(lo, hi - 1), self.weights[hi - 1], WEIGHT_SUM)?;
                let w = add_or_overflow(w, self.gap(hi), WEIGHT_SUM)?;
                weight_sum.set(lo, hi, w);

                let mut best: Option<(W, usize)> = None;
                for r in lo..hi {
                    let candidate = match (*cost.at(lo, r))
                        .checked_add(*cost.at(r + 1, hi))
                        .and_then(|c| c.checked_add(w))
                    {
                        Some(c) => c,
                        None => continue,
                    };
                    if best.map_or(true, |(b, _)| candidate < b) {
                        best = Some((candidate, r));
                    }
                }
                let (best, best_root) = best.ok_or(ObstError::Overflow {
                    what: "interval cost",
                })?;
                cost.set(lo, hi, best);
                root.set(lo, hi, best_root);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(optimal_cost = ?cost.at(0, n), "obst tables complete");

        Ok(ObstTables {
            cost,
            weight_sum,
            root,
            gap_aware: self.is_gap_aware(),
        })
    }
}

/// Compute the cost and root tables for `n` keys in one call.
///
/// Equivalent to `ObstEngine::new(weights, gaps, n)?.run()`.
pub fn compute<W: Weight>(weights: &[W], gaps: Option<&[W]>, n: usize) -> Result<ObstTables<W>> {
    ObstEngine::new(weights, gaps, n)?.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_key_costs_its_own_weight() {
        let tables = compute(&[7u64], None, 1).unwrap();
        assert_eq!(tables.cost(0..1), Some(7));
        assert_eq!(tables.root(0..1), Some(0));
    }

    #[test]
    fn no_keys_yields_empty_tables() {
        let tables = compute::<u64>(&[], None, 0).unwrap();
        assert_eq!(tables.n(), 0);
        assert_eq!(tables.optimal_cost(), 0);
        assert_eq!(tables.optimal_root(), None);

        let tables = compute(&[], Some(&[3u64][..]), 0).unwrap();
        assert_eq!(tables.optimal_cost(), 3);
    }

    #[test]
    fn diagonal_equals_own_weight_without_gaps() {
        let p = [4u64, 0, 9, 2, 5];
        let tables = compute(&p, None, p.len()).unwrap();
        for (i, &w) in p.iter().enumerate() {
            assert_eq!(tables.cost(i..i + 1), Some(w));
        }
    }

    #[test]
    fn gap_base_cases_hold_gap_weight() {
        let p = [2u64, 1, 2];
        let q = [1u64, 4, 1, 3];
        let tables = compute(&p, Some(&q[..]), 3).unwrap();
        for (slot, &g) in q.iter().enumerate() {
            assert_eq!(tables.cost(slot..slot), Some(g));
            assert_eq!(tables.weight_sum(slot..slot), Some(g));
        }
        assert_eq!(tables.weight_sum(0..3), Some(5 + 9));
    }

    #[test]
    fn equal_weights_tie_break_picks_smallest_root() {
        // Two keys of equal weight: either can be root at cost 3.
        let tables = compute(&[1u64, 1], None, 2).unwrap();
        assert_eq!(tables.optimal_cost(), 3);
        assert_eq!(tables.optimal_root(), Some(0));
    }

    #[test]
    fn overflowing_weight_sum_is_an_error() {
        assert_eq!(
            compute(&[u32::MAX, 1], None, 2).unwrap_err(),
            ObstError::Overflow {
                what: "interval weight sum"
            }
        );
        assert_eq!(
            compute(&[1u32], Some(&[u32::MAX, 0][..]), 1).unwrap_err(),
            ObstError::Overflow {
                what: "interval weight sum"
            }
        );
    }

    #[test]
    fn overflowing_candidates_are_skipped() {
        // Root 0 would cost 2 * 2^31; root 1 costs exactly 2^31.
        let tables = compute(&[0u32, 1 << 31], None, 2).unwrap();
        assert_eq!(tables.optimal_cost(), 1 << 31);
        assert_eq!(tables.optimal_root(), Some(1));
    }

    #[test]
    fn interval_with_no_fitting_root_is_an_error() {
        let half = u32::MAX / 2;
        assert_eq!(
            compute(&[half, half], None, 2).unwrap_err(),
            ObstError::Overflow {
                what: "interval cost"
            }
        );
    }

    #[test]
    fn rejects_length_mismatches() {
        assert_eq!(
            compute(&[1u64, 2], None, 3).unwrap_err(),
            ObstError::LengthMismatch {
                what: "key weights",
                expected: 3,
                found: 2
            }
        );
        assert_eq!(
            compute(&[1u64, 2], Some(&[1, 1][..]), 2).unwrap_err(),
            ObstError::LengthMismatch {
                what: "gap weights",
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn rejects_negative_weights() {
        let err = compute(&[1i64, -2], None, 2).unwrap_err();
        assert!(matches!(
            err,
            ObstError::InadmissibleWeight {
                series: WeightSeries::Keys,
                index: 1,
                ..
            }
        ));
        let err = compute(&[0.5f64], Some(&[0.1, f64::NAN][..]), 1).unwrap_err();
        assert!(matches!(
            err,
            ObstError::InadmissibleWeight {
                series: WeightSeries::Gaps,
                index: 1,
                ..
            }
        ));
    }
}
