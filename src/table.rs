//! Interval-indexed tables produced by the DP.
//!
//! Each table is addressed by a half-open key interval `lo..hi` with
//! `0 <= lo <= hi <= n`. The empty interval `i..i` is the slot before key `i`
//! (the "gap" between keys `i-1` and `i`). Only the upper triangle is ever
//! written; the rest of the dense storage stays at its fill value.

use std::ops::Range;

use crate::traits::Weight;

/// Dense `(n+1) x (n+1)` table addressed by `(lo, hi)`.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalTable<T> {
    /// Number of keys `n`; the table has `n + 1` rows and columns.
    n: usize,
    cells: Vec<T>,
}

impl<T: Clone> IntervalTable<T> {
    /// Table for `n` keys with every cell set to `fill`.
    pub fn new(n: usize, fill: T) -> Self {
        Self {
            n,
            cells: vec![fill; (n + 1) * (n + 1)],
        }
    }
}

impl<T> IntervalTable<T> {
    /// Number of keys covered.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    fn offset(&self, lo: usize, hi: usize) -> Option<usize> {
        (lo <= hi && hi <= self.n).then(|| lo * (self.n + 1) + hi)
    }

    /// Cell for interval `lo..hi`, or `None` if the interval does not fit.
    #[inline]
    pub fn get(&self, lo: usize, hi: usize) -> Option<&T> {
        self.offset(lo, hi).map(|idx| &self.cells[idx])
    }

    /// Cell for `lo..hi` without the `Option` wrapper.
    ///
    /// # Panics
    /// Panics if the interval does not fit; internal callers guarantee it does.
    #[inline]
    pub(crate) fn at(&self, lo: usize, hi: usize) -> &T {
        debug_assert!(lo <= hi && hi <= self.n);
        &self.cells[lo * (self.n + 1) + hi]
    }

    /// Overwrite the cell for `lo..hi`.
    ///
    /// # Panics
    /// Panics if `lo > hi` or `hi > n`; only the DP writes tables.
    #[inline]
    pub(crate) fn set(&mut self, lo: usize, hi: usize, value: T) {
        let idx = self
            .offset(lo, hi)
            .unwrap_or_else(|| panic!("interval {lo}..{hi} outside table for {} keys", self.n));
        self.cells[idx] = value;
    }
}

/// The three tables computed by one DP run.
///
/// Read-only once built; see [`crate::engine::compute`].
#[derive(Debug, Clone, PartialEq)]
pub struct ObstTables<W> {
    pub(crate) cost: IntervalTable<W>,
    pub(crate) weight_sum: IntervalTable<W>,
    /// Root index per non-empty interval; `usize::MAX` elsewhere.
    pub(crate) root: IntervalTable<usize>,
    pub(crate) gap_aware: bool,
}

impl<W: Weight> ObstTables<W> {
    /// Number of keys.
    #[inline]
    pub fn n(&self) -> usize {
        self.cost.n()
    }

    /// Whether the tables were computed with gap weights.
    #[inline]
    pub fn has_gap_weights(&self) -> bool {
        self.gap_aware
    }

    /// Minimum expected cost over all trees holding exactly the keys `range`.
    ///
    /// For an empty range this is the enclosing gap weight (zero without gaps).
    pub fn cost(&self, range: Range<usize>) -> Option<W> {
        self.cost.get(range.start, range.end).copied()
    }

    /// Total weight of the keys in `range` plus their enclosing gaps.
    pub fn weight_sum(&self, range: Range<usize>) -> Option<W> {
        self.weight_sum.get(range.start, range.end).copied()
    }

    /// Index of the root chosen for `range`; `None` when the range is empty
    /// or out of bounds.
    pub fn root(&self, range: Range<usize>) -> Option<usize> {
        if range.start >= range.end {
            return None;
        }
        self.root.get(range.start, range.end).copied()
    }

    /// Cost of the optimal tree over all keys.
    pub fn optimal_cost(&self) -> W {
        self.cost.get(0, self.n()).copied().unwrap_or(W::ZERO)
    }

    /// Root of the optimal tree over all keys; `None` for `n = 0`.
    pub fn optimal_root(&self) -> Option<usize> {
        self.root(0..self.n())
    }

    /// Raw root lookup for callers that already checked `lo < hi <= n`.
    #[inline]
    pub(crate) fn root_unchecked(&self, lo: usize, hi: usize) -> usize {
        debug_assert!(lo < hi);
        *self.root.at(lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::IntervalTable;

    #[test]
    fn empty_table_has_single_cell() {
        let t = IntervalTable::new(0, 7u32);
        assert_eq!(t.n(), 0);
        assert_eq!(t.get(0, 0), Some(&7));
        assert_eq!(t.get(0, 1), None);
    }

    #[test]
    fn rejects_reversed_and_oversized_intervals() {
        let mut t = IntervalTable::new(3, 0u32);
        t.set(1, 3, 9);
        assert_eq!(t.get(1, 3), Some(&9));
        assert_eq!(t.get(3, 1), None);
        assert_eq!(t.get(0, 4), None);
        assert_eq!(t.get(2, 2), Some(&0));
    }

    #[test]
    #[should_panic]
    fn set_outside_panics() {
        let mut t = IntervalTable::new(2, 0u32);
        t.set(2, 1, 1);
    }
}
