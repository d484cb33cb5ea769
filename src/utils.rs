//! Assorted validation helpers.

use crate::error::{ObstError, Result, WeightSeries};
use crate::traits::Weight;

/// Relative tolerance used when comparing floating point costs.
pub const FLOAT_TOLERANCE: f64 = 1e-9;

/// Compare two costs that were summed in different orders.
///
/// The tolerance is relative to the larger magnitude, with an absolute floor
/// of [`FLOAT_TOLERANCE`] so that values near zero still compare sensibly.
#[inline]
pub fn within_relative_tolerance(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= FLOAT_TOLERANCE * scale
}

/// Reject the first inadmissible entry of a weight series.
pub fn check_weights<W: Weight>(series: WeightSeries, weights: &[W]) -> Result<()> {
    match weights.iter().position(|w| !w.is_admissible()) {
        Some(index) => Err(ObstError::InadmissibleWeight {
            series,
            index,
            value: format!("{:?}", weights[index]),
        }),
        None => Ok(()),
    }
}

/// `a + b`, or [`ObstError::Overflow`] naming the quantity being summed.
#[inline]
pub fn add_or_overflow<W: Weight>(a: W, b: W, what: &'static str) -> Result<W> {
    a.checked_add(b).ok_or(ObstError::Overflow { what })
}

/// Keys must be strictly increasing: sorted, no duplicates.
pub fn check_strictly_increasing<K: Ord>(keys: &[K]) -> Result<()> {
    match keys.windows(2).position(|w| w[0] >= w[1]) {
        Some(pos) => Err(ObstError::KeysNotIncreasing { index: pos + 1 }),
        None => Ok(()),
    }
}
