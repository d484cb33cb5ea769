//! Core trait definitions for OBST weights.
//!
//! The dynamic program only needs a handful of operations on weights:
//! - checked addition, to accumulate interval weight sums and candidate costs,
//! - a partial order, to keep the cheapest root candidate,
//! - checked scaling by an integer depth, for the cost evaluator,
//! - an admissibility check, so negative or non-finite inputs are rejected
//!   before any table is touched.
//!
//! Integer weights model access *frequencies* and give exact costs.
//! Floating point weights model *probabilities*; comparisons between costs of
//! equal value may then be affected by rounding, so the evaluator cross-check
//! uses [`Weight::approx_eq`] rather than `==`.

use std::fmt::Debug;

/// Numeric weight attached to a key or a gap.
///
/// Semantics:
/// - `ZERO` is the additive identity and the cost of an empty interval when
///   no gap weights are supplied.
/// - `is_admissible` must reject every value for which the DP would stop
///   being monotone (negatives) or stop being totally ordered (NaN).
/// - `checked_add` and `checked_times` return `None` when the result is not
///   representable: integer overflow, or a non-finite float.
pub trait Weight: Copy + PartialOrd + Debug + Send + Sync {
    /// Additive identity.
    const ZERO: Self;

    /// Whether the value may appear as an input weight.
    fn is_admissible(&self) -> bool;

    /// `self + other`, or `None` on overflow.
    fn checked_add(self, other: Self) -> Option<Self>;

    /// `self * depth`, or `None` on overflow.
    fn checked_times(self, depth: usize) -> Option<Self>;

    /// Equality up to the rounding noise of the representation.
    ///
    /// Exact for integers.
    fn approx_eq(self, other: Self) -> bool;

    /// Lossy conversion for display.
    fn as_f64(self) -> f64;
}

macro_rules! impl_unsigned_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            const ZERO: Self = 0;

            #[inline]
            fn is_admissible(&self) -> bool {
                true
            }

            #[inline]
            fn checked_add(self, other: Self) -> Option<Self> {
                <$t>::checked_add(self, other)
            }

            #[inline]
            fn checked_times(self, depth: usize) -> Option<Self> {
                <$t>::try_from(depth).ok().and_then(|d| self.checked_mul(d))
            }

            #[inline]
            fn approx_eq(self, other: Self) -> bool {
                self == other
            }

            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

macro_rules! impl_signed_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            const ZERO: Self = 0;

            #[inline]
            fn is_admissible(&self) -> bool {
                *self >= 0
            }

            #[inline]
            fn checked_add(self, other: Self) -> Option<Self> {
                <$t>::checked_add(self, other)
            }

            #[inline]
            fn checked_times(self, depth: usize) -> Option<Self> {
                <$t>::try_from(depth).ok().and_then(|d| self.checked_mul(d))
            }

            #[inline]
            fn approx_eq(self, other: Self) -> bool {
                self == other
            }

            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

macro_rules! impl_float_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            const ZERO: Self = 0.0;

            #[inline]
            fn is_admissible(&self) -> bool {
                self.is_finite() && *self >= 0.0
            }

            #[inline]
            fn checked_add(self, other: Self) -> Option<Self> {
                let sum = self + other;
                sum.is_finite().then_some(sum)
            }

            #[inline]
            fn checked_times(self, depth: usize) -> Option<Self> {
                let product = self * depth as $t;
                product.is_finite().then_some(product)
            }

            #[inline]
            fn approx_eq(self, other: Self) -> bool {
                crate::utils::within_relative_tolerance(self as f64, other as f64)
            }

            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

impl_unsigned_weight!(u32, u64, usize);
impl_signed_weight!(i32, i64);
impl_float_weight!(f32, f64);
