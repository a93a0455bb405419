//! Size correction multipliers.
//!
//! Small elements move a little faster than the reference size, large ones a
//! little slower: `factor = min(1.5, (SIZE_BASE / size) ^ exponent)`.

use serde::{Deserialize, Serialize};

use crate::constants::{K_MECHANICAL, K_NATURAL, SIZE_BASE, SIZE_FACTOR_CAP};
use crate::formulas::nan_min;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeFactors {
    pub natural: f64,
    pub mechanical: f64,
}

impl SizeFactors {
    pub fn new(size: f64, adjuster: Option<f64>) -> Self {
        let ratio = SIZE_BASE / size;
        Self {
            natural: nan_min(SIZE_FACTOR_CAP, ratio.powf(exponent(K_NATURAL, adjuster))),
            mechanical: nan_min(SIZE_FACTOR_CAP, ratio.powf(exponent(K_MECHANICAL, adjuster))),
        }
    }
}

/// `k * adjuster` when that is finite and nonzero, otherwise a neutral 1.
/// An unset adjuster therefore yields exponent 1, not `k`.
#[inline]
fn exponent(k: f64, adjuster: Option<f64>) -> f64 {
    match adjuster.map(|a| k * a) {
        Some(e) if e.is_finite() && e != 0.0 => e,
        _ => 1.0,
    }
}
