//! Tuning knobs accepted alongside every motion request.

use serde::{Deserialize, Serialize};

use crate::coercion::deserialize_optional_f64;

/// Optional adjustments applied to the size-factor derivation.
/// Keep this minimal; new knobs must default to "no effect".
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionParams {
    /// Multiplies the size-factor exponent. Unset, NaN, infinite or zero
    /// values fall back to a neutral exponent of 1.
    #[serde(default, deserialize_with = "deserialize_optional_f64")]
    pub size_factor_adjuster: Option<f64>,
}

impl MotionParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size_factor_adjuster(mut self, adjuster: f64) -> Self {
        self.size_factor_adjuster = Some(adjuster);
        self
    }
}
