//! Entry points.
//!
//! [`compute`] is the permissive contract: it never fails and lets NaN or
//! Infinity flow into the result for degenerate inputs. [`try_compute`]
//! validates first and returns the same numbers for accepted inputs.

use log::{debug, trace};

use crate::config::MotionParams;
use crate::constants::{DEFAULT_MODE, DEFAULT_SIZE, DEFAULT_VERSION};
use crate::formulas::FormulaVersion;
use crate::mode::Mode;
use crate::result::{AllModesResult, Meta, MotionInput, MotionResult};
use crate::size_factor::SizeFactors;
use crate::{MotionError, Result};

/// Compute timing for one mode.
///
/// `mode` outside move/scale/fade (or `None`) yields a result with `meta` and
/// `input` only. `version` tags other than 6 and 7 use the version 6 formulas.
pub fn compute(
    distance: f64,
    size: f64,
    mode: Option<&str>,
    version: i64,
    params: &MotionParams,
) -> MotionResult {
    let formulas = FormulaVersion::from_tag(version).formulas();
    let factors = SizeFactors::new(size, params.size_factor_adjuster);
    trace!(
        "motion v{} mode={mode:?} distance={distance} size={size} factors={factors:?}",
        formulas.version().tag()
    );

    let timing = match mode.and_then(Mode::parse) {
        Some(m) => Some(formulas.mode_timing(m, distance, factors)),
        None => {
            debug!("no timing for mode {mode:?}");
            None
        }
    };

    MotionResult {
        meta: Meta {
            version,
            params: *params,
            mode: mode.map(str::to_owned),
        },
        input: input(distance, size, params),
        timing,
    }
}

/// [`compute`] with `size = 20`, `mode = "move"`, `version = 7` and no params.
pub fn compute_default(distance: f64) -> MotionResult {
    compute(
        distance,
        DEFAULT_SIZE,
        Some(DEFAULT_MODE),
        DEFAULT_VERSION,
        &MotionParams::default(),
    )
}

/// Timing for move, scale and fade in one result. `meta.mode` is absent.
pub fn compute_all(
    distance: f64,
    size: f64,
    version: i64,
    params: &MotionParams,
) -> AllModesResult {
    let formulas = FormulaVersion::from_tag(version).formulas();
    let factors = SizeFactors::new(size, params.size_factor_adjuster);
    AllModesResult {
        meta: Meta {
            version,
            params: *params,
            mode: None,
        },
        input: input(distance, size, params),
        move_: formulas.mode_timing(Mode::Move, distance, factors),
        scale: formulas.mode_timing(Mode::Scale, distance, factors),
        fade: formulas.mode_timing(Mode::Fade, distance, factors),
    }
}

/// Validated variant of [`compute`].
///
/// Rejects a missing or unknown mode, a non-finite distance, a size that is
/// not finite and positive, an unregistered version, and a non-finite
/// adjuster. Negative distances are accepted.
pub fn try_compute(
    distance: f64,
    size: f64,
    mode: Option<&str>,
    version: i64,
    params: &MotionParams,
) -> Result<MotionResult> {
    let name = mode.ok_or(MotionError::MissingMode)?;
    name.parse::<Mode>()?;
    if !distance.is_finite() {
        return Err(MotionError::NonFiniteDistance { distance });
    }
    if !(size.is_finite() && size > 0.0) {
        return Err(MotionError::NonPositiveSize { size });
    }
    FormulaVersion::try_from_tag(version)?;
    if let Some(adjuster) = params.size_factor_adjuster {
        if !adjuster.is_finite() {
            return Err(MotionError::InvalidAdjuster { adjuster });
        }
    }
    Ok(compute(distance, size, mode, version, params))
}

fn input(distance: f64, size: f64, params: &MotionParams) -> MotionInput {
    MotionInput {
        distance,
        size,
        size_factor_adjuster: params.size_factor_adjuster,
    }
}
