//! Versioned formula sets.
//!
//! Each version is a stateless strategy behind [`FormulaSet`]; an integer tag
//! selects one through [`FormulaVersion`]. Adding a version means adding a
//! module and a variant, never editing an existing set.

mod v6;
mod v7;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{
    FADE_FRAMES_PER_SECOND, FADE_MECHANICAL_OFFSET, FADE_MECHANICAL_SLOPE, FADE_MIN,
    FADE_NATURAL_OFFSET, FADE_NATURAL_SLOPE, MECHANICAL_BASE_SPEED, MECHANICAL_SPEED_PER_PX,
    NATURAL_BASE_SPEED, NATURAL_SPEED_PER_PX,
};
use crate::curve::{CubicBezier, CurveSet};
use crate::mode::{Feel, Mode};
use crate::result::{FeelTiming, ModeTiming};
use crate::size_factor::SizeFactors;
use crate::MotionError;

pub use v6::V6Formulas;
pub use v7::V7Formulas;

/// Natural curves are shared by every version and mode.
pub const NATURAL_CURVES: CurveSet = CurveSet {
    ease_in_out: CubicBezier::new(0.4, 0.14, 0.3, 1.0),
    ease_in: CubicBezier::new(0.4, 0.14, 1.0, 1.0),
    ease_out: CubicBezier::new(0.0, 0.0, 0.3, 1.0),
};

/// Mechanical base set; versions override `easeIn` per mode.
pub const MECHANICAL_CURVES: CurveSet = CurveSet {
    ease_in_out: CubicBezier::new(0.2, 0.2, 0.38, 0.9),
    ease_in: CubicBezier::new(0.2, 0.0, 1.0, 1.0),
    ease_out: CubicBezier::new(0.0, 0.0, 0.38, 0.9),
};

/// Mechanical fade easeIn, identical in every version.
pub const MECHANICAL_FADE_EASE_IN: CubicBezier = CubicBezier::new(0.2, 0.0, 1.0, 0.9);

/// Speed (px/s) and duration (ms) for one feel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Kinematics {
    pub speed: f64,
    pub duration: f64,
}

impl Kinematics {
    /// Duration is primary; speed follows from `d = speed * duration / 1000`.
    #[inline]
    pub fn from_duration(distance: f64, duration: f64) -> Self {
        Self {
            speed: distance / duration * 1000.0,
            duration,
        }
    }
}

/// A formula set: curves and kinematics per mode and feel.
pub trait FormulaSet: Send + Sync {
    fn version(&self) -> FormulaVersion;

    /// Static easing curves; never depend on distance or size.
    fn curves(&self, mode: Mode, feel: Feel) -> CurveSet;

    /// `(natural, mechanical)` kinematics for `mode`.
    fn kinematics(
        &self,
        mode: Mode,
        distance: f64,
        factors: SizeFactors,
    ) -> (Kinematics, Kinematics);

    /// Fully built timing block for one mode.
    fn mode_timing(&self, mode: Mode, distance: f64, factors: SizeFactors) -> ModeTiming {
        let (natural, mechanical) = self.kinematics(mode, distance, factors);
        ModeTiming::new(
            mode,
            FeelTiming::new(self.curves(mode, Feel::Natural), natural),
            FeelTiming::new(self.curves(mode, Feel::Mechanical), mechanical),
        )
    }
}

/// Formula-set selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormulaVersion {
    /// Legacy set; also the default branch for unrecognized tags
    V6,
    /// Current set
    V7,
}

impl FormulaVersion {
    pub const ALL: [FormulaVersion; 2] = [FormulaVersion::V6, FormulaVersion::V7];
    pub const DEFAULT: FormulaVersion = FormulaVersion::V7;
    pub const FALLBACK: FormulaVersion = FormulaVersion::V6;

    #[inline]
    pub fn tag(&self) -> i64 {
        match self {
            Self::V6 => 6,
            Self::V7 => 7,
        }
    }

    /// Registered version for `tag`, if any.
    pub fn lookup(tag: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.tag() == tag)
    }

    /// Permissive dispatch: unknown tags use [`FormulaVersion::FALLBACK`].
    pub fn from_tag(tag: i64) -> Self {
        Self::lookup(tag).unwrap_or_else(|| {
            debug!(
                "unknown formula version {tag}, using v{}",
                Self::FALLBACK.tag()
            );
            Self::FALLBACK
        })
    }

    /// Strict dispatch for validated callers.
    pub fn try_from_tag(tag: i64) -> Result<Self, MotionError> {
        Self::lookup(tag).ok_or(MotionError::UnsupportedVersion { version: tag })
    }

    pub fn formulas(&self) -> &'static dyn FormulaSet {
        match self {
            Self::V6 => &V6Formulas,
            Self::V7 => &V7Formulas,
        }
    }
}

impl Default for FormulaVersion {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// `max` that propagates NaN from either side.
#[inline]
pub(crate) fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

/// `min` that propagates NaN from either side.
#[inline]
pub(crate) fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

#[inline]
pub(crate) fn natural_speed(distance: f64, factors: SizeFactors) -> f64 {
    NATURAL_SPEED_PER_PX * distance + NATURAL_BASE_SPEED * factors.natural
}

#[inline]
pub(crate) fn mechanical_speed(distance: f64, factors: SizeFactors) -> f64 {
    MECHANICAL_SPEED_PER_PX * distance + MECHANICAL_BASE_SPEED * factors.mechanical
}

/// Fade timing shared by all versions. Duration is primary and divided by the
/// size factor; speed is informational.
pub(crate) fn fade_kinematics(distance: f64, factors: SizeFactors) -> (Kinematics, Kinematics) {
    let natural_frames = FADE_NATURAL_SLOPE * distance + FADE_NATURAL_OFFSET;
    let natural_ms = natural_frames / FADE_FRAMES_PER_SECOND * 1000.0;
    let mechanical_ms = FADE_MECHANICAL_SLOPE * distance + FADE_MECHANICAL_OFFSET;
    let natural = nan_max(FADE_MIN, natural_ms) / factors.natural;
    let mechanical = nan_max(FADE_MIN, mechanical_ms) / factors.mechanical;
    (
        Kinematics::from_duration(distance, natural),
        Kinematics::from_duration(distance, mechanical),
    )
}
