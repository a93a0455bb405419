//! Current formula set. Move durations are floored by a capped linear ramp
//! and speed is derived from duration. Scale reuses move's numbers.

use super::{fade_kinematics, mechanical_speed, nan_max, nan_min, natural_speed};
use super::{FormulaSet, FormulaVersion, Kinematics};
use super::{MECHANICAL_CURVES, MECHANICAL_FADE_EASE_IN, NATURAL_CURVES};
use crate::constants::{
    V7_MECHANICAL_FLOOR_CAP_MS, V7_MECHANICAL_FLOOR_OFFSET_MS, V7_MECHANICAL_FLOOR_SLOPE,
    V7_NATURAL_FLOOR_CAP_MS, V7_NATURAL_FLOOR_OFFSET_MS, V7_NATURAL_FLOOR_SLOPE,
};
use crate::curve::{CubicBezier, CurveSet};
use crate::mode::{Feel, Mode};
use crate::size_factor::SizeFactors;

const MECHANICAL_MOVE_EASE_IN: CubicBezier = CubicBezier::new(0.2, 0.1, 1.0, 1.0);
const MECHANICAL_SCALE_EASE_IN: CubicBezier = CubicBezier::new(0.4, 0.1, 1.0, 1.0);

#[derive(Debug, Clone, Copy, Default)]
pub struct V7Formulas;

impl V7Formulas {
    /// Lower bound for the natural move duration at `distance`.
    #[inline]
    pub fn natural_floor(distance: f64) -> f64 {
        nan_min(
            V7_NATURAL_FLOOR_SLOPE * distance + V7_NATURAL_FLOOR_OFFSET_MS,
            V7_NATURAL_FLOOR_CAP_MS,
        )
    }

    /// Lower bound for the mechanical move duration at `distance`.
    #[inline]
    pub fn mechanical_floor(distance: f64) -> f64 {
        nan_min(
            V7_MECHANICAL_FLOOR_SLOPE * distance + V7_MECHANICAL_FLOOR_OFFSET_MS,
            V7_MECHANICAL_FLOOR_CAP_MS,
        )
    }

    fn move_kinematics(distance: f64, factors: SizeFactors) -> (Kinematics, Kinematics) {
        let natural = nan_max(
            Self::natural_floor(distance),
            distance / natural_speed(distance, factors) * 1000.0,
        );
        let mechanical = nan_max(
            Self::mechanical_floor(distance),
            distance / mechanical_speed(distance, factors) * 1000.0,
        );
        (
            Kinematics::from_duration(distance, natural),
            Kinematics::from_duration(distance, mechanical),
        )
    }
}

impl FormulaSet for V7Formulas {
    fn version(&self) -> FormulaVersion {
        FormulaVersion::V7
    }

    fn curves(&self, mode: Mode, feel: Feel) -> CurveSet {
        let mechanical_ease_in = match mode {
            Mode::Move => MECHANICAL_MOVE_EASE_IN,
            Mode::Scale => MECHANICAL_SCALE_EASE_IN,
            Mode::Fade => MECHANICAL_FADE_EASE_IN,
        };
        match feel {
            Feel::Natural => NATURAL_CURVES,
            Feel::Mechanical => MECHANICAL_CURVES.with_ease_in(mechanical_ease_in),
        }
    }

    fn kinematics(
        &self,
        mode: Mode,
        distance: f64,
        factors: SizeFactors,
    ) -> (Kinematics, Kinematics) {
        match mode {
            // scale mirrors move exactly; only the curves differ
            Mode::Move | Mode::Scale => Self::move_kinematics(distance, factors),
            Mode::Fade => fade_kinematics(distance, factors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn floor_ramps_then_caps() {
        assert_eq!(V7Formulas::natural_floor(0.0), 112.0);
        assert_eq!(V7Formulas::natural_floor(100.0), 122.0);
        assert_eq!(V7Formulas::natural_floor(1000.0), 142.0);
        assert_eq!(V7Formulas::mechanical_floor(0.0), 95.0);
        assert_eq!(V7Formulas::mechanical_floor(5000.0), 140.0);
    }

    #[test]
    fn reference_move() {
        let f = SizeFactors::new(20.0, None);
        let (n, m) = V7Formulas.kinematics(Mode::Move, 100.0, f);
        assert_eq!(n.duration, 122.0);
        assert_eq!(m.duration, 98.0);
        assert_relative_eq!(n.speed, 100.0 / 122.0 * 1000.0);
        assert_relative_eq!(m.speed, 100.0 / 98.0 * 1000.0);
    }

    #[test]
    fn zero_distance_has_zero_speed() {
        let f = SizeFactors::new(20.0, None);
        let (n, m) = V7Formulas.kinematics(Mode::Move, 0.0, f);
        assert_eq!(n.duration, 112.0);
        assert_eq!(m.duration, 95.0);
        assert_eq!(n.speed, 0.0);
        assert_eq!(m.speed, 0.0);
    }

    #[test]
    fn scale_mirrors_move_numbers_but_not_curves() {
        let f = SizeFactors::new(12.0, Some(2.5));
        assert_eq!(
            V7Formulas.kinematics(Mode::Scale, 480.0, f),
            V7Formulas.kinematics(Mode::Move, 480.0, f)
        );
        assert_ne!(
            V7Formulas.curves(Mode::Scale, Feel::Mechanical).ease_in,
            V7Formulas.curves(Mode::Move, Feel::Mechanical).ease_in
        );
        assert_eq!(
            V7Formulas.curves(Mode::Scale, Feel::Natural),
            V7Formulas.curves(Mode::Move, Feel::Natural)
        );
    }
}
