//! Legacy formula set. Speed is primary for move/scale and duration is
//! floored; move and scale share formulas and curves.

use super::{
    fade_kinematics, mechanical_speed, nan_max, natural_speed, FormulaSet, FormulaVersion,
    Kinematics, MECHANICAL_CURVES, MECHANICAL_FADE_EASE_IN, NATURAL_CURVES,
};
use crate::constants::{V6_MECHANICAL_MIN_MS, V6_NATURAL_MIN_MS};
use crate::curve::CurveSet;
use crate::mode::{Feel, Mode};
use crate::size_factor::SizeFactors;

#[derive(Debug, Clone, Copy, Default)]
pub struct V6Formulas;

impl FormulaSet for V6Formulas {
    fn version(&self) -> FormulaVersion {
        FormulaVersion::V6
    }

    fn curves(&self, mode: Mode, feel: Feel) -> CurveSet {
        match (feel, mode) {
            (Feel::Natural, _) => NATURAL_CURVES,
            (Feel::Mechanical, Mode::Fade) => {
                MECHANICAL_CURVES.with_ease_in(MECHANICAL_FADE_EASE_IN)
            }
            (Feel::Mechanical, Mode::Move | Mode::Scale) => MECHANICAL_CURVES,
        }
    }

    fn kinematics(
        &self,
        mode: Mode,
        distance: f64,
        factors: SizeFactors,
    ) -> (Kinematics, Kinematics) {
        match mode {
            Mode::Move | Mode::Scale => {
                let natural = natural_speed(distance, factors);
                let mechanical = mechanical_speed(distance, factors);
                (
                    Kinematics {
                        speed: natural,
                        duration: nan_max(V6_NATURAL_MIN_MS, distance / natural * 1000.0),
                    },
                    Kinematics {
                        speed: mechanical,
                        duration: nan_max(V6_MECHANICAL_MIN_MS, distance / mechanical * 1000.0),
                    },
                )
            }
            Mode::Fade => fade_kinematics(distance, factors),
        }
    }
}
