//! Result records. Every value is computed up front and never patched later.

use serde::{Deserialize, Serialize};

use crate::config::MotionParams;
use crate::constants::{DURATION_UNIT, SPEED_UNIT};
use crate::curve::CurveSet;
use crate::formulas::Kinematics;
use crate::mode::{Feel, Mode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedUnit {
    #[serde(rename = "px/s")]
    PixelsPerSecond,
}

impl SpeedUnit {
    pub fn as_str(&self) -> &'static str {
        SPEED_UNIT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationUnit {
    #[serde(rename = "ms")]
    Milliseconds,
}

impl DurationUnit {
    pub fn as_str(&self) -> &'static str {
        DURATION_UNIT
    }
}

/// Curves plus kinematics for one feel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeelTiming {
    pub curves: CurveSet,
    /// px/s
    pub speed: f64,
    /// ms
    pub duration: f64,
}

impl FeelTiming {
    pub fn new(curves: CurveSet, kinematics: Kinematics) -> Self {
        Self {
            curves,
            speed: kinematics.speed,
            duration: kinematics.duration,
        }
    }

    #[inline]
    pub fn kinematics(&self) -> Kinematics {
        Kinematics {
            speed: self.speed,
            duration: self.duration,
        }
    }
}

/// Natural and mechanical timing for one mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeTiming {
    pub natural: FeelTiming,
    pub mechanical: FeelTiming,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_unit: Option<SpeedUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_unit: Option<DurationUnit>,
}

impl ModeTiming {
    pub fn new(mode: Mode, natural: FeelTiming, mechanical: FeelTiming) -> Self {
        let units = mode.has_units();
        Self {
            natural,
            mechanical,
            speed_unit: units.then_some(SpeedUnit::PixelsPerSecond),
            duration_unit: units.then_some(DurationUnit::Milliseconds),
        }
    }

    #[inline]
    pub fn feel(&self, feel: Feel) -> &FeelTiming {
        match feel {
            Feel::Natural => &self.natural,
            Feel::Mechanical => &self.mechanical,
        }
    }
}

/// Echo of how the call was made.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    /// Tag as passed by the caller, even when it fell back to another set.
    pub version: i64,
    pub params: MotionParams,
    /// Requested mode string; absent for all-modes results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

/// Coerced inputs the formulas actually saw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionInput {
    pub distance: f64,
    pub size: f64,
    pub size_factor_adjuster: Option<f64>,
}

/// Single-mode result: `meta`, `input`, and the selected mode's timing spread
/// alongside them. An unknown or missing mode leaves `timing` empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionResult {
    pub meta: Meta,
    pub input: MotionInput,
    #[serde(flatten)]
    pub timing: Option<ModeTiming>,
}

impl MotionResult {
    #[inline]
    pub fn feel(&self, feel: Feel) -> Option<&FeelTiming> {
        self.timing.as_ref().map(|t| t.feel(feel))
    }

    #[inline]
    pub fn natural(&self) -> Option<&FeelTiming> {
        self.feel(Feel::Natural)
    }

    #[inline]
    pub fn mechanical(&self) -> Option<&FeelTiming> {
        self.feel(Feel::Mechanical)
    }
}

/// All three modes at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllModesResult {
    pub meta: Meta,
    pub input: MotionInput,
    #[serde(rename = "move")]
    pub move_: ModeTiming,
    pub scale: ModeTiming,
    pub fade: ModeTiming,
}

impl AllModesResult {
    #[inline]
    pub fn mode(&self, mode: Mode) -> &ModeTiming {
        match mode {
            Mode::Move => &self.move_,
            Mode::Scale => &self.scale,
            Mode::Fade => &self.fade,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formulas::{MECHANICAL_CURVES, NATURAL_CURVES};
    use serde_json::json;

    fn timing(mode: Mode) -> ModeTiming {
        ModeTiming::new(
            mode,
            FeelTiming::new(
                NATURAL_CURVES,
                Kinematics {
                    speed: 800.0,
                    duration: 125.0,
                },
            ),
            FeelTiming::new(
                MECHANICAL_CURVES,
                Kinematics {
                    speed: 1000.0,
                    duration: 100.0,
                },
            ),
        )
    }

    #[test]
    fn fade_has_no_units() {
        assert!(timing(Mode::Fade).speed_unit.is_none());
        let t = timing(Mode::Scale);
        assert_eq!(t.speed_unit.map(|u| u.as_str()), Some("px/s"));
        assert_eq!(t.duration_unit.map(|u| u.as_str()), Some("ms"));
    }

    #[test]
    fn single_mode_result_spreads_timing() {
        let result = MotionResult {
            meta: Meta {
                version: 7,
                params: MotionParams::default(),
                mode: Some("move".into()),
            },
            input: MotionInput {
                distance: 100.0,
                size: 20.0,
                size_factor_adjuster: None,
            },
            timing: Some(timing(Mode::Move)),
        };
        let v = serde_json::to_value(&result).unwrap();
        assert_eq!(v["meta"]["mode"], json!("move"));
        assert_eq!(v["input"]["sizeFactorAdjuster"], json!(null));
        assert_eq!(v["natural"]["duration"], json!(125.0));
        assert_eq!(
            v["mechanical"]["curves"]["easeInOut"],
            json!("cubic-bezier(0.2, 0.2, 0.38, 0.9)")
        );
        assert_eq!(v["speedUnit"], json!("px/s"));
        assert_eq!(v["durationUnit"], json!("ms"));
    }

    #[test]
    fn empty_timing_serializes_meta_and_input_only() {
        let result = MotionResult {
            meta: Meta {
                version: 7,
                params: MotionParams::default(),
                mode: Some("rotate".into()),
            },
            input: MotionInput {
                distance: 1.0,
                size: 20.0,
                size_factor_adjuster: None,
            },
            timing: None,
        };
        let v = serde_json::to_value(&result).unwrap();
        let keys: Vec<&str> = v.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys.len(), 2);
        assert!(keys.contains(&"meta") && keys.contains(&"input"));
        assert!(result.natural().is_none());
    }
}
