//! Vizij Motion Core
//!
//! Computes timing parameters (speed, duration and cubic-bezier easing) for a UI
//! element's transition from the amount of change, the element's size, the kind
//! of transition and a formula-set version. Every entry point is a pure
//! function: the same inputs always produce the same result.
//!
//! Two feels are produced per mode: `natural` (organic deceleration) and
//! `mechanical` (stiffer, closer to linear).

pub mod calculator;
pub mod coercion;
pub mod config;
pub mod constants;
pub mod curve;
pub mod error;
pub mod formulas;
pub mod mode;
pub mod request;
pub mod result;
pub mod size_factor;

// Re-exports for consumers (adapters)
pub use calculator::{compute, compute_all, compute_default, try_compute};
pub use config::MotionParams;
pub use curve::{CubicBezier, CurveKind, CurveSet};
pub use error::MotionError;
pub use formulas::{FormulaSet, FormulaVersion, Kinematics};
pub use mode::{Feel, Mode};
pub use request::MotionRequest;
pub use result::{
    AllModesResult, DurationUnit, FeelTiming, Meta, ModeTiming, MotionInput, MotionResult,
    SpeedUnit,
};
pub use size_factor::SizeFactors;

/// Motion core result type
pub type Result<T> = core::result::Result<T, MotionError>;
