//! Tuning constants shared by the formula sets.

/// Reference element size (px²) at which the size factors are exactly 1.
pub const SIZE_BASE: f64 = 20.0;

/// Upper bound for both size factors; keeps tiny elements from racing.
pub const SIZE_FACTOR_CAP: f64 = 1.5;

/// Exponent scale for the natural size factor.
pub const K_NATURAL: f64 = 0.1;

/// Exponent scale for the mechanical size factor.
pub const K_MECHANICAL: f64 = 0.05;

/// Default element size when the caller passes none.
pub const DEFAULT_SIZE: f64 = SIZE_BASE;

/// Formula-set tag used when the caller passes none.
pub const DEFAULT_VERSION: i64 = 7;

/// Mode name used when the caller passes none.
pub const DEFAULT_MODE: &str = "move";

// Version 6 move/scale duration floors (ms).
pub const V6_NATURAL_MIN_MS: f64 = 110.0;
pub const V6_MECHANICAL_MIN_MS: f64 = 80.0;

// Base speed (px/s) per unit size factor, and speed gain per pixel of distance.
pub const NATURAL_BASE_SPEED: f64 = 1200.0;
pub const NATURAL_SPEED_PER_PX: f64 = 3.0;
pub const MECHANICAL_BASE_SPEED: f64 = 2500.0;
pub const MECHANICAL_SPEED_PER_PX: f64 = 5.0;

// Version 7 move floors: `min(slope * d + offset, cap)`.
pub const V7_NATURAL_FLOOR_SLOPE: f64 = 0.1;
pub const V7_NATURAL_FLOOR_OFFSET_MS: f64 = 112.0;
pub const V7_NATURAL_FLOOR_CAP_MS: f64 = 142.0;
pub const V7_MECHANICAL_FLOOR_SLOPE: f64 = 0.03;
pub const V7_MECHANICAL_FLOOR_OFFSET_MS: f64 = 95.0;
pub const V7_MECHANICAL_FLOOR_CAP_MS: f64 = 140.0;

// Fade (all versions). The natural curve is expressed in 60 Hz frames.
pub const FADE_MIN: f64 = 6.0;
pub const FADE_NATURAL_SLOPE: f64 = 0.01;
pub const FADE_NATURAL_OFFSET: f64 = 5.428_571_428_4;
pub const FADE_FRAMES_PER_SECOND: f64 = 60.0;
pub const FADE_MECHANICAL_SLOPE: f64 = 0.005_357_142_857;
pub const FADE_MECHANICAL_OFFSET: f64 = 3.257_142_857;

pub const SPEED_UNIT: &str = "px/s";
pub const DURATION_UNIT: &str = "ms";
