//! JSON request layer.
//!
//! Mirrors the positional call interface with the same defaults, so a caller
//! holding loosely typed JSON (numbers as strings, missing fields) gets the
//! same answer as the positional API.

use serde::{Deserialize, Serialize};

use crate::calculator::{compute, compute_all};
use crate::coercion::{deserialize_f64, deserialize_mode, deserialize_version};
use crate::config::MotionParams;
use crate::constants::{DEFAULT_MODE, DEFAULT_SIZE, DEFAULT_VERSION};
use crate::result::{AllModesResult, MotionResult};
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionRequest {
    /// Missing distance coerces to NaN.
    #[serde(default = "nan", deserialize_with = "deserialize_f64")]
    pub distance: f64,
    #[serde(default = "default_size", deserialize_with = "deserialize_f64")]
    pub size: f64,
    /// Missing -> "move"; explicit `null` -> no mode; numbers become text.
    #[serde(default = "default_mode", deserialize_with = "deserialize_mode")]
    pub mode: Option<String>,
    /// Non-integral or non-numeric tags select the fallback set.
    #[serde(default = "default_version", deserialize_with = "deserialize_version")]
    pub version: i64,
    #[serde(default)]
    pub params: MotionParams,
}

fn nan() -> f64 {
    f64::NAN
}

fn default_size() -> f64 {
    DEFAULT_SIZE
}

fn default_mode() -> Option<String> {
    Some(DEFAULT_MODE.to_string())
}

fn default_version() -> i64 {
    DEFAULT_VERSION
}

impl MotionRequest {
    pub fn new(distance: f64) -> Self {
        Self {
            distance,
            size: DEFAULT_SIZE,
            mode: default_mode(),
            version: DEFAULT_VERSION,
            params: MotionParams::default(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn compute(&self) -> MotionResult {
        compute(
            self.distance,
            self.size,
            self.mode.as_deref(),
            self.version,
            &self.params,
        )
    }

    /// All modes; `mode` is ignored.
    pub fn compute_all(&self) -> AllModesResult {
        compute_all(self.distance, self.size, self.version, &self.params)
    }
}
