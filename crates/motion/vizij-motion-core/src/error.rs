//! Error types for the strict entry points.
//!
//! The permissive [`crate::compute`] never fails; these errors are produced by
//! [`crate::try_compute`], curve parsing and the JSON request layer.

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum MotionError {
    /// Mode string is not one of move/scale/fade
    #[error("Unknown motion mode: {mode}")]
    UnknownMode { mode: String },

    /// No mode given to a single-mode strict call
    #[error("Motion mode is required")]
    MissingMode,

    #[error("Distance must be finite, got {distance}")]
    NonFiniteDistance { distance: f64 },

    #[error("Size must be finite and greater than zero, got {size}")]
    NonPositiveSize { size: f64 },

    /// Formula-set tag without a registered strategy
    #[error("Unsupported formula version: {version}")]
    UnsupportedVersion { version: i64 },

    #[error("Size factor adjuster must be finite, got {adjuster}")]
    InvalidAdjuster { adjuster: f64 },

    /// Malformed cubic-bezier descriptor
    #[error("Invalid curve '{input}': {reason}")]
    InvalidCurve { input: String, reason: String },

    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl MotionError {
    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnknownMode { .. } | Self::MissingMode => "mode",
            Self::NonFiniteDistance { .. }
            | Self::NonPositiveSize { .. }
            | Self::InvalidAdjuster { .. } => "validation",
            Self::UnsupportedVersion { .. } => "version",
            Self::InvalidCurve { .. } => "curve",
            Self::Serialization { .. } => "serialization",
        }
    }
}

impl From<serde_json::Error> for MotionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            reason: err.to_string(),
        }
    }
}
