use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::MotionError;

/// Category of visual change being animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Position change, distance in px
    Move,
    /// Size change, distance in px
    Scale,
    /// Opacity change, distance in percent
    Fade,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Move, Mode::Scale, Mode::Fade];

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Move => "move",
            Self::Scale => "scale",
            Self::Fade => "fade",
        }
    }

    /// Exact, case-sensitive lookup. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }

    /// Move and scale report `px/s` and `ms`; fade carries no unit fields.
    #[inline]
    pub fn has_units(&self) -> bool {
        !matches!(self, Self::Fade)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| MotionError::UnknownMode {
            mode: s.to_string(),
        })
    }
}

/// Timing preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feel {
    Natural,
    Mechanical,
}

impl Feel {
    pub const ALL: [Feel; 2] = [Feel::Natural, Feel::Mechanical];

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Natural => "natural",
            Self::Mechanical => "mechanical",
        }
    }
}
