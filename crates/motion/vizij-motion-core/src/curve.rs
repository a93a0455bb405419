//! Cubic-bezier easing descriptors.
//!
//! Curves serialize as CSS timing-function strings
//! (`"cubic-bezier(0.4, 0.14, 0.3, 1)"`), which is what animation callers feed
//! straight into a transition. Deserialization also accepts `[x1, y1, x2, y2]`.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::MotionError;

/// Control points (x1, y1, x2, y2) of a CSS cubic-bezier timing function.
/// The end points are fixed at (0,0) and (1,1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    pub const LINEAR: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    #[inline]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    #[inline]
    pub fn points(&self) -> [f64; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    /// Eased progress for linear progress `t` in [0,1].
    /// Inverts x(t) by binary search, then evaluates y at the found parameter.
    pub fn ease(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        // Bezier(0,0,1,1) is exactly linear
        if *self == Self::LINEAR {
            return t;
        }
        // Monotonic X in [0,1] assumed for x1/x2 ∈ [0,1]
        let mut lo = 0.0f64;
        let mut hi = 1.0f64;
        let mut mid = t;
        for _ in 0..48 {
            let x = cubic_bezier(0.0, self.x1, self.x2, 1.0, mid);
            if (x - t).abs() < 1e-9 {
                break;
            }
            if x < t {
                lo = mid;
            } else {
                hi = mid;
            }
            mid = 0.5 * (lo + hi);
        }
        cubic_bezier(0.0, self.y1, self.y2, 1.0, mid)
    }
}

/// Cubic Bezier basis function
#[inline]
fn cubic_bezier(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

impl From<[f64; 4]> for CubicBezier {
    fn from(p: [f64; 4]) -> Self {
        Self::new(p[0], p[1], p[2], p[3])
    }
}

impl fmt::Display for CubicBezier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

impl FromStr for CubicBezier {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| MotionError::InvalidCurve {
            input: s.to_string(),
            reason: reason.to_string(),
        };
        let body = s
            .trim()
            .strip_prefix("cubic-bezier(")
            .ok_or_else(|| invalid("expected cubic-bezier(...)"))?
            .strip_suffix(')')
            .ok_or_else(|| invalid("missing closing parenthesis"))?;

        let mut points = [0.0f64; 4];
        let mut count = 0;
        for part in body.split(',') {
            if count == 4 {
                return Err(invalid("expected 4 control points"));
            }
            points[count] = part
                .trim()
                .parse::<f64>()
                .map_err(|e| invalid(&format!("bad control point '{}': {e}", part.trim())))?;
            count += 1;
        }
        if count != 4 {
            return Err(invalid("expected 4 control points"));
        }
        Ok(points.into())
    }
}

impl Serialize for CubicBezier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CubicBezier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Css(String),
            Points([f64; 4]),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Css(s) => s.parse().map_err(serde::de::Error::custom),
            Repr::Points(p) => Ok(p.into()),
        }
    }
}

/// Named member of a [`CurveSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CurveKind {
    EaseInOut,
    EaseIn,
    EaseOut,
}

/// The three easing curves published for one mode/feel pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveSet {
    pub ease_in_out: CubicBezier,
    pub ease_in: CubicBezier,
    pub ease_out: CubicBezier,
}

impl CurveSet {
    #[inline]
    pub fn get(&self, kind: CurveKind) -> CubicBezier {
        match kind {
            CurveKind::EaseInOut => self.ease_in_out,
            CurveKind::EaseIn => self.ease_in,
            CurveKind::EaseOut => self.ease_out,
        }
    }

    /// Same set with a different `easeIn`; the versions differ only there.
    #[inline]
    pub const fn with_ease_in(self, ease_in: CubicBezier) -> Self {
        Self {
            ease_in_out: self.ease_in_out,
            ease_in,
            ease_out: self.ease_out,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_css() {
        let c = CubicBezier::new(0.4, 0.14, 0.3, 1.0);
        assert_eq!(c.to_string(), "cubic-bezier(0.4, 0.14, 0.3, 1)");
        assert_eq!(
            CubicBezier::new(0.0, 0.0, 0.38, 0.9).to_string(),
            "cubic-bezier(0, 0, 0.38, 0.9)"
        );
    }

    #[test]
    fn parses_css_descriptor() {
        let c: CubicBezier = " cubic-bezier(0.2, 0.1,1 , 1) ".parse().unwrap();
        assert_eq!(c, CubicBezier::new(0.2, 0.1, 1.0, 1.0));
    }

    #[test]
    fn rejects_malformed_descriptor() {
        for bad in [
            "ease-in",
            "cubic-bezier(0.2, 0.1, 1)",
            "cubic-bezier(0.2, 0.1, 1, 1, 0)",
            "cubic-bezier(0.2, x, 1, 1)",
            "cubic-bezier(0.2, 0.1, 1, 1",
        ] {
            let err = bad.parse::<CubicBezier>().unwrap_err();
            assert_eq!(err.category(), "curve", "{bad}");
        }
    }

    #[test]
    fn serde_accepts_string_and_array() {
        let json = serde_json::to_string(&CubicBezier::new(0.4, 0.14, 1.0, 1.0)).unwrap();
        assert_eq!(json, "\"cubic-bezier(0.4, 0.14, 1, 1)\"");

        let from_str: CubicBezier = serde_json::from_str(&json).unwrap();
        let from_arr: CubicBezier = serde_json::from_str("[0.4, 0.14, 1, 1]").unwrap();
        assert_eq!(from_str, from_arr);
    }

    #[test]
    fn ease_hits_endpoints_and_is_monotonic() {
        let c = CubicBezier::new(0.4, 0.14, 0.3, 1.0);
        assert!(c.ease(0.0).abs() < 1e-6);
        assert!((c.ease(1.0) - 1.0).abs() < 1e-6);
        let mut prev = 0.0;
        for i in 1..=20 {
            let y = c.ease(i as f64 / 20.0);
            assert!(y >= prev - 1e-9, "non-monotonic at {i}: {y} < {prev}");
            prev = y;
        }
    }

    #[test]
    fn ease_out_leads_linear() {
        let ease_out = CubicBezier::new(0.0, 0.0, 0.3, 1.0);
        assert!(ease_out.ease(0.25) > 0.25);
        assert_eq!(CubicBezier::LINEAR.ease(0.25), 0.25);
        assert_eq!(CubicBezier::LINEAR.ease(2.0), 1.0);
    }

    #[test]
    fn curve_set_lookup() {
        let set = CurveSet {
            ease_in_out: CubicBezier::new(0.4, 0.14, 0.3, 1.0),
            ease_in: CubicBezier::new(0.4, 0.14, 1.0, 1.0),
            ease_out: CubicBezier::new(0.0, 0.0, 0.3, 1.0),
        };
        assert_eq!(set.get(CurveKind::EaseIn), set.ease_in);
        let tweaked = set.with_ease_in(CubicBezier::LINEAR);
        assert_eq!(tweaked.ease_in, CubicBezier::LINEAR);
        assert_eq!(tweaked.ease_out, set.ease_out);
    }

    #[test]
    fn points_expose_control_values() {
        let c = CubicBezier::new(0.4, 0.14, 0.3, 1.0);
        assert_eq!(c.points(), [0.4, 0.14, 0.3, 1.0]);
        assert_eq!(CubicBezier::from(c.points()), c);
        assert_eq!(CubicBezier::LINEAR.points(), [0.0, 0.0, 1.0, 1.0]);
    }
}
