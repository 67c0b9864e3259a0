//! Control points and the two-handle timing curve.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CurveError;
use crate::evaluator::Easing;

/// A point in curve space.
///
/// `x` is progress; `y` is eased output and may leave `[0,1]` for
/// overshooting curves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Names one of the two interior control points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handle {
    /// First control point, attached to the `(0,0)` anchor.
    P1,
    /// Second control point, attached to the `(1,1)` anchor.
    P2,
}

impl Handle {
    /// Both handles in curve order.
    pub const ALL: [Handle; 2] = [Handle::P1, Handle::P2];

    /// Lowercase name (`"p1"` / `"p2"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Handle::P1 => "p1",
            Handle::P2 => "p2",
        }
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Handle {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "p1" => Ok(Handle::P1),
            "p2" => Ok(Handle::P2),
            _ => Err(CurveError::Parse(s.to_string())),
        }
    }
}

/// A CSS-style cubic Bezier timing curve.
///
/// Only the interior control points are stored; the anchors are fixed at
/// `(0,0)` and `(1,1)`. The curve is a plain value: edits go through
/// [`with_handle`](Self::with_handle) and produce a new curve.
///
/// # Precondition
///
/// `p1.x` and `p2.x` must lie in `[0,1]` for `x(t)` to be monotonic. The
/// evaluator does not check or clamp this; use [`validate`](Self::validate)
/// to reject such curves, or let the editor geometry clamp dragged handles.
///
/// # Example
///
/// ```
/// use easing_curves::BezierCurve;
///
/// let ease = BezierCurve::new(0.25, 0.1, 0.25, 1.0);
/// let y = ease.easing().ease(0.5);
/// assert!((0.80..=0.82).contains(&y));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BezierCurve {
    /// First interior control point.
    pub p1: Point,
    /// Second interior control point.
    pub p2: Point,
}

impl BezierCurve {
    /// Create a curve from the four `cubic-bezier()` numbers.
    #[inline]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            p1: Point::new(x1, y1),
            p2: Point::new(x2, y2),
        }
    }

    /// Create a curve from its two control points.
    #[inline]
    pub const fn from_points(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// The identity curve `(0,0)-(1,1)`.
    pub const fn linear() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    /// Control point for `handle`.
    #[inline]
    pub const fn handle(&self, handle: Handle) -> Point {
        match handle {
            Handle::P1 => self.p1,
            Handle::P2 => self.p2,
        }
    }

    /// A copy of this curve with `handle` moved to `point`.
    #[must_use]
    pub const fn with_handle(self, handle: Handle, point: Point) -> Self {
        match handle {
            Handle::P1 => Self { p1: point, ..self },
            Handle::P2 => Self { p2: point, ..self },
        }
    }

    /// Coordinates in `cubic-bezier()` order: `[x1, y1, x2, y2]`.
    #[inline]
    pub const fn coordinates(&self) -> [f64; 4] {
        [self.p1.x, self.p1.y, self.p2.x, self.p2.y]
    }

    /// Whether both x-coordinates are inside `[0,1]`.
    pub fn is_monotonic(&self) -> bool {
        (0.0..=1.0).contains(&self.p1.x) && (0.0..=1.0).contains(&self.p2.x)
    }

    /// Check the evaluation precondition.
    ///
    /// # Errors
    ///
    /// * [`CurveError::NonFiniteCoordinate`] if any coordinate is NaN or infinite
    /// * [`CurveError::ControlPointOutOfDomain`] if an x-coordinate is outside `[0,1]`
    pub fn validate(&self) -> Result<(), CurveError> {
        for handle in Handle::ALL {
            let point = self.handle(handle);
            for (coordinate, value) in [("x", point.x), ("y", point.y)] {
                if !value.is_finite() {
                    return Err(CurveError::NonFiniteCoordinate {
                        handle,
                        coordinate,
                        value,
                    });
                }
            }
            if !(0.0..=1.0).contains(&point.x) {
                return Err(CurveError::ControlPointOutOfDomain {
                    handle,
                    value: point.x,
                });
            }
        }
        Ok(())
    }

    /// Build an evaluator for this curve.
    pub fn easing(&self) -> Easing {
        Easing::new(*self)
    }
}

impl Default for BezierCurve {
    fn default() -> Self {
        Self::linear()
    }
}
