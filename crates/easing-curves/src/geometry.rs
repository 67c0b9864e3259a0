//! Mapping between curve space and the pixel space of a handle editor.
//!
//! Curve space grows upward with `(0,0)` at the bottom-left anchor; pixel
//! space grows downward with `(0,0)` at the top-left corner of the canvas.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CurveError;
use crate::model::{BezierCurve, Handle, Point};

/// Default vertical clamp range for dragged handles.
pub const DEFAULT_Y_RANGE: (f64, f64) = (-2.0, 2.0);

/// Pixel positions of both control points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HandlePixels {
    /// First control point in pixels.
    pub p1: Point,
    /// Second control point in pixels.
    pub p2: Point,
}

impl HandlePixels {
    /// Pixel position of `handle`.
    pub const fn get(&self, handle: Handle) -> Point {
        match handle {
            Handle::P1 => self.p1,
            Handle::P2 => self.p2,
        }
    }
}

/// Editor canvas: pixel size plus the clamp range applied to dragged
/// handles.
///
/// Clamping is an interaction concern. It keeps x inside `[0,1]` so every
/// curve produced by dragging satisfies the evaluator's monotonicity
/// precondition, and keeps y inside a displayable band.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Canvas {
    width: f64,
    height: f64,
    y_min: f64,
    y_max: f64,
}

impl Canvas {
    /// Canvas of `width` x `height` pixels with the default y range.
    ///
    /// # Errors
    ///
    /// [`CurveError::InvalidCanvas`] unless both sizes are finite and > 0.
    pub fn new(width: f64, height: f64) -> Result<Self, CurveError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(CurveError::InvalidCanvas { width, height });
        }
        let (y_min, y_max) = DEFAULT_Y_RANGE;
        Ok(Self {
            width,
            height,
            y_min,
            y_max,
        })
    }

    /// Replace the y clamp range.
    ///
    /// # Errors
    ///
    /// [`CurveError::InvalidRange`] if a bound is not finite or `min > max`.
    pub fn with_y_range(self, min: f64, max: f64) -> Result<Self, CurveError> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(CurveError::InvalidRange { min, max });
        }
        Ok(Self {
            y_min: min,
            y_max: max,
            ..self
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The y clamp range as `(min, max)`.
    pub fn y_range(&self) -> (f64, f64) {
        (self.y_min, self.y_max)
    }

    /// Curve-space point to pixel space (y axis flipped).
    #[inline]
    pub fn point_to_pixels(&self, point: Point) -> Point {
        Point::new(point.x * self.width, self.height - point.y * self.height)
    }

    /// Pixel-space point to curve space, without clamping.
    #[inline]
    pub fn point_from_pixels(&self, pixel: Point) -> Point {
        Point::new(pixel.x / self.width, (self.height - pixel.y) / self.height)
    }

    /// Pixel positions of the curve's handles.
    pub fn to_pixels(&self, curve: &BezierCurve) -> HandlePixels {
        HandlePixels {
            p1: self.point_to_pixels(curve.p1),
            p2: self.point_to_pixels(curve.p2),
        }
    }

    /// Move `handle` to the pixel position `pixel`.
    ///
    /// The mapped point is clamped to x in `[0,1]` and y in the canvas's y
    /// range; the other handle is left as it is. Returns a new curve.
    ///
    /// A NaN pixel coordinate cannot be clamped, so the curve is returned
    /// unchanged.
    pub fn from_pixels(&self, handle: Handle, pixel: Point, curve: &BezierCurve) -> BezierCurve {
        let raw = self.point_from_pixels(pixel);
        if raw.x.is_nan() || raw.y.is_nan() {
            tracing::debug!(%handle, "ignoring NaN pixel position");
            return *curve;
        }
        let clamped = Point::new(raw.x.clamp(0.0, 1.0), raw.y.clamp(self.y_min, self.y_max));
        if clamped != raw {
            tracing::trace!(%handle, x = raw.x, y = raw.y, "handle clamped");
        }
        curve.with_handle(handle, clamped)
    }

    /// SVG path of the Bezier defined by the raw control points, in pixels.
    ///
    /// This is the control geometry shown behind the drag handles. It is
    /// built from the control points directly, not from sampled easing
    /// values; see [`polyline_path`](Self::polyline_path) for that.
    pub fn control_polygon_path(&self, curve: &BezierCurve) -> String {
        let start = self.point_to_pixels(Point::new(0.0, 0.0));
        let end = self.point_to_pixels(Point::new(1.0, 1.0));
        let HandlePixels { p1, p2 } = self.to_pixels(curve);
        format!(
            "M {} {} C {} {}, {} {}, {} {}",
            start.x, start.y, p1.x, p1.y, p2.x, p2.y, end.x, end.y
        )
    }

    /// SVG path through curve-space `points` (e.g. from
    /// [`sample_curve`](crate::sample_curve)), in pixels.
    ///
    /// Returns an empty string for an empty slice.
    pub fn polyline_path(&self, points: &[Point]) -> String {
        Polyline {
            canvas: self,
            points,
        }
        .to_string()
    }
}

/// SVG `M … L …` rendering of curve-space points on a canvas.
struct Polyline<'a> {
    canvas: &'a Canvas,
    points: &'a [Point],
}

impl fmt::Display for Polyline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, point) in self.points.iter().enumerate() {
            let pixel = self.canvas.point_to_pixels(*point);
            let command = if i == 0 { "M" } else { " L" };
            write!(f, "{command} {} {}", pixel.x, pixel.y)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn canvas() -> Canvas {
        match Canvas::new(300.0, 200.0) {
            Ok(c) => c,
            Err(e) => panic!("unexpected error: {e:?}"),
        }
    }

    #[test]
    fn test_to_pixels_flips_y() {
        let pixels = canvas().to_pixels(&BezierCurve::new(0.25, 0.1, 0.5, 1.5));
        assert_abs_diff_eq!(pixels.p1.x, 75.0);
        assert_abs_diff_eq!(pixels.p1.y, 180.0);
        assert_abs_diff_eq!(pixels.p2.x, 150.0);
        assert_abs_diff_eq!(pixels.p2.y, -100.0);
    }

    #[test]
    fn test_from_pixels_replaces_named_handle() {
        let curve = BezierCurve::new(0.25, 0.1, 0.25, 1.0);
        let moved = canvas().from_pixels(Handle::P1, Point::new(150.0, 50.0), &curve);
        assert_eq!(moved.p2, curve.p2);
        assert_abs_diff_eq!(moved.p1.x, 0.5);
        assert_abs_diff_eq!(moved.p1.y, 0.75);
    }

    #[test]
    fn test_from_pixels_clamps_x_to_unit() {
        let curve = BezierCurve::linear();
        let c = canvas();
        let left = c.from_pixels(Handle::P1, Point::new(-40.0, 100.0), &curve);
        let right = c.from_pixels(Handle::P2, Point::new(900.0, 100.0), &curve);
        assert_abs_diff_eq!(left.p1.x, 0.0);
        assert_abs_diff_eq!(right.p2.x, 1.0);
        assert!(left.is_monotonic() && right.is_monotonic());
    }

    #[test]
    fn test_from_pixels_ignores_nan() {
        let curve = BezierCurve::new(0.25, 0.1, 0.25, 1.0);
        let c = canvas();
        for pixel in [
            Point::new(f64::NAN, 0.0),
            Point::new(0.0, f64::NAN),
            Point::new(f64::NAN, f64::NAN),
        ] {
            for handle in Handle::ALL {
                assert_eq!(c.from_pixels(handle, pixel, &curve), curve);
            }
        }
    }

    #[test]
    fn test_from_pixels_clamps_infinite() {
        let moved = canvas().from_pixels(
            Handle::P2,
            Point::new(f64::INFINITY, f64::NEG_INFINITY),
            &BezierCurve::linear(),
        );
        assert_abs_diff_eq!(moved.p2.x, 1.0);
        assert_abs_diff_eq!(moved.p2.y, 2.0);
    }

    #[test]
    fn test_from_pixels_clamps_y_to_range() {
        let curve = BezierCurve::linear();
        let c = canvas();
        let high = c.from_pixels(Handle::P2, Point::new(100.0, -10_000.0), &curve);
        let low = c.from_pixels(Handle::P2, Point::new(100.0, 10_000.0), &curve);
        assert_abs_diff_eq!(high.p2.y, 2.0);
        assert_abs_diff_eq!(low.p2.y, -2.0);
    }

    #[test]
    fn test_custom_y_range() -> Result<(), CurveError> {
        let c = canvas().with_y_range(0.0, 1.0)?;
        let moved = c.from_pixels(Handle::P1, Point::new(30.0, -50.0), &BezierCurve::linear());
        assert_abs_diff_eq!(moved.p1.y, 1.0);
        assert_eq!(c.y_range(), (0.0, 1.0));
        Ok(())
    }

    #[test]
    fn test_round_trip_each_handle() {
        let c = canvas();
        let curve = BezierCurve::new(0.68, -0.6, 0.32, 1.6);
        let pixels = c.to_pixels(&curve);
        for handle in Handle::ALL {
            let back = c.from_pixels(handle, pixels.get(handle), &curve);
            assert_abs_diff_eq!(back.handle(handle).x, curve.handle(handle).x, epsilon = 1e-12);
            assert_abs_diff_eq!(back.handle(handle).y, curve.handle(handle).y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_invalid_canvas() {
        for (w, h) in [(0.0, 100.0), (100.0, -1.0), (f64::NAN, 100.0), (100.0, f64::INFINITY)] {
            assert!(matches!(
                Canvas::new(w, h),
                Err(CurveError::InvalidCanvas { .. })
            ));
        }
    }

    #[test]
    fn test_invalid_range() {
        assert!(matches!(
            canvas().with_y_range(1.0, -1.0),
            Err(CurveError::InvalidRange { .. })
        ));
        assert!(matches!(
            canvas().with_y_range(f64::NEG_INFINITY, 0.0),
            Err(CurveError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_control_polygon_path() {
        let path = canvas().control_polygon_path(&BezierCurve::new(0.25, 0.1, 0.25, 1.0));
        assert_eq!(path, "M 0 200 C 75 180, 75 0, 300 0");
    }

    #[test]
    fn test_polyline_path() {
        let points = [Point::new(0.0, 0.0), Point::new(0.5, 0.5), Point::new(1.0, 1.0)];
        assert_eq!(canvas().polyline_path(&points), "M 0 200 L 150 100 L 300 0");
        assert_eq!(canvas().polyline_path(&[]), "");
    }
}
