//! Error types for curve operations.

use crate::model::Handle;

/// Error type for curve operations.
///
/// Evaluation itself never fails: `Easing::ease` is total and
/// [`parse_curve`](crate::parse_curve) reports a non-match as `None`.
/// These errors cover explicit validation and the editor-facing
/// configuration values (canvas size, clamp range, sample count).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CurveError {
    /// A control point's x-coordinate lies outside `[0,1]`, so `x(t)` is
    /// not guaranteed to be monotonic.
    #[error("{handle} x coordinate {value} is outside the valid range [0,1]")]
    ControlPointOutOfDomain {
        /// Which control point.
        handle: Handle,
        /// The invalid value.
        value: f64,
    },

    /// A control point coordinate is NaN or infinite.
    #[error("{handle} {coordinate} coordinate is not finite: {value}")]
    NonFiniteCoordinate {
        /// Which control point.
        handle: Handle,
        /// Which coordinate ("x" or "y").
        coordinate: &'static str,
        /// The invalid value.
        value: f64,
    },

    /// Canvas dimensions must be finite and strictly positive.
    #[error("Invalid canvas size {width}x{height}: dimensions must be finite and > 0")]
    InvalidCanvas {
        /// Requested width in pixels.
        width: f64,
        /// Requested height in pixels.
        height: f64,
    },

    /// Clamp range bounds must be finite with `min <= max`.
    #[error("Invalid handle range [{min}, {max}]")]
    InvalidRange {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// A polyline needs at least one segment.
    #[error("Invalid sample count {0}: at least 1 segment is required")]
    InvalidSampleCount(u32),

    /// Text did not match the `cubic-bezier(x1, y1, x2, y2)` form.
    #[error("Cannot parse curve from {0:?}")]
    Parse(String),

    /// No preset with the given name.
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
}
