//! Timing-function evaluation `y = f(x)`.

use crate::error::CurveError;
use crate::model::{BezierCurve, Point};
use crate::sample_table::{SampleTable, bezier_component};
use crate::sampler;
use crate::solver::solve_t_for_x;

/// Evaluator for one curve.
///
/// Holds the curve together with its own [`SampleTable`], built once in
/// [`new`](Self::new) and reused by every [`ease`](Self::ease) call. There is
/// no cache shared between curves; an `Easing` is an immutable value and can
/// be used from several threads at once.
///
/// # Example
///
/// ```
/// use easing_curves::{BezierCurve, Easing};
///
/// let easing = Easing::new(BezierCurve::new(0.42, 0.0, 0.58, 1.0));
/// assert_eq!(easing.ease(0.0), 0.0);
/// assert_eq!(easing.ease(1.0), 1.0);
/// assert!((easing.ease(0.5) - 0.5).abs() < 1e-6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Easing {
    curve: BezierCurve,
    table: SampleTable,
    identity: bool,
}

impl Easing {
    /// Build the evaluator, sampling `x(t)` once.
    #[expect(clippy::float_cmp, reason = "identity requires exactly equal coordinates")]
    pub fn new(curve: BezierCurve) -> Self {
        if !curve.is_monotonic() {
            tracing::debug!(
                x1 = curve.p1.x,
                x2 = curve.p2.x,
                "control point x outside [0,1], easing output is unspecified"
            );
        }
        // x(t) and y(t) are the same polynomial, so ease(x) = x.
        let identity = curve.p1.x == curve.p1.y && curve.p2.x == curve.p2.y;
        Self {
            curve,
            table: SampleTable::build(curve.p1.x, curve.p2.x),
            identity,
        }
    }

    /// The curve being evaluated.
    pub fn curve(&self) -> &BezierCurve {
        &self.curve
    }

    /// The sample table built for this curve.
    pub fn table(&self) -> &SampleTable {
        &self.table
    }

    /// Eased output for progress `x`.
    ///
    /// `ease(0.0)` is exactly `0.0` and `ease(1.0)` exactly `1.0`. Callers
    /// are expected to pass `x` in `[0,1]`; other values are neither clamped
    /// nor rejected and yield whatever the polynomial extrapolation gives.
    /// Curves with `p1.x == p1.y` and `p2.x == p2.y` are the identity and
    /// return `x` unchanged.
    #[expect(clippy::float_cmp, reason = "exact endpoint shortcuts")]
    pub fn ease(&self, x: f64) -> f64 {
        if self.identity {
            return x;
        }
        if x == 0.0 {
            return 0.0;
        }
        if x == 1.0 {
            return 1.0;
        }

        let BezierCurve { p1, p2 } = self.curve;
        let t = solve_t_for_x(x, p1.x, p2.x, &self.table);
        bezier_component(t, p1.y, p2.y)
    }

    /// Evenly spaced polyline of the eased function; see
    /// [`sample_curve`](crate::sample_curve).
    ///
    /// # Errors
    ///
    /// [`CurveError::InvalidSampleCount`] if `samples` is zero.
    pub fn sample(&self, samples: u32) -> Result<Vec<Point>, CurveError> {
        sampler::sample_easing(self, samples)
    }
}

impl From<BezierCurve> for Easing {
    fn from(curve: BezierCurve) -> Self {
        Self::new(curve)
    }
}

/// Closure form of [`Easing`]: the returned function owns its sample table.
pub fn make_easing(curve: BezierCurve) -> impl Fn(f64) -> f64 + Clone + Send + Sync {
    let easing = Easing::new(curve);
    move |x| easing.ease(x)
}
