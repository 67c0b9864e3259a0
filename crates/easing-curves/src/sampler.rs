//! Polyline approximation of the eased function for plotting.

use crate::error::CurveError;
use crate::evaluator::Easing;
use crate::model::{BezierCurve, Point};

/// Segment count used by editors when none is configured.
pub const DEFAULT_SAMPLES: u32 = 100;

/// Sample `y = ease(x)` at `samples + 1` evenly spaced inputs.
///
/// The result is the eased function `(x, ease(x))`, not the control-point
/// geometry. The first point is `(0,0)` and the last `(1,1)`. Output depends
/// only on the arguments.
///
/// # Errors
///
/// [`CurveError::InvalidSampleCount`] if `samples` is zero.
///
/// # Example
///
/// ```
/// use easing_curves::{BezierCurve, Point, sample_curve};
///
/// let points = sample_curve(&BezierCurve::new(0.42, 0.0, 1.0, 1.0), 10)?;
/// assert_eq!(points.len(), 11);
/// assert_eq!(points.first(), Some(&Point::new(0.0, 0.0)));
/// assert_eq!(points.last(), Some(&Point::new(1.0, 1.0)));
/// # Ok::<(), easing_curves::CurveError>(())
/// ```
pub fn sample_curve(curve: &BezierCurve, samples: u32) -> Result<Vec<Point>, CurveError> {
    sample_easing(&Easing::new(*curve), samples)
}

pub(crate) fn sample_easing(easing: &Easing, samples: u32) -> Result<Vec<Point>, CurveError> {
    if samples == 0 {
        return Err(CurveError::InvalidSampleCount(samples));
    }

    let denominator = f64::from(samples);
    let points = (0..=samples)
        .map(|i| {
            let x = f64::from(i) / denominator;
            Point::new(x, easing.ease(x))
        })
        .collect();
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sample_count() -> Result<(), CurveError> {
        let points = sample_curve(&BezierCurve::default(), DEFAULT_SAMPLES)?;
        assert_eq!(points.len(), 101);
        Ok(())
    }

    #[test]
    fn test_endpoints() -> Result<(), CurveError> {
        let points = sample_curve(&BezierCurve::new(0.68, -0.6, 0.32, 1.6), 7)?;
        assert_eq!(points.len(), 8);
        assert_eq!(points.first(), Some(&Point::new(0.0, 0.0)));
        assert_eq!(points.last(), Some(&Point::new(1.0, 1.0)));
        Ok(())
    }

    #[test]
    fn test_single_segment() -> Result<(), CurveError> {
        let points = sample_curve(&BezierCurve::new(0.25, 0.1, 0.25, 1.0), 1)?;
        assert_eq!(points, vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        Ok(())
    }

    #[test]
    fn test_zero_samples_rejected() {
        assert_eq!(
            sample_curve(&BezierCurve::linear(), 0),
            Err(CurveError::InvalidSampleCount(0))
        );
    }

    #[test]
    fn test_even_spacing() -> Result<(), CurveError> {
        let points = sample_curve(&BezierCurve::new(0.1, 0.9, 0.2, 0.3), 4)?;
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        Ok(())
    }

    #[test]
    fn test_deterministic() -> Result<(), CurveError> {
        let curve = BezierCurve::new(0.17, 0.67, 0.83, 0.67);
        let a = sample_curve(&curve, 64)?;
        let b = curve.easing().sample(64)?;
        assert_eq!(a, b);
        Ok(())
    }
}
