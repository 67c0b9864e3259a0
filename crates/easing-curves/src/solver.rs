//! Inversion of `x(t) = x` for the curve parameter `t`.

use crate::sample_table::{SampleTable, bezier_component, bezier_slope};

/// Newton-Raphson is used only when the slope at the initial guess is at
/// least this steep; flatter regions diverge.
pub const NEWTON_MIN_SLOPE: f64 = 0.001;

/// Maximum Newton-Raphson steps.
pub const NEWTON_ITERATIONS: usize = 4;

/// Residual at which binary subdivision stops.
pub const SUBDIVISION_PRECISION: f64 = 1e-7;

/// Maximum binary subdivision steps.
pub const SUBDIVISION_MAX_ITERATIONS: usize = 10;

/// Find `t` in `[0,1]` with `x(t) = x` for a curve with x-coordinates
/// `x1`, `x2` and their precomputed `table`.
///
/// The root is unique only if `x1, x2 ∈ [0,1]`. Both refinement branches
/// have fixed iteration caps, so this always returns; when the cap is hit
/// the last estimate is returned as-is.
///
/// The Newton cap also means `ease` is not strictly monotonic when `x(t)`
/// has a stationary point inside `(0,1)` (only `x1 = 1, x2 = 0`, at
/// `t = 0.5`): near that point four steps can stop short of the root, and
/// `cubic-bezier(1, 0, 0, 1)` dips by about 0.03 just above `x = 0.5`.
pub fn solve_t_for_x(x: f64, x1: f64, x2: f64, table: &SampleTable) -> f64 {
    let (index, low, high) = table.bracket(x);
    let interval_start = index as f64 * SampleTable::STEP;

    let span = high - low;
    let dist = if span > 0.0 { (x - low) / span } else { 0.0 };
    let guess = interval_start + dist * SampleTable::STEP;

    let initial_slope = bezier_slope(guess, x1, x2);
    if initial_slope >= NEWTON_MIN_SLOPE {
        newton_raphson(x, guess, x1, x2)
    } else if initial_slope == 0.0 {
        guess
    } else {
        binary_subdivide(x, interval_start, interval_start + SampleTable::STEP, x1, x2)
    }
}

fn newton_raphson(x: f64, mut t: f64, x1: f64, x2: f64) -> f64 {
    for _ in 0..NEWTON_ITERATIONS {
        let slope = bezier_slope(t, x1, x2);
        if slope == 0.0 {
            return t;
        }
        let current_x = bezier_component(t, x1, x2) - x;
        t -= current_x / slope;
    }
    t
}

fn binary_subdivide(x: f64, mut low: f64, mut high: f64, x1: f64, x2: f64) -> f64 {
    let mut current_t = low;
    let mut current_x = f64::INFINITY;
    let mut iterations = 0;

    while iterations < SUBDIVISION_MAX_ITERATIONS && current_x.abs() > SUBDIVISION_PRECISION {
        current_t = low + (high - low) / 2.0;
        current_x = bezier_component(current_t, x1, x2) - x;
        if current_x > 0.0 {
            high = current_t;
        } else {
            low = current_t;
        }
        iterations += 1;
    }

    tracing::trace!(x, t = current_t, iterations, residual = current_x, "binary subdivision");
    current_t
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn solve(x: f64, x1: f64, x2: f64) -> f64 {
        solve_t_for_x(x, x1, x2, &SampleTable::build(x1, x2))
    }

    #[test]
    fn test_solution_inverts_x_of_t() {
        for (x1, x2) in [(0.25, 0.25), (0.42, 1.0), (0.0, 0.58), (0.68, 0.32), (0.9, 0.1)] {
            for i in 1..100 {
                let x = f64::from(i) / 100.0;
                let t = solve(x, x1, x2);
                assert!((0.0..=1.0).contains(&t), "t={t} out of range");
                assert_abs_diff_eq!(bezier_component(t, x1, x2), x, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn test_flat_start_uses_subdivision() {
        // Smoothstep-shaped x(t): slope vanishes at t = 0, so inputs in the
        // first bracket start below NEWTON_MIN_SLOPE.
        let (x1, x2) = (0.0, 1.0);
        let table = SampleTable::build(x1, x2);
        let x = 1e-9;
        let (index, low, high) = table.bracket(x);
        let guess = index as f64 * SampleTable::STEP + (x - low) / (high - low) * SampleTable::STEP;
        assert!(bezier_slope(guess, x1, x2) < NEWTON_MIN_SLOPE);

        let t = solve_t_for_x(x, x1, x2, &table);
        assert!((0.0..=SampleTable::STEP).contains(&t));
        assert_abs_diff_eq!(bezier_component(t, x1, x2), x, epsilon = 1e-4);
    }

    #[test]
    fn test_zero_slope_guess_returned() {
        // x1 = x2 = 0 gives x(t) = t³ with zero slope at t = 0.
        let t = solve(0.0, 0.0, 0.0);
        assert_abs_diff_eq!(t, 0.0);
    }

    #[test]
    fn test_out_of_domain_terminates() {
        // Non-monotonic x(t); the result is unspecified but must be finite.
        for x in [0.1, 0.5, 0.9] {
            let t = solve(x, 1.8, -0.8);
            assert!(t.is_finite());
        }
    }

    #[test]
    fn test_stationary_interior_point_terminates() {
        // x1 = 1, x2 = 0: x'(t) = 3(1 - 2t)², zero at t = 0.5.
        let (x1, x2) = (1.0, 0.0);
        assert_abs_diff_eq!(bezier_slope(0.5, x1, x2), 0.0);
        assert_abs_diff_eq!(solve(0.5, x1, x2), 0.5);
        for i in 0..=1000 {
            let x = f64::from(i) / 1000.0;
            let t = solve(x, x1, x2);
            assert!(t.is_finite(), "t={t} for x={x}");
        }
    }

    #[test]
    fn test_nan_input_terminates() {
        let t = solve(f64::NAN, 0.25, 0.25);
        assert!(t.is_nan() || t.is_finite());
    }
}
