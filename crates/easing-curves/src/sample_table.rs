//! Coarse lookup table of `x(t)` used to bracket the root search.
//!
//! With the anchors fixed at 0 and 1, one coordinate of the curve reduces to
//!
//! ```text
//! B(t) = (1 - 3·a2 + 3·a1)·t³ + (3·a2 - 6·a1)·t² + 3·a1·t
//! ```
//!
//! where `a1`/`a2` are that coordinate of the two control points.

use serde::{Deserialize, Serialize};

#[inline]
fn coefficient_a(a1: f64, a2: f64) -> f64 {
    1.0 - 3.0 * a2 + 3.0 * a1
}

#[inline]
fn coefficient_b(a1: f64, a2: f64) -> f64 {
    3.0 * a2 - 6.0 * a1
}

#[inline]
fn coefficient_c(a1: f64) -> f64 {
    3.0 * a1
}

/// One coordinate of the curve at parameter `t` (Horner form).
#[inline]
pub fn bezier_component(t: f64, a1: f64, a2: f64) -> f64 {
    ((coefficient_a(a1, a2) * t + coefficient_b(a1, a2)) * t + coefficient_c(a1)) * t
}

/// Derivative `dB/dt` of [`bezier_component`].
#[inline]
pub fn bezier_slope(t: f64, a1: f64, a2: f64) -> f64 {
    3.0 * coefficient_a(a1, a2) * t * t + 2.0 * coefficient_b(a1, a2) * t + coefficient_c(a1)
}

/// Precomputed `x(t)` samples at `t = 0, 0.1, …, 1`.
///
/// Derived only from the two x-coordinates and never mutated; a curve whose
/// x-coordinates change gets a new table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampleTable {
    values: [f64; SampleTable::SIZE],
}

impl SampleTable {
    /// Number of samples.
    pub const SIZE: usize = 11;

    /// Parameter distance between neighbouring samples.
    pub const STEP: f64 = 0.1;

    /// Sample `x(t)` for control-point x-coordinates `x1`, `x2`.
    ///
    /// Inputs are not validated. Outside `[0,1]` the table may be
    /// non-monotonic and root solving against it is unspecified.
    pub fn build(x1: f64, x2: f64) -> Self {
        let mut values = [0.0f64; Self::SIZE];
        for (i, value) in (0u32..).zip(values.iter_mut()) {
            *value = bezier_component(f64::from(i) * Self::STEP, x1, x2);
        }
        Self { values }
    }

    /// The raw samples.
    pub fn values(&self) -> &[f64; Self::SIZE] {
        &self.values
    }

    /// Locate the bracket for `x`.
    ///
    /// Returns `(index, low, high)` where `index` is the largest sample index
    /// in `0..SIZE-1` whose value is `<= x`, and `low`/`high` are the samples
    /// at `index` and `index + 1`. Below the first sample the first interval
    /// is returned; above the last, the last.
    pub fn bracket(&self, x: f64) -> (usize, f64, f64) {
        let index = self
            .values
            .iter()
            .skip(1)
            .take(Self::SIZE - 2)
            .take_while(|&&sample| sample <= x)
            .count();

        let mut pairs = self.values.windows(2).skip(index);
        match pairs.next() {
            Some(&[low, high]) => (index, low, high),
            _ => (index, 0.0, 1.0),
        }
    }
}

/// Free-function form of [`SampleTable::build`].
pub fn build_sample_table(x1: f64, x2: f64) -> SampleTable {
    SampleTable::build(x1, x2)
}
