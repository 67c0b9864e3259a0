//! Fuzzes curve evaluation and sampling with arbitrary control points.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_ease
#![no_main]
use easing_curves::{BezierCurve, sample_curve};
use libfuzzer_sys::fuzz_target;

fn f64_at(data: &[u8], index: usize) -> Option<f64> {
    let bytes = data.get(index * 8..index * 8 + 8)?;
    Some(f64::from_le_bytes(bytes.try_into().ok()?))
}

fuzz_target!(|data: &[u8]| {
    let (Some(x1), Some(y1), Some(x2), Some(y2), Some(x)) = (
        f64_at(data, 0),
        f64_at(data, 1),
        f64_at(data, 2),
        f64_at(data, 3),
        f64_at(data, 4),
    ) else {
        return;
    };

    let curve = BezierCurve::new(x1, y1, x2, y2);
    let easing = curve.easing();

    // Bounded work and exact anchors for any control points.
    std::hint::black_box(easing.ease(x));
    assert_eq!(easing.ease(0.0).to_bits(), 0.0f64.to_bits());
    assert_eq!(easing.ease(1.0).to_bits(), 1.0f64.to_bits());

    let samples = u32::from(data.get(40).copied().unwrap_or(1)).max(1);
    if let Ok(points) = sample_curve(&curve, samples) {
        assert_eq!(points.len(), samples as usize + 1);
    }
});
