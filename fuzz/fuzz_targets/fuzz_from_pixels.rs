//! Fuzzes the pixel-space handle mapping used by drag interaction.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_from_pixels
#![no_main]
use easing_curves::{BezierCurve, Canvas, Handle, Point};
use libfuzzer_sys::fuzz_target;

fn f64_at(data: &[u8], index: usize) -> Option<f64> {
    let bytes = data.get(index * 8..index * 8 + 8)?;
    Some(f64::from_le_bytes(bytes.try_into().ok()?))
}

fuzz_target!(|data: &[u8]| {
    let (Some(width), Some(height), Some(px), Some(py)) =
        (f64_at(data, 0), f64_at(data, 1), f64_at(data, 2), f64_at(data, 3))
    else {
        return;
    };

    // Invalid sizes are rejected, never a panic.
    let Ok(canvas) = Canvas::new(width, height) else {
        return;
    };

    let handle = if data.get(32).is_some_and(|b| b & 1 == 1) {
        Handle::P2
    } else {
        Handle::P1
    };
    let curve = canvas.from_pixels(handle, Point::new(px, py), &BezierCurve::default());

    // Every pointer position, NaN included, leaves an editable curve.
    assert_eq!(curve.validate(), Ok(()));
    std::hint::black_box(canvas.control_polygon_path(&curve));
});
