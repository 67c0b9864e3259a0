//! Fuzzes the `cubic-bezier()` text parser and formatter.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_parse_curve
#![no_main]
use easing_curves::{BezierCurve, format_curve, parse_curve};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Must never panic on arbitrary text.
    let Some(curve) = parse_curve(text) else {
        return;
    };

    // Accepted finite curves re-parse from their canonical text.
    if curve.validate().is_ok() {
        let formatted = format_curve(&curve);
        assert!(parse_curve(&formatted).is_some(), "cannot re-parse {formatted}");
        assert!(formatted.parse::<BezierCurve>().is_ok());
    }
});
