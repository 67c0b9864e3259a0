//! Named timing curves.
//!
//! Plain data: the CSS keyword curves followed by the common
//! `easeIn*`/`easeOut*`/`easeInOut*` families. Presets are ordinary curves
//! and get no special treatment anywhere else.

use serde::Serialize;

use crate::error::CurveError;
use crate::model::BezierCurve;

/// A named curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Preset {
    /// Display name, unique case-insensitively.
    pub name: &'static str,
    /// The curve.
    pub curve: BezierCurve,
}

const fn preset(name: &'static str, x1: f64, y1: f64, x2: f64, y2: f64) -> Preset {
    Preset {
        name,
        curve: BezierCurve::new(x1, y1, x2, y2),
    }
}

/// All presets in display order.
pub const PRESETS: &[Preset] = &[
    preset("linear", 0.0, 0.0, 1.0, 1.0),
    preset("ease", 0.25, 0.1, 0.25, 1.0),
    preset("ease-in", 0.42, 0.0, 1.0, 1.0),
    preset("ease-out", 0.0, 0.0, 0.58, 1.0),
    preset("ease-in-out", 0.42, 0.0, 0.58, 1.0),
    preset("easeInSine", 0.12, 0.0, 0.39, 0.0),
    preset("easeOutSine", 0.61, 1.0, 0.88, 1.0),
    preset("easeInOutSine", 0.37, 0.0, 0.63, 1.0),
    preset("easeInQuad", 0.11, 0.0, 0.5, 0.0),
    preset("easeOutQuad", 0.5, 1.0, 0.89, 1.0),
    preset("easeInOutQuad", 0.45, 0.0, 0.55, 1.0),
    preset("easeInCubic", 0.32, 0.0, 0.67, 0.0),
    preset("easeOutCubic", 0.33, 1.0, 0.68, 1.0),
    preset("easeInOutCubic", 0.65, 0.0, 0.35, 1.0),
    preset("easeInQuart", 0.5, 0.0, 0.75, 0.0),
    preset("easeOutQuart", 0.25, 1.0, 0.5, 1.0),
    preset("easeInOutQuart", 0.76, 0.0, 0.24, 1.0),
    preset("easeInQuint", 0.64, 0.0, 0.78, 0.0),
    preset("easeOutQuint", 0.22, 1.0, 0.36, 1.0),
    preset("easeInOutQuint", 0.83, 0.0, 0.17, 1.0),
    preset("easeInExpo", 0.7, 0.0, 0.84, 0.0),
    preset("easeOutExpo", 0.16, 1.0, 0.3, 1.0),
    preset("easeInOutExpo", 0.87, 0.0, 0.13, 1.0),
    preset("easeInCirc", 0.55, 0.0, 1.0, 0.45),
    preset("easeOutCirc", 0.0, 0.55, 0.45, 1.0),
    preset("easeInOutCirc", 0.85, 0.0, 0.15, 1.0),
    preset("easeInBack", 0.36, 0.0, 0.66, -0.56),
    preset("easeOutBack", 0.34, 1.56, 0.64, 1.0),
    preset("easeInOutBack", 0.68, -0.6, 0.32, 1.6),
];

/// Look up a preset by name, ignoring ASCII case.
pub fn find_preset(name: &str) -> Option<&'static Preset> {
    let name = name.trim();
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Like [`find_preset`], returning just the curve.
///
/// # Errors
///
/// [`CurveError::UnknownPreset`] if no preset has that name.
pub fn preset_curve(name: &str) -> Result<BezierCurve, CurveError> {
    find_preset(name)
        .map(|p| p.curve)
        .ok_or_else(|| CurveError::UnknownPreset(name.to_string()))
}

/// Preset names in display order.
pub fn preset_names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|p| p.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_unique_ignoring_case() {
        let names: HashSet<String> = preset_names().map(str::to_ascii_lowercase).collect();
        assert_eq!(names.len(), PRESETS.len());
    }

    #[test]
    fn test_all_presets_valid() {
        for p in PRESETS {
            assert_eq!(p.curve.validate(), Ok(()), "{} is invalid", p.name);
        }
    }

    #[test]
    fn test_find_case_insensitive() {
        assert_eq!(
            find_preset("EASEOUTBACK").map(|p| p.curve),
            Some(BezierCurve::new(0.34, 1.56, 0.64, 1.0))
        );
        assert_eq!(find_preset(" ease ").map(|p| p.name), Some("ease"));
        assert!(find_preset("bounce").is_none());
    }

    #[test]
    fn test_preset_curve_error() {
        assert_eq!(
            preset_curve("wobble"),
            Err(CurveError::UnknownPreset("wobble".to_string()))
        );
    }
}
