//! `cubic-bezier(x1, y1, x2, y2)` text form.
//!
//! The text is the CSS timing-function syntax, so formatted curves can be
//! pasted straight into a stylesheet and declarations copied from one can be
//! parsed back.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::CurveError;
use crate::model::BezierCurve;

const NUMBER: &str = r"[-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?";

static CUBIC_BEZIER: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)cubic-bezier\s*\(\s*({NUMBER})\s*,\s*({NUMBER})\s*,\s*({NUMBER})\s*,\s*({NUMBER})\s*\)"
    ))
});

/// Two-decimal fixed notation. Anything that rounds to zero prints as
/// `0.00`, never `-0.00`.
fn fixed(value: f64) -> String {
    let text = format!("{value:.2}");
    match text.strip_prefix('-') {
        Some(unsigned) if unsigned == "0.00" => unsigned.to_string(),
        _ => text,
    }
}

/// Render `curve` as `cubic-bezier(x1, y1, x2, y2)` with two decimals per
/// coordinate.
///
/// ```
/// use easing_curves::{BezierCurve, format_curve};
///
/// let text = format_curve(&BezierCurve::new(0.42, 0.0, 1.0, 1.0));
/// assert_eq!(text, "cubic-bezier(0.42, 0.00, 1.00, 1.00)");
/// ```
pub fn format_curve(curve: &BezierCurve) -> String {
    let [x1, y1, x2, y2] = curve.coordinates();
    format!(
        "cubic-bezier({}, {}, {}, {})",
        fixed(x1),
        fixed(y1),
        fixed(x2),
        fixed(y2)
    )
}

/// Parse the first `cubic-bezier(…)` found in `text`.
///
/// Whitespace around the parentheses and commas is ignored and the function
/// name is matched case-insensitively, so a full CSS declaration such as
/// `transition: opacity 1s cubic-bezier(0.4, 0, 0.2, 1);` is accepted.
/// Returns `None` if nothing matches. Values are not range-checked.
///
/// ```
/// use easing_curves::{BezierCurve, parse_curve};
///
/// assert_eq!(
///     parse_curve("cubic-bezier(0.25, 0.1, 0.25, 1)"),
///     Some(BezierCurve::new(0.25, 0.1, 0.25, 1.0))
/// );
/// assert_eq!(parse_curve("not-a-curve"), None);
/// ```
pub fn parse_curve(text: &str) -> Option<BezierCurve> {
    let pattern = match CUBIC_BEZIER.as_ref() {
        Ok(pattern) => pattern,
        Err(error) => {
            tracing::error!(%error, "cubic-bezier pattern failed to compile");
            return None;
        }
    };

    let Some(captures) = pattern.captures(text) else {
        tracing::debug!(text, "no cubic-bezier() in input");
        return None;
    };

    let mut coordinates = [0.0f64; 4];
    for (slot, group) in coordinates.iter_mut().zip(captures.iter().skip(1)) {
        *slot = group?.as_str().parse().ok()?;
    }

    let [x1, y1, x2, y2] = coordinates;
    Some(BezierCurve::new(x1, y1, x2, y2))
}

impl fmt::Display for BezierCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_curve(self))
    }
}

impl FromStr for BezierCurve {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_curve(s).ok_or_else(|| CurveError::Parse(s.to_string()))
    }
}
