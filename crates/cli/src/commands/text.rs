//! `cubic-bezier()` text conversion commands

use anyhow::Result;
use easing_curves::{BezierCurve, parse_curve};

use crate::commands::warn_if_invalid;
use crate::error::CliError;
use crate::output;

/// Format raw coordinates as canonical text
pub fn execute_format(x1: f64, y1: f64, x2: f64, y2: f64, json: bool) -> Result<()> {
    let curve = BezierCurve::new(x1, y1, x2, y2);
    warn_if_invalid(&curve);
    output::print_curve(&curve, json);
    Ok(())
}

/// Parse text (a full CSS declaration is accepted) into control points
pub fn execute_parse(text: &str, json: bool) -> Result<()> {
    let curve = parse_curve(text).ok_or_else(|| CliError::ParseError(text.to_string()))?;
    output::print_parsed(&curve, json);
    Ok(())
}
