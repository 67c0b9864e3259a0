//! Command implementations for easectl CLI

pub mod eval;
pub mod geometry;
pub mod preset;
pub mod text;

use anyhow::Result;
use clap::{Args, Subcommand};
use easing_curves::{BezierCurve, find_preset, parse_curve};

use crate::error::CliError;
use crate::output;

#[derive(Subcommand)]
pub enum PresetCommands {
    /// List all named curves
    List,

    /// Show one named curve
    Show {
        /// Preset name (case-insensitive)
        name: String,
    },
}

/// Canvas size overrides shared by the geometry commands
#[derive(Args, Clone, Copy, Debug, Default)]
pub struct CanvasArgs {
    /// Canvas width in pixels (default from config)
    #[arg(long)]
    pub width: Option<f64>,

    /// Canvas height in pixels (default from config)
    #[arg(long)]
    pub height: Option<f64>,
}

/// Resolve a CURVE argument: preset name, `cubic-bezier(...)` text, or
/// `x1,y1,x2,y2`.
pub fn resolve_curve(arg: &str) -> Result<BezierCurve, CliError> {
    let curve = if let Some(preset) = find_preset(arg) {
        tracing::debug!(preset = preset.name, "curve from preset");
        preset.curve
    } else if let Some(curve) = parse_curve(arg) {
        tracing::debug!(%curve, "curve from cubic-bezier text");
        curve
    } else if let Some(curve) = parse_coordinate_list(arg) {
        tracing::debug!(%curve, "curve from coordinate list");
        curve
    } else if arg.contains(['(', ',']) || arg.trim().is_empty() {
        return Err(CliError::ParseError(arg.to_string()));
    } else {
        return Err(CliError::UnknownPreset(arg.to_string()));
    };

    warn_if_invalid(&curve);
    Ok(curve)
}

/// Surface a precondition violation without refusing the curve.
pub fn warn_if_invalid(curve: &BezierCurve) {
    if let Err(e) = curve.validate() {
        tracing::debug!(%curve, error = %e, "curve fails validation");
        output::print_warning(&e.to_string());
    }
}

fn parse_coordinate_list(arg: &str) -> Option<BezierCurve> {
    let mut values = arg.split(',').map(|part| part.trim().parse::<f64>());
    let x1 = values.next()?.ok()?;
    let y1 = values.next()?.ok()?;
    let x2 = values.next()?.ok()?;
    let y2 = values.next()?.ok()?;
    if values.next().is_some() {
        return None;
    }
    Some(BezierCurve::new(x1, y1, x2, y2))
}
