//! Timing-function evaluation commands

use anyhow::Result;
use easing_curves::{Point, sample_curve};

use crate::commands::resolve_curve;
use crate::config::EditorConfig;
use crate::error::CliError;
use crate::output;

/// Evaluate `ease(x)` for each input
pub fn execute_eval(curve: &str, inputs: &[f64], json: bool) -> Result<()> {
    let curve = resolve_curve(curve)?;
    let easing = curve.easing();

    let values: Vec<Point> = inputs
        .iter()
        .map(|&x| {
            if !(0.0..=1.0).contains(&x) {
                tracing::info!(x, "input outside [0,1] is extrapolated");
            }
            Point::new(x, easing.ease(x))
        })
        .collect();

    output::print_eval(&curve, &values, json);
    Ok(())
}

/// Sample the eased function as a polyline
pub fn execute_sample(
    curve: &str,
    samples: Option<u32>,
    config: &EditorConfig,
    json: bool,
) -> Result<()> {
    let curve = resolve_curve(curve)?;
    let samples = config.samples(samples);
    let points = sample_curve(&curve, samples).map_err(CliError::from)?;
    tracing::debug!(samples, points = points.len(), "sampled curve");

    output::print_samples(&curve, &points, json);
    Ok(())
}
