//! Editor geometry commands: handle positions, drags and SVG paths

use anyhow::Result;
use easing_curves::{Handle, Point, sample_curve};

use crate::commands::{CanvasArgs, resolve_curve};
use crate::config::EditorConfig;
use crate::error::CliError;
use crate::output;

/// Show where the handles sit on the canvas
pub fn execute_handles(
    curve: &str,
    canvas: CanvasArgs,
    config: &EditorConfig,
    json: bool,
) -> Result<()> {
    let curve = resolve_curve(curve)?;
    let canvas = config.canvas(canvas.width, canvas.height)?;
    let pixels = canvas.to_pixels(&curve);
    output::print_handles(&canvas, &pixels, json);
    Ok(())
}

/// Move one handle to a pixel position and print the new curve
pub fn execute_drag(
    curve: &str,
    handle: Handle,
    pixel: Point,
    canvas: CanvasArgs,
    config: &EditorConfig,
    json: bool,
) -> Result<()> {
    let curve = resolve_curve(curve)?;
    let canvas = config.canvas(canvas.width, canvas.height)?;
    let moved = canvas.from_pixels(handle, pixel, &curve);
    tracing::info!(%handle, from = %curve, to = %moved, "handle dragged");
    output::print_drag(handle, &moved, json);
    Ok(())
}

/// Print the control polygon path, or the eased polyline with `eased`
pub fn execute_path(
    curve: &str,
    canvas: CanvasArgs,
    eased: bool,
    samples: Option<u32>,
    config: &EditorConfig,
    json: bool,
) -> Result<()> {
    let curve = resolve_curve(curve)?;
    let canvas = config.canvas(canvas.width, canvas.height)?;

    if eased {
        let points = sample_curve(&curve, config.samples(samples)).map_err(CliError::from)?;
        output::print_path("eased", &canvas.polyline_path(&points), json);
    } else {
        output::print_path("control", &canvas.control_polygon_path(&curve), json);
    }
    Ok(())
}
