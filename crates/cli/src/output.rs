//! Output formatting for CLI responses

use anyhow::Error;
use colored::*;
use easing_curves::{BezierCurve, Canvas, Handle, HandlePixels, Point, Preset, format_curve};
use serde_json::{Value, json};

use crate::error::CliError;

fn print_json(value: &Value, what: &str) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format {what} as JSON: {e}"),
    }
}

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": error_type_name(error)
        }
    });
    print_json(&error_json, "error");
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

fn error_type_name(error: &Error) -> &'static str {
    error.downcast_ref::<CliError>().map_or("Error", CliError::kind)
}

/// Print eased values for the given inputs
pub fn print_eval(curve: &BezierCurve, values: &[Point], json: bool) {
    if json {
        let output = json!({
            "success": true,
            "curve": format_curve(curve),
            "values": values
        });
        print_json(&output, "values");
    } else {
        println!("{}", format_curve(curve).bold());
        for point in values {
            println!("  {:>10} {} {:.6}", point.x, "→".dimmed(), point.y);
        }
    }
}

/// Print a sampled polyline
pub fn print_samples(curve: &BezierCurve, points: &[Point], json: bool) {
    if json {
        let output = json!({
            "success": true,
            "curve": format_curve(curve),
            "samples": points.len().saturating_sub(1),
            "points": points
        });
        print_json(&output, "samples");
    } else {
        for point in points {
            println!("{:.6}\t{:.6}", point.x, point.y);
        }
    }
}

/// Print a curve as text plus its control points
pub fn print_curve(curve: &BezierCurve, json: bool) {
    if json {
        let output = json!({
            "success": true,
            "text": format_curve(curve),
            "curve": curve,
            "monotonic": curve.is_monotonic()
        });
        print_json(&output, "curve");
    } else {
        println!("{curve}");
    }
}

/// Print a parsed curve with its control points spelled out
pub fn print_parsed(curve: &BezierCurve, json: bool) {
    if json {
        print_curve(curve, json);
        return;
    }
    println!("{}", format_curve(curve).bold());
    for handle in Handle::ALL {
        let point = curve.handle(handle);
        println!("  {}: ({}, {})", handle.to_string().cyan(), point.x, point.y);
    }
    if !curve.is_monotonic() {
        println!(
            "  {} x outside [0,1], timing output is unspecified",
            "⚠".yellow()
        );
    }
}

/// Print preset catalog
pub fn print_preset_list(presets: &[Preset], json: bool) {
    if json {
        let entries: Vec<Value> = presets.iter().map(preset_json).collect();
        let output = json!({
            "success": true,
            "presets": entries
        });
        print_json(&output, "preset list");
    } else {
        let width = presets.iter().map(|p| p.name.len()).max().unwrap_or(0);
        for preset in presets {
            let name = format!("{:<width$}", preset.name);
            println!("  {}  {}", name.bold(), format_curve(&preset.curve).dimmed());
        }
    }
}

/// Print a single preset
pub fn print_preset(preset: &Preset, json: bool) {
    if json {
        let output = json!({
            "success": true,
            "preset": preset_json(preset)
        });
        print_json(&output, "preset");
    } else {
        println!("{} {}", "Preset:".bold(), preset.name);
        println!("  {}", format_curve(&preset.curve));
    }
}

fn preset_json(preset: &Preset) -> Value {
    json!({
        "name": preset.name,
        "text": format_curve(&preset.curve),
        "curve": preset.curve
    })
}

/// Print handle positions in pixel space
pub fn print_handles(canvas: &Canvas, pixels: &HandlePixels, json: bool) {
    if json {
        let output = json!({
            "success": true,
            "canvas": canvas,
            "handles": pixels
        });
        print_json(&output, "handles");
    } else {
        println!(
            "{} {}x{}",
            "Canvas:".bold(),
            canvas.width(),
            canvas.height()
        );
        for handle in Handle::ALL {
            let point = pixels.get(handle);
            println!("  {}: ({}, {})", handle.to_string().cyan(), point.x, point.y);
        }
    }
}

/// Print the curve that results from dragging a handle
pub fn print_drag(handle: Handle, curve: &BezierCurve, json: bool) {
    if json {
        let output = json!({
            "success": true,
            "handle": handle,
            "text": format_curve(curve),
            "curve": curve
        });
        print_json(&output, "drag result");
    } else {
        println!("{curve}");
    }
}

/// Print an SVG path
pub fn print_path(kind: &str, path: &str, json: bool) {
    if json {
        let output = json!({
            "success": true,
            "kind": kind,
            "path": path
        });
        print_json(&output, "path");
    } else {
        println!("{path}");
    }
}

/// Print warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}
