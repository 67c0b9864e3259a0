//! Cubic-Bezier Timing Functions
//!
//! This crate evaluates CSS-style `cubic-bezier(x1, y1, x2, y2)` timing
//! functions and provides the geometry needed by an interactive curve editor.
//!
//! # Overview
//!
//! - **Model**: [`BezierCurve`] with two interior control points; the anchors
//!   are fixed at `(0,0)` and `(1,1)`
//! - **Sample table**: 11 coarse samples of `x(t)` bracketing the root search
//! - **Solver**: Newton-Raphson with a binary-subdivision fallback for `t(x)`
//! - **Evaluator**: [`Easing`] / [`make_easing`], `y = ease(x)`
//! - **Sampler**: evenly spaced polyline of the eased function
//! - **Serializer**: `cubic-bezier(…)` text, formatted and parsed
//! - **Geometry**: curve space to editor pixel space and back, with clamping
//! - **Presets**: CSS keywords and the usual named curves
//!
//! # Bounded cost
//!
//! Every operation completes in bounded time: the solver runs at most 4
//! Newton steps or 10 bisection steps and returns its best estimate without
//! signalling non-convergence. No operation shares mutable state.
//!
//! # Example
//!
//! ```
//! use easing_curves::{BezierCurve, Canvas, Handle, Point, format_curve, parse_curve};
//!
//! let curve = parse_curve("cubic-bezier(0.25, 0.1, 0.25, 1)").ok_or("no curve")?;
//! let easing = curve.easing();
//! assert!((0.80..=0.82).contains(&easing.ease(0.5)));
//!
//! // Drag the first handle in a 300x300 editor.
//! let canvas = Canvas::new(300.0, 300.0)?;
//! let edited = canvas.from_pixels(Handle::P1, Point::new(126.0, 300.0), &curve);
//! assert_eq!(format_curve(&edited), "cubic-bezier(0.42, 0.00, 0.25, 1.00)");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod evaluator;
pub mod geometry;
pub mod model;
pub mod prelude;
pub mod presets;
pub mod sample_table;
pub mod sampler;
pub mod serializer;
pub mod solver;

pub use error::CurveError;
pub use evaluator::{Easing, make_easing};
pub use geometry::{Canvas, DEFAULT_Y_RANGE, HandlePixels};
pub use model::{BezierCurve, Handle, Point};
pub use presets::{PRESETS, Preset, find_preset, preset_curve, preset_names};
pub use sample_table::{SampleTable, build_sample_table};
pub use sampler::{DEFAULT_SAMPLES, sample_curve};
pub use serializer::{format_curve, parse_curve};
pub use solver::solve_t_for_x;
