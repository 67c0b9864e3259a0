//! Prelude for the easing-curves crate.
//!
//! ```
//! use easing_curves::prelude::*;
//!
//! let curve = preset_curve("ease-in-out")?;
//! let points = sample_curve(&curve, DEFAULT_SAMPLES)?;
//! assert_eq!(points.len(), 101);
//! # Ok::<(), CurveError>(())
//! ```

pub use crate::error::CurveError;
pub use crate::evaluator::{Easing, make_easing};
pub use crate::geometry::{Canvas, HandlePixels};
pub use crate::model::{BezierCurve, Handle, Point};
pub use crate::presets::{find_preset, preset_curve};
pub use crate::sampler::{DEFAULT_SAMPLES, sample_curve};
pub use crate::serializer::{format_curve, parse_curve};
