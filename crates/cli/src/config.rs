//! Editor configuration for easectl
//!
//! Canvas size, handle clamp range and sample count, read from YAML. Lookup
//! order: `--config` / `EASECTL_CONFIG`, then `<config dir>/easectl/config.yaml`
//! if it exists, then built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use easing_curves::{Canvas, DEFAULT_SAMPLES, DEFAULT_Y_RANGE};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// Default editor canvas edge in pixels.
pub const DEFAULT_CANVAS_SIZE: f64 = 300.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    pub canvas: CanvasSize,
    pub handle_y_range: YRange,
    pub samples: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct YRange {
    pub min: f64,
    pub max: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasSize::default(),
            handle_y_range: YRange::default(),
            samples: DEFAULT_SAMPLES,
        }
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_SIZE,
            height: DEFAULT_CANVAS_SIZE,
        }
    }
}

impl Default for YRange {
    fn default() -> Self {
        let (min, max) = DEFAULT_Y_RANGE;
        Self { min, max }
    }
}

impl EditorConfig {
    /// Load the configuration, validating it before returning.
    pub fn load(explicit: Option<&Path>) -> Result<Self, CliError> {
        let config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path().filter(|p| p.is_file()) {
                Some(path) => Self::from_file(&path)?,
                None => {
                    tracing::debug!("no config file, using defaults");
                    Self::default()
                }
            },
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::InvalidConfiguration(format!("cannot read {}: {e}", path.display()))
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, CliError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Check that the values can build a canvas and a polyline.
    pub fn validate(&self) -> Result<(), CliError> {
        self.canvas(None, None)?;
        if self.samples == 0 {
            return Err(CliError::InvalidConfiguration(
                "samples must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Canvas from the configured size, with per-command overrides.
    pub fn canvas(&self, width: Option<f64>, height: Option<f64>) -> Result<Canvas, CliError> {
        let canvas = Canvas::new(
            width.unwrap_or(self.canvas.width),
            height.unwrap_or(self.canvas.height),
        )?
        .with_y_range(self.handle_y_range.min, self.handle_y_range.max)?;
        Ok(canvas)
    }

    pub fn samples(&self, requested: Option<u32>) -> u32 {
        requested.unwrap_or(self.samples)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("easectl").join("config.yaml"))
}
