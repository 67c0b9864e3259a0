//! Error types for easectl CLI

use easing_curves::CurveError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Cannot parse curve: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error(transparent)]
    Curve(#[from] CurveError),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::UnknownPreset(_) | CliError::Curve(CurveError::UnknownPreset(_)) => 2,
            CliError::ParseError(_) | CliError::Curve(CurveError::Parse(_)) => 3,
            CliError::InvalidConfiguration(_) | CliError::YamlError(_) | CliError::Curve(_) => 4,
        }
    }

    /// Stable name used in JSON error output.
    ///
    /// Library preset and parse failures report the same kind as their
    /// CLI counterparts, in line with [`exit_code`](Self::exit_code).
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::UnknownPreset(_) | CliError::Curve(CurveError::UnknownPreset(_)) => {
                "UnknownPreset"
            }
            CliError::ParseError(_) | CliError::Curve(CurveError::Parse(_)) => "ParseError",
            CliError::InvalidConfiguration(_) => "InvalidConfiguration",
            CliError::Curve(_) => "CurveError",
            CliError::YamlError(_) => "YamlError",
        }
    }
}
