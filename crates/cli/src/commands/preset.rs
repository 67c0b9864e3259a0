//! Preset catalog commands

use anyhow::Result;
use easing_curves::{PRESETS, find_preset};

use crate::commands::PresetCommands;
use crate::error::CliError;
use crate::output;

/// Execute preset command
pub fn execute(cmd: &PresetCommands, json: bool) -> Result<()> {
    match cmd {
        PresetCommands::List => {
            output::print_preset_list(PRESETS, json);
            Ok(())
        }
        PresetCommands::Show { name } => {
            let preset = find_preset(name).ok_or_else(|| CliError::UnknownPreset(name.clone()))?;
            output::print_preset(preset, json);
            Ok(())
        }
    }
}
