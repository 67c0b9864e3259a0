//! easectl - Cubic-Bezier Timing Curve CLI
//!
//! Evaluate, sample, format and parse CSS `cubic-bezier()` timing functions,
//! and run the same pixel-space handle mapping an interactive curve editor
//! uses.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod completion;
mod config;
mod error;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use easing_curves::{Handle, Point};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::*;
use crate::config::EditorConfig;
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "easectl")]
#[command(about = "Cubic-bezier timing curve CLI - evaluate, convert and edit easing curves")]
#[command(version)]
#[command(long_about = "
easectl works with CSS cubic-bezier() timing functions: it evaluates eased
values, samples curves for plotting, converts between text and control points,
and maps editor handle drags between pixel space and curve space.

A CURVE argument is a preset name (see `easectl preset list`), cubic-bezier()
text, or four comma-separated numbers x1,y1,x2,y2.
Use --json flag for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Editor configuration file (YAML)
    #[arg(long, global = true, env = "EASECTL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the eased output for one or more progress values
    Eval {
        /// Curve to evaluate
        curve: String,
        /// Progress values, nominally in [0,1]
        #[arg(required = true, allow_negative_numbers = true)]
        x: Vec<f64>,
    },

    /// Sample the eased function as an evenly spaced polyline
    Sample {
        /// Curve to sample
        curve: String,
        /// Number of segments (default from config)
        #[arg(short, long)]
        samples: Option<u32>,
    },

    /// Format control-point coordinates as cubic-bezier() text
    Format {
        #[arg(allow_negative_numbers = true)]
        x1: f64,
        #[arg(allow_negative_numbers = true)]
        y1: f64,
        #[arg(allow_negative_numbers = true)]
        x2: f64,
        #[arg(allow_negative_numbers = true)]
        y2: f64,
    },

    /// Parse cubic-bezier() text, e.g. copied from a stylesheet
    Parse {
        /// Text containing cubic-bezier(x1, y1, x2, y2)
        text: String,
    },

    /// Named curve catalog
    #[command(subcommand)]
    Preset(PresetCommands),

    /// Show handle positions in editor pixel space
    Handles {
        /// Curve to place
        curve: String,
        #[command(flatten)]
        canvas: CanvasArgs,
    },

    /// Drag a handle to a pixel position and print the resulting curve
    Drag {
        /// Curve to edit
        curve: String,
        /// Handle to move (p1 or p2)
        handle: Handle,
        /// Pointer x in pixels
        #[arg(allow_negative_numbers = true)]
        px: f64,
        /// Pointer y in pixels (grows downward)
        #[arg(allow_negative_numbers = true)]
        py: f64,
        #[command(flatten)]
        canvas: CanvasArgs,
    },

    /// Print an SVG path for the curve in editor pixel space
    Path {
        /// Curve to draw
        curve: String,
        #[command(flatten)]
        canvas: CanvasArgs,
        /// Draw the sampled eased function instead of the control geometry
        #[arg(long)]
        eased: bool,
        /// Segments for --eased (default from config)
        #[arg(short, long, requires = "eased")]
        samples: Option<u32>,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("easectl={log_level},easing_curves={log_level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }

            let exit_code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(exit_code)
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    let load_config = || EditorConfig::load(cli.config.as_deref());

    match &cli.command {
        Commands::Eval { curve, x } => commands::eval::execute_eval(curve, x, cli.json),
        Commands::Sample { curve, samples } => {
            commands::eval::execute_sample(curve, *samples, &load_config()?, cli.json)
        }
        Commands::Format { x1, y1, x2, y2 } => {
            commands::text::execute_format(*x1, *y1, *x2, *y2, cli.json)
        }
        Commands::Parse { text } => commands::text::execute_parse(text, cli.json),
        Commands::Preset(cmd) => commands::preset::execute(cmd, cli.json),
        Commands::Handles { curve, canvas } => {
            commands::geometry::execute_handles(curve, *canvas, &load_config()?, cli.json)
        }
        Commands::Drag {
            curve,
            handle,
            px,
            py,
            canvas,
        } => commands::geometry::execute_drag(
            curve,
            *handle,
            Point::new(*px, *py),
            *canvas,
            &load_config()?,
            cli.json,
        ),
        Commands::Path {
            curve,
            canvas,
            eased,
            samples,
        } => commands::geometry::execute_path(
            curve,
            *canvas,
            *eased,
            *samples,
            &load_config()?,
            cli.json,
        ),
        Commands::Completion { shell } => {
            completion::generate_completion(*shell);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    // --- Global flag parsing ---

    #[test]
    fn parse_preset_list_defaults() -> TestResult {
        let cli = Cli::try_parse_from(["easectl", "preset", "list"])?;
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
        assert!(matches!(cli.command, Commands::Preset(PresetCommands::List)));
        Ok(())
    }

    #[test]
    fn parse_global_json_flag_before_subcommand() -> TestResult {
        let cli = Cli::try_parse_from(["easectl", "--json", "preset", "list"])?;
        assert!(cli.json);
        Ok(())
    }

    #[test]
    fn parse_global_json_flag_after_subcommand() -> TestResult {
        let cli = Cli::try_parse_from(["easectl", "preset", "list", "--json"])?;
        assert!(cli.json);
        Ok(())
    }

    #[test]
    fn parse_verbose_levels() -> TestResult {
        for (args, expected) in [
            (vec!["easectl", "preset", "list"], 0),
            (vec!["easectl", "-v", "preset", "list"], 1),
            (vec!["easectl", "-vv", "preset", "list"], 2),
            (vec!["easectl", "-vvv", "preset", "list"], 3),
        ] {
            let cli = Cli::try_parse_from(args)?;
            assert_eq!(cli.verbose, expected);
        }
        Ok(())
    }

    #[test]
    fn parse_config_flag() -> TestResult {
        let cli = Cli::try_parse_from(["easectl", "--config", "editor.yaml", "preset", "list"])?;
        assert_eq!(cli.config, Some(PathBuf::from("editor.yaml")));
        Ok(())
    }

    // --- Curve command parsing ---

    #[test]
    fn parse_eval_multiple_inputs() -> TestResult {
        let cli = Cli::try_parse_from(["easectl", "eval", "ease", "0", "0.5", "-0.25", "1"])?;
        match &cli.command {
            Commands::Eval { curve, x } => {
                assert_eq!(curve, "ease");
                assert_eq!(x.len(), 4);
                assert_eq!(x.get(2).copied(), Some(-0.25));
            }
            _ => return Err("expected Eval command".into()),
        }
        Ok(())
    }

    #[test]
    fn parse_eval_requires_input() {
        assert!(Cli::try_parse_from(["easectl", "eval", "ease"]).is_err());
    }

    #[test]
    fn parse_format_negative_coordinates() -> TestResult {
        let cli = Cli::try_parse_from(["easectl", "format", "0.68", "-0.6", "0.32", "1.6"])?;
        match &cli.command {
            Commands::Format { x1, y1, x2, y2 } => {
                assert_eq!([*x1, *y1, *x2, *y2], [0.68, -0.6, 0.32, 1.6]);
            }
            _ => return Err("expected Format command".into()),
        }
        Ok(())
    }

    #[test]
    fn parse_sample_count() -> TestResult {
        let cli = Cli::try_parse_from(["easectl", "sample", "ease-in", "--samples", "8"])?;
        assert!(matches!(
            cli.command,
            Commands::Sample {
                samples: Some(8),
                ..
            }
        ));
        Ok(())
    }

    #[test]
    fn parse_drag_with_canvas() -> TestResult {
        let cli = Cli::try_parse_from([
            "easectl", "drag", "ease", "P2", "150", "-20", "--width", "400", "--height", "200",
        ])?;
        match &cli.command {
            Commands::Drag {
                handle,
                px,
                py,
                canvas,
                ..
            } => {
                assert_eq!(*handle, Handle::P2);
                assert_eq!((*px, *py), (150.0, -20.0));
                assert_eq!(canvas.width, Some(400.0));
                assert_eq!(canvas.height, Some(200.0));
            }
            _ => return Err("expected Drag command".into()),
        }
        Ok(())
    }

    #[test]
    fn parse_drag_rejects_unknown_handle() {
        assert!(Cli::try_parse_from(["easectl", "drag", "ease", "p3", "1", "1"]).is_err());
    }

    #[test]
    fn parse_path_samples_require_eased() -> TestResult {
        assert!(Cli::try_parse_from(["easectl", "path", "ease", "--samples", "10"]).is_err());
        let cli = Cli::try_parse_from(["easectl", "path", "ease", "--eased", "-s", "10"])?;
        assert!(matches!(
            cli.command,
            Commands::Path {
                eased: true,
                samples: Some(10),
                ..
            }
        ));
        Ok(())
    }

    #[test]
    fn parse_completion_shells() -> TestResult {
        for shell in ["bash", "zsh", "fish", "powershell", "elvish"] {
            let cli = Cli::try_parse_from(["easectl", "completion", shell])?;
            assert!(matches!(cli.command, Commands::Completion { .. }));
        }
        Ok(())
    }

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
