//! Command‑line entry point for the `ease` tool.
//!
//! Provides subcommands to list the curve catalog, evaluate and sample curves
//! by name, and render them to PNG plots or animated GIFs.

use std::{
    fmt::Display,
    path::{Path, PathBuf},
    process,
};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colornames::Color;
use easecurve::{CurveFamily, registry};
use image::Rgba;
use log::LevelFilter;

/// CLI command implementations.
mod cmd;
/// Rendering helpers shared by the CLI.
mod plot;

use crate::plot::{PlotPalette, StrokeOptions};

/// Comma-separated list of registered curve identifiers.
fn curve_names() -> String {
    registry::catalog().names().collect::<Vec<_>>().join(", ")
}

/// Validate a curve name against the default catalog.
fn parse_curve_name(s: &str) -> Result<String, String> {
    if registry::catalog().contains(s) {
        Ok(s.to_string())
    } else {
        Err(format!(
            "Invalid curve name '{}'. Valid options: {}",
            s,
            curve_names()
        ))
    }
}

/// Parse a hex color (RGB, RGBA, RRGGBB or RRGGBBAA, `#` optional).
fn parse_hex_rgba(hex: &str) -> Option<Rgba<u8>> {
    let raw = hex.strip_prefix('#').unwrap_or(hex);
    if !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let nibble = |idx: usize| u8::from_str_radix(&raw[idx..=idx], 16).ok().map(|v| v * 17);
    let pair = |idx: usize| u8::from_str_radix(&raw[idx..idx + 2], 16).ok();

    let channels: Vec<u8> = match raw.len() {
        3 | 4 => (0..raw.len()).map(nibble).collect::<Option<_>>()?,
        6 | 8 => (0..raw.len()).step_by(2).map(pair).collect::<Option<_>>()?,
        _ => return None,
    };
    let alpha = channels.get(3).copied().unwrap_or(0xff);
    Some(Rgba([channels[0], channels[1], channels[2], alpha]))
}

/// Parse a named or hex color into an `Rgba` value (alpha defaults to 0xff).
fn parse_rgba_color(input: &str) -> Result<Rgba<u8>, String> {
    let trimmed = input.trim();
    if let Some(rgba) = parse_hex_rgba(trimmed) {
        return Ok(rgba);
    }

    let color: Color = trimmed.try_into().map_err(|_| {
        format!("invalid color '{input}': use a named color or hex (RGB/RRGGBB with optional alpha)")
    })?;
    let (red, green, blue) = color.rgb();
    Ok(Rgba([red, green, blue, 0xff]))
}

#[derive(Parser)]
#[command(name = "ease")]
#[command(version = env!("CARGO_PKG_VERSION"))]
/// Top‑level CLI options and subcommands.
struct Cli {
    /// Sets the level of verbosity (`-v`, `-vv`, ...).
    #[arg(short, action = clap::ArgAction::Count, global = true, help = "Sets the level of verbosity")]
    v: u8,

    /// Command to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Color and stroke arguments shared by the rendering subcommands.
#[derive(clap::Args, Clone, Copy)]
struct StyleArgs {
    #[arg(
        short = 'w',
        long = "line-width",
        value_name = "PIXELS",
        default_value_t = 2,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Line width in pixels for the curve stroke"
    )]
    /// Stroke width for the rendered curve.
    line_width: u32,

    #[arg(
        long = "fg",
        visible_alias = "foreground",
        value_parser = parse_rgba_color,
        default_value = "#1072b8",
        value_name = "COLOR",
        help = "Foreground color (name or hex; RGB/RRGGBB with optional alpha, '#' optional)"
    )]
    /// Stroke color for the curve.
    foreground: Rgba<u8>,

    #[arg(
        long = "bg",
        visible_alias = "background",
        value_parser = parse_rgba_color,
        default_value = "#ffffff",
        value_name = "COLOR",
        help = "Background color (name or hex; RGB/RRGGBB with optional alpha, '#' optional)"
    )]
    /// Background color for the image.
    background: Rgba<u8>,
}

impl StyleArgs {
    /// Convert into rendering options.
    fn stroke(self) -> StrokeOptions {
        StrokeOptions {
            line_width: self.line_width,
            palette: PlotPalette {
                foreground: self.foreground,
                background: self.background,
            },
        }
    }
}

#[derive(Subcommand)]
/// Subcommands supported by the `ease` tool.
enum Commands {
    #[command(name = "list-curves", about = "List registered curves in catalog order")]
    /// List registered curves.
    ListCurves {
        #[arg(short = 'f', long = "family", help = "Only list curves of this family")]
        /// Optional family filter.
        family: Option<CurveFamily>,
    },

    #[command(about = "Evaluate a curve at one or more inputs")]
    /// Evaluate a curve at the given inputs.
    Eval {
        #[arg(help = &format!("Curve name (options: {})", curve_names()), value_parser = parse_curve_name)]
        /// Curve name.
        curve: String,

        #[arg(required = true, allow_negative_numbers = true, help = "Input values")]
        /// Inputs, normally in [0, 1].
        inputs: Vec<f32>,
    },

    #[command(about = "Print evenly spaced samples of a curve over [0, 1]")]
    /// Print a table of samples.
    Sample {
        #[arg(
            short = 'n',
            long = "steps",
            default_value_t = 10,
            value_parser = clap::value_parser!(u32).range(1..),
            help = "Number of intervals; prints steps + 1 rows"
        )]
        /// Number of sample intervals.
        steps: u32,

        #[arg(help = &format!("Curve name (options: {})", curve_names()), value_parser = parse_curve_name)]
        /// Curve name.
        curve: String,
    },

    #[command(about = "Render a curve to a PNG image")]
    /// Render a curve to an image.
    Plot {
        #[arg(short = 's', long = "size", default_value_t = 512, help = "Square image size in pixels")]
        /// Image size in pixels (square output).
        size: u32,

        #[command(flatten)]
        /// Stroke and colors.
        style: StyleArgs,

        #[arg(help = &format!("Curve name (options: {})", curve_names()), value_parser = parse_curve_name)]
        /// Curve name.
        curve: String,

        #[arg(help = "Output image path")]
        /// Output image path.
        output: PathBuf,
    },

    #[command(about = "Generate an animated GIF of a marker eased by a curve")]
    /// Render an animation of the curve.
    Animate {
        #[arg(short = 's', long = "size", default_value_t = 256, help = "Square image size in pixels")]
        /// Image size in pixels (square output).
        size: u32,

        #[arg(
            long = "frames",
            default_value_t = 60,
            value_parser = clap::value_parser!(u32).range(2..),
            help = "Number of frames spanning t = 0..1"
        )]
        /// Frames in the animation.
        frames: u32,

        #[arg(
            long = "fps",
            default_value_t = 30,
            value_parser = clap::value_parser!(u16).range(1..=120),
            help = "Frames per second for the animated GIF"
        )]
        /// Frames per second for the animation (1-120).
        fps: u16,

        #[command(flatten)]
        /// Stroke and colors.
        style: StyleArgs,

        #[arg(help = &format!("Curve name (options: {})", curve_names()), value_parser = parse_curve_name)]
        /// Curve name.
        curve: String,

        #[arg(help = "Output GIF file path")]
        /// Output GIF path.
        output: PathBuf,
    },
}

/// Initialise logging; `RUST_LOG` overrides the verbosity flag.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Print a success message or exit with an error.
fn report_ok<E: Display>(result: Result<(), E>, ok_msg: &str) {
    match result {
        Ok(()) => println!("{ok_msg}"),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

/// Exit with an error message if `result` failed.
fn exit_on_err<E: Display>(result: Result<(), E>) {
    if let Err(e) = result {
        eprintln!("{e}");
        process::exit(1);
    }
}

/// Handle the `list-curves` subcommand.
fn handle_list_curves(family: Option<CurveFamily>) {
    println!("Registered curves (id — family — degree):");
    for line in cmd::list_curves(family) {
        println!("{line}");
    }
}

/// Handle the `eval` subcommand.
fn handle_eval(curve: &str, inputs: &[f32]) -> Result<()> {
    for value in cmd::eval(curve, inputs)? {
        println!("{value}");
    }
    Ok(())
}

/// Handle the `sample` subcommand.
fn handle_sample(curve: &str, steps: u32) -> Result<()> {
    for (t, value) in cmd::sample(curve, steps)? {
        println!("{t}\t{value}");
    }
    Ok(())
}

/// Handle the `plot` subcommand.
fn handle_plot(curve: &str, size: u32, style: StyleArgs, output: &Path) -> Result<()> {
    let image = cmd::plot(curve, size, style.stroke())?;
    image.save(output)?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.v);

    match cli.command {
        Commands::ListCurves { family } => handle_list_curves(family),
        Commands::Eval { curve, inputs } => exit_on_err(handle_eval(&curve, &inputs)),
        Commands::Sample { steps, curve } => exit_on_err(handle_sample(&curve, steps)),
        Commands::Plot {
            size,
            style,
            curve,
            output,
        } => report_ok(handle_plot(&curve, size, style, &output), "OK!"),
        Commands::Animate {
            size,
            frames,
            fps,
            style,
            curve,
            output,
        } => report_ok(
            cmd::animate(cmd::AnimateOptions {
                size,
                curve_name: &curve,
                frames,
                fps,
                stroke: style.stroke(),
                output: &output,
            }),
            "Saved animation GIF!",
        ),
    }
}
