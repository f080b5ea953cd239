//! Command‑line entry point for the `hdisk` tool.
//!
//! Prints Hilbert curves and their square-to-disk mappings, or exports them
//! as SVG polylines.

use std::{
    fmt::Display,
    io::{self, Write},
    path::{Path, PathBuf},
    process,
};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colornames::Color;
use hilbertdisk::{Mapping, registry};
use log::LevelFilter;

/// CLI command implementations.
mod cmd;
/// SVG rendering.
mod svg;

/// Validate a mapping name against the registry.
fn parse_mapping(s: &str) -> Result<Mapping, String> {
    registry::lookup(s).map_err(|e| e.to_string())
}

/// Parse a named or hex color into an SVG `#rrggbb` string.
///
/// Supports CSS color names via `colornames` and short/long hex (RGB/RRGGBB)
/// with or without a leading `#`.
fn parse_svg_color(input: &str) -> Result<String, String> {
    fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
        let raw = hex.trim_start_matches('#');
        if !raw.as_bytes().iter().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let pair = |idx: usize| u8::from_str_radix(&raw[idx..idx + 2], 16).ok();
        let nibble = |idx: usize| {
            u8::from_str_radix(&raw[idx..idx + 1], 16)
                .ok()
                .map(|v| v * 17)
        };
        match raw.len() {
            3 => Some((nibble(0)?, nibble(1)?, nibble(2)?)),
            6 => Some((pair(0)?, pair(2)?, pair(4)?)),
            _ => None,
        }
    }

    let trimmed = input.trim();
    let (red, green, blue) = match parse_hex(trimmed) {
        Some(rgb) => rgb,
        None => {
            let color: Color = trimmed.try_into().map_err(|_| {
                format!("invalid color '{input}': use a named color or hex (RGB/RRGGBB, '#' optional)")
            })?;
            color.rgb()
        }
    };
    Ok(format!("#{red:02x}{green:02x}{blue:02x}"))
}

#[derive(Parser)]
#[command(name = "hdisk")]
#[command(version = env!("CARGO_PKG_VERSION"))]
/// Top‑level CLI options and subcommands.
struct Cli {
    /// Sets the level of verbosity (`-v`, `-vv`, ...).
    #[arg(short, action = clap::ArgAction::Count, help = "Sets the level of verbosity")]
    v: u8,

    /// Command to execute.
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
/// Subcommands supported by the `hdisk` tool.
enum Commands {
    #[command(about = "Print the normalized curve, one 'x y' pair per line")]
    /// Print the (optionally mapped) normalized curve.
    Points {
        #[arg(allow_negative_numbers = true, help = "Curve order (grid side is 2^ORDER)")]
        /// Curve order.
        order: i64,

        #[arg(
            short = 'm',
            long = "mapping",
            value_parser = parse_mapping,
            help = &format!("Mapping to apply (options: {})", registry::MAPPING_NAMES.join(", "))
        )]
        /// Optional mapping applied to every point.
        mapping: Option<Mapping>,
    },

    #[command(about = "Export the curve and its mappings as SVG polylines")]
    /// Write the original curve and each selected mapping as SVG files.
    Svg {
        #[arg(allow_negative_numbers = true, help = "Curve order (grid side is 2^ORDER)")]
        /// Curve order.
        order: i64,

        #[arg(help = "Output directory (created when missing)")]
        /// Directory that receives the SVG files.
        outdir: PathBuf,

        #[arg(
            short = 'm',
            long = "mapping",
            value_parser = parse_mapping,
            help = "Mapping to export (repeatable; defaults to the first two registry entries)"
        )]
        /// Mappings to export next to the original curve.
        mappings: Vec<Mapping>,

        #[arg(
            short = 's',
            long = "size",
            default_value_t = 432,
            value_parser = clap::value_parser!(u32).range(1..),
            help = "Length of the drawing's longer side"
        )]
        /// Canvas size in user units.
        size: u32,

        #[arg(
            long = "stroke",
            value_parser = parse_svg_color,
            default_value = "#0000ff",
            value_name = "COLOR",
            help = "Stroke color (name or hex; RGB/RRGGBB, '#' optional)"
        )]
        /// Stroke color.
        stroke: String,

        #[arg(
            short = 'w',
            long = "line-width",
            default_value_t = 1.5,
            help = "Stroke width"
        )]
        /// Stroke width.
        line_width: f64,
    },

    #[command(name = "list-mappings", about = "List supported mapping names")]
    /// List every registered mapping.
    ListMappings,
}

/// Print a success message or exit with an error.
fn report_ok<E: Display>(result: Result<(), E>, ok_msg: Option<&str>) {
    match result {
        Ok(()) => {
            if let Some(msg) = ok_msg {
                println!("{msg}");
            }
        }
        Err(e) => {
            eprintln!("{e:#}");
            process::exit(1);
        }
    }
}

/// Install the logger; `-v` raises the level, `RUST_LOG` overrides it.
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

/// Handle the `points` subcommand.
fn handle_points(order: i64, mapping: Option<Mapping>) -> Result<()> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let n = cmd::points(order, mapping, &mut out)?;
    log::info!("printed {n} points");
    Ok(())
}

/// Handle the `svg` subcommand.
fn handle_svg(order: i64, outdir: &Path, mappings: Vec<Mapping>, options: svg::SvgOptions) -> Result<()> {
    let mappings = if mappings.is_empty() {
        let (first, second) = registry::default_pair();
        vec![first, second]
    } else {
        mappings
    };
    let written = cmd::svg(&cmd::SvgExport {
        order,
        mappings: &mappings,
        outdir,
        options,
    })?;
    println!("Saved {} SVGs to {}", written.len(), outdir.display());
    Ok(())
}

/// Handle the `list-mappings` subcommand.
fn handle_list_mappings() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    cmd::list_mappings(&mut out)?;
    out.flush()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.v);

    match cli.command {
        Commands::Points { order, mapping } => report_ok(handle_points(order, mapping), None),
        Commands::Svg {
            order,
            outdir,
            mappings,
            size,
            stroke,
            line_width,
        } => report_ok(
            handle_svg(
                order,
                &outdir,
                mappings,
                svg::SvgOptions {
                    size,
                    stroke,
                    line_width,
                },
            ),
            Some("OK!"),
        ),
        Commands::ListMappings => report_ok(handle_list_mappings(), None),
    }
}
