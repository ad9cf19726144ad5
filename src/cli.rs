// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `plandag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "plandag",
    version,
    about = "Compute layered levels and positions for task precedence diagrams.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the precedence table (.toml, .csv or .tsv).
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Output renderer.
    #[arg(long, value_enum, value_name = "FORMAT", default_value = "text")]
    pub format: OutputFormat,

    /// Coordinate multiplier, for a larger-scale render of the same layout.
    #[arg(long, value_name = "FACTOR", default_value_t = 1.0)]
    pub scale: f64,

    /// Keep running and re-render whenever the input file changes.
    #[arg(long)]
    pub watch: bool,

    /// Load and validate the table, print a summary, but skip the layout.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PLANDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Output renderer as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Per-level listing with coordinates, plus the edge list.
    Text,
    /// Graphviz DOT with pinned positions (render with `neato -n`).
    Dot,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
