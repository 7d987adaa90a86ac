//! CLI argument parsing for first-paint

use clap::{Parser, ValueEnum};

/// Output format for the segment summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "first-paint")]
#[command(version)]
#[command(
    about = "Render the first paint timing chart to docs/first_paint.png",
    long_about = None
)]
pub struct Cli {
    /// Print the aggregated segment durations to stdout after rendering
    #[arg(long = "format", value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Enable debug tracing output to stderr
    #[arg(long)]
    pub debug: bool,
}
