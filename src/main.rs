use anyhow::{Context, Result};
use clap::Parser;
use first_paint::{chart, cli::Cli, dataset::Dataset, report, segments};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let dataset = Dataset::first_paint();
    let summaries =
        segments::aggregate(&dataset).context("Failed to aggregate first paint trials")?;
    if let Some(slowest) = segments::slowest(&summaries) {
        debug!(library = %slowest.library, fmp = slowest.fmp, "slowest first paint");
    }

    let config = chart::ChartConfig::default();
    chart::render(&summaries, &config)
        .with_context(|| format!("Failed to write {}", config.output_path.display()))?;
    eprintln!("Saved {}", config.output_path.display());

    if let Some(format) = args.format {
        print!("{}", report::format_summary(&summaries, format, &config.title)?);
    }

    Ok(())
}
