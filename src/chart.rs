//! First paint chart rendering
//!
//! Draws one horizontal bar per library. Every segment is a bar from zero to
//! its mean duration; segments are drawn longest first so the shorter ones
//! layer on top, which reads as a stacked timeline.

use crate::error::{FirstPaintError, Result};
use crate::segments::{Segment, SegmentDurations};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{register_font, FontStyle};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, info};

/// DejaVu Sans, embedded so rendering does not depend on system fonts
static FONT_BYTES: &[u8] = include_bytes!("../assets/fonts/DejaVuSans.ttf");

static FONT_REGISTERED: OnceLock<()> = OnceLock::new();

/// Fixed rendering parameters for the first paint chart
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Output image path; the extension selects the encoder
    pub output_path: PathBuf,
    /// Image size in pixels
    pub size: (u32, u32),
    pub title: String,
    pub x_label: String,
    /// Fill color per segment, indexed like [`Segment::DRAW_ORDER`]
    pub palette: [RGBColor; 4],
    /// Pixels trimmed from each side of a bar
    pub bar_margin: u32,
    /// Minimum drawn width of a non-zero segment, in pixels
    pub min_segment_px: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("docs/first_paint.png"),
            size: (640, 480),
            title: "First Paint Time".to_string(),
            x_label: "ms".to_string(),
            // matplotlib tab10 C0..C3
            palette: [
                RGBColor(0x1f, 0x77, 0xb4),
                RGBColor(0xff, 0x7f, 0x0e),
                RGBColor(0x2c, 0xa0, 0x2c),
                RGBColor(0xd6, 0x27, 0x28),
            ],
            bar_margin: 12,
            min_segment_px: 2,
        }
    }
}

/// Register `bytes` as the normal-style font for `family`
fn load_font(family: &str, bytes: &'static [u8]) -> Result<()> {
    register_font(family, FontStyle::Normal, bytes)
        .map_err(|_| FirstPaintError::Font(format!("invalid font data for {}", family)))
}

/// Register the embedded font as `sans-serif` once per process
fn ensure_font() -> Result<()> {
    if FONT_REGISTERED.get().is_none() {
        load_font("sans-serif", FONT_BYTES)?;
        // Racing callers register identical bytes
        let _ = FONT_REGISTERED.set(());
    }
    Ok(())
}

fn render_error<E: std::fmt::Display>(err: E) -> FirstPaintError {
    FirstPaintError::Render(err.to_string())
}

/// Upper bound of the x axis: largest segment plus 5% headroom
fn x_axis_limit(summaries: &[SegmentDurations]) -> f32 {
    let max = summaries.iter().map(|s| s.max()).fold(0.0, f32::max);
    if max > 0.0 {
        max * 1.05
    } else {
        1.0
    }
}

/// Widen non-zero segments narrower than `min_visible` so they stay visible
fn visible_width(value: f32, min_visible: f32) -> f32 {
    if value > 0.0 {
        value.max(min_visible)
    } else {
        value
    }
}

/// Render the chart to `config.output_path`, overwriting any existing file
pub fn render(summaries: &[SegmentDurations], config: &ChartConfig) -> Result<()> {
    render_to(&config.output_path, summaries, config)
}

/// Render the chart to an explicit path
///
/// The parent directory must already exist. Library labels run bottom to top
/// in the order of `summaries`; bar `i` sits in segment `i` of the y axis,
/// whose integer range is inclusive.
pub fn render_to(
    path: &Path,
    summaries: &[SegmentDurations],
    config: &ChartConfig,
) -> Result<()> {
    if summaries.is_empty() {
        return Err(FirstPaintError::EmptyDataset);
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(FirstPaintError::MissingOutputDir(parent.to_path_buf()));
        }
    }
    ensure_font()?;
    debug!(path = %path.display(), bars = summaries.len(), "rendering chart");

    let root = BitMapBackend::new(path, config.size).into_drawing_area();
    draw_chart(&root, summaries, config)?;
    info!(path = %path.display(), "saved chart");

    Ok(())
}

/// Draw the chart onto any drawing area and present it
fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    summaries: &[SegmentDurations],
    config: &ChartConfig,
) -> Result<()> {
    let names: Vec<&str> = summaries.iter().map(|s| s.library.as_str()).collect();
    let x_max = x_axis_limit(summaries);

    root.fill(&WHITE).map_err(render_error)?;

    let mut chart = ChartBuilder::on(root)
        .caption(&config.title, ("sans-serif", 20))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(0f32..x_max, (0..names.len() - 1).into_segmented())
        .map_err(render_error)?;

    let plot_width = chart.plotting_area().dim_in_pixel().0.max(1);
    let min_visible = x_max * config.min_segment_px as f32 / plot_width as f32;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(config.x_label.as_str())
        .x_label_formatter(&|v| format!("{:.0}", v))
        .y_label_formatter(&|v| match v {
            SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => {
                names.get(*i).map(|name| name.to_string()).unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        })
        .draw()
        .map_err(render_error)?;

    for (segment, color) in Segment::DRAW_ORDER.iter().zip(config.palette) {
        let bars = Histogram::horizontal(&chart)
            .style(color.filled())
            .margin(config.bar_margin)
            .data(
                summaries
                    .iter()
                    .enumerate()
                    .map(|(i, s)| (i, visible_width(s.get(*segment), min_visible))),
            );

        chart
            .draw_series(bars)
            .map_err(render_error)?
            .label(segment.label())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 15, y + 5)], color.filled())
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.3))
        .draw()
        .map_err(render_error)?;

    root.present().map_err(render_error)?;

    Ok(())
}
