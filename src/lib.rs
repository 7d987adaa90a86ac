//! first-paint - First paint timing benchmark chart
//!
//! Aggregates the embedded first paint trials for Chart.JS, TimeChart and μPlot
//! into mean segment durations and renders them as a horizontal stacked bar
//! chart at `docs/first_paint.png`.

pub mod chart;
pub mod cli;
pub mod dataset;
pub mod error;
pub mod report;
pub mod segments;

pub use error::{FirstPaintError, Result};
