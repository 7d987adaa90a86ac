//! Text, JSON and CSV summaries of the aggregated segment table

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::segments::{Segment, SegmentDurations};
use serde::Serialize;

/// JSON document describing the chart's underlying numbers
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub title: &'a str,
    pub unit: &'a str,
    pub libraries: &'a [SegmentDurations],
}

/// Escape CSV field (handle commas, quotes, newlines)
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// CSV table, one row per library, columns in timeline order
pub fn to_csv(summaries: &[SegmentDurations]) -> String {
    let mut output = String::from("library");
    for segment in Segment::ALL {
        output.push(',');
        output.push_str(segment.key());
    }
    output.push('\n');

    for summary in summaries {
        output.push_str(&escape_field(&summary.library));
        for segment in Segment::ALL {
            output.push_str(&format!(",{:.3}", summary.get(segment)));
        }
        output.push('\n');
    }

    output
}

pub fn to_json(summaries: &[SegmentDurations], title: &str) -> Result<String> {
    let report = JsonReport {
        title,
        unit: "ms",
        libraries: summaries,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Aligned table with one column per segment
pub fn to_text(summaries: &[SegmentDurations]) -> String {
    let width = summaries
        .iter()
        .map(|s| s.library.chars().count())
        .chain(std::iter::once("library".len()))
        .max()
        .unwrap_or(0);

    let mut output = format!("{:<width$}", "library", width = width);
    for segment in Segment::ALL {
        output.push_str(&format!(" {:>13}", segment.label()));
    }
    output.push('\n');
    output.push_str(&"─".repeat(width + 14 * Segment::ALL.len()));
    output.push('\n');

    for summary in summaries {
        let pad = width - summary.library.chars().count();
        output.push_str(&summary.library);
        output.push_str(&" ".repeat(pad));
        for segment in Segment::ALL {
            output.push_str(&format!(" {:>10.1} ms", summary.get(segment)));
        }
        output.push('\n');
    }

    output
}

/// Render the summary in the requested format
pub fn format_summary(
    summaries: &[SegmentDurations],
    format: OutputFormat,
    title: &str,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(to_text(summaries)),
        OutputFormat::Json => to_json(summaries, title).map(|mut json| {
            json.push('\n');
            json
        }),
        OutputFormat::Csv => Ok(to_csv(summaries)),
    }
}
