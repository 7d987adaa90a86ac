//! Segment aggregation
//!
//! Turns raw trial timestamps into four mean durations per library, each
//! measured from the trial's start timestamp.

use crate::dataset::{Dataset, LibraryTimings, Millis};
use crate::error::{FirstPaintError, Result};
use serde::Serialize;
use tracing::{debug, warn};

/// One of the four durations derived from a trial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// start → prepare data
    PrepareData,
    /// start → data ready
    DataReady,
    /// start → finish
    Finish,
    /// start → first meaningful paint
    Fmp,
}

impl Segment {
    /// All segments in timeline order
    pub const ALL: [Segment; 4] = [
        Segment::PrepareData,
        Segment::DataReady,
        Segment::Finish,
        Segment::Fmp,
    ];

    /// Back-to-front draw order: longest segment first so shorter ones stay visible
    pub const DRAW_ORDER: [Segment; 4] = [
        Segment::Fmp,
        Segment::Finish,
        Segment::DataReady,
        Segment::PrepareData,
    ];

    /// Index of the timestamp this segment ends at
    pub fn timestamp_index(self) -> usize {
        match self {
            Segment::PrepareData => 1,
            Segment::DataReady => 2,
            Segment::Finish => 3,
            Segment::Fmp => 4,
        }
    }

    /// Legend label, named after the phase that fills the segment's tail
    pub fn label(self) -> &'static str {
        match self {
            Segment::PrepareData => "load script",
            Segment::DataReady => "prepare data",
            Segment::Finish => "scripting",
            Segment::Fmp => "paint",
        }
    }

    /// Field name used in JSON/CSV reports
    pub fn key(self) -> &'static str {
        match self {
            Segment::PrepareData => "prepare_data",
            Segment::DataReady => "data_ready",
            Segment::Finish => "finish",
            Segment::Fmp => "fmp",
        }
    }
}

/// Mean segment durations for one library (milliseconds)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentDurations {
    pub library: String,
    pub prepare_data: Millis,
    pub data_ready: Millis,
    pub finish: Millis,
    pub fmp: Millis,
}

impl SegmentDurations {
    pub fn get(&self, segment: Segment) -> Millis {
        match segment {
            Segment::PrepareData => self.prepare_data,
            Segment::DataReady => self.data_ready,
            Segment::Finish => self.finish,
            Segment::Fmp => self.fmp,
        }
    }

    /// `prepare_data <= data_ready <= finish <= fmp`
    pub fn is_monotonic(&self) -> bool {
        self.prepare_data <= self.data_ready
            && self.data_ready <= self.finish
            && self.finish <= self.fmp
    }

    /// Largest of the four segments
    pub fn max(&self) -> Millis {
        Segment::ALL
            .iter()
            .map(|&s| self.get(s))
            .fold(0.0, Millis::max)
    }
}

/// Mean of `values` using Trueno; caller guarantees `values` is non-empty
fn mean(values: &[Millis]) -> Millis {
    trueno::Vector::from_slice(values).mean().unwrap_or(0.0)
}

/// Aggregate a single library's trials into mean segment durations
pub fn aggregate_library(library: &LibraryTimings) -> Result<SegmentDurations> {
    if library.trials.is_empty() {
        return Err(FirstPaintError::NoTrials {
            library: library.name.clone(),
        });
    }

    let segment_mean = |segment: Segment| {
        let deltas: Vec<Millis> = library
            .trials
            .iter()
            .map(|t| t.since_start(segment))
            .collect();
        mean(&deltas)
    };

    let durations = SegmentDurations {
        library: library.name.clone(),
        prepare_data: segment_mean(Segment::PrepareData),
        data_ready: segment_mean(Segment::DataReady),
        finish: segment_mean(Segment::Finish),
        fmp: segment_mean(Segment::Fmp),
    };

    debug!(
        library = %durations.library,
        trials = library.trials.len(),
        prepare_data = durations.prepare_data,
        data_ready = durations.data_ready,
        finish = durations.finish,
        fmp = durations.fmp,
        "aggregated segments"
    );

    if !durations.is_monotonic() {
        warn!(library = %durations.library, "segment durations out of timeline order");
    }

    Ok(durations)
}

/// Aggregate every library in dataset order
pub fn aggregate(dataset: &Dataset) -> Result<Vec<SegmentDurations>> {
    debug!(libraries = dataset.len(), "aggregating first paint trials");
    dataset.libraries().iter().map(aggregate_library).collect()
}

/// Library with the longest time to first meaningful paint
pub fn slowest(summaries: &[SegmentDurations]) -> Option<&SegmentDurations> {
    summaries
        .iter()
        .max_by(|a, b| a.fmp.partial_cmp(&b.fmp).unwrap_or(std::cmp::Ordering::Equal))
}
