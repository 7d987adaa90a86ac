//! First paint benchmark dataset
//!
//! Each trial records five browser timestamps (milliseconds since navigation):
//! start, prepare data, data ready, finish, first meaningful paint (FMP).
//! Libraries are kept in an ordered `Vec` so chart labels follow insertion order.

use crate::error::{FirstPaintError, Result};
use crate::segments::Segment;

/// Milliseconds, as reported by the browser performance timeline
pub type Millis = f32;

/// Number of timestamps recorded per trial
pub const TIMESTAMPS_PER_TRIAL: usize = 5;

/// A single measured run: `[start, prepare data, data ready, finish, fmp]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trial([Millis; TIMESTAMPS_PER_TRIAL]);

impl Trial {
    /// Create a trial from a full row of timestamps
    pub const fn new(timestamps: [Millis; TIMESTAMPS_PER_TRIAL]) -> Self {
        Self(timestamps)
    }

    /// Create a trial from a raw row, rejecting rows of the wrong length
    pub fn from_slice(library: &str, trial: usize, row: &[Millis]) -> Result<Self> {
        let timestamps: [Millis; TIMESTAMPS_PER_TRIAL] =
            row.try_into().map_err(|_| FirstPaintError::MalformedTrial {
                library: library.to_string(),
                trial,
                expected: TIMESTAMPS_PER_TRIAL,
                found: row.len(),
            })?;
        Ok(Self(timestamps))
    }

    /// Start timestamp (t0)
    pub fn start(&self) -> Millis {
        self.0[0]
    }

    /// Time elapsed between start and the timestamp `segment` ends at
    pub fn since_start(&self, segment: Segment) -> Millis {
        self.0[segment.timestamp_index()] - self.start()
    }

    pub fn timestamps(&self) -> &[Millis; TIMESTAMPS_PER_TRIAL] {
        &self.0
    }
}

/// All trials measured for one charting library
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryTimings {
    pub name: String,
    pub trials: Vec<Trial>,
}

/// Ordered collection of library timings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    libraries: Vec<LibraryTimings>,
}

impl Dataset {
    /// The embedded first paint benchmark (three trials per library)
    pub fn first_paint() -> Self {
        let library = |name: &str, trials: [[Millis; TIMESTAMPS_PER_TRIAL]; 3]| LibraryTimings {
            name: name.to_string(),
            trials: trials.into_iter().map(Trial::new).collect(),
        };

        Self {
            libraries: vec![
                library(
                    "Chart.JS",
                    [
                        [32.4, 45.1, 297.6, 1042.4, 1054.8],
                        [33.6, 43.4, 285.1, 1041.6, 1064.5],
                        [30.9, 40.9, 292.7, 1036.2, 1056.8],
                    ],
                ),
                library(
                    "TimeChart",
                    [
                        [29.9, 57.2, 255.2, 288.3, 853.2],
                        [36.2, 43.9, 236.9, 271.5, 837.4],
                        [34.9, 42.7, 252.4, 285.7, 871.9],
                    ],
                ),
                library(
                    "μPlot",
                    [
                        [29.6, 31.4, 189.8, 285.6, 335.3],
                        [30.6, 32.8, 197.3, 305.5, 350.0],
                        [37.9, 40.7, 209.7, 311.7, 351.7],
                    ],
                ),
            ],
        }
    }

    /// Build a dataset from raw `(name, rows)` pairs, validating every row
    ///
    /// Fails on the first row that does not hold exactly
    /// [`TIMESTAMPS_PER_TRIAL`] timestamps. Trial numbers in errors are 1-based.
    pub fn from_rows<S, I>(rows: I) -> Result<Self>
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Vec<Vec<Millis>>)>,
    {
        let mut libraries = Vec::new();
        for (name, raw_trials) in rows {
            let name: String = name.into();
            let trials = raw_trials
                .iter()
                .enumerate()
                .map(|(i, row)| Trial::from_slice(&name, i + 1, row))
                .collect::<Result<Vec<_>>>()?;
            libraries.push(LibraryTimings { name, trials });
        }
        Ok(Self { libraries })
    }

    pub fn libraries(&self) -> &[LibraryTimings] {
        &self.libraries
    }

    /// Library names in dataset order
    pub fn names(&self) -> Vec<&str> {
        self.libraries.iter().map(|l| l.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }
}
