//! Error types for first paint aggregation and rendering

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while aggregating timings or rendering the chart
#[derive(Error, Debug)]
pub enum FirstPaintError {
    #[error("Malformed trial {trial} for {library}: expected {expected} timestamps, found {found}")]
    MalformedTrial {
        library: String,
        trial: usize,
        expected: usize,
        found: usize,
    },

    #[error("No trials recorded for {library}")]
    NoTrials { library: String },

    #[error("Nothing to render: no libraries in dataset")]
    EmptyDataset,

    #[error("Output directory does not exist: {0}")]
    MissingOutputDir(PathBuf),

    #[error("Failed to load chart font: {0}")]
    Font(String),

    #[error("Failed to render chart: {0}")]
    Render(String),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for first paint operations
pub type Result<T> = std::result::Result<T, FirstPaintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_trial_message() {
        let err = FirstPaintError::MalformedTrial {
            library: "μPlot".to_string(),
            trial: 2,
            expected: 5,
            found: 4,
        };
        assert_eq!(
            err.to_string(),
            "Malformed trial 2 for μPlot: expected 5 timestamps, found 4"
        );
    }

    #[test]
    fn test_missing_output_dir_message() {
        let err = FirstPaintError::MissingOutputDir(PathBuf::from("docs"));
        assert!(err.to_string().contains("docs"));
    }
}
