//! Error types for loading result files and computing statistics.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a report.
#[derive(Debug, Error)]
pub enum StatsError {
    /// A result file could not be read or does not match the expected schema.
    #[error("failed to load {}: {reason}", .path.display())]
    Data { path: PathBuf, reason: String },

    /// A worker count has too few samples for a standard deviation.
    #[error("workers = {workers}: need at least 2 samples for statistics, found {samples}")]
    Statistics { workers: usize, samples: usize },
}

impl StatsError {
    /// Build a data error for `path` from any displayable cause.
    pub fn data(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        StatsError::Data {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_error_message() {
        let err = StatsError::data("results/run1.json", "expected value at line 1 column 1");
        assert_eq!(
            err.to_string(),
            "failed to load results/run1.json: expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_statistics_error_message() {
        let err = StatsError::Statistics {
            workers: 8,
            samples: 1,
        };
        assert!(err.to_string().contains("workers = 8"));
        assert!(err.to_string().contains("found 1"));
    }
}
