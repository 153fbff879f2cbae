//! Data models for traversal result files and the report.
//!
//! This module contains the serde types read from result files and the
//! per-worker summary produced for the report.

use serde::{Deserialize, Serialize};

/// Elapsed time as recorded by the traversal tool (`{"secs": .., "nanos": ..}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RequestTime {
    /// Whole seconds.
    pub secs: u64,
    /// Nanosecond remainder.
    pub nanos: u32,
}

impl RequestTime {
    /// Returns the duration as floating-point seconds.
    pub fn as_secs_f64(&self) -> f64 {
        self.secs as f64 + f64::from(self.nanos) / 1_000_000_000.0
    }
}

/// A single traversal run at a given worker count.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Traversal {
    /// Concurrency level the requests were issued with.
    pub workers: usize,

    /// Durations of file requests.
    #[serde(default)]
    pub file_request_times: Vec<RequestTime>,

    /// Durations of generic requests.
    #[serde(default)]
    pub request_times: Vec<RequestTime>,

    /// Durations of directory listing requests.
    #[serde(default)]
    pub directory_request_times: Vec<RequestTime>,
}

impl Traversal {
    /// Returns the duration list recorded under `field`.
    pub fn times(&self, field: SampleField) -> &[RequestTime] {
        match field {
            SampleField::FileRequestTimes => &self.file_request_times,
            SampleField::RequestTimes => &self.request_times,
            SampleField::DirectoryRequestTimes => &self.directory_request_times,
        }
    }
}

/// Top-level document of a result file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResultsFile {
    pub traversals: Vec<Traversal>,
}

/// Duration list of a traversal that can feed the report.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SampleField {
    FileRequestTimes,
    RequestTimes,
    DirectoryRequestTimes,
}

impl SampleField {
    /// Fields counted when nothing else is configured.
    pub fn defaults() -> Vec<SampleField> {
        vec![SampleField::FileRequestTimes, SampleField::RequestTimes]
    }
}

/// What to do with a worker count that has fewer than two samples.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SparseGroups {
    /// Fail the whole report (default)
    #[default]
    Abort,
    /// Leave the group out and log a warning
    Skip,
}

/// Descriptive statistics for one worker count.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkerSummary {
    pub workers: usize,
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub mean: f64,
    pub stddev: f64,
}
