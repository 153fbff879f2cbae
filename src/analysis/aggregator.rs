//! Sample aggregation across result files.
//!
//! This module reads result files and buckets every request duration by the
//! worker count of its traversal.

use crate::analysis::statistics::summarize;
use crate::error::StatsError;
use crate::models::{ResultsFile, SampleField, SparseGroups, WorkerSummary};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Grouping table from worker count to latency samples in seconds.
#[derive(Debug, Clone)]
pub struct Aggregator {
    fields: Vec<SampleField>,
    groups: BTreeMap<usize, Vec<f64>>,
}

impl Aggregator {
    /// Create an empty aggregator reading the given duration lists.
    pub fn new(fields: Vec<SampleField>) -> Self {
        Self {
            fields,
            groups: BTreeMap::new(),
        }
    }

    /// Read one result file and add its samples.
    pub fn add_file(&mut self, path: &Path) -> Result<usize, StatsError> {
        let content = fs::read_to_string(path).map_err(|e| StatsError::data(path, e))?;
        let results: ResultsFile =
            serde_json::from_str(&content).map_err(|e| StatsError::data(path, e))?;

        let added = self.add_results(&results);
        debug!(
            "Loaded {} ({} traversals, {} samples)",
            path.display(),
            results.traversals.len(),
            added
        );
        Ok(added)
    }

    /// Add every selected duration of every traversal. Returns the number of samples added.
    pub fn add_results(&mut self, results: &ResultsFile) -> usize {
        let mut added = 0;

        for trav in &results.traversals {
            for &field in &self.fields {
                let times = trav.times(field);
                if times.is_empty() {
                    continue;
                }
                self.groups
                    .entry(trav.workers)
                    .or_default()
                    .extend(times.iter().map(|t| t.as_secs_f64()));
                added += times.len();
            }
        }

        added
    }

    /// Grouping table in ascending worker order.
    pub fn groups(&self) -> &BTreeMap<usize, Vec<f64>> {
        &self.groups
    }

    /// Total number of samples across all groups.
    pub fn total_samples(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Summarize every group in ascending worker order.
    ///
    /// Groups with fewer than two samples either abort the whole report or are
    /// dropped with a warning, depending on `policy`.
    pub fn summaries(&self, policy: SparseGroups) -> Result<Vec<WorkerSummary>, StatsError> {
        let mut out = Vec::with_capacity(self.groups.len());

        for (&workers, samples) in &self.groups {
            match summarize(workers, samples) {
                Ok(summary) => out.push(summary),
                Err(e @ StatsError::Statistics { .. }) if policy == SparseGroups::Skip => {
                    warn!("Skipping group: {}", e);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(out)
    }
}

/// Load every file in order, stopping at the first failure.
pub fn aggregate_files(
    paths: &[impl AsRef<Path>],
    fields: &[SampleField],
) -> Result<Aggregator, StatsError> {
    let mut agg = Aggregator::new(fields.to_vec());
    for path in paths {
        agg.add_file(path.as_ref())?;
    }
    Ok(agg)
}
