//! Descriptive statistics over a group of latency samples.

use crate::error::StatsError;
use crate::models::WorkerSummary;
use statrs::statistics::{Data, Distribution, Max, Median, Min};

/// Compute the summary for one worker count.
///
/// Fails with [`StatsError::Statistics`] when fewer than two samples are
/// available, since the sample standard deviation is undefined there.
pub fn summarize(workers: usize, samples: &[f64]) -> Result<WorkerSummary, StatsError> {
    let count = samples.len();
    if count < 2 {
        return Err(StatsError::Statistics {
            workers,
            samples: count,
        });
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    let (q1, q3) = quartiles(&sorted);

    let data = Data::new(sorted);
    let mean = data.mean().unwrap_or(f64::NAN);
    let stddev = data.std_dev().unwrap_or(f64::NAN);

    Ok(WorkerSummary {
        workers,
        count,
        min: data.min(),
        q1,
        median: data.median(),
        q3,
        max: data.max(),
        mean,
        stddev,
    })
}

/// First and third quartile of a sorted slice (n >= 2).
///
/// Quartiles use the exclusive method: positions are `i * (n + 1) / 4` with
/// linear interpolation between neighbours. For two samples that method
/// extrapolates past the data, so results are clamped to `[min, max]`.
pub fn quartiles(sorted: &[f64]) -> (f64, f64) {
    let n = sorted.len();
    let m = n + 1;
    let lo = sorted[0];
    let hi = sorted[n - 1];

    let cut = |i: usize| -> f64 {
        let j = (i * m / 4).clamp(1, n - 1);
        let delta = (i * m) as f64 - (4 * j) as f64;
        let q = (sorted[j - 1] * (4.0 - delta) + sorted[j] * delta) / 4.0;
        q.clamp(lo, hi)
    };

    (cut(1), cut(3))
}
