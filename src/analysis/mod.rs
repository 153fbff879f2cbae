//! Analysis modules.
//!
//! Aggregation of result files into per-worker sample groups and the
//! statistics computed over each group.

pub mod aggregator;
pub mod statistics;

pub use aggregator::*;
