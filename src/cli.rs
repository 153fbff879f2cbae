//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use crate::models::{SampleField, SparseGroups};
use clap::Parser;
use std::path::PathBuf;

/// request-stats - per-worker request latency statistics
///
/// Reads traversal result files and prints count, min, quartiles, max,
/// mean and standard deviation of request durations for each worker count.
///
/// Examples:
///   request-stats run-1.json run-2.json
///   request-stats results/
///   request-stats --fields request-times,directory-request-times results/
///   request-stats --sparse-groups skip results/*.json
///   request-stats --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Result files (or directories of result files) to aggregate
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .request-stats.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// What to do with worker counts that have fewer than two samples
    #[arg(long, value_name = "POLICY")]
    pub sparse_groups: Option<SparseGroups>,

    /// Duration lists to include (comma-separated)
    ///
    /// Default: file-request-times,request-times
    #[arg(long, value_name = "FIELDS", value_delimiter = ',')]
    pub fields: Option<Vec<SampleField>>,

    /// Generate a default .request-stats.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if let Some(ref fields) = self.fields {
            if fields.is_empty() {
                return Err("--fields needs at least one field".to_string());
            }
        }

        if self.init_config && !self.paths.is_empty() {
            return Err("--init-config does not take input paths".to_string());
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_args() -> Args {
        Args {
            paths: vec![PathBuf::from("results.json")],
            config: None,
            verbose: false,
            quiet: false,
            sparse_groups: None,
            fields: None,
            init_config: false,
        }
    }

    #[test]
    fn test_parse_paths_and_flags() {
        let args = Args::try_parse_from([
            "request-stats",
            "--sparse-groups",
            "skip",
            "--fields",
            "request-times,directory-request-times",
            "a.json",
            "b.json",
        ])
        .unwrap();
        assert_eq!(args.paths, vec![PathBuf::from("a.json"), PathBuf::from("b.json")]);
        assert_eq!(args.sparse_groups, Some(SparseGroups::Skip));
        assert_eq!(
            args.fields,
            Some(vec![SampleField::RequestTimes, SampleField::DirectoryRequestTimes])
        );
    }

    #[test]
    fn test_no_paths_is_valid() {
        let args = Args::try_parse_from(["request-stats"]).unwrap();
        assert!(args.paths.is_empty());
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(Args::try_parse_from(["request-stats", "--fields", "bogus"]).is_err());
    }

    #[test]
    fn test_validation_conflicting_options() {
        let mut args = make_args();
        args.verbose = true;
        args.quiet = true;
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_init_config_with_paths() {
        let mut args = make_args();
        args.init_config = true;
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let mut args = make_args();
        assert_eq!(args.log_level(), tracing::Level::WARN);

        args.verbose = true;
        assert_eq!(args.log_level(), tracing::Level::DEBUG);

        args.verbose = false;
        args.quiet = true;
        assert_eq!(args.log_level(), tracing::Level::ERROR);
    }
}
