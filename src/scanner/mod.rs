//! Input path expansion.
//!
//! Command-line paths may name result files directly or directories holding
//! them. Directories are expanded into their result files in a stable order.

use crate::error::StatsError;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Configuration for directory expansion.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Extension of result files inside directories (without dot)
    pub extension: String,
    /// Descend into sub-directories
    pub recursive: bool,
}

impl From<&crate::config::InputConfig> for ScanConfig {
    fn from(config: &crate::config::InputConfig) -> Self {
        Self {
            extension: config.extension.clone(),
            recursive: config.recursive,
        }
    }
}

/// Expand command-line paths into the list of files to read.
///
/// Argument order is kept. Anything that is not a directory is passed through
/// untouched so that a missing file surfaces as a data error when it is read.
pub fn expand_inputs(paths: &[PathBuf], config: &ScanConfig) -> Result<Vec<PathBuf>, StatsError> {
    let mut files = Vec::with_capacity(paths.len());

    for path in paths {
        if path.is_dir() {
            let found = scan_dir(path, config)?;
            debug!("Expanded {} into {} files", path.display(), found.len());
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }

    Ok(files)
}

/// Walk a directory for result files, sorted by name.
fn scan_dir(dir: &Path, config: &ScanConfig) -> Result<Vec<PathBuf>, StatsError> {
    let mut walker = WalkDir::new(dir).sort_by_file_name();
    if !config.recursive {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| StatsError::data(dir, e))?;
        if entry.file_type().is_file() && has_extension(entry.path(), &config.extension) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(ext))
        .unwrap_or(false)
}
