//! Outcome tracking for batch operations that skip failing items

use crate::io::error::AssetError;
use std::path::{Path, PathBuf};

/// An item that could not be processed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFailure {
    /// Input file or job name
    pub item: String,
    /// Rendered error message
    pub reason: String,
}

/// Written outputs and skipped items of one batch run
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    written: Vec<PathBuf>,
    failures: Vec<BatchFailure>,
}

impl BatchReport {
    /// Empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successfully written output
    pub fn record_output(&mut self, path: &Path) {
        log::info!("Processed: {}", path.display());
        self.written.push(path.to_path_buf());
    }

    /// Record a skipped item and log why
    pub fn record_failure(&mut self, item: impl Into<String>, error: &AssetError) {
        let item = item.into();
        log::warn!("Error processing {item}: {error}");
        self.failures.push(BatchFailure {
            item,
            reason: error.to_string(),
        });
    }

    /// Outputs written so far, in processing order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Items that were skipped
    pub fn failures(&self) -> &[BatchFailure] {
        &self.failures
    }

    /// True if no item failed
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Total items attempted
    pub fn attempted(&self) -> usize {
        self.written.len() + self.failures.len()
    }
}
