//! Input/output, configuration and error handling
//!
//! This module contains the outer surfaces of the crate:
//! - Command-line parsing and dispatch
//! - Image loading and lossless export
//! - Batch progress display and outcome reports

/// Command-line interface and subcommand dispatch
pub mod cli;
/// Processing constants and defaults
pub mod configuration;
/// Error types and helpers
pub mod error;
/// Image loading and PNG/WEBP export
pub mod image;
/// Progress bars for batch runs
pub mod progress;
/// Written outputs and skipped items of a batch
pub mod report;
