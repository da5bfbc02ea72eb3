//! Retro pixel-art conversion and its batch drivers

/// Directory and animation batch processing
pub mod batch;
/// Saturation and contrast adjustment
pub mod enhance;
/// Boost, downsample, quantize and upsample pipeline
pub mod pixelate;
/// K-means palette reduction
pub mod quantize;

pub use pixelate::{PixelateOptions, RetroProcessor};
