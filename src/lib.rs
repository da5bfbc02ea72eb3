//! Procedural tileset post-processing for generated game art
//!
//! The crate turns a single square texture into a seamless tileset by fading
//! copies of it along each edge and corner, converts images and animation
//! frames into palette-reduced pixel art, and prepares composite/mask pairs
//! for edge-extension inpainting.

#![forbid(unsafe_code)]

/// Prompt expansion and generator-driven batch runs
pub mod generation;
/// Input/output operations and error handling
pub mod io;
/// Mathematical utilities for ramps and tapering
pub mod math;
/// Retro pixel-art conversion
pub mod retro;
/// Gradient masks, compositing and tileset assembly
pub mod tiling;

pub use io::error::{AssetError, Result};
