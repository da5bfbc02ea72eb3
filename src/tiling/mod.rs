//! Edge blending and tileset assembly
//!
//! This module contains:
//! - Directions and gradient opacity masks
//! - Masking, pasting and alpha compositing of tiles
//! - Tileset assembly in full and centered layouts
//! - Crop and mask preparation for edge-extension inpainting

/// Alpha replacement and tile compositing
pub mod compositor;
/// Edge and corner directions
pub mod direction;
/// Composite and mask construction for edge extension
pub mod inpaint;
/// Gradient opacity masks
pub mod mask;
/// Tileset layouts and assembly
pub mod tileset;

pub use direction::Direction;
pub use mask::Mask;
