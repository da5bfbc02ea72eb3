//! Alpha replacement, region pasting and straight-alpha compositing

use crate::io::error::{AssetError, Result};
use crate::tiling::mask::Mask;
use image::{DynamicImage, RgbaImage, imageops};

/// Copy an image's color channels and replace its alpha with `mask`
///
/// # Errors
///
/// Returns `DimensionMismatch` if the mask and image sizes differ
pub fn apply_mask(image: &DynamicImage, mask: &Mask) -> Result<RgbaImage> {
    let expected = (image.width(), image.height());
    if mask.dimensions() != expected {
        return Err(AssetError::DimensionMismatch {
            expected,
            actual: mask.dimensions(),
        });
    }

    let mut rgba = image.to_rgba8();
    for (pixel, alpha) in rgba.pixels_mut().zip(mask.as_gray().pixels()) {
        pixel.0[3] = alpha.0[0];
    }
    Ok(rgba)
}

/// Replace a canvas region with `tile`, all four channels included
///
/// Parts of the tile falling outside the canvas are dropped.
pub fn paste(canvas: &mut RgbaImage, tile: &RgbaImage, offset: (u32, u32)) {
    imageops::replace(canvas, tile, i64::from(offset.0), i64::from(offset.1));
}

/// Blend `tile` onto `canvas` at `offset` using the tile's own alpha
///
/// Straight-alpha "over" through [`imageops::overlay`]. Fully transparent tile
/// pixels leave the canvas untouched and fully opaque ones replace it. Parts
/// of the tile outside the canvas are dropped.
pub fn composite_onto(canvas: &mut RgbaImage, tile: &RgbaImage, offset: (u32, u32)) {
    imageops::overlay(canvas, tile, i64::from(offset.0), i64::from(offset.1));
}
