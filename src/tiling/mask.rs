//! Gradient opacity masks for edge and corner tiles
//!
//! Edge masks are a linear ramp across one axis, broadcast over the other,
//! oriented so the value is 0 on the direction's own side and 1 on the
//! opposite side, then raised to the taper rate. Corner masks are the
//! element-wise product of the two tapered edge fields sharing the corner.

use crate::io::error::{Result, invalid_parameter};
use crate::math::ramp::{linspace, taper, to_intensity};
use crate::tiling::direction::Direction;
use image::{GrayImage, Luma};
use ndarray::Array2;

/// Single-channel opacity raster, one byte per pixel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    buffer: GrayImage,
}

impl Mask {
    /// Wrap an existing grayscale buffer
    pub const fn from_gray(buffer: GrayImage) -> Self {
        Self { buffer }
    }

    /// Mask of the given size with every value set to `value`
    pub fn filled(width: u32, height: u32, value: u8) -> Self {
        Self {
            buffer: GrayImage::from_pixel(width, height, Luma([value])),
        }
    }

    /// Quantize a `(height, width)` field of unit-range values to 8 bits
    pub fn from_field(field: &Array2<f64>) -> Self {
        let (rows, cols) = field.dim();
        let buffer = GrayImage::from_fn(cols as u32, rows as u32, |x, y| {
            let value = field.get((y as usize, x as usize)).copied().unwrap_or(0.0);
            Luma([to_intensity(value)])
        });
        Self { buffer }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        self.buffer.dimensions()
    }

    /// Value at a pixel, `None` outside the mask
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        self.buffer.get_pixel_checked(x, y).map(|p| p.0[0])
    }

    /// Smallest value, `None` for an empty mask
    pub fn min_value(&self) -> Option<u8> {
        self.buffer.as_raw().iter().copied().min()
    }

    /// Largest value, `None` for an empty mask
    pub fn max_value(&self) -> Option<u8> {
        self.buffer.as_raw().iter().copied().max()
    }

    /// True if every pixel holds the same value
    pub fn is_constant(&self) -> bool {
        let raw = self.buffer.as_raw();
        raw.first()
            .is_none_or(|first| raw.iter().all(|value| value == first))
    }

    /// Borrow the underlying grayscale buffer
    pub const fn as_gray(&self) -> &GrayImage {
        &self.buffer
    }

    /// Take the underlying grayscale buffer
    pub fn into_gray(self) -> GrayImage {
        self.buffer
    }
}

/// Unit-range field for a direction before quantization
///
/// Rows index y and columns index x.
///
/// # Errors
///
/// Returns `InvalidParameter` if the size is zero or the taper rate is
/// negative or not finite
pub fn gradient_field(size: (u32, u32), direction: Direction, taper_rate: f64) -> Result<Array2<f64>> {
    let (width, height) = size;
    if width == 0 || height == 0 {
        return Err(invalid_parameter(
            "size",
            &format!("{width}x{height}"),
            &"mask dimensions must be non-zero",
        ));
    }
    if !taper_rate.is_finite() || taper_rate < 0.0 {
        return Err(invalid_parameter(
            "taper_rate",
            &taper_rate,
            &"must be a finite, non-negative exponent",
        ));
    }

    let xs = linspace(0.0, 1.0, width as usize);
    let ys = linspace(0.0, 1.0, height as usize);

    // Corners multiply their two tapered edge ramps
    let field = Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
        let along_x = xs.get(x).copied().unwrap_or(0.0);
        let along_y = ys.get(y).copied().unwrap_or(0.0);
        let left = taper(along_x, taper_rate);
        let right = taper(1.0 - along_x, taper_rate);
        let top = taper(along_y, taper_rate);
        let bottom = taper(1.0 - along_y, taper_rate);
        match direction {
            Direction::Left => left,
            Direction::Right => right,
            Direction::Top => top,
            Direction::Bottom => bottom,
            Direction::TopLeft => top * left,
            Direction::TopRight => top * right,
            Direction::BottomLeft => bottom * left,
            Direction::BottomRight => bottom * right,
        }
    });

    Ok(field)
}

/// Build the 8-bit gradient mask for an edge or corner direction
///
/// A taper rate of 1.0 is linear, larger rates keep the tile transparent
/// longer before rising toward the base tile, and 0.0 gives a constant
/// fully opaque mask.
///
/// # Errors
///
/// Returns `InvalidParameter` if the size is zero or the taper rate is
/// negative or not finite
pub fn make_mask(size: (u32, u32), direction: Direction, taper_rate: f64) -> Result<Mask> {
    let field = gradient_field(size, direction, taper_rate)?;
    Ok(Mask::from_field(&field))
}
