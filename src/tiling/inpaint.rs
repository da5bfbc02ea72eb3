//! Crop/paste geometry and masks for directional edge-extension inpainting
//!
//! The direction names the side toward which the image is extended. The
//! source strip on that side, `original + transition` pixels deep, is moved
//! flush against the opposite (near) edge of a same-sized canvas. Positions
//! are measured from that near edge:
//!
//! ```text
//! near edge |  original  | transition |   blank   | far edge
//! mask      |     0      |    255     |    255    |            (binary)
//! mask      |     0      |  0 -> 255  |    255    |            (gradient)
//! ```

use crate::io::configuration::{
    DEFAULT_ORIGINAL_FRACTION, DEFAULT_TRANSITION_FRACTION, FRACTION_EPSILON,
};
use crate::io::error::{AssetError, Result};
use crate::math::ramp::{clamped_ramp, to_intensity};
use crate::tiling::direction::Direction;
use crate::tiling::mask::Mask;
use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};

/// How the inpaint band is expressed in the mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaskVariant {
    /// 0 keeps, 255 inpaints
    #[default]
    Binary,
    /// Linear ramp across the transition band, also darkening the composite
    Gradient,
}

/// Split of one axis into preserved, blended and blank parts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRegion {
    direction: Direction,
    original_fraction: f64,
    transition_fraction: f64,
}

impl EdgeRegion {
    /// Validate and build a region
    ///
    /// # Errors
    ///
    /// Returns `InvalidDirection` for corner directions and
    /// `InvalidFraction` if either fraction is outside `[0, 1]` or their
    /// sum exceeds 1
    pub fn new(direction: Direction, original_fraction: f64, transition_fraction: f64) -> Result<Self> {
        let direction = direction.require_edge()?;

        let invalid = |reason: &str| AssetError::InvalidFraction {
            original: original_fraction,
            transition: transition_fraction,
            reason: reason.to_string(),
        };

        for fraction in [original_fraction, transition_fraction] {
            if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
                return Err(invalid("each fraction must lie in [0, 1]"));
            }
        }
        if original_fraction + transition_fraction > 1.0 + FRACTION_EPSILON {
            return Err(invalid("fractions must sum to at most 1.0"));
        }

        Ok(Self {
            direction,
            original_fraction,
            transition_fraction,
        })
    }

    /// Edge the image is extended toward
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Share of the axis preserved verbatim
    pub const fn original_fraction(&self) -> f64 {
        self.original_fraction
    }

    /// Share of the axis used as the blend band
    pub const fn transition_fraction(&self) -> f64 {
        self.transition_fraction
    }

    /// (original, transition) pixel counts along an axis of `length` pixels
    pub fn pixel_counts(&self, length: u32) -> (u32, u32) {
        let length_f = f64::from(length);
        let original = (length_f * self.original_fraction).floor() as u32;
        let transition = (length_f * self.transition_fraction).floor() as u32;
        let original = original.min(length);
        (original, transition.min(length - original))
    }
}

/// Edge-extension request with its mask style and background fill
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeExtension {
    /// Axis split and direction
    pub region: EdgeRegion,
    /// Mask style
    pub variant: MaskVariant,
    /// Fill color for the blank region
    pub background: Rgb<u8>,
}

impl EdgeExtension {
    /// Binary-mask extension with a black background
    pub const fn new(region: EdgeRegion) -> Self {
        Self {
            region,
            variant: MaskVariant::Binary,
            background: Rgb([0, 0, 0]),
        }
    }

    /// Extension toward `direction` with the default 0.3/0.3 split
    ///
    /// # Errors
    ///
    /// Returns `InvalidDirection` for corner directions
    pub fn toward(direction: Direction) -> Result<Self> {
        Ok(Self::new(EdgeRegion::new(
            direction,
            DEFAULT_ORIGINAL_FRACTION,
            DEFAULT_TRANSITION_FRACTION,
        )?))
    }

    /// Use a different mask style
    #[must_use]
    pub const fn with_variant(mut self, variant: MaskVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Use a different background fill
    #[must_use]
    pub const fn with_background(mut self, background: Rgb<u8>) -> Self {
        self.background = background;
        self
    }

    /// Build the composite image and its inpaint mask
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for an empty image
    pub fn build(&self, image: &DynamicImage) -> Result<(RgbImage, Mask)> {
        let source = image.to_rgb8();
        let (width, height) = source.dimensions();
        if width == 0 || height == 0 {
            return Err(crate::io::error::invalid_parameter(
                "image",
                &format!("{width}x{height}"),
                &"image must have non-zero dimensions",
            ));
        }

        let direction = self.region.direction;
        let length = if direction.is_horizontal() { width } else { height };
        let (original, transition) = self.region.pixel_counts(length);
        let kept = original + transition;
        let shift = length - kept;

        let mut composite = RgbImage::from_pixel(width, height, self.background);
        let mut mask = GrayImage::new(width, height);

        for y in 0..height {
            for x in 0..width {
                // Distance from the near edge and the source pixel shown there
                let (position, source_xy) = match direction {
                    Direction::Left => (width - 1 - x, (x.checked_sub(shift), Some(y))),
                    Direction::Top => (height - 1 - y, (Some(x), y.checked_sub(shift))),
                    Direction::Bottom => (y, (Some(x), y.checked_add(shift))),
                    _ => (x, (x.checked_add(shift), Some(y))),
                };

                let weight = match self.variant {
                    MaskVariant::Binary => {
                        if position < original {
                            0.0
                        } else {
                            1.0
                        }
                    }
                    MaskVariant::Gradient => clamped_ramp(
                        f64::from(position),
                        f64::from(original),
                        f64::from(transition),
                    ),
                };
                mask.put_pixel(x, y, Luma([to_intensity(weight)]));

                if position >= kept {
                    continue;
                }
                if let (Some(sx), Some(sy)) = source_xy {
                    if let Some(pixel) = source.get_pixel_checked(sx, sy) {
                        let shown = match self.variant {
                            MaskVariant::Binary => *pixel,
                            MaskVariant::Gradient => darken(*pixel, weight),
                        };
                        composite.put_pixel(x, y, shown);
                    }
                }
            }
        }

        Ok((composite, Mask::from_gray(mask)))
    }
}

fn darken(pixel: Rgb<u8>, weight: f64) -> Rgb<u8> {
    let keep = 1.0 - weight;
    Rgb(pixel.0.map(|channel| (f64::from(channel) * keep).round().clamp(0.0, 255.0) as u8))
}

/// Binary-mask edge extension with a black background
///
/// # Errors
///
/// Returns `InvalidDirection` for corner directions, `InvalidFraction` for
/// out-of-range fractions and `InvalidParameter` for an empty image
pub fn build_edge_extension(
    image: &DynamicImage,
    direction: Direction,
    original_fraction: f64,
    transition_fraction: f64,
) -> Result<(RgbImage, Mask)> {
    let region = EdgeRegion::new(direction, original_fraction, transition_fraction)?;
    EdgeExtension::new(region).build(image)
}
