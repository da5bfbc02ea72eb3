//! Retro pixel-art conversion: boost, downsample, quantize, upsample

use crate::io::configuration::{
    CONTRAST_BOOST, DEFAULT_NUM_COLORS, DEFAULT_PIXEL_SIZE, SATURATION_BOOST,
};
use crate::io::error::{Result, invalid_parameter};
use crate::retro::enhance::{adjust_contrast, adjust_saturation};
use crate::retro::quantize::ColorQuantizer;
use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};
use serde::Deserialize;

/// Parameters for one pixel-art conversion
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PixelateOptions {
    /// Size of the intermediate low-resolution image (width, height)
    pub target_size: (u32, u32),
    /// Colors kept by the first quantization pass
    pub num_colors: usize,
    /// Optional smaller palette for a second pass
    pub palette_size: Option<usize>,
    /// Saturation multiplier
    pub saturation: f32,
    /// Contrast multiplier
    pub contrast: f32,
}

impl Default for PixelateOptions {
    fn default() -> Self {
        Self {
            target_size: (DEFAULT_PIXEL_SIZE, DEFAULT_PIXEL_SIZE),
            num_colors: DEFAULT_NUM_COLORS,
            palette_size: None,
            saturation: SATURATION_BOOST,
            contrast: CONTRAST_BOOST,
        }
    }
}

/// Converts images into blocky, palette-reduced pixel art
#[derive(Debug, Clone, Copy, Default)]
pub struct RetroProcessor {
    /// Conversion parameters
    pub options: PixelateOptions,
    /// Palette reduction settings
    pub quantizer: ColorQuantizer,
}

impl RetroProcessor {
    /// Processor with the given options and the default quantizer
    pub fn new(options: PixelateOptions) -> Self {
        Self {
            options,
            quantizer: ColorQuantizer::default(),
        }
    }

    /// Same processor with a different intermediate size
    #[must_use]
    pub const fn with_target_size(mut self, target_size: (u32, u32)) -> Self {
        self.options.target_size = target_size;
        self
    }

    /// Convert one image; the output keeps the input's dimensions
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for an empty image, a zero target size or
    /// a zero color count
    pub fn pixelate(&self, image: &DynamicImage) -> Result<RgbImage> {
        let (width, height) = (image.width(), image.height());
        if width == 0 || height == 0 {
            return Err(invalid_parameter(
                "image",
                &format!("{width}x{height}"),
                &"image must have non-zero dimensions",
            ));
        }
        let (target_width, target_height) = self.options.target_size;
        if target_width == 0 || target_height == 0 {
            return Err(invalid_parameter(
                "target_size",
                &format!("{target_width}x{target_height}"),
                &"target size must be non-zero",
            ));
        }

        let rgb = image.to_rgb8();
        let boosted = adjust_contrast(
            &adjust_saturation(&rgb, self.options.saturation),
            self.options.contrast,
        );

        let small = imageops::resize(&boosted, target_width, target_height, FilterType::Nearest);
        let reduced = self.quantizer.quantize(
            &small,
            self.options.num_colors,
            self.options.palette_size,
        )?;

        Ok(imageops::resize(&reduced, width, height, FilterType::Nearest))
    }
}

/// Pixelate with default boosts and quantizer
///
/// # Errors
///
/// Returns `InvalidParameter` for an empty image, a zero target size or a
/// zero color count
pub fn pixelate(
    image: &DynamicImage,
    target_size: (u32, u32),
    num_colors: usize,
    palette_size: Option<usize>,
) -> Result<RgbImage> {
    RetroProcessor::new(PixelateOptions {
        target_size,
        num_colors,
        palette_size,
        ..PixelateOptions::default()
    })
    .pixelate(image)
}
