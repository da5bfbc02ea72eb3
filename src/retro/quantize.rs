//! Palette reduction by k-means clustering of an image's colors
//!
//! Clustering runs in sRGB space over every pixel through `kmeans_colors`,
//! seeded so the same image always yields the same palette.

use crate::io::configuration::{
    KMEANS_MAX_ITERATIONS, KMEANS_TOLERANCE, MAX_PALETTE_COLORS, QUANTIZE_SEED,
};
use crate::io::error::{Result, invalid_parameter};
use image::{Rgb, RgbImage};
use kmeans_colors::get_kmeans;
use palette::Srgb;
use std::collections::{BTreeSet, HashMap};

/// Ordered set of representative colors
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    colors: Vec<Rgb<u8>>,
}

impl Palette {
    /// Colors in cluster order
    pub fn colors(&self) -> &[Rgb<u8>] {
        &self.colors
    }

    /// Number of colors
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True if the palette holds no colors
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Palette entry closest to `color` in RGB space
    pub fn nearest(&self, color: Rgb<u8>) -> Option<Rgb<u8>> {
        let distance = |candidate: &Rgb<u8>| -> u32 {
            candidate
                .0
                .iter()
                .zip(color.0.iter())
                .map(|(a, b)| u32::from(a.abs_diff(*b)).pow(2))
                .sum()
        };
        self.colors.iter().min_by_key(|c| distance(c)).copied()
    }

    fn push_unique(&mut self, color: Rgb<u8>) {
        if !self.colors.contains(&color) {
            self.colors.push(color);
        }
    }
}

/// Deterministic k-means color quantizer
#[derive(Debug, Clone, Copy)]
pub struct ColorQuantizer {
    /// Seed for cluster initialization
    pub seed: u64,
    /// Iteration budget per clustering pass
    pub max_iterations: usize,
    /// Convergence threshold on total squared center shift, channels in `0..=1`
    pub tolerance: f32,
}

impl Default for ColorQuantizer {
    fn default() -> Self {
        Self {
            seed: QUANTIZE_SEED,
            max_iterations: KMEANS_MAX_ITERATIONS,
            tolerance: KMEANS_TOLERANCE,
        }
    }
}

impl ColorQuantizer {
    /// Quantizer with default budget and the given seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Derive a palette of at most `num_colors` colors and the color remapping
    ///
    /// If the image has no more than `num_colors` distinct colors the palette
    /// is exactly those colors and every color maps to itself.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `num_colors` is zero or above 256
    pub fn palette(
        &self,
        image: &RgbImage,
        num_colors: usize,
    ) -> Result<(Palette, HashMap<[u8; 3], Rgb<u8>>)> {
        if num_colors == 0 || num_colors > MAX_PALETTE_COLORS {
            return Err(invalid_parameter(
                "num_colors",
                &num_colors,
                &format!("must be between 1 and {MAX_PALETTE_COLORS}"),
            ));
        }

        let distinct: BTreeSet<[u8; 3]> = image.pixels().map(|pixel| pixel.0).collect();
        let mut palette = Palette::default();
        let mut mapping = HashMap::with_capacity(distinct.len());

        if distinct.len() <= num_colors {
            for &color in &distinct {
                palette.push_unique(Rgb(color));
                mapping.insert(color, Rgb(color));
            }
            return Ok((palette, mapping));
        }

        let samples: Vec<Srgb> = image
            .pixels()
            .map(|pixel| {
                let [red, green, blue] = pixel.0;
                Srgb::new(red, green, blue).into_format()
            })
            .collect();
        let result = get_kmeans(
            num_colors,
            self.max_iterations,
            self.tolerance,
            false,
            &samples,
            self.seed,
        );

        let centers: Vec<Rgb<u8>> = result
            .centroids
            .iter()
            .map(|centroid| {
                let rgb: Srgb<u8> = centroid.into_format();
                Rgb([rgb.red, rgb.green, rgb.blue])
            })
            .collect();

        for &center in &centers {
            palette.push_unique(center);
        }
        // Equal colors always land in the same cluster, so the first label seen is the label
        for (pixel, &label) in image.pixels().zip(&result.indices) {
            if let Some(&center) = centers.get(usize::from(label)) {
                mapping.entry(pixel.0).or_insert(center);
            }
        }

        log::debug!(
            "Quantized {} distinct colors to {} (score {:.2e})",
            distinct.len(),
            palette.len(),
            result.score
        );

        Ok((palette, mapping))
    }

    fn reduce(&self, image: &RgbImage, num_colors: usize) -> Result<RgbImage> {
        let (_, mapping) = self.palette(image, num_colors)?;
        let mut out = image.clone();
        for pixel in out.pixels_mut() {
            if let Some(&center) = mapping.get(&pixel.0) {
                *pixel = center;
            }
        }
        Ok(out)
    }

    /// Replace every pixel with its cluster's center color
    ///
    /// When `second_pass_colors` is smaller than `num_colors` the already
    /// quantized image is clustered again down to that many colors. A second
    /// pass that is not smaller is ignored.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either color count is zero or above 256
    pub fn quantize(
        &self,
        image: &RgbImage,
        num_colors: usize,
        second_pass_colors: Option<usize>,
    ) -> Result<RgbImage> {
        let reduced = self.reduce(image, num_colors)?;
        match second_pass_colors {
            Some(colors) if colors < num_colors => self.reduce(&reduced, colors),
            _ => Ok(reduced),
        }
    }
}

/// Quantize with the default seed and iteration budget
///
/// # Errors
///
/// Returns `InvalidParameter` if either color count is zero or above 256
pub fn quantize(
    image: &RgbImage,
    num_colors: usize,
    second_pass_colors: Option<usize>,
) -> Result<RgbImage> {
    ColorQuantizer::default().quantize(image, num_colors, second_pass_colors)
}

/// Number of distinct colors in an image
pub fn distinct_colors(image: &RgbImage) -> usize {
    image
        .pixels()
        .map(|pixel| pixel.0)
        .collect::<std::collections::HashSet<_>>()
        .len()
}
