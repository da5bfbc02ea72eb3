//! Saturation and contrast adjustment by blending against a degenerate image

use image::{Rgb, RgbImage};

// ITU-R 601-2 luma, as used for RGB to grayscale conversion
fn luma(pixel: Rgb<u8>) -> f64 {
    let [r, g, b] = pixel.0;
    (f64::from(r) * 299.0 + f64::from(g) * 587.0 + f64::from(b) * 114.0) / 1000.0
}

fn blend_channel(degenerate: f64, value: u8, factor: f32) -> u8 {
    let out = f64::from(factor).mul_add(f64::from(value) - degenerate, degenerate);
    out.round().clamp(0.0, 255.0) as u8
}

/// Scale color saturation by `factor`
///
/// 0.0 yields grayscale, 1.0 the original image, larger values push colors
/// away from their gray level.
pub fn adjust_saturation(image: &RgbImage, factor: f32) -> RgbImage {
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        let gray = luma(*pixel).trunc();
        pixel.0 = pixel.0.map(|channel| blend_channel(gray, channel, factor));
    }
    out
}

/// Scale contrast around the image's mean gray level by `factor`
///
/// 0.0 yields a flat gray image, 1.0 the original image.
pub fn adjust_contrast(image: &RgbImage, factor: f32) -> RgbImage {
    let count = u64::from(image.width()) * u64::from(image.height());
    if count == 0 {
        return image.clone();
    }

    let total: f64 = image.pixels().map(|pixel| luma(*pixel).trunc()).sum();
    let mean = (total / count as f64).round();

    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        pixel.0 = pixel.0.map(|channel| blend_channel(mean, channel, factor));
    }
    out
}
