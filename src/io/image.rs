//! Image loading and lossless PNG/WEBP export
//!
//! Outputs are encoded fully in memory before the file is created, so a
//! failed encode never leaves a truncated file behind.

use crate::io::error::{AssetError, Result, WithPath, file_system};
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::{DynamicImage, RgbImage, RgbaImage};
use serde::Deserialize;
use std::path::Path;

/// Output encoding for written images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Infer from the output file extension
    #[default]
    Auto,
    /// Lossless PNG with alpha
    Png,
    /// Lossless WEBP with alpha
    Webp,
}

impl OutputFormat {
    /// Resolve `Auto` against the output path extension
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedFormat` if the extension is missing or is neither
    /// `png` nor `webp`
    pub fn resolve(self, path: &Path) -> Result<Self> {
        match self {
            Self::Png | Self::Webp => Ok(self),
            Self::Auto => {
                let extension = path
                    .extension()
                    .and_then(|s| s.to_str())
                    .map(str::to_ascii_lowercase)
                    .unwrap_or_default();
                match extension.as_str() {
                    "png" => Ok(Self::Png),
                    "webp" => Ok(Self::Webp),
                    _ => Err(AssetError::UnsupportedFormat { format: extension }),
                }
            }
        }
    }
}

/// Open and decode any supported image file
///
/// # Errors
///
/// Returns `ImageDecode` if the file cannot be read or decoded
pub fn open_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).with_path(path)
}

/// Open an image and convert it to 8-bit RGBA
///
/// # Errors
///
/// Returns `ImageDecode` if the file cannot be read or decoded
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    Ok(open_image(path)?.to_rgba8())
}

/// Open an image and convert it to 8-bit RGB
///
/// # Errors
///
/// Returns `ImageDecode` if the file cannot be read or decoded
pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    Ok(open_image(path)?.to_rgb8())
}

/// Encode an image into memory using a lossless codec
///
/// 16-bit and float images are narrowed to 8-bit RGBA first.
///
/// # Errors
///
/// Returns `UnsupportedFormat` if `format` cannot be resolved and
/// `ImageExport` if the encoder rejects the image
pub fn encode_image(image: &DynamicImage, format: OutputFormat, path: &Path) -> Result<Vec<u8>> {
    let resolved = format.resolve(path)?;

    let narrowed;
    let source = match image {
        DynamicImage::ImageLuma8(_)
        | DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageRgb8(_)
        | DynamicImage::ImageRgba8(_) => image,
        _ => {
            narrowed = DynamicImage::ImageRgba8(image.to_rgba8());
            &narrowed
        }
    };

    let mut buffer = Vec::new();
    let encoded = match resolved {
        OutputFormat::Webp => source.write_with_encoder(WebPEncoder::new_lossless(&mut buffer)),
        OutputFormat::Png | OutputFormat::Auto => {
            source.write_with_encoder(PngEncoder::new(&mut buffer))
        }
    };
    encoded.map_err(|e| AssetError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(buffer)
}

/// Encode and write an image, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The format cannot be resolved (`UnsupportedFormat`)
/// - Encoding fails (`ImageExport`)
/// - The parent directory or file cannot be written (`FileSystem`)
pub fn save_image(image: &DynamicImage, path: &Path, format: OutputFormat) -> Result<()> {
    let bytes = encode_image(image, format, path)?;
    write_encoded(&bytes, path)
}

/// Write already encoded image bytes, creating parent directories as needed
///
/// # Errors
///
/// Returns `FileSystem` if the parent directory or file cannot be written
pub fn write_encoded(bytes: &[u8], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| file_system(parent, "create directory", e))?;
    }

    std::fs::write(path, bytes).map_err(|e| file_system(path, "write file", e))
}

/// Returns true if the path has one of the accepted input extensions
pub fn has_supported_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            extensions
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
}
