//! Tests for the retro pixel-art pipeline

#[cfg(test)]
mod tests {
    use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};
    use tilecraft::AssetError;
    use tilecraft::retro::pixelate::{PixelateOptions, RetroProcessor, pixelate};
    use tilecraft::retro::quantize::distinct_colors;

    fn photo(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([
                ((x * 255) / width) as u8,
                ((y * 255) / height) as u8,
                (((x + y) * 97) % 256) as u8,
            ])
        }))
    }

    // Tests the output keeps the input dimensions
    // Verified by returning the low-resolution image
    #[test]
    fn test_preserves_dimensions() {
        let image = photo(96, 80);
        let result = pixelate(&image, (16, 16), 8, None).unwrap();
        assert_eq!(result.dimensions(), (96, 80));
    }

    // Tests the palette bound holds after upsampling
    // Verified by using a smoothing filter on upsample
    #[test]
    fn test_palette_bound() {
        let result = pixelate(&photo(64, 64), (16, 16), 6, None).unwrap();
        assert!(distinct_colors(&result) <= 6);

        let second = pixelate(&photo(64, 64), (16, 16), 8, Some(3)).unwrap();
        assert!(distinct_colors(&second) <= 3);
    }

    // Tests upsampled pixels form uniform blocks
    // Verified by resizing with bilinear filtering
    #[test]
    fn test_blocky_output() {
        let result = pixelate(&photo(64, 64), (8, 8), 16, None).unwrap();

        for block_y in 0..8 {
            for block_x in 0..8 {
                let corner = *result.get_pixel(block_x * 8, block_y * 8);
                for dy in 0..8 {
                    for dx in 0..8 {
                        assert_eq!(*result.get_pixel(block_x * 8 + dx, block_y * 8 + dy), corner);
                    }
                }
            }
        }
    }

    // Tests alpha input is flattened to RGB
    // Verified by keeping the alpha channel
    #[test]
    fn test_rgba_input() {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(10, 10, Rgba([50, 60, 70, 0])));
        let result = RetroProcessor::default().pixelate(&image).unwrap();
        assert_eq!(result.dimensions(), (10, 10));
    }

    // Tests options deserialize with defaults for missing fields
    // Verified by requiring every field
    #[test]
    fn test_options_from_toml() {
        let options: PixelateOptions = toml::from_str("num_colors = 8\ntarget_size = [32, 24]").unwrap();

        assert_eq!(options.num_colors, 8);
        assert_eq!(options.target_size, (32, 24));
        assert_eq!(options.palette_size, None);
        assert!((options.saturation - 1.25).abs() < f32::EPSILON);
    }

    // Tests with_target_size only changes the size
    // Verified by resetting other options
    #[test]
    fn test_with_target_size() {
        let processor = RetroProcessor::new(PixelateOptions {
            num_colors: 4,
            ..PixelateOptions::default()
        })
        .with_target_size((5, 7));

        assert_eq!(processor.options.target_size, (5, 7));
        assert_eq!(processor.options.num_colors, 4);
    }

    // Tests invalid sizes are rejected
    // Verified by resizing to zero
    #[test]
    fn test_invalid_sizes() {
        assert!(matches!(
            pixelate(&photo(8, 8), (0, 8), 4, None),
            Err(AssetError::InvalidParameter { .. })
        ));
        assert!(pixelate(&DynamicImage::new_rgb8(0, 0), (8, 8), 4, None).is_err());
    }
}
