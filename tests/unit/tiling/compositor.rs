//! Tests for mask application, pasting and alpha compositing

#[cfg(test)]
mod tests {
    use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};
    use tilecraft::AssetError;
    use tilecraft::tiling::compositor::{apply_mask, composite_onto, paste};
    use tilecraft::tiling::direction::Direction;
    use tilecraft::tiling::mask::{Mask, make_mask};

    // Tests the mask becomes the alpha channel and colors are kept
    // Verified by multiplying color by the mask
    #[test]
    fn test_apply_mask_replaces_alpha() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 4, Rgb([10, 20, 30])));
        let mask = make_mask((8, 4), Direction::Left, 1.0).unwrap();

        let masked = apply_mask(&image, &mask).unwrap();

        for (x, y, pixel) in masked.enumerate_pixels() {
            assert_eq!(&pixel.0[..3], &[10, 20, 30]);
            assert_eq!(Some(pixel.0[3]), mask.get(x, y));
        }
    }

    // Tests existing alpha is overwritten rather than combined
    // Verified by multiplying old and new alpha
    #[test]
    fn test_apply_mask_overwrites_alpha() {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 10])));
        let masked = apply_mask(&image, &Mask::filled(2, 2, 200)).unwrap();

        assert!(masked.pixels().all(|p| p.0[3] == 200));
    }

    // Tests size mismatch is reported
    // Verified by cropping silently
    #[test]
    fn test_apply_mask_dimension_mismatch() {
        let image = DynamicImage::ImageRgb8(RgbImage::new(8, 8));
        let result = apply_mask(&image, &Mask::filled(4, 8, 255));

        assert!(matches!(
            result,
            Err(AssetError::DimensionMismatch {
                expected: (8, 8),
                actual: (4, 8)
            })
        ));
    }

    // Tests compositing a fully transparent tile changes nothing
    // Verified by replacing pixels regardless of alpha
    #[test]
    fn test_transparent_tile_leaves_canvas() {
        let mut canvas = RgbaImage::from_fn(6, 6, |x, y| Rgba([x as u8, y as u8, 9, 255]));
        let before = canvas.clone();
        let tile = RgbaImage::from_pixel(3, 3, Rgba([255, 0, 0, 0]));

        composite_onto(&mut canvas, &tile, (2, 2));

        assert_eq!(canvas, before);
    }

    // Tests opaque tile pixels replace the canvas
    // Verified by blending at full alpha
    #[test]
    fn test_opaque_tile_replaces() {
        let mut canvas = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 255]));
        let tile = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255]));

        composite_onto(&mut canvas, &tile, (1, 1));

        assert_eq!(*canvas.get_pixel(1, 1), Rgba([255, 0, 0, 255]));
        assert_eq!(*canvas.get_pixel(0, 0), Rgba([0, 0, 255, 255]));
    }

    // Tests half-transparent red over opaque blue
    // Verified by using premultiplied math
    #[test]
    fn test_partial_alpha_blends() {
        let mut canvas = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 200, 255]));
        let tile = RgbaImage::from_pixel(1, 1, Rgba([200, 0, 0, 128]));

        composite_onto(&mut canvas, &tile, (0, 0));

        let Rgba([r, g, b, a]) = *canvas.get_pixel(0, 0);
        assert_eq!(a, 255);
        assert_eq!(g, 0);
        assert!(r.abs_diff(100) <= 1);
        assert!(b.abs_diff(100) <= 1);
    }

    // Tests partial alpha over a transparent canvas keeps source color
    // Verified by darkening toward the empty canvas
    #[test]
    fn test_partial_alpha_over_empty() {
        let mut canvas = RgbaImage::new(1, 1);
        let tile = RgbaImage::from_pixel(1, 1, Rgba([40, 80, 120, 64]));

        composite_onto(&mut canvas, &tile, (0, 0));

        let Rgba([r, g, b, a]) = *canvas.get_pixel(0, 0);
        assert!(r.abs_diff(40) <= 1);
        assert!(g.abs_diff(80) <= 1);
        assert!(b.abs_diff(120) <= 1);
        assert!(a.abs_diff(64) <= 1);
    }

    // Tests paste copies alpha verbatim and clips at the border
    // Verified by compositing instead of replacing
    #[test]
    fn test_paste_replaces_and_clips() {
        let mut canvas = RgbaImage::from_pixel(4, 4, Rgba([9, 9, 9, 255]));
        let tile = RgbaImage::from_pixel(3, 3, Rgba([1, 2, 3, 0]));

        paste(&mut canvas, &tile, (2, 2));

        assert_eq!(*canvas.get_pixel(3, 3), Rgba([1, 2, 3, 0]));
        assert_eq!(*canvas.get_pixel(2, 2), Rgba([1, 2, 3, 0]));
        assert_eq!(*canvas.get_pixel(1, 1), Rgba([9, 9, 9, 255]));
    }

    // Tests tiles hanging off the canvas edge are clipped when blended
    // Verified by wrapping the overflow to the opposite side
    #[test]
    fn test_composite_clips_at_border() {
        let mut canvas = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        let tile = RgbaImage::from_pixel(3, 3, Rgba([255, 255, 255, 255]));

        composite_onto(&mut canvas, &tile, (3, 3));

        assert_eq!(*canvas.get_pixel(3, 3), Rgba([255, 255, 255, 255]));
        assert_eq!(*canvas.get_pixel(0, 0), Rgba([0, 0, 0, 255]));
        assert_eq!(*canvas.get_pixel(0, 3), Rgba([0, 0, 0, 255]));
    }
}
