//! Tests for processing constants and their relationships

#[cfg(test)]
mod tests {
    use tilecraft::io::configuration::{
        CONTRAST_BOOST, DEFAULT_NUM_COLORS, DEFAULT_ORIGINAL_FRACTION, DEFAULT_PIXEL_SIZE,
        DEFAULT_TAPER_RATE, DEFAULT_TRANSITION_FRACTION, FRAME_INDEX_WIDTH, KMEANS_MAX_ITERATIONS,
        MAX_PALETTE_COLORS, QUANTIZE_SEED, RETRO_PREFIX, SATURATION_BOOST, SUPPORTED_INPUT_EXTENSIONS,
    };

    // Tests pixelation defaults match the documented behavior
    // Verified by changing constant values
    #[test]
    fn test_retro_defaults() {
        assert_eq!(DEFAULT_NUM_COLORS, 16);
        assert_eq!(DEFAULT_PIXEL_SIZE, 64);
        assert!((SATURATION_BOOST - 1.25).abs() < f32::EPSILON);
        assert!((CONTRAST_BOOST - 1.25).abs() < f32::EPSILON);
    }

    // Tests palette clustering is seeded and bounded
    // Verified by changing seed constant
    #[test]
    fn test_clustering_budget() {
        assert_eq!(QUANTIZE_SEED, 42);
        assert_eq!(KMEANS_MAX_ITERATIONS, 300);
        assert!(DEFAULT_NUM_COLORS <= MAX_PALETTE_COLORS);
    }

    // Tests default edge fractions leave a blank region
    // Verified by raising fractions above one in total
    #[test]
    fn test_default_fractions_fit() {
        assert!(DEFAULT_ORIGINAL_FRACTION + DEFAULT_TRANSITION_FRACTION < 1.0);
        assert!((DEFAULT_TAPER_RATE - 1.0).abs() < f64::EPSILON);
    }

    // Tests batch naming constants
    // Verified by removing png from accepted inputs
    #[test]
    fn test_batch_naming() {
        assert_eq!(RETRO_PREFIX, "retro_");
        assert_eq!(FRAME_INDEX_WIDTH, 4);
        assert!(SUPPORTED_INPUT_EXTENSIONS.contains(&"png"));
        assert!(SUPPORTED_INPUT_EXTENSIONS.contains(&"jpg"));
    }
}
