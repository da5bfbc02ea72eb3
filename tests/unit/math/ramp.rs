//! Tests for ramps, tapering and intensity quantization

#[cfg(test)]
mod tests {
    use tilecraft::math::ramp::{clamped_ramp, linspace, taper, to_intensity};

    // Tests endpoints are included and spacing is even
    // Verified by excluding the end point
    #[test]
    fn test_linspace_endpoints() {
        let values = linspace(0.0_f64, 1.0, 5);
        assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    // Tests degenerate counts
    // Verified by returning end for a single sample
    #[test]
    fn test_linspace_degenerate_counts() {
        assert!(linspace(0.0_f64, 1.0, 0).is_empty());
        assert_eq!(linspace(0.25_f64, 1.0, 1), vec![0.25]);
    }

    // Tests zero taper gives one even at zero
    // Verified by computing 0^0 as 0
    #[test]
    fn test_taper_zero_rate() {
        assert!((taper(0.0_f64, 0.0) - 1.0).abs() < f64::EPSILON);
        assert!((taper(0.5_f64, 0.0) - 1.0).abs() < f64::EPSILON);
    }

    // Tests larger rates keep values lower
    // Verified by inverting the exponent
    #[test]
    fn test_taper_is_power() {
        assert!((taper(0.5_f64, 2.0) - 0.25).abs() < 1e-12);
        assert!((taper(0.5_f64, 1.0) - 0.5).abs() < 1e-12);
        assert!(taper(0.5_f64, 3.0) < taper(0.5_f64, 1.5));
    }

    // Tests the ramp is clamped outside its band
    // Verified by removing the clamp
    #[test]
    fn test_clamped_ramp() {
        assert!(clamped_ramp(5.0_f64, 10.0, 10.0).abs() < f64::EPSILON);
        assert!((clamped_ramp(15.0_f64, 10.0, 10.0) - 0.5).abs() < f64::EPSILON);
        assert!((clamped_ramp(30.0_f64, 10.0, 10.0) - 1.0).abs() < f64::EPSILON);
    }

    // Tests a zero-width band is a step
    // Verified by dividing by zero width
    #[test]
    fn test_clamped_ramp_zero_width() {
        assert!(clamped_ramp(9.0_f64, 10.0, 0.0).abs() < f64::EPSILON);
        assert!((clamped_ramp(10.0_f64, 10.0, 0.0) - 1.0).abs() < f64::EPSILON);
    }

    // Tests rounding and clamping to 8 bits
    // Verified by truncating instead of rounding
    #[test]
    fn test_to_intensity() {
        assert_eq!(to_intensity(0.0_f64), 0);
        assert_eq!(to_intensity(1.0_f64), 255);
        assert_eq!(to_intensity(0.5_f64), 128);
        assert_eq!(to_intensity(-0.2_f64), 0);
        assert_eq!(to_intensity(1.7_f64), 255);
    }
}
