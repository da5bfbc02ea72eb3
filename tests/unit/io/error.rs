//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::{Path, PathBuf};
    use tilecraft::AssetError;
    use tilecraft::io::error::{WithPath, file_system, invalid_parameter};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = AssetError::FileSystem {
            path: "/tmp/test.png".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
    }

    // Tests DimensionMismatch formatting includes both sizes
    // Verified by swapping expected and actual in message
    #[test]
    fn test_dimension_mismatch_error() {
        let error = AssetError::DimensionMismatch {
            expected: (64, 64),
            actual: (32, 16),
        };

        let message = error.to_string();
        assert!(message.contains("expected 64x64"));
        assert!(message.contains("got 32x16"));
        assert!(error.source().is_none());
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("taper_rate", &-1.0, &"must be non-negative");

        let message = error.to_string();
        assert!(message.contains("taper_rate"));
        assert!(message.contains("-1"));
        assert!(message.contains("must be non-negative"));
    }

    // Tests InvalidFraction reports both fractions and the reason
    // Verified by dropping transition from message
    #[test]
    fn test_invalid_fraction_error() {
        let error = AssetError::InvalidFraction {
            original: 0.7,
            transition: 0.6,
            reason: "fractions must sum to at most 1.0".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("0.7"));
        assert!(message.contains("0.6"));
        assert!(message.contains("sum to at most 1.0"));
    }

    // Tests UnsupportedFormat names the rejected format
    // Verified by printing a fixed message
    #[test]
    fn test_unsupported_format_error() {
        let error = AssetError::UnsupportedFormat {
            format: "jpg".to_string(),
        };

        assert!(error.to_string().contains("'jpg'"));
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = AssetError::ImageExport {
            path: PathBuf::from("/restricted/output.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/output.png"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }

    // Tests From<io::Error> produces a FileSystem error
    // Verified by mapping io errors to another variant
    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::other("boom");
        let error: AssetError = io_error.into();

        assert!(matches!(error, AssetError::FileSystem { .. }));
    }

    // Tests with_path replaces the placeholder path on decode errors
    // Verified by leaving placeholder untouched
    #[test]
    fn test_with_path_on_image_error() {
        let result: Result<(), image::ImageError> = Err(image::ImageError::IoError(
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        ));

        let error = result.with_path(Path::new("tiles/rock.png")).unwrap_err();
        match error {
            AssetError::ImageDecode { path, .. } => {
                assert_eq!(path, PathBuf::from("tiles/rock.png"));
            }
            _ => unreachable!("Expected ImageDecode error type"),
        }
    }

    // Tests file_system helper keeps the operation name
    // Verified by hardcoding a different operation
    #[test]
    fn test_file_system_helper() {
        let error = file_system(
            Path::new("out"),
            "create directory",
            std::io::Error::other("denied"),
        );

        let message = error.to_string();
        assert!(message.contains("create directory"));
        assert!(message.contains("'out'"));
    }

    // Tests Generation error carries the job name
    // Verified by omitting job from message
    #[test]
    fn test_generation_error() {
        let error = AssetError::Generation {
            job: "42_spring_sunny_grass.png".to_string(),
            reason: "out of memory".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("42_spring_sunny_grass.png"));
        assert!(message.contains("out of memory"));
    }
}
