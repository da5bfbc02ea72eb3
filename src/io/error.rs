//! Error types and path context for asset processing operations

use std::fmt;
use std::path::{Path, PathBuf};

const UNKNOWN_PATH: &str = "<unknown>";

/// Main error type for all asset operations
#[derive(Debug)]
pub enum AssetError {
    /// Input image could not be read or decoded
    ImageDecode {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to encode or save an output image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// Mask and image dimensions differ
    DimensionMismatch {
        /// Dimensions of the target image (width, height)
        expected: (u32, u32),
        /// Dimensions that were supplied (width, height)
        actual: (u32, u32),
    },

    /// Output format is neither PNG nor WEBP
    UnsupportedFormat {
        /// Requested format or file extension
        format: String,
    },

    /// Inpaint region fractions are out of range or overlap
    InvalidFraction {
        /// Fraction of the tile preserved verbatim
        original: f64,
        /// Fraction of the tile used as the blend band
        transition: f64,
        /// Explanation of why the fractions are invalid
        reason: String,
    },

    /// Direction name is unknown or not allowed for the operation
    InvalidDirection {
        /// Offending direction
        direction: String,
        /// Explanation of why the direction was rejected
        reason: &'static str,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Generation plan file could not be parsed
    Configuration {
        /// Path of the plan file
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// The image-generation collaborator reported a failure
    Generation {
        /// Name of the job being generated
        job: String,
        /// Failure reported by the generator
        reason: String,
    },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageDecode { path, source } => {
                write!(f, "Failed to decode image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Dimension mismatch: expected {}x{}, got {}x{}",
                    expected.0, expected.1, actual.0, actual.1
                )
            }
            Self::UnsupportedFormat { format } => {
                write!(f, "Unsupported output format: '{format}' (use png or webp)")
            }
            Self::InvalidFraction {
                original,
                transition,
                reason,
            } => {
                write!(
                    f,
                    "Invalid edge fractions (original {original}, transition {transition}): {reason}"
                )
            }
            Self::InvalidDirection { direction, reason } => {
                write!(f, "Invalid direction '{direction}': {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Configuration { path, source } => {
                write!(
                    f,
                    "Failed to parse generation plan '{}': {source}",
                    path.display()
                )
            }
            Self::Generation { job, reason } => {
                write!(f, "Image generation failed for '{job}': {reason}")
            }
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageDecode { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Configuration { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for asset results
pub type Result<T> = std::result::Result<T, AssetError>;

/// Attaches the offending path to errors raised without one
pub trait WithPath<T> {
    /// Replace an unknown path in the error with `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<AssetError>,
{
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only path-carrying variants created via `From` are rewritten
            match &mut error {
                AssetError::ImageDecode { path: slot, .. }
                | AssetError::ImageExport { path: slot, .. }
                | AssetError::FileSystem { path: slot, .. }
                | AssetError::Configuration { path: slot, .. } => {
                    if slot.as_os_str() == UNKNOWN_PATH {
                        *slot = path.to_path_buf();
                    }
                }
                _ => {}
            }
            error
        })
    }
}

impl From<image::ImageError> for AssetError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageDecode {
            path: PathBuf::from(UNKNOWN_PATH),
            source: err,
        }
    }
}

impl From<std::io::Error> for AssetError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from(UNKNOWN_PATH),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AssetError {
    AssetError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for the given operation
pub fn file_system(path: &Path, operation: &'static str, source: std::io::Error) -> AssetError {
    AssetError::FileSystem {
        path: path.to_path_buf(),
        operation,
        source,
    }
}
