//! Error types for cataloging, conversion and export

use crate::catalog::palette::CatalogSummary;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all map-art operations
#[derive(Debug)]
pub enum MapArtError {
    /// Failed to open or decode an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
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

    /// No swatch survived cataloging, so nothing can be matched
    EmptyPalette {
        /// Per-category exclusion counts from the scan
        summary: CatalogSummary,
    },

    /// Requested or computed tile dimensions are unusable
    InvalidDimensions {
        /// Which dimension was rejected
        dimension: &'static str,
        /// Offending value
        value: u64,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Parameter or configuration validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Source data doesn't meet pipeline requirements
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// One or more inputs of a batch failed to convert
    ConversionFailures {
        /// Number of inputs that failed
        failed: usize,
        /// Number of inputs attempted
        total: usize,
    },
}

impl fmt::Display for MapArtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
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
            Self::EmptyPalette { summary } => {
                write!(
                    f,
                    "No usable swatches found ({} candidates scanned: {summary})",
                    summary.total()
                )
            }
            Self::InvalidDimensions {
                dimension,
                value,
                reason,
            } => {
                write!(f, "Invalid {dimension} of {value}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::ConversionFailures { failed, total } => {
                write!(f, "{failed} of {total} conversions failed")
            }
        }
    }
}

impl std::error::Error for MapArtError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for map-art results
pub type Result<T> = std::result::Result<T, MapArtError>;

impl From<image::ImageError> for MapArtError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for MapArtError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid dimensions error
pub fn invalid_dimensions(
    dimension: &'static str,
    value: impl Into<u64>,
    reason: &impl ToString,
) -> MapArtError {
    MapArtError::InvalidDimensions {
        dimension,
        value: value.into(),
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MapArtError {
    MapArtError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
