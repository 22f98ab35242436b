//! Downsampling of input images to blueprint resolution

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{MapArtError, Result, invalid_dimensions};
use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};
use std::path::Path;

/// Open and decode an input image
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be opened or decoded
pub fn load_source(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| MapArtError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Blueprint height preserving the source aspect ratio
///
/// Computed as `round(tiles_wide * source_height / source_width)`.
///
/// # Errors
///
/// Returns an error if the width is zero or too large, the source is
/// empty, or the height rounds to zero or exceeds the grid limit
pub fn target_height(source_width: u32, source_height: u32, tiles_wide: u32) -> Result<u32> {
    if tiles_wide == 0 {
        return Err(invalid_dimensions(
            "tile width",
            tiles_wide,
            &"width must be a positive number of tiles",
        ));
    }
    if tiles_wide > MAX_GRID_DIMENSION {
        return Err(invalid_dimensions(
            "tile width",
            tiles_wide,
            &format!("width may not exceed {MAX_GRID_DIMENSION} tiles"),
        ));
    }
    if source_width == 0 || source_height == 0 {
        return Err(invalid_dimensions(
            "source size",
            source_width.min(source_height),
            &"source image has no pixels",
        ));
    }

    let exact = f64::from(tiles_wide) * f64::from(source_height) / f64::from(source_width);
    let rounded = exact.round();

    if rounded < 1.0 {
        return Err(invalid_dimensions(
            "tile height",
            0u32,
            &format!("{source_width}x{source_height} at {tiles_wide} tiles wide rounds to zero rows"),
        ));
    }
    if rounded > f64::from(MAX_GRID_DIMENSION) {
        return Err(MapArtError::InvalidDimensions {
            dimension: "tile height",
            value: rounded as u64,
            reason: format!("height may not exceed {MAX_GRID_DIMENSION} tiles"),
        });
    }

    Ok(rounded as u32)
}

/// Flatten to RGB and resize to `tiles_wide` pixels across with Lanczos3
///
/// # Errors
///
/// Returns an error if the target dimensions are invalid
pub fn resample(source: &DynamicImage, tiles_wide: u32) -> Result<RgbImage> {
    let height = target_height(source.width(), source.height(), tiles_wide)?;
    let rgb = source.to_rgb8();
    Ok(imageops::resize(&rgb, tiles_wide, height, FilterType::Lanczos3))
}
