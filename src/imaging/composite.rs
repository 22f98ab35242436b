//! Full-resolution preview stitched from matched block textures

use crate::imaging::cache::{CacheStats, SwatchCache};
use crate::imaging::placeholder::missing_swatch;
use crate::io::configuration::SWATCH_EXTENSION;
use crate::io::error::{MapArtError, Result, invalid_dimensions};
use crate::matching::blueprint::Blueprint;
use image::{GenericImageView, RgbaImage, imageops};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Tiles blueprint cells with their textures from one directory
///
/// The texture cache lives as long as the compositor, so repeated
/// conversions against the same directory decode each texture once.
pub struct Compositor {
    source_dir: PathBuf,
    swatch_size: u32,
    placeholder: Arc<RgbaImage>,
    cache: SwatchCache,
}

impl Compositor {
    /// Create a compositor reading `swatch_size` textures from `source_dir`
    pub fn new(source_dir: impl Into<PathBuf>, swatch_size: u32) -> Self {
        Self {
            source_dir: source_dir.into(),
            swatch_size,
            placeholder: Arc::new(missing_swatch(swatch_size)),
            cache: SwatchCache::new(),
        }
    }

    /// Texture side length in pixels
    pub const fn swatch_size(&self) -> u32 {
        self.swatch_size
    }

    /// Cache counters accumulated so far
    pub const fn cache_stats(&self) -> CacheStats {
        self.cache.stats
    }

    /// Render `blueprint` at `swatch_size` pixels per cell
    ///
    /// Cells whose texture file does not exist get the checkerboard
    /// placeholder instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas size overflows, or if an existing
    /// texture cannot be decoded or has the wrong dimensions
    pub fn composite(&mut self, blueprint: &Blueprint) -> Result<RgbaImage> {
        let canvas_width = self.canvas_extent("preview width", blueprint.width())?;
        let canvas_height = self.canvas_extent("preview height", blueprint.height())?;
        let mut canvas = RgbaImage::new(canvas_width, canvas_height);

        let missing_before = self.cache.stats.missing;

        for (x, y, name) in blueprint.cells() {
            let texture = self.texture(name)?;
            let offset_x = x as i64 * i64::from(self.swatch_size);
            let offset_y = y as i64 * i64::from(self.swatch_size);
            imageops::replace(&mut canvas, texture.as_ref(), offset_x, offset_y);
        }

        let newly_missing = self.cache.stats.missing - missing_before;
        if newly_missing > 0 {
            tracing::warn!(
                count = newly_missing,
                dir = %self.source_dir.display(),
                "textures missing, placeholder used"
            );
        }

        Ok(canvas)
    }

    fn canvas_extent(&self, dimension: &'static str, cells: usize) -> Result<u32> {
        u32::try_from(cells)
            .ok()
            .and_then(|cells| cells.checked_mul(self.swatch_size))
            .ok_or_else(|| MapArtError::InvalidDimensions {
                dimension,
                value: cells as u64,
                reason: format!("{cells} tiles of {} pixels overflows the canvas", self.swatch_size),
            })
    }

    fn texture(&mut self, name: &str) -> Result<Arc<RgbaImage>> {
        let path = self.texture_path(name);
        let swatch_size = self.swatch_size;
        self.cache
            .get_or_load(name, &self.placeholder, || load_texture(&path, swatch_size))
    }

    fn texture_path(&self, name: &str) -> PathBuf {
        self.source_dir.join(format!("{name}.{SWATCH_EXTENSION}"))
    }
}

/// Render `blueprint` with a cache local to this call
///
/// # Errors
///
/// See [`Compositor::composite`]
pub fn composite(blueprint: &Blueprint, source_dir: &Path, swatch_size: u32) -> Result<RgbaImage> {
    if swatch_size == 0 {
        return Err(invalid_dimensions(
            "swatch size",
            swatch_size,
            &"swatches must be at least one pixel",
        ));
    }
    Compositor::new(source_dir, swatch_size).composite(blueprint)
}

// Absence is not an error here; the caller substitutes the placeholder
fn load_texture(path: &Path, swatch_size: u32) -> Result<Option<RgbaImage>> {
    let img = match image::open(path) {
        Ok(img) => img,
        Err(image::ImageError::IoError(e)) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "texture not found");
            return Ok(None);
        }
        Err(e) => {
            return Err(MapArtError::ImageLoad {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    if img.dimensions() != (swatch_size, swatch_size) {
        return Err(MapArtError::InvalidSourceData {
            reason: format!(
                "texture '{}' is {}x{}, expected {swatch_size}x{swatch_size}",
                path.display(),
                img.width(),
                img.height()
            ),
        });
    }

    Ok(Some(img.to_rgba8()))
}
