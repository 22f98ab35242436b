//! End-to-end conversion: resample, match, composite

use crate::catalog::palette::Palette;
use crate::imaging::composite::Compositor;
use crate::imaging::resample::{load_source, resample};
use crate::io::error::Result;
use crate::matching::blueprint::{Blueprint, build_blueprint};
use image::{DynamicImage, RgbaImage};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Artifacts produced for one input image
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Grid of matched swatch names
    pub blueprint: Blueprint,
    /// Blueprint rendered with block textures
    pub preview: RgbaImage,
}

/// Converts images against one shared palette
///
/// The palette is never modified after construction, so a failed
/// conversion leaves the converter ready for the next input.
pub struct Converter {
    palette: Arc<Palette>,
    compositor: Compositor,
}

impl Converter {
    /// Create a converter reading preview textures from `textures_dir`
    pub fn new(palette: Arc<Palette>, textures_dir: impl Into<PathBuf>, swatch_size: u32) -> Self {
        Self {
            palette,
            compositor: Compositor::new(textures_dir, swatch_size),
        }
    }

    /// Palette used for matching
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Compositor holding the texture cache
    pub const fn compositor(&self) -> &Compositor {
        &self.compositor
    }

    /// Convert a decoded image `tiles_wide` blocks across
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid or a texture
    /// cannot be composited
    pub fn convert_image(&mut self, source: &DynamicImage, tiles_wide: u32) -> Result<Conversion> {
        let blueprint = self.match_blocks(source, tiles_wide)?;
        let preview = self.render(&blueprint)?;
        Ok(Conversion { blueprint, preview })
    }

    /// Resample `source` and match every tile against the palette
    ///
    /// # Errors
    ///
    /// Returns an error if the requested or computed dimensions are invalid
    pub fn match_blocks(&self, source: &DynamicImage, tiles_wide: u32) -> Result<Blueprint> {
        let resized = resample(source, tiles_wide)?;
        tracing::debug!(
            width = resized.width(),
            height = resized.height(),
            "matching blocks"
        );
        build_blueprint(&resized, &self.palette)
    }

    /// Stitch the preview for an already matched blueprint
    ///
    /// # Errors
    ///
    /// Returns an error if an existing texture cannot be decoded or the
    /// canvas would be too large
    pub fn render(&mut self, blueprint: &Blueprint) -> Result<RgbaImage> {
        tracing::debug!(
            width = blueprint.width(),
            height = blueprint.height(),
            "stitching preview"
        );
        self.compositor.composite(blueprint)
    }

    /// Decode and convert the image at `path`
    ///
    /// # Errors
    ///
    /// Returns `ImageLoad` if the input cannot be decoded, otherwise as
    /// [`Converter::convert_image`]
    pub fn convert_path(&mut self, path: &Path, tiles_wide: u32) -> Result<Conversion> {
        let source = load_source(path)?;
        self.convert_image(&source, tiles_wide)
    }
}
