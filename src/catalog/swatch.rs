//! Per-candidate validation and representative color extraction

use crate::catalog::palette::PaletteEntry;
use crate::catalog::rules::CatalogRules;
use image::{DynamicImage, GenericImageView, RgbaImage};
use std::path::Path;

/// Outcome of examining one candidate texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Candidate passed every gate and contributes this entry
    Accepted(PaletteEntry),
    /// Name contains a blacklist token
    ExcludedBlacklist,
    /// Name contains no whitelist token
    ExcludedNotWhitelisted,
    /// Image is not exactly `S×S`
    ExcludedResolution,
    /// At least one pixel is not fully opaque
    ExcludedTransparency,
    /// File could not be opened or decoded
    ExcludedCorrupt,
}

impl Classification {
    /// The accepted entry, if any
    pub fn into_entry(self) -> Option<PaletteEntry> {
        match self {
            Self::Accepted(entry) => Some(entry),
            _ => None,
        }
    }
}

/// Base name of a swatch file with the extension stripped
pub fn swatch_name(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(ToString::to_string)
}

/// Classify a candidate file without ever failing
///
/// Name rules run first so excluded files are never decoded.
pub fn classify_candidate(path: &Path, rules: &CatalogRules) -> Classification {
    let Some(name) = swatch_name(path) else {
        return Classification::ExcludedCorrupt;
    };

    if let Some(excluded) = rules.filter_name(&name) {
        return excluded;
    }

    match image::open(path) {
        Ok(img) => classify_image(name, &img, rules),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "swatch failed to decode");
            Classification::ExcludedCorrupt
        }
    }
}

/// Apply the shape and opacity gates to an already-decoded swatch
pub fn classify_image(name: String, img: &DynamicImage, rules: &CatalogRules) -> Classification {
    if img.dimensions() != (rules.swatch_size, rules.swatch_size) {
        return Classification::ExcludedResolution;
    }

    let rgba = img.to_rgba8();
    if !is_opaque(&rgba) {
        return Classification::ExcludedTransparency;
    }

    Classification::Accepted(PaletteEntry {
        name,
        color: average_color(&rgba),
    })
}

/// True when every pixel has full alpha
pub fn is_opaque(img: &RgbaImage) -> bool {
    img.pixels().all(|pixel| pixel.0[3] == u8::MAX)
}

/// Per-channel arithmetic mean of RGB, truncated toward zero
///
/// Alpha is ignored. An empty image averages to black.
pub fn average_color(img: &RgbaImage) -> [u8; 3] {
    let mut sums = [0u64; 3];
    for pixel in img.pixels() {
        let [r, g, b, _] = pixel.0;
        sums[0] += u64::from(r);
        sums[1] += u64::from(g);
        sums[2] += u64::from(b);
    }

    let count = u64::from(img.width()) * u64::from(img.height());
    if count == 0 {
        return [0, 0, 0];
    }

    sums.map(|sum| (sum / count) as u8)
}
