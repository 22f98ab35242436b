//! Palette construction from a directory of block textures
//!
//! Every candidate is classified independently; exclusions are tallied
//! into a [`CatalogSummary`] rather than surfaced as errors, since losing
//! part of a catalog is expected. Only an empty result is fatal.

use crate::catalog::rules::CatalogRules;
use crate::catalog::swatch::{Classification, classify_candidate};
use crate::io::configuration::SWATCH_EXTENSION;
use crate::io::error::{MapArtError, Result};
use crate::matching::matcher;
use std::fmt;
use std::path::{Path, PathBuf};

/// One matchable swatch
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PaletteEntry {
    /// Texture base name, extension stripped
    pub name: String,
    /// Truncated mean RGB of the texture
    pub color: [u8; 3],
}

impl PaletteEntry {
    /// Create an entry from a name and color
    pub fn new(name: impl Into<String>, color: [u8; 3]) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// Ordered, deduplicated, non-empty set of swatches
///
/// Entries are sorted by name, so first-in-order tie breaking during
/// matching is alphabetical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Sort and deduplicate entries into a palette
    ///
    /// When two entries share a name the first one supplied is kept.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPalette` if no entries are supplied
    pub fn new(mut entries: Vec<PaletteEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(MapArtError::EmptyPalette {
                summary: CatalogSummary::default(),
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries.dedup_by(|later, earlier| later.name == earlier.name);

        Ok(Self { entries })
    }

    /// Entries in name order
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Number of entries
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed palette
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by name
    pub fn get(&self, name: &str) -> Option<&PaletteEntry> {
        self.entries
            .binary_search_by(|entry| entry.name.as_str().cmp(name))
            .ok()
            .and_then(|index| self.entries.get(index))
    }

    /// Closest entry to `pixel` by squared RGB distance
    ///
    /// Ties resolve to the earliest entry in name order.
    pub fn best_match(&self, pixel: [u8; 3]) -> Option<&PaletteEntry> {
        matcher::best_match(pixel, &self.entries)
    }
}

/// Per-category counts gathered while scanning a catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    /// Candidates that became palette entries
    pub accepted: usize,
    /// Excluded by a blacklist token
    pub blacklisted: usize,
    /// Excluded for lacking a whitelist token
    pub not_whitelisted: usize,
    /// Excluded for wrong dimensions
    pub resolution: usize,
    /// Excluded for partial transparency
    pub transparency: usize,
    /// Excluded because decoding failed
    pub corrupted: usize,
}

impl CatalogSummary {
    /// Count one classification
    pub const fn record(&mut self, classification: &Classification) {
        match classification {
            Classification::Accepted(_) => self.accepted += 1,
            Classification::ExcludedBlacklist => self.blacklisted += 1,
            Classification::ExcludedNotWhitelisted => self.not_whitelisted += 1,
            Classification::ExcludedResolution => self.resolution += 1,
            Classification::ExcludedTransparency => self.transparency += 1,
            Classification::ExcludedCorrupt => self.corrupted += 1,
        }
    }

    /// Number of excluded candidates
    pub const fn excluded(&self) -> usize {
        self.blacklisted + self.not_whitelisted + self.resolution + self.transparency + self.corrupted
    }

    /// Number of candidates examined
    pub const fn total(&self) -> usize {
        self.accepted + self.excluded()
    }
}

impl fmt::Display for CatalogSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} accepted, {} blacklisted, {} not whitelisted, {} wrong resolution, {} transparent, {} corrupted",
            self.accepted,
            self.blacklisted,
            self.not_whitelisted,
            self.resolution,
            self.transparency,
            self.corrupted
        )
    }
}

/// Raw result of scanning a texture directory
#[derive(Debug, Clone)]
pub struct CatalogScan {
    /// Accepted entries in scan order
    pub entries: Vec<PaletteEntry>,
    /// Exclusion tallies
    pub summary: CatalogSummary,
}

/// List swatch candidates in `source_dir`, sorted by path
///
/// # Errors
///
/// Returns an error if the directory cannot be read
pub fn list_candidates(source_dir: &Path) -> Result<Vec<PathBuf>> {
    let read_error = |e| MapArtError::FileSystem {
        path: source_dir.to_path_buf(),
        operation: "read texture directory",
        source: e,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(source_dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(SWATCH_EXTENSION) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Classify every candidate in `source_dir`
///
/// # Errors
///
/// Returns an error if the directory cannot be read; individual
/// candidates never fail the scan
pub fn scan_catalog(source_dir: &Path, rules: &CatalogRules) -> Result<CatalogScan> {
    rules.validate()?;

    let mut summary = CatalogSummary::default();
    let mut entries = Vec::new();

    for path in list_candidates(source_dir)? {
        let classification = classify_candidate(&path, rules);
        summary.record(&classification);
        if let Some(entry) = classification.into_entry() {
            entries.push(entry);
        }
    }

    Ok(CatalogScan { entries, summary })
}

/// Build the palette for `source_dir`
///
/// # Errors
///
/// Returns an error if the directory cannot be read or if no candidate
/// survives the rules (`EmptyPalette`)
pub fn build_palette(source_dir: &Path, rules: &CatalogRules) -> Result<Palette> {
    let CatalogScan { entries, summary } = scan_catalog(source_dir, rules)?;

    tracing::info!(
        dir = %source_dir.display(),
        candidates = summary.total(),
        "catalog scanned: {summary}"
    );

    if entries.is_empty() {
        return Err(MapArtError::EmptyPalette { summary });
    }

    let palette = Palette::new(entries)?;
    tracing::info!(entries = palette.len(), "palette ready");
    Ok(palette)
}
