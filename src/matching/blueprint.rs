//! Blueprint grid of swatch names built from a resampled image

use crate::catalog::palette::{CatalogSummary, Palette};
use crate::io::error::{MapArtError, Result, invalid_dimensions};
use image::RgbImage;
use ndarray::{Array2, ArrayView1};
use rayon::prelude::*;
use std::collections::HashMap;

/// Row-major grid of swatch names, `height × width`
///
/// Always rectangular with at least one cell. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blueprint {
    cells: Array2<String>,
}

impl Blueprint {
    /// Build a blueprint from explicit rows
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, a row is empty, or rows
    /// differ in length
    pub fn from_rows(rows: Vec<Vec<String>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if height == 0 || width == 0 {
            return Err(invalid_dimensions(
                "blueprint size",
                0u32,
                &"a blueprint needs at least one cell",
            ));
        }

        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(MapArtError::InvalidSourceData {
                reason: format!(
                    "row {index} has {} cells, expected {width}",
                    row.len()
                ),
            });
        }

        let flat: Vec<String> = rows.into_iter().flatten().collect();
        let cells = Array2::from_shape_vec((height, width), flat).map_err(|e| {
            MapArtError::InvalidSourceData {
                reason: e.to_string(),
            }
        })?;

        Ok(Self { cells })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Name at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<&str> {
        self.cells.get([y, x]).map(String::as_str)
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, String>> {
        self.cells.rows().into_iter()
    }

    /// Iterate `(x, y, name)` in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &str)> {
        self.cells
            .indexed_iter()
            .map(|((y, x), name)| (x, y, name.as_str()))
    }

    /// Count of each swatch, most used first, ties by name
    pub fn material_counts(&self) -> Vec<(String, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for name in &self.cells {
            *counts.entry(name.as_str()).or_default() += 1;
        }

        let mut sorted: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(name, count)| (name.to_string(), count))
            .collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        sorted
    }
}

/// Match every pixel of `resized` against `palette`
///
/// Rows are matched in parallel and gathered in order, so the result is
/// identical to a sequential row-major pass.
///
/// # Errors
///
/// Returns an error if the image has no pixels or the palette has no
/// entries
pub fn build_blueprint(resized: &RgbImage, palette: &Palette) -> Result<Blueprint> {
    let (width, height) = resized.dimensions();
    if width == 0 || height == 0 {
        return Err(invalid_dimensions(
            "image size",
            width.min(height),
            &"resampled image has no pixels",
        ));
    }

    let rows = (0..height)
        .into_par_iter()
        .map(|y| {
            (0..width)
                .map(|x| {
                    let pixel = resized.get_pixel_checked(x, y).ok_or_else(|| {
                        MapArtError::InvalidSourceData {
                            reason: format!("pixel ({x}, {y}) outside resampled image"),
                        }
                    })?;
                    palette
                        .best_match(pixel.0)
                        .map(|entry| entry.name.clone())
                        .ok_or(MapArtError::EmptyPalette {
                            summary: CatalogSummary::default(),
                        })
                })
                .collect::<Result<Vec<String>>>()
        })
        .collect::<Result<Vec<Vec<String>>>>()?;

    Blueprint::from_rows(rows)
}
