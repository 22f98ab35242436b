//! Nearest-color lookup over palette entries

use crate::catalog::palette::PaletteEntry;

/// Sum of squared per-channel differences
pub fn color_distance(a: [u8; 3], b: [u8; 3]) -> u32 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let diff = u32::from(x.abs_diff(y));
            diff * diff
        })
        .sum()
}

/// Entry with the smallest distance to `pixel`
///
/// Linear scan; among equal distances the first entry in slice order
/// wins. Returns `None` only for an empty slice.
pub fn best_match(pixel: [u8; 3], entries: &[PaletteEntry]) -> Option<&PaletteEntry> {
    entries
        .iter()
        .min_by_key(|entry| color_distance(pixel, entry.color))
}
