//! Procedural stand-in for textures missing at composition time

use image::{Rgba, RgbaImage};

/// Color of the even checkerboard blocks
pub const PLACEHOLDER_PRIMARY: Rgba<u8> = Rgba([255, 0, 255, 255]);
/// Color of the odd checkerboard blocks
pub const PLACEHOLDER_SECONDARY: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// `size × size` magenta/black checkerboard of 2×2 macro-blocks
pub fn missing_swatch(size: u32) -> RgbaImage {
    RgbaImage::from_fn(size, size, |x, y| {
        let block_x = x * 2 / size.max(1);
        let block_y = y * 2 / size.max(1);
        if (block_x + block_y) % 2 == 0 {
            PLACEHOLDER_PRIMARY
        } else {
            PLACEHOLDER_SECONDARY
        }
    })
}
