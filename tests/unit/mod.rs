//! Unit tests mirroring the `src` tree, plus shared texture fixtures

mod catalog;

use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};

/// Write a single-color `size × size` PNG named `<name>.png` into `dir`
pub fn write_solid_png(dir: &Path, name: &str, color: [u8; 4], size: u32) -> PathBuf {
    let path = dir.join(format!("{name}.png"));
    RgbaImage::from_pixel(size, size, Rgba(color))
        .save(&path)
        .expect("Failed to write test texture");
    path
}

/// Write an arbitrary image as `<name>.png` into `dir`
pub fn write_png(dir: &Path, name: &str, img: &RgbaImage) -> PathBuf {
    let path = dir.join(format!("{name}.png"));
    img.save(&path).expect("Failed to write test image");
    path
}
