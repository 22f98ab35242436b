//! Block map-art generation from arbitrary images
//!
//! A palette is built once from a directory of block textures, then each
//! input image is resampled to the requested width in blocks, every pixel
//! is matched to its nearest palette color, and the resulting blueprint is
//! stitched back into a full-resolution texture preview.

#![forbid(unsafe_code)]

/// Texture catalog scanning, filtering and palette construction
pub mod catalog;
/// Resampling, texture caching and preview compositing
pub mod imaging;
/// Input/output operations, configuration and error handling
pub mod io;
/// Nearest-color matching and blueprint grids
pub mod matching;
/// Conversion driver tying the stages together
pub mod pipeline;

pub use catalog::palette::{Palette, PaletteEntry, build_palette};
pub use io::error::{MapArtError, Result};
pub use matching::blueprint::Blueprint;
pub use pipeline::converter::{Conversion, Converter};
