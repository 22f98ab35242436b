//! Image-side stages of the pipeline
//!
//! - Resampling input images to blueprint resolution
//! - Caching decoded block textures
//! - Compositing blueprints into previews

/// Decoded texture cache keyed by block name
pub mod cache;
/// Blueprint to preview compositing
pub mod composite;
/// Placeholder texture for missing files
pub mod placeholder;
/// Aspect-preserving Lanczos downsampling
pub mod resample;
