//! Texture catalog loading
//!
//! Candidates are filtered by name, validated for shape and opacity, and
//! reduced to their average color.

/// Palette types and the directory loader
pub mod palette;
/// Whitelist and blacklist name rules
pub mod rules;
/// Candidate classification and color extraction
pub mod swatch;
