/// Per-image conversion with a shared palette
pub mod converter;
