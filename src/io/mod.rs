/// Command-line parsing and batch processing
pub mod cli;
/// Built-in rule lists and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Blueprint tables and preview files
pub mod export;
/// Progress display
pub mod progress;
/// Localized block names
pub mod translation;
