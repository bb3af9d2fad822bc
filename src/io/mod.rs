//! Input/output operations and error handling

/// Command-line interface and pipeline orchestration
pub mod cli;
/// Defaults, font candidates, labels, and layout constants
pub mod configuration;
/// Error types for composition operations
pub mod error;
/// PNG loading and export for rasters
pub mod image;
