//! Threshold-based mask compositing over stippled rasters

/// Thresholded merge of a stipple raster and a mask raster
pub mod threshold;

pub use threshold::apply_mask;
