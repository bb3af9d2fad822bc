//! Thresholded merge of a stipple raster and a mask raster

use ndarray::Zip;

use crate::io::error::{CompositionError, Result};
use crate::raster::Raster;

/// Erase the masked-out region of a stippled raster
///
/// For every cell, a mask value strictly below `threshold` forces the output
/// to 1.0 (pure background, stipple content erased); all other cells pass the
/// stipple value through unchanged. The comparison is strict less-than, so a
/// mask value exactly equal to the threshold passes through; this tie-break
/// is part of the output contract. The operation is element-wise with no
/// ordering between cells, and neither input is mutated.
///
/// # Errors
///
/// Returns [`CompositionError::ShapeMismatch`] carrying both shapes when the
/// inputs disagree. There is no coercion or broadcasting; the check fails
/// before any output is produced.
pub fn apply_mask(stipple: &Raster, mask: &Raster, threshold: f32) -> Result<Raster> {
    if stipple.dimensions() != mask.dimensions() {
        return Err(CompositionError::ShapeMismatch {
            expected: stipple.dimensions(),
            actual: mask.dimensions(),
        });
    }

    let merged = Zip::from(stipple.pixels())
        .and(mask.pixels())
        .map_collect(|&stipple_value, &mask_value| {
            if mask_value < threshold {
                1.0
            } else {
                stipple_value
            }
        });

    Ok(Raster::from_pixels(merged))
}
