//! Mutable 8-bit drawing surface with glyph stamping and panel blitting
//!
//! All drawing in the crate goes through an explicit canvas value rather than
//! any shared drawing context. A canvas starts as uniform background (255),
//! accumulates ink through guarded writes, and is converted exactly once into
//! an immutable [`Raster`] by linear normalization.

use ndarray::Array2;

use crate::glyph::font::InkPatch;
use crate::io::configuration::MAX_INTENSITY;
use crate::raster::Raster;

/// Background-filled 8-bit drawing surface
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: Array2<u8>,
}

impl Canvas {
    /// Create a background-filled canvas of the given shape
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            pixels: Array2::from_elem((height, width), u8::MAX),
        }
    }

    /// Canvas shape as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.pixels.dim()
    }

    /// Stamp a rasterized glyph with its top-left corner at (row, col)
    ///
    /// Coverage blends by darkening only, so overlapping stamps never lighten
    /// existing ink. Pixels falling outside the canvas are clipped; the canvas
    /// shape never changes.
    pub fn stamp(&mut self, patch: &InkPatch, row: i64, col: i64) {
        patch.for_each_pixel(|patch_row, patch_col, coverage| {
            let target_row = row + patch_row as i64;
            let target_col = col + patch_col as i64;
            if target_row < 0 || target_col < 0 {
                return;
            }

            let ink = coverage.mul_add(-MAX_INTENSITY, MAX_INTENSITY).round() as u8;
            if let Some(pixel) = self
                .pixels
                .get_mut((target_row as usize, target_col as usize))
            {
                *pixel = (*pixel).min(ink);
            }
        });
    }

    /// Stamp a rasterized glyph at the placement it was rasterized with
    pub fn stamp_placed(&mut self, patch: &InkPatch) {
        self.stamp(patch, patch.top(), patch.left());
    }

    /// Copy a raster onto the canvas with its top-left corner at (row, col)
    ///
    /// Values are quantized to 8 bits and replace existing canvas content.
    /// Out-of-bounds pixels are clipped.
    pub fn blit(&mut self, raster: &Raster, row: usize, col: usize) {
        for ((source_row, source_col), &value) in raster.pixels().indexed_iter() {
            if let Some(pixel) = self.pixels.get_mut((row + source_row, col + source_col)) {
                *pixel = quantize(value);
            }
        }
    }

    /// Consume the canvas, normalizing 0-255 intensities into a [0, 1] raster
    pub fn into_raster(self) -> Raster {
        Raster::from_pixels(self.pixels.mapv(|value| f32::from(value) / MAX_INTENSITY))
    }
}

/// Quantize a normalized intensity to its 8-bit encoding
pub fn quantize(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * MAX_INTENSITY).round() as u8
}
