//! Immutable normalized grayscale raster grids
//!
//! A raster is a fixed-shape 2D grid of intensities in [0, 1] where 0.0 is
//! fully inked and 1.0 is background. Rasters are immutable once produced;
//! every transformation allocates a fresh output.

use ndarray::Array2;

use crate::io::error::{CompositionError, Result};

/// Fixed-size 2D grid of pixel intensities in [0, 1]
///
/// Backed by a row-major `Array2<f32>` indexed as (row, col). The type exposes
/// no mutable access; producers build pixels up front and wrap them once.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    pixels: Array2<f32>,
}

impl Raster {
    /// Create a raster of the given shape with every element set to `value`
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::InvalidDimension`] if `height` or `width`
    /// is zero.
    pub fn filled(height: usize, width: usize, value: f32) -> Result<Self> {
        if height == 0 {
            return Err(CompositionError::InvalidDimension {
                dimension: "height",
                value: height,
            });
        }
        if width == 0 {
            return Err(CompositionError::InvalidDimension {
                dimension: "width",
                value: width,
            });
        }

        Ok(Self {
            pixels: Array2::from_elem((height, width), value),
        })
    }

    /// Wrap an already-normalized pixel grid
    ///
    /// The caller is responsible for supplying values in [0, 1]; producers in
    /// this crate normalize from 8-bit encodings before wrapping.
    pub const fn from_pixels(pixels: Array2<f32>) -> Self {
        Self { pixels }
    }

    /// Grid shape as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.pixels.dim()
    }

    /// Number of rows in the grid
    pub fn rows(&self) -> usize {
        self.pixels.nrows()
    }

    /// Number of columns in the grid
    pub fn cols(&self) -> usize {
        self.pixels.ncols()
    }

    /// Intensity at (row, col), or `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        self.pixels.get((row, col)).copied()
    }

    /// Borrow the underlying pixel grid
    pub const fn pixels(&self) -> &Array2<f32> {
        &self.pixels
    }

    /// Consume the raster, yielding the underlying pixel grid
    pub fn into_pixels(self) -> Array2<f32> {
        self.pixels
    }
}
