//! PNG loading and export for rasters

use image::{GrayImage, Luma};
use ndarray::Array2;
use std::path::Path;

use crate::io::configuration::MAX_INTENSITY;
use crate::io::error::{CompositionError, Result};
use crate::raster::Raster;
use crate::raster::canvas::quantize;

/// Load an image file as a normalized grayscale raster
///
/// Any color type the decoder understands is accepted and converted to 8-bit
/// grayscale, then linearly scaled into [0, 1].
///
/// # Errors
///
/// Returns an error if the file cannot be opened, read, or decoded.
pub fn load_raster<P: AsRef<Path>>(path: P) -> Result<Raster> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| CompositionError::ImageLoad {
        path: path_buf,
        source: e,
    })?;

    let luma = img.to_luma8();
    let (width, height) = luma.dimensions();

    let mut pixels = Array2::zeros((height as usize, width as usize));
    for (x, y, pixel) in luma.enumerate_pixels() {
        let value = pixel.0.first().copied().unwrap_or(u8::MAX);
        if let Some(slot) = pixels.get_mut((y as usize, x as usize)) {
            *slot = f32::from(value) / MAX_INTENSITY;
        }
    }

    Ok(Raster::from_pixels(pixels))
}

/// Export a raster as an 8-bit grayscale PNG
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_raster(raster: &Raster, output_path: &str) -> Result<()> {
    let (height, width) = raster.dimensions();

    let img = GrayImage::from_fn(width as u32, height as u32, |x, y| {
        Luma([raster
            .get(y as usize, x as usize)
            .map_or(u8::MAX, quantize)])
    });

    if let Some(parent) = Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| CompositionError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| CompositionError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}
