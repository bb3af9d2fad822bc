//! Block letter rendering into normalized rasters

use crate::glyph::font::FontFace;
use crate::io::error::{CompositionError, Result};
use crate::raster::{Canvas, Raster};

/// Render a single character as a centered block letter
///
/// Allocates a background-filled canvas of exactly (`height`, `width`), picks
/// a font at a point size of `height * font_size_ratio` (truncated to a whole
/// pixel count), and stamps the glyph with its bounding box centered in the
/// canvas. Centering offsets use integer-truncated division, so an odd
/// difference between canvas and bounding box leaves a one-pixel asymmetry;
/// this placement is part of the output contract and is kept as-is.
///
/// Ink is drawn at intensity 0 with anti-aliased edges, then the 0-255 canvas
/// is linearly normalized so the result holds values in [0, 1] with 1.0
/// background. A character with no visible outline (whitespace, characters
/// the fallback face does not cover, degenerate point sizes) leaves the
/// canvas blank rather than failing. Glyphs larger than the canvas are
/// clipped at the edges; the output shape never changes.
///
/// # Errors
///
/// Returns [`CompositionError::InvalidDimension`] if `height` or `width` is
/// zero. Font availability is never an error: resolution falls back to the
/// built-in face.
pub fn render_block_letter(
    height: usize,
    width: usize,
    character: char,
    font_size_ratio: f32,
) -> Result<Raster> {
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

    let mut canvas = Canvas::new(height, width);

    // Point size estimated from image height, truncated like an integer count
    let point_size = (height as f32 * font_size_ratio).trunc();
    if point_size >= 1.0 {
        let face = FontFace::resolve(point_size);
        if let Some(patch) = face.rasterize(character, (0.0, 0.0)) {
            let row = (height as i64 - patch.height() as i64) / 2;
            let col = (width as i64 - patch.width() as i64) / 2;
            canvas.stamp(&patch, row, col);
        }
    }

    Ok(canvas.into_raster())
}
