//! Single-line label measurement and drawing
//!
//! Labels are short fixed strings laid out by per-glyph horizontal advance;
//! there is no wrapping, shaping, or styling. Glyphs are stamped at the
//! placement the face rasterized them with, so bearings and the baseline come
//! out the same way the mask glyph does.

use crate::glyph::FontFace;
use crate::raster::Canvas;

/// Total advance width of a label in pixels
pub fn label_width(face: &FontFace, text: &str) -> f32 {
    text.chars().map(|character| face.advance(character)).sum()
}

/// Draw a label centered on a column with its baseline on a row
///
/// Characters without a visible glyph still advance the pen, so spacing
/// inside labels with blanks is preserved. Ink outside the canvas is clipped.
pub fn draw_label(
    canvas: &mut Canvas,
    face: &FontFace,
    text: &str,
    center_col: usize,
    baseline_row: usize,
) {
    let total_width = label_width(face, text);
    let mut pen = center_col as f32 - total_width / 2.0;
    let baseline = baseline_row as f32;

    for character in text.chars() {
        if let Some(patch) = face.rasterize(character, (pen, baseline)) {
            canvas.stamp_placed(&patch);
        }
        pen += face.advance(character);
    }
}
