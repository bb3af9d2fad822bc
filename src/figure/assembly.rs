//! Panel and label composition onto a single canvas

use crate::figure::labels::draw_label;
use crate::figure::layout::FigureLayout;
use crate::glyph::FontFace;
use crate::io::configuration::PANEL_COUNT;
use crate::io::error::{CompositionError, Result};
use crate::raster::{Canvas, Raster};

/// Assemble four panels and their labels into one figure raster
///
/// Panels are blitted left to right onto a white background with the layout
/// computed from their shared dimensions; labels are drawn centered over each
/// panel in the band above, using the same font-resolution chain as the mask
/// glyph. The figure is returned as a normalized raster so it exports through
/// the same path as any other raster.
///
/// # Errors
///
/// Returns [`CompositionError::ShapeMismatch`] when the panels do not all
/// share one shape, reporting the first panel's shape and the offending one.
pub fn assemble_figure(
    panels: &[Raster; PANEL_COUNT],
    labels: &[&str; PANEL_COUNT],
) -> Result<Raster> {
    let mut shapes = panels.iter().map(Raster::dimensions);
    let Some(panel_shape) = shapes.next() else {
        return Err(CompositionError::InvalidParameter {
            parameter: "panels",
            value: String::new(),
            reason: "no panels supplied".to_string(),
        });
    };
    for shape in shapes {
        if shape != panel_shape {
            return Err(CompositionError::ShapeMismatch {
                expected: panel_shape,
                actual: shape,
            });
        }
    }

    let layout = FigureLayout::compute(panel_shape.0, panel_shape.1);
    let mut canvas = Canvas::new(layout.figure_height, layout.figure_width);
    let face = FontFace::resolve(layout.label_size as f32);

    for (index, panel) in panels.iter().enumerate() {
        if let Some(&(row, col)) = layout.panel_origins.get(index) {
            canvas.blit(panel, row, col);
        }
        if let (Some(&label), Some(&center)) = (labels.get(index), layout.label_centers.get(index)) {
            draw_label(&mut canvas, &face, label, center, layout.label_baseline);
        }
    }

    Ok(canvas.into_raster())
}
