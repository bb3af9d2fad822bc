//! Tests for single-line label measurement and drawing

#[cfg(test)]
mod tests {
    use stipplemask::figure::labels::{draw_label, label_width};
    use stipplemask::glyph::FontFace;
    use stipplemask::raster::Canvas;

    #[test]
    fn test_label_width_accumulates_per_character_advances() {
        let face = FontFace::resolve(16.0);

        let single = label_width(&face, "S");
        let double = label_width(&face, "SS");

        assert!(single > 0.0);
        assert!((double - 2.0 * single).abs() < 0.01);
    }

    #[test]
    fn test_empty_label_has_zero_width_and_draws_nothing() {
        let face = FontFace::resolve(16.0);
        assert!(label_width(&face, "").abs() < f32::EPSILON);

        let mut canvas = Canvas::new(30, 60);
        draw_label(&mut canvas, &face, "", 30, 20);
        let raster = canvas.into_raster();

        assert!(
            raster
                .pixels()
                .iter()
                .all(|&value| (value - 1.0).abs() < f32::EPSILON)
        );
    }

    #[test]
    fn test_drawn_label_leaves_ink_near_the_center() {
        let face = FontFace::resolve(14.0);
        let mut canvas = Canvas::new(40, 120);
        draw_label(&mut canvas, &face, "Reality", 60, 30);
        let raster = canvas.into_raster();

        let darkest = raster.pixels().iter().copied().fold(f32::MAX, f32::min);
        assert!(darkest < 0.5, "Label should leave ink, got {darkest}");

        let mut min_col = usize::MAX;
        let mut max_col = 0;
        for ((_, col), &value) in raster.pixels().indexed_iter() {
            if value < 1.0 {
                min_col = min_col.min(col);
                max_col = max_col.max(col);
            }
        }
        let center = usize::midpoint(min_col, max_col);
        assert!(
            center.abs_diff(60) <= 4,
            "Ink should center near column 60, got {center}"
        );
    }

    #[test]
    fn test_label_ink_is_clipped_at_canvas_bounds() {
        let face = FontFace::resolve(14.0);
        let mut canvas = Canvas::new(10, 10);
        draw_label(&mut canvas, &face, "Selection Bias", 5, 8);
        let raster = canvas.into_raster();

        assert_eq!(raster.dimensions(), (10, 10));
        assert!(
            raster
                .pixels()
                .iter()
                .all(|&value| (0.0..=1.0).contains(&value))
        );
    }
}
