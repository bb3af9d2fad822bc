//! Tests for font resolution and glyph patch rasterization

#[cfg(test)]
mod tests {
    use stipplemask::glyph::FontFace;

    // Resolution must succeed on any machine: either a candidate font loads
    // or the builtin face takes over
    #[test]
    fn test_resolution_always_yields_a_usable_face() {
        let face = FontFace::resolve(48.0);

        let patch = face
            .rasterize('S', (0.0, 48.0))
            .expect("A resolved face should rasterize 'S'");
        assert!(patch.width() > 0);
        assert!(patch.height() > 0);
    }

    #[test]
    fn test_coverage_values_stay_in_unit_interval() {
        let face = FontFace::resolve(32.0);
        let patch = face
            .rasterize('g', (0.0, 32.0))
            .expect("A resolved face should rasterize 'g'");

        patch.for_each_pixel(|row, col, coverage| {
            assert!(
                (0.0..=1.0).contains(&coverage),
                "Coverage at ({row}, {col}) out of range: {coverage}"
            );
            assert!(row < patch.height());
            assert!(col < patch.width());
        });
    }

    #[test]
    fn test_metrics_are_positive_for_letters() {
        let face = FontFace::resolve(24.0);

        assert!(face.advance('S') > 0.0);
        assert!(face.ascent() > 0.0);
    }

    #[test]
    fn test_rasterization_is_deterministic() {
        let face = FontFace::resolve(40.0);

        let mut first = Vec::new();
        if let Some(patch) = face.rasterize('B', (0.0, 40.0)) {
            patch.for_each_pixel(|row, col, coverage| first.push((row, col, coverage.to_bits())));
        }

        let mut second = Vec::new();
        if let Some(patch) = face.rasterize('B', (0.0, 40.0)) {
            patch.for_each_pixel(|row, col, coverage| second.push((row, col, coverage.to_bits())));
        }

        assert!(!first.is_empty(), "'B' should produce ink");
        assert_eq!(first, second);
    }
}
