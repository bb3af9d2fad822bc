//! Tests for block letter rendering contracts

#[cfg(test)]
mod tests {
    use stipplemask::glyph::render_block_letter;
    use stipplemask::io::error::CompositionError;

    #[test]
    fn test_output_shape_matches_request_exactly() {
        let raster = render_block_letter(37, 61, 'S', 0.9).expect("Rendering should succeed");
        assert_eq!(raster.dimensions(), (37, 61));
    }

    #[test]
    fn test_values_are_normalized_into_unit_interval() {
        let raster = render_block_letter(48, 48, 'Q', 0.9).expect("Rendering should succeed");
        assert!(
            raster
                .pixels()
                .iter()
                .all(|&value| (0.0..=1.0).contains(&value))
        );
    }

    #[test]
    fn test_zero_height_fails() {
        assert!(matches!(
            render_block_letter(0, 10, 'S', 0.9),
            Err(CompositionError::InvalidDimension { dimension: "height", .. })
        ));
    }

    #[test]
    fn test_zero_width_fails() {
        assert!(matches!(
            render_block_letter(10, 0, 'S', 0.9),
            Err(CompositionError::InvalidDimension { dimension: "width", .. })
        ));
    }

    // A degenerate point size renders an empty canvas rather than failing
    #[test]
    fn test_vanishing_font_ratio_renders_blank() {
        let raster = render_block_letter(20, 20, 'S', 0.01).expect("Rendering should succeed");

        assert!(
            raster
                .pixels()
                .iter()
                .all(|&value| (value - 1.0).abs() < f32::EPSILON),
            "A sub-pixel point size should leave the canvas blank"
        );
    }

    #[test]
    fn test_single_pixel_canvas_is_supported() {
        let raster = render_block_letter(1, 1, 'S', 0.9).expect("Rendering should succeed");
        assert_eq!(raster.dimensions(), (1, 1));
    }
}
