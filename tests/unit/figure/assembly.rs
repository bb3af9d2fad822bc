//! Tests for four-panel figure assembly

#[cfg(test)]
mod tests {
    use stipplemask::figure::{FigureLayout, assemble_figure};
    use stipplemask::io::configuration::PANEL_LABELS;
    use stipplemask::io::error::CompositionError;
    use stipplemask::raster::Raster;

    fn gray_panels(value: f32) -> [Raster; 4] {
        std::array::from_fn(|_| Raster::filled(20, 20, value).expect("Valid dimensions"))
    }

    #[test]
    fn test_figure_has_the_layout_dimensions() {
        let figure =
            assemble_figure(&gray_panels(0.5), &PANEL_LABELS).expect("Assembly should succeed");

        let layout = FigureLayout::compute(20, 20);
        assert_eq!(
            figure.dimensions(),
            (layout.figure_height, layout.figure_width)
        );
    }

    #[test]
    fn test_panel_interiors_carry_their_values() {
        let figure =
            assemble_figure(&gray_panels(0.0), &PANEL_LABELS).expect("Assembly should succeed");

        let layout = FigureLayout::compute(20, 20);
        for &(row, col) in &layout.panel_origins {
            let center = figure
                .get(row + 10, col + 10)
                .expect("Panel center lies inside the figure");
            assert!(
                center < f32::EPSILON,
                "Panel interior should keep its value, got {center}"
            );
        }
    }

    #[test]
    fn test_margins_stay_background() {
        let figure =
            assemble_figure(&gray_panels(0.0), &PANEL_LABELS).expect("Assembly should succeed");

        let corner = figure.get(0, 0).expect("Corner pixel exists");
        assert!((corner - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_labels_leave_ink_in_the_band() {
        let panels: [Raster; 4] =
            std::array::from_fn(|_| Raster::filled(100, 100, 1.0).expect("Valid dimensions"));
        let figure = assemble_figure(&panels, &PANEL_LABELS).expect("Assembly should succeed");

        let layout = FigureLayout::compute(100, 100);
        let band_rows = layout.margin..layout.margin + layout.label_band;
        let mut darkest = f32::MAX;
        for row in band_rows {
            for col in 0..layout.figure_width {
                if let Some(value) = figure.get(row, col) {
                    darkest = darkest.min(value);
                }
            }
        }

        assert!(
            darkest < 0.5,
            "Label band should contain label ink, got {darkest}"
        );
    }

    #[test]
    fn test_mismatched_panels_fail_with_both_shapes() {
        let mut panels = gray_panels(0.5);
        if let Some(last) = panels.last_mut() {
            *last = Raster::filled(10, 10, 0.5).expect("Valid dimensions");
        }

        match assemble_figure(&panels, &PANEL_LABELS) {
            Err(CompositionError::ShapeMismatch { expected, actual }) => {
                assert_eq!(expected, (20, 20));
                assert_eq!(actual, (10, 10));
            }
            _ => unreachable!("Expected ShapeMismatch error"),
        }
    }

    #[test]
    fn test_figure_values_stay_normalized() {
        let figure =
            assemble_figure(&gray_panels(0.37), &PANEL_LABELS).expect("Assembly should succeed");

        assert!(
            figure
                .pixels()
                .iter()
                .all(|&value| (0.0..=1.0).contains(&value))
        );
    }
}
