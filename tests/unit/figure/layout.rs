//! Tests for figure geometry computation

#[cfg(test)]
mod tests {
    use stipplemask::figure::FigureLayout;
    use stipplemask::io::configuration::PANEL_COUNT;

    #[test]
    fn test_figure_dimensions_follow_the_layout_formula() {
        let layout = FigureLayout::compute(100, 100);

        assert_eq!(
            layout.figure_width,
            2 * layout.margin + PANEL_COUNT * 100 + (PANEL_COUNT - 1) * layout.gap
        );
        assert_eq!(
            layout.figure_height,
            2 * layout.margin + layout.label_band + 100
        );
    }

    #[test]
    fn test_panels_are_evenly_spaced_left_to_right() {
        let layout = FigureLayout::compute(80, 120);

        let mut previous: Option<(usize, usize)> = None;
        for &(row, col) in &layout.panel_origins {
            assert_eq!(row, layout.margin + layout.label_band);
            if let Some((_, previous_col)) = previous {
                assert_eq!(col - previous_col, 120 + layout.gap);
            }
            previous = Some((row, col));
        }
    }

    #[test]
    fn test_panels_fit_inside_the_figure() {
        let layout = FigureLayout::compute(64, 64);

        for &(row, col) in &layout.panel_origins {
            assert!(row + 64 <= layout.figure_height);
            assert!(col + 64 <= layout.figure_width);
        }
    }

    #[test]
    fn test_label_centers_sit_over_their_panels() {
        let layout = FigureLayout::compute(100, 100);

        for (&center, &(_, col)) in layout.label_centers.iter().zip(&layout.panel_origins) {
            assert!(center >= col);
            assert!(center < col + 100);
        }
    }

    #[test]
    fn test_label_baseline_lies_within_the_band() {
        let layout = FigureLayout::compute(100, 100);

        assert!(layout.label_baseline >= layout.margin);
        assert!(layout.label_baseline <= layout.margin + layout.label_band);
        assert!(layout.label_size > 0);
        assert!(layout.label_size <= layout.label_band);
    }

    #[test]
    fn test_layout_is_deterministic() {
        assert_eq!(FigureLayout::compute(90, 50), FigureLayout::compute(90, 50));
    }
}
