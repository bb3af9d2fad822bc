//! Deterministic pixel geometry for the four-panel figure
//!
//! All geometry derives from the shared panel dimensions and the ratios in
//! `io::configuration`: outer margins and inter-panel gaps scale with panel
//! width, the label band with panel height. Identical panel dimensions always
//! produce identical layouts.

use crate::io::configuration::{
    FIGURE_MARGIN_RATIO, LABEL_BAND_RATIO, LABEL_BASELINE_RATIO, LABEL_FONT_RATIO, PANEL_COUNT,
    PANEL_GAP_RATIO,
};

/// Computed pixel geometry of the assembled figure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FigureLayout {
    /// Total figure height in pixels
    pub figure_height: usize,
    /// Total figure width in pixels
    pub figure_width: usize,
    /// Outer margin on every side
    pub margin: usize,
    /// Horizontal gap between adjacent panels
    pub gap: usize,
    /// Height of the label band above the panels
    pub label_band: usize,
    /// Label font pixel size, rounded to whole pixels
    pub label_size: usize,
    /// Baseline row for label glyphs
    pub label_baseline: usize,
    /// Top-left (row, col) of each panel, left to right
    pub panel_origins: [(usize, usize); PANEL_COUNT],
    /// Column each label is centered on, left to right
    pub label_centers: [usize; PANEL_COUNT],
}

impl FigureLayout {
    /// Compute the layout for four panels of the given shape
    pub fn compute(panel_height: usize, panel_width: usize) -> Self {
        let margin = scaled(panel_width, FIGURE_MARGIN_RATIO);
        let gap = scaled(panel_width, PANEL_GAP_RATIO);
        let label_band = scaled(panel_height, LABEL_BAND_RATIO);

        let figure_width = 2 * margin + PANEL_COUNT * panel_width + (PANEL_COUNT - 1) * gap;
        let figure_height = 2 * margin + label_band + panel_height;

        let panel_top = margin + label_band;
        let panel_origins =
            std::array::from_fn(|index| (panel_top, margin + index * (panel_width + gap)));
        let label_centers = std::array::from_fn(|index| {
            margin + index * (panel_width + gap) + panel_width / 2
        });

        Self {
            figure_height,
            figure_width,
            margin,
            gap,
            label_band,
            label_size: scaled(label_band, LABEL_FONT_RATIO),
            label_baseline: margin + scaled(label_band, LABEL_BASELINE_RATIO),
            panel_origins,
            label_centers,
        }
    }
}

/// Round a ratio of a base dimension to whole pixels
fn scaled(base: usize, ratio: f32) -> usize {
    (base as f32 * ratio).round() as usize
}
