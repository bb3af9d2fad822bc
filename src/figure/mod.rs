//! Four-panel figure layout, labeling, and assembly

/// Panel and label composition onto a single canvas
pub mod assembly;
/// Single-line label measurement and drawing
pub mod labels;
/// Deterministic pixel geometry for the four-panel figure
pub mod layout;

pub use assembly::assemble_figure;
pub use layout::FigureLayout;
