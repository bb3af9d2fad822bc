//! Defaults, font candidates, labels, and layout constants

/// Letter rendered into the selection mask by default
pub const DEFAULT_LETTER: char = 'S';

/// Default font size as a fraction of panel height
pub const DEFAULT_FONT_SIZE_RATIO: f32 = 0.9;

/// Default mask cutoff below which stipples are erased
pub const DEFAULT_MASK_THRESHOLD: f32 = 0.5;

/// Full-scale value of the 8-bit pixel encoding
pub const MAX_INTENSITY: f32 = 255.0;

/// Bold sans-serif font locations probed in priority order
pub const FONT_CANDIDATES: [&str; 3] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf", // Linux
    "/Library/Fonts/Arial Bold.ttf",                        // macOS
    "C:/Windows/Fonts/arialbd.ttf",                         // Windows
];

/// Number of panels in the assembled figure
pub const PANEL_COUNT: usize = 4;

/// Panel captions, left to right
pub const PANEL_LABELS: [&str; PANEL_COUNT] =
    ["Reality", "Your Model", "Selection Bias", "Estimate"];

/// Horizontal gap between panels as a fraction of panel width
pub const PANEL_GAP_RATIO: f32 = 0.15;

/// Outer figure margin as a fraction of panel width
pub const FIGURE_MARGIN_RATIO: f32 = 0.05;

/// Label band height as a fraction of panel height
pub const LABEL_BAND_RATIO: f32 = 0.22;

/// Label font size as a fraction of the label band
pub const LABEL_FONT_RATIO: f32 = 0.6;

/// Label baseline position as a fraction of the label band
pub const LABEL_BASELINE_RATIO: f32 = 0.8;

// Output settings
/// Suffix added to the figure output filename
pub const OUTPUT_SUFFIX: &str = "_meme";
/// Suffix added to the exported mask filename
pub const MASK_SUFFIX: &str = "_mask";
/// Suffix added to the exported masked-stipple filename
pub const MASKED_SUFFIX: &str = "_masked";
