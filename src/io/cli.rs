//! Command-line interface for composing a selection bias figure
//!
//! Consumes two precomputed inputs, a grayscale "reality" image and its
//! stippled rendering, and runs the pipeline: render the letter mask at the
//! stipple's dimensions, erase the masked region, assemble the four labeled
//! panels, export one PNG.

use crate::compositing::apply_mask;
use crate::figure::assemble_figure;
use crate::glyph::render_block_letter;
use crate::io::configuration::{
    DEFAULT_FONT_SIZE_RATIO, DEFAULT_LETTER, DEFAULT_MASK_THRESHOLD, MASK_SUFFIX, MASKED_SUFFIX,
    OUTPUT_SUFFIX, PANEL_LABELS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{export_raster, load_raster};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "stipplemask")]
#[command(
    author,
    version,
    about = "Compose a four-panel selection bias figure from stippled images"
)]
/// Command-line arguments for the figure composition tool
pub struct Cli {
    /// Grayscale source image shown in the Reality panel
    #[arg(value_name = "REALITY")]
    pub reality: PathBuf,

    /// Stippled rendering of the source shown in the Your Model panel
    #[arg(value_name = "STIPPLE")]
    pub stipple: PathBuf,

    /// Output path (defaults to the stipple filename with a suffix)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Letter rendered into the selection mask
    #[arg(short, long, default_value_t = DEFAULT_LETTER)]
    pub letter: char,

    /// Font size as a fraction of the panel height
    #[arg(short, long, default_value_t = DEFAULT_FONT_SIZE_RATIO)]
    pub font_size_ratio: f32,

    /// Mask cutoff below which stipples are erased
    #[arg(short, long, default_value_t = DEFAULT_MASK_THRESHOLD)]
    pub threshold: f32,

    /// Also export the mask and masked-stipple panels beside the output
    #[arg(short, long)]
    pub intermediates: bool,

    /// Suppress status output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Orchestrates the composition pipeline for one pair of inputs
pub struct MemeComposer {
    cli: Cli,
}

impl MemeComposer {
    /// Create a composer from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the full pipeline: load, mask, composite, assemble, export
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, input loading, compositing,
    /// assembly, or export fails.
    // Allow print for user feedback on completion
    #[allow(clippy::print_stderr)]
    pub fn compose(&self) -> Result<()> {
        self.validate()?;

        let reality = load_raster(&self.cli.reality)?;
        let stipple = load_raster(&self.cli.stipple)?;

        let (height, width) = stipple.dimensions();
        let mask = render_block_letter(height, width, self.cli.letter, self.cli.font_size_ratio)?;
        let estimate = apply_mask(&stipple, &mask, self.cli.threshold)?;

        if self.cli.intermediates {
            export_raster(&mask, &path_as_str(&self.derived_path(MASK_SUFFIX))?)?;
            export_raster(&estimate, &path_as_str(&self.derived_path(MASKED_SUFFIX))?)?;
        }

        let figure = assemble_figure(&[reality, stipple, mask, estimate], &PANEL_LABELS)?;

        let output_path = self.output_path();
        export_raster(&figure, &path_as_str(&output_path)?)?;

        if !self.cli.quiet {
            eprintln!("Statistics meme saved to: {}", output_path.display());
        }

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.cli.threshold) {
            return Err(invalid_parameter(
                "threshold",
                &self.cli.threshold,
                &"must lie in [0, 1]",
            ));
        }
        if !(self.cli.font_size_ratio.is_finite() && self.cli.font_size_ratio > 0.0) {
            return Err(invalid_parameter(
                "font-size-ratio",
                &self.cli.font_size_ratio,
                &"must be a positive fraction of the panel height",
            ));
        }
        if self.cli.letter.is_control() {
            return Err(invalid_parameter(
                "letter",
                &self.cli.letter.escape_default(),
                &"must be a printable symbol",
            ));
        }
        Ok(())
    }

    /// Figure output path: explicit `--output`, or the stipple filename with
    /// the figure suffix
    pub fn output_path(&self) -> PathBuf {
        self.cli
            .output
            .clone()
            .unwrap_or_else(|| self.derived_path(OUTPUT_SUFFIX))
    }

    fn derived_path(&self, suffix: &str) -> PathBuf {
        let stem = self.cli.stipple.file_stem().unwrap_or_default();
        let name = format!("{}{suffix}.png", stem.to_string_lossy());

        self.cli
            .stipple
            .parent()
            .map_or_else(|| PathBuf::from(&name), |parent| parent.join(&name))
    }
}

fn path_as_str(path: &Path) -> Result<String> {
    path.to_str().map_or_else(
        || {
            Err(invalid_parameter(
                "path",
                &path.to_string_lossy(),
                &"path is not valid UTF-8",
            ))
        },
        |value| Ok(value.to_string()),
    )
}
