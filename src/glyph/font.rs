//! Font face resolution and single-glyph rasterization
//!
//! Fonts are resolved through an ordered list of conventional bold sans-serif
//! file locations; the first candidate that exists and parses wins. When none
//! load, the built-in bitmap face takes over, so resolution never fails and
//! callers never observe a font error.

use std::fs;
use std::path::Path;

use ab_glyph::{Font, FontVec, PxScale, ScaleFont, point};

use crate::glyph::builtin::BuiltinFace;
use crate::io::configuration::FONT_CANDIDATES;

/// A rasterized glyph: coverage values plus pixel placement
///
/// Coverage is stored row-major over the glyph's pixel bounding box, with the
/// box's top-left position recorded relative to the glyph origin used during
/// rasterization. Values are in [0, 1] where 1.0 is full ink.
#[derive(Debug, Clone)]
pub struct InkPatch {
    left: i64,
    top: i64,
    width: usize,
    height: usize,
    coverage: Vec<f32>,
}

impl InkPatch {
    pub(crate) fn new(left: i64, top: i64, width: usize, height: usize) -> Self {
        Self {
            left,
            top,
            width,
            height,
            coverage: vec![0.0; width * height],
        }
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, coverage: f32) {
        if row >= self.height || col >= self.width {
            return;
        }
        if let Some(slot) = self.coverage.get_mut(row * self.width + col) {
            *slot = slot.max(coverage);
        }
    }

    /// Column of the patch's left edge relative to the glyph origin
    pub const fn left(&self) -> i64 {
        self.left
    }

    /// Row of the patch's top edge relative to the glyph origin
    pub const fn top(&self) -> i64 {
        self.top
    }

    /// Width of the glyph bounding box in pixels
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height of the glyph bounding box in pixels
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Visit every covered pixel as (row, col, coverage)
    ///
    /// Pixels with zero coverage are skipped.
    pub fn for_each_pixel(&self, mut apply: impl FnMut(usize, usize, f32)) {
        for (index, &coverage) in self.coverage.iter().enumerate() {
            if coverage > 0.0 {
                apply(index / self.width, index % self.width, coverage);
            }
        }
    }
}

/// A resolved font capability
///
/// Either an outline font loaded from one of the candidate paths, scaled to
/// the requested pixel size, or the built-in bitmap face at its fixed small
/// size.
pub enum FontFace {
    /// Outline font parsed from a candidate file
    Outline(OutlineFace),
    /// Built-in fixed-size bitmap face
    Builtin(BuiltinFace),
}

impl FontFace {
    /// Resolve a face for the given pixel size
    ///
    /// Candidates are probed in priority order, short-circuiting on the first
    /// file that exists and parses. The built-in face is the unconditional
    /// fallback, so this always succeeds.
    pub fn resolve(pixel_size: f32) -> Self {
        FONT_CANDIDATES
            .iter()
            .find_map(|path| OutlineFace::from_path(Path::new(path), pixel_size))
            .map_or(Self::Builtin(BuiltinFace), Self::Outline)
    }

    /// Rasterize one character with its origin at the given (x, baseline-y)
    ///
    /// Returns `None` when the character has no visible outline at this size
    /// (whitespace, unmapped characters, degenerate sizes).
    pub fn rasterize(&self, character: char, origin: (f32, f32)) -> Option<InkPatch> {
        match self {
            Self::Outline(face) => face.rasterize(character, origin),
            Self::Builtin(face) => face.rasterize(character, origin),
        }
    }

    /// Horizontal advance for the character in pixels
    pub fn advance(&self, character: char) -> f32 {
        match self {
            Self::Outline(face) => face.advance(character),
            Self::Builtin(face) => face.advance(character),
        }
    }

    /// Distance from the baseline to the top of the tallest glyph
    pub fn ascent(&self) -> f32 {
        match self {
            Self::Outline(face) => face.ascent(),
            Self::Builtin(face) => face.ascent(),
        }
    }
}

/// Outline font loaded from a file, fixed to one pixel size
pub struct OutlineFace {
    font: FontVec,
    scale: PxScale,
}

impl OutlineFace {
    fn from_path(path: &Path, pixel_size: f32) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        let bytes = fs::read(path).ok()?;
        let font = FontVec::try_from_vec(bytes).ok()?;
        Some(Self {
            font,
            scale: PxScale::from(pixel_size),
        })
    }

    fn rasterize(&self, character: char, origin: (f32, f32)) -> Option<InkPatch> {
        let scaled = self.font.as_scaled(self.scale);
        let glyph = scaled
            .glyph_id(character)
            .with_scale_and_position(self.scale, point(origin.0, origin.1));

        let outlined = scaled.outline_glyph(glyph)?;
        let bounds = outlined.px_bounds();
        let width = (bounds.max.x - bounds.min.x).ceil() as usize;
        let height = (bounds.max.y - bounds.min.y).ceil() as usize;
        if width == 0 || height == 0 {
            return None;
        }

        let mut patch = InkPatch::new(
            bounds.min.x.floor() as i64,
            bounds.min.y.floor() as i64,
            width,
            height,
        );
        outlined.draw(|x, y, coverage| {
            patch.set(y as usize, x as usize, coverage.clamp(0.0, 1.0));
        });

        Some(patch)
    }

    fn advance(&self, character: char) -> f32 {
        let scaled = self.font.as_scaled(self.scale);
        scaled.h_advance(scaled.glyph_id(character))
    }

    fn ascent(&self) -> f32 {
        self.font.as_scaled(self.scale).ascent()
    }
}
