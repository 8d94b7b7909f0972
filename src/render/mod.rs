//! Glyph emission: turning a laid-out run into draw calls on a surface.
//!
//! The `DrawTarget` trait abstracts the drawing surface so the same engine
//! drives character-cell grids, raster images, or any external device. Two
//! implementations ship with the crate: `CellSurface` (tests and debug
//! dumps) and `RasterSurface` (RGBA image buffer).

pub mod cell;
pub mod raster;

use crate::config::Config;
use crate::error::AnnotateError;
use crate::layout::metrics::Typeface;
use crate::layout::{self, Extent, PositionedGlyph};
use crate::scanner;
use crate::style::TextStyle;

/// A drawing surface accepting one glyph at a time.
///
/// The engine assumes exclusive access to the surface for the duration of
/// one annotation call; callers serialize access across threads.
pub trait DrawTarget {
    /// Draw one positioned glyph. A rejected draw (closed or invalid
    /// target) aborts the remaining run; glyphs already drawn stay put.
    fn draw_glyph(&mut self, glyph: &PositionedGlyph) -> Result<(), AnnotateError>;
}

/// Issue one draw call per glyph, stopping at the first rejection.
pub fn emit(glyphs: &[PositionedGlyph], surface: &mut dyn DrawTarget) -> Result<(), AnnotateError> {
    for glyph in glyphs {
        surface.draw_glyph(glyph)?;
    }
    Ok(())
}

/// Render one annotation string at `origin` and report its extent.
///
/// Runs scan, layout, and emission to completion; the only failure mode is
/// a surface rejecting a draw mid-run, in which case glyphs drawn before
/// the failure are not rolled back.
pub fn annotate(
    surface: &mut dyn DrawTarget,
    origin: (f32, f32),
    face: &Typeface,
    style: &TextStyle,
    config: &Config,
    text: &str,
) -> Result<Extent, AnnotateError> {
    let tokens = scanner::scan(text, config);
    let mut run = layout::layout(tokens, face, style, config);
    for glyph in &mut run.glyphs {
        glyph.x += origin.0;
        glyph.y += origin.1;
    }
    emit(&run.glyphs, surface)?;
    Ok(run.extent)
}

/// Measure an annotation string without drawing anything. Callers use this
/// for alignment (centring a title, right-justifying an axis label).
pub fn measure(face: &Typeface, style: &TextStyle, config: &Config, text: &str) -> Extent {
    let tokens = scanner::scan(text, config);
    layout::layout(tokens, face, style, config).extent
}
