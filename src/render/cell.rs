//! Character-cell surface: an in-memory grid of cells.
//!
//! Snaps glyph positions to the nearest cell, so device units are cell
//! units here. Useful for tests and quick debug dumps of a layout; scale
//! and rotation only influence positions, not cell content.

use std::fmt;

use unicode_width::UnicodeWidthChar;

use crate::error::AnnotateError;
use crate::layout::{GlyphId, PositionedGlyph};
use crate::render::DrawTarget;

pub struct CellSurface {
    cols: usize,
    rows: usize,
    cells: Vec<char>,
    closed: bool,
}

impl CellSurface {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![' '; cols * rows],
            closed: false,
        }
    }

    /// Mark the surface closed; further draws are rejected.
    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<char> {
        (col < self.cols && row < self.rows).then(|| self.cells[row * self.cols + col])
    }

    /// One row of the grid as a string, top row first.
    pub fn row_text(&self, row: usize) -> String {
        self.cells[row * self.cols..(row + 1) * self.cols]
            .iter()
            .collect()
    }

    fn put(&mut self, col: isize, row: isize, c: char) {
        if col < 0 || row < 0 {
            return;
        }
        let (col, row) = (col as usize, row as usize);
        if col < self.cols && row < self.rows {
            self.cells[row * self.cols + col] = c;
        }
    }
}

impl DrawTarget for CellSurface {
    fn draw_glyph(&mut self, glyph: &PositionedGlyph) -> Result<(), AnnotateError> {
        if self.closed {
            return Err(AnnotateError::SurfaceUnavailable(
                "cell surface is closed".to_string(),
            ));
        }
        let col = glyph.x.round() as isize;
        // Device y runs upward, grid rows run downward
        let row = self.rows as isize - 1 - glyph.y.round() as isize;
        let c = match glyph.glyph {
            GlyphId::Char(c) => {
                // Zero-width characters (combining marks) occupy no cell
                match c.width() {
                    Some(0) | None => return Ok(()),
                    Some(_) => c,
                }
            }
            GlyphId::Hershey(_) => '#',
            GlyphId::Marker(number) => marker_cell(number),
        };
        self.put(col, row, c);
        Ok(())
    }
}

fn marker_cell(number: u16) -> char {
    match number {
        1 => '.',
        2 => '+',
        3 => '*',
        4 => 'o',
        5 => 'x',
        _ => '#',
    }
}

impl fmt::Display for CellSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            writeln!(f, "{}", self.row_text(row))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::FontStyle;

    fn glyph_at(x: f32, y: f32, id: GlyphId) -> PositionedGlyph {
        PositionedGlyph {
            glyph: id,
            x,
            y,
            font: FontStyle::Normal,
            scale: 1.0,
            angle: 0.0,
            color: 1,
        }
    }

    #[test]
    fn test_char_lands_in_nearest_cell() {
        let mut surface = CellSurface::new(10, 3);
        surface
            .draw_glyph(&glyph_at(2.4, 0.0, GlyphId::Char('A')))
            .unwrap();
        assert_eq!(surface.cell(2, 2), Some('A'));
    }

    #[test]
    fn test_raised_glyph_lands_in_higher_row() {
        let mut surface = CellSurface::new(10, 3);
        surface
            .draw_glyph(&glyph_at(0.0, 1.0, GlyphId::Char('n')))
            .unwrap();
        assert_eq!(surface.cell(0, 1), Some('n'));
    }

    #[test]
    fn test_out_of_bounds_draw_is_clipped() {
        let mut surface = CellSurface::new(4, 2);
        assert!(surface
            .draw_glyph(&glyph_at(99.0, 0.0, GlyphId::Char('z')))
            .is_ok());
        assert!(surface
            .draw_glyph(&glyph_at(-3.0, 0.0, GlyphId::Char('z')))
            .is_ok());
    }

    #[test]
    fn test_symbol_placeholders() {
        let mut surface = CellSurface::new(4, 1);
        surface
            .draw_glyph(&glyph_at(0.0, 0.0, GlyphId::Hershey(2281)))
            .unwrap();
        surface
            .draw_glyph(&glyph_at(1.0, 0.0, GlyphId::Marker(2)))
            .unwrap();
        assert_eq!(surface.cell(0, 0), Some('#'));
        assert_eq!(surface.cell(1, 0), Some('+'));
    }

    #[test]
    fn test_zero_width_char_is_skipped() {
        let mut surface = CellSurface::new(4, 1);
        surface
            .draw_glyph(&glyph_at(0.0, 0.0, GlyphId::Char('\u{0301}')))
            .unwrap();
        assert_eq!(surface.cell(0, 0), Some(' '));
    }

    #[test]
    fn test_closed_surface_rejects_draws() {
        let mut surface = CellSurface::new(4, 1);
        surface.close();
        let result = surface.draw_glyph(&glyph_at(0.0, 0.0, GlyphId::Char('a')));
        assert!(matches!(
            result,
            Err(AnnotateError::SurfaceUnavailable(_))
        ));
    }

    #[test]
    fn test_display_dumps_rows() {
        let mut surface = CellSurface::new(3, 2);
        surface
            .draw_glyph(&glyph_at(0.0, 1.0, GlyphId::Char('h')))
            .unwrap();
        surface
            .draw_glyph(&glyph_at(1.0, 1.0, GlyphId::Char('i')))
            .unwrap();
        assert_eq!(surface.to_string(), "hi \n   \n");
    }
}
