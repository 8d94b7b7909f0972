//! Raster surface: draws glyph runs into an RGBA image buffer.
//!
//! Character glyphs are rasterised through their outline font when one is
//! installed; without a font, and for Hershey vector glyphs, a stroked box
//! stands in. Graph markers are stroked as line segments. Glyph outlines
//! are positioned but not rotated; the run angle only affects placement.

use ab_glyph::{Font, FontRef, PxScale};
use imageproc::drawing::{draw_hollow_circle_mut, draw_line_segment_mut};
use imageproc::image::{ImageBuffer, Rgba};

use crate::error::AnnotateError;
use crate::layout::{GlyphId, PositionedGlyph};
use crate::render::DrawTarget;

const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

pub struct RasterSurface {
    width: u32,
    height: u32,
    image: ImageBuffer<Rgba<u8>, Vec<u8>>,
    font: Option<FontRef<'static>>,
    closed: bool,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            image: ImageBuffer::from_pixel(width, height, BACKGROUND),
            font: None,
            closed: false,
        }
    }

    /// Install an outline font for character rasterisation.
    pub fn with_font(mut self, font: FontRef<'static>) -> Self {
        self.font = Some(font);
        self
    }

    /// Mark the surface closed; further draws are rejected.
    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn image(&self) -> &ImageBuffer<Rgba<u8>, Vec<u8>> {
        &self.image
    }

    /// Count of pixels differing from the background, for inspection.
    pub fn painted_pixels(&self) -> usize {
        self.image.pixels().filter(|p| **p != BACKGROUND).count()
    }

    fn put_pixel_checked(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            self.image.put_pixel(x as u32, y as u32, color);
        }
    }

    fn rasterize_char(&mut self, c: char, glyph: &PositionedGlyph, py: f32, color: Rgba<u8>) {
        let font = match &self.font {
            Some(font) => font.clone(),
            None => {
                self.stroke_box(glyph, py, color);
                return;
            }
        };
        let scale = PxScale::from(glyph.scale);
        let outline = font
            .outline_glyph(font.glyph_id(c).with_scale_and_position(scale, ab_glyph::point(glyph.x, py)));
        if let Some(outlined) = outline {
            let bounds = outlined.px_bounds();
            let (min_x, min_y) = (bounds.min.x as i32, bounds.min.y as i32);
            let mut touched: Vec<(i32, i32)> = Vec::new();
            outlined.draw(|gx, gy, coverage| {
                if coverage > 0.5 {
                    touched.push((min_x + gx as i32, min_y + gy as i32));
                }
            });
            for (x, y) in touched {
                self.put_pixel_checked(x, y, color);
            }
        }
    }

    /// Open box standing in for vector glyphs the surface cannot stroke.
    fn stroke_box(&mut self, glyph: &PositionedGlyph, py: f32, color: Rgba<u8>) {
        let side = 0.7 * glyph.scale;
        let (x0, y0) = (glyph.x, py - side);
        let (x1, y1) = (glyph.x + side, py);
        draw_line_segment_mut(&mut self.image, (x0, y0), (x1, y0), color);
        draw_line_segment_mut(&mut self.image, (x1, y0), (x1, y1), color);
        draw_line_segment_mut(&mut self.image, (x1, y1), (x0, y1), color);
        draw_line_segment_mut(&mut self.image, (x0, y1), (x0, y0), color);
    }

    fn stroke_marker(&mut self, number: u16, glyph: &PositionedGlyph, py: f32, color: Rgba<u8>) {
        let half = 0.35 * glyph.scale;
        let cx = glyph.x + half;
        let cy = py - half;
        match number {
            1 => self.put_pixel_checked(cx as i32, cy as i32, color),
            2 => {
                draw_line_segment_mut(&mut self.image, (cx - half, cy), (cx + half, cy), color);
                draw_line_segment_mut(&mut self.image, (cx, cy - half), (cx, cy + half), color);
            }
            3 => {
                draw_line_segment_mut(&mut self.image, (cx - half, cy), (cx + half, cy), color);
                draw_line_segment_mut(&mut self.image, (cx, cy - half), (cx, cy + half), color);
                draw_line_segment_mut(
                    &mut self.image,
                    (cx - half, cy - half),
                    (cx + half, cy + half),
                    color,
                );
                draw_line_segment_mut(
                    &mut self.image,
                    (cx - half, cy + half),
                    (cx + half, cy - half),
                    color,
                );
            }
            4 => draw_hollow_circle_mut(
                &mut self.image,
                (cx as i32, cy as i32),
                half as i32,
                color,
            ),
            5 => {
                draw_line_segment_mut(
                    &mut self.image,
                    (cx - half, cy - half),
                    (cx + half, cy + half),
                    color,
                );
                draw_line_segment_mut(
                    &mut self.image,
                    (cx - half, cy + half),
                    (cx + half, cy - half),
                    color,
                );
            }
            _ => self.stroke_box(glyph, py, color),
        }
    }
}

impl DrawTarget for RasterSurface {
    fn draw_glyph(&mut self, glyph: &PositionedGlyph) -> Result<(), AnnotateError> {
        if self.closed {
            return Err(AnnotateError::SurfaceUnavailable(
                "raster surface is closed".to_string(),
            ));
        }
        // Device y runs upward, image y runs downward
        let py = self.height as f32 - glyph.y;
        let color = color_rgba(glyph.color);
        match glyph.glyph {
            GlyphId::Char(c) => self.rasterize_char(c, glyph, py, color),
            GlyphId::Hershey(_) => self.stroke_box(glyph, py, color),
            GlyphId::Marker(number) => self.stroke_marker(number, glyph, py, color),
        }
        Ok(())
    }
}

/// Default colour table: index 0 is the background, 1 the foreground, then
/// the conventional primary/secondary cycle.
fn color_rgba(index: u16) -> Rgba<u8> {
    match index {
        0 => BACKGROUND,
        1 => Rgba([255, 255, 255, 255]),
        2 => Rgba([255, 0, 0, 255]),
        3 => Rgba([0, 255, 0, 255]),
        4 => Rgba([0, 0, 255, 255]),
        5 => Rgba([0, 255, 255, 255]),
        6 => Rgba([255, 0, 255, 255]),
        7 => Rgba([255, 255, 0, 255]),
        _ => Rgba([255, 255, 255, 255]),
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
            scale: 10.0,
            angle: 0.0,
            color: 1,
        }
    }

    #[test]
    fn test_new_surface_is_background_only() {
        let surface = RasterSurface::new(20, 20);
        assert_eq!(surface.painted_pixels(), 0);
    }

    #[test]
    fn test_marker_paints_pixels() {
        let mut surface = RasterSurface::new(40, 40);
        surface
            .draw_glyph(&glyph_at(10.0, 20.0, GlyphId::Marker(2)))
            .unwrap();
        assert!(surface.painted_pixels() > 0);
    }

    #[test]
    fn test_char_without_font_strokes_a_box() {
        let mut surface = RasterSurface::new(40, 40);
        surface
            .draw_glyph(&glyph_at(10.0, 20.0, GlyphId::Char('A')))
            .unwrap();
        assert!(surface.painted_pixels() > 0);
    }

    #[test]
    fn test_hershey_glyph_strokes_a_box() {
        let mut surface = RasterSurface::new(40, 40);
        surface
            .draw_glyph(&glyph_at(10.0, 20.0, GlyphId::Hershey(2281)))
            .unwrap();
        assert!(surface.painted_pixels() > 0);
    }

    #[test]
    fn test_draw_beyond_bounds_is_clipped() {
        let mut surface = RasterSurface::new(10, 10);
        assert!(surface
            .draw_glyph(&glyph_at(500.0, 500.0, GlyphId::Marker(1)))
            .is_ok());
        assert_eq!(surface.painted_pixels(), 0);
    }

    #[test]
    fn test_closed_surface_rejects_draws() {
        let mut surface = RasterSurface::new(10, 10);
        surface.close();
        let result = surface.draw_glyph(&glyph_at(0.0, 0.0, GlyphId::Marker(1)));
        assert!(matches!(
            result,
            Err(AnnotateError::SurfaceUnavailable(_))
        ));
    }

    #[test]
    fn test_colour_index_selects_palette_entry() {
        let mut surface = RasterSurface::new(40, 40);
        let mut glyph = glyph_at(10.0, 20.0, GlyphId::Marker(2));
        glyph.color = 2;
        surface.draw_glyph(&glyph).unwrap();
        let red = surface
            .image()
            .pixels()
            .any(|p| *p == Rgba([255, 0, 0, 255]));
        assert!(red, "marker should be drawn in colour index 2 (red)");
    }
}
