//! Style stack and layout engine.
//!
//! Consumes the scanner's token stream and maintains the active rendering
//! state (font family, baseline offset, scale, colour) as a stack of frames,
//! so that nested super/subscript regions restore exactly on exit. Each
//! glyph's device position comes from the cumulative advance along the text
//! direction plus the frame's baseline offset perpendicular to it, both
//! rotated by the run angle.

pub mod metrics;

use crate::config::Config;
use crate::scanner::Token;
use crate::style::{FontStyle, TextStyle};
use crate::symbol;
use metrics::Typeface;

/// What a positioned glyph draws: a character, a Hershey vector glyph, or a
/// graph marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GlyphId {
    Char(char),
    Hershey(u16),
    Marker(u16),
}

/// One glyph-draw instruction, positioned relative to the run origin.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedGlyph {
    pub glyph: GlyphId,
    pub x: f32,
    pub y: f32,
    pub font: FontStyle,
    pub scale: f32,
    pub angle: f32,
    pub color: u16,
}

/// Measured bounding size of a laid-out run, in device units. `width` is
/// the net cursor displacement along the text direction; `height` spans the
/// highest ascent to the lowest descent observed, baseline offsets included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

/// A laid-out annotation: the glyph list and its extent.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub glyphs: Vec<PositionedGlyph>,
    pub extent: Extent,
}

/// One saved style snapshot. The stack always holds a base frame seeded
/// from the caller's ambient style; Begin pushes exactly one frame and the
/// matching End pops exactly one.
#[derive(Debug, Clone, PartialEq)]
struct StyleFrame {
    font: FontStyle,
    baseline: f32,
    scale: f32,
    color: u16,
}

/// Lay out a token sequence against the given typeface and ambient style.
pub fn layout<I>(tokens: I, face: &Typeface, style: &TextStyle, config: &Config) -> TextRun
where
    I: IntoIterator<Item = Token>,
{
    let mut engine = LayoutState::new(face, style, config);
    for token in tokens {
        engine.process(token);
    }
    engine.finish()
}

struct LayoutState<'a> {
    face: &'a Typeface,
    config: &'a Config,
    stack: Vec<StyleFrame>,
    glyphs: Vec<PositionedGlyph>,
    /// Cumulative advance along the text direction
    advance: f32,
    /// Run angle and its direction cosines
    angle: f32,
    dir_cos: f32,
    dir_sin: f32,
    highest: f32,
    lowest: f32,
}

impl<'a> LayoutState<'a> {
    fn new(face: &'a Typeface, style: &'a TextStyle, config: &'a Config) -> Self {
        let radians = style.angle.to_radians();
        Self {
            face,
            config,
            stack: vec![StyleFrame {
                font: style.font,
                baseline: 0.0,
                scale: style.scale,
                color: style.color,
            }],
            glyphs: Vec::new(),
            advance: 0.0,
            angle: style.angle,
            dir_cos: radians.cos(),
            dir_sin: radians.sin(),
            highest: f32::NEG_INFINITY,
            lowest: f32::INFINITY,
        }
    }

    fn top(&self) -> &StyleFrame {
        self.stack.last().expect("style stack holds a base frame")
    }

    fn top_mut(&mut self) -> &mut StyleFrame {
        self.stack
            .last_mut()
            .expect("style stack holds a base frame")
    }

    fn process(&mut self, token: Token) {
        match token {
            Token::Literal(c) => self.place_char(c),
            Token::Greek(translit) => self.place_char(symbol::greek_codepoint(translit)),
            Token::Hershey(code) => {
                let width = self.face.symbol_advance(self.top().scale);
                self.place(GlyphId::Hershey(code), width);
            }
            Token::Marker(number) => {
                let width = self.face.symbol_advance(self.top().scale);
                self.place(GlyphId::Marker(number), width);
            }
            Token::Text(text) => {
                for c in text.chars() {
                    self.place_char(c);
                }
            }
            Token::Font(font) => self.top_mut().font = font,
            Token::Color(color) => self.top_mut().color = color,
            Token::SuperscriptBegin => self.push_script(1.0),
            Token::SubscriptBegin => self.push_script(-1.0),
            Token::SuperscriptEnd | Token::SubscriptEnd => self.pop_script(),
        }
    }

    fn place_char(&mut self, c: char) {
        let width = self.face.advance(c, self.top().scale);
        self.place(GlyphId::Char(c), width);
    }

    fn place(&mut self, glyph: GlyphId, width: f32) {
        let frame = self.top().clone();
        // Advance runs along the direction, baseline offset perpendicular
        let x = self.advance * self.dir_cos - frame.baseline * self.dir_sin;
        let y = self.advance * self.dir_sin + frame.baseline * self.dir_cos;
        self.glyphs.push(PositionedGlyph {
            glyph,
            x,
            y,
            font: frame.font,
            scale: frame.scale,
            angle: self.angle,
            color: frame.color,
        });
        self.highest = self
            .highest
            .max(frame.baseline + self.face.ascent(frame.scale));
        self.lowest = self
            .lowest
            .min(frame.baseline + self.face.descent(frame.scale));
        self.advance += width;
    }

    /// Push a script frame: copy font/colour, shrink the scale, and shift
    /// the baseline by a fraction of the enclosing scale. Nesting is
    /// additive relative to the current frame, not the base.
    fn push_script(&mut self, direction: f32) {
        let top = self.top();
        let frame = StyleFrame {
            font: top.font,
            color: top.color,
            baseline: top.baseline + direction * self.config.baseline_shift * top.scale,
            scale: top.scale * self.config.superscript_scale,
        };
        self.stack.push(frame);
    }

    fn pop_script(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        } else if self.config.warnings {
            log::warn!("unmatched super/subscript end ignored");
        }
    }

    fn finish(self) -> TextRun {
        let height = if self.glyphs.is_empty() {
            0.0
        } else {
            self.highest - self.lowest
        };
        TextRun {
            glyphs: self.glyphs,
            extent: Extent {
                width: self.advance,
                height,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_style() -> TextStyle {
        TextStyle::default()
    }

    fn lay(tokens: Vec<Token>) -> TextRun {
        layout(tokens, &Typeface::Builtin, &base_style(), &Config::default())
    }

    #[test]
    fn test_plain_run_one_glyph_per_char_increasing_advance() {
        let tokens: Vec<Token> = "title".chars().map(Token::Literal).collect();
        let run = lay(tokens);
        assert_eq!(run.glyphs.len(), 5);
        let style = base_style();
        for pair in run.glyphs.windows(2) {
            assert!(pair[1].x > pair[0].x, "cursor should strictly increase");
        }
        for glyph in &run.glyphs {
            assert_eq!(glyph.font, style.font);
            assert_eq!(glyph.scale, style.scale);
            assert_eq!(glyph.color, style.color);
            assert_eq!(glyph.y, 0.0);
        }
    }

    #[test]
    fn test_extent_width_is_net_advance() {
        let run = lay(vec![Token::Literal('a'), Token::Literal('b')]);
        let face = Typeface::Builtin;
        let expected = face.advance('a', 12.0) + face.advance('b', 12.0);
        assert_eq!(run.extent.width, expected);
    }

    #[test]
    fn test_empty_run_has_zero_extent() {
        let run = lay(vec![]);
        assert!(run.glyphs.is_empty());
        assert_eq!(run.extent.width, 0.0);
        assert_eq!(run.extent.height, 0.0);
    }

    #[test]
    fn test_superscript_raises_and_shrinks() {
        let run = lay(vec![
            Token::Literal('x'),
            Token::SuperscriptBegin,
            Token::Literal('2'),
            Token::SuperscriptEnd,
            Token::Literal('y'),
        ]);
        let [x, two, y] = &run.glyphs[..] else {
            panic!("expected three glyphs");
        };
        assert_eq!(x.y, 0.0);
        assert_eq!(two.y, 0.5 * 12.0);
        assert_eq!(two.scale, 0.6 * 12.0);
        // Exact restoration after the end token
        assert_eq!(y.y, 0.0);
        assert_eq!(y.scale, 12.0);
    }

    #[test]
    fn test_subscript_lowers() {
        let run = lay(vec![
            Token::SubscriptBegin,
            Token::Literal('0'),
            Token::SubscriptEnd,
        ]);
        assert_eq!(run.glyphs[0].y, -0.5 * 12.0);
    }

    #[test]
    fn test_nesting_is_additive_relative_to_current_frame() {
        let run = lay(vec![
            Token::SuperscriptBegin,
            Token::SubscriptBegin,
            Token::Literal('k'),
        ]);
        let glyph = &run.glyphs[0];
        // Raised by 0.5*12, then lowered by 0.5 of the shrunken (7.2) scale
        let expected_baseline = 0.5 * 12.0 - 0.5 * (0.6 * 12.0);
        assert!((glyph.y - expected_baseline).abs() < 1e-5);
        assert!((glyph.scale - 12.0 * 0.6 * 0.6).abs() < 1e-5);
    }

    #[test]
    fn test_end_restores_across_intervening_font_and_color_switches() {
        let run = lay(vec![
            Token::Literal('a'),
            Token::SuperscriptBegin,
            Token::Font(FontStyle::Italic),
            Token::Color(7),
            Token::Literal('b'),
            Token::SuperscriptEnd,
            Token::Literal('c'),
        ]);
        let a = &run.glyphs[0];
        let b = &run.glyphs[1];
        let c = &run.glyphs[2];
        assert_eq!(b.font, FontStyle::Italic);
        assert_eq!(b.color, 7);
        // Switches inside the region only ever touched the popped frame
        assert_eq!(c.font, a.font);
        assert_eq!(c.color, a.color);
        assert_eq!(c.scale, a.scale);
        assert_eq!(c.y, a.y);
    }

    #[test]
    fn test_font_switch_outside_region_persists() {
        let run = lay(vec![
            Token::Font(FontStyle::Bold),
            Token::Literal('a'),
            Token::Literal('b'),
        ]);
        assert!(run.glyphs.iter().all(|g| g.font == FontStyle::Bold));
    }

    #[test]
    fn test_unmatched_end_is_ignored() {
        let run = lay(vec![
            Token::SuperscriptEnd,
            Token::SubscriptEnd,
            Token::Literal('a'),
        ]);
        let glyph = &run.glyphs[0];
        assert_eq!(glyph.y, 0.0);
        assert_eq!(glyph.scale, 12.0);
    }

    #[test]
    fn test_unterminated_begin_completes() {
        let run = lay(vec![
            Token::Literal('x'),
            Token::SuperscriptBegin,
            Token::Literal('2'),
            Token::Literal('3'),
        ]);
        assert_eq!(run.glyphs.len(), 3);
        assert_eq!(run.glyphs[2].scale, 0.6 * 12.0);
        // Extent covers the raised glyphs
        let face = Typeface::Builtin;
        let raised_top = 0.5 * 12.0 + face.ascent(0.6 * 12.0);
        let expected_height = raised_top - face.descent(12.0);
        assert!((run.extent.height - expected_height).abs() < 1e-5);
    }

    #[test]
    fn test_rotated_run_advances_along_direction() {
        let style = TextStyle {
            angle: 90.0,
            ..TextStyle::default()
        };
        let tokens = vec![Token::Literal('a'), Token::Literal('b')];
        let run = layout(tokens, &Typeface::Builtin, &style, &Config::default());
        let a = &run.glyphs[0];
        let b = &run.glyphs[1];
        assert!(a.x.abs() < 1e-4 && a.y.abs() < 1e-4);
        assert!(b.x.abs() < 1e-4, "vertical run should not advance in x");
        assert!(b.y > 0.0, "vertical run advances in y");
        assert_eq!(b.angle, 90.0);
    }

    #[test]
    fn test_text_token_places_one_glyph_per_char() {
        let run = lay(vec![Token::Text("≈")]);
        assert_eq!(run.glyphs.len(), 1);
        assert_eq!(run.glyphs[0].glyph, GlyphId::Char('≈'));
    }

    #[test]
    fn test_greek_token_resolves_to_greek_codepoint() {
        let run = lay(vec![Token::Greek('a')]);
        assert_eq!(run.glyphs[0].glyph, GlyphId::Char('α'));
    }

    #[test]
    fn test_symbol_tokens_use_symbol_advance() {
        let run = lay(vec![Token::Hershey(2281), Token::Literal('x')]);
        assert_eq!(run.glyphs[0].glyph, GlyphId::Hershey(2281));
        let face = Typeface::Builtin;
        assert_eq!(run.glyphs[1].x, face.symbol_advance(12.0));
    }
}
