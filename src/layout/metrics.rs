use ab_glyph::{Font, FontRef, PxScale, ScaleFont};

// Builtin metric fractions, per unit of character size.
const ASCENT_FRACTION: f32 = 0.74;
const DESCENT_FRACTION: f32 = -0.26;
const SYMBOL_ADVANCE_FRACTION: f32 = 0.8;

/// Source of per-glyph advance widths and vertical metrics.
///
/// `Builtin` is a self-contained proportional width table in the spirit of
/// the Hershey stroked fonts and needs no font file. `Outline` wraps a
/// caller-loaded TrueType/OpenType font and takes its metrics from the
/// font's own tables.
pub enum Typeface {
    Builtin,
    Outline(FontRef<'static>),
}

impl Default for Typeface {
    fn default() -> Self {
        Typeface::Builtin
    }
}

impl Typeface {
    /// Advance width of one character at the given size.
    pub fn advance(&self, c: char, size: f32) -> f32 {
        match self {
            Typeface::Builtin => builtin_advance(c) * size,
            Typeface::Outline(font) => {
                let scaled = font.as_scaled(PxScale::from(size));
                scaled.h_advance(font.glyph_id(c))
            }
        }
    }

    /// Advance width of a Hershey or marker symbol glyph.
    pub fn symbol_advance(&self, size: f32) -> f32 {
        SYMBOL_ADVANCE_FRACTION * size
    }

    /// Height above the baseline at the given size.
    pub fn ascent(&self, size: f32) -> f32 {
        match self {
            Typeface::Builtin => ASCENT_FRACTION * size,
            Typeface::Outline(font) => font.as_scaled(PxScale::from(size)).ascent(),
        }
    }

    /// Depth below the baseline at the given size (negative).
    pub fn descent(&self, size: f32) -> f32 {
        match self {
            Typeface::Builtin => DESCENT_FRACTION * size,
            Typeface::Outline(font) => font.as_scaled(PxScale::from(size)).descent(),
        }
    }
}

/// Proportional width classes for the builtin face, as a fraction of the
/// character size.
fn builtin_advance(c: char) -> f32 {
    match c {
        ' ' => 0.5,
        'i' | 'l' | 'j' | '!' | '|' | '\'' | '.' | ',' | ':' | ';' => 0.3,
        'f' | 't' | 'r' | 'I' | '(' | ')' | '[' | ']' => 0.42,
        'm' | 'w' | 'M' | 'W' | '@' => 0.92,
        c if c.is_ascii_digit() => 0.7,
        // Covers Latin and Greek capitals alike
        c if c.is_uppercase() => 0.7,
        _ => 0.6,
    }
}

/// Load an outline typeface from a font file. The bytes are leaked to get a
/// 'static lifetime; callers load at most a handful of faces per process.
pub fn load_typeface_from_path<P: AsRef<std::path::Path>>(path: P) -> Option<Typeface> {
    std::fs::read(path).ok().and_then(|bytes| {
        let leaked_bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
        FontRef::try_from_slice(leaked_bytes)
            .ok()
            .map(Typeface::Outline)
    })
}
