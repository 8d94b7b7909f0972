/// Font families selectable through markup escapes (`\fn`, `\fr`, `\fi`,
/// `\fs`, `\fb`) or table aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Normal,
    Roman,
    Italic,
    Script,
    Bold,
}

/// Ambient text style seeding the base frame of one annotation call.
///
/// These are the caller's current settings (font, character size, colour
/// index, baseline angle); the markup engine reads them but never writes
/// them back.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font: FontStyle,

    /// Character size in device units (the height of an unscripted glyph)
    pub scale: f32,

    /// Colour index into the surface's colour table
    pub color: u16,

    /// Baseline direction in degrees, counter-clockwise from horizontal
    pub angle: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font: FontStyle::Normal,
            scale: 12.0,
            color: 1,
            angle: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_is_upright_normal() {
        let style = TextStyle::default();
        assert_eq!(style.font, FontStyle::Normal);
        assert_eq!(style.angle, 0.0);
        assert!(style.scale > 0.0);
    }
}
