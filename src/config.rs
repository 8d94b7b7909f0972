// Configuration for the annotation markup engine.
// Replaces the ambient process-wide switches of older plotting libraries
// with explicit per-call settings, so concurrent callers cannot interfere.

/// Markup engine configuration.
///
/// A `Config` is read-only for the duration of one annotation call; the
/// defaults reproduce the conventional escape grammar (backslash marker,
/// super/subscripts at 0.6x scale, half-height baseline shifts).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Lead character introducing a markup escape sequence (default '\\')
    pub escape: char,

    /// Scale multiplier applied inside super/subscript regions (default 0.6)
    pub superscript_scale: f32,

    /// Baseline shift for super/subscript regions, as a fraction of the
    /// enclosing frame's scale (default 0.5)
    pub baseline_shift: f32,

    /// Emit `log::warn!` diagnostics for unmatched style ends (default true)
    pub warnings: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            escape: '\\',
            superscript_scale: 0.6,
            baseline_shift: 0.5,
            warnings: true,
        }
    }
}
