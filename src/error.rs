use thiserror::Error;

/// Failures that abort an annotation call.
///
/// Malformed markup never appears here: unknown escapes and bad Hershey
/// codes degrade to literal text inside the scanner. Only a rejected draw
/// propagates to the caller, and it affects that one call only.
#[derive(Error, Debug)]
pub enum AnnotateError {
    /// The drawing surface rejected a draw call (closed or invalid target).
    /// Glyphs drawn before the failure remain on the surface.
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),
}
