//! plotmark: escape-markup text engine for plot annotations.
//!
//! Axis labels, titles, and legends are plain text interleaved with an
//! escape grammar: Greek letters (`\alpha`), named symbols (`\Sun`,
//! `\times`), font switches (`\fi`), super/subscripts (`\u`, `\d`), and
//! explicit Hershey glyph numbers (`\(2281)`). The pipeline runs
//! scanner -> style-stack layout -> glyph emitter, and reports the measured
//! extent of the run for caller-side alignment.
//!
//! ```
//! use plotmark::{annotate, Config, TextStyle, Typeface};
//! use plotmark::render::cell::CellSurface;
//!
//! let mut surface = CellSurface::new(40, 4);
//! let extent = annotate(
//!     &mut surface,
//!     (0.0, 1.0),
//!     &Typeface::Builtin,
//!     &TextStyle { scale: 1.0, ..TextStyle::default() },
//!     &Config::default(),
//!     "flux (\\mu Jy)",
//! )
//! .unwrap();
//! assert!(extent.width > 0.0);
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod render;
pub mod scanner;
pub mod style;
pub mod symbol;

pub use config::Config;
pub use error::AnnotateError;
pub use layout::metrics::{load_typeface_from_path, Typeface};
pub use layout::{layout, Extent, GlyphId, PositionedGlyph, TextRun};
pub use render::{annotate, emit, measure, DrawTarget};
pub use scanner::{scan, Scanner, Token};
pub use style::{FontStyle, TextStyle};
pub use symbol::{greek_codepoint, lookup, SymbolEntry, SymbolKind};
