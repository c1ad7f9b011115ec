//! Styled text runs for a fixed-layout document pipeline.
//!
//! A [`StyledTextRun`] is the atomic unit of text a layout engine places on a
//! page: one style, one piece of text, glyph metrics derived on demand. The
//! engine asks a run for its single-line [`block_size`](StyledTextRun::block_size)
//! to see whether it fits, and [`split`](StyledTextRun::split)s it at a
//! character boundary when it does not.
//!
//! ```
//! use folio::{FixedGlyphBuilder, Size, StyledTextRun};
//! use std::sync::Arc;
//!
//! let run = StyledTextRun::from_text("hello")
//!     .with_glyph_builder(Arc::new(FixedGlyphBuilder::new(6.0, 14.0)));
//! assert_eq!(run.block_size(), Size::new(30.0, 14.0));
//!
//! let (head, tail) = run.split(1)?;
//! assert_eq!((head.text(), tail.text()), ("h", "ello"));
//! # Ok::<(), folio::LayoutError>(())
//! ```

pub use folio_layout::fonts::DEFAULT_FONT_FAMILY;
pub use folio_layout::{
    FixedGlyphBuilder, FontError, FontInstance, FontMetricsGlyphBuilder, FontRef, Glyph,
    GlyphBuilder, LayoutConfig, LayoutError, SharedFontData, StyledTextRun, TextStyle,
    default_glyph_builder,
};
pub use folio_style::{FontStyle, FontWeight, TextDecoration};
pub use folio_types::Size;
