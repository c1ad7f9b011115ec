use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub mod config;
pub mod fonts;
pub mod style;
pub mod text;

pub use self::config::LayoutConfig;
pub use self::fonts::{FontError, FontInstance, FontRef, SharedFontData};
pub use self::style::TextStyle;
pub use self::text::{
    FixedGlyphBuilder, FontMetricsGlyphBuilder, Glyph, GlyphBuilder, StyledTextRun,
    default_glyph_builder,
};

pub use folio_types::geometry::Size;

#[cfg(test)]
mod test_utils;
