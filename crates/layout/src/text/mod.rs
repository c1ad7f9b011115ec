pub mod glyph;
pub mod run;

pub use glyph::{
    FixedGlyphBuilder, FontMetricsGlyphBuilder, Glyph, GlyphBuilder, default_glyph_builder,
};
pub use run::StyledTextRun;
