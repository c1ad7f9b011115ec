use crate::fonts::FontRef;
use crate::text::{FixedGlyphBuilder, StyledTextRun};
use std::sync::Arc;

/// DejaVu Sans Mono: 2048 units per em, every ASCII glyph advances 1233 units,
/// hhea ascender 1901, descender -483, line gap 0.
pub static TEST_FONT_DATA: &[u8] = include_bytes!("../assets/DejaVuSansMono.ttf");

/// Advance of any ASCII glyph of [`TEST_FONT_DATA`], in em.
pub const TEST_FONT_ADVANCE_EM: f32 = 1233.0 / 2048.0;
/// Default line height of [`TEST_FONT_DATA`], in em.
pub const TEST_FONT_LINE_HEIGHT_EM: f32 = (1901.0 + 483.0) / 2048.0;

/// Advance every unlisted character gets from [`create_test_run`].
pub const TEST_ADVANCE: f32 = 6.0;
/// Line height every unlisted character gets from [`create_test_run`].
pub const TEST_LINE_HEIGHT: f32 = 14.0;

/// Creates a run whose glyphs have fixed, predictable metrics.
pub fn create_test_run(text: &str) -> StyledTextRun {
    StyledTextRun::from_text(text).with_glyph_builder(Arc::new(FixedGlyphBuilder::new(
        TEST_ADVANCE,
        TEST_LINE_HEIGHT,
    )))
}

/// Creates a run measured by the given fixed builder.
pub fn create_run_with(text: &str, builder: FixedGlyphBuilder) -> StyledTextRun {
    StyledTextRun::from_text(text).with_glyph_builder(Arc::new(builder))
}

pub fn texts(runs: &(StyledTextRun, StyledTextRun)) -> (&str, &str) {
    (runs.0.text(), runs.1.text())
}

/// Parses the bundled test font.
pub fn create_test_font() -> FontRef {
    FontRef::from_data(TEST_FONT_DATA.to_vec()).expect("bundled test font parses")
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {}, got {}",
        expected,
        actual
    );
}
