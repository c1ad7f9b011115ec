use folio::{FixedGlyphBuilder, StyledTextRun};
use std::sync::Arc;

/// Every character advances 10pt on a 12pt line.
pub fn monospace_run(text: &str) -> StyledTextRun {
    StyledTextRun::from_text(text).with_glyph_builder(Arc::new(FixedGlyphBuilder::new(10.0, 12.0)))
}

pub fn splittable_run(text: &str) -> StyledTextRun {
    let mut run = monospace_run(text);
    run.set_splittable(true);
    run
}

/// Mixed Latin, accented and CJK content.
pub const MIXED_TEXT: &str = "Grüße, 世界!";

/// DejaVu Sans Mono, bundled with the layout crate's tests.
pub static MONO_FONT_DATA: &[u8] = include_bytes!("../../crates/layout/assets/DejaVuSansMono.ttf");
