/// Metric defaults used by [`FontMetricsGlyphBuilder`](crate::text::FontMetricsGlyphBuilder)
/// when a run or its font does not supply the value itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Point size assumed for runs whose font size was never set.
    ///
    /// Defaults to `12.0`.
    pub default_font_size: f32,

    /// Advance, in em, of an ASCII character the font cannot measure
    /// (built-in fonts carry no font program, so this covers every ASCII glyph).
    ///
    /// Defaults to `0.5`.
    pub fallback_advance_em: f32,

    /// Advance, in em, of a non-ASCII character the font cannot measure.
    /// These are treated as full-width (CJK and similar scripts).
    ///
    /// Defaults to `1.0`.
    pub fullwidth_advance_em: f32,

    /// Line height as a multiple of the font size when the font has no
    /// vertical metrics. `12pt * 1.2 = 14.4pt`.
    ///
    /// Defaults to `1.2`.
    pub line_height_factor: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            default_font_size: 12.0,
            fallback_advance_em: 0.5,
            fullwidth_advance_em: 1.0,
            line_height_factor: 1.2,
        }
    }
}
