use crate::config::LayoutConfig;
use crate::fonts::{face_advance_em, face_glyph_id, face_line_height_em};
use crate::style::TextStyle;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, OnceLock};

/// Metrics of one character laid out under a run's style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub character: char,
    /// Glyph index in the font program, when the font has one.
    pub glyph_id: Option<u16>,
    /// Horizontal advance in points, letter spacing included.
    pub advance_width: f32,
    pub line_height: f32,
}

/// Derives glyphs for the characters of a run.
///
/// Implementations must fold the style's letter spacing into each
/// glyph's `advance_width`; runs sum advances without adding spacing.
pub trait GlyphBuilder: Send + Sync + Debug {
    fn build_glyph(&self, ch: char, style: &TextStyle) -> Glyph;

    /// Builds one glyph per character of `text`, in order.
    fn build_glyphs(&self, text: &str, style: &TextStyle) -> Vec<Glyph> {
        text.chars().map(|ch| self.build_glyph(ch, style)).collect()
    }

    /// Returns a human-readable name for this builder (for logging/debugging).
    fn name(&self) -> &'static str;
}

static DEFAULT_BUILDER: OnceLock<Arc<dyn GlyphBuilder>> = OnceLock::new();

/// The process-wide builder new runs use: font metrics with default config.
pub fn default_glyph_builder() -> Arc<dyn GlyphBuilder> {
    DEFAULT_BUILDER
        .get_or_init(|| Arc::new(FontMetricsGlyphBuilder::default()))
        .clone()
}

/// Builds glyphs from the font program's `hmtx`/`hhea` tables, falling back
/// to [`LayoutConfig`] em metrics for built-in fonts and missing characters.
#[derive(Debug, Clone, Default)]
pub struct FontMetricsGlyphBuilder {
    config: LayoutConfig,
}

impl FontMetricsGlyphBuilder {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    fn font_size(&self, style: &TextStyle) -> f32 {
        match style.font_size {
            Some(size) => size,
            None => {
                log::debug!(
                    "Font size unset for '{}', using default {}pt",
                    style.font.family(),
                    self.config.default_font_size
                );
                self.config.default_font_size
            }
        }
    }

    fn fallback_advance_em(&self, ch: char) -> f32 {
        if ch.is_ascii() {
            self.config.fallback_advance_em
        } else {
            self.config.fullwidth_advance_em
        }
    }

    fn glyph_from_face(
        &self,
        face: Option<&ttf_parser::Face<'_>>,
        ch: char,
        style: &TextStyle,
        font_size: f32,
        line_height: f32,
    ) -> Glyph {
        let advance_em = face
            .and_then(|f| face_advance_em(f, ch))
            .unwrap_or_else(|| self.fallback_advance_em(ch));
        let glyph = Glyph {
            character: ch,
            glyph_id: face.and_then(|f| face_glyph_id(f, ch)),
            advance_width: advance_em * font_size + style.letter_spacing,
            line_height,
        };
        log::trace!("Built glyph {:?}", glyph);
        glyph
    }

    fn line_height(&self, face: Option<&ttf_parser::Face<'_>>, font_size: f32) -> f32 {
        face.and_then(face_line_height_em)
            .unwrap_or(self.config.line_height_factor)
            * font_size
    }
}

impl GlyphBuilder for FontMetricsGlyphBuilder {
    fn build_glyph(&self, ch: char, style: &TextStyle) -> Glyph {
        let face = style.font.as_face();
        let font_size = self.font_size(style);
        let line_height = self.line_height(face.as_ref(), font_size);
        self.glyph_from_face(face.as_ref(), ch, style, font_size, line_height)
    }

    // Parses the face once per run instead of once per character.
    fn build_glyphs(&self, text: &str, style: &TextStyle) -> Vec<Glyph> {
        let face = style.font.as_face();
        let font_size = self.font_size(style);
        let line_height = self.line_height(face.as_ref(), font_size);
        text.chars()
            .map(|ch| self.glyph_from_face(face.as_ref(), ch, style, font_size, line_height))
            .collect()
    }

    fn name(&self) -> &'static str {
        "font-metrics"
    }
}

/// Assigns constant metrics to every character, with optional
/// per-character overrides. Font and size are ignored; letter spacing is not.
#[derive(Debug, Clone, Default)]
pub struct FixedGlyphBuilder {
    advance_width: f32,
    line_height: f32,
    overrides: HashMap<char, (f32, f32)>,
}

impl FixedGlyphBuilder {
    pub fn new(advance_width: f32, line_height: f32) -> Self {
        Self {
            advance_width,
            line_height,
            overrides: HashMap::new(),
        }
    }

    pub fn with_char(mut self, ch: char, advance_width: f32, line_height: f32) -> Self {
        self.overrides.insert(ch, (advance_width, line_height));
        self
    }
}

impl GlyphBuilder for FixedGlyphBuilder {
    fn build_glyph(&self, ch: char, style: &TextStyle) -> Glyph {
        let (advance_width, line_height) = self
            .overrides
            .get(&ch)
            .copied()
            .unwrap_or((self.advance_width, self.line_height));
        Glyph {
            character: ch,
            glyph_id: None,
            advance_width: advance_width + style.letter_spacing,
            line_height,
        }
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}
