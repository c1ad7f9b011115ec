use crate::fonts::FontRef;
use folio_style::font::{FontStyle, FontWeight};
use folio_style::text::TextDecoration;

/// The visual style shared by every character of a run.
///
/// Glyph builders receive this by reference; it is the style context a glyph
/// is derived from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextStyle {
    pub font: FontRef,
    /// Point size. `None` until the producer sets it.
    pub font_size: Option<f32>,
    /// Extra advance added after every character, in points.
    pub letter_spacing: f32,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl TextStyle {
    pub fn new(font: FontRef, font_size: impl Into<Option<f32>>) -> Self {
        Self {
            font,
            font_size: font_size.into(),
            ..Default::default()
        }
    }

    pub fn font_weight(&self) -> FontWeight {
        FontWeight::from_bold(self.bold)
    }

    pub fn font_style(&self) -> FontStyle {
        FontStyle::from_italic(self.italic)
    }

    pub fn text_decoration(&self) -> TextDecoration {
        TextDecoration::from_underline(self.underline)
    }
}
