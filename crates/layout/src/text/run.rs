//! The styled text run: the atomic unit of text handed to the layout engine.
//!
//! A run owns its style, its text and a lazily built glyph cache. The layout
//! engine measures runs with [`StyledTextRun::block_size`] and breaks runs that
//! overflow a line with [`StyledTextRun::split`].

use super::glyph::{Glyph, GlyphBuilder, default_glyph_builder};
use crate::LayoutError;
use crate::fonts::FontRef;
use crate::style::TextStyle;
use folio_types::geometry::Size;
use std::cell::OnceCell;
use std::fmt;
use std::sync::Arc;

/// A contiguous piece of text sharing one [`TextStyle`].
///
/// Glyphs are derived on the first call to [`glyph_list`](Self::glyph_list)
/// and kept until the text changes. Replacing the text rebuilds an existing
/// cache immediately. Style setters leave the cache alone: glyphs built
/// before a style change keep the old metrics.
#[derive(Debug)]
pub struct StyledTextRun {
    style: TextStyle,
    text: String,
    splittable: bool,
    glyph_cache: OnceCell<Vec<Glyph>>,
    glyph_builder: Arc<dyn GlyphBuilder>,
}

impl StyledTextRun {
    pub fn new(font: FontRef, font_size: impl Into<Option<f32>>, text: impl Into<String>) -> Self {
        Self::from_parts(TextStyle::new(font, font_size), text.into())
    }

    /// Creates a run in the default font with no font size.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::from_parts(TextStyle::default(), text.into())
    }

    /// Like [`from_text`](Self::from_text), for producers whose content may be absent.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidArgument` if `text` is `None`.
    pub fn try_from_text(text: Option<String>) -> Result<Self, LayoutError> {
        let text = text.ok_or_else(|| {
            LayoutError::InvalidArgument("text run content is missing".to_string())
        })?;
        Ok(Self::from_text(text))
    }

    fn from_parts(style: TextStyle, text: String) -> Self {
        Self {
            style,
            text,
            splittable: false,
            glyph_cache: OnceCell::new(),
            glyph_builder: default_glyph_builder(),
        }
    }

    /// Replaces the glyph builder. Any cached glyphs are dropped.
    pub fn with_glyph_builder(mut self, builder: Arc<dyn GlyphBuilder>) -> Self {
        self.glyph_builder = builder;
        self.glyph_cache = OnceCell::new();
        self
    }

    /// Number of characters (Unicode scalar values) in the run.
    pub fn length(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn font(&self) -> &FontRef {
        &self.style.font
    }

    pub fn font_size(&self) -> Option<f32> {
        self.style.font_size
    }

    pub fn letter_spacing(&self) -> f32 {
        self.style.letter_spacing
    }

    pub fn is_bold(&self) -> bool {
        self.style.bold
    }

    pub fn is_italic(&self) -> bool {
        self.style.italic
    }

    pub fn is_underline(&self) -> bool {
        self.style.underline
    }

    /// Whether the layout engine may split this run across lines.
    /// `split` itself does not consult this flag.
    pub fn is_splittable(&self) -> bool {
        self.splittable
    }

    pub fn glyph_builder(&self) -> &Arc<dyn GlyphBuilder> {
        &self.glyph_builder
    }

    pub fn set_font(&mut self, font: FontRef) -> &mut Self {
        self.style.font = font;
        self
    }

    pub fn set_font_size(&mut self, font_size: impl Into<Option<f32>>) -> &mut Self {
        self.style.font_size = font_size.into();
        self
    }

    pub fn set_letter_spacing(&mut self, letter_spacing: f32) -> &mut Self {
        self.style.letter_spacing = letter_spacing;
        self
    }

    pub fn set_bold(&mut self, bold: bool) -> &mut Self {
        self.style.bold = bold;
        self
    }

    pub fn set_italic(&mut self, italic: bool) -> &mut Self {
        self.style.italic = italic;
        self
    }

    pub fn set_underline(&mut self, underline: bool) -> &mut Self {
        self.style.underline = underline;
        self
    }

    pub fn set_splittable(&mut self, splittable: bool) -> &mut Self {
        self.splittable = splittable;
        self
    }

    /// Replaces the content. If glyphs were already derived they are rebuilt
    /// now, under the current style.
    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = text.into();
        if self.glyph_cache.take().is_some() {
            log::debug!("Rebuilding glyph cache for {} characters", self.length());
            self.glyph_list();
        }
        self
    }

    /// Like [`set_text`](Self::set_text), for producers whose content may be absent.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidArgument` if `text` is `None`; the run is
    /// left unchanged.
    pub fn try_set_text(&mut self, text: Option<String>) -> Result<&mut Self, LayoutError> {
        let text = text.ok_or_else(|| {
            LayoutError::InvalidArgument("text run content is missing".to_string())
        })?;
        Ok(self.set_text(text))
    }

    /// One glyph per character, in text order. Built on first call.
    pub fn glyph_list(&self) -> &[Glyph] {
        self.glyph_cache
            .get_or_init(|| self.glyph_builder.build_glyphs(&self.text, &self.style))
    }

    /// Space the run occupies on a single line.
    ///
    /// The width is the sum of all advances. The height is the line height of
    /// the *last* glyph, not the tallest one; every glyph of a run shares one
    /// font and size, so the two agree. An empty run measures `(0, 0)`.
    pub fn block_size(&self) -> Size {
        let glyphs = self.glyph_list();
        let width = glyphs.iter().map(|g| g.advance_width).sum();
        let height = glyphs.last().map_or(0.0, |g| g.line_height);
        Size::new(width, height)
    }

    /// Horizontal offset at which character `index` starts.
    ///
    /// `index == length()` gives the full width; larger indices give `None`.
    pub fn offset_for_char(&self, index: usize) -> Option<f32> {
        let glyphs = self.glyph_list();
        if index > glyphs.len() {
            return None;
        }
        Some(glyphs[..index].iter().map(|g| g.advance_width).sum())
    }

    /// Splits the run before character `index` into a head `[0, index)` and a
    /// tail `[index, length())`.
    ///
    /// Both halves copy every style attribute and start with empty glyph
    /// caches. `index == 0` yields an empty head. The run itself is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidArgument` unless `index < length()`.
    pub fn split(&self, index: usize) -> Result<(StyledTextRun, StyledTextRun), LayoutError> {
        let length = self.length();
        if index >= length {
            return Err(LayoutError::InvalidArgument(format!(
                "split index {} out of range for a run of {} characters",
                index, length
            )));
        }

        let byte_offset = self
            .text
            .char_indices()
            .nth(index)
            .map_or(self.text.len(), |(offset, _)| offset);
        let (head, tail) = self.text.split_at(byte_offset);

        log::debug!(
            "Splitting run of {} characters at {} ({:?} | {:?})",
            length,
            index,
            head,
            tail
        );

        Ok((self.copy_with_text(head), self.copy_with_text(tail)))
    }

    fn copy_with_text(&self, text: &str) -> StyledTextRun {
        StyledTextRun {
            style: self.style.clone(),
            text: text.to_string(),
            splittable: self.splittable,
            glyph_cache: OnceCell::new(),
            glyph_builder: self.glyph_builder.clone(),
        }
    }
}

/// Copies style, text and the splittable flag. The copy does not share the
/// glyph cache; it derives its own on demand.
impl Clone for StyledTextRun {
    fn clone(&self) -> Self {
        self.copy_with_text(&self.text)
    }
}

impl fmt::Display for StyledTextRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
