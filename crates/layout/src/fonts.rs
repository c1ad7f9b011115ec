//! Font handles for styled text runs.
//!
//! A [`FontRef`] is a shared, read-only handle to font data. Runs copy the
//! handle freely; the underlying [`FontInstance`] is never mutated after
//! construction, so handles can cross threads.
//!
//! Two kinds of font exist:
//! - **Built-in fonts** carry only a name. Glyph builders fall back to
//!   configured em-based metrics for them.
//! - **Parsed fonts** carry a font program. Advance widths and vertical
//!   metrics are read from it with `ttf-parser`.
//!
//! Loading fonts from disk or the system is left to the caller.

use folio_style::font::{FontStyle, FontWeight};
use std::sync::{Arc, OnceLock};
use thiserror::Error;

/// Family name of the process-wide default font.
pub const DEFAULT_FONT_FAMILY: &str = "Helvetica";

static DEFAULT_FONT: OnceLock<FontRef> = OnceLock::new();

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FontError {
    #[error("Invalid font data: {0}")]
    InvalidData(String),
}

/// Shared font program bytes.
pub type SharedFontData = Arc<Vec<u8>>;

/// Immutable description of one font face.
pub struct FontInstance {
    pub postscript_name: String,
    pub family: String,
    pub weight: FontWeight,
    pub style: FontStyle,
    data: Option<SharedFontData>,
}

impl std::fmt::Debug for FontInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontInstance")
            .field("postscript_name", &self.postscript_name)
            .field("family", &self.family)
            .field("weight", &self.weight)
            .field("style", &self.style)
            .field("data_len", &self.data.as_ref().map(|d| d.len()))
            .finish()
    }
}

impl FontInstance {
    /// Creates a lightweight Face view over the font data.
    /// This is cheap (parsing header) and avoids self-referential struct issues.
    pub fn as_face(&self) -> Option<ttf_parser::Face<'_>> {
        let data = self.data.as_ref()?;
        ttf_parser::Face::parse(data, 0).ok()
    }
}

/// A cheap-to-clone handle to an immutable [`FontInstance`].
///
/// Equality is handle identity: two refs are equal only when they point at
/// the same instance.
#[derive(Debug, Clone)]
pub struct FontRef {
    inner: Arc<FontInstance>,
}

impl FontRef {
    /// Creates a named font without a font program.
    pub fn builtin(family: impl Into<String>) -> Self {
        let family = family.into();
        Self {
            inner: Arc::new(FontInstance {
                postscript_name: family.replace(' ', ""),
                family,
                weight: FontWeight::Regular,
                style: FontStyle::Normal,
                data: None,
            }),
        }
    }

    /// Parses a TrueType/OpenType font program and wraps it in a handle.
    ///
    /// # Errors
    ///
    /// Returns `FontError::InvalidData` if `ttf-parser` rejects the data.
    pub fn from_data(data: Vec<u8>) -> Result<Self, FontError> {
        let (family, postscript_name, weight, style) = {
            let face = ttf_parser::Face::parse(&data, 0)
                .map_err(|e| FontError::InvalidData(e.to_string()))?;

            let family = find_name(&face, &[
                ttf_parser::name_id::TYPOGRAPHIC_FAMILY,
                ttf_parser::name_id::FAMILY,
            ])
            .unwrap_or_else(|| "Unknown".to_string());

            let postscript_name = extract_postscript_name(&face)
                .unwrap_or_else(|| family.replace(' ', ""));

            let weight = FontWeight::from_numeric(face.weight().to_number());
            let style = if face.is_italic() {
                FontStyle::Italic
            } else if face.is_oblique() {
                FontStyle::Oblique
            } else {
                FontStyle::Normal
            };

            (family, postscript_name, weight, style)
        };

        log::debug!(
            "Parsed font: family='{}', ps_name='{}', weight={:?}, style={:?}, {} bytes",
            family,
            postscript_name,
            weight,
            style,
            data.len()
        );

        Ok(Self {
            inner: Arc::new(FontInstance {
                postscript_name,
                family,
                weight,
                style,
                data: Some(Arc::new(data)),
            }),
        })
    }

    pub fn family(&self) -> &str {
        &self.inner.family
    }

    pub fn postscript_name(&self) -> &str {
        &self.inner.postscript_name
    }

    pub fn weight(&self) -> &FontWeight {
        &self.inner.weight
    }

    pub fn style(&self) -> &FontStyle {
        &self.inner.style
    }

    /// Raw font program, if this font has one.
    pub fn data(&self) -> Option<&SharedFontData> {
        self.inner.data.as_ref()
    }

    pub fn has_font_program(&self) -> bool {
        self.inner.data.is_some()
    }

    pub fn as_face(&self) -> Option<ttf_parser::Face<'_>> {
        self.inner.as_face()
    }

    /// Horizontal advance of `ch` in em units, or `None` when the font has
    /// no program or no glyph for the character.
    pub fn advance_em(&self, ch: char) -> Option<f32> {
        face_advance_em(&self.as_face()?, ch)
    }

    /// Default line height (ascender - descender + line gap) in em units.
    pub fn line_height_em(&self) -> Option<f32> {
        face_line_height_em(&self.as_face()?)
    }

    pub fn ptr_eq(&self, other: &FontRef) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for FontRef {
    /// Returns the shared built-in default font.
    fn default() -> Self {
        DEFAULT_FONT
            .get_or_init(|| FontRef::builtin(DEFAULT_FONT_FAMILY))
            .clone()
    }
}

impl PartialEq for FontRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

pub(crate) fn face_glyph_id(face: &ttf_parser::Face<'_>, ch: char) -> Option<u16> {
    face.glyph_index(ch).map(|id| id.0)
}

pub(crate) fn face_advance_em(face: &ttf_parser::Face<'_>, ch: char) -> Option<f32> {
    let units_per_em = face.units_per_em();
    if units_per_em == 0 {
        return None;
    }
    let glyph = face.glyph_index(ch)?;
    let advance = face.glyph_hor_advance(glyph)?;
    Some(advance as f32 / units_per_em as f32)
}

pub(crate) fn face_line_height_em(face: &ttf_parser::Face<'_>) -> Option<f32> {
    let units_per_em = face.units_per_em();
    if units_per_em == 0 {
        return None;
    }
    let height = face.ascender() as i32 - face.descender() as i32 + face.line_gap() as i32;
    if height <= 0 {
        return None;
    }
    Some(height as f32 / units_per_em as f32)
}

fn find_name(face: &ttf_parser::Face<'_>, ids: &[u16]) -> Option<String> {
    ids.iter().find_map(|id| {
        // Mac Roman records come first in many fonts and do not decode;
        // keep looking for a Unicode record with the same ID.
        face.names()
            .into_iter()
            .filter(|n| n.name_id == *id)
            .find_map(|n| n.to_string())
    })
}

/// Extracts the PostScript name, falling back to the full name and then the
/// family name with spaces removed.
fn extract_postscript_name(face: &ttf_parser::Face<'_>) -> Option<String> {
    if let Some(ps_name) = find_name(face, &[ttf_parser::name_id::POST_SCRIPT_NAME]) {
        return Some(ps_name);
    }

    if let Some(full_name) = find_name(face, &[ttf_parser::name_id::FULL_NAME]) {
        log::debug!("Using Full Name (ID 4) as fallback: {}", full_name);
        return Some(full_name.replace(' ', ""));
    }

    if let Some(family) = find_name(face, &[ttf_parser::name_id::FAMILY]) {
        log::debug!("Using Family Name (ID 1) as fallback: {}", family);
        return Some(family.replace(' ', ""));
    }

    log::warn!("Could not extract any usable name from font data");
    None
}
