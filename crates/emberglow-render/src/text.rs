//! Label text measurement.
//!
//! Widgets need to know how large a label will be before they can size
//! themselves or center the text inside their chrome. [`TextLayout`] shapes
//! a single-style string with `cosmic-text` and exposes its measured
//! bounds. Actual glyph rasterization is the backend's job; the display
//! list carries text as recorded runs.

use cosmic_text::{Attrs, Buffer, Family, Metrics, Shaping, Weight};

/// A font family request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FontFamily {
    /// The platform's default sans-serif face.
    #[default]
    SansSerif,
    /// The platform's default serif face.
    Serif,
    /// The platform's default monospace face.
    Monospace,
    /// A named family.
    Name(String),
}

impl FontFamily {
    fn to_cosmic(&self) -> Family<'_> {
        match self {
            Self::SansSerif => Family::SansSerif,
            Self::Serif => Family::Serif,
            Self::Monospace => Family::Monospace,
            Self::Name(name) => Family::Name(name),
        }
    }
}

/// A font weight (100-900, CSS scale).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (400).
    pub const NORMAL: Self = Self(400);
    /// Medium weight (500).
    pub const MEDIUM: Self = Self(500);
    /// Semibold weight (600).
    pub const SEMIBOLD: Self = Self(600);
    /// Bold weight (700).
    pub const BOLD: Self = Self(700);
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// A font specification: family, size, and weight.
///
/// `Font` does not reference font data directly; [`FontSystem`] resolves it
/// during shaping.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: FontFamily,
    size: f32,
    weight: FontWeight,
}

impl Font {
    /// Create a font with the given family and pixel size.
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self {
            family,
            size,
            weight: FontWeight::NORMAL,
        }
    }

    /// Set the weight using builder pattern.
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// The font family.
    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    /// The font size in pixels.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// The font weight.
    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    /// The default line height for this font.
    pub fn line_height(&self) -> f32 {
        self.size * 1.2
    }

    /// Build `cosmic-text` attributes for this font.
    pub fn to_attrs(&self) -> Attrs<'_> {
        Attrs::new()
            .family(self.family.to_cosmic())
            .weight(Weight(self.weight.0))
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(FontFamily::SansSerif, 14.0)
    }
}

/// Shared font database and shaping context.
///
/// Wraps `cosmic_text::FontSystem`. Construction scans system fonts, so
/// hosts should create one and reuse it where possible.
pub struct FontSystem {
    inner: cosmic_text::FontSystem,
}

impl FontSystem {
    /// Create a font system backed by the platform's installed fonts.
    pub fn new() -> Self {
        Self {
            inner: cosmic_text::FontSystem::new(),
        }
    }

    /// Access the underlying `cosmic-text` font system.
    pub fn inner_mut(&mut self) -> &mut cosmic_text::FontSystem {
        &mut self.inner
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// The measured bounds of a shaped, single-style string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextLayout {
    width: f32,
    height: f32,
}

impl TextLayout {
    /// Shape `text` with `font` and measure it.
    ///
    /// Empty text measures as zero wide and one line high.
    pub fn new(font_system: &mut FontSystem, text: &str, font: &Font) -> Self {
        if text.is_empty() {
            return Self {
                width: 0.0,
                height: font.line_height(),
            };
        }

        let metrics = Metrics::new(font.size(), font.line_height());
        let mut buffer = Buffer::new(font_system.inner_mut(), metrics);
        // Unconstrained: the label decides its own size.
        buffer.set_size(font_system.inner_mut(), None, None);
        buffer.set_text(
            font_system.inner_mut(),
            text,
            font.to_attrs(),
            Shaping::Advanced,
        );
        buffer.shape_until_scroll(font_system.inner_mut(), false);

        let mut width = 0.0f32;
        let mut height = 0.0f32;
        for run in buffer.layout_runs() {
            width = width.max(run.line_w);
            height = height.max(run.line_top + run.line_height);
        }
        if height == 0.0 {
            height = font.line_height();
        }

        Self { width, height }
    }

    /// The measured width in pixels.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// The measured height in pixels.
    pub fn height(&self) -> f32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_line_height() {
        let mut font_system = FontSystem::new();
        let font = Font::default();
        let layout = TextLayout::new(&mut font_system, "", &font);
        assert_eq!(layout.width(), 0.0);
        assert!((layout.height() - font.line_height()).abs() < 1e-6);
    }

    #[test]
    fn longer_text_is_not_narrower() {
        let mut font_system = FontSystem::new();
        let font = Font::default();
        let short = TextLayout::new(&mut font_system, "Hi", &font);
        let long = TextLayout::new(&mut font_system, "Hi there, widget", &font);
        // On systems without installed fonts both may measure 0 wide; the
        // long string must never measure narrower than the short one.
        assert!(long.width() >= short.width());
    }

    #[test]
    fn font_builder() {
        let font = Font::new(FontFamily::Monospace, 12.0).with_weight(FontWeight::BOLD);
        assert_eq!(font.size(), 12.0);
        assert_eq!(font.weight(), FontWeight::BOLD);
        assert_eq!(*font.family(), FontFamily::Monospace);
    }
}
