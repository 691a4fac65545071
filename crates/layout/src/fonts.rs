//! The standard PDF base fonts a field may be set in.
//!
//! Only the Courier, Helvetica and Times families are supported. They are
//! guaranteed to be available in every PDF viewer, so no font data is ever
//! embedded. Unknown family names resolve to Courier.

use taxform_annotation::FontStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontFamily {
    Courier,
    Helvetica,
    TimesRoman,
}

impl FontFamily {
    /// Maps an annotation `font_family` name to a supported family.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Courier" => Some(FontFamily::Courier),
            "Helvetica" => Some(FontFamily::Helvetica),
            "Times-Roman" => Some(FontFamily::TimesRoman),
            _ => None,
        }
    }

    /// Like [`FontFamily::from_name`], falling back to Courier.
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            log::debug!("Font family '{}' is not a standard font, using Courier", name);
            FontFamily::Courier
        })
    }
}

/// A concrete base-14 face: a family plus its bold/italic variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StandardFont {
    pub family: FontFamily,
    pub bold: bool,
    pub italic: bool,
}

impl StandardFont {
    pub fn regular(family: FontFamily) -> Self {
        Self {
            family,
            bold: false,
            italic: false,
        }
    }

    pub fn from_style(style: &FontStyle) -> Self {
        Self {
            family: FontFamily::resolve(&style.font_family),
            bold: style.bold,
            italic: style.italic,
        }
    }

    /// The PostScript name used as the PDF `/BaseFont`.
    pub fn postscript_name(&self) -> &'static str {
        match (self.family, self.bold, self.italic) {
            (FontFamily::Courier, false, false) => "Courier",
            (FontFamily::Courier, true, false) => "Courier-Bold",
            (FontFamily::Courier, false, true) => "Courier-Oblique",
            (FontFamily::Courier, true, true) => "Courier-BoldOblique",
            (FontFamily::Helvetica, false, false) => "Helvetica",
            (FontFamily::Helvetica, true, false) => "Helvetica-Bold",
            (FontFamily::Helvetica, false, true) => "Helvetica-Oblique",
            (FontFamily::Helvetica, true, true) => "Helvetica-BoldOblique",
            (FontFamily::TimesRoman, false, false) => "Times-Roman",
            (FontFamily::TimesRoman, true, false) => "Times-Bold",
            (FontFamily::TimesRoman, false, true) => "Times-Italic",
            (FontFamily::TimesRoman, true, true) => "Times-BoldItalic",
        }
    }
}

impl Default for StandardFont {
    fn default() -> Self {
        Self::regular(FontFamily::Courier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_family_is_courier() {
        assert_eq!(FontFamily::resolve("Comic Sans"), FontFamily::Courier);
        assert_eq!(FontFamily::resolve("Helvetica"), FontFamily::Helvetica);
        assert_eq!(FontFamily::resolve("Times-Roman"), FontFamily::TimesRoman);
    }

    #[test]
    fn test_variant_names() {
        let style = FontStyle {
            font_family: "Times-Roman".to_string(),
            bold: true,
            italic: true,
            ..Default::default()
        };
        assert_eq!(StandardFont::from_style(&style).postscript_name(), "Times-BoldItalic");

        let style = FontStyle {
            font_family: "Helvetica".to_string(),
            italic: true,
            ..Default::default()
        };
        assert_eq!(StandardFont::from_style(&style).postscript_name(), "Helvetica-Oblique");
        assert_eq!(StandardFont::default().postscript_name(), "Courier");
    }
}
