//! Advance widths for the standard fonts.
//!
//! Widths are the Adobe AFM values for printable ASCII (`' '..='~'`), in
//! 1/1000 em, one table per face. Helvetica's oblique faces share the
//! upright widths, and every Courier face is 600 units wide.

use crate::fonts::{FontFamily, StandardFont};

/// Something that can report how wide a string renders.
pub trait TextMeasurer {
    fn measure_text_width(&self, text: &str, font: StandardFont, font_size: f32) -> f32;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure_text_width(&self, text: &str, font: StandardFont, font_size: f32) -> f32 {
        (**self).measure_text_width(text, font, font_size)
    }
}

#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

#[rustfmt::skip]
const TIMES_ROMAN_WIDTHS: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
];

#[rustfmt::skip]
const TIMES_BOLD_WIDTHS: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    930, 722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944, 722, 778,
    611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667, 333, 278, 333, 581, 500,
    333, 500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833, 556, 500,
    556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444, 394, 220, 394, 520,
];

#[rustfmt::skip]
const TIMES_ITALIC_WIDTHS: [u16; 95] = [
    250, 333, 420, 500, 500, 833, 778, 214, 333, 333, 500, 675, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 675, 675, 675, 500,
    920, 611, 611, 667, 722, 611, 611, 722, 722, 333, 444, 667, 556, 833, 667, 722,
    611, 722, 611, 500, 556, 722, 611, 833, 611, 556, 556, 389, 278, 389, 422, 500,
    333, 500, 500, 444, 500, 444, 278, 500, 500, 278, 278, 444, 278, 722, 500, 500,
    500, 500, 389, 389, 278, 500, 444, 667, 444, 444, 389, 400, 275, 400, 541,
];

#[rustfmt::skip]
const TIMES_BOLD_ITALIC_WIDTHS: [u16; 95] = [
    250, 389, 555, 500, 500, 833, 778, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    832, 667, 667, 667, 722, 667, 667, 722, 778, 389, 500, 667, 611, 889, 722, 722,
    611, 722, 667, 556, 611, 722, 667, 889, 667, 611, 611, 333, 278, 333, 570, 500,
    333, 500, 500, 444, 500, 444, 333, 500, 556, 278, 278, 500, 278, 778, 556, 500,
    500, 500, 389, 389, 278, 556, 444, 667, 500, 444, 389, 348, 220, 348, 570,
];

const COURIER_WIDTH: u16 = 600;

/// Measures with the built-in AFM tables. Stateless and cheap to copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFontMetrics;

impl StandardFontMetrics {
    fn widths(font: StandardFont) -> Option<&'static [u16; 95]> {
        let table = match (font.family, font.bold, font.italic) {
            (FontFamily::Courier, _, _) => return None,
            (FontFamily::Helvetica, false, _) => &HELVETICA_WIDTHS,
            (FontFamily::Helvetica, true, _) => &HELVETICA_BOLD_WIDTHS,
            (FontFamily::TimesRoman, false, false) => &TIMES_ROMAN_WIDTHS,
            (FontFamily::TimesRoman, true, false) => &TIMES_BOLD_WIDTHS,
            (FontFamily::TimesRoman, false, true) => &TIMES_ITALIC_WIDTHS,
            (FontFamily::TimesRoman, true, true) => &TIMES_BOLD_ITALIC_WIDTHS,
        };
        Some(table)
    }

    fn glyph_width(font: StandardFont, ch: char) -> u16 {
        match (Self::widths(font), ch) {
            (Some(table), ' '..='~') => table[ch as usize - ' ' as usize],
            _ => Self::average_width(font.family),
        }
    }

    /// Width used for characters outside the ASCII tables.
    fn average_width(family: FontFamily) -> u16 {
        match family {
            FontFamily::Courier => COURIER_WIDTH,
            FontFamily::Helvetica => 556,
            FontFamily::TimesRoman => 500,
        }
    }
}

impl TextMeasurer for StandardFontMetrics {
    fn measure_text_width(&self, text: &str, font: StandardFont, font_size: f32) -> f32 {
        let units: u32 = text
            .chars()
            .map(|ch| u32::from(Self::glyph_width(font, ch)))
            .sum();
        units as f32 / 1000.0 * font_size
    }
}
