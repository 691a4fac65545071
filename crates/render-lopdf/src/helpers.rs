use lopdf::content::Operation;
use lopdf::{Object, StringFormat};
use taxform_types::Color;

/// Gray used to stroke debug field boxes.
pub const DEBUG_STROKE_GRAY: f32 = 0.8;
/// Line width of debug field boxes.
pub const DEBUG_STROKE_WIDTH: f32 = 0.5;

/// Encodes text for a `WinAnsiEncoding` font. Characters outside Latin-1
/// become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| if c as u32 <= 255 { c as u8 } else { b'?' })
        .collect()
}

pub fn literal(s: &str) -> Object {
    Object::String(to_win_ansi(s), StringFormat::Literal)
}

pub fn fill_color_op(color: Color) -> Operation {
    let [r, g, b] = color.to_unit_rgb();
    Operation::new("rg", vec![r.into(), g.into(), b.into()])
}
