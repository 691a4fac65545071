use serde::Deserialize;
use taxform_types::Color;

/// Horizontal placement of a field's text inside its box. Unknown tags
/// load as `Left`.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(from = "String")]
pub enum Alignment {
    #[default]
    Left,
    Right,
    Center,
}

impl From<String> for Alignment {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "left" => Alignment::Left,
            "right" => Alignment::Right,
            "center" => Alignment::Center,
            _ => {
                log::warn!("Unknown alignment '{}', using left", tag);
                Alignment::default()
            }
        }
    }
}

/// What to do when formatted text is wider than the field's interior.
/// Unknown tags load as `Truncate`.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(from = "String")]
pub enum OverflowBehavior {
    #[default]
    Truncate,
    Shrink,
    Wrap,
    Error,
}

impl From<String> for OverflowBehavior {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "truncate" => OverflowBehavior::Truncate,
            "shrink" => OverflowBehavior::Shrink,
            "wrap" => OverflowBehavior::Wrap,
            "error" => OverflowBehavior::Error,
            _ => {
                log::warn!("Unknown overflow behavior '{}', using truncate", tag);
                OverflowBehavior::default()
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct FontStyle {
    pub font_family: String,
    pub font_size: f32,
    pub bold: bool,
    pub italic: bool,
    pub color: Color,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self {
            font_family: "Courier".to_string(),
            font_size: 10.0,
            bold: false,
            italic: false,
            color: Color::black(),
        }
    }
}

/// Interior padding of a field box.
///
/// A field without a `padding` key gets 2pt on the left and right. A padding
/// object that names only some sides leaves the others at 0.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct Padding {
    #[serde(default)]
    pub top: f32,
    #[serde(default)]
    pub right: f32,
    #[serde(default)]
    pub bottom: f32,
    #[serde(default)]
    pub left: f32,
}

impl Padding {
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn is_non_negative(&self) -> bool {
        self.top >= 0.0 && self.right >= 0.0 && self.bottom >= 0.0 && self.left >= 0.0
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            top: 0.0,
            right: 2.0,
            bottom: 0.0,
            left: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_style_defaults_fill_missing_keys() {
        let style: FontStyle = serde_json::from_str(r#"{"font_family": "Helvetica"}"#).unwrap();
        assert_eq!(style.font_family, "Helvetica");
        assert_eq!(style.font_size, 10.0);
        assert!(!style.bold);
        assert_eq!(style.color, Color::black());
    }

    #[test]
    fn test_partial_padding_defaults_missing_sides_to_zero() {
        let padding: Padding = serde_json::from_str(r#"{"left": 5}"#).unwrap();
        assert_eq!(padding.left, 5.0);
        assert_eq!(padding.right, 0.0);
        assert_eq!(Padding::default().horizontal(), 4.0);
    }

    #[test]
    fn test_enum_tags_are_lowercase() {
        let a: Alignment = serde_json::from_str("\"center\"").unwrap();
        let o: OverflowBehavior = serde_json::from_str("\"shrink\"").unwrap();
        assert_eq!(a, Alignment::Center);
        assert_eq!(o, OverflowBehavior::Shrink);
    }

    #[test]
    fn test_unknown_enum_tags_fall_back_to_defaults() {
        let a: Alignment = serde_json::from_str("\"justify\"").unwrap();
        let o: OverflowBehavior = serde_json::from_str("\"ellipsis\"").unwrap();
        assert_eq!(a, Alignment::Left);
        assert_eq!(o, OverflowBehavior::Truncate);
    }

    #[test]
    fn test_unparseable_color_falls_back_to_black() {
        let style: FontStyle =
            serde_json::from_str(r#"{"font_family": "Helvetica", "color": "black"}"#).unwrap();
        assert_eq!(style.color, Color::black());
        assert_eq!(style.font_family, "Helvetica");
    }
}
