use serde::{Deserialize, Deserializer, de};
use std::hash::{Hash, Hasher};

fn default_one() -> f32 {
    1.0
}

/// An RGBA color. Deserializes from `#RGB`, `#RRGGBB` or an `{r, g, b}` map;
/// anything else loads as black.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.r.hash(state);
        self.g.hash(state);
        self.b.hash(state);
        self.a.to_bits().hash(state);
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl Color {
    pub fn black() -> Self {
        Self::gray(0)
    }

    pub fn gray(value: u8) -> Self {
        Self {
            r: value,
            g: value,
            b: value,
            a: 1.0,
        }
    }

    /// Components scaled to the 0.0..=1.0 range used by PDF color operators.
    pub fn to_unit_rgb(&self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Parse a hex color string (#RGB or #RRGGBB format)
    pub fn parse_hex(s: &str) -> Result<Color, String> {
        let s = s.trim();
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| format!("Color must start with #, got: {}", s))?;

        let component = |digits: &str, name: &str| {
            u8::from_str_radix(digits, 16).map_err(|e| format!("Invalid {} component: {}", name, e))
        };

        match hex.len() {
            3 if hex.is_ascii() => Ok(Color {
                r: component(&hex[0..1].repeat(2), "red")?,
                g: component(&hex[1..2].repeat(2), "green")?,
                b: component(&hex[2..3].repeat(2), "blue")?,
                a: 1.0,
            }),
            6 if hex.is_ascii() => Ok(Color {
                r: component(&hex[0..2], "red")?,
                g: component(&hex[2..4], "green")?,
                b: component(&hex[4..6], "blue")?,
                a: 1.0,
            }),
            _ => Err(format!(
                "Invalid hex color length: expected 3 or 6, got {}",
                hex.len()
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map {
                r: u8,
                g: u8,
                b: u8,
                #[serde(default = "default_one")]
                a: f32,
            },
            Other(de::IgnoredAny),
        }

        Ok(match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Self::parse_hex(&s).unwrap_or_else(|e| {
                log::warn!("{}; using black", e);
                Color::black()
            }),
            ColorDef::Map { r, g, b, a } => Color { r, g, b, a },
            ColorDef::Other(_) => {
                log::warn!("Unsupported color value; using black");
                Color::black()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_and_short_hex() {
        assert_eq!(Color::parse_hex("#000000").unwrap(), Color::black());
        let short = Color::parse_hex("#f80").unwrap();
        assert_eq!((short.r, short.g, short.b), (0xff, 0x88, 0x00));
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert!(Color::parse_hex("000000").is_err());
        assert!(Color::parse_hex("#12").is_err());
        assert!(Color::parse_hex("#zzzzzz").is_err());
    }

    #[test]
    fn test_deserialize_from_string_and_map() {
        let c: Color = serde_json::from_str("\"#1a2b3c\"").unwrap();
        assert_eq!((c.r, c.g, c.b), (0x1a, 0x2b, 0x3c));
        let m: Color = serde_json::from_str(r#"{"r": 10, "g": 20, "b": 30}"#).unwrap();
        assert_eq!(m.a, 1.0);
        assert_eq!(m.to_unit_rgb()[0], 10.0 / 255.0);
    }

    #[test]
    fn test_deserialize_unparseable_color_as_black() {
        let named: Color = serde_json::from_str("\"black\"").unwrap();
        assert_eq!(named, Color::black());
        let bad_hex: Color = serde_json::from_str("\"#12345\"").unwrap();
        assert_eq!(bad_hex, Color::black());
        let out_of_range: Color = serde_json::from_str(r#"{"r": 300, "g": 0, "b": 0}"#).unwrap();
        assert_eq!(out_of_range, Color::black());
        let number: Color = serde_json::from_str("42").unwrap();
        assert_eq!(number, Color::black());
    }
}
