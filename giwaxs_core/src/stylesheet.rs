//! # Stylesheets
//!
//! Themes are stored as small CSS-like text files. Only flat declarations
//! matter; selectors and braces are accepted and ignored so existing
//! stylesheets keep a familiar shape:
//!
//! ```text
//! /* Dark Grey */
//! * {
//!     background: #2b2b2b;
//!     text: #dcdcdc;
//!     primary: #3d7ab8;
//! }
//! ```
//!
//! Later declarations of the same property win.

use serde::{Deserialize, Serialize};

/// An opaque RGB color with channels in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0.0, g: 0.0, b: 0.0 };
    pub const RED: Rgb = Rgb { r: 1.0, g: 0.0, b: 0.0 };

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Rgb { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb`
    pub fn from_hex(value: &str) -> Option<Self> {
        let hex = value.trim().strip_prefix('#')?;
        let channel = |s: &str| u8::from_str_radix(s, 16).ok().map(|v| v as f32 / 255.0);

        match hex.len() {
            3 => {
                let mut chars = hex.chars().map(|c| c.to_string().repeat(2));
                Some(Rgb::new(
                    channel(&chars.next()?)?,
                    channel(&chars.next()?)?,
                    channel(&chars.next()?)?,
                ))
            }
            6 => Some(Rgb::new(
                channel(hex.get(0..2)?)?,
                channel(hex.get(2..4)?)?,
                channel(hex.get(4..6)?)?,
            )),
            _ => None,
        }
    }

    /// Linear interpolation, `t` clamped to `0.0..=1.0`
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        Rgb::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }
}

/// Parsed declarations of a stylesheet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    declarations: Vec<(String, String)>,
}

impl Stylesheet {
    /// Parse stylesheet text. Malformed chunks are skipped.
    pub fn parse(text: &str) -> Self {
        let stripped = strip_comments(text);
        let declarations = stripped
            .split(|c| c == ';' || c == '{' || c == '}')
            .filter_map(|chunk| {
                let (key, value) = chunk.split_once(':')?;
                let key = key.trim();
                let value = value.trim();
                if key.is_empty() || value.is_empty() || key.contains(char::is_whitespace) {
                    return None;
                }
                Some((key.to_ascii_lowercase(), value.to_string()))
            })
            .collect();

        Stylesheet { declarations }
    }

    /// Last value declared for `property`
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .find(|(key, _)| key == property)
            .map(|(_, value)| value.as_str())
    }

    /// Property value parsed as a hex color
    pub fn color(&self, property: &str) -> Option<Rgb> {
        self.get(property).and_then(Rgb::from_hex)
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        match rest[start + 2..].find("*/") {
            Some(end) => rest = &rest[start + 2 + end + 2..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_colors() {
        assert_eq!(Rgb::from_hex("#ff0000"), Some(Rgb::RED));
        assert_eq!(Rgb::from_hex("#000"), Some(Rgb::BLACK));
        assert_eq!(Rgb::from_hex(" #FFFFFF "), Some(Rgb::new(1.0, 1.0, 1.0)));
        assert_eq!(Rgb::from_hex("ff0000"), None);
        assert_eq!(Rgb::from_hex("#12345"), None);
        assert_eq!(Rgb::from_hex("#gg0000"), None);
    }

    #[test]
    fn test_lerp_endpoints_and_clamp() {
        assert_eq!(Rgb::RED.lerp(Rgb::BLACK, 0.0), Rgb::RED);
        assert_eq!(Rgb::RED.lerp(Rgb::BLACK, 1.0), Rgb::BLACK);
        assert_eq!(Rgb::RED.lerp(Rgb::BLACK, 3.0), Rgb::BLACK);
        assert_eq!(Rgb::RED.lerp(Rgb::BLACK, 0.5), Rgb::new(0.5, 0.0, 0.0));
    }

    #[test]
    fn test_parse_block_with_comments() {
        let sheet = Stylesheet::parse(
            "/* Dark Grey */\n* {\n  background: #2b2b2b;\n  Text: #dcdcdc;\n}\n",
        );
        assert_eq!(sheet.get("background"), Some("#2b2b2b"));
        assert_eq!(sheet.color("text"), Rgb::from_hex("#dcdcdc"));
        assert_eq!(sheet.get("primary"), None);
    }

    #[test]
    fn test_later_declaration_wins() {
        let sheet = Stylesheet::parse("primary: #111111; primary: #222222");
        assert_eq!(sheet.get("primary"), Some("#222222"));
    }

    #[test]
    fn test_garbage_is_skipped() {
        let sheet = Stylesheet::parse("QWidget font size 10; : #fff; danger:;");
        assert!(sheet.is_empty());
    }

    #[test]
    fn test_unterminated_comment_drops_rest() {
        let sheet = Stylesheet::parse("text: #ffffff; /* background: #000000;");
        assert_eq!(sheet.get("text"), Some("#ffffff"));
        assert_eq!(sheet.get("background"), None);
    }
}
