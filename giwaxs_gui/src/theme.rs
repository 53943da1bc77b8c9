//! Application-wide appearance.
//!
//! Stylesheets are parsed into color overrides on top of the current
//! built-in iced theme. Built-in styles are looked up by their display name
//! (`"Dark"`, `"Light"`, `"Dracula"`, ...).

use iced::{Color, Theme};

use giwaxs_core::stylesheet::{Rgb, Stylesheet};

/// Name given to themes built from a stylesheet
const STYLESHEET_THEME_NAME: &str = "GIWAXS";

/// The applied style of the whole application
#[derive(Debug, Clone)]
pub struct Appearance {
    builtin: Theme,
    stylesheet: Option<Stylesheet>,
    theme: Theme,
}

impl Default for Appearance {
    fn default() -> Self {
        Appearance {
            builtin: Theme::Dark,
            stylesheet: None,
            theme: Theme::Dark,
        }
    }
}

impl Appearance {
    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    /// Replace the stylesheet; empty text clears it
    pub fn set_stylesheet(&mut self, text: &str) {
        self.stylesheet = if text.trim().is_empty() {
            None
        } else {
            Some(Stylesheet::parse(text))
        };
        self.rebuild();
    }

    /// Switch the built-in base theme. Unknown names leave it unchanged.
    pub fn set_builtin(&mut self, name: &str) -> bool {
        match builtin_theme(name) {
            Some(theme) => {
                self.builtin = theme;
                self.rebuild();
                true
            }
            None => false,
        }
    }

    fn rebuild(&mut self) {
        self.theme = match &self.stylesheet {
            Some(sheet) if !sheet.is_empty() => {
                let mut palette = self.builtin.palette();
                if let Some(c) = sheet.color("background") {
                    palette.background = to_color(c);
                }
                if let Some(c) = sheet.color("text") {
                    palette.text = to_color(c);
                }
                if let Some(c) = sheet.color("primary") {
                    palette.primary = to_color(c);
                }
                if let Some(c) = sheet.color("success") {
                    palette.success = to_color(c);
                }
                if let Some(c) = sheet.color("danger") {
                    palette.danger = to_color(c);
                }
                Theme::custom(STYLESHEET_THEME_NAME.to_string(), palette)
            }
            _ => self.builtin.clone(),
        };
    }
}

/// Built-in iced theme by display name, case-insensitive
pub fn builtin_theme(name: &str) -> Option<Theme> {
    Theme::ALL
        .iter()
        .find(|theme| theme.to_string().eq_ignore_ascii_case(name))
        .cloned()
}

pub fn to_color(rgb: Rgb) -> Color {
    Color::from_rgb(rgb.r, rgb.g, rgb.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        assert_eq!(builtin_theme("light"), Some(Theme::Light));
        assert_eq!(builtin_theme("Dracula"), Some(Theme::Dracula));
        assert_eq!(builtin_theme("Fusion"), None);
    }

    #[test]
    fn test_stylesheet_overrides_palette() {
        let mut appearance = Appearance::default();
        appearance.set_stylesheet("background: #ff0000;");
        assert_eq!(appearance.theme().palette().background, Color::from_rgb(1.0, 0.0, 0.0));

        appearance.set_stylesheet("");
        assert_eq!(appearance.theme(), Theme::Dark);
    }

    #[test]
    fn test_unknown_builtin_keeps_current() {
        let mut appearance = Appearance::default();
        assert!(appearance.set_builtin("Light"));
        assert!(!appearance.set_builtin("Fusion"));
        assert_eq!(appearance.theme(), Theme::Light);
    }
}
