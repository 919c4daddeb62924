//! Resolved theme colors for rendering.

use std::str::FromStr;

use ratatui::style::Color;
use slidephant_core::config::ThemeConfig;
use tracing::warn;

/// Theme colors resolved from config strings.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub heading: Color,
    pub code: Color,
    pub accent: Color,
    pub footer: Color,
}

impl Theme {
    /// Resolves config strings to colors. Unknown values degrade to the
    /// built-in defaults rather than failing the presentation.
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            heading: parse_color(&config.heading, Color::Cyan),
            code: parse_color(&config.code, Color::Yellow),
            accent: parse_color(&config.accent, Color::Green),
            footer: parse_color(&config.footer, Color::Gray),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

fn parse_color(raw: &str, fallback: Color) -> Color {
    Color::from_str(raw).unwrap_or_else(|_| {
        warn!(value = raw, "unknown theme color, using default");
        fallback
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_and_hex_colors_parse() {
        assert_eq!(parse_color("magenta", Color::Gray), Color::Magenta);
        assert_eq!(
            parse_color("#ffcc00", Color::Gray),
            Color::Rgb(0xff, 0xcc, 0x00)
        );
    }

    #[test]
    fn test_unknown_color_falls_back() {
        assert_eq!(parse_color("not-a-color", Color::Cyan), Color::Cyan);
    }

    #[test]
    fn test_default_theme_matches_default_config() {
        let theme = Theme::default();
        assert_eq!(theme.heading, Color::Cyan);
        assert_eq!(theme.code, Color::Yellow);
    }
}
