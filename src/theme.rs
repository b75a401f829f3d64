//! Light and dark themes for the host screen
//!
//! The host screen only ever shows one of two palettes. Toggling dark mode
//! swaps the whole `AppTheme`; widget colors from config are layered on top.

use ratatui::style::Color;

/// Colors used by the host screen and its widgets
#[derive(Debug, Clone, PartialEq)]
pub struct AppTheme {
    pub name: String,

    // Window colors
    pub window_border: Color,
    pub window_background: Color,
    pub window_title: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Healthbar
    pub bar_fill: Color,
    pub bar_background: Color,
    pub bar_text: Color,

    // Switch
    pub switch_on: Color,
    pub switch_off: Color,
    pub switch_knob: Color,
}

pub struct ThemePresets;

impl ThemePresets {
    /// Preset for the given dark-mode flag
    pub fn for_mode(dark: bool) -> AppTheme {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn dark() -> AppTheme {
        AppTheme {
            name: "Dark".to_string(),

            window_border: Color::Cyan,
            window_background: Color::Black,
            window_title: Color::White,

            text_primary: Color::White,
            text_secondary: Color::Gray,

            bar_fill: Color::Rgb(200, 30, 30),
            bar_background: Color::Rgb(40, 40, 40),
            bar_text: Color::White,

            switch_on: Color::Rgb(33, 150, 243),
            switch_off: Color::Rgb(74, 74, 74),
            switch_knob: Color::White,
        }
    }

    pub fn light() -> AppTheme {
        AppTheme {
            name: "Light".to_string(),

            window_border: Color::Blue,
            window_background: Color::White,
            window_title: Color::Black,

            text_primary: Color::Black,
            text_secondary: Color::Rgb(80, 80, 80),

            bar_fill: Color::Rgb(220, 20, 60),
            bar_background: Color::Rgb(230, 230, 230),
            bar_text: Color::Black,

            switch_on: Color::Rgb(33, 150, 243),
            switch_off: Color::Rgb(204, 204, 204),
            switch_knob: Color::White,
        }
    }
}

/// Parse a `#rrggbb` hex color
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#ff0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("00FF7f"), Some(Color::Rgb(0, 255, 127)));
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#gg0000"), None);
        assert_eq!(parse_hex_color(""), None);
    }

    #[test]
    fn test_presets_differ_by_mode() {
        let dark = ThemePresets::for_mode(true);
        let light = ThemePresets::for_mode(false);
        assert_eq!(dark.name, "Dark");
        assert_eq!(light.name, "Light");
        assert_ne!(dark.window_background, light.window_background);
    }
}
