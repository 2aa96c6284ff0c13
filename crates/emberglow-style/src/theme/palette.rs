//! Color palette definitions.

use emberglow_render::Color;

/// A semantic color palette for theming.
///
/// Widgets read colors by role rather than by value, so a palette swap
/// restyles every widget consistently.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPalette {
    // Primary colors
    /// Main brand color.
    pub primary: Color,
    /// Lighter variant of the primary color.
    pub primary_light: Color,
    /// Darker variant of the primary color.
    pub primary_dark: Color,
    /// Text/icon color for content on primary color.
    pub on_primary: Color,

    /// Selection/hover emphasis color.
    pub highlight: Color,

    // Background colors
    /// Main background color.
    pub background: Color,
    /// Surface/card background color.
    pub surface: Color,

    // Control colors
    /// Resting background color for buttons and similar controls.
    pub button: Color,
    /// Text color on control faces.
    pub button_text: Color,

    // Text colors
    /// Primary text color.
    pub text_primary: Color,
    /// Secondary/muted text color.
    pub text_secondary: Color,
    /// Disabled text color.
    pub text_disabled: Color,

    // Border colors
    /// Standard border color.
    pub border: Color,
    /// Divider/separator color.
    pub divider: Color,
}

impl ColorPalette {
    /// Create a light theme palette.
    pub fn light() -> Self {
        Self {
            // Primary - blue
            primary: Color::from_rgb8(0x00, 0x7A, 0xFF),
            primary_light: Color::from_rgb8(0x4D, 0xA3, 0xFF),
            primary_dark: Color::from_rgb8(0x00, 0x56, 0xB3),
            on_primary: Color::WHITE,

            highlight: Color::from_rgb8(0x33, 0x99, 0xFF),

            // Background
            background: Color::WHITE,
            surface: Color::from_rgb8(0xF8, 0xF9, 0xFA),

            // Controls
            button: Color::from_rgb8(0xE9, 0xEC, 0xEF),
            button_text: Color::from_rgb8(0x21, 0x25, 0x29),

            // Text
            text_primary: Color::from_rgb8(0x21, 0x25, 0x29),
            text_secondary: Color::from_rgb8(0x6C, 0x75, 0x7D),
            text_disabled: Color::from_rgb8(0xAD, 0xB5, 0xBD),

            // Borders
            border: Color::from_rgb8(0xDE, 0xE2, 0xE6),
            divider: Color::from_rgb8(0xCE, 0xD4, 0xDA),
        }
    }

    /// Create a dark theme palette.
    pub fn dark() -> Self {
        Self {
            // Primary - blue (slightly brighter for dark mode)
            primary: Color::from_rgb8(0x0A, 0x84, 0xFF),
            primary_light: Color::from_rgb8(0x5E, 0xB1, 0xFF),
            primary_dark: Color::from_rgb8(0x00, 0x56, 0xB3),
            on_primary: Color::WHITE,

            highlight: Color::from_rgb8(0x40, 0x9C, 0xFF),

            // Background
            background: Color::from_rgb8(0x1C, 0x1C, 0x1E),
            surface: Color::from_rgb8(0x2C, 0x2C, 0x2E),

            // Controls
            button: Color::from_rgb8(0x3A, 0x3A, 0x3C),
            button_text: Color::WHITE,

            // Text
            text_primary: Color::WHITE,
            text_secondary: Color::from_rgb8(0x8E, 0x8E, 0x93),
            text_disabled: Color::from_rgb8(0x63, 0x63, 0x66),

            // Borders
            border: Color::from_rgb8(0x38, 0x38, 0x3A),
            divider: Color::from_rgb8(0x54, 0x54, 0x56),
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_and_dark_differ() {
        let light = ColorPalette::light();
        let dark = ColorPalette::dark();
        assert_ne!(light.background, dark.background);
        assert_ne!(light.button, dark.button);
    }

    #[test]
    fn default_is_light() {
        assert_eq!(ColorPalette::default(), ColorPalette::light());
    }
}
