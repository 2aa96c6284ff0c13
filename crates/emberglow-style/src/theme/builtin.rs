//! Built-in themes.

use super::ColorPalette;

/// The overall appearance mode of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light backgrounds, dark text.
    #[default]
    Light,
    /// Dark backgrounds, light text.
    Dark,
}

/// A complete visual theme.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Appearance mode.
    pub mode: ThemeMode,
    /// Color palette.
    pub palette: ColorPalette,
}

impl Theme {
    /// The built-in light theme.
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            palette: ColorPalette::light(),
        }
    }

    /// The built-in dark theme.
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            palette: ColorPalette::dark(),
        }
    }

    /// Create a custom theme from a palette.
    pub fn custom(mode: ThemeMode, palette: ColorPalette) -> Self {
        Self { mode, palette }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_modes() {
        assert_eq!(Theme::light().mode, ThemeMode::Light);
        assert_eq!(Theme::dark().mode, ThemeMode::Dark);
        assert_eq!(Theme::default(), Theme::light());
    }

    #[test]
    fn custom_keeps_palette() {
        let palette = ColorPalette::dark();
        let theme = Theme::custom(ThemeMode::Dark, palette.clone());
        assert_eq!(theme.palette, palette);
    }
}
