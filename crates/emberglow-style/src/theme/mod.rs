//! Theme system with built-in light and dark themes.

mod builtin;
mod palette;

pub use builtin::{Theme, ThemeMode};
pub use palette::ColorPalette;
