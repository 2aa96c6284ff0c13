//! Themes and color palettes for Emberglow.
//!
//! Widgets resolve their colors from a [`Theme`]'s semantic
//! [`ColorPalette`] on demand, so a theme change restyles everything
//! consistently. Theme changes are delivered to widgets as an explicit
//! notification by the widget layer; this crate only defines the data.

pub mod theme;

pub use theme::{ColorPalette, Theme, ThemeMode};
