//! 2D drawing types and a recording renderer backend for Emberglow.
//!
//! This crate defines the geometry, color, and paint vocabulary widgets
//! draw with, the [`Renderer`] trait they draw through, and a
//! [`DisplayListRenderer`] backend that records draw calls for a host
//! backend to replay (and for tests to inspect). Label measurement is
//! provided on top of `cosmic-text`.

mod display_list;
mod error;
mod paint;
mod renderer;
mod text;
mod types;

pub use display_list::{DisplayItem, DisplayList, DisplayListRenderer};
pub use error::{RenderError, RenderResult};
pub use paint::{Paint, Stroke};
pub use renderer::{FrameStats, Renderer};
pub use text::{Font, FontFamily, FontSystem, FontWeight, TextLayout};
pub use types::{Color, Point, Rect, RoundedRect, Size};
