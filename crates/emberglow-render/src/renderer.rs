//! Core renderer trait defining the 2D drawing interface.
//!
//! The [`Renderer`] trait is the seam between widgets and whatever actually
//! puts pixels on screen. Widgets draw through it; a backend consumes the
//! result. This crate ships one backend, the recording
//! [`DisplayListRenderer`](crate::DisplayListRenderer); a GPU- or
//! window-system-backed implementation lives with the host.

use crate::paint::{Paint, Stroke};
use crate::text::Font;
use crate::types::{Color, Point, Rect, RoundedRect, Size};

/// Statistics from a recorded frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Number of draw operations submitted.
    pub draw_ops: u32,
}

/// The core 2D rendering trait.
///
/// # Frame Lifecycle
///
/// ```ignore
/// renderer.begin_frame(clear_color, viewport_size);
///
/// renderer.save();
/// renderer.translate(10.0, 10.0);
/// renderer.fill_rect(rect, Color::RED);
/// renderer.restore();
///
/// let stats = renderer.end_frame();
/// ```
///
/// # State Stack
///
/// The renderer maintains a translation state stack saved and restored with
/// [`save`](Self::save)/[`restore`](Self::restore); widget painting uses it
/// to draw each widget in its own local coordinate space.
pub trait Renderer {
    /// Begin a new frame, cleared to the given color.
    fn begin_frame(&mut self, clear_color: Color, viewport_size: Size);

    /// End the current frame and return statistics for it.
    fn end_frame(&mut self) -> FrameStats;

    /// Push the current transform state.
    fn save(&mut self);

    /// Pop the most recently saved transform state.
    fn restore(&mut self);

    /// Translate subsequent drawing by the given offset.
    fn translate(&mut self, dx: f32, dy: f32);

    /// Fill a rectangle.
    fn fill_rect(&mut self, rect: Rect, paint: impl Into<Paint>);

    /// Fill a rounded rectangle.
    fn fill_rounded_rect(&mut self, rect: RoundedRect, paint: impl Into<Paint>);

    /// Stroke a rectangle outline.
    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke);

    /// Stroke a rounded rectangle outline.
    fn stroke_rounded_rect(&mut self, rect: RoundedRect, stroke: &Stroke);

    /// Draw a line between two points.
    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke);

    /// Draw a single run of text at the given baseline-left position.
    fn draw_text(&mut self, text: &str, pos: Point, font: &Font, color: Color);
}
