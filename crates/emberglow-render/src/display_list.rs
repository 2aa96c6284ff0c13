//! A recording renderer backend.
//!
//! [`DisplayListRenderer`] records every draw call into a [`DisplayList`]
//! instead of rasterizing. Hosts replay the list against their GPU or
//! software surface; tests inspect it to assert what a widget painted.
//! Translation from `save`/`restore`/`translate` is baked into the recorded
//! geometry, so items are always in frame coordinates.

use crate::error::{RenderError, RenderResult};
use crate::paint::{Paint, Stroke};
use crate::renderer::{FrameStats, Renderer};
use crate::text::Font;
use crate::types::{Color, Point, Rect, RoundedRect, Size};

/// A single recorded draw operation, in frame coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayItem {
    /// Filled rectangle.
    FillRect { rect: Rect, paint: Paint },
    /// Filled rounded rectangle.
    FillRoundedRect { rect: RoundedRect, paint: Paint },
    /// Stroked rectangle outline.
    StrokeRect { rect: Rect, stroke: Stroke },
    /// Stroked rounded rectangle outline.
    StrokeRoundedRect { rect: RoundedRect, stroke: Stroke },
    /// Line segment.
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    /// A run of text.
    TextRun {
        text: String,
        pos: Point,
        font: Font,
        color: Color,
    },
}

impl DisplayItem {
    /// The solid fill color of this item, if it is a fill operation.
    pub fn fill_color(&self) -> Option<Color> {
        match self {
            Self::FillRect { paint, .. } | Self::FillRoundedRect { paint, .. } => paint.as_solid(),
            _ => None,
        }
    }
}

/// A completed frame's recorded operations.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    /// The color the frame was cleared to.
    pub clear_color: Color,
    /// The viewport the frame was recorded for.
    pub viewport: Size,
    items: Vec<DisplayItem>,
}

impl DisplayList {
    /// The recorded items, in draw order.
    pub fn items(&self) -> &[DisplayItem] {
        &self.items
    }

    /// Number of recorded items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the solid fill colors in draw order.
    ///
    /// Convenient for asserting what background a widget painted.
    pub fn fill_colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.items.iter().filter_map(DisplayItem::fill_color)
    }
}

/// Saved translation state.
#[derive(Debug, Clone, Copy, Default)]
struct RenderState {
    offset: Point,
}

/// A [`Renderer`] that records draw calls into a [`DisplayList`].
#[derive(Debug, Default)]
pub struct DisplayListRenderer {
    list: DisplayList,
    state: RenderState,
    state_stack: Vec<RenderState>,
    frame_active: bool,
    draw_ops: u32,
}

impl DisplayListRenderer {
    /// Create a new, empty recording renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the recorded display list for the last completed frame.
    ///
    /// Fails if a frame is still being recorded or if `save`/`restore`
    /// calls were left unbalanced.
    pub fn finish(&mut self) -> RenderResult<DisplayList> {
        if self.frame_active {
            return Err(RenderError::FrameInProgress);
        }
        if !self.state_stack.is_empty() {
            return Err(RenderError::UnbalancedSave {
                depth: self.state_stack.len(),
            });
        }
        Ok(std::mem::take(&mut self.list))
    }

    fn offset_point(&self, p: Point) -> Point {
        Point::new(p.x + self.state.offset.x, p.y + self.state.offset.y)
    }

    fn offset_rect(&self, rect: Rect) -> Rect {
        rect.translated(self.state.offset.x, self.state.offset.y)
    }

    fn offset_rounded(&self, rect: RoundedRect) -> RoundedRect {
        rect.translated(self.state.offset.x, self.state.offset.y)
    }

    fn record(&mut self, item: DisplayItem) {
        self.draw_ops += 1;
        self.list.items.push(item);
    }
}

impl Renderer for DisplayListRenderer {
    fn begin_frame(&mut self, clear_color: Color, viewport_size: Size) {
        if self.frame_active {
            tracing::warn!(target: "emberglow_render", "begin_frame called with a frame already active; discarding it");
        }
        self.list = DisplayList {
            clear_color,
            viewport: viewport_size,
            items: Vec::new(),
        };
        self.state = RenderState::default();
        self.state_stack.clear();
        self.frame_active = true;
        self.draw_ops = 0;
    }

    fn end_frame(&mut self) -> FrameStats {
        if !self.frame_active {
            tracing::warn!(target: "emberglow_render", "end_frame called without an active frame");
            return FrameStats::default();
        }
        self.frame_active = false;
        FrameStats {
            draw_ops: self.draw_ops,
        }
    }

    fn save(&mut self) {
        self.state_stack.push(self.state);
    }

    fn restore(&mut self) {
        match self.state_stack.pop() {
            Some(state) => self.state = state,
            None => {
                tracing::warn!(target: "emberglow_render", "restore called with an empty state stack");
            }
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.state.offset.x += dx;
        self.state.offset.y += dy;
    }

    fn fill_rect(&mut self, rect: Rect, paint: impl Into<Paint>) {
        let rect = self.offset_rect(rect);
        self.record(DisplayItem::FillRect {
            rect,
            paint: paint.into(),
        });
    }

    fn fill_rounded_rect(&mut self, rect: RoundedRect, paint: impl Into<Paint>) {
        let rect = self.offset_rounded(rect);
        self.record(DisplayItem::FillRoundedRect {
            rect,
            paint: paint.into(),
        });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        let rect = self.offset_rect(rect);
        self.record(DisplayItem::StrokeRect {
            rect,
            stroke: *stroke,
        });
    }

    fn stroke_rounded_rect(&mut self, rect: RoundedRect, stroke: &Stroke) {
        let rect = self.offset_rounded(rect);
        self.record(DisplayItem::StrokeRoundedRect {
            rect,
            stroke: *stroke,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        let from = self.offset_point(from);
        let to = self.offset_point(to);
        self.record(DisplayItem::Line {
            from,
            to,
            stroke: *stroke,
        });
    }

    fn draw_text(&mut self, text: &str, pos: Point, font: &Font, color: Color) {
        let pos = self.offset_point(pos);
        self.record(DisplayItem::TextRun {
            text: text.to_owned(),
            pos,
            font: font.clone(),
            color,
        });
    }
}
