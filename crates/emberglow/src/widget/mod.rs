//! Widget system for Emberglow.
//!
//! This module provides the widget architecture the kit's controls are
//! built on:
//!
//! - [`Widget`] trait: the base trait for all UI elements
//! - [`WidgetBase`]: common implementation for widget functionality
//! - [`WidgetEvent`]: input, timer, and theme-change events
//! - [`animation`]: easing and timed color transitions
//! - [`widgets`]: the button widgets themselves
//!
//! # Creating a Widget
//!
//! 1. Define a struct with a [`WidgetBase`] field
//! 2. Implement [`Widget`] (and `Object` by delegation)
//! 3. Provide `size_hint()` for layout
//! 4. Implement `paint()` for rendering
//!
//! ```ignore
//! use emberglow::widget::*;
//! use emberglow_render::Color;
//!
//! struct ColorBox {
//!     base: WidgetBase,
//!     color: Color,
//! }
//!
//! impl Widget for ColorBox {
//!     fn widget_base(&self) -> &WidgetBase { &self.base }
//!     fn widget_base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
//!
//!     fn size_hint(&self) -> SizeHint {
//!         SizeHint::from_dimensions(100.0, 100.0)
//!     }
//!
//!     fn paint(&self, ctx: &mut PaintContext<'_>) {
//!         ctx.renderer().fill_rect(ctx.rect(), self.color);
//!     }
//! }
//! ```
//!
//! # Event Delivery
//!
//! The host's event loop delivers [`WidgetEvent`]s through
//! [`Widget::event`]: pointer enter/leave as hover edges, fired timers
//! (looked up via [`widget_timer`]) as [`TimerEvent`]s, and theme swaps as
//! [`ThemeChangeEvent`]s.

pub mod animation;
mod base;
mod events;
mod geometry;
mod traits;
pub mod widget_timer;
pub mod widgets;

pub use base::WidgetBase;
pub use events::{
    EnterEvent, EventBase, Key, KeyPressEvent, KeyReleaseEvent, KeyboardModifiers, LeaveEvent,
    MouseButton, MousePressEvent, MouseReleaseEvent, PaintEvent, ResizeEvent, ThemeChangeEvent,
    TimerEvent, WidgetEvent,
};
pub use geometry::{SizeHint, SizePolicy, SizePolicyPair};
pub use traits::{AsWidget, PaintContext, Widget};

// Re-export widgets for convenience
pub use widgets::{AbstractButton, HoverButton};
