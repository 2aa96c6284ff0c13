//! Emberglow - animated hover-transition widgets for Rust desktop UIs.
//!
//! The kit's flagship widget is
//! [`HoverButton`](widget::widgets::HoverButton), a push button whose fill
//! color sweeps between the theme's resting color and its highlight color
//! as the pointer enters and leaves, with smooth mid-sweep reversal when
//! the pointer changes direction.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use emberglow::widget::widgets::HoverButton;
//! use emberglow_core::{init_global_registry, init_global_timers};
//!
//! init_global_registry();
//! init_global_timers();
//!
//! let button = HoverButton::new("Hover me")
//!     .with_transition_duration(Duration::from_millis(400));
//!
//! button.clicked().connect(|()| {
//!     println!("clicked!");
//! });
//! ```
//!
//! # Host Integration
//!
//! The kit is windowing-system agnostic. A host embeds it by:
//!
//! 1. initializing the globals (`init_global_registry`, `init_global_timers`),
//! 2. translating its pointer crossing events into
//!    [`WidgetEvent::Enter`](widget::WidgetEvent) / `Leave` and dispatching
//!    them through [`Widget::event`](widget::Widget::event),
//! 3. pumping [`global_timers`](emberglow_core::global_timers) and routing
//!    fired timers to their owning widgets via
//!    [`widget::widget_timer::timer_owner`],
//! 4. painting widgets into a
//!    [`DisplayListRenderer`](emberglow_render::DisplayListRenderer) and
//!    replaying the display list on its graphics backend.

pub use emberglow_core::*;

/// Graphics rendering module.
pub mod render {
    pub use emberglow_render::*;
}

/// Styling and theming module.
pub mod style {
    pub use emberglow_style::*;
}

pub mod prelude;
pub mod widget;
