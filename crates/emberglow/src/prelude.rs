//! Prelude module for Emberglow.
//!
//! Re-exports the most commonly used types for convenient importing:
//!
//! ```ignore
//! use emberglow::prelude::*;
//! ```

// ============================================================================
// Object and Signal System
// ============================================================================

pub use emberglow_core::{
    Object, ObjectBase, ObjectId, Signal, init_global_registry, init_global_timers,
};

// ============================================================================
// Widget Foundation
// ============================================================================

pub use crate::widget::{
    AsWidget, PaintContext, SizeHint, SizePolicy, SizePolicyPair, Widget, WidgetBase, WidgetEvent,
};

// ============================================================================
// Widgets
// ============================================================================

pub use crate::widget::widgets::{AbstractButton, HoverButton};

// ============================================================================
// Animation
// ============================================================================

pub use crate::widget::animation::{ColorTransition, Easing, TransitionState};

// ============================================================================
// Rendering and Theming
// ============================================================================

pub use emberglow_render::{Color, DisplayListRenderer, Point, Rect, Renderer, Size};
pub use emberglow_style::{ColorPalette, Theme, ThemeMode};
