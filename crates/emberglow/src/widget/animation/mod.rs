//! Animation primitives for Emberglow widgets.
//!
//! [`ColorTransition`] is the timed color interpolation that drives hover
//! sweeps; [`Easing`] shapes its progress curve.

mod color_transition;
mod easing;

pub use color_transition::{ColorTransition, TransitionState};
pub use easing::{Easing, ease};
