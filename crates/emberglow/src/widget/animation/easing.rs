//! Easing functions for smooth animations.
//!
//! An easing function maps a linear progress value (0.0 to 1.0) to a
//! transformed value. Hover color sweeps default to [`Easing::Linear`];
//! the curved variants are available for anything that wants a softer
//! start or finish.

use std::f32::consts::PI;

/// Available easing functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing).
    #[default]
    Linear,
    /// Quadratic ease-in (starts slow, accelerates).
    EaseIn,
    /// Quadratic ease-out (starts fast, decelerates).
    EaseOut,
    /// Quadratic ease-in-out (smooth start and end).
    EaseInOut,
    /// Sinusoidal ease-in.
    EaseInSine,
    /// Sinusoidal ease-out.
    EaseOutSine,
    /// Sinusoidal ease-in-out.
    EaseInOutSine,
}

/// Apply an easing function to a progress value.
///
/// `t` is clamped to 0.0..=1.0 before the curve is applied.
///
/// # Example
///
/// ```
/// use emberglow::widget::animation::{ease, Easing};
///
/// assert_eq!(ease(Easing::Linear, 0.5), 0.5);
/// assert!(ease(Easing::EaseIn, 0.5) < 0.5);
/// assert!(ease(Easing::EaseOut, 0.5) > 0.5);
/// ```
#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::EaseIn => t * t,
        Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        Easing::EaseInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
            }
        }
        Easing::EaseInSine => 1.0 - ((t * PI) / 2.0).cos(),
        Easing::EaseOutSine => ((t * PI) / 2.0).sin(),
        Easing::EaseInOutSine => -((PI * t).cos() - 1.0) / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 7] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::EaseInSine,
        Easing::EaseOutSine,
        Easing::EaseInOutSine,
    ];

    #[test]
    fn endpoints_are_fixed() {
        for easing in ALL {
            assert!(ease(easing, 0.0).abs() < 1e-5, "{easing:?} at 0");
            assert!((ease(easing, 1.0) - 1.0).abs() < 1e-5, "{easing:?} at 1");
        }
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(ease(Easing::Linear, -0.5), 0.0);
        assert_eq!(ease(Easing::Linear, 1.5), 1.0);
    }

    #[test]
    fn ease_in_lags_ease_out_leads() {
        assert!(ease(Easing::EaseIn, 0.25) < 0.25);
        assert!(ease(Easing::EaseOut, 0.25) > 0.25);
        assert!((ease(Easing::EaseInOut, 0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in ALL {
            let mut last = 0.0;
            for step in 0..=100 {
                let value = ease(easing, step as f32 / 100.0);
                assert!(value >= last - 1e-6, "{easing:?} not monotonic");
                last = value;
            }
        }
    }
}
