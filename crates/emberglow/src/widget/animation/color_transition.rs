//! Timed color interpolation.
//!
//! A [`ColorTransition`] sweeps from one color to another over a fixed
//! duration. The widget owning it samples the transition on every timer
//! tick; sampling takes an explicit `Instant` so hosts and tests can drive
//! the sweep with their own clock.

use std::time::{Duration, Instant};

use emberglow_render::Color;

use super::easing::{Easing, ease};

/// The result of advancing a [`ColorTransition`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionState {
    /// No transition in progress.
    Idle,
    /// The transition is running.
    Running {
        /// The interpolated color at this tick.
        color: Color,
        /// Raw progress from 0.0 to 1.0 (before easing).
        progress: f32,
    },
    /// The transition reached its target on this tick.
    ///
    /// Returned exactly once; later updates report `Idle`.
    Finished {
        /// The target color.
        color: Color,
    },
}

impl TransitionState {
    /// Check if the transition was running at this tick.
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running { .. })
    }

    /// The sampled color, if the transition was running or just finished.
    pub fn color(&self) -> Option<Color> {
        match self {
            Self::Running { color, .. } | Self::Finished { color } => Some(*color),
            Self::Idle => None,
        }
    }
}

/// A timed interpolation between two colors.
///
/// The interpolated value always lies on the segment between `from` and
/// `to`; progress outside the duration clamps to the endpoints.
#[derive(Debug, Clone)]
pub struct ColorTransition {
    /// Starting color.
    from: Color,
    /// Target color.
    to: Color,
    /// Total sweep duration.
    duration: Duration,
    /// Easing applied to raw progress.
    easing: Easing,
    /// When the transition started (if started).
    start_time: Option<Instant>,
    /// Whether the transition is currently running.
    running: bool,
    /// Whether the transition ran to completion.
    completed: bool,
}

impl ColorTransition {
    /// Create a transition between two colors.
    ///
    /// The duration defaults to 250 ms and the easing to linear; it is not
    /// running until [`start`](Self::start) is called.
    pub fn new(from: Color, to: Color) -> Self {
        Self {
            from,
            to,
            duration: Duration::from_millis(250),
            easing: Easing::Linear,
            start_time: None,
            running: false,
            completed: false,
        }
    }

    /// Set the duration using builder pattern.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the easing function using builder pattern.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// The starting color.
    #[inline]
    pub fn from(&self) -> Color {
        self.from
    }

    /// The target color.
    #[inline]
    pub fn to(&self) -> Color {
        self.to
    }

    /// The total sweep duration.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// The easing function.
    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Check if the transition is currently running.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start the transition now.
    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    /// Start the transition with an explicit start instant.
    pub fn start_at(&mut self, now: Instant) {
        self.start_time = Some(now);
        self.running = true;
        self.completed = false;
    }

    /// Stop the transition without reaching the target.
    ///
    /// The last sampled color is whatever the owner captured before
    /// stopping; a stopped transition reports its starting color again.
    pub fn stop(&mut self) {
        self.running = false;
        self.start_time = None;
    }

    /// Raw (uneased) progress at `now`, clamped to 0.0..=1.0.
    pub fn progress_at(&self, now: Instant) -> f32 {
        let Some(start_time) = self.start_time else {
            return if self.completed { 1.0 } else { 0.0 };
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(start_time);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// The interpolated color at `now`.
    ///
    /// Before starting this is the `from` color; after completion it is the
    /// `to` color. While running it is the eased point between the two,
    /// exactly the value a replacement transition should start from.
    pub fn value_at(&self, now: Instant) -> Color {
        let progress = self.progress_at(now);
        self.from.lerp(self.to, ease(self.easing, progress))
    }

    /// Advance the transition against the real clock.
    pub fn update(&mut self) -> TransitionState {
        self.update_at(Instant::now())
    }

    /// Advance the transition to `now` and report its state.
    ///
    /// Returns [`TransitionState::Finished`] exactly once, at the first
    /// update where raw progress reaches 1.0.
    pub fn update_at(&mut self, now: Instant) -> TransitionState {
        if !self.running {
            return TransitionState::Idle;
        }

        let progress = self.progress_at(now);
        if progress >= 1.0 {
            self.running = false;
            self.completed = true;
            self.start_time = None;
            return TransitionState::Finished { color: self.to };
        }

        TransitionState::Running {
            color: self.from.lerp(self.to, ease(self.easing, progress)),
            progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn white_to_blue() -> ColorTransition {
        ColorTransition::new(
            Color::from_hex("#FFFFFF").unwrap(),
            Color::from_hex("#3399FF").unwrap(),
        )
        .with_duration(Duration::from_millis(1000))
    }

    #[test]
    fn not_running_until_started() {
        let transition = white_to_blue();
        assert!(!transition.is_running());
        assert_eq!(transition.value_at(Instant::now()), transition.from());
    }

    #[test]
    fn linear_midpoint() {
        let mut transition = white_to_blue();
        let start = Instant::now();
        transition.start_at(start);

        let state = transition.update_at(start + Duration::from_millis(500));
        let TransitionState::Running { color, progress } = state else {
            panic!("expected Running, got {state:?}");
        };
        assert!((progress - 0.5).abs() < EPS);
        assert!(color.approx_eq(Color::from_hex("#99CCFF").unwrap(), EPS));
    }

    #[test]
    fn finishes_exactly_once_at_target() {
        let mut transition = white_to_blue();
        let start = Instant::now();
        transition.start_at(start);

        let state = transition.update_at(start + Duration::from_millis(1000));
        assert_eq!(
            state,
            TransitionState::Finished {
                color: transition.to()
            }
        );
        assert!(!transition.is_running());

        // Completed transitions report Idle and hold the target value.
        let state = transition.update_at(start + Duration::from_millis(2000));
        assert_eq!(state, TransitionState::Idle);
        assert_eq!(transition.value_at(start + Duration::from_millis(2000)), transition.to());
    }

    #[test]
    fn value_is_always_within_endpoints() {
        let mut transition = white_to_blue();
        let start = Instant::now();
        transition.start_at(start);

        for ms in [0u64, 100, 250, 777, 1000, 5000] {
            let color = transition.value_at(start + Duration::from_millis(ms));
            let lo = transition.to();
            let hi = transition.from();
            assert!(color.r >= lo.r - EPS && color.r <= hi.r + EPS);
            assert!(color.g >= lo.g - EPS && color.g <= hi.g + EPS);
            assert!(color.b >= lo.b - EPS && color.b <= hi.b + EPS);
        }
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let mut transition = white_to_blue().with_duration(Duration::ZERO);
        let start = Instant::now();
        transition.start_at(start);

        let state = transition.update_at(start);
        assert_eq!(
            state,
            TransitionState::Finished {
                color: transition.to()
            }
        );
    }

    #[test]
    fn stop_halts_without_completing() {
        let mut transition = white_to_blue();
        let start = Instant::now();
        transition.start_at(start);
        transition.stop();

        assert!(!transition.is_running());
        assert_eq!(transition.update_at(start + Duration::from_secs(2)), TransitionState::Idle);
        assert_eq!(transition.value_at(start + Duration::from_secs(2)), transition.from());
    }

    #[test]
    fn time_before_start_clamps_to_from() {
        let mut transition = white_to_blue();
        let start = Instant::now();
        transition.start_at(start + Duration::from_millis(100));
        // Sampling before the start instant must not underflow.
        assert_eq!(transition.value_at(start), transition.from());
    }

    #[test]
    fn eased_sweep_still_hits_endpoints() {
        let mut transition = white_to_blue().with_easing(Easing::EaseInOut);
        let start = Instant::now();
        transition.start_at(start);

        assert_eq!(transition.value_at(start), transition.from());
        let state = transition.update_at(start + Duration::from_millis(1000));
        assert_eq!(
            state,
            TransitionState::Finished {
                color: transition.to()
            }
        );
    }
}
