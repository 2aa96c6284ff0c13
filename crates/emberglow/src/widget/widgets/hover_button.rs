//! Hover-transition button widget.
//!
//! [`HoverButton`] is a push button whose fill color animates between the
//! theme's resting color and its highlight color as the pointer enters and
//! leaves the widget. Re-entering or leaving mid-sweep reverses the
//! animation from the live color, so the fill never jumps.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use emberglow::widget::widgets::HoverButton;
//!
//! let button = HoverButton::new("Hover me")
//!     .with_transition_duration(Duration::from_millis(400));
//!
//! button.clicked().connect(|()| {
//!     println!("clicked!");
//! });
//! ```

use std::time::{Duration, Instant};

use emberglow_core::{Object, ObjectId, Signal, TimerId};
use emberglow_render::{Color, FontSystem, Point, Renderer, RoundedRect, Stroke, TextLayout};
use emberglow_style::Theme;

use super::abstract_button::{AbstractButton, darken_color};
use crate::widget::animation::{ColorTransition, TransitionState};
use crate::widget::{PaintContext, SizeHint, Widget, WidgetBase, WidgetEvent, widget_timer};

/// How often the fill color is re-sampled while a sweep is running.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// A push button with an animated hover color transition.
///
/// The fill sweeps linearly from the current color toward the theme's
/// highlight color when the pointer enters, and back toward the resting
/// color when it leaves. At most one sweep is in flight at a time; a new
/// hover edge replaces the active sweep, seeding the replacement with the
/// live interpolated color.
///
/// Two styling policies cover the widget's observed variants:
///
/// - `transparent_idle_color` (default `true`): the resting fill is fully
///   transparent, so the animated color reads as a tint over the native
///   chrome. When `false` the resting fill is the theme's button color.
/// - `force_native_hover_state` (default `false`): when `false`, the
///   chrome's own hover shading is suppressed and the sweep alone conveys
///   hover; when `true` the chrome keeps shading on top of the sweep.
pub struct HoverButton {
    /// The underlying abstract button implementation.
    inner: AbstractButton,

    /// Border radius for the rounded chrome.
    border_radius: f32,

    /// The theme colors are derived from.
    theme: Theme,

    /// Duration of hover sweeps started after this value was set.
    transition_duration: Duration,

    /// The single in-flight sweep, if any.
    transition: Option<ColorTransition>,

    /// The fill color painted right now.
    current_color: Color,

    /// Resting fill is transparent instead of the theme button color.
    transparent_idle_color: bool,

    /// Keep the chrome's own hover shading during custom-color painting.
    force_native_hover_state: bool,

    /// Repeating timer driving sweep ticks while a transition runs.
    tick_timer: Option<TimerId>,
}

impl HoverButton {
    /// Create a new hover button with the specified label.
    pub fn new(text: impl Into<String>) -> Self {
        let theme = Theme::default();
        let mut button = Self {
            inner: AbstractButton::new(text),
            border_radius: 4.0,
            theme,
            transition_duration: Duration::from_millis(1000),
            transition: None,
            current_color: Color::TRANSPARENT,
            transparent_idle_color: true,
            force_native_hover_state: false,
            tick_timer: None,
        };
        button.current_color = button.resting_color();
        button
    }

    /// Set the parent widget using builder pattern.
    pub fn with_parent(self, parent: ObjectId) -> Self {
        if let Err(err) = self.inner.widget_base().set_parent(Some(parent)) {
            tracing::warn!(target: "emberglow::widget", %err, "failed to set hover button parent");
        }
        self
    }

    // =========================================================================
    // Delegated Label Methods
    // =========================================================================

    /// Get the button's text.
    pub fn text(&self) -> &str {
        self.inner.text()
    }

    /// Set the button's text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.inner.set_text(text);
    }

    /// Set the text using builder pattern.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.inner.set_text(text);
        self
    }

    // =========================================================================
    // Transition Configuration
    // =========================================================================

    /// The duration used for subsequent hover sweeps.
    pub fn transition_duration(&self) -> Duration {
        self.transition_duration
    }

    /// Set the duration for subsequent hover sweeps.
    ///
    /// A sweep already in flight keeps the duration it started with. A zero
    /// duration makes sweeps snap to their target on the first tick.
    pub fn set_transition_duration(&mut self, duration: Duration) {
        self.transition_duration = duration;
    }

    /// Set the sweep duration using builder pattern.
    pub fn with_transition_duration(mut self, duration: Duration) -> Self {
        self.transition_duration = duration;
        self
    }

    // =========================================================================
    // Styling Policy
    // =========================================================================

    /// Whether the resting fill is transparent.
    pub fn transparent_idle_color(&self) -> bool {
        self.transparent_idle_color
    }

    /// Set whether the resting fill is transparent.
    ///
    /// Takes effect immediately when no sweep is running.
    pub fn set_transparent_idle_color(&mut self, transparent: bool) {
        if self.transparent_idle_color != transparent {
            self.transparent_idle_color = transparent;
            if self.transition.is_none() && !self.inner.widget_base().is_hovered() {
                self.current_color = self.resting_color();
            }
            self.inner.widget_base_mut().update();
        }
    }

    /// Set the transparent-idle policy using builder pattern.
    pub fn with_transparent_idle_color(mut self, transparent: bool) -> Self {
        self.transparent_idle_color = transparent;
        self.current_color = self.resting_color();
        self
    }

    /// Whether the chrome keeps its native hover shading.
    pub fn force_native_hover_state(&self) -> bool {
        self.force_native_hover_state
    }

    /// Set whether the chrome keeps its native hover shading.
    pub fn set_force_native_hover_state(&mut self, force: bool) {
        if self.force_native_hover_state != force {
            self.force_native_hover_state = force;
            self.inner.widget_base_mut().update();
        }
    }

    /// Set the native-hover policy using builder pattern.
    pub fn with_force_native_hover_state(mut self, force: bool) -> Self {
        self.force_native_hover_state = force;
        self
    }

    /// Get the border radius.
    pub fn border_radius(&self) -> f32 {
        self.border_radius
    }

    /// Set the border radius for the rounded chrome.
    pub fn set_border_radius(&mut self, radius: f32) {
        if self.border_radius != radius {
            self.border_radius = radius;
            self.inner.widget_base_mut().update();
        }
    }

    /// Set the border radius using builder pattern.
    pub fn with_border_radius(mut self, radius: f32) -> Self {
        self.border_radius = radius;
        self
    }

    // =========================================================================
    // Theme
    // =========================================================================

    /// The theme the button derives its colors from.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Adopt a new theme.
    ///
    /// When idle, the fill snaps to the new resting color. A sweep in
    /// flight finishes against the endpoints it captured; the next hover
    /// edge picks up the new colors.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        if self.transition.is_none() {
            self.current_color = if self.inner.widget_base().is_hovered() {
                self.highlight_color()
            } else {
                self.resting_color()
            };
        }
        self.inner.widget_base_mut().update();
    }

    /// Set the theme using builder pattern.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self.current_color = self.resting_color();
        self
    }

    // =========================================================================
    // Colors
    // =========================================================================

    /// The fill color painted right now.
    ///
    /// Mutated by sweep ticks while a transition runs, and by theme or
    /// policy changes while idle.
    pub fn current_fill_color(&self) -> Color {
        self.current_color
    }

    /// The resting fill color, derived from the theme and idle policy.
    pub fn resting_color(&self) -> Color {
        if self.transparent_idle_color {
            Color::TRANSPARENT
        } else {
            self.theme.palette.button
        }
    }

    /// The hover target color, derived from the theme.
    pub fn highlight_color(&self) -> Color {
        self.theme.palette.highlight
    }

    /// Whether a hover sweep is currently running.
    pub fn is_transitioning(&self) -> bool {
        self.transition.as_ref().is_some_and(ColorTransition::is_running)
    }

    // =========================================================================
    // Signal Access
    // =========================================================================

    /// Get the clicked signal.
    pub fn clicked(&self) -> &Signal<()> {
        &self.inner.clicked
    }

    /// Get the pressed signal.
    pub fn pressed(&self) -> &Signal<()> {
        &self.inner.pressed
    }

    /// Get the released signal.
    pub fn released(&self) -> &Signal<()> {
        &self.inner.released
    }

    // =========================================================================
    // Hover Animation
    // =========================================================================

    fn animate_hover(&mut self, entered: bool) {
        self.animate_hover_at(Instant::now(), entered);
    }

    /// Start (or restart) the hover sweep at an explicit instant.
    fn animate_hover_at(&mut self, now: Instant, entered: bool) {
        // Capture the live color before the old sweep is dropped, so the
        // replacement continues from exactly where the fill is.
        let start_color = match self.transition.take() {
            Some(active) => active.value_at(now),
            None => self.current_color,
        };

        let target = if entered {
            self.highlight_color()
        } else {
            self.resting_color()
        };

        tracing::trace!(
            target: "emberglow::animation",
            entered,
            duration_ms = self.transition_duration.as_millis() as u64,
            "hover sweep started"
        );

        let mut transition = ColorTransition::new(start_color, target)
            .with_duration(self.transition_duration);
        transition.start_at(now);

        self.current_color = start_color;
        self.transition = Some(transition);
        self.ensure_tick_timer();
        self.inner.widget_base_mut().update();
    }

    fn advance_transition(&mut self) {
        self.advance_transition_at(Instant::now());
    }

    /// Advance the sweep to `now`, updating the fill and repaint state.
    fn advance_transition_at(&mut self, now: Instant) {
        let Some(transition) = self.transition.as_mut() else {
            // No sweep but the tick timer is still alive: stop it.
            self.release_tick_timer();
            return;
        };

        match transition.update_at(now) {
            TransitionState::Running { color, .. } => {
                self.current_color = color;
            }
            TransitionState::Finished { color } => {
                self.current_color = color;
                self.transition = None;
                self.release_tick_timer();
                tracing::trace!(target: "emberglow::animation", "hover sweep finished");
            }
            TransitionState::Idle => {
                self.transition = None;
                self.release_tick_timer();
            }
        }
        self.inner.widget_base_mut().update();
    }

    fn ensure_tick_timer(&mut self) {
        if self.tick_timer.is_none() {
            let id = widget_timer::start_widget_repeating_timer(self.object_id(), TICK_INTERVAL);
            self.tick_timer = Some(id);
        }
    }

    fn release_tick_timer(&mut self) {
        if let Some(id) = self.tick_timer.take() {
            widget_timer::stop_widget_timer(id);
        }
    }

    /// React to a theme change notification from the host.
    fn handle_theme_change(&mut self, theme: Theme) {
        self.set_theme(theme);
    }

    /// The chrome face color with hover shading suppressed.
    ///
    /// Pressed and disabled feedback stay native; hover is conveyed by the
    /// animated fill instead.
    fn chrome_face_color(&self) -> Color {
        let base = self.theme.palette.button;
        if self.force_native_hover_state {
            return self.inner.background_color(base);
        }
        if !self.inner.widget_base().is_enabled() {
            Color::from_rgb8(200, 200, 200)
        } else if self.inner.widget_base().is_pressed() {
            darken_color(base, 0.2)
        } else {
            base
        }
    }
}

impl Object for HoverButton {
    fn object_id(&self) -> ObjectId {
        self.inner.widget_base().object_id()
    }
}

impl Widget for HoverButton {
    fn widget_base(&self) -> &WidgetBase {
        self.inner.widget_base()
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        self.inner.widget_base_mut()
    }

    fn size_hint(&self) -> SizeHint {
        self.inner.default_size_hint()
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let rect = ctx.rect();
        let palette = &self.theme.palette;
        let rrect = RoundedRect::new(rect, self.border_radius);

        // Native chrome face first.
        ctx.renderer().fill_rounded_rect(rrect, self.chrome_face_color());

        // The animated fill, drawn over the face so the interpolated color
        // shows through the standard chrome.
        if self.current_color.a > 0.0 {
            ctx.renderer().fill_rounded_rect(rrect, self.current_color);
        }

        let border = Stroke::new(palette.border, 1.0);
        ctx.renderer().stroke_rounded_rect(rrect, &border);

        // Label, centered.
        let text = self.inner.text();
        if !text.is_empty() {
            let mut font_system = FontSystem::new();
            let layout = TextLayout::new(&mut font_system, text, self.inner.font());
            let text_pos = Point::new(
                rect.origin.x + (rect.width() - layout.width()) / 2.0,
                rect.origin.y + (rect.height() - layout.height()) / 2.0,
            );
            let text_color = self.inner.effective_text_color(palette.button_text);
            ctx.renderer().draw_text(text, text_pos, self.inner.font(), text_color);
        }

        // Focus ring around the chrome.
        if ctx.should_show_focus() || self.widget_base().has_focus() {
            let focus_rect = RoundedRect::new(rect.inflate(2.0), self.border_radius + 2.0);
            let stroke = Stroke::new(palette.primary, 2.0);
            ctx.renderer().stroke_rounded_rect(focus_rect, &stroke);
        }
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        match event {
            WidgetEvent::Enter(_) => {
                self.inner.widget_base_mut().set_hovered(true);
                self.animate_hover(true);
                event.accept();
                true
            }
            WidgetEvent::Leave(_) => {
                self.inner.widget_base_mut().set_hovered(false);
                self.animate_hover(false);
                event.accept();
                true
            }
            WidgetEvent::Timer(e) => {
                if self.tick_timer == Some(e.id) {
                    self.advance_transition();
                    event.accept();
                    true
                } else {
                    false
                }
            }
            WidgetEvent::ThemeChange(e) => {
                let theme = e.theme.clone();
                self.handle_theme_change(theme);
                event.accept();
                true
            }
            WidgetEvent::MousePress(e) => {
                if self.inner.handle_mouse_press(e) {
                    event.accept();
                    true
                } else {
                    false
                }
            }
            WidgetEvent::MouseRelease(e) => {
                if self.inner.handle_mouse_release(e) {
                    event.accept();
                    true
                } else {
                    false
                }
            }
            WidgetEvent::KeyPress(e) => {
                if self.inner.handle_key_press(e) {
                    event.accept();
                    true
                } else {
                    false
                }
            }
            WidgetEvent::KeyRelease(e) => {
                if self.inner.handle_key_release(e.key) {
                    event.accept();
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }
}

impl Drop for HoverButton {
    fn drop(&mut self) {
        // The registry entry goes away with the inner ObjectBase; the tick
        // timer has to be stopped explicitly.
        widget_timer::remove_timers_for_widget(self.object_id());
    }
}

static_assertions::assert_impl_all!(HoverButton: Send, Sync);

#[cfg(test)]
mod tests {
    use emberglow_core::{init_global_registry, init_global_timers};
    use emberglow_style::{ColorPalette, ThemeMode};

    use super::*;

    const EPS: f32 = 2e-3;

    fn setup() {
        init_global_registry();
        init_global_timers();
    }

    /// A white resting fill sweeping toward #3399FF.
    fn scenario_theme() -> Theme {
        Theme::custom(
            ThemeMode::Light,
            ColorPalette {
                button: Color::WHITE,
                highlight: Color::from_hex("#3399FF").unwrap(),
                ..ColorPalette::light()
            },
        )
    }

    fn scenario_button() -> HoverButton {
        setup();
        HoverButton::new("Hover")
            .with_theme(scenario_theme())
            .with_transparent_idle_color(false)
            .with_transition_duration(Duration::from_millis(1000))
    }

    #[test]
    fn defaults() {
        setup();
        let button = HoverButton::new("Test");
        assert_eq!(button.text(), "Test");
        assert_eq!(button.transition_duration(), Duration::from_millis(1000));
        assert!(button.transparent_idle_color());
        assert!(!button.force_native_hover_state());
        assert_eq!(button.current_fill_color(), Color::TRANSPARENT);
        assert!(!button.is_transitioning());
    }

    #[test]
    fn opaque_idle_rests_on_button_color() {
        setup();
        let button = HoverButton::new("Test").with_transparent_idle_color(false);
        assert_eq!(button.current_fill_color(), button.theme().palette.button);
    }

    #[test]
    fn enter_starts_sweep_toward_highlight() {
        let mut button = scenario_button();
        let start = Instant::now();

        button.animate_hover_at(start, true);
        assert!(button.is_transitioning());

        let transition = button.transition.as_ref().unwrap();
        assert_eq!(transition.from(), Color::WHITE);
        assert_eq!(transition.to(), button.highlight_color());
        assert_eq!(transition.duration(), Duration::from_millis(1000));
    }

    #[test]
    fn reference_scenario_full_round_trip() {
        let mut button = scenario_button();
        let t0 = Instant::now();
        let highlight = Color::from_hex("#3399FF").unwrap();
        let midpoint = Color::from_hex("#99CCFF").unwrap();

        // Pointer enters at t=0.
        button.animate_hover_at(t0, true);

        button.advance_transition_at(t0 + Duration::from_millis(500));
        assert!(button.current_fill_color().approx_eq(midpoint, EPS));

        button.advance_transition_at(t0 + Duration::from_millis(1000));
        assert_eq!(button.current_fill_color(), highlight);
        assert!(!button.is_transitioning());

        // Pointer leaves at t=1000.
        button.animate_hover_at(t0 + Duration::from_millis(1000), false);

        button.advance_transition_at(t0 + Duration::from_millis(1500));
        assert!(button.current_fill_color().approx_eq(midpoint, EPS));

        button.advance_transition_at(t0 + Duration::from_millis(2000));
        assert_eq!(button.current_fill_color(), Color::WHITE);
        assert!(!button.is_transitioning());
    }

    #[test]
    fn mid_flight_reversal_captures_live_color() {
        let mut button = scenario_button();
        let t0 = Instant::now();
        let midpoint = Color::from_hex("#99CCFF").unwrap();

        button.animate_hover_at(t0, true);
        button.advance_transition_at(t0 + Duration::from_millis(500));

        // Leave halfway through the enter sweep.
        button.animate_hover_at(t0 + Duration::from_millis(500), false);

        let transition = button.transition.as_ref().unwrap();
        assert!(transition.from().approx_eq(midpoint, EPS));
        assert_eq!(transition.to(), Color::WHITE);
        // The fill itself did not jump.
        assert!(button.current_fill_color().approx_eq(midpoint, EPS));
    }

    #[test]
    fn at_most_one_transition_under_event_storms() {
        let mut button = scenario_button();
        let t0 = Instant::now();

        for (index, entered) in [true, false, true, true, false, true].into_iter().enumerate() {
            button.animate_hover_at(t0 + Duration::from_millis(index as u64 * 100), entered);
            assert!(button.is_transitioning());
            assert!(button.transition.is_some());
        }

        // Run the last sweep to completion; the handle is released.
        button.advance_transition_at(t0 + Duration::from_millis(5000));
        assert!(button.transition.is_none());
    }

    #[test]
    fn duration_change_applies_to_next_sweep() {
        let mut button = scenario_button();
        let t0 = Instant::now();

        button.animate_hover_at(t0, true);
        button.set_transition_duration(Duration::from_millis(200));

        // The in-flight sweep keeps its original duration.
        assert_eq!(
            button.transition.as_ref().unwrap().duration(),
            Duration::from_millis(1000)
        );

        button.advance_transition_at(t0 + Duration::from_millis(1000));
        button.animate_hover_at(t0 + Duration::from_millis(1000), false);
        assert_eq!(
            button.transition.as_ref().unwrap().duration(),
            Duration::from_millis(200)
        );
    }

    #[test]
    fn zero_duration_snaps_on_first_tick() {
        let mut button = scenario_button().with_transition_duration(Duration::ZERO);
        let t0 = Instant::now();

        button.animate_hover_at(t0, true);
        button.advance_transition_at(t0);
        assert_eq!(button.current_fill_color(), button.highlight_color());
        assert!(!button.is_transitioning());
    }

    #[test]
    fn tick_timer_lifecycle() {
        let mut button = scenario_button();
        let t0 = Instant::now();
        assert!(button.tick_timer.is_none());

        button.animate_hover_at(t0, true);
        let timer = button.tick_timer.expect("tick timer should be running");
        assert!(widget_timer::is_widget_timer_active(timer));
        assert_eq!(widget_timer::timer_owner(timer), Some(button.object_id()));

        // A replacement sweep reuses the running timer.
        button.animate_hover_at(t0 + Duration::from_millis(100), false);
        assert_eq!(button.tick_timer, Some(timer));

        button.advance_transition_at(t0 + Duration::from_millis(5000));
        assert!(button.tick_timer.is_none());
        assert!(!widget_timer::is_widget_timer_active(timer));
    }

    #[test]
    fn theme_change_snaps_idle_fill() {
        setup();
        let mut button = HoverButton::new("Test").with_transparent_idle_color(false);
        assert_eq!(button.current_fill_color(), Theme::light().palette.button);

        button.set_theme(Theme::dark());
        assert_eq!(button.current_fill_color(), Theme::dark().palette.button);
    }

    #[test]
    fn theme_change_mid_sweep_keeps_endpoints() {
        let mut button = scenario_button();
        let t0 = Instant::now();

        button.animate_hover_at(t0, true);
        let expected_target = button.highlight_color();

        button.set_theme(Theme::dark());
        let transition = button.transition.as_ref().unwrap();
        assert_eq!(transition.to(), expected_target);

        // The next edge picks up the new theme.
        button.advance_transition_at(t0 + Duration::from_millis(1000));
        button.animate_hover_at(t0 + Duration::from_millis(1000), true);
        assert_eq!(
            button.transition.as_ref().unwrap().to(),
            Theme::dark().palette.highlight
        );
    }

    #[test]
    fn enter_event_sets_hover_and_starts_sweep() {
        let mut button = scenario_button();
        let mut event = WidgetEvent::Enter(crate::widget::events::EnterEvent::new(Point::ZERO));

        assert!(button.event(&mut event));
        assert!(event.is_accepted());
        assert!(button.widget_base().is_hovered());
        assert!(button.is_transitioning());

        let mut leave = WidgetEvent::Leave(crate::widget::events::LeaveEvent::new());
        assert!(button.event(&mut leave));
        assert!(!button.widget_base().is_hovered());
        assert!(button.is_transitioning());
    }

    #[test]
    fn foreign_timer_event_is_ignored() {
        setup();
        let mut button = HoverButton::new("Test");
        let other = widget_timer::start_widget_timer(
            button.object_id(),
            Duration::from_secs(60),
        );
        let mut event = WidgetEvent::Timer(crate::widget::events::TimerEvent::new(other));
        assert!(!button.event(&mut event));
        widget_timer::stop_widget_timer(other);
    }

    #[test]
    fn transparent_idle_toggle_updates_resting_fill() {
        setup();
        let mut button = HoverButton::new("Test");
        assert_eq!(button.current_fill_color(), Color::TRANSPARENT);

        button.set_transparent_idle_color(false);
        assert_eq!(button.current_fill_color(), button.theme().palette.button);

        button.set_transparent_idle_color(true);
        assert_eq!(button.current_fill_color(), Color::TRANSPARENT);
    }
}
