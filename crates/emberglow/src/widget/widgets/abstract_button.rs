//! Abstract button base implementation.
//!
//! [`AbstractButton`] carries the behavior every button-like widget
//! shares: a text label, press/release/click tracking for mouse and
//! keyboard, the standard button signals, and label measurement for
//! sizing. Concrete buttons embed it and delegate.

use emberglow_core::{Object, ObjectId, Signal};
use emberglow_render::{Color, Font, FontSystem, Size, TextLayout};

use crate::widget::events::{Key, KeyPressEvent, MouseButton, MousePressEvent, MouseReleaseEvent};
use crate::widget::geometry::SizeHint;
use crate::widget::WidgetBase;

/// Common functionality for all button widgets.
pub struct AbstractButton {
    /// Widget base for common widget functionality.
    base: WidgetBase,

    /// The button's text label.
    text: String,

    /// The font to use for the label.
    font: Font,

    /// Explicit text color override; `None` uses the theme's control text.
    text_color: Option<Color>,

    /// Signal emitted when the button is clicked.
    pub clicked: Signal<()>,

    /// Signal emitted when the button is pressed down.
    pub pressed: Signal<()>,

    /// Signal emitted when the button is released.
    pub released: Signal<()>,
}

impl AbstractButton {
    /// Create a new abstract button with the specified text.
    pub fn new(text: impl Into<String>) -> Self {
        let mut base = WidgetBase::new::<Self>();
        base.set_focusable(true);

        Self {
            base,
            text: text.into(),
            font: Font::default(),
            text_color: None,
            clicked: Signal::new(),
            pressed: Signal::new(),
            released: Signal::new(),
        }
    }

    // =========================================================================
    // Text
    // =========================================================================

    /// Get the button's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the button's text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let new_text = text.into();
        if self.text != new_text {
            self.text = new_text;
            self.base.update();
        }
    }

    /// Set the text using builder pattern.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    // =========================================================================
    // Font & Text Color
    // =========================================================================

    /// Get the font.
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Set the font for label rendering.
    pub fn set_font(&mut self, font: Font) {
        if self.font != font {
            self.font = font;
            self.base.update();
        }
    }

    /// Set font using builder pattern.
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Get the explicit text color override, if set.
    pub fn text_color(&self) -> Option<Color> {
        self.text_color
    }

    /// Set or clear the explicit text color override.
    pub fn set_text_color(&mut self, color: Option<Color>) {
        if self.text_color != color {
            self.text_color = color;
            self.base.update();
        }
    }

    /// Set text color using builder pattern.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    // =========================================================================
    // Input Handling
    // =========================================================================

    /// Handle a mouse press event.
    ///
    /// Returns `true` if the event was handled.
    pub fn handle_mouse_press(&mut self, event: &MousePressEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }

        if !self.base.is_enabled() {
            return false;
        }

        if !self.base.contains_point(event.local_pos) {
            return false;
        }

        self.base.set_pressed(true);
        self.pressed.emit(());
        true
    }

    /// Handle a mouse release event.
    ///
    /// Returns `true` if the event was handled and a click occurred.
    pub fn handle_mouse_release(&mut self, event: &MouseReleaseEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }

        if !self.base.is_enabled() {
            return false;
        }

        let was_pressed = self.base.is_pressed();
        self.base.set_pressed(false);
        self.released.emit(());

        // Only click if the press started here and the pointer is still over us.
        if was_pressed && self.base.contains_point(event.local_pos) {
            self.click();
            return true;
        }

        false
    }

    /// Handle a key press event.
    ///
    /// Space and Enter activate the button.
    pub fn handle_key_press(&mut self, event: &KeyPressEvent) -> bool {
        if !self.base.is_enabled() {
            return false;
        }

        match event.key {
            Key::Space | Key::Enter => {
                if !event.is_repeat {
                    self.base.set_pressed(true);
                    self.pressed.emit(());
                }
                true
            }
            _ => false,
        }
    }

    /// Handle a key release event.
    pub fn handle_key_release(&mut self, key: Key) -> bool {
        if !self.base.is_enabled() {
            return false;
        }

        match key {
            Key::Space | Key::Enter => {
                self.base.set_pressed(false);
                self.released.emit(());
                self.click();
                true
            }
            _ => false,
        }
    }

    /// Programmatically click the button.
    pub fn click(&mut self) {
        if !self.base.is_enabled() {
            return;
        }

        self.clicked.emit(());
        self.base.update();
    }

    // =========================================================================
    // Sizing
    // =========================================================================

    /// Calculate the size needed for the button text.
    pub fn text_size(&self) -> Size {
        if self.text.is_empty() {
            return Size::new(0.0, self.font.size());
        }

        let mut font_system = FontSystem::new();
        let layout = TextLayout::new(&mut font_system, &self.text, &self.font);
        Size::new(layout.width(), layout.height())
    }

    /// Get the default size hint for the button.
    pub fn default_size_hint(&self) -> SizeHint {
        let content_size = self.text_size();
        // Padding around the label, with a floor for very short labels.
        let padding = 16.0;
        let min_width = 64.0;
        let min_height = 24.0;

        let preferred = Size::new(
            (content_size.width + padding * 2.0).max(min_width),
            (content_size.height + padding).max(min_height),
        );

        SizeHint::new(preferred).with_minimum_dimensions(min_width, min_height)
    }

    // =========================================================================
    // Rendering Helpers
    // =========================================================================

    /// Get the color for the button face based on current interaction state.
    pub fn background_color(&self, base_color: Color) -> Color {
        if !self.base.is_enabled() {
            Color::from_rgb8(200, 200, 200)
        } else if self.base.is_pressed() {
            darken_color(base_color, 0.2)
        } else if self.base.is_hovered() {
            lighten_color(base_color, 0.1)
        } else {
            base_color
        }
    }

    /// Get the effective label color, given the theme's control text color.
    pub fn effective_text_color(&self, theme_text: Color) -> Color {
        if !self.base.is_enabled() {
            Color::from_rgb8(128, 128, 128)
        } else {
            self.text_color.unwrap_or(theme_text)
        }
    }

    // =========================================================================
    // WidgetBase Access
    // =========================================================================

    /// Get a reference to the widget base.
    pub fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    /// Get a mutable reference to the widget base.
    pub fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }
}

impl Object for AbstractButton {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

// =========================================================================
// Color Helpers
// =========================================================================

/// Darken a color by a factor (0.0 = no change, 1.0 = black).
pub(crate) fn darken_color(color: Color, factor: f32) -> Color {
    let factor = 1.0 - factor.clamp(0.0, 1.0);
    Color::new(
        color.r * factor,
        color.g * factor,
        color.b * factor,
        color.a,
    )
}

/// Lighten a color by a factor (0.0 = no change, 1.0 = white).
pub(crate) fn lighten_color(color: Color, factor: f32) -> Color {
    let factor = factor.clamp(0.0, 1.0);
    // Premultiplied: alpha is the per-channel ceiling.
    Color::new(
        color.r + (color.a - color.r) * factor,
        color.g + (color.a - color.g) * factor,
        color.b + (color.a - color.b) * factor,
        color.a,
    )
}

static_assertions::assert_impl_all!(AbstractButton: Send, Sync);

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    use emberglow_core::init_global_registry;
    use emberglow_render::{Point, Rect};

    use super::*;

    fn make_button(text: &str) -> AbstractButton {
        init_global_registry();
        let mut button = AbstractButton::new(text);
        button
            .widget_base_mut()
            .set_geometry(Rect::new(0.0, 0.0, 100.0, 30.0));
        button
    }

    fn click_counter(button: &AbstractButton) -> Arc<AtomicU32> {
        let count = Arc::new(AtomicU32::new(0));
        let count_clone = count.clone();
        button.clicked.connect(move |()| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });
        count
    }

    #[test]
    fn press_release_inside_clicks() {
        let mut button = make_button("Test");
        let clicks = click_counter(&button);

        let inside = Point::new(50.0, 15.0);
        assert!(button.handle_mouse_press(&MousePressEvent::new(inside, MouseButton::Left)));
        assert!(button.widget_base().is_pressed());
        assert!(button.handle_mouse_release(&MouseReleaseEvent::new(inside, MouseButton::Left)));
        assert!(!button.widget_base().is_pressed());
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn release_outside_does_not_click() {
        let mut button = make_button("Test");
        let clicks = click_counter(&button);

        let inside = Point::new(50.0, 15.0);
        let outside = Point::new(500.0, 15.0);
        assert!(button.handle_mouse_press(&MousePressEvent::new(inside, MouseButton::Left)));
        assert!(!button.handle_mouse_release(&MouseReleaseEvent::new(outside, MouseButton::Left)));
        assert_eq!(clicks.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn right_button_is_ignored() {
        let mut button = make_button("Test");
        let inside = Point::new(50.0, 15.0);
        assert!(!button.handle_mouse_press(&MousePressEvent::new(inside, MouseButton::Right)));
        assert!(!button.widget_base().is_pressed());
    }

    #[test]
    fn disabled_button_ignores_input() {
        let mut button = make_button("Test");
        let clicks = click_counter(&button);
        button.widget_base_mut().set_enabled(false);

        let inside = Point::new(50.0, 15.0);
        assert!(!button.handle_mouse_press(&MousePressEvent::new(inside, MouseButton::Left)));
        button.click();
        assert_eq!(clicks.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn keyboard_activation() {
        let mut button = make_button("Test");
        let clicks = click_counter(&button);

        assert!(button.handle_key_press(&KeyPressEvent::new(Key::Space)));
        assert!(button.widget_base().is_pressed());
        assert!(button.handle_key_release(Key::Space));
        assert_eq!(clicks.load(Ordering::SeqCst), 1);

        assert!(!button.handle_key_press(&KeyPressEvent::new(Key::Escape)));
    }

    #[test]
    fn size_hint_has_floor() {
        let button = make_button("");
        let hint = button.default_size_hint();
        assert!(hint.preferred.width >= 64.0);
        assert!(hint.preferred.height >= 24.0);
        assert_eq!(hint.minimum, Size::new(64.0, 24.0));
    }

    #[test]
    fn state_shading() {
        let mut button = make_button("Test");
        let base = Color::from_rgb8(100, 100, 100);

        let resting = button.background_color(base);
        assert_eq!(resting, base);

        button.widget_base_mut().set_hovered(true);
        let hovered = button.background_color(base);
        assert!(hovered.r > resting.r);

        button.widget_base_mut().set_pressed(true);
        let pressed = button.background_color(base);
        assert!(pressed.r < resting.r);

        button.widget_base_mut().set_enabled(false);
        assert_eq!(
            button.background_color(base),
            Color::from_rgb8(200, 200, 200)
        );
    }

    #[test]
    fn text_color_override() {
        let mut button = make_button("Test");
        let theme_text = Color::BLACK;
        assert_eq!(button.effective_text_color(theme_text), theme_text);

        button.set_text_color(Some(Color::RED));
        assert_eq!(button.effective_text_color(theme_text), Color::RED);

        button.widget_base_mut().set_enabled(false);
        assert_eq!(
            button.effective_text_color(theme_text),
            Color::from_rgb8(128, 128, 128)
        );
    }
}
