//! Widget event types.
//!
//! Events are delivered to widgets by the host through
//! [`Widget::event`](super::Widget::event). Each event embeds an
//! [`EventBase`] carrying the accepted flag: a widget that handles an event
//! calls [`WidgetEvent::accept`] so the host stops propagating it.

use emberglow_core::TimerId;
use emberglow_render::{Point, Rect, Size};
use emberglow_style::Theme;

/// Common data for all widget events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing it to propagate.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Paint event, sent when a widget needs to be repainted.
#[derive(Debug, Clone, Copy)]
pub struct PaintEvent {
    /// Base event data.
    pub base: EventBase,
    /// The region that needs repainting (widget-local coordinates).
    pub rect: Rect,
}

impl PaintEvent {
    /// Create a new paint event for the given region.
    pub fn new(rect: Rect) -> Self {
        Self {
            base: EventBase::new(),
            rect,
        }
    }

    /// Create a paint event for the entire widget area.
    pub fn full(size: Size) -> Self {
        Self::new(Rect::new(0.0, 0.0, size.width, size.height))
    }
}

/// Resize event, sent when a widget's size changes.
#[derive(Debug, Clone, Copy)]
pub struct ResizeEvent {
    /// Base event data.
    pub base: EventBase,
    /// The size before the change.
    pub old_size: Size,
    /// The size after the change.
    pub new_size: Size,
}

impl ResizeEvent {
    /// Create a new resize event.
    pub fn new(old_size: Size, new_size: Size) -> Self {
        Self {
            base: EventBase::new(),
            old_size,
            new_size,
        }
    }
}

/// A mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left/primary button.
    Left,
    /// Right/secondary button.
    Right,
    /// Middle button (wheel click).
    Middle,
}

/// Modifier keys held during an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardModifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Mouse press event.
#[derive(Debug, Clone, Copy)]
pub struct MousePressEvent {
    /// Base event data.
    pub base: EventBase,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
    /// The button that was pressed.
    pub button: MouseButton,
    /// Modifier keys held during the press.
    pub modifiers: KeyboardModifiers,
}

impl MousePressEvent {
    /// Create a new mouse press event.
    pub fn new(local_pos: Point, button: MouseButton) -> Self {
        Self {
            base: EventBase::new(),
            local_pos,
            button,
            modifiers: KeyboardModifiers::default(),
        }
    }
}

/// Mouse release event.
#[derive(Debug, Clone, Copy)]
pub struct MouseReleaseEvent {
    /// Base event data.
    pub base: EventBase,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
    /// The button that was released.
    pub button: MouseButton,
    /// Modifier keys held during the release.
    pub modifiers: KeyboardModifiers,
}

impl MouseReleaseEvent {
    /// Create a new mouse release event.
    pub fn new(local_pos: Point, button: MouseButton) -> Self {
        Self {
            base: EventBase::new(),
            local_pos,
            button,
            modifiers: KeyboardModifiers::default(),
        }
    }
}

/// Enter event, sent when the pointer enters the widget area.
#[derive(Debug, Clone, Copy)]
pub struct EnterEvent {
    /// Base event data.
    pub base: EventBase,
    /// The position where the pointer entered.
    pub local_pos: Point,
}

impl EnterEvent {
    /// Create a new enter event.
    pub fn new(local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            local_pos,
        }
    }
}

/// Leave event, sent when the pointer leaves the widget area.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeaveEvent {
    /// Base event data.
    pub base: EventBase,
}

impl LeaveEvent {
    /// Create a new leave event.
    pub fn new() -> Self {
        Self {
            base: EventBase::new(),
        }
    }
}

/// A keyboard key.
///
/// Only the keys the widget set reacts to are modeled; everything else
/// arrives as `Character`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Enter,
    Escape,
    Tab,
    /// Any other printable key.
    Character(char),
}

/// Key press event.
#[derive(Debug, Clone, Copy)]
pub struct KeyPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was pressed.
    pub key: Key,
    /// Modifier keys held during the press.
    pub modifiers: KeyboardModifiers,
    /// Whether this is an auto-repeat of a held key.
    pub is_repeat: bool,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(key: Key) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers: KeyboardModifiers::default(),
            is_repeat: false,
        }
    }
}

/// Key release event.
#[derive(Debug, Clone, Copy)]
pub struct KeyReleaseEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was released.
    pub key: Key,
    /// Modifier keys held during the release.
    pub modifiers: KeyboardModifiers,
}

impl KeyReleaseEvent {
    /// Create a new key release event.
    pub fn new(key: Key) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers: KeyboardModifiers::default(),
        }
    }
}

/// Timer event, sent when a widget-owned timer fires.
///
/// Widgets start timers through [`super::widget_timer`] and receive one of
/// these per fire; animation ticks arrive this way.
#[derive(Debug, Clone, Copy)]
pub struct TimerEvent {
    /// Base event data.
    pub base: EventBase,
    /// The ID of the timer that fired.
    pub id: TimerId,
}

impl TimerEvent {
    /// Create a new timer event.
    pub fn new(id: TimerId) -> Self {
        Self {
            base: EventBase::new(),
            id,
        }
    }
}

/// Theme change event, sent when the active theme is replaced.
///
/// The host delivers this explicitly to every widget; widgets re-derive
/// their colors from the carried theme rather than consulting any global.
#[derive(Debug, Clone)]
pub struct ThemeChangeEvent {
    /// Base event data.
    pub base: EventBase,
    /// The newly active theme.
    pub theme: Theme,
}

impl ThemeChangeEvent {
    /// Create a new theme change event.
    pub fn new(theme: Theme) -> Self {
        Self {
            base: EventBase::new(),
            theme,
        }
    }
}

/// The events a widget can receive.
#[derive(Debug, Clone)]
pub enum WidgetEvent {
    /// Paint event.
    Paint(PaintEvent),
    /// Resize event.
    Resize(ResizeEvent),
    /// Mouse press event.
    MousePress(MousePressEvent),
    /// Mouse release event.
    MouseRelease(MouseReleaseEvent),
    /// Pointer enter event.
    Enter(EnterEvent),
    /// Pointer leave event.
    Leave(LeaveEvent),
    /// Key press event.
    KeyPress(KeyPressEvent),
    /// Key release event.
    KeyRelease(KeyReleaseEvent),
    /// Timer event.
    Timer(TimerEvent),
    /// Theme change event.
    ThemeChange(ThemeChangeEvent),
}

impl WidgetEvent {
    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        match self {
            Self::Paint(e) => e.base.is_accepted(),
            Self::Resize(e) => e.base.is_accepted(),
            Self::MousePress(e) => e.base.is_accepted(),
            Self::MouseRelease(e) => e.base.is_accepted(),
            Self::Enter(e) => e.base.is_accepted(),
            Self::Leave(e) => e.base.is_accepted(),
            Self::KeyPress(e) => e.base.is_accepted(),
            Self::KeyRelease(e) => e.base.is_accepted(),
            Self::Timer(e) => e.base.is_accepted(),
            Self::ThemeChange(e) => e.base.is_accepted(),
        }
    }

    /// Accept the event.
    pub fn accept(&mut self) {
        match self {
            Self::Paint(e) => e.base.accept(),
            Self::Resize(e) => e.base.accept(),
            Self::MousePress(e) => e.base.accept(),
            Self::MouseRelease(e) => e.base.accept(),
            Self::Enter(e) => e.base.accept(),
            Self::Leave(e) => e.base.accept(),
            Self::KeyPress(e) => e.base.accept(),
            Self::KeyRelease(e) => e.base.accept(),
            Self::Timer(e) => e.base.accept(),
            Self::ThemeChange(e) => e.base.accept(),
        }
    }
}
